//! Shared CLI output helpers and the terminal notifier.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: secret names, hints
//! - Bold: labels
//! - Dimmed: secondary info

use console::style;
use tracing::debug;

use crate::core::notify::Notifier;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created API_KEY`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ project id cannot be empty`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ skipped IAM grant`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: gcloud auth login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `secret left unchanged`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a list item with bullet.
///
/// Example: `  • 123@cloudbuild.gserviceaccount.com`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Format a secret name in cyan.
///
/// Returns a colored string that can be used inline.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a diagnostic label (`apphosting:`) in bold.
fn label(l: &str) -> String {
    if colors_enabled() {
        style(format!("{}:", l)).bold().to_string()
    } else {
        format!("{}:", l)
    }
}

/// Notifier printing to the terminal.
///
/// Messages are mirrored as debug events so `--verbose` logs keep them in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Notifier for Terminal {
    fn success(&self, message: &str) {
        debug!(kind = "success", "{}", message);
        success(message);
    }

    fn labeled_warning(&self, l: &str, message: &str) {
        debug!(kind = "warning", label = l, "{}", message);
        warn(&format!("{} {}", label(l), message));
    }

    fn labeled_error(&self, l: &str, message: &str) {
        debug!(kind = "error", label = l, "{}", message);
        error(&format!("{} {}", label(l), message));
    }
}
