//! Input validation for secret and IAM operations.
//!
//! Validates project identifiers, secret names and locations before any
//! collaborator is called.

use crate::core::constants::MAX_SECRET_NAME_LEN;
use crate::error::{Result, ValidationError};

/// Validate a project number.
///
/// Project numbers feed the default service account naming convention, so
/// they must be non-empty and contain only ASCII alphanumerics or `-`.
///
/// # Errors
///
/// Returns `ValidationError` if the project number is malformed.
pub fn validate_project_number(number: &str) -> Result<()> {
    if number.is_empty() {
        return Err(ValidationError::EmptyProjectNumber.into());
    }

    if let Some((i, ch)) = number
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '-')
    {
        return Err(ValidationError::InvalidProjectNumber {
            value: number.to_string(),
            reason: format!("invalid character '{}' at position {}", ch, i + 1),
        }
        .into());
    }

    Ok(())
}

/// Validate a project id.
///
/// # Errors
///
/// Returns `ValidationError` if the id is empty or contains whitespace or `/`.
pub fn validate_project_id(project: &str) -> Result<()> {
    if project.is_empty() {
        return Err(ValidationError::EmptyProjectId.into());
    }

    if project.chars().any(|ch| ch.is_whitespace() || ch == '/') {
        return Err(ValidationError::InvalidProjectId {
            value: project.to_string(),
            reason: "cannot contain whitespace or '/'".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate a secret name.
///
/// Secret ids must be 1-255 characters of A-Z, a-z, 0-9, `_` or `-`.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptySecretName.into());
    }

    if name.len() > MAX_SECRET_NAME_LEN {
        return Err(ValidationError::InvalidSecretName {
            name: name.to_string(),
            reason: format!("longer than {} characters", MAX_SECRET_NAME_LEN),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            return Err(ValidationError::InvalidSecretName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, '_' and '-' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a replication location.
///
/// # Errors
///
/// Returns `ValidationError` if the location is empty or contains whitespace.
pub fn validate_location(location: &str) -> Result<()> {
    if location.is_empty() || location.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidLocation {
            value: location.to_string(),
            reason: "must be a single region name such as us-central1".to_string(),
        }
        .into());
    }

    Ok(())
}
