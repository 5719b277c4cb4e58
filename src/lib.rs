//! apphosting-secrets - Secret lifecycle and access control for App Hosting backends.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── accounts      # Print resolved service accounts
//! │   ├── ensure        # Create or validate a secret
//! │   ├── grant         # Grant secret access
//! │   ├── provision     # Resolve, ensure and grant in one go
//! │   ├── prompt        # Interactive confirmation
//! │   └── output        # Terminal output and notifier
//! └── core/             # Core library components
//!     ├── accounts      # Service account resolution
//!     ├── iam           # IAM binding reconciliation
//!     ├── lifecycle     # Secret creation and validation
//!     ├── provision     # Per-backend orchestration
//!     ├── domain/       # Backend, Identity, Policy, Secret, ...
//!     ├── store/        # Secret and policy store traits
//!     │   ├── gcloud    # gcloud CLI implementation
//!     │   └── memory    # In-process implementation
//!     ├── prompt        # Confirmation trait
//!     ├── notify        # Notification trait
//!     └── config        # apphosting.secrets.toml management
//! ```
//!
//! # Flow
//!
//! For each backend: resolve identities, ensure the secret exists and is
//! compatible, then grant access. A secret whose check aborted is never
//! granted.

pub mod cli;
pub mod core;
pub mod error;
