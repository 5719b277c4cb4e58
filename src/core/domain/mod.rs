//! Domain types.

mod backend;
pub mod identity;
mod outcome;
pub mod policy;
pub mod secret;

pub use backend::Backend;
pub use identity::Identity;
pub use outcome::EnsureOutcome;
pub use policy::{Binding, Policy, Role};
pub use secret::{Ownership, Replica, Replication, Secret, UserManaged};
