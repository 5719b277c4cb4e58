//! Core library components.
//!
//! This module contains the reusable business logic for secret lifecycle and
//! IAM access management. Remote services, prompts and output are reached
//! only through the capability traits in `store`, `prompt` and `notify`.

pub mod accounts;
pub mod config;
pub mod constants;
pub mod domain;
pub mod iam;
pub mod lifecycle;
pub mod notify;
pub mod prompt;
pub mod provision;
pub mod store;
pub mod types;
pub mod validation;
