//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, trimmed copilot question
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
