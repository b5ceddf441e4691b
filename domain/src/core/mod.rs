//! Core domain concepts shared across all subdomains.
//!
//! - [`caller::CallerId`]: identity every lookup is scoped to
//! - [`error::DomainError`]: domain-level errors

pub mod caller;
pub mod error;
