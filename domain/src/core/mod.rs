//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — oracle models used for reasoning and vision
//! - [`error::DomainError`] — domain-level validation errors

pub mod error;
pub mod model;
pub mod string;
