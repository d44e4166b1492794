//! Domain model for the portal content repository.
//!
//! # Responsibility
//! - Define the seven content entity kinds, their insert inputs and
//!   partial-update patches.
//! - Provide input validation used by the service layer before writes.
//!
//! # Invariants
//! - Every entity is identified by a repository-assigned `EntityId`.
//! - Patch types carry `Option` per field; `None` means "keep current".
//! - Validation never runs inside the repository layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact;
pub mod department;
pub mod document;
pub mod news;
pub mod official;
pub mod public_service;

/// Repository-assigned integer identity, strictly increasing per entity
/// kind and never reused, which makes it safe as a stable URL reference.
pub type EntityId = i64;

/// Input validation failure, named after the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    MissingField(&'static str),
    /// Email address does not match the accepted format.
    InvalidEmail(String),
    /// Social media payload is not a JSON object of platform -> URL.
    InvalidSocialMedia(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::InvalidSocialMedia(details) => {
                write!(f, "social media payload is not a JSON link map: {details}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Rejects missing or whitespace-only required fields.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Same rule as [`require`], applied only when a patch carries the field.
pub(crate) fn require_present(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        Some(text) => require(field, text),
        None => Ok(()),
    }
}
