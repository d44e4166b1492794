//! Visitor contact message model.
//!
//! # Invariants
//! - `submitted_at` and `is_read` are assigned by the storage layer at
//!   creation; the insert input deliberately carries neither field.
//! - A stored message is immutable except for the one-way `is_read`
//!   transition.

use crate::model::{require, EntityId, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    /// Unix epoch milliseconds, stamped at creation.
    pub submitted_at: i64,
    /// Transitions false -> true exactly once, via mark-as-read.
    pub is_read: bool,
}

/// Insert input for [`ContactMessage`].
///
/// `submitted_at` and `is_read` are intentionally absent so callers
/// cannot supply them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    /// Validates the public form input before submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }
}
