//! Contact form use-case service.
//!
//! # Invariants
//! - The public boundary is submit-only: listing, mark-as-read, and
//!   delete are for the administrative side.
//! - Submission stamps `submitted_at` and `is_read = false` server-side;
//!   caller-supplied values cannot reach those fields.

use crate::model::contact::{ContactMessage, NewContactMessage};
use crate::model::EntityId;
use crate::repo::contact_repo::ContactMessageRepository;
use crate::service::ServiceResult;

/// Contact messages facade over a repository implementation.
pub struct ContactService<R: ContactMessageRepository> {
    repo: R,
}

impl<R: ContactMessageRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates the form input (including email format) and stores the
    /// message with a server-assigned submission instant.
    pub fn submit_message(&self, input: &NewContactMessage) -> ServiceResult<ContactMessage> {
        input.validate()?;
        Ok(self.repo.create_message(input)?)
    }

    pub fn get_message(&self, id: EntityId) -> ServiceResult<Option<ContactMessage>> {
        Ok(self.repo.get_message(id)?)
    }

    /// All messages, most recently submitted first.
    pub fn list_messages(&self) -> ServiceResult<Vec<ContactMessage>> {
        Ok(self.repo.list_messages()?)
    }

    /// Idempotent read transition; `None` for absent ids.
    pub fn mark_message_read(&self, id: EntityId) -> ServiceResult<Option<ContactMessage>> {
        Ok(self.repo.mark_message_read(id)?)
    }

    pub fn delete_message(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.repo.delete_message(id)?)
    }
}
