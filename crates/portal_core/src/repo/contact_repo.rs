//! Contact messages repository contract and SQLite implementation.
//!
//! # Invariants
//! - `submitted_at` is stamped by SQL at insert time; caller input never
//!   reaches that column.
//! - `is_read` starts false and only transitions via mark-as-read, which
//!   is idempotent.
//! - Listing is ordered most recent first (`submitted_at DESC, id DESC`;
//!   id order is submission order, so the tie-break keeps newest first).

use crate::model::contact::{ContactMessage, NewContactMessage};
use crate::model::EntityId;
use crate::repo::{flag_from_int, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const MESSAGE_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    phone,
    subject,
    message,
    submitted_at,
    is_read
FROM contact_messages";

/// Repository interface for visitor contact messages.
pub trait ContactMessageRepository {
    /// Inserts one message, stamping `submitted_at` and `is_read = false`
    /// server-side, and returns the stored record.
    fn create_message(&self, input: &NewContactMessage) -> RepoResult<ContactMessage>;
    fn get_message(&self, id: EntityId) -> RepoResult<Option<ContactMessage>>;
    /// All messages, most recently submitted first.
    fn list_messages(&self) -> RepoResult<Vec<ContactMessage>>;
    /// Transitions `is_read` to true. Idempotent: marking an already-read
    /// message returns the record unchanged. `None` for absent ids.
    fn mark_message_read(&self, id: EntityId) -> RepoResult<Option<ContactMessage>>;
    fn delete_message(&self, id: EntityId) -> RepoResult<bool>;
}

/// SQLite-backed contact messages repository.
pub struct SqliteContactMessageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactMessageRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactMessageRepository for SqliteContactMessageRepository<'_> {
    fn create_message(&self, input: &NewContactMessage) -> RepoResult<ContactMessage> {
        self.conn.execute(
            "INSERT INTO contact_messages (
                name,
                email,
                phone,
                subject,
                message,
                submitted_at,
                is_read
            ) VALUES (?1, ?2, ?3, ?4, ?5, (strftime('%s', 'now') * 1000), 0);",
            params![
                input.name.as_str(),
                input.email.as_str(),
                input.phone.as_deref(),
                input.subject.as_str(),
                input.message.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_message(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created contact message {id} missing on read-back"))
        })
    }

    fn get_message(&self, id: EntityId) -> RepoResult<Option<ContactMessage>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MESSAGE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_message_row(row)?));
        }
        Ok(None)
    }

    fn list_messages(&self) -> RepoResult<Vec<ContactMessage>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MESSAGE_SELECT_SQL} ORDER BY submitted_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_message_row(row)?);
        }
        Ok(items)
    }

    fn mark_message_read(&self, id: EntityId) -> RepoResult<Option<ContactMessage>> {
        let changed = self.conn.execute(
            "UPDATE contact_messages SET is_read = 1 WHERE id = ?1;",
            [id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_message(id)
    }

    fn delete_message(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM contact_messages WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_message_row(row: &Row<'_>) -> RepoResult<ContactMessage> {
    Ok(ContactMessage {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        subject: row.get("subject")?,
        message: row.get("message")?,
        submitted_at: row.get("submitted_at")?,
        is_read: flag_from_int(row.get("is_read")?, "contact_messages.is_read")?,
    })
}
