//! Repository layer: per-kind CRUD contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define data access contracts for the seven content collections.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Absence is reported as `Ok(None)` / `Ok(false)`, never as an error.
//! - Repositories perform no input validation; that is the service
//!   layer's job before any write reaches this boundary.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_repo;
pub mod department_repo;
pub mod document_repo;
pub mod news_repo;
pub mod official_repo;
pub mod public_service_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-layer failure for repository operations.
///
/// "Not found" is not an error here; lookups return `Option`.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Decodes a stored boolean column, rejecting anything but 0/1.
pub(crate) fn flag_from_int(value: i64, column: &'static str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}
