//! Use-case services over the content repositories.
//!
//! # Responsibility
//! - Validate inputs before any write reaches the repository layer.
//! - Orchestrate repository calls into route-facing APIs.
//!
//! # Invariants
//! - Services never bypass model validation on writes.
//! - Services remain storage-agnostic: each is generic over its
//!   repository trait(s).

use crate::model::ValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_service;
pub mod directory_service;
pub mod document_service;
pub mod news_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case failure: rejected input or a storage-layer fault.
///
/// Absence of a record is not an error at this level either; use-case
/// methods return `Option`/`bool` exactly like the repositories.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
