//! Content repository core for the Kalimantan Selatan provincial portal.
//! This crate is the single source of truth for content invariants:
//! identity assignment, listing order, and filter semantics.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactMessage, NewContactMessage};
pub use model::department::{Department, DepartmentPatch, NewDepartment};
pub use model::document::{
    Document, DocumentCategory, DocumentCategoryPatch, DocumentPatch, NewDocument,
    NewDocumentCategory,
};
pub use model::news::{News, NewNews, NewsPatch};
pub use model::official::{
    encode_social_links, parse_social_links, NewOfficial, Official, OfficialPatch, SocialLinks,
};
pub use model::public_service::{NewPublicService, PublicService, PublicServicePatch};
pub use model::{EntityId, ValidationError};
pub use repo::contact_repo::{ContactMessageRepository, SqliteContactMessageRepository};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::document_repo::{
    DocumentCategoryRepository, DocumentRepository, SqliteDocumentCategoryRepository,
    SqliteDocumentRepository,
};
pub use repo::news_repo::{NewsRepository, SqliteNewsRepository};
pub use repo::official_repo::{OfficialRepository, SqliteOfficialRepository};
pub use repo::public_service_repo::{PublicServiceRepository, SqlitePublicServiceRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::seed_default_content;
pub use service::contact_service::ContactService;
pub use service::directory_service::DirectoryService;
pub use service::document_service::DocumentService;
pub use service::news_service::NewsService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
