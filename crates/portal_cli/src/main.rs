//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portal_core` wiring: open an
//!   in-memory store, seed the default dataset, print collection totals.
//! - Keep output deterministic for quick local sanity checks.

use portal_core::db::open_db_in_memory;
use portal_core::repo::contact_repo::{ContactMessageRepository, SqliteContactMessageRepository};
use portal_core::repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
use portal_core::repo::document_repo::{
    DocumentCategoryRepository, DocumentRepository, SqliteDocumentCategoryRepository,
    SqliteDocumentRepository,
};
use portal_core::repo::news_repo::{NewsRepository, SqliteNewsRepository};
use portal_core::repo::official_repo::{OfficialRepository, SqliteOfficialRepository};
use portal_core::repo::public_service_repo::{
    PublicServiceRepository, SqlitePublicServiceRepository,
};
use portal_core::seed::seed_default_content;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("portal_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let seeded = seed_default_content(&conn)?;

    println!("portal_core version={}", portal_core::core_version());
    println!("seeded={seeded}");
    println!("news={}", SqliteNewsRepository::new(&conn).list_news()?.len());
    println!(
        "officials={}",
        SqliteOfficialRepository::new(&conn).list_officials()?.len()
    );
    println!(
        "departments={}",
        SqliteDepartmentRepository::new(&conn)
            .list_departments()?
            .len()
    );
    println!(
        "services={}",
        SqlitePublicServiceRepository::new(&conn)
            .list_services()?
            .len()
    );
    println!(
        "documents={}",
        SqliteDocumentRepository::new(&conn).list_documents()?.len()
    );
    println!(
        "document_categories={}",
        SqliteDocumentCategoryRepository::new(&conn)
            .list_categories()?
            .len()
    );
    println!(
        "contact_messages={}",
        SqliteContactMessageRepository::new(&conn)
            .list_messages()?
            .len()
    );

    Ok(())
}
