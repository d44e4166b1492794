use portal_core::db::open_db_in_memory;
use portal_core::seed::seed_default_content;
use portal_core::{
    ContactMessageRepository, DepartmentRepository, DocumentCategoryRepository,
    DocumentRepository, NewsRepository, OfficialRepository, PublicServiceRepository,
    SqliteContactMessageRepository, SqliteDepartmentRepository,
    SqliteDocumentCategoryRepository, SqliteDocumentRepository, SqliteNewsRepository,
    SqliteOfficialRepository, SqlitePublicServiceRepository,
};

#[test]
fn seed_populates_every_collection() {
    let conn = open_db_in_memory().unwrap();

    assert!(seed_default_content(&conn).unwrap());

    assert_eq!(SqliteNewsRepository::new(&conn).list_news().unwrap().len(), 4);
    assert_eq!(
        SqliteOfficialRepository::new(&conn)
            .list_officials()
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        SqliteDepartmentRepository::new(&conn)
            .list_departments()
            .unwrap()
            .len(),
        6
    );
    assert_eq!(
        SqlitePublicServiceRepository::new(&conn)
            .list_services()
            .unwrap()
            .len(),
        4
    );
    assert_eq!(
        SqliteDocumentCategoryRepository::new(&conn)
            .list_categories()
            .unwrap()
            .len(),
        3
    );
    assert_eq!(
        SqliteDocumentRepository::new(&conn)
            .list_documents()
            .unwrap()
            .len(),
        4
    );
    // Contact messages only ever come from visitors.
    assert!(SqliteContactMessageRepository::new(&conn)
        .list_messages()
        .unwrap()
        .is_empty());
}

#[test]
fn seed_is_idempotent() {
    let conn = open_db_in_memory().unwrap();

    assert!(seed_default_content(&conn).unwrap());
    assert!(!seed_default_content(&conn).unwrap());

    assert_eq!(SqliteNewsRepository::new(&conn).list_news().unwrap().len(), 4);
}

#[test]
fn seeded_content_satisfies_the_portal_queries() {
    let conn = open_db_in_memory().unwrap();
    seed_default_content(&conn).unwrap();

    let news = SqliteNewsRepository::new(&conn);
    let featured = news.list_featured_news().unwrap();
    assert_eq!(featured.len(), 1);
    assert!(featured[0].title.contains("Jembatan"));

    let latest = news.list_latest_news(2).unwrap();
    assert_eq!(latest.len(), 2);
    assert!(latest[0].publish_date >= latest[1].publish_date);

    let leadership = SqliteOfficialRepository::new(&conn)
        .list_leadership_officials()
        .unwrap();
    let positions: Vec<_> = leadership
        .iter()
        .map(|item| item.position.as_str())
        .collect();
    assert_eq!(
        positions,
        vec![
            "Gubernur Kalimantan Selatan",
            "Wakil Gubernur Kalimantan Selatan"
        ]
    );

    // One seeded document references a category with no stored row; the
    // dataset intentionally ships that drift.
    let orphaned = SqliteDocumentRepository::new(&conn)
        .list_documents_by_category("Keputusan Gubernur")
        .unwrap();
    assert_eq!(orphaned.len(), 1);
}
