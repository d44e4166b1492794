use portal_core::db::open_db_in_memory;
use portal_core::{
    encode_social_links, NewOfficial, OfficialPatch, OfficialRepository, ServiceError,
    SocialLinks, SqliteOfficialRepository, ValidationError,
};
use portal_core::{
    DirectoryService, SqliteDepartmentRepository, SqlitePublicServiceRepository,
};

fn official(name: &str, position: &str) -> NewOfficial {
    NewOfficial {
        name: name.to_string(),
        position: position.to_string(),
        image: "https://example.com/potret.jpg".to_string(),
        description: format!("{position} periode 2022-2027"),
        social_media: "{}".to_string(),
    }
}

#[test]
fn leadership_is_classified_from_position_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOfficialRepository::new(&conn);

    let governor = repo
        .create_official(&official("H. Sahbirin Noor", "Gubernur Kalimantan Selatan"))
        .unwrap();
    let vice_governor = repo
        .create_official(&official("H. Muhidin", "Wakil Gubernur Kalimantan Selatan"))
        .unwrap();
    repo.create_official(&official("Hj. Raudatul", "Kepala Dinas Pendidikan"))
        .unwrap();

    let leadership = repo.list_leadership_officials().unwrap();
    let ids: Vec<_> = leadership.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![governor.id, vice_governor.id]);
}

#[test]
fn leadership_match_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOfficialRepository::new(&conn);

    repo.create_official(&official("Tokoh", "gubernur kehormatan"))
        .unwrap();

    assert!(repo.list_leadership_officials().unwrap().is_empty());
}

#[test]
fn listing_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOfficialRepository::new(&conn);

    repo.create_official(&official("Pertama", "Sekretaris Daerah"))
        .unwrap();
    repo.create_official(&official("Kedua", "Kepala Dinas Kesehatan"))
        .unwrap();
    repo.create_official(&official("Ketiga", "Kepala Dinas Sosial"))
        .unwrap();

    let names: Vec<_> = repo
        .list_officials()
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["Pertama", "Kedua", "Ketiga"]);
}

#[test]
fn social_links_survive_storage_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOfficialRepository::new(&conn);

    let mut links = SocialLinks::new();
    links.insert(
        "instagram".to_string(),
        "https://instagram.com/kalselprov".to_string(),
    );
    links.insert(
        "twitter".to_string(),
        "https://twitter.com/kalselprov".to_string(),
    );

    let mut input = official("H. Sahbirin Noor", "Gubernur Kalimantan Selatan");
    input.social_media = encode_social_links(&links);
    let created = repo.create_official(&input).unwrap();

    let loaded = repo.get_official(created.id).unwrap().unwrap();
    assert_eq!(loaded.social_links().unwrap(), links);
}

#[test]
fn update_overlays_only_carried_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOfficialRepository::new(&conn);

    let created = repo
        .create_official(&official("H. Muhidin", "Plt. Gubernur Kalimantan Selatan"))
        .unwrap();

    let patch = OfficialPatch {
        position: Some("Gubernur Kalimantan Selatan".to_string()),
        ..OfficialPatch::default()
    };
    let updated = repo.update_official(created.id, &patch).unwrap().unwrap();

    assert_eq!(updated.position, "Gubernur Kalimantan Selatan");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.social_media, created.social_media);
}

#[test]
fn delete_and_missing_lookups_are_explicit() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOfficialRepository::new(&conn);

    assert!(repo.get_official(1).unwrap().is_none());
    assert!(!repo.delete_official(1).unwrap());

    let created = repo
        .create_official(&official("Sementara", "Staf Ahli"))
        .unwrap();
    assert!(repo.delete_official(created.id).unwrap());
    assert!(repo.get_official(created.id).unwrap().is_none());
}

#[test]
fn directory_service_rejects_malformed_social_media() {
    let conn = open_db_in_memory().unwrap();
    let service = DirectoryService::new(
        SqliteOfficialRepository::new(&conn),
        SqliteDepartmentRepository::new(&conn),
        SqlitePublicServiceRepository::new(&conn),
    );

    let mut input = official("H. Sahbirin Noor", "Gubernur Kalimantan Selatan");
    input.social_media = "bukan-json".to_string();

    let err = service.create_official(&input).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidSocialMedia(_))
    ));
    assert!(service.list_officials().unwrap().is_empty());
}
