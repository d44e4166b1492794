use portal_core::db::open_db_in_memory;
use portal_core::{
    ContactMessageRepository, ContactService, NewContactMessage, ServiceError,
    SqliteContactMessageRepository, ValidationError,
};
use std::time::{SystemTime, UNIX_EPOCH};

fn submission(subject: &str) -> NewContactMessage {
    NewContactMessage {
        name: "Ahmad Rizani".to_string(),
        email: "ahmad@example.com".to_string(),
        phone: Some("0511-1234567".to_string()),
        subject: subject.to_string(),
        message: "Mohon informasi lebih lanjut.".to_string(),
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after unix epoch")
        .as_millis() as i64
}

#[test]
fn submission_is_stamped_server_side() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactMessageRepository::new(&conn);

    let before = now_epoch_ms();
    let created = repo.create_message(&submission("Informasi PPDB")).unwrap();
    let after = now_epoch_ms();

    assert!(!created.is_read);
    // SQL stamps at second granularity; allow the truncated lower bound.
    assert!(created.submitted_at >= before - 1_000);
    assert!(created.submitted_at <= after + 1_000);

    let loaded = repo.get_message(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn listing_is_most_recent_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactMessageRepository::new(&conn);

    let first = repo.create_message(&submission("Pertama")).unwrap();
    let second = repo.create_message(&submission("Kedua")).unwrap();
    let third = repo.create_message(&submission("Ketiga")).unwrap();

    let ids: Vec<_> = repo
        .list_messages()
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[test]
fn mark_as_read_transitions_once_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactMessageRepository::new(&conn);

    let created = repo.create_message(&submission("Aduan jalan rusak")).unwrap();
    assert!(!created.is_read);

    let marked = repo.mark_message_read(created.id).unwrap().unwrap();
    assert!(marked.is_read);

    let marked_again = repo.mark_message_read(created.id).unwrap().unwrap();
    assert!(marked_again.is_read);
    assert_eq!(marked_again, marked);

    // Everything but the flag stays untouched.
    assert_eq!(marked.name, created.name);
    assert_eq!(marked.subject, created.subject);
    assert_eq!(marked.submitted_at, created.submitted_at);
}

#[test]
fn mark_as_read_on_missing_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactMessageRepository::new(&conn);

    assert!(repo.mark_message_read(42).unwrap().is_none());
}

#[test]
fn delete_reports_whether_a_record_was_removed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactMessageRepository::new(&conn);

    let created = repo.create_message(&submission("Sementara")).unwrap();
    assert!(repo.delete_message(created.id).unwrap());
    assert!(repo.get_message(created.id).unwrap().is_none());
    assert!(!repo.delete_message(created.id).unwrap());
}

#[test]
fn service_rejects_invalid_email_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let service = ContactService::new(SqliteContactMessageRepository::new(&conn));

    let mut input = submission("Informasi beasiswa");
    input.email = "bukan-alamat".to_string();

    let err = service.submit_message(&input).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert!(service.list_messages().unwrap().is_empty());
}

#[test]
fn service_accepts_submission_without_phone() {
    let conn = open_db_in_memory().unwrap();
    let service = ContactService::new(SqliteContactMessageRepository::new(&conn));

    let mut input = submission("Tanpa telepon");
    input.phone = None;

    let created = service.submit_message(&input).unwrap();
    assert_eq!(created.phone, None);
    assert!(!created.is_read);
}
