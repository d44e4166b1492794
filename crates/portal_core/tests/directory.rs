use portal_core::db::open_db_in_memory;
use portal_core::{
    DepartmentPatch, DepartmentRepository, DirectoryService, NewDepartment, NewPublicService,
    PublicServicePatch, PublicServiceRepository, ServiceError, SqliteDepartmentRepository,
    SqliteOfficialRepository, SqlitePublicServiceRepository, ValidationError,
};

fn department(name: &str) -> NewDepartment {
    NewDepartment {
        name: name.to_string(),
        description: format!("Melaksanakan urusan {name}."),
    }
}

fn public_service(title: &str) -> NewPublicService {
    NewPublicService {
        title: title.to_string(),
        description: format!("Layanan {title} untuk masyarakat."),
        icon: "id-card".to_string(),
        link: format!("#{}", title.to_lowercase().replace(' ', "-")),
    }
}

#[test]
fn departments_keep_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    repo.create_department(&department("Sekretariat Daerah")).unwrap();
    repo.create_department(&department("Dinas Pendidikan")).unwrap();
    repo.create_department(&department("Dinas Kesehatan")).unwrap();

    let names: Vec<_> = repo
        .list_departments()
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(
        names,
        vec!["Sekretariat Daerah", "Dinas Pendidikan", "Dinas Kesehatan"]
    );
}

#[test]
fn department_update_and_delete_semantics() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let created = repo.create_department(&department("Dinas Perhubungan")).unwrap();

    let patch = DepartmentPatch {
        description: Some("Urusan perhubungan dan lalu lintas.".to_string()),
        ..DepartmentPatch::default()
    };
    let updated = repo.update_department(created.id, &patch).unwrap().unwrap();
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, "Urusan perhubungan dan lalu lintas.");

    assert!(repo.update_department(7, &patch).unwrap().is_none());
    assert!(repo.delete_department(created.id).unwrap());
    assert!(repo.get_department(created.id).unwrap().is_none());
}

#[test]
fn services_keep_insertion_order_and_patch_cleanly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePublicServiceRepository::new(&conn);

    repo.create_service(&public_service("Layanan Kependudukan")).unwrap();
    let second = repo.create_service(&public_service("Perizinan Usaha")).unwrap();

    let titles: Vec<_> = repo
        .list_services()
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, vec!["Layanan Kependudukan", "Perizinan Usaha"]);

    let patch = PublicServicePatch {
        icon: Some("briefcase".to_string()),
        ..PublicServicePatch::default()
    };
    let updated = repo.update_service(second.id, &patch).unwrap().unwrap();
    assert_eq!(updated.icon, "briefcase");
    assert_eq!(updated.link, second.link);
}

#[test]
fn directory_service_validates_departments_and_services() {
    let conn = open_db_in_memory().unwrap();
    let service = DirectoryService::new(
        SqliteOfficialRepository::new(&conn),
        SqliteDepartmentRepository::new(&conn),
        SqlitePublicServiceRepository::new(&conn),
    );

    let mut blank_department = department("Dinas Sosial");
    blank_department.name = String::new();
    let err = service.create_department(&blank_department).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("name"))
    ));

    let mut blank_service = public_service("Layanan Kesehatan");
    blank_service.icon = " ".to_string();
    let err = service.create_service(&blank_service).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("icon"))
    ));

    assert!(service.list_departments().unwrap().is_empty());
    assert!(service.list_services().unwrap().is_empty());
}

#[test]
fn patch_validation_rejects_blanking_a_required_field() {
    let conn = open_db_in_memory().unwrap();
    let service = DirectoryService::new(
        SqliteOfficialRepository::new(&conn),
        SqliteDepartmentRepository::new(&conn),
        SqlitePublicServiceRepository::new(&conn),
    );

    let created = service.create_department(&department("Dinas Sosial")).unwrap();

    let patch = DepartmentPatch {
        name: Some("  ".to_string()),
        ..DepartmentPatch::default()
    };
    let err = service.update_department(created.id, &patch).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("name"))
    ));

    let reloaded = service.get_department(created.id).unwrap().unwrap();
    assert_eq!(reloaded.name, "Dinas Sosial");
}
