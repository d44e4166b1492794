//! Default portal dataset.
//!
//! # Responsibility
//! - Populate a fresh content store with the initial Kalimantan Selatan
//!   dataset: news, officials, departments, services, document
//!   categories, and documents.
//!
//! # Invariants
//! - Seeding is idempotent: a store that already holds news content is
//!   left untouched.
//! - All inserts go through the repositories, so seeded records get
//!   ordinary identity assignment.

use crate::model::department::NewDepartment;
use crate::model::document::{NewDocument, NewDocumentCategory};
use crate::model::news::NewNews;
use crate::model::official::NewOfficial;
use crate::model::public_service::NewPublicService;
use crate::repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
use crate::repo::document_repo::{
    DocumentCategoryRepository, DocumentRepository, SqliteDocumentCategoryRepository,
    SqliteDocumentRepository,
};
use crate::repo::news_repo::{NewsRepository, SqliteNewsRepository};
use crate::repo::official_repo::{OfficialRepository, SqliteOfficialRepository};
use crate::repo::public_service_repo::{PublicServiceRepository, SqlitePublicServiceRepository};
use crate::repo::RepoResult;
use log::info;
use rusqlite::Connection;

// Publish dates of the initial dataset, epoch milliseconds (UTC).
const JUN_15_2023: i64 = 1_686_787_200_000;
const JUN_12_2023: i64 = 1_686_528_000_000;
const JUN_10_2023: i64 = 1_686_355_200_000;
const JUN_05_2023: i64 = 1_685_923_200_000;
const MAY_20_2023: i64 = 1_684_540_800_000;
const MAY_15_2023: i64 = 1_684_108_800_000;

/// Seeds the default dataset into an empty content store.
///
/// Returns `false` without writing when news content already exists.
pub fn seed_default_content(conn: &Connection) -> RepoResult<bool> {
    let news_repo = SqliteNewsRepository::new(conn);
    if !news_repo.list_news()?.is_empty() {
        info!("event=seed module=seed status=skipped reason=content_present");
        return Ok(false);
    }

    seed_news(&news_repo)?;
    seed_officials(&SqliteOfficialRepository::new(conn))?;
    seed_departments(&SqliteDepartmentRepository::new(conn))?;
    seed_services(&SqlitePublicServiceRepository::new(conn))?;
    seed_document_categories(&SqliteDocumentCategoryRepository::new(conn))?;
    seed_documents(&SqliteDocumentRepository::new(conn))?;

    info!("event=seed module=seed status=ok");
    Ok(true)
}

fn seed_news(repo: &impl NewsRepository) -> RepoResult<()> {
    let items = [
        NewNews {
            title: "Gubernur Kalimantan Selatan Resmikan Jembatan Baru di Banjarmasin"
                .to_string(),
            content: "Jembatan baru yang menghubungkan dua kawasan strategis di Banjarmasin \
                      telah diresmikan. Proyek ini diharapkan dapat meningkatkan konektivitas \
                      dan mendorong pertumbuhan ekonomi wilayah tersebut."
                .to_string(),
            summary: "Jembatan baru yang menghubungkan dua kawasan strategis di Banjarmasin \
                      telah diresmikan."
                .to_string(),
            image: "https://images.unsplash.com/photo-1596422846543-75c6fc197f11".to_string(),
            category: "Infrastruktur".to_string(),
            publish_date: JUN_15_2023,
            featured: true,
        },
        NewNews {
            title: "Pengumuman PPDB Tahun Ajaran 2023/2024 Tingkat SMA/SMK".to_string(),
            content: "Dinas Pendidikan Provinsi Kalimantan Selatan mengumumkan jadwal \
                      Penerimaan Peserta Didik Baru (PPDB) untuk jenjang SMA/SMK \
                      se-Kalimantan Selatan."
                .to_string(),
            summary: "Dinas Pendidikan mengumumkan jadwal PPDB untuk jenjang SMA/SMK tahun \
                      ajaran 2023/2024."
                .to_string(),
            image: "https://images.unsplash.com/photo-1588681664899-f142ff2dc9b1".to_string(),
            category: "Pendidikan".to_string(),
            publish_date: JUN_12_2023,
            featured: false,
        },
        NewNews {
            title: "Festival Budaya Kalimantan Selatan 2023 Akan Digelar Bulan Depan".to_string(),
            content: "Festival Budaya Kalimantan Selatan 2023 akan menampilkan berbagai \
                      kesenian dan budaya khas daerah, seperti tari tradisional, musik, \
                      kuliner, dan kerajinan tangan."
                .to_string(),
            summary: "Festival Budaya Kalimantan Selatan akan menampilkan berbagai kesenian \
                      dan budaya khas daerah."
                .to_string(),
            image: "https://images.unsplash.com/photo-1527525443983-6e60c75fff46".to_string(),
            category: "Budaya".to_string(),
            publish_date: JUN_10_2023,
            featured: false,
        },
        NewNews {
            title: "Pemprov Kalsel Salurkan Bantuan Alat Pertanian untuk Petani Lokal"
                .to_string(),
            content: "Pemerintah Provinsi Kalimantan Selatan menyalurkan bantuan alat \
                      pertanian kepada petani lokal di beberapa kabupaten untuk meningkatkan \
                      produktivitas dan kesejahteraan petani."
                .to_string(),
            summary: "Pemerintah Provinsi Kalimantan Selatan menyalurkan bantuan alat \
                      pertanian kepada petani lokal."
                .to_string(),
            image: "https://images.unsplash.com/photo-1444664597500-035db93e2323".to_string(),
            category: "Pertanian".to_string(),
            publish_date: JUN_05_2023,
            featured: false,
        },
    ];

    for item in &items {
        repo.create_news(item)?;
    }
    Ok(())
}

fn seed_officials(repo: &impl OfficialRepository) -> RepoResult<()> {
    let items = [
        NewOfficial {
            name: "H. Sahbirin Noor, S.Sos., M.H.".to_string(),
            position: "Gubernur Kalimantan Selatan".to_string(),
            image: "https://images.unsplash.com/photo-1560250097-0b93528c311a".to_string(),
            description: "Gubernur Kalimantan Selatan periode 2022-2027".to_string(),
            social_media: r#"{"twitter":"https://twitter.com/sahbirinnoor","instagram":"https://instagram.com/sahbirinnoor","facebook":"https://facebook.com/sahbirinnoor"}"#
                .to_string(),
        },
        NewOfficial {
            name: "H. Muhidin, S.H., M.H.".to_string(),
            position: "Wakil Gubernur Kalimantan Selatan".to_string(),
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e".to_string(),
            description: "Wakil Gubernur Kalimantan Selatan periode 2022-2027".to_string(),
            social_media: r#"{"twitter":"https://twitter.com/muhidin","instagram":"https://instagram.com/muhidin","facebook":"https://facebook.com/muhidin"}"#
                .to_string(),
        },
    ];

    for item in &items {
        repo.create_official(item)?;
    }
    Ok(())
}

fn seed_departments(repo: &impl DepartmentRepository) -> RepoResult<()> {
    let items = [
        (
            "Sekretariat Daerah",
            "Membantu Gubernur dalam penyusunan kebijakan dan koordinasi administratif.",
        ),
        (
            "Dinas Pendidikan",
            "Melaksanakan urusan pemerintahan bidang pendidikan yang menjadi kewenangan daerah.",
        ),
        (
            "Dinas Kesehatan",
            "Melaksanakan urusan pemerintahan bidang kesehatan yang menjadi kewenangan daerah.",
        ),
        (
            "Dinas Pekerjaan Umum",
            "Melaksanakan urusan bidang pekerjaan umum dan penataan ruang.",
        ),
        (
            "Dinas Perhubungan",
            "Melaksanakan urusan pemerintahan bidang perhubungan yang menjadi kewenangan daerah.",
        ),
        (
            "Dinas Sosial",
            "Melaksanakan urusan pemerintahan bidang sosial yang menjadi kewenangan daerah.",
        ),
    ];

    for (name, description) in items {
        repo.create_department(&NewDepartment {
            name: name.to_string(),
            description: description.to_string(),
        })?;
    }
    Ok(())
}

fn seed_services(repo: &impl PublicServiceRepository) -> RepoResult<()> {
    let items = [
        (
            "Layanan Kependudukan",
            "Pengurusan KTP, KK, Akta Kelahiran, dan dokumen kependudukan lainnya.",
            "id-card",
            "#layanan-kependudukan",
        ),
        (
            "Perizinan Usaha",
            "Layanan perizinan untuk membuka dan mengembangkan usaha di Kalimantan Selatan.",
            "briefcase",
            "#layanan-perizinan",
        ),
        (
            "Layanan Kesehatan",
            "Informasi fasilitas kesehatan dan program pelayanan kesehatan masyarakat.",
            "heartbeat",
            "#layanan-kesehatan",
        ),
        (
            "Pendidikan",
            "Informasi sekolah, beasiswa, dan program pendidikan di Kalimantan Selatan.",
            "graduation-cap",
            "#layanan-pendidikan",
        ),
    ];

    for (title, description, icon, link) in items {
        repo.create_service(&NewPublicService {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            link: link.to_string(),
        })?;
    }
    Ok(())
}

fn seed_document_categories(repo: &impl DocumentCategoryRepository) -> RepoResult<()> {
    let items = [
        (
            "Peraturan Daerah",
            "Peraturan Daerah (Perda) Provinsi Kalimantan Selatan yang telah disahkan.",
            "file-alt",
            "secondary",
            45,
        ),
        (
            "Laporan Keuangan",
            "Laporan keuangan dan anggaran Pemerintah Provinsi Kalimantan Selatan.",
            "chart-line",
            "primary",
            23,
        ),
        (
            "Rencana Pembangunan",
            "Dokumen perencanaan pembangunan daerah Kalimantan Selatan.",
            "book",
            "secondary",
            18,
        ),
    ];

    for (name, description, icon, color, documents_count) in items {
        repo.create_category(&NewDocumentCategory {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            documents_count,
        })?;
    }
    Ok(())
}

fn seed_documents(repo: &impl DocumentRepository) -> RepoResult<()> {
    let items = [
        (
            "Perda No. 5 Tahun 2023 Tentang Retribusi Daerah",
            "Peraturan Daerah",
            JUN_12_2023,
            "2.5 MB",
        ),
        (
            "Laporan Realisasi Anggaran Triwulan II 2023",
            "Laporan Keuangan",
            JUN_05_2023,
            "4.2 MB",
        ),
        (
            "RPJMD Provinsi Kalimantan Selatan 2021-2026",
            "Rencana Pembangunan",
            MAY_20_2023,
            "8.7 MB",
        ),
        // Category name with no matching document_categories row; the
        // reference dataset ships this drift and the model allows it.
        (
            "SK Gubernur Tentang UMK 2023",
            "Keputusan Gubernur",
            MAY_15_2023,
            "1.8 MB",
        ),
    ];

    for (name, category, publish_date, size) in items {
        repo.create_document(&NewDocument {
            name: name.to_string(),
            category: category.to_string(),
            publish_date,
            size: size.to_string(),
            file_url: "#download".to_string(),
        })?;
    }
    Ok(())
}
