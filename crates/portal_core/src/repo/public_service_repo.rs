//! Public services repository contract and SQLite implementation.

use crate::model::public_service::{NewPublicService, PublicService, PublicServicePatch};
use crate::model::EntityId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

const SERVICE_SELECT_SQL: &str = "SELECT id, title, description, icon, link FROM services";

/// Repository interface for public services.
pub trait PublicServiceRepository {
    fn create_service(&self, input: &NewPublicService) -> RepoResult<PublicService>;
    fn get_service(&self, id: EntityId) -> RepoResult<Option<PublicService>>;
    /// Stable insertion order (`id ASC`).
    fn list_services(&self) -> RepoResult<Vec<PublicService>>;
    fn update_service(
        &self,
        id: EntityId,
        patch: &PublicServicePatch,
    ) -> RepoResult<Option<PublicService>>;
    fn delete_service(&self, id: EntityId) -> RepoResult<bool>;
}

/// SQLite-backed public services repository.
pub struct SqlitePublicServiceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePublicServiceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PublicServiceRepository for SqlitePublicServiceRepository<'_> {
    fn create_service(&self, input: &NewPublicService) -> RepoResult<PublicService> {
        self.conn.execute(
            "INSERT INTO services (title, description, icon, link) VALUES (?1, ?2, ?3, ?4);",
            params![
                input.title.as_str(),
                input.description.as_str(),
                input.icon.as_str(),
                input.link.as_str(),
            ],
        )?;

        Ok(PublicService {
            id: self.conn.last_insert_rowid(),
            title: input.title.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            link: input.link.clone(),
        })
    }

    fn get_service(&self, id: EntityId) -> RepoResult<Option<PublicService>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SERVICE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_service_row(row)?));
        }
        Ok(None)
    }

    fn list_services(&self) -> RepoResult<Vec<PublicService>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SERVICE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_service_row(row)?);
        }
        Ok(items)
    }

    fn update_service(
        &self,
        id: EntityId,
        patch: &PublicServicePatch,
    ) -> RepoResult<Option<PublicService>> {
        let mut record = match self.get_service(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        patch.apply_to(&mut record);

        self.conn.execute(
            "UPDATE services
             SET title = ?1, description = ?2, icon = ?3, link = ?4
             WHERE id = ?5;",
            params![
                record.title.as_str(),
                record.description.as_str(),
                record.icon.as_str(),
                record.link.as_str(),
                id,
            ],
        )?;

        Ok(Some(record))
    }

    fn delete_service(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM services WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_service_row(row: &Row<'_>) -> RepoResult<PublicService> {
    Ok(PublicService {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        icon: row.get("icon")?,
        link: row.get("link")?,
    })
}
