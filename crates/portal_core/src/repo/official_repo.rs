//! Officials repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listings keep stable insertion order (`id ASC`).
//! - Leadership is a query-time predicate: case-sensitive substring match
//!   on the free-text `position`, no stored flag.

use crate::model::official::{NewOfficial, Official, OfficialPatch};
use crate::model::EntityId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Params, Row};

const OFFICIAL_SELECT_SQL: &str = "SELECT
    id,
    name,
    position,
    image,
    description,
    social_media
FROM officials";

/// Repository interface for government officials.
pub trait OfficialRepository {
    fn create_official(&self, input: &NewOfficial) -> RepoResult<Official>;
    fn get_official(&self, id: EntityId) -> RepoResult<Option<Official>>;
    fn list_officials(&self) -> RepoResult<Vec<Official>>;
    /// Officials whose position text contains "Gubernur" or
    /// "Wakil Gubernur". Works because position titles are controlled
    /// vocabulary; see DESIGN.md for the recorded fragility.
    fn list_leadership_officials(&self) -> RepoResult<Vec<Official>>;
    fn update_official(&self, id: EntityId, patch: &OfficialPatch) -> RepoResult<Option<Official>>;
    fn delete_official(&self, id: EntityId) -> RepoResult<bool>;
}

/// SQLite-backed officials repository.
pub struct SqliteOfficialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOfficialRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_officials<P: Params>(&self, sql: &str, params: P) -> RepoResult<Vec<Official>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_official_row(row)?);
        }
        Ok(items)
    }
}

impl OfficialRepository for SqliteOfficialRepository<'_> {
    fn create_official(&self, input: &NewOfficial) -> RepoResult<Official> {
        self.conn.execute(
            "INSERT INTO officials (
                name,
                position,
                image,
                description,
                social_media
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                input.name.as_str(),
                input.position.as_str(),
                input.image.as_str(),
                input.description.as_str(),
                input.social_media.as_str(),
            ],
        )?;

        Ok(Official {
            id: self.conn.last_insert_rowid(),
            name: input.name.clone(),
            position: input.position.clone(),
            image: input.image.clone(),
            description: input.description.clone(),
            social_media: input.social_media.clone(),
        })
    }

    fn get_official(&self, id: EntityId) -> RepoResult<Option<Official>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{OFFICIAL_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_official_row(row)?));
        }
        Ok(None)
    }

    fn list_officials(&self) -> RepoResult<Vec<Official>> {
        self.query_officials(&format!("{OFFICIAL_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn list_leadership_officials(&self) -> RepoResult<Vec<Official>> {
        // instr() is case-sensitive, unlike LIKE. The second marker is kept
        // to mirror the classification vocabulary even though the first
        // already covers it as a substring.
        self.query_officials(
            &format!(
                "{OFFICIAL_SELECT_SQL}
                 WHERE instr(position, 'Gubernur') > 0
                    OR instr(position, 'Wakil Gubernur') > 0
                 ORDER BY id ASC;"
            ),
            [],
        )
    }

    fn update_official(&self, id: EntityId, patch: &OfficialPatch) -> RepoResult<Option<Official>> {
        let mut record = match self.get_official(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        patch.apply_to(&mut record);

        self.conn.execute(
            "UPDATE officials
             SET
                name = ?1,
                position = ?2,
                image = ?3,
                description = ?4,
                social_media = ?5
             WHERE id = ?6;",
            params![
                record.name.as_str(),
                record.position.as_str(),
                record.image.as_str(),
                record.description.as_str(),
                record.social_media.as_str(),
                id,
            ],
        )?;

        Ok(Some(record))
    }

    fn delete_official(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM officials WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_official_row(row: &Row<'_>) -> RepoResult<Official> {
    Ok(Official {
        id: row.get("id")?,
        name: row.get("name")?,
        position: row.get("position")?,
        image: row.get("image")?,
        description: row.get("description")?,
        social_media: row.get("social_media")?,
    })
}
