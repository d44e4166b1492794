//! Departments repository contract and SQLite implementation.

use crate::model::department::{Department, DepartmentPatch, NewDepartment};
use crate::model::EntityId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name, description FROM departments";

/// Repository interface for government departments.
pub trait DepartmentRepository {
    fn create_department(&self, input: &NewDepartment) -> RepoResult<Department>;
    fn get_department(&self, id: EntityId) -> RepoResult<Option<Department>>;
    /// Stable insertion order (`id ASC`).
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    fn update_department(
        &self,
        id: EntityId,
        patch: &DepartmentPatch,
    ) -> RepoResult<Option<Department>>;
    fn delete_department(&self, id: EntityId) -> RepoResult<bool>;
}

/// SQLite-backed departments repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_department(&self, input: &NewDepartment) -> RepoResult<Department> {
        self.conn.execute(
            "INSERT INTO departments (name, description) VALUES (?1, ?2);",
            params![input.name.as_str(), input.description.as_str()],
        )?;

        Ok(Department {
            id: self.conn.last_insert_rowid(),
            name: input.name.clone(),
            description: input.description.clone(),
        })
    }

    fn get_department(&self, id: EntityId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }
        Ok(None)
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_department_row(row)?);
        }
        Ok(items)
    }

    fn update_department(
        &self,
        id: EntityId,
        patch: &DepartmentPatch,
    ) -> RepoResult<Option<Department>> {
        let mut record = match self.get_department(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        patch.apply_to(&mut record);

        self.conn.execute(
            "UPDATE departments SET name = ?1, description = ?2 WHERE id = ?3;",
            params![record.name.as_str(), record.description.as_str(), id],
        )?;

        Ok(Some(record))
    }

    fn delete_department(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
