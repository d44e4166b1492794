//! Documents and document categories: repository contracts and SQLite
//! implementations.
//!
//! # Invariants
//! - Document listings are ordered by `publish_date DESC, id ASC`.
//! - Category filtering matches `documents.category` against the given
//!   name by exact, case-sensitive string equality; there is no foreign
//!   key between the two tables.
//! - `document_categories.documents_count` is stored as-is; deleting or
//!   creating documents never adjusts it.

use crate::model::document::{
    Document, DocumentCategory, DocumentCategoryPatch, DocumentPatch, NewDocument,
    NewDocumentCategory,
};
use crate::model::EntityId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Params, Row};

const DOCUMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    category,
    publish_date,
    size,
    file_url
FROM documents";

const CATEGORY_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    icon,
    color,
    documents_count
FROM document_categories";

/// Repository interface for downloadable documents.
pub trait DocumentRepository {
    fn create_document(&self, input: &NewDocument) -> RepoResult<Document>;
    fn get_document(&self, id: EntityId) -> RepoResult<Option<Document>>;
    /// All documents, newest publish date first.
    fn list_documents(&self) -> RepoResult<Vec<Document>>;
    /// The `limit` most recent documents.
    fn list_latest_documents(&self, limit: u32) -> RepoResult<Vec<Document>>;
    fn list_documents_by_category(&self, category: &str) -> RepoResult<Vec<Document>>;
    fn update_document(&self, id: EntityId, patch: &DocumentPatch) -> RepoResult<Option<Document>>;
    fn delete_document(&self, id: EntityId) -> RepoResult<bool>;
}

/// Repository interface for document categories.
pub trait DocumentCategoryRepository {
    fn create_category(&self, input: &NewDocumentCategory) -> RepoResult<DocumentCategory>;
    fn get_category(&self, id: EntityId) -> RepoResult<Option<DocumentCategory>>;
    /// Stable insertion order (`id ASC`).
    fn list_categories(&self) -> RepoResult<Vec<DocumentCategory>>;
    fn update_category(
        &self,
        id: EntityId,
        patch: &DocumentCategoryPatch,
    ) -> RepoResult<Option<DocumentCategory>>;
    /// Hard delete. Documents referencing the category name are left
    /// untouched (no cascade).
    fn delete_category(&self, id: EntityId) -> RepoResult<bool>;
}

/// SQLite-backed documents repository.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_documents<P: Params>(&self, sql: &str, params: P) -> RepoResult<Vec<Document>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_document_row(row)?);
        }
        Ok(items)
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn create_document(&self, input: &NewDocument) -> RepoResult<Document> {
        self.conn.execute(
            "INSERT INTO documents (
                name,
                category,
                publish_date,
                size,
                file_url
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                input.name.as_str(),
                input.category.as_str(),
                input.publish_date,
                input.size.as_str(),
                input.file_url.as_str(),
            ],
        )?;

        Ok(Document {
            id: self.conn.last_insert_rowid(),
            name: input.name.clone(),
            category: input.category.clone(),
            publish_date: input.publish_date,
            size: input.size.clone(),
            file_url: input.file_url.clone(),
        })
    }

    fn get_document(&self, id: EntityId) -> RepoResult<Option<Document>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOCUMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_document_row(row)?));
        }
        Ok(None)
    }

    fn list_documents(&self) -> RepoResult<Vec<Document>> {
        self.query_documents(
            &format!("{DOCUMENT_SELECT_SQL} ORDER BY publish_date DESC, id ASC;"),
            [],
        )
    }

    fn list_latest_documents(&self, limit: u32) -> RepoResult<Vec<Document>> {
        self.query_documents(
            &format!("{DOCUMENT_SELECT_SQL} ORDER BY publish_date DESC, id ASC LIMIT ?1;"),
            [i64::from(limit)],
        )
    }

    fn list_documents_by_category(&self, category: &str) -> RepoResult<Vec<Document>> {
        self.query_documents(
            &format!(
                "{DOCUMENT_SELECT_SQL} WHERE category = ?1 ORDER BY publish_date DESC, id ASC;"
            ),
            [category],
        )
    }

    fn update_document(&self, id: EntityId, patch: &DocumentPatch) -> RepoResult<Option<Document>> {
        let mut record = match self.get_document(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        patch.apply_to(&mut record);

        self.conn.execute(
            "UPDATE documents
             SET
                name = ?1,
                category = ?2,
                publish_date = ?3,
                size = ?4,
                file_url = ?5
             WHERE id = ?6;",
            params![
                record.name.as_str(),
                record.category.as_str(),
                record.publish_date,
                record.size.as_str(),
                record.file_url.as_str(),
                id,
            ],
        )?;

        Ok(Some(record))
    }

    fn delete_document(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM documents WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

/// SQLite-backed document categories repository.
pub struct SqliteDocumentCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentCategoryRepository for SqliteDocumentCategoryRepository<'_> {
    fn create_category(&self, input: &NewDocumentCategory) -> RepoResult<DocumentCategory> {
        self.conn.execute(
            "INSERT INTO document_categories (
                name,
                description,
                icon,
                color,
                documents_count
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                input.name.as_str(),
                input.description.as_str(),
                input.icon.as_str(),
                input.color.as_str(),
                input.documents_count,
            ],
        )?;

        Ok(DocumentCategory {
            id: self.conn.last_insert_rowid(),
            name: input.name.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            color: input.color.clone(),
            documents_count: input.documents_count,
        })
    }

    fn get_category(&self, id: EntityId) -> RepoResult<Option<DocumentCategory>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }
        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<DocumentCategory>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_category_row(row)?);
        }
        Ok(items)
    }

    fn update_category(
        &self,
        id: EntityId,
        patch: &DocumentCategoryPatch,
    ) -> RepoResult<Option<DocumentCategory>> {
        let mut record = match self.get_category(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        patch.apply_to(&mut record);

        self.conn.execute(
            "UPDATE document_categories
             SET
                name = ?1,
                description = ?2,
                icon = ?3,
                color = ?4,
                documents_count = ?5
             WHERE id = ?6;",
            params![
                record.name.as_str(),
                record.description.as_str(),
                record.icon.as_str(),
                record.color.as_str(),
                record.documents_count,
                id,
            ],
        )?;

        Ok(Some(record))
    }

    fn delete_category(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM document_categories WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_document_row(row: &Row<'_>) -> RepoResult<Document> {
    Ok(Document {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        publish_date: row.get("publish_date")?,
        size: row.get("size")?,
        file_url: row.get("file_url")?,
    })
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<DocumentCategory> {
    Ok(DocumentCategory {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        icon: row.get("icon")?,
        color: row.get("color")?,
        documents_count: row.get("documents_count")?,
    })
}
