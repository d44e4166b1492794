//! News repository contract and SQLite implementation.
//!
//! # Invariants
//! - All listings are ordered by `publish_date DESC, id ASC`.
//! - Category filtering is exact, case-sensitive string equality.

use crate::model::news::{News, NewNews, NewsPatch};
use crate::model::EntityId;
use crate::repo::{bool_to_int, flag_from_int, RepoResult};
use rusqlite::{params, Connection, Params, Row};

const NEWS_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    summary,
    image,
    category,
    publish_date,
    featured
FROM news";

/// Repository interface for news CRUD and listing queries.
pub trait NewsRepository {
    /// Inserts one article and returns the stored record with its id.
    fn create_news(&self, input: &NewNews) -> RepoResult<News>;
    fn get_news(&self, id: EntityId) -> RepoResult<Option<News>>;
    /// All articles, newest publish date first.
    fn list_news(&self) -> RepoResult<Vec<News>>;
    /// Front-page articles: `featured` only, newest first.
    fn list_featured_news(&self) -> RepoResult<Vec<News>>;
    /// The `limit` most recent articles.
    fn list_latest_news(&self, limit: u32) -> RepoResult<Vec<News>>;
    fn list_news_by_category(&self, category: &str) -> RepoResult<Vec<News>>;
    /// Field-by-field overlay; `None` when the id does not exist.
    fn update_news(&self, id: EntityId, patch: &NewsPatch) -> RepoResult<Option<News>>;
    /// Hard delete; `false` when the id did not exist.
    fn delete_news(&self, id: EntityId) -> RepoResult<bool>;
}

/// SQLite-backed news repository.
pub struct SqliteNewsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNewsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_news<P: Params>(&self, sql: &str, params: P) -> RepoResult<Vec<News>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_news_row(row)?);
        }
        Ok(items)
    }
}

impl NewsRepository for SqliteNewsRepository<'_> {
    fn create_news(&self, input: &NewNews) -> RepoResult<News> {
        self.conn.execute(
            "INSERT INTO news (
                title,
                content,
                summary,
                image,
                category,
                publish_date,
                featured
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                input.title.as_str(),
                input.content.as_str(),
                input.summary.as_str(),
                input.image.as_str(),
                input.category.as_str(),
                input.publish_date,
                bool_to_int(input.featured),
            ],
        )?;

        Ok(News {
            id: self.conn.last_insert_rowid(),
            title: input.title.clone(),
            content: input.content.clone(),
            summary: input.summary.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
            publish_date: input.publish_date,
            featured: input.featured,
        })
    }

    fn get_news(&self, id: EntityId) -> RepoResult<Option<News>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NEWS_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_news_row(row)?));
        }
        Ok(None)
    }

    fn list_news(&self) -> RepoResult<Vec<News>> {
        self.query_news(
            &format!("{NEWS_SELECT_SQL} ORDER BY publish_date DESC, id ASC;"),
            [],
        )
    }

    fn list_featured_news(&self) -> RepoResult<Vec<News>> {
        self.query_news(
            &format!("{NEWS_SELECT_SQL} WHERE featured = 1 ORDER BY publish_date DESC, id ASC;"),
            [],
        )
    }

    fn list_latest_news(&self, limit: u32) -> RepoResult<Vec<News>> {
        self.query_news(
            &format!("{NEWS_SELECT_SQL} ORDER BY publish_date DESC, id ASC LIMIT ?1;"),
            [i64::from(limit)],
        )
    }

    fn list_news_by_category(&self, category: &str) -> RepoResult<Vec<News>> {
        self.query_news(
            &format!("{NEWS_SELECT_SQL} WHERE category = ?1 ORDER BY publish_date DESC, id ASC;"),
            [category],
        )
    }

    fn update_news(&self, id: EntityId, patch: &NewsPatch) -> RepoResult<Option<News>> {
        let mut record = match self.get_news(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        patch.apply_to(&mut record);

        self.conn.execute(
            "UPDATE news
             SET
                title = ?1,
                content = ?2,
                summary = ?3,
                image = ?4,
                category = ?5,
                publish_date = ?6,
                featured = ?7
             WHERE id = ?8;",
            params![
                record.title.as_str(),
                record.content.as_str(),
                record.summary.as_str(),
                record.image.as_str(),
                record.category.as_str(),
                record.publish_date,
                bool_to_int(record.featured),
                id,
            ],
        )?;

        Ok(Some(record))
    }

    fn delete_news(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM news WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_news_row(row: &Row<'_>) -> RepoResult<News> {
    Ok(News {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        summary: row.get("summary")?,
        image: row.get("image")?,
        category: row.get("category")?,
        publish_date: row.get("publish_date")?,
        featured: flag_from_int(row.get("featured")?, "news.featured")?,
    })
}
