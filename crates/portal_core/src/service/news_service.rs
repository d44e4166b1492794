//! News use-case service.
//!
//! # Invariants
//! - Writes validate input before delegating to the repository.
//! - Listing order and filters are repository contracts passed through
//!   unchanged.

use crate::model::news::{News, NewNews, NewsPatch};
use crate::model::EntityId;
use crate::repo::news_repo::NewsRepository;
use crate::service::ServiceResult;

/// News facade over a repository implementation.
pub struct NewsService<R: NewsRepository> {
    repo: R,
}

impl<R: NewsRepository> NewsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and publishes one article.
    pub fn create_news(&self, input: &NewNews) -> ServiceResult<News> {
        input.validate()?;
        Ok(self.repo.create_news(input)?)
    }

    pub fn get_news(&self, id: EntityId) -> ServiceResult<Option<News>> {
        Ok(self.repo.get_news(id)?)
    }

    pub fn list_news(&self) -> ServiceResult<Vec<News>> {
        Ok(self.repo.list_news()?)
    }

    pub fn list_featured_news(&self) -> ServiceResult<Vec<News>> {
        Ok(self.repo.list_featured_news()?)
    }

    pub fn list_latest_news(&self, limit: u32) -> ServiceResult<Vec<News>> {
        Ok(self.repo.list_latest_news(limit)?)
    }

    pub fn list_news_by_category(&self, category: &str) -> ServiceResult<Vec<News>> {
        Ok(self.repo.list_news_by_category(category)?)
    }

    /// Validates carried fields, then overlays them onto the stored
    /// record. `None` when the id does not exist.
    pub fn update_news(&self, id: EntityId, patch: &NewsPatch) -> ServiceResult<Option<News>> {
        patch.validate()?;
        Ok(self.repo.update_news(id, patch)?)
    }

    pub fn delete_news(&self, id: EntityId) -> ServiceResult<bool> {
        Ok(self.repo.delete_news(id)?)
    }
}
