//! News article model.
//!
//! # Invariants
//! - `content` and `summary` are independent editor-supplied fields; the
//!   summary is never derived from the body.
//! - Listings are ordered by `publish_date` descending.

use crate::model::{require, require_present, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Published news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: EntityId,
    pub title: String,
    /// Full article body.
    pub content: String,
    /// Editor-written teaser shown in listings.
    pub summary: String,
    /// Cover image URL.
    pub image: String,
    pub category: String,
    /// Unix epoch milliseconds.
    pub publish_date: i64,
    /// Highlighted on the portal front page when set.
    pub featured: bool,
}

/// Insert input for [`News`]; identity is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub image: String,
    pub category: String,
    pub publish_date: i64,
    pub featured: bool,
}

impl NewNews {
    /// Validates required fields before the repository is invoked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        require("summary", &self.summary)?;
        require("image", &self.image)?;
        require("category", &self.category)?;
        Ok(())
    }
}

/// Partial update for [`News`]: present fields override, absent fields
/// keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub publish_date: Option<i64>,
    pub featured: Option<bool>,
}

impl NewsPatch {
    /// Carried fields obey the same rules as insert input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("title", self.title.as_deref())?;
        require_present("content", self.content.as_deref())?;
        require_present("summary", self.summary.as_deref())?;
        require_present("image", self.image.as_deref())?;
        require_present("category", self.category.as_deref())?;
        Ok(())
    }

    /// Field-by-field overlay onto a stored record.
    pub fn apply_to(&self, record: &mut News) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(content) = &self.content {
            record.content = content.clone();
        }
        if let Some(summary) = &self.summary {
            record.summary = summary.clone();
        }
        if let Some(image) = &self.image {
            record.image = image.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(publish_date) = self.publish_date {
            record.publish_date = publish_date;
        }
        if let Some(featured) = self.featured {
            record.featured = featured;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{News, NewNews, NewsPatch};
    use crate::model::ValidationError;

    fn sample() -> News {
        News {
            id: 1,
            title: "Jembatan baru diresmikan".to_string(),
            content: "Isi berita lengkap.".to_string(),
            summary: "Ringkasan.".to_string(),
            image: "https://example.com/cover.jpg".to_string(),
            category: "Infrastruktur".to_string(),
            publish_date: 1_686_787_200_000,
            featured: false,
        }
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let mut record = sample();
        let before = record.clone();
        NewsPatch::default().apply_to(&mut record);
        assert_eq!(record, before);
    }

    #[test]
    fn patch_overrides_only_carried_fields() {
        let mut record = sample();
        let patch = NewsPatch {
            featured: Some(true),
            ..NewsPatch::default()
        };
        patch.apply_to(&mut record);
        assert!(record.featured);
        assert_eq!(record.title, sample().title);
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let input = NewNews {
            title: "  ".to_string(),
            content: "x".to_string(),
            summary: "x".to_string(),
            image: "x".to_string(),
            category: "x".to_string(),
            publish_date: 0,
            featured: false,
        };
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("title")
        );
    }
}
