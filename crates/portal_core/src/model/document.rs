//! Downloadable document and document category models.
//!
//! # Invariants
//! - `Document.category` is a denormalized name matched against
//!   `DocumentCategory.name` by string equality; there is no foreign key
//!   and no referential integrity between the two collections.
//! - `DocumentCategory.documents_count` is maintained by editors and may
//!   drift from the true number of matching documents.

use crate::model::{require, require_present, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Downloadable document published on the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub name: String,
    /// Category name, matched case-sensitively against
    /// [`DocumentCategory::name`].
    pub category: String,
    /// Unix epoch milliseconds.
    pub publish_date: i64,
    /// Human-readable size label, e.g. "2.5 MB".
    pub size: String,
    pub file_url: String,
}

/// Insert input for [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    pub category: String,
    pub publish_date: i64,
    pub size: String,
    pub file_url: String,
}

impl NewDocument {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        require("size", &self.size)?;
        require("fileUrl", &self.file_url)?;
        Ok(())
    }
}

/// Partial update for [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub publish_date: Option<i64>,
    pub size: Option<String>,
    pub file_url: Option<String>,
}

impl DocumentPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("name", self.name.as_deref())?;
        require_present("category", self.category.as_deref())?;
        require_present("size", self.size.as_deref())?;
        require_present("fileUrl", self.file_url.as_deref())?;
        Ok(())
    }

    pub fn apply_to(&self, record: &mut Document) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(publish_date) = self.publish_date {
            record.publish_date = publish_date;
        }
        if let Some(size) = &self.size {
            record.size = size.clone();
        }
        if let Some(file_url) = &self.file_url {
            record.file_url = file_url.clone();
        }
    }
}

/// Grouping shown on the document repository page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCategory {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Symbolic icon name resolved by the consuming UI.
    pub icon: String,
    /// Symbolic theme token, e.g. "primary".
    pub color: String,
    /// Editor-maintained count, not recomputed from documents.
    pub documents_count: i64,
}

/// Insert input for [`DocumentCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub documents_count: i64,
}

impl NewDocumentCategory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        require("icon", &self.icon)?;
        require("color", &self.color)?;
        Ok(())
    }
}

/// Partial update for [`DocumentCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentCategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub documents_count: Option<i64>,
}

impl DocumentCategoryPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("name", self.name.as_deref())?;
        require_present("description", self.description.as_deref())?;
        require_present("icon", self.icon.as_deref())?;
        require_present("color", self.color.as_deref())?;
        Ok(())
    }

    pub fn apply_to(&self, record: &mut DocumentCategory) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(icon) = &self.icon {
            record.icon = icon.clone();
        }
        if let Some(color) = &self.color {
            record.color = color.clone();
        }
        if let Some(documents_count) = self.documents_count {
            record.documents_count = documents_count;
        }
    }
}
