//! Public service model.

use crate::model::{require, require_present, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Public-facing service offered by the province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicService {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Symbolic icon name resolved to a glyph by the consuming UI.
    pub icon: String,
    /// Target URL or in-page anchor.
    pub link: String,
}

/// Insert input for [`PublicService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublicService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub link: String,
}

impl NewPublicService {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("icon", &self.icon)?;
        require("link", &self.link)?;
        Ok(())
    }
}

/// Partial update for [`PublicService`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub link: Option<String>,
}

impl PublicServicePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("title", self.title.as_deref())?;
        require_present("description", self.description.as_deref())?;
        require_present("icon", self.icon.as_deref())?;
        require_present("link", self.link.as_deref())?;
        Ok(())
    }

    pub fn apply_to(&self, record: &mut PublicService) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(icon) = &self.icon {
            record.icon = icon.clone();
        }
        if let Some(link) = &self.link {
            record.link = link.clone();
        }
    }
}
