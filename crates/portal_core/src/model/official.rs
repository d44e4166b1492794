//! Government official model.
//!
//! # Invariants
//! - `social_media` is stored as a serialized JSON object mapping platform
//!   name to profile URL; the stored shape is the source of truth.
//! - Leadership is a query-time classification over `position` text, not a
//!   stored rank field.

use crate::model::{require, require_present, EntityId, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Platform name -> profile URL.
pub type SocialLinks = BTreeMap<String, String>;

/// Provincial government official.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Official {
    pub id: EntityId,
    pub name: String,
    /// Free-text role, e.g. "Gubernur Kalimantan Selatan".
    pub position: String,
    /// Portrait image URL.
    pub image: String,
    pub description: String,
    /// Serialized JSON link map; see [`Official::social_links`].
    pub social_media: String,
}

impl Official {
    /// Decodes the stored social media payload into a typed link map.
    pub fn social_links(&self) -> Result<SocialLinks, ValidationError> {
        parse_social_links(&self.social_media)
    }
}

/// Insert input for [`Official`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOfficial {
    pub name: String,
    pub position: String,
    pub image: String,
    pub description: String,
    pub social_media: String,
}

impl NewOfficial {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("position", &self.position)?;
        require("image", &self.image)?;
        require("description", &self.description)?;
        parse_social_links(&self.social_media)?;
        Ok(())
    }
}

/// Partial update for [`Official`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficialPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub social_media: Option<String>,
}

impl OfficialPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("name", self.name.as_deref())?;
        require_present("position", self.position.as_deref())?;
        require_present("image", self.image.as_deref())?;
        require_present("description", self.description.as_deref())?;
        if let Some(raw) = &self.social_media {
            parse_social_links(raw)?;
        }
        Ok(())
    }

    pub fn apply_to(&self, record: &mut Official) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(position) = &self.position {
            record.position = position.clone();
        }
        if let Some(image) = &self.image {
            record.image = image.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(social_media) = &self.social_media {
            record.social_media = social_media.clone();
        }
    }
}

/// Decodes a serialized social media payload.
pub fn parse_social_links(raw: &str) -> Result<SocialLinks, ValidationError> {
    serde_json::from_str(raw).map_err(|err| ValidationError::InvalidSocialMedia(err.to_string()))
}

/// Encodes a link map into the stored JSON shape.
pub fn encode_social_links(links: &SocialLinks) -> String {
    serde_json::to_string(links).expect("string map serializes to JSON")
}
