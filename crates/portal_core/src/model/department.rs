//! Government department model.
//!
//! Departments carry no hierarchy field; organizational nesting is a
//! display concern of the consuming layer.

use crate::model::{require, require_present, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Provincial government department (dinas/sekretariat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// Insert input for [`Department`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub name: String,
    pub description: String,
}

impl NewDepartment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        Ok(())
    }
}

/// Partial update for [`Department`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DepartmentPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("name", self.name.as_deref())?;
        require_present("description", self.description.as_deref())?;
        Ok(())
    }

    pub fn apply_to(&self, record: &mut Department) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
    }
}
