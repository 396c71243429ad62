use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a therapeutic product category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Category {
    /// Generated category code.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Audit name of the creator.
    pub created_by: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Audit name of the creator.
    pub created_by: String,
}

impl NewCategory {
    /// Build a new category payload with a trimmed name.
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            created_by: created_by.into(),
        }
    }
}
