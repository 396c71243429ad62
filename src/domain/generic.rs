use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Non-branded active ingredient a product is based on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Generic {
    /// Generated generic code.
    pub id: i32,
    /// Ingredient name, e.g. `Paracetamol`.
    pub name: String,
    /// Identifier of the owning product category.
    pub category_id: i32,
    /// Audit name of the creator.
    pub created_by: String,
    /// Timestamp for when the generic record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the generic record.
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new generic under an existing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGeneric {
    pub name: String,
    pub category_id: i32,
    pub created_by: String,
}

impl NewGeneric {
    /// Construct a generic payload referencing `category_id`.
    pub fn new(name: impl Into<String>, category_id: i32, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            category_id,
            created_by: created_by.into(),
        }
    }
}
