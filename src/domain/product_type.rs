use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Dosage form of a product such as tablet or syrup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductType {
    pub id: i32,
    pub name: String,
    /// Abbreviation printed on bills, at most three characters.
    pub short_name: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new product type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductType {
    pub name: String,
    pub short_name: String,
    pub created_by: String,
}

impl NewProductType {
    /// Construct a new product type payload with trimmed names.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            short_name: short_name.into().trim().to_string(),
            created_by: created_by.into(),
        }
    }
}
