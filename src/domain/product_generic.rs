use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation linking a product to one of its generics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductGeneric {
    /// Unique identifier of the product-generic association.
    pub id: i32,
    /// Identifier of the product.
    pub product_id: i32,
    /// Identifier of the referenced generic.
    pub generic_id: i32,
    /// Strength annotation such as `650mg` or `10mg/5ml`.
    pub strength: String,
    /// Audit name of the creator.
    pub created_by: String,
    /// Timestamp for when the association was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the association.
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to associate an existing generic with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductGeneric {
    pub product_id: i32,
    pub generic_id: i32,
    pub strength: String,
    pub created_by: String,
}

impl NewProductGeneric {
    /// Construct a new association payload between a product and a generic.
    pub fn new(
        product_id: i32,
        generic_id: i32,
        strength: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            generic_id,
            strength: strength.into().trim().to_string(),
            created_by: created_by.into(),
        }
    }
}
