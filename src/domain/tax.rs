use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a GST slab applied to purchases and sales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tax {
    /// Generated tax code.
    pub id: i32,
    /// Human-readable description, e.g. `Medicine GST 5%`.
    pub description: String,
    /// Inter-state rate in percent.
    pub igst: f64,
    /// Central rate in percent.
    pub cgst: f64,
    /// State rate in percent.
    pub sgst: f64,
    /// Audit name of the creator.
    pub created_by: String,
    /// Timestamp for when the tax record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the tax record.
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new tax slab.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTax {
    pub description: String,
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub created_by: String,
}

impl NewTax {
    /// Build a tax payload from its component rates with a trimmed description.
    pub fn new(
        description: impl Into<String>,
        igst: f64,
        cgst: f64,
        sgst: f64,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into().trim().to_string(),
            igst,
            cgst,
            sgst,
            created_by: created_by.into(),
        }
    }
}
