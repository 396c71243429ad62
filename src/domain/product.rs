use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a sellable pharmacy product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Generated product code.
    pub id: i32,
    /// Brand name of the product.
    pub name: String,
    /// Harmonized System Nomenclature code used for GST classification.
    pub hsn_code: Option<String>,
    /// Packing description, e.g. `Strip of 10 Tablets`.
    pub packing: String,
    /// Unit in which the product is purchased.
    pub purchase_unit: String,
    /// Unit in which the product is sold.
    pub sale_unit: String,
    /// Identifier of the product type (dosage form).
    pub product_type_id: i32,
    /// Identifier of the manufacturer.
    pub manufacturer_id: i32,
    /// Maximum retail price.
    pub mrp: f64,
    /// Tax slab applied on purchase.
    pub purchase_tax_id: i32,
    /// Tax slab applied on sale.
    pub sale_tax_id: i32,
    /// Regulatory schedule of the product.
    pub schedule_type_id: i32,
    /// Flag indicating whether the product can be traded.
    pub is_active: bool,
    /// Moment the product was deactivated, if ever.
    pub inactive_from: Option<NaiveDateTime>,
    /// Audit name of the creator.
    pub created_by: String,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new product. Every identifier must reference an
/// already persisted row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub hsn_code: Option<String>,
    pub packing: String,
    pub purchase_unit: String,
    pub sale_unit: String,
    pub product_type_id: i32,
    pub manufacturer_id: i32,
    pub mrp: f64,
    pub purchase_tax_id: i32,
    pub sale_tax_id: i32,
    pub schedule_type_id: i32,
    pub is_active: bool,
    pub created_by: String,
}

/// Generated identifiers of the rows a product points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLinks {
    pub product_type_id: i32,
    pub manufacturer_id: i32,
    pub purchase_tax_id: i32,
    pub sale_tax_id: i32,
    pub schedule_type_id: i32,
}

impl NewProduct {
    /// Build an active product payload with trimmed text fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        hsn_code: Option<String>,
        packing: impl Into<String>,
        purchase_unit: impl Into<String>,
        sale_unit: impl Into<String>,
        mrp: f64,
        links: ProductLinks,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            hsn_code: hsn_code
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
            packing: packing.into().trim().to_string(),
            purchase_unit: purchase_unit.into().trim().to_string(),
            sale_unit: sale_unit.into().trim().to_string(),
            product_type_id: links.product_type_id,
            manufacturer_id: links.manufacturer_id,
            mrp,
            purchase_tax_id: links.purchase_tax_id,
            sale_tax_id: links.sale_tax_id,
            schedule_type_id: links.schedule_type_id,
            is_active: true,
            created_by: created_by.into(),
        }
    }

    /// Mark the product as tradable or not.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
