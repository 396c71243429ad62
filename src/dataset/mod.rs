//! Declarative master data consumed by the seeder.
//!
//! Rows carry a symbolic `key` that is unique within their kind. Child rows
//! point at their parents through those keys; generated identifiers are only
//! known once the parents are stored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::EntityKind;
use crate::domain::counts::EntityCounts;

mod builtin;
mod loader;

/// Maximum allowed length for a row key.
const KEY_MAX_LEN: u64 = 64;
/// Maximum allowed length for names and descriptions.
const NAME_MAX_LEN: u64 = 50;
/// Abbreviations printed on invoices.
const SHORT_NAME_MAX_LEN: u64 = 3;
const ADDRESS_MAX_LEN: u64 = 255;
const PIN_MAX_LEN: u64 = 10;
const PHONE_MAX_LEN: u64 = 20;
const HSN_CODE_MAX_LEN: u64 = 15;
const UNIT_MAX_LEN: u64 = 20;

/// Allowed drift between `cgst + sgst` and `igst`.
pub const TAX_RATE_TOLERANCE: f64 = 0.005;

/// Result type returned by dataset helpers.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading or checking a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("duplicate {kind} key `{key}`")]
    DuplicateKey { kind: EntityKind, key: String },
    #[error("{kind} `{key}` references unknown {target} `{reference}`")]
    UnknownReference {
        kind: EntityKind,
        key: String,
        target: EntityKind,
        reference: String,
    },
    #[error("tax `{key}`: cgst {cgst} + sgst {sgst} does not add up to igst {igst}")]
    TaxRateMismatch {
        key: String,
        igst: f64,
        cgst: f64,
        sgst: f64,
    },
    #[error("product `{product}` is mapped to generic `{generic}` more than once")]
    DuplicateMapping { product: String, generic: String },
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct TaxRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub description: String,
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub igst: f64,
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub cgst: f64,
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub sgst: f64,
}

impl TaxRow {
    /// Whether the central and state components add up to the inter-state rate.
    pub fn rates_consistent(&self) -> bool {
        (self.cgst + self.sgst - self.igst).abs() <= TAX_RATE_TOLERANCE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ProductTypeRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(min = 1, max = SHORT_NAME_MAX_LEN), custom(function = "not_blank"))]
    pub short_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct CategoryRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ManufacturerRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(min = 1, max = SHORT_NAME_MAX_LEN), custom(function = "not_blank"))]
    pub short_name: String,
    #[serde(default)]
    #[validate(length(max = ADDRESS_MAX_LEN))]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub state: Option<String>,
    #[serde(default)]
    #[validate(length(max = PIN_MAX_LEN))]
    pub pin: Option<String>,
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub contact_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = PHONE_MAX_LEN))]
    pub contact_phone: Option<String>,
    #[serde(default)]
    #[validate(email, length(max = NAME_MAX_LEN))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ScheduleTypeRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct GenericRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub name: String,
    /// Key of the owning category.
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProductRow {
    #[validate(length(min = 1, max = KEY_MAX_LEN), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = HSN_CODE_MAX_LEN))]
    pub hsn_code: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub packing: String,
    #[validate(length(min = 1, max = UNIT_MAX_LEN), custom(function = "not_blank"))]
    pub purchase_unit: String,
    #[validate(length(min = 1, max = UNIT_MAX_LEN), custom(function = "not_blank"))]
    pub sale_unit: String,
    pub product_type: String,
    pub manufacturer: String,
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub mrp: f64,
    pub purchase_tax: String,
    pub sale_tax: String,
    pub schedule_type: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Rejects text that is empty once surrounding whitespace is removed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Rejects NaN and infinite amounts.
fn finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("not_finite"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ProductGenericRow {
    /// Key of the product.
    pub product: String,
    /// Key of the generic.
    pub generic: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN), custom(function = "not_blank"))]
    pub strength: String,
}

/// Complete set of master rows, one table per entity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct SeedDataset {
    #[serde(default)]
    #[validate(nested)]
    pub taxes: Vec<TaxRow>,
    #[serde(default)]
    #[validate(nested)]
    pub product_types: Vec<ProductTypeRow>,
    #[serde(default)]
    #[validate(nested)]
    pub categories: Vec<CategoryRow>,
    #[serde(default)]
    #[validate(nested)]
    pub manufacturers: Vec<ManufacturerRow>,
    #[serde(default)]
    #[validate(nested)]
    pub schedule_types: Vec<ScheduleTypeRow>,
    #[serde(default)]
    #[validate(nested)]
    pub generics: Vec<GenericRow>,
    #[serde(default)]
    #[validate(nested)]
    pub products: Vec<ProductRow>,
    #[serde(default)]
    #[validate(nested)]
    pub product_generics: Vec<ProductGenericRow>,
}

impl SeedDataset {
    /// Check field rules, key uniqueness, the tax invariant and that every
    /// reference resolves to a row of the referenced kind.
    pub fn verify(&self) -> DatasetResult<()> {
        self.validate()?;

        let tax_keys = unique_keys(EntityKind::Tax, self.taxes.iter().map(|r| &r.key))?;
        let type_keys = unique_keys(
            EntityKind::ProductType,
            self.product_types.iter().map(|r| &r.key),
        )?;
        let category_keys =
            unique_keys(EntityKind::Category, self.categories.iter().map(|r| &r.key))?;
        let manufacturer_keys = unique_keys(
            EntityKind::Manufacturer,
            self.manufacturers.iter().map(|r| &r.key),
        )?;
        let schedule_keys = unique_keys(
            EntityKind::ScheduleType,
            self.schedule_types.iter().map(|r| &r.key),
        )?;
        let generic_keys = unique_keys(EntityKind::Generic, self.generics.iter().map(|r| &r.key))?;
        let product_keys = unique_keys(EntityKind::Product, self.products.iter().map(|r| &r.key))?;

        for tax in &self.taxes {
            if !tax.rates_consistent() {
                return Err(DatasetError::TaxRateMismatch {
                    key: tax.key.clone(),
                    igst: tax.igst,
                    cgst: tax.cgst,
                    sgst: tax.sgst,
                });
            }
        }

        for generic in &self.generics {
            ensure_reference(
                EntityKind::Generic,
                &generic.key,
                EntityKind::Category,
                &generic.category,
                &category_keys,
            )?;
        }

        for product in &self.products {
            let checks = [
                (EntityKind::ProductType, &product.product_type, &type_keys),
                (
                    EntityKind::Manufacturer,
                    &product.manufacturer,
                    &manufacturer_keys,
                ),
                (EntityKind::Tax, &product.purchase_tax, &tax_keys),
                (EntityKind::Tax, &product.sale_tax, &tax_keys),
                (EntityKind::ScheduleType, &product.schedule_type, &schedule_keys),
            ];
            for (target, reference, keys) in checks {
                ensure_reference(EntityKind::Product, &product.key, target, reference, keys)?;
            }
        }

        let mut pairs = HashSet::new();
        for mapping in &self.product_generics {
            let label = format!("{}/{}", mapping.product, mapping.generic);
            ensure_reference(
                EntityKind::ProductGeneric,
                &label,
                EntityKind::Product,
                &mapping.product,
                &product_keys,
            )?;
            ensure_reference(
                EntityKind::ProductGeneric,
                &label,
                EntityKind::Generic,
                &mapping.generic,
                &generic_keys,
            )?;
            if !pairs.insert((mapping.product.as_str(), mapping.generic.as_str())) {
                return Err(DatasetError::DuplicateMapping {
                    product: mapping.product.clone(),
                    generic: mapping.generic.clone(),
                });
            }
        }

        Ok(())
    }

    /// Number of rows the dataset holds for each kind.
    pub fn row_counts(&self) -> EntityCounts {
        EntityCounts {
            taxes: self.taxes.len(),
            product_types: self.product_types.len(),
            categories: self.categories.len(),
            manufacturers: self.manufacturers.len(),
            schedule_types: self.schedule_types.len(),
            generics: self.generics.len(),
            products: self.products.len(),
            product_generics: self.product_generics.len(),
        }
    }
}

fn unique_keys<'a>(
    kind: EntityKind,
    keys: impl Iterator<Item = &'a String>,
) -> DatasetResult<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.as_str()) {
            return Err(DatasetError::DuplicateKey {
                kind,
                key: key.clone(),
            });
        }
    }
    Ok(seen)
}

fn ensure_reference(
    kind: EntityKind,
    key: &str,
    target: EntityKind,
    reference: &str,
    known: &HashSet<&str>,
) -> DatasetResult<()> {
    if known.contains(reference) {
        return Ok(());
    }
    Err(DatasetError::UnknownReference {
        kind,
        key: key.to_string(),
        target,
        reference: reference.to_string(),
    })
}
