use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::Trim;
use serde::de::DeserializeOwned;

use super::{DatasetError, DatasetResult, SeedDataset};

pub const TAXES_CSV: &str = "taxes.csv";
pub const PRODUCT_TYPES_CSV: &str = "product_types.csv";
pub const CATEGORIES_CSV: &str = "product_categories.csv";
pub const MANUFACTURERS_CSV: &str = "manufacturers.csv";
pub const SCHEDULE_TYPES_CSV: &str = "schedule_types.csv";
pub const GENERICS_CSV: &str = "generics.csv";
pub const PRODUCTS_CSV: &str = "products.csv";
pub const PRODUCT_GENERICS_CSV: &str = "product_generics.csv";

impl SeedDataset {
    /// Load a dataset from `path`: a directory of per-kind CSV files or a single
    /// JSON document.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        if path.is_dir() {
            Self::from_csv_dir(path)
        } else {
            Self::from_json_file(path)
        }
    }

    /// Parse a JSON document whose top-level keys name the entity tables.
    pub fn from_json_file(path: &Path) -> DatasetResult<Self> {
        let file = File::open(path)?;
        let dataset = serde_json::from_reader(BufReader::new(file))?;
        Ok(dataset)
    }

    /// Read one CSV file per kind from `dir`. A missing file yields an empty table.
    pub fn from_csv_dir(dir: &Path) -> DatasetResult<Self> {
        Ok(Self {
            taxes: read_csv_table(dir, TAXES_CSV)?,
            product_types: read_csv_table(dir, PRODUCT_TYPES_CSV)?,
            categories: read_csv_table(dir, CATEGORIES_CSV)?,
            manufacturers: read_csv_table(dir, MANUFACTURERS_CSV)?,
            schedule_types: read_csv_table(dir, SCHEDULE_TYPES_CSV)?,
            generics: read_csv_table(dir, GENERICS_CSV)?,
            products: read_csv_table(dir, PRODUCTS_CSV)?,
            product_generics: read_csv_table(dir, PRODUCT_GENERICS_CSV)?,
        })
    }
}

fn read_csv_table<T: DeserializeOwned>(dir: &Path, file_name: &str) -> DatasetResult<Vec<T>> {
    let path = dir.join(file_name);
    if !path.exists() {
        log::debug!("No {} in {}, treating table as empty", file_name, dir.display());
        return Ok(Vec::new());
    }

    let csv_error = |source| DatasetError::Csv {
        file: path.display().to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(&path)
        .map_err(csv_error)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        rows.push(record.map_err(csv_error)?);
    }
    Ok(rows)
}
