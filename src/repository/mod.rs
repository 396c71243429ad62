use diesel::connection::{AnsiTransactionManager, TransactionManager};

use crate::db::DbConnection;
use crate::domain::{
    category::{Category, NewCategory},
    counts::EntityCounts,
    generic::{Generic, NewGeneric},
    manufacturer::{Manufacturer, NewManufacturer},
    product::{NewProduct, Product},
    product_generic::{NewProductGeneric, ProductGeneric},
    product_type::{NewProductType, ProductType},
    schedule_type::{NewScheduleType, ScheduleType},
    tax::{NewTax, Tax},
};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod category;
pub mod counts;
pub mod errors;
pub mod generic;
pub mod manufacturer;
pub mod product;
pub mod product_generic;
pub mod product_type;
pub mod schedule_type;
pub mod tax;

#[cfg(test)]
pub mod mock;

/// Diesel-backed store that owns exactly one SQLite connection for its whole
/// lifetime. The connection goes back to the pool when the store is dropped.
pub struct DieselStore {
    conn: DbConnection,
}

impl DieselStore {
    /// Wrap an already acquired connection.
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn conn(&mut self) -> &mut diesel::sqlite::SqliteConnection {
        &mut self.conn
    }

    /// Run `f` inside a single transaction. Everything `f` wrote is rolled back
    /// when it returns an error.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        AnsiTransactionManager::begin_transaction(self.conn())
            .map_err(|err| E::from(RepositoryError::from(err)))?;

        match f(self) {
            Ok(value) => {
                AnsiTransactionManager::commit_transaction(self.conn())
                    .map_err(|err| E::from(RepositoryError::from(err)))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = AnsiTransactionManager::rollback_transaction(self.conn())
                {
                    log::error!("Failed to roll back transaction: {rollback_err}");
                }
                Err(err)
            }
        }
    }
}

/// Read-only operations over tax records.
pub trait TaxReader {
    fn list_taxes(&mut self) -> RepositoryResult<Vec<Tax>>;
}

/// Write operations over tax records.
pub trait TaxWriter {
    fn create_tax(&mut self, new_tax: &NewTax) -> RepositoryResult<Tax>;
}

/// Read-only operations over product type records.
pub trait ProductTypeReader {
    fn list_product_types(&mut self) -> RepositoryResult<Vec<ProductType>>;
}

/// Write operations over product type records.
pub trait ProductTypeWriter {
    fn create_product_type(&mut self, new_type: &NewProductType)
    -> RepositoryResult<ProductType>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn list_categories(&mut self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&mut self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations over manufacturer records.
pub trait ManufacturerReader {
    fn list_manufacturers(&mut self) -> RepositoryResult<Vec<Manufacturer>>;
}

/// Write operations over manufacturer records.
pub trait ManufacturerWriter {
    fn create_manufacturer(
        &mut self,
        new_manufacturer: &NewManufacturer,
    ) -> RepositoryResult<Manufacturer>;
}

/// Read-only operations over schedule type records.
pub trait ScheduleTypeReader {
    fn list_schedule_types(&mut self) -> RepositoryResult<Vec<ScheduleType>>;
}

/// Write operations over schedule type records.
pub trait ScheduleTypeWriter {
    fn create_schedule_type(
        &mut self,
        new_schedule_type: &NewScheduleType,
    ) -> RepositoryResult<ScheduleType>;
}

/// Read-only operations over generic records.
pub trait GenericReader {
    fn list_generics(&mut self) -> RepositoryResult<Vec<Generic>>;
}

/// Write operations over generic records.
pub trait GenericWriter {
    fn create_generic(&mut self, new_generic: &NewGeneric) -> RepositoryResult<Generic>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&mut self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&mut self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&mut self, new_product: &NewProduct) -> RepositoryResult<Product>;
}

/// Read-only operations over product-generic mappings.
pub trait ProductGenericReader {
    fn list_product_generics(&mut self) -> RepositoryResult<Vec<ProductGeneric>>;
}

/// Write operations over product-generic mappings.
pub trait ProductGenericWriter {
    fn create_product_generic(
        &mut self,
        new_mapping: &NewProductGeneric,
    ) -> RepositoryResult<ProductGeneric>;
}

/// Row counts across every master table.
pub trait MasterDataReader {
    fn count_master_rows(&mut self) -> RepositoryResult<EntityCounts>;
}
