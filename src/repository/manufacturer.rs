use diesel::prelude::*;

use crate::domain::manufacturer::{
    Manufacturer as DomainManufacturer, NewManufacturer as DomainNewManufacturer,
};
use crate::models::manufacturer::{
    Manufacturer as DbManufacturer, NewManufacturer as DbNewManufacturer,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, ManufacturerReader, ManufacturerWriter};

impl ManufacturerReader for DieselStore {
    fn list_manufacturers(&mut self) -> RepositoryResult<Vec<DomainManufacturer>> {
        use crate::schema::manufacturers;

        let db_manufacturers = manufacturers::table
            .order(manufacturers::id.asc())
            .select(DbManufacturer::as_select())
            .load::<DbManufacturer>(self.conn())?;

        Ok(db_manufacturers
            .into_iter()
            .map(DomainManufacturer::from)
            .collect())
    }
}

impl ManufacturerWriter for DieselStore {
    fn create_manufacturer(
        &mut self,
        new_manufacturer: &DomainNewManufacturer,
    ) -> RepositoryResult<DomainManufacturer> {
        use crate::schema::manufacturers;

        let insertable = DbNewManufacturer::from(new_manufacturer);

        let created = diesel::insert_into(manufacturers::table)
            .values(&insertable)
            .returning(DbManufacturer::as_returning())
            .get_result::<DbManufacturer>(self.conn())?;

        Ok(created.into())
    }
}
