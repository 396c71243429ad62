use diesel::prelude::*;

use crate::domain::product_type::{
    NewProductType as DomainNewProductType, ProductType as DomainProductType,
};
use crate::models::product_type::{NewProductType as DbNewProductType, ProductType as DbProductType};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, ProductTypeReader, ProductTypeWriter};

impl ProductTypeReader for DieselStore {
    fn list_product_types(&mut self) -> RepositoryResult<Vec<DomainProductType>> {
        use crate::schema::product_types;

        let db_types = product_types::table
            .order(product_types::id.asc())
            .select(DbProductType::as_select())
            .load::<DbProductType>(self.conn())?;

        Ok(db_types.into_iter().map(DomainProductType::from).collect())
    }
}

impl ProductTypeWriter for DieselStore {
    fn create_product_type(
        &mut self,
        new_type: &DomainNewProductType,
    ) -> RepositoryResult<DomainProductType> {
        use crate::schema::product_types;

        let insertable = DbNewProductType::from(new_type);

        let created = diesel::insert_into(product_types::table)
            .values(&insertable)
            .returning(DbProductType::as_returning())
            .get_result::<DbProductType>(self.conn())?;

        Ok(created.into())
    }
}
