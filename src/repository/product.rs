use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, ProductReader, ProductWriter};

impl ProductReader for DieselStore {
    fn get_product_by_id(&mut self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let product = products::table
            .filter(products::id.eq(id))
            .select(DbProduct::as_select())
            .first::<DbProduct>(self.conn())
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&mut self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let db_products = products::table
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(self.conn())?;

        Ok(db_products.into_iter().map(DomainProduct::from).collect())
    }
}

impl ProductWriter for DieselStore {
    fn create_product(&mut self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let insertable = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(self.conn())?;

        Ok(created.into())
    }
}
