use diesel::prelude::*;

use crate::domain::product_generic::{
    NewProductGeneric as DomainNewProductGeneric, ProductGeneric as DomainProductGeneric,
};
use crate::models::product_generic::{
    NewProductGeneric as DbNewProductGeneric, ProductGeneric as DbProductGeneric,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, ProductGenericReader, ProductGenericWriter};

impl ProductGenericReader for DieselStore {
    fn list_product_generics(&mut self) -> RepositoryResult<Vec<DomainProductGeneric>> {
        use crate::schema::product_generics;

        let db_mappings = product_generics::table
            .order(product_generics::id.asc())
            .select(DbProductGeneric::as_select())
            .load::<DbProductGeneric>(self.conn())?;

        Ok(db_mappings
            .into_iter()
            .map(DomainProductGeneric::from)
            .collect())
    }
}

impl ProductGenericWriter for DieselStore {
    fn create_product_generic(
        &mut self,
        new_mapping: &DomainNewProductGeneric,
    ) -> RepositoryResult<DomainProductGeneric> {
        use crate::schema::product_generics;

        let insertable = DbNewProductGeneric::from(new_mapping);

        let created = diesel::insert_into(product_generics::table)
            .values(&insertable)
            .returning(DbProductGeneric::as_returning())
            .get_result::<DbProductGeneric>(self.conn())?;

        Ok(created.into())
    }
}
