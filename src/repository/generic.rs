use diesel::prelude::*;

use crate::domain::generic::{Generic as DomainGeneric, NewGeneric as DomainNewGeneric};
use crate::models::generic::{Generic as DbGeneric, NewGeneric as DbNewGeneric};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, GenericReader, GenericWriter};

impl GenericReader for DieselStore {
    fn list_generics(&mut self) -> RepositoryResult<Vec<DomainGeneric>> {
        use crate::schema::generics;

        let db_generics = generics::table
            .order(generics::id.asc())
            .select(DbGeneric::as_select())
            .load::<DbGeneric>(self.conn())?;

        Ok(db_generics.into_iter().map(DomainGeneric::from).collect())
    }
}

impl GenericWriter for DieselStore {
    fn create_generic(&mut self, new_generic: &DomainNewGeneric) -> RepositoryResult<DomainGeneric> {
        use crate::schema::generics;

        let insertable = DbNewGeneric::from(new_generic);

        let created = diesel::insert_into(generics::table)
            .values(&insertable)
            .returning(DbGeneric::as_returning())
            .get_result::<DbGeneric>(self.conn())?;

        Ok(created.into())
    }
}
