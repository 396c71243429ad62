use diesel::prelude::*;

use crate::domain::tax::{NewTax as DomainNewTax, Tax as DomainTax};
use crate::models::tax::{NewTax as DbNewTax, Tax as DbTax};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, TaxReader, TaxWriter};

impl TaxReader for DieselStore {
    fn list_taxes(&mut self) -> RepositoryResult<Vec<DomainTax>> {
        use crate::schema::taxes;

        let db_taxes = taxes::table
            .order(taxes::id.asc())
            .select(DbTax::as_select())
            .load::<DbTax>(self.conn())?;

        Ok(db_taxes.into_iter().map(DomainTax::from).collect())
    }
}

impl TaxWriter for DieselStore {
    fn create_tax(&mut self, new_tax: &DomainNewTax) -> RepositoryResult<DomainTax> {
        use crate::schema::taxes;

        let insertable = DbNewTax::from(new_tax);

        let created = diesel::insert_into(taxes::table)
            .values(&insertable)
            .returning(DbTax::as_returning())
            .get_result::<DbTax>(self.conn())?;

        Ok(created.into())
    }
}
