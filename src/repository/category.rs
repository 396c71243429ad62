use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselStore};

impl CategoryReader for DieselStore {
    fn list_categories(&mut self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::product_categories;

        let db_categories = product_categories::table
            .order(product_categories::id.asc())
            .select(DbCategory::as_select())
            .load::<DbCategory>(self.conn())?;

        Ok(db_categories.into_iter().map(DomainCategory::from).collect())
    }
}

impl CategoryWriter for DieselStore {
    fn create_category(
        &mut self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::product_categories;

        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(product_categories::table)
            .values(&insertable)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(self.conn())?;

        Ok(created.into())
    }
}
