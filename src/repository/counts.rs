use diesel::prelude::*;

use crate::domain::counts::EntityCounts;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, MasterDataReader};

impl MasterDataReader for DieselStore {
    fn count_master_rows(&mut self) -> RepositoryResult<EntityCounts> {
        use crate::schema::{
            generics, manufacturers, product_categories, product_generics, product_types,
            products, schedule_types, taxes,
        };

        let conn = self.conn();

        Ok(EntityCounts {
            taxes: taxes::table.count().get_result::<i64>(conn)? as usize,
            product_types: product_types::table.count().get_result::<i64>(conn)? as usize,
            categories: product_categories::table.count().get_result::<i64>(conn)? as usize,
            manufacturers: manufacturers::table.count().get_result::<i64>(conn)? as usize,
            schedule_types: schedule_types::table.count().get_result::<i64>(conn)? as usize,
            generics: generics::table.count().get_result::<i64>(conn)? as usize,
            products: products::table.count().get_result::<i64>(conn)? as usize,
            product_generics: product_generics::table.count().get_result::<i64>(conn)? as usize,
        })
    }
}
