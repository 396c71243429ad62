use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_type::{
    NewProductType as DomainNewProductType, ProductType as DomainProductType,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_types)]
pub struct ProductType {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_types)]
pub struct NewProductType<'a> {
    pub name: &'a str,
    pub short_name: &'a str,
    pub created_by: &'a str,
}

impl From<ProductType> for DomainProductType {
    fn from(value: ProductType) -> Self {
        Self {
            id: value.id,
            name: value.name,
            short_name: value.short_name,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProductType> for NewProductType<'a> {
    fn from(value: &'a DomainNewProductType) -> Self {
        Self {
            name: value.name.as_str(),
            short_name: value.short_name.as_str(),
            created_by: value.created_by.as_str(),
        }
    }
}
