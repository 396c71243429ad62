use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_generic::{
    NewProductGeneric as DomainNewProductGeneric, ProductGeneric as DomainProductGeneric,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product_generics,
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::generic::Generic, foreign_key = generic_id)
)]
pub struct ProductGeneric {
    pub id: i32,
    pub product_id: i32,
    pub generic_id: i32,
    pub strength: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_generics)]
pub struct NewProductGeneric<'a> {
    pub product_id: i32,
    pub generic_id: i32,
    pub strength: &'a str,
    pub created_by: &'a str,
}

impl From<ProductGeneric> for DomainProductGeneric {
    fn from(value: ProductGeneric) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            generic_id: value.generic_id,
            strength: value.strength,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProductGeneric> for NewProductGeneric<'a> {
    fn from(value: &'a DomainNewProductGeneric) -> Self {
        Self {
            product_id: value.product_id,
            generic_id: value.generic_id,
            strength: value.strength.as_str(),
            created_by: value.created_by.as_str(),
        }
    }
}
