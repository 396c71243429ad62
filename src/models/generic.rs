use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::generic::{Generic as DomainGeneric, NewGeneric as DomainNewGeneric};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::generics,
    belongs_to(super::category::Category, foreign_key = category_id)
)]
pub struct Generic {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::generics)]
pub struct NewGeneric<'a> {
    pub name: &'a str,
    pub category_id: i32,
    pub created_by: &'a str,
}

impl From<Generic> for DomainGeneric {
    fn from(value: Generic) -> Self {
        Self {
            id: value.id,
            name: value.name,
            category_id: value.category_id,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewGeneric> for NewGeneric<'a> {
    fn from(value: &'a DomainNewGeneric) -> Self {
        Self {
            name: value.name.as_str(),
            category_id: value.category_id,
            created_by: value.created_by.as_str(),
        }
    }
}
