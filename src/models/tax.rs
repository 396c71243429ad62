use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tax::{NewTax as DomainNewTax, Tax as DomainTax};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::taxes)]
pub struct Tax {
    pub id: i32,
    pub description: String,
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::taxes)]
pub struct NewTax<'a> {
    pub description: &'a str,
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub created_by: &'a str,
}

impl From<Tax> for DomainTax {
    fn from(value: Tax) -> Self {
        Self {
            id: value.id,
            description: value.description,
            igst: value.igst,
            cgst: value.cgst,
            sgst: value.sgst,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTax> for NewTax<'a> {
    fn from(value: &'a DomainNewTax) -> Self {
        Self {
            description: value.description.as_str(),
            igst: value.igst,
            cgst: value.cgst,
            sgst: value.sgst,
            created_by: value.created_by.as_str(),
        }
    }
}
