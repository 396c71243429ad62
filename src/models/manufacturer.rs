use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::manufacturer::{
    Manufacturer as DomainManufacturer, NewManufacturer as DomainNewManufacturer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::manufacturers)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub email: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::manufacturers)]
pub struct NewManufacturer<'a> {
    pub name: &'a str,
    pub short_name: &'a str,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub pin: Option<&'a str>,
    pub contact_name: Option<&'a str>,
    pub contact_phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub created_by: &'a str,
}

impl From<Manufacturer> for DomainManufacturer {
    fn from(value: Manufacturer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            short_name: value.short_name,
            address: value.address,
            city: value.city,
            state: value.state,
            pin: value.pin,
            contact_name: value.contact_name,
            contact_phone: value.contact_phone,
            email: value.email,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewManufacturer> for NewManufacturer<'a> {
    fn from(value: &'a DomainNewManufacturer) -> Self {
        Self {
            name: value.name.as_str(),
            short_name: value.short_name.as_str(),
            address: value.address.as_deref(),
            city: value.city.as_deref(),
            state: value.state.as_deref(),
            pin: value.pin.as_deref(),
            contact_name: value.contact_name.as_deref(),
            contact_phone: value.contact_phone.as_deref(),
            email: value.email.as_deref(),
            created_by: value.created_by.as_str(),
        }
    }
}
