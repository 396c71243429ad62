use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::products,
    belongs_to(super::product_type::ProductType, foreign_key = product_type_id),
    belongs_to(super::manufacturer::Manufacturer, foreign_key = manufacturer_id),
    belongs_to(super::schedule_type::ScheduleType, foreign_key = schedule_type_id)
)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub hsn_code: Option<String>,
    pub packing: String,
    pub purchase_unit: String,
    pub sale_unit: String,
    pub product_type_id: i32,
    pub manufacturer_id: i32,
    pub mrp: f64,
    pub purchase_tax_id: i32,
    pub sale_tax_id: i32,
    pub schedule_type_id: i32,
    pub is_active: bool,
    pub inactive_from: Option<NaiveDateTime>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub hsn_code: Option<&'a str>,
    pub packing: &'a str,
    pub purchase_unit: &'a str,
    pub sale_unit: &'a str,
    pub product_type_id: i32,
    pub manufacturer_id: i32,
    pub mrp: f64,
    pub purchase_tax_id: i32,
    pub sale_tax_id: i32,
    pub schedule_type_id: i32,
    pub is_active: bool,
    pub created_by: &'a str,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            hsn_code: value.hsn_code,
            packing: value.packing,
            purchase_unit: value.purchase_unit,
            sale_unit: value.sale_unit,
            product_type_id: value.product_type_id,
            manufacturer_id: value.manufacturer_id,
            mrp: value.mrp,
            purchase_tax_id: value.purchase_tax_id,
            sale_tax_id: value.sale_tax_id,
            schedule_type_id: value.schedule_type_id,
            is_active: value.is_active,
            inactive_from: value.inactive_from,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            hsn_code: value.hsn_code.as_deref(),
            packing: value.packing.as_str(),
            purchase_unit: value.purchase_unit.as_str(),
            sale_unit: value.sale_unit.as_str(),
            product_type_id: value.product_type_id,
            manufacturer_id: value.manufacturer_id,
            mrp: value.mrp,
            purchase_tax_id: value.purchase_tax_id,
            sale_tax_id: value.sale_tax_id,
            schedule_type_id: value.schedule_type_id,
            is_active: value.is_active,
            created_by: value.created_by.as_str(),
        }
    }
}
