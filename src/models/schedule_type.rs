use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::schedule_type::{
    NewScheduleType as DomainNewScheduleType, ScheduleType as DomainScheduleType,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::schedule_types)]
pub struct ScheduleType {
    pub id: i32,
    pub name: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::schedule_types)]
pub struct NewScheduleType<'a> {
    pub name: &'a str,
    pub created_by: &'a str,
}

impl From<ScheduleType> for DomainScheduleType {
    fn from(value: ScheduleType) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewScheduleType> for NewScheduleType<'a> {
    fn from(value: &'a DomainNewScheduleType) -> Self {
        Self {
            name: value.name.as_str(),
            created_by: value.created_by.as_str(),
        }
    }
}
