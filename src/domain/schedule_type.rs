use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Regulatory schedule governing how a drug may be sold (e.g. `Schedule H`, `OTC`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleType {
    pub id: i32,
    pub name: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new schedule type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleType {
    pub name: String,
    pub created_by: String,
}

impl NewScheduleType {
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            created_by: created_by.into(),
        }
    }
}
