use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a drug manufacturer with its postal and contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manufacturer {
    /// Generated manufacturer code.
    pub id: i32,
    /// Registered company name.
    pub name: String,
    /// Three letter abbreviation.
    pub short_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Postal index number.
    pub pin: Option<String>,
    /// Name of the contact person.
    pub contact_name: Option<String>,
    /// Phone number of the contact person.
    pub contact_phone: Option<String>,
    pub email: Option<String>,
    /// Audit name of the creator.
    pub created_by: String,
    /// Timestamp for when the manufacturer record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the manufacturer record.
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload required to insert a new manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewManufacturer {
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
}

impl NewManufacturer {
    /// Build a manufacturer payload without postal or contact details.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            short_name: short_name.into().trim().to_string(),
            address: None,
            city: None,
            state: None,
            pin: None,
            contact_name: None,
            contact_phone: None,
            email: None,
            created_by: created_by.into(),
        }
    }

    /// Attach the postal address of the manufacturer.
    pub fn with_address(
        mut self,
        address: Option<String>,
        city: Option<String>,
        state: Option<String>,
        pin: Option<String>,
    ) -> Self {
        self.address = address;
        self.city = city;
        self.state = state;
        self.pin = pin;
        self
    }

    /// Attach the contact person details of the manufacturer.
    pub fn with_contact(
        mut self,
        contact_name: Option<String>,
        contact_phone: Option<String>,
        email: Option<String>,
    ) -> Self {
        self.contact_name = contact_name;
        self.contact_phone = contact_phone;
        self.email = email;
        self
    }
}
