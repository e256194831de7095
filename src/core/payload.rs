//! Write view of a store: the fields a client may send on create and update

use super::entity::Store;
use super::error::ValidationError;
use serde_json::{Map, Value};
use validator::Validate;

/// Fields accepted by the write view, in declaration order.
///
/// Declaration order matters: the first missing field is the one reported
/// on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteField {
    Name,
    Address,
    City,
    PostalCode,
}

impl WriteField {
    pub const ALL: [WriteField; 4] = [
        WriteField::Name,
        WriteField::Address,
        WriteField::City,
        WriteField::PostalCode,
    ];

    /// Key used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            WriteField::Name => "name",
            WriteField::Address => "address",
            WriteField::City => "city",
            WriteField::PostalCode => "postalCode",
        }
    }

    /// Key used by constraint violations
    pub(crate) fn struct_field(self) -> &'static str {
        match self {
            WriteField::Name => "name",
            WriteField::Address => "address",
            WriteField::City => "city",
            WriteField::PostalCode => "postal_code",
        }
    }
}

/// Decoded request body for create and update.
///
/// Each field tracks presence: `None` means the key was absent (or `null`),
/// `Some("")` means it was sent empty. Length caps apply only to present
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct StorePayload {
    #[validate(length(max = 255, message = "Name cannot be longer than 255 characters."))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Address cannot be longer than 255 characters."))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "City cannot be longer than 100 characters."))]
    pub city: Option<String>,

    // Column allows 10; the write view only accepts 5.
    #[validate(length(max = 5, message = "Postal code cannot be longer than 5 characters."))]
    pub postal_code: Option<String>,
}

impl StorePayload {
    /// Decode the write view out of a JSON object.
    ///
    /// Unknown keys are ignored. A known key holding something other than a
    /// string or `null` is rejected.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: string_field(object, WriteField::Name)?,
            address: string_field(object, WriteField::Address)?,
            city: string_field(object, WriteField::City)?,
            postal_code: string_field(object, WriteField::PostalCode)?,
        })
    }

    pub fn get(&self, field: WriteField) -> Option<&str> {
        match field {
            WriteField::Name => self.name.as_deref(),
            WriteField::Address => self.address.as_deref(),
            WriteField::City => self.city.as_deref(),
            WriteField::PostalCode => self.postal_code.as_deref(),
        }
    }

    /// Overwrite every present field on `store`; absent fields are left alone.
    pub fn apply_to(self, store: &mut Store) {
        if let Some(name) = self.name {
            store.name = name;
        }
        if let Some(address) = self.address {
            store.address = address;
        }
        if let Some(city) = self.city {
            store.city = city;
        }
        if let Some(postal_code) = self.postal_code {
            store.postal_code = postal_code;
        }
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: WriteField,
) -> Result<Option<String>, ValidationError> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::InvalidType {
            field: field.as_str().to_string(),
        }),
    }
}
