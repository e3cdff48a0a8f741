use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Shipping details typed in by the customer on the delivery form.
///
/// A missing field deserializes to an empty string, which the validators
/// treat the same as an absent value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl DeliveryInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Build from the key/value form used by the delivery screen
    /// (`name`, `phone`, `address`). Unknown keys are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            name: get("name"),
            phone: get("phone"),
            address: get("address"),
        }
    }

    /// Checks name, then phone, then address and stops at the first failure.
    pub fn validate(&self) -> Result<(), InvalidDeliveryInfo> {
        if !validate_name(&self.name) {
            return Err(InvalidDeliveryInfo::new(DeliveryField::Name));
        }
        if !validate_phone_number(&self.phone) {
            return Err(InvalidDeliveryInfo::new(DeliveryField::Phone));
        }
        if !validate_address(&self.address) {
            return Err(InvalidDeliveryInfo::new(DeliveryField::Address));
        }
        Ok(())
    }
}

/// The delivery form field that failed validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryField {
    Name,
    Phone,
    Address,
}

impl DeliveryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryField::Name => "name",
            DeliveryField::Phone => "phone",
            DeliveryField::Address => "address",
        }
    }

    /// User-facing message shown in the error popup
    pub fn message(&self) -> &'static str {
        match self {
            DeliveryField::Name => "Invalid name",
            DeliveryField::Phone => "Invalid phone number",
            DeliveryField::Address => "Invalid address",
        }
    }
}

impl fmt::Display for DeliveryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .field.message())]
pub struct InvalidDeliveryInfo {
    pub field: DeliveryField,
}

impl InvalidDeliveryInfo {
    pub fn new(field: DeliveryField) -> Self {
        Self { field }
    }

    pub fn message(&self) -> &'static str {
        self.field.message()
    }
}

/// Exactly ten ASCII digits, the first being `0`.
pub fn validate_phone_number(phone: &str) -> bool {
    phone.len() == 10 && phone.starts_with('0') && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty, and only spaces and ASCII letters.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c == ' ' || c.is_ascii_alphabetic())
}

/// Non-empty, and only spaces, ASCII letters and ASCII digits.
pub fn validate_address(address: &str) -> bool {
    !address.is_empty() && address.chars().all(|c| c == ' ' || c.is_ascii_alphanumeric())
}
