// ABOUTME: Record and input types for the users and phones tables
// ABOUTME: Wire names follow the external interface (camelCase for phones)

use serde::{Deserialize, Serialize};

/// A persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub pk: i64,
    pub name: String,
    pub age: i64,
}

/// Fields for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreateInput {
    pub name: String,
    pub age: i64,
}

/// A persisted phone row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    #[serde(rename = "phoneID")]
    pub phone_id: i64,
    #[serde(rename = "contactName")]
    pub contact_name: String,
    #[serde(rename = "phoneValue")]
    pub phone_value: String,
}

/// Fields for creating a phone
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneCreateInput {
    #[serde(rename = "contactName")]
    pub contact_name: String,
    #[serde(rename = "phoneValue")]
    pub phone_value: String,
}
