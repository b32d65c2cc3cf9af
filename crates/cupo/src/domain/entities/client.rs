//! Person and Client - identity records in the client directory

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::IdType;

/// A person applying for credit, uniquely named by their identifier pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Kind of identifier, e.g. passport or national id.
    pub id_type: IdType,
    /// Identifier value within the country.
    pub id_value: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A registered client: a person plus the surrogate id assigned on creation.
///
/// Lookup is keyed on the identifier pair, not the surrogate id. Records are
/// created once on the first credit request from an unseen pair and never
/// updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned surrogate id.
    pub id: i64,
    pub id_type: IdType,
    pub id_value: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
