//! IdType - Kinds of personal identifiers in a country

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Kind of identifier naming a person.
///
/// The lower-case strings ("national id", "passport") are the external
/// contract: they are what the store persists and what collaborators send.
/// Reads are case-insensitive, writes always use the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdType {
    #[serde(rename = "national id")]
    NationalId,
    #[serde(rename = "passport")]
    Passport,
}

impl IdType {
    /// Canonical external string for this identifier kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::NationalId => "national id",
            IdType::Passport => "passport",
        }
    }
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IdType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "national id" => Ok(IdType::NationalId),
            "passport" => Ok(IdType::Passport),
            _ => Err(DomainError::Validation(format!(
                "Unknown identifier type: {}",
                s
            ))),
        }
    }
}
