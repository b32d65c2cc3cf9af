//! CreditRequest - one incoming credit evaluation request

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Person;

/// Data submitted to request a credit line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRequest {
    pub person: Person,
    /// Salary the person declares at request time.
    pub current_salary: Decimal,
}
