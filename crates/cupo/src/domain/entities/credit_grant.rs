//! CreditGrant - a credit amount extended to a client

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded credit grant. `repaid_on == None` means the grant is still
/// outstanding; a date means it was closed historically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditGrant {
    pub id: i64,
    /// Surrogate id of the owning client.
    pub client_id: i64,
    /// Granted amount, non-negative.
    pub amount: Decimal,
    pub granted_on: NaiveDate,
    pub repaid_on: Option<NaiveDate>,
}

impl CreditGrant {
    pub fn is_outstanding(&self) -> bool {
        self.repaid_on.is_none()
    }
}

/// A grant about to be recorded, before the store assigns its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCreditGrant {
    pub client_id: i64,
    pub amount: Decimal,
    pub granted_on: NaiveDate,
}

impl NewCreditGrant {
    /// A grant dated today, still open.
    pub fn granted_today(client_id: i64, amount: Decimal) -> Self {
        Self {
            client_id,
            amount,
            granted_on: chrono::Utc::now().date_naive(),
        }
    }
}
