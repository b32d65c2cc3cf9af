//! Credit History Port
//!
//! Read-only aggregate queries over a client's past grants.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::errors::DomainError;

/// Reader over the grant records a client accumulated.
///
/// Both queries return zero for clients with no matching grants; they only
/// fail on transport faults.
#[async_trait]
pub trait CreditHistory: Send + Sync {
    /// Largest amount among the client's fully repaid grants.
    async fn max_repaid_amount(&self, client_id: i64) -> Result<Decimal, DomainError>;

    /// Sum of the client's currently outstanding grant amounts.
    async fn current_outstanding_total(&self, client_id: i64) -> Result<Decimal, DomainError>;
}
