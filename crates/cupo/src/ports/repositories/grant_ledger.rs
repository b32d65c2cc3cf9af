//! Grant Ledger Port
//!
//! Append-only persistence of credit grants.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, CreditGrant, NewCreditGrant};

/// Store for new credit grants. Grants are never mutated or deleted here;
/// closing one is outside this core.
#[async_trait]
pub trait GrantLedger: Send + Sync {
    /// Append a grant record, returning it with its assigned id.
    async fn record(&self, grant: &NewCreditGrant) -> Result<CreditGrant, DomainError>;
}
