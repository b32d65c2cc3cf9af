//! Risk Oracle Port
//!
//! Abstract interface for the external risk-scoring firm. The firm computes
//! the risk model; this core only consumes its verdict.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, IdType, RiskCategory};

/// External collaborator reporting a person's risk category.
#[async_trait]
pub trait RiskOracle: Send + Sync {
    /// Risk category for the person behind the identifier pair.
    async fn risk_by_client(
        &self,
        id_type: IdType,
        id_value: &str,
    ) -> Result<RiskCategory, DomainError>;
}
