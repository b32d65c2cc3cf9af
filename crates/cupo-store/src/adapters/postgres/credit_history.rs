//! PostgreSQL implementation of CreditHistory

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use cupo::{CreditHistory, DomainError};

/// Maximum amount among the client's repaid grants, zero when none.
const MAX_REPAID_AMOUNT: &str = "SELECT COALESCE(MAX(amount), 0) FROM credits \
     WHERE repaid_on IS NOT NULL AND client_id = $1";

/// Sum of the client's open grant amounts, zero when none.
const CURRENT_OUTSTANDING_TOTAL: &str = "SELECT COALESCE(SUM(amount), 0) FROM credits \
     WHERE repaid_on IS NULL AND client_id = $1";

/// PostgreSQL implementation of CreditHistory
pub struct PgCreditHistory {
    pool: PgPool,
}

impl PgCreditHistory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditHistory for PgCreditHistory {
    async fn max_repaid_amount(&self, client_id: i64) -> Result<Decimal, DomainError> {
        sqlx::query_scalar::<_, Decimal>(MAX_REPAID_AMOUNT)
            .bind(client_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn current_outstanding_total(&self, client_id: i64) -> Result<Decimal, DomainError> {
        sqlx::query_scalar::<_, Decimal>(CURRENT_OUTSTANDING_TOTAL)
            .bind(client_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }
}
