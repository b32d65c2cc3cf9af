//! PostgreSQL implementation of GrantLedger

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use cupo::{CreditGrant, DomainError, GrantLedger, NewCreditGrant};

const RECORD_GRANT: &str = "INSERT INTO credits (client_id, amount, granted_on) VALUES ($1, $2, $3) \
     RETURNING id, client_id, amount, granted_on, repaid_on";

/// PostgreSQL implementation of GrantLedger
pub struct PgGrantLedger {
    pool: PgPool,
}

impl PgGrantLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CreditRow {
    id: i64,
    client_id: i64,
    amount: Decimal,
    granted_on: NaiveDate,
    repaid_on: Option<NaiveDate>,
}

impl From<CreditRow> for CreditGrant {
    fn from(row: CreditRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            amount: row.amount,
            granted_on: row.granted_on,
            repaid_on: row.repaid_on,
        }
    }
}

#[async_trait]
impl GrantLedger for PgGrantLedger {
    async fn record(&self, grant: &NewCreditGrant) -> Result<CreditGrant, DomainError> {
        let row = sqlx::query_as::<_, CreditRow>(RECORD_GRANT)
            .bind(grant.client_id)
            .bind(grant.amount)
            .bind(grant.granted_on)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_maps_to_open_grant() {
        let row = CreditRow {
            id: 9,
            client_id: 3,
            amount: dec!(6300000),
            granted_on: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            repaid_on: None,
        };

        let grant = CreditGrant::from(row);
        assert_eq!(grant.id, 9);
        assert_eq!(grant.amount, dec!(6300000));
        assert!(grant.is_outstanding());
    }
}
