//! Wiring example: evaluate one credit request against a live database and
//! risk firm endpoint.
//!
//! Requires `DATABASE_URL` and `RISK_ORACLE_URL` (plus an optional
//! `RISK_ORACLE_API_KEY`), from the environment or a `.env` file.

use std::sync::Arc;

use rust_decimal_macros::dec;

use cupo::{CreditRequest, IdType, Person};
use cupo_store::{
    run_migrations, CreditEvaluationService, DatabaseConfig, HttpRiskOracle, PgClientDirectory,
    PgCreditHistory, PgGrantLedger, RiskOracleConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let pool = DatabaseConfig::from_env()?.connect().await?;
    run_migrations(&pool).await?;

    let service = CreditEvaluationService::new(
        Arc::new(PgClientDirectory::new(pool.clone())),
        Arc::new(PgCreditHistory::new(pool.clone())),
        Arc::new(PgGrantLedger::new(pool)),
        Arc::new(HttpRiskOracle::new(RiskOracleConfig::from_env()?)),
    );

    let request = CreditRequest {
        person: Person {
            id_type: IdType::NationalId,
            id_value: "11223344".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Gomez".to_string(),
            email: "maria@example.com".to_string(),
        },
        current_salary: dec!(2000000),
    };

    match service.evaluate_credit_request(request).await? {
        Some(grant) => println!("Granted {} on {}", grant.amount, grant.granted_on),
        None => println!("No grant recorded"),
    }

    Ok(())
}
