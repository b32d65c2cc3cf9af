//! Environment-driven configuration
//!
//! Values are read from process env; a `.env` file is honored when present.

use anyhow::Context;
use sqlx::PgPool;

/// Connection settings for the relational store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        Ok(Self { url })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let pool = PgPool::connect(&self.url)
            .await
            .context("failed to connect to the database")?;
        Ok(pool)
    }
}

/// Endpoint settings for the external risk-scoring firm.
#[derive(Debug, Clone)]
pub struct RiskOracleConfig {
    /// Base URL of the firm's REST API.
    pub base_url: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
}

impl RiskOracleConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("RISK_ORACLE_URL").context("RISK_ORACLE_URL is not set")?;
        let api_key = std::env::var("RISK_ORACLE_API_KEY").ok();
        Ok(Self { base_url, api_key })
    }
}
