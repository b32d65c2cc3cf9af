//! Cupo Infrastructure
//!
//! Implementations of the `cupo` domain ports plus the credit evaluation
//! use case:
//!
//! - `adapters/postgres/`: sqlx-backed repositories over the relational store
//! - `adapters/http/`: REST client for the external risk-scoring firm
//! - `application/`: the orchestrating service composing the ports
//! - `config`: environment-driven wiring configuration

pub mod adapters;
pub mod application;
pub mod config;

// Re-exports
pub use adapters::postgres::run_migrations;
pub use adapters::{HttpRiskOracle, PgClientDirectory, PgCreditHistory, PgGrantLedger};
pub use application::CreditEvaluationService;
pub use config::{DatabaseConfig, RiskOracleConfig};
