//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod http;
pub mod postgres;

// Re-exports
pub use http::HttpRiskOracle;
pub use postgres::{PgClientDirectory, PgCreditHistory, PgGrantLedger};
