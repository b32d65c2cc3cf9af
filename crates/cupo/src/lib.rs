//! Cupo Domain Library
//!
//! Core domain types and interfaces for the cupo credit evaluation system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Person, Client, CreditGrant)
//!   - `value_objects/`: Immutable value types (IdType, RiskCategory)
//!   - `services/`: Pure domain computations (quota evaluation)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External collaborator interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use cupo::domain::{Person, QuotaInput};
//! use cupo::ports::{ClientDirectory, RiskOracle};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    evaluate_quota, Client, CreditGrant, CreditRequest, DomainError, IdType, NewCreditGrant,
    Person, QuotaInput, RiskCategory,
};
pub use ports::{ClientDirectory, CreditHistory, GrantLedger, RiskOracle};
