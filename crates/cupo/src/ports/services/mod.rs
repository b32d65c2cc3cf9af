//! Service Ports
//!
//! Abstract interfaces for external collaborators.

mod risk_oracle;

pub use risk_oracle::*;
