//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod client_directory;
mod credit_history;
mod grant_ledger;

pub use client_directory::*;
pub use credit_history::*;
pub use grant_ledger::*;
