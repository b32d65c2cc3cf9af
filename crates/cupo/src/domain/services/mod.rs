//! Domain Services
//!
//! Pure domain computations with no I/O.

mod quota;

pub use quota::*;
