//! Parsing module for EMA addresses
//!
//! Turns the textual address into unresolved range lists.

pub mod tokens;
pub mod range;
pub mod grammar;

// Re-export commonly used types
pub use tokens::*;
pub use range::*;
pub use grammar::*;
