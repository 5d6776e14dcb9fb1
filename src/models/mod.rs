//! Models module for EMA resolution
//!
//! Document metadata going in, selections coming out.

pub mod doc_info;
pub mod selection;
pub mod serde_helpers;

// Re-export commonly used types
pub use doc_info::*;
pub use selection::*;
