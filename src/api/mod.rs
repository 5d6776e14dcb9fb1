//! EMA resolver WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging, JS (de)serialization and error conversion
//! - `core`: the exported `resolveEma`, `expandEmaRange` and `expandBeatRange`

pub mod helpers;
pub mod core;

pub use self::core::*;
