//! EMA Resolver WASM Module
//!
//! Resolves EMA (Enhancing Music Addressability) expressions such as
//! `"1-4/1-2/@1-2.5/cut"` into the measures, staves and beat ranges they
//! select in a music document, given the document's structural metadata.
//!
//! ```
//! use ema_wasm::{DocInfo, EmaExpression, TimeSignature};
//!
//! let staves = vec!["Soprano".to_string(), "Alto".to_string()];
//! let doc_info = DocInfo::new(4, staves, TimeSignature::new(6, 8));
//! let exp = EmaExpression::parse(doc_info, "2-end/1/@all/cut").unwrap();
//! assert_eq!(exp.selection().measure_indices(), vec![2, 3, 4]);
//! ```

pub mod errors;
pub mod models;
pub mod parse;
pub mod resolver;
pub mod expression;
pub mod api;

// Re-export commonly used types
pub use errors::{EmaError, RangeKind};
pub use models::*;
pub use expression::{resolve_address, EmaExpression};

use wasm_bindgen::prelude::*;

// Runs when the WASM module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            api::helpers::log_warn("logger already initialized");
        }
    }

    log::info!("EMA resolver WASM module initialized");
}
