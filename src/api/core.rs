//! WASM API for EMA resolution
//!
//! JavaScript-facing entry points. Document metadata arrives as a plain
//! object shaped like [`DocInfo`]; results go back as plain objects.

use wasm_bindgen::prelude::*;

use crate::errors::RangeKind;
use crate::expression::EmaExpression;
use crate::models::DocInfo;
use crate::parse::{BeatSpec, EmaRange};
use crate::{wasm_info, wasm_log};
use super::helpers::{deserialize, ema_error, serialize};

/// Resolve an EMA address against document metadata
///
/// # Parameters
/// - `doc_info_js`: object with `measures`, `staves`, `beats` and optional
///   `measure_labels` / `completeness`
/// - `address`: EMA address, e.g. `"1-4/1-2/@all/cut"`
///
/// # Returns
/// Object with the raw address components, the document metadata and the
/// resolved `selection`. Throws `Error("Bad API request")` or
/// `Error("EMA Range out of bounds")`.
#[wasm_bindgen(js_name = resolveEma)]
pub fn resolve_ema(doc_info_js: JsValue, address: &str) -> Result<JsValue, JsValue> {
    wasm_info!("resolveEma called: address='{}'", address);

    let doc_info: DocInfo = deserialize(doc_info_js, "DocInfo deserialization error")?;
    let expression = EmaExpression::parse(doc_info, address).map_err(ema_error)?;

    wasm_log!("  Selected {} measure(s)", expression.selection().len());
    serialize(&expression, "Selection serialization error")
}

/// Expand a measure or staff range (`"2-end"`) into its indices
#[wasm_bindgen(js_name = expandEmaRange)]
pub fn expand_ema_range(range: &str, total: u32) -> Result<JsValue, JsValue> {
    let parsed = EmaRange::<u32>::parse(range).map_err(ema_error)?;
    let indices = parsed.to_indices(total, RangeKind::Measure).map_err(ema_error)?;
    serialize(&indices, "Range serialization error")
}

/// Expand a beat range (`"1.5-end"`) into beat markers for a measure
/// with `beat_count` beats
#[wasm_bindgen(js_name = expandBeatRange)]
pub fn expand_beat_range(range: &str, beat_count: u32) -> Result<JsValue, JsValue> {
    let parsed = BeatSpec::parse(range).map_err(ema_error)?;
    let positions = parsed.to_positions(beat_count).map_err(ema_error)?;
    serialize(&positions, "Range serialization error")
}
