//! WebAssembly module for the Garden Planner
//!
//! Provides client-side computation for:
//! - Planting-date derivation as form fields change
//! - Date-ordering validation before save
//! - Duration and yield-string parsing
//!
//! The boundary is JSON in, JSON out: the form layer passes its current
//! state, names the field the user just edited, and spreads the returned
//! delta back into its state.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::timing::*;
pub use shared::validation::*;

use shared::timing;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Form state as the browser holds it: dates still strings, possibly
/// mid-edit. Malformed dates count as absent per the engine contract.
#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    sow_date: Option<String>,
    transplant_date: Option<String>,
    harvest_date: Option<String>,
    days_to_maturity: Option<i32>,
    days_to_transplant: Option<i32>,
}

impl RawSnapshot {
    fn into_snapshot(self) -> TimingSnapshot {
        TimingSnapshot {
            sow_date: self.sow_date.as_deref().and_then(parse_date),
            transplant_date: self.transplant_date.as_deref().and_then(parse_date),
            harvest_date: self.harvest_date.as_deref().and_then(parse_date),
            days_to_maturity: self.days_to_maturity,
            days_to_transplant: self.days_to_transplant,
        }
    }
}

fn parse_anchor(anchor: &str) -> Result<AnchorField, JsValue> {
    match anchor {
        "sow" => Ok(AnchorField::Sow),
        "transplant" => Ok(AnchorField::Transplant),
        "harvest" => Ok(AnchorField::Harvest),
        other => Err(JsValue::from_str(&format!("Unknown anchor field: {}", other))),
    }
}

fn parse_method(method: &str) -> Result<PlantingMethod, JsValue> {
    method
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown planting method: {}", method)))
}

/// Derive the non-anchor planting dates from the current form state.
///
/// `snapshot_json` holds the form's dates (as `YYYY-MM-DD` strings) and
/// timing parameters; `anchor` is "sow" | "transplant" | "harvest";
/// `method` is the product's planting-method string (e.g. "Seed Starting").
/// Returns a JSON object containing only the recomputed date fields.
#[wasm_bindgen]
pub fn derive_planting_dates(
    snapshot_json: &str,
    anchor: &str,
    method: &str,
) -> Result<String, JsValue> {
    let raw: RawSnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))?;
    let anchor = parse_anchor(anchor)?;
    let method = parse_method(method)?;

    let delta = timing::derive_dates(&raw.into_snapshot(), anchor, method);
    serde_json::to_string(&delta).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pick the anchor to re-derive from after a planting-method change.
/// Returns the anchor field name, or None when no still-valid date exists.
#[wasm_bindgen]
pub fn anchor_after_method_change(
    snapshot_json: &str,
    method: &str,
) -> Result<Option<String>, JsValue> {
    let raw: RawSnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))?;
    let method = parse_method(method)?;

    let snapshot = raw.into_snapshot().for_method(method);
    Ok(timing::preferred_anchor(&snapshot, method).map(|anchor| anchor.to_string()))
}

/// Validate sow/transplant/harvest ordering. Empty or malformed strings
/// count as absent; only the pairs present are compared.
#[wasm_bindgen]
pub fn validate_planting_date_order(sow: &str, transplant: &str, harvest: &str) -> bool {
    validate_date_ordering(parse_date(sow), parse_date(transplant), parse_date(harvest)).is_ok()
}

/// Parse a duration string from the plant library ("60", "60-70 days").
/// Returns None when no number can be extracted.
#[wasm_bindgen]
pub fn parse_duration_days(value: &str) -> Option<i32> {
    timing::parse_days(value)
}

/// The next lifecycle status for a planting, or None when already done.
/// `method` may be empty when the planting has no method set.
#[wasm_bindgen]
pub fn next_planting_status(status: &str, method: &str) -> Option<String> {
    let status: PlantingStatus = status.parse().ok()?;
    let method = if method.is_empty() {
        None
    } else {
        method.parse::<PlantingMethod>().ok()
    };
    status.next(method).map(|next| next.to_string())
}

/// Total recorded yield across all weeks of a weekly-yield string.
#[wasm_bindgen]
pub fn total_weekly_yield(data: &str) -> f64 {
    let total: rust_decimal::Decimal = parse_weekly_yield(data)
        .iter()
        .map(|point| point.amount)
        .sum();
    total.to_string().parse().unwrap_or(0.0)
}
