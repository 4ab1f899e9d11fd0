//! Validation utilities for the Garden Planner
//!
//! Form-level checks the UI runs before saving. The derivation engine
//! trusts its anchor and never re-validates ordering itself; these helpers
//! are how the caller surfaces ordering violations as field errors.

use chrono::NaiveDate;

use crate::timing::TimingSnapshot;

// ============================================================================
// Planting Date Validations
// ============================================================================

/// Validate that the planned dates keep the sow <= transplant <= harvest
/// ordering. Only the pairs that are actually present are checked; same-day
/// transitions are allowed.
pub fn validate_date_ordering(
    sow: Option<NaiveDate>,
    transplant: Option<NaiveDate>,
    harvest: Option<NaiveDate>,
) -> Result<(), &'static str> {
    if let (Some(sow), Some(transplant)) = (sow, transplant) {
        if transplant < sow {
            return Err("Transplant date must not be before sow date");
        }
    }
    if let (Some(transplant), Some(harvest)) = (transplant, harvest) {
        if harvest < transplant {
            return Err("Harvest date must not be before transplant date");
        }
    }
    if let (Some(sow), Some(harvest)) = (sow, harvest) {
        if harvest < sow {
            return Err("Harvest date must not be before sow date");
        }
    }
    Ok(())
}

/// Validate a snapshot's date ordering in one call.
pub fn validate_snapshot_ordering(snapshot: &TimingSnapshot) -> Result<(), &'static str> {
    validate_date_ordering(
        snapshot.sow_date,
        snapshot.transplant_date,
        snapshot.harvest_date,
    )
}

/// Validate that a harvest window does not end before it starts.
pub fn validate_harvest_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), &'static str> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err("Harvest end date must not be before harvest start date");
        }
    }
    Ok(())
}

// ============================================================================
// Timing Parameter Validations
// ============================================================================

/// Validate a days-to-maturity or days-to-transplant figure.
pub fn validate_timing_days(days: i32) -> Result<(), &'static str> {
    if days < 0 {
        return Err("Timing parameters cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate a planting quantity (at least one plant).
pub fn validate_quantity(quantity: u32) -> Result<(), &'static str> {
    if quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    Ok(())
}

/// Validate a garden plan name.
pub fn validate_plan_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Plan name is required");
    }
    if name.len() > 200 {
        return Err("Plan name must be at most 200 characters");
    }
    Ok(())
}
