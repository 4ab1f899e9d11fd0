//! Planting-date derivation engine
//!
//! Given one directly-edited date (the anchor), the planting method, and the
//! timing parameters, recomputes the remaining dates so that
//! sow <= transplant <= harvest holds across the method's dependency chain.
//! Stateless and pure: the caller owns the form state, calls in on every
//! field change, and merges the returned delta back.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DeriveError;
use crate::models::PlantingMethod;

/// The date field the user edited last; ground truth for one derivation call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnchorField {
    Sow,
    Transplant,
    Harvest,
}

impl std::fmt::Display for AnchorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorField::Sow => write!(f, "sow"),
            AnchorField::Transplant => write!(f, "transplant"),
            AnchorField::Harvest => write!(f, "harvest"),
        }
    }
}

/// Snapshot of the form's current timing state
///
/// Dates the user has not set yet are `None`. The timing parameters are kept
/// signed so that out-of-range user input survives deserialization and can be
/// rejected (or ignored) by the engine instead of the JSON layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingSnapshot {
    pub sow_date: Option<NaiveDate>,
    pub transplant_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
    pub days_to_maturity: Option<i32>,
    pub days_to_transplant: Option<i32>,
}

impl TimingSnapshot {
    /// The date currently held in the given field.
    pub fn date(&self, field: AnchorField) -> Option<NaiveDate> {
        match field {
            AnchorField::Sow => self.sow_date,
            AnchorField::Transplant => self.transplant_date,
            AnchorField::Harvest => self.harvest_date,
        }
    }

    /// Copy of this snapshot with the date fields the method does not track
    /// cleared (direct seeding has no transplant step, seedlings no sow
    /// date). Mirrors the form clearing those inputs on a method change.
    pub fn for_method(&self, method: PlantingMethod) -> TimingSnapshot {
        let mut snapshot = self.clone();
        if !method.tracks_sow_date() {
            snapshot.sow_date = None;
        }
        if !method.tracks_transplant_date() {
            snapshot.transplant_date = None;
        }
        snapshot
    }

    /// Merge a derivation result back into the snapshot. Fields absent from
    /// the delta are left as they were.
    pub fn apply(&mut self, delta: &DateDelta) {
        if delta.sow_date.is_some() {
            self.sow_date = delta.sow_date;
        }
        if delta.transplant_date.is_some() {
            self.transplant_date = delta.transplant_date;
        }
        if delta.harvest_date.is_some() {
            self.harvest_date = delta.harvest_date;
        }
    }
}

/// Result of one derivation call: only the recomputed fields are present.
///
/// Serializes with absent fields omitted, so the JSON form layer can spread
/// the delta straight into its state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sow_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transplant_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<NaiveDate>,
}

impl DateDelta {
    /// True when the call derived nothing.
    pub fn is_empty(&self) -> bool {
        self.sow_date.is_none() && self.transplant_date.is_none() && self.harvest_date.is_none()
    }
}

/// Recompute the non-anchor dates for the given method's dependency chain.
///
/// Lenient contract: never fails. Missing anchor date, missing
/// days-to-maturity, negative timing parameters, and malformed input all
/// yield an empty delta; the caller's form layer owns user-visible messaging.
pub fn derive_dates(
    current: &TimingSnapshot,
    anchor: AnchorField,
    method: PlantingMethod,
) -> DateDelta {
    match try_derive_dates(current, anchor, method) {
        Ok(delta) => delta,
        Err(err) => {
            tracing::debug!("skipping date derivation: {}", err);
            DateDelta::default()
        }
    }
}

/// Strict variant of [`derive_dates`]
///
/// Distinguishes the benign "not enough info yet" conditions (missing anchor
/// date, missing days-to-maturity) from invalid input (negative timing
/// parameters, calendar overflow). See [`DeriveError::is_benign`].
pub fn try_derive_dates(
    current: &TimingSnapshot,
    anchor: AnchorField,
    method: PlantingMethod,
) -> Result<DateDelta, DeriveError> {
    let maturity = checked_days(current.days_to_maturity, "days to maturity")?
        .ok_or(DeriveError::MissingDaysToMaturity)?;
    let to_transplant = checked_days(current.days_to_transplant, "days to transplant")?;
    let anchor_date = current
        .date(anchor)
        .ok_or(DeriveError::MissingAnchorDate(anchor))?;

    let mut delta = DateDelta::default();
    match (method, anchor) {
        (PlantingMethod::DirectSeeding, AnchorField::Sow) => {
            delta.harvest_date = Some(add_days(anchor_date, maturity)?);
        }
        (PlantingMethod::DirectSeeding, AnchorField::Harvest) => {
            delta.sow_date = Some(sub_days(anchor_date, maturity)?);
        }
        // No transplant step in direct seeding.
        (PlantingMethod::DirectSeeding, AnchorField::Transplant) => {}

        (PlantingMethod::Seedling, AnchorField::Transplant) => {
            delta.harvest_date = Some(add_days(anchor_date, maturity)?);
        }
        (PlantingMethod::Seedling, AnchorField::Harvest) => {
            delta.transplant_date = Some(sub_days(anchor_date, maturity)?);
        }
        // Seedlings begin life already transplanted; no sow date tracked.
        (PlantingMethod::Seedling, AnchorField::Sow) => {}

        (PlantingMethod::SeedStarting, AnchorField::Sow) => {
            if let Some(days) = to_transplant {
                let transplant = add_days(anchor_date, days)?;
                delta.transplant_date = Some(transplant);
                delta.harvest_date = Some(add_days(transplant, maturity)?);
            } else if let Some(transplant) = current.transplant_date {
                // Sow leg unusable without days-to-transplant; derive from
                // the nearest known point in the chain instead.
                delta.harvest_date = Some(add_days(transplant, maturity)?);
            }
        }
        (PlantingMethod::SeedStarting, AnchorField::Transplant) => {
            delta.harvest_date = Some(add_days(anchor_date, maturity)?);
            if let Some(days) = to_transplant {
                delta.sow_date = Some(sub_days(anchor_date, days)?);
            }
        }
        (PlantingMethod::SeedStarting, AnchorField::Harvest) => {
            let transplant = sub_days(anchor_date, maturity)?;
            delta.transplant_date = Some(transplant);
            if let Some(days) = to_transplant {
                delta.sow_date = Some(sub_days(transplant, days)?);
            }
        }
    }
    Ok(delta)
}

/// Pick the anchor for re-derivation after a planting-method change: a sow
/// date the new method still tracks wins, then the harvest date. Returns
/// `None` when no still-valid date exists to anchor on.
pub fn preferred_anchor(current: &TimingSnapshot, method: PlantingMethod) -> Option<AnchorField> {
    if current.sow_date.is_some() && method.tracks_sow_date() {
        Some(AnchorField::Sow)
    } else if current.harvest_date.is_some() {
        Some(AnchorField::Harvest)
    } else {
        None
    }
}

/// Lenient `YYYY-MM-DD` parsing; malformed input is absent, not an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse a duration from the free-form strings the plant library stores.
///
/// Accepts plain integers ("60"), ranges ("60-70", resolved to the rounded
/// midpoint), and values with trailing units ("60 days"). Anything else is
/// absent.
pub fn parse_days(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Some((low, high)) = value.split_once('-') {
        let low = leading_int(low)?;
        let high = leading_int(high)?;
        return Some(((low + high) as f64 / 2.0).round() as i32);
    }
    leading_int(value)
}

fn leading_int(value: &str) -> Option<i32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn checked_days(value: Option<i32>, field: &'static str) -> Result<Option<u64>, DeriveError> {
    match value {
        None => Ok(None),
        Some(v) if v < 0 => Err(DeriveError::NegativeTiming { field, value: v }),
        Some(v) => Ok(Some(v as u64)),
    }
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, DeriveError> {
    date.checked_add_days(Days::new(days))
        .ok_or(DeriveError::DateOutOfRange)
}

fn sub_days(date: NaiveDate, days: u64) -> Result<NaiveDate, DeriveError> {
    date.checked_sub_days(Days::new(days))
        .ok_or(DeriveError::DateOutOfRange)
}
