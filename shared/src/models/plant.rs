//! Plant library models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::timing::parse_days;

/// A record in the plant library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: PlantProfile,
}

/// Horticultural attributes of a plant
///
/// Shared between library records and plantings: a planting copies the
/// profile from its library plant at creation time so later edits to the
/// library do not rewrite history. Duration-like fields are free-form
/// strings as entered by the user ("60", "60-70 days"); use the parsed
/// accessors for arithmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantProfile {
    pub plant_name: String,
    pub variety_name: Option<String>,
    pub scientific_name: Option<String>,
    pub plant_family: Option<String>,
    pub plant_type: Option<String>,
    pub growth_habit: Option<String>,
    pub origin_heirloom_status: Option<String>,
    pub organic: Option<bool>,
    pub seed_company_source: Option<String>,
    pub year_acquired: Option<i32>,
    pub seed_size: Option<String>,
    pub seed_longevity_storage_life: Option<String>,

    // Sowing & germination
    pub germination_temperature_min: Option<i32>,
    pub germination_temperature_max: Option<i32>,
    pub germination_temperature_ideal: Option<i32>,
    pub germination_time_days: Option<String>,
    pub light_requirement_for_germination: Option<String>,
    pub stratification_required: Option<bool>,
    pub scarification_required: Option<bool>,
    pub sowing_depth: Option<String>,
    pub spacing_in_row: Option<String>,
    pub spacing_low: Option<i32>,
    pub spacing_high: Option<i32>,
    pub direct_seedable: Option<bool>,
    pub transplantable: Option<bool>,
    pub days_to_transplant_low: Option<i32>,
    pub days_to_transplant_high: Option<i32>,

    // Growth & care
    pub time_to_maturity: Option<String>,
    pub mature_plant_height: Option<String>,
    pub mature_plant_spread_width: Option<String>,
    pub sunlight_requirement: Option<String>,
    pub water_needs: Option<String>,
    pub fertilizer_needs: Option<String>,
    pub pest_resistance: Option<String>,
    pub disease_resistance: Option<String>,
    pub cold_hardiness_frost_tolerance: Option<String>,
    pub heat_tolerance: Option<String>,
    pub drought_tolerance: Option<String>,
    pub bolting_tendency: Option<String>,
    pub support_required: Option<String>,
    pub pruning_required: Option<String>,

    // Harvest & storage
    pub harvest_window_low: Option<i32>,
    pub harvest_window_high: Option<i32>,
    pub typical_yield: Option<String>,
    pub yield_units: Option<String>,
    pub storage_life_post_harvest: Option<String>,
    pub requires_pollinator: Option<bool>,

    pub notes_observations: Option<String>,
    pub url: Option<String>,
    /// Semicolon-separated weekly yield amounts, see [`PlantProfile::weekly_yield_points`].
    pub weekly_yield: Option<String>,
}

impl PlantProfile {
    /// Days to maturity parsed from the library's free-form string.
    pub fn maturity_days(&self) -> Option<i32> {
        self.time_to_maturity.as_deref().and_then(parse_days)
    }

    /// Days from sowing to transplant. The upper bound is what the planning
    /// forms feed into date derivation.
    pub fn transplant_days(&self) -> Option<i32> {
        self.days_to_transplant_high
    }

    /// Parse the recorded weekly yield data.
    ///
    /// Tolerates surrounding brackets and blank entries; unparseable amounts
    /// become zero rather than dropping the week.
    pub fn weekly_yield_points(&self) -> Vec<YieldPoint> {
        let data = self.weekly_yield.as_deref().unwrap_or("");
        parse_weekly_yield(data)
    }
}

/// One week's recorded yield for a planting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YieldPoint {
    pub week: u32,
    pub amount: Decimal,
}

/// Parse a semicolon-separated weekly yield string ("1.5;2;0.75").
pub fn parse_weekly_yield(data: &str) -> Vec<YieldPoint> {
    let data = data.trim();
    let data = data.strip_prefix('[').unwrap_or(data);
    let data = data.strip_suffix(']').unwrap_or(data);
    data.split(';')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .enumerate()
        .map(|(i, v)| YieldPoint {
            week: i as u32 + 1,
            amount: Decimal::from_str(v).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maturity_days_parses_library_strings() {
        let profile = PlantProfile {
            time_to_maturity: Some("60-70 days".to_string()),
            ..PlantProfile::default()
        };
        assert_eq!(profile.maturity_days(), Some(65));

        let profile = PlantProfile {
            time_to_maturity: Some("varies".to_string()),
            ..PlantProfile::default()
        };
        assert_eq!(profile.maturity_days(), None);

        assert_eq!(PlantProfile::default().maturity_days(), None);
    }

    #[test]
    fn weekly_yield_parsing() {
        let points = parse_weekly_yield("[1.5;2;0.75]");
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].week, 1);
        assert_eq!(points[0].amount, Decimal::from_str("1.5").unwrap());
        assert_eq!(points[2].week, 3);
        assert_eq!(points[2].amount, Decimal::from_str("0.75").unwrap());
    }

    #[test]
    fn weekly_yield_skips_blanks_and_zeroes_junk() {
        let points = parse_weekly_yield("1; ;bad;2");
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].amount, Decimal::ZERO);
        assert_eq!(points[2].amount, Decimal::from(2));
    }

    #[test]
    fn weekly_yield_empty() {
        assert!(parse_weekly_yield("").is_empty());
        assert!(parse_weekly_yield("[]").is_empty());
    }
}
