//! Planting-date derivation property tests
//!
//! Engine-level guarantees:
//! - Idempotence: identical inputs yield identical deltas
//! - Ordering: derived dates keep sow <= transplant <= harvest
//! - No-op on insufficient input (missing maturity, missing anchor date)
//! - Forward/backward derivation are inverses of each other
//! - Merging a delta and re-deriving is a fixed point

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use shared::{
    derive_dates, preferred_anchor, validate_snapshot_ordering, AnchorField, PlantingMethod,
    TimingSnapshot,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate an arbitrary calendar date between 1990 and ~2045
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// Generate a valid days-to-maturity figure
fn maturity_strategy() -> impl Strategy<Value = i32> {
    0..=365i32
}

/// Generate an optional days-to-transplant figure
fn transplant_days_strategy() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![Just(None), (0..=120i32).prop_map(Some)]
}

fn method_strategy() -> impl Strategy<Value = PlantingMethod> {
    prop_oneof![
        Just(PlantingMethod::DirectSeeding),
        Just(PlantingMethod::SeedStarting),
        Just(PlantingMethod::Seedling),
    ]
}

fn anchor_strategy() -> impl Strategy<Value = AnchorField> {
    prop_oneof![
        Just(AnchorField::Sow),
        Just(AnchorField::Transplant),
        Just(AnchorField::Harvest),
    ]
}

/// Snapshot with exactly the anchor date set, as a fresh form edit would be
fn anchored_snapshot(
    anchor: AnchorField,
    date: NaiveDate,
    maturity: i32,
    to_transplant: Option<i32>,
) -> TimingSnapshot {
    let mut snapshot = TimingSnapshot {
        days_to_maturity: Some(maturity),
        days_to_transplant: to_transplant,
        ..TimingSnapshot::default()
    };
    match anchor {
        AnchorField::Sow => snapshot.sow_date = Some(date),
        AnchorField::Transplant => snapshot.transplant_date = Some(date),
        AnchorField::Harvest => snapshot.harvest_date = Some(date),
    }
    snapshot
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Identical inputs always yield identical deltas.
    #[test]
    fn derivation_is_idempotent(
        date in date_strategy(),
        maturity in maturity_strategy(),
        to_transplant in transplant_days_strategy(),
        method in method_strategy(),
        anchor in anchor_strategy(),
    ) {
        let snapshot = anchored_snapshot(anchor, date, maturity, to_transplant);
        let first = derive_dates(&snapshot, anchor, method);
        let second = derive_dates(&snapshot, anchor, method);
        prop_assert_eq!(first, second);
    }

    /// Every date present after merging the delta satisfies
    /// sow <= transplant <= harvest.
    #[test]
    fn derived_dates_keep_ordering(
        date in date_strategy(),
        maturity in maturity_strategy(),
        to_transplant in transplant_days_strategy(),
        method in method_strategy(),
        anchor in anchor_strategy(),
    ) {
        let mut snapshot = anchored_snapshot(anchor, date, maturity, to_transplant);
        let delta = derive_dates(&snapshot, anchor, method);
        snapshot.apply(&delta);
        prop_assert!(validate_snapshot_ordering(&snapshot).is_ok());
    }

    /// The anchor field itself is never part of the delta.
    #[test]
    fn delta_never_rewrites_the_anchor(
        date in date_strategy(),
        maturity in maturity_strategy(),
        to_transplant in transplant_days_strategy(),
        method in method_strategy(),
        anchor in anchor_strategy(),
    ) {
        let snapshot = anchored_snapshot(anchor, date, maturity, to_transplant);
        let delta = derive_dates(&snapshot, anchor, method);
        let rewritten = match anchor {
            AnchorField::Sow => delta.sow_date,
            AnchorField::Transplant => delta.transplant_date,
            AnchorField::Harvest => delta.harvest_date,
        };
        prop_assert_eq!(rewritten, None);
    }

    /// Without days-to-maturity the engine is a no-op for every method and
    /// anchor.
    #[test]
    fn no_maturity_means_no_derivation(
        date in date_strategy(),
        to_transplant in transplant_days_strategy(),
        method in method_strategy(),
        anchor in anchor_strategy(),
    ) {
        let mut snapshot = anchored_snapshot(anchor, date, 0, to_transplant);
        snapshot.days_to_maturity = None;
        prop_assert!(derive_dates(&snapshot, anchor, method).is_empty());
    }

    /// Negative timing parameters short-circuit to an empty delta instead of
    /// deriving nonsense.
    #[test]
    fn negative_parameters_mean_no_derivation(
        date in date_strategy(),
        maturity in -365..0i32,
        method in method_strategy(),
        anchor in anchor_strategy(),
    ) {
        let snapshot = anchored_snapshot(anchor, date, maturity, None);
        prop_assert!(derive_dates(&snapshot, anchor, method).is_empty());
    }

    /// Deriving forward from the sow date and then backward from the derived
    /// harvest date recovers the original chain.
    #[test]
    fn forward_then_backward_recovers_chain(
        sow in date_strategy(),
        maturity in maturity_strategy(),
        to_transplant in 0..=120i32,
    ) {
        let forward_input = anchored_snapshot(
            AnchorField::Sow, sow, maturity, Some(to_transplant),
        );
        let forward = derive_dates(&forward_input, AnchorField::Sow, PlantingMethod::SeedStarting);
        prop_assert!(forward.harvest_date.is_some());

        let backward_input = anchored_snapshot(
            AnchorField::Harvest,
            forward.harvest_date.unwrap(),
            maturity,
            Some(to_transplant),
        );
        let backward =
            derive_dates(&backward_input, AnchorField::Harvest, PlantingMethod::SeedStarting);
        prop_assert_eq!(backward.sow_date, Some(sow));
        prop_assert_eq!(backward.transplant_date, forward.transplant_date);
    }

    /// Merging a delta and re-deriving from the same anchor changes nothing.
    #[test]
    fn merge_then_rederive_is_stable(
        date in date_strategy(),
        maturity in maturity_strategy(),
        to_transplant in transplant_days_strategy(),
        method in method_strategy(),
        anchor in anchor_strategy(),
    ) {
        let mut snapshot = anchored_snapshot(anchor, date, maturity, to_transplant);
        let delta = derive_dates(&snapshot, anchor, method);
        snapshot.apply(&delta);

        let mut again = snapshot.clone();
        let second = derive_dates(&again, anchor, method);
        again.apply(&second);
        prop_assert_eq!(again, snapshot);
    }

    /// The post-method-change anchor is always one the new method tracks and
    /// whose date is present.
    #[test]
    fn preferred_anchor_is_usable(
        sow in prop::option::of(date_strategy()),
        harvest in prop::option::of(date_strategy()),
        method in method_strategy(),
    ) {
        let snapshot = TimingSnapshot {
            sow_date: sow,
            harvest_date: harvest,
            ..TimingSnapshot::default()
        };
        match preferred_anchor(&snapshot, method) {
            Some(AnchorField::Sow) => {
                prop_assert!(snapshot.sow_date.is_some());
                prop_assert!(method.tracks_sow_date());
            }
            Some(AnchorField::Harvest) => prop_assert!(snapshot.harvest_date.is_some()),
            Some(AnchorField::Transplant) => prop_assert!(false, "never anchors on transplant"),
            None => {
                prop_assert!(snapshot.harvest_date.is_none());
                prop_assert!(snapshot.sow_date.is_none() || !method.tracks_sow_date());
            }
        }
    }
}
