//! Planting models
//!
//! A planting is a plant placed in a garden plan: it carries its own copy of
//! the plant profile plus the planned dates the derivation engine maintains.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{Plant, PlantProfile};
use crate::timing::{DateDelta, TimingSnapshot};

/// How a planting gets into the ground
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlantingMethod {
    /// Sow indoors, transplant out later; sow -> transplant -> harvest.
    #[serde(rename = "Seed Starting")]
    SeedStarting,
    /// Sow in place; sow -> harvest, no transplant step.
    #[serde(rename = "Direct Seeding")]
    DirectSeeding,
    /// Bought as a seedling; transplant -> harvest, no sow date tracked.
    #[serde(rename = "Seedling")]
    Seedling,
}

impl PlantingMethod {
    /// Whether this method tracks a sow date.
    pub fn tracks_sow_date(&self) -> bool {
        matches!(self, PlantingMethod::SeedStarting | PlantingMethod::DirectSeeding)
    }

    /// Whether this method tracks a transplant date.
    pub fn tracks_transplant_date(&self) -> bool {
        matches!(self, PlantingMethod::SeedStarting | PlantingMethod::Seedling)
    }
}

impl std::fmt::Display for PlantingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantingMethod::SeedStarting => write!(f, "Seed Starting"),
            PlantingMethod::DirectSeeding => write!(f, "Direct Seeding"),
            PlantingMethod::Seedling => write!(f, "Seedling"),
        }
    }
}

impl std::str::FromStr for PlantingMethod {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Seed Starting" => Ok(PlantingMethod::SeedStarting),
            "Direct Seeding" => Ok(PlantingMethod::DirectSeeding),
            "Seedling" => Ok(PlantingMethod::Seedling),
            _ => Err("unknown planting method"),
        }
    }
}

/// Lifecycle of a planting through the season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PlantingStatus {
    #[default]
    Planned,
    Started,
    Transplanted,
    #[serde(rename = "Direct Sown")]
    DirectSown,
    Growing,
    Harvesting,
    Done,
}

impl PlantingStatus {
    /// The next status in the progression, method-dependent at the first
    /// step (direct seeding skips the indoor-start stage). `None` once done.
    pub fn next(&self, method: Option<PlantingMethod>) -> Option<PlantingStatus> {
        match self {
            PlantingStatus::Planned => Some(match method {
                Some(PlantingMethod::DirectSeeding) => PlantingStatus::DirectSown,
                _ => PlantingStatus::Started,
            }),
            PlantingStatus::Started => Some(PlantingStatus::Transplanted),
            PlantingStatus::DirectSown => Some(PlantingStatus::Growing),
            PlantingStatus::Transplanted => Some(PlantingStatus::Growing),
            PlantingStatus::Growing => Some(PlantingStatus::Harvesting),
            PlantingStatus::Harvesting => Some(PlantingStatus::Done),
            PlantingStatus::Done => None,
        }
    }
}

impl std::fmt::Display for PlantingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantingStatus::Planned => write!(f, "Planned"),
            PlantingStatus::Started => write!(f, "Started"),
            PlantingStatus::Transplanted => write!(f, "Transplanted"),
            PlantingStatus::DirectSown => write!(f, "Direct Sown"),
            PlantingStatus::Growing => write!(f, "Growing"),
            PlantingStatus::Harvesting => write!(f, "Harvesting"),
            PlantingStatus::Done => write!(f, "Done"),
        }
    }
}

impl std::str::FromStr for PlantingStatus {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(PlantingStatus::Planned),
            "Started" => Ok(PlantingStatus::Started),
            "Transplanted" => Ok(PlantingStatus::Transplanted),
            "Direct Sown" => Ok(PlantingStatus::DirectSown),
            "Growing" => Ok(PlantingStatus::Growing),
            "Harvesting" => Ok(PlantingStatus::Harvesting),
            "Done" => Ok(PlantingStatus::Done),
            _ => Err("unknown planting status"),
        }
    }
}

/// How the crop is harvested
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HarvestMethod {
    #[serde(rename = "Single Harvest")]
    SingleHarvest,
    #[serde(rename = "Cut and Come Again")]
    CutAndComeAgain,
    #[serde(rename = "Staggered")]
    Staggered,
    #[serde(rename = "Continuous")]
    Continuous,
}

impl std::fmt::Display for HarvestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarvestMethod::SingleHarvest => write!(f, "Single Harvest"),
            HarvestMethod::CutAndComeAgain => write!(f, "Cut and Come Again"),
            HarvestMethod::Staggered => write!(f, "Staggered"),
            HarvestMethod::Continuous => write!(f, "Continuous"),
        }
    }
}

/// A plant placed in a garden plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planting {
    pub id: Uuid,
    pub garden_plan_id: Uuid,
    pub library_plant_id: Uuid,
    pub quantity: u32,
    pub status: PlantingStatus,
    pub planting_method: Option<PlantingMethod>,
    pub harvest_method: Option<HarvestMethod>,
    pub planned_sow_date: Option<NaiveDate>,
    pub planned_transplant_date: Option<NaiveDate>,
    pub planned_harvest_start_date: Option<NaiveDate>,
    pub planned_harvest_end_date: Option<NaiveDate>,
    pub planned_second_harvest_date: Option<NaiveDate>,
    /// Overrides the library's time-to-maturity for this planting only.
    pub time_to_maturity_override: Option<i32>,
    #[serde(flatten)]
    pub profile: PlantProfile,
}

impl Planting {
    /// Create a planting from a library record, copying its profile.
    pub fn create(garden_plan_id: Uuid, plant: &Plant, draft: PlantingDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            garden_plan_id,
            library_plant_id: plant.id,
            quantity: draft.quantity,
            status: draft.status,
            planting_method: draft.planting_method,
            harvest_method: draft.harvest_method,
            planned_sow_date: draft.planned_sow_date,
            planned_transplant_date: draft.planned_transplant_date,
            planned_harvest_start_date: draft.planned_harvest_start_date,
            planned_harvest_end_date: draft.planned_harvest_end_date,
            planned_second_harvest_date: draft.planned_second_harvest_date,
            time_to_maturity_override: draft.time_to_maturity_override,
            profile: plant.profile.clone(),
        }
    }

    /// Effective days to maturity: the per-planting override wins over the
    /// library's string-typed figure.
    pub fn maturity_days(&self) -> Option<i32> {
        self.time_to_maturity_override.or_else(|| self.profile.maturity_days())
    }

    /// Assemble the derivation-engine input from the planned dates and
    /// timing parameters.
    pub fn timing_snapshot(&self) -> TimingSnapshot {
        TimingSnapshot {
            sow_date: self.planned_sow_date,
            transplant_date: self.planned_transplant_date,
            harvest_date: self.planned_harvest_start_date,
            days_to_maturity: self.maturity_days(),
            days_to_transplant: self.profile.transplant_days(),
        }
    }

    /// Merge a derivation result into the planned dates. Fields absent from
    /// the delta are left untouched.
    pub fn apply_dates(&mut self, delta: &DateDelta) {
        if delta.sow_date.is_some() {
            self.planned_sow_date = delta.sow_date;
        }
        if delta.transplant_date.is_some() {
            self.planned_transplant_date = delta.transplant_date;
        }
        if delta.harvest_date.is_some() {
            self.planned_harvest_start_date = delta.harvest_date;
        }
    }

    /// Advance to the next lifecycle status. Returns false when already done.
    pub fn advance_status(&mut self) -> bool {
        match self.status.next(self.planting_method) {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}

/// Payload for creating a planting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlantingDraft {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    #[serde(default)]
    pub status: PlantingStatus,
    pub planting_method: Option<PlantingMethod>,
    pub harvest_method: Option<HarvestMethod>,
    pub time_to_maturity_override: Option<i32>,
    pub planned_sow_date: Option<NaiveDate>,
    pub planned_transplant_date: Option<NaiveDate>,
    pub planned_harvest_start_date: Option<NaiveDate>,
    pub planned_harvest_end_date: Option<NaiveDate>,
    pub planned_second_harvest_date: Option<NaiveDate>,
}
