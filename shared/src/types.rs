//! Common types used across the planner

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range for calendar queries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
