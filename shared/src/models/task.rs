//! Task and recurring-task models
//!
//! Recurrence rules are carried as opaque RFC 5545 strings; expanding them
//! into occurrences is the calendar layer's job, via its recurrence library.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion state of a task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn is_open(&self) -> bool {
        !matches!(self, TaskStatus::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A one-off task on the garden calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub garden_plan_id: Uuid,
    pub planting_id: Option<Uuid>,
    pub task_group_id: Option<Uuid>,
    /// Set when this task is a materialized occurrence of a recurring task.
    pub recurring_task_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
}

/// A recurring task definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTask {
    pub id: Uuid,
    pub garden_plan_id: Uuid,
    pub planting_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    /// RFC 5545 recurrence rule, e.g. "FREQ=WEEKLY;BYDAY=SA".
    pub recurrence_rule: String,
    pub recurrence_end_date: Option<NaiveDate>,
    /// Occurrence dates excluded from the rule.
    pub exdates: Vec<NaiveDate>,
    /// Materialized occurrences, owned by the persistence layer.
    pub tasks: Vec<Task>,
}

impl RecurringTask {
    /// Whether the given occurrence date has been excluded.
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.exdates.contains(&date)
    }
}
