//! Garden plan models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{Planting, RecurringTask, Task};
use crate::types::DateRange;

/// A garden plan owning its plantings and calendar items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenPlan {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_date: NaiveDate,
    pub last_accessed_date: DateTime<Utc>,
    pub plantings: Vec<Planting>,
    pub tasks: Vec<Task>,
    pub recurring_tasks: Vec<RecurringTask>,
}

impl GardenPlan {
    /// Tasks with a due date inside the given range, for calendar views.
    pub fn tasks_due(&self, range: &DateRange) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.due_date.is_some_and(|due| range.contains(due)))
            .collect()
    }

}

/// Payload for creating or renaming a garden plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GardenPlanDraft {
    #[validate(length(min = 1, max = 200, message = "Plan name is required"))]
    pub name: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn plan_with_tasks() -> GardenPlan {
        let plan_id = Uuid::new_v4();
        let task = |name: &str, due: Option<NaiveDate>| Task {
            id: Uuid::new_v4(),
            garden_plan_id: plan_id,
            planting_id: None,
            task_group_id: None,
            recurring_task_id: None,
            name: name.to_string(),
            description: None,
            due_date: due,
            status: TaskStatus::Pending,
        };
        GardenPlan {
            id: plan_id,
            name: "Backyard 2024".to_string(),
            description: None,
            created_date: date("2024-01-01"),
            last_accessed_date: DateTime::UNIX_EPOCH,
            plantings: vec![],
            tasks: vec![
                task("Weed beds", Some(date("2024-05-10"))),
                task("Order seeds", Some(date("2024-02-01"))),
                task("Someday", None),
            ],
            recurring_tasks: vec![],
        }
    }

    #[test]
    fn tasks_due_filters_by_range() {
        let plan = plan_with_tasks();
        let range = DateRange {
            start: date("2024-05-01"),
            end: date("2024-05-31"),
        };
        let due = plan.tasks_due(&range);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Weed beds");
    }

    #[test]
    fn undated_tasks_never_due() {
        let plan = plan_with_tasks();
        let range = DateRange {
            start: date("2000-01-01"),
            end: date("2100-01-01"),
        };
        assert_eq!(plan.tasks_due(&range).len(), 2);
    }

    #[test]
    fn draft_name_validation() {
        let valid = GardenPlanDraft {
            name: "Backyard".to_string(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = GardenPlanDraft {
            name: String::new(),
            description: None,
        };
        assert!(invalid.validate().is_err());
    }
}
