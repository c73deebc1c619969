use serde::Deserialize;

use crate::matching::{MatchError, TaskRequest};
use crate::weekday::{DayRole, WeekDay};

/// HTTP/CLI request to find the best worker for a task.
///
/// `today_day` is optional; callers fall back to the local clock.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTaskRequest {
    pub task_type: String,
    pub required_hours: u32,
    pub deadline_day: String,
    #[serde(default)]
    pub today_day: Option<String>,
}

impl AssignTaskRequest {
    /// Resolve both days, using `today` when the request did not name one.
    pub fn resolve(
        &self,
        today: impl FnOnce() -> Result<WeekDay, MatchError>,
    ) -> Result<TaskRequest, MatchError> {
        let today_day = match self.today_day.as_deref() {
            Some(raw) => WeekDay::parse_for(raw, DayRole::Today)?,
            None => today()?,
        };
        let deadline_day = WeekDay::parse_for(&self.deadline_day, DayRole::Deadline)?;

        Ok(TaskRequest {
            task_type: self.task_type.clone(),
            required_hours: self.required_hours,
            deadline_day,
            today_day,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_today_wins_over_clock() {
        let request: AssignTaskRequest = serde_json::from_value(json!({
            "task_type": "Review",
            "required_hours": 10,
            "deadline_day": "Wednesday",
            "today_day": "Tuesday"
        }))
        .unwrap();

        let resolved = request
            .resolve(|| panic!("clock should not be consulted"))
            .unwrap();
        assert_eq!(resolved.today_day, WeekDay::Tuesday);
        assert_eq!(resolved.deadline_day, WeekDay::Wednesday);
    }

    #[test]
    fn missing_today_uses_clock() {
        let request: AssignTaskRequest = serde_json::from_value(json!({
            "task_type": "Review",
            "required_hours": 10,
            "deadline_day": "Friday"
        }))
        .unwrap();

        let resolved = request.resolve(|| Ok(WeekDay::Thursday)).unwrap();
        assert_eq!(resolved.today_day, WeekDay::Thursday);
    }

    #[test]
    fn weekend_clock_is_an_error() {
        let request: AssignTaskRequest = serde_json::from_value(json!({
            "task_type": "Review",
            "required_hours": 1,
            "deadline_day": "Friday"
        }))
        .unwrap();

        let err = request
            .resolve(|| WeekDay::today_from_chrono(chrono::Weekday::Sun))
            .unwrap_err();
        assert!(err.to_string().contains("Sunday"));
    }

    #[test]
    fn negative_hours_do_not_deserialize() {
        let result = serde_json::from_value::<AssignTaskRequest>(json!({
            "task_type": "Review",
            "required_hours": -1,
            "deadline_day": "Friday"
        }));
        assert!(result.is_err());
    }
}
