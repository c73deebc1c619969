use serde::{Deserialize, Serialize};

use crate::matching::{MatchOutcome, TaskRequest};
use crate::weekday::WeekDay;

/// Result of a best-worker search, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub matched: bool,
    pub task_type: String,
    pub required_hours: u32,
    pub today_day: WeekDay,
    pub deadline_day: WeekDay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_availability: Option<u32>,
    pub message: String,
}

impl Recommendation {
    pub fn from_outcome(outcome: &MatchOutcome, request: &TaskRequest) -> Self {
        let mut recommendation = Self {
            matched: false,
            task_type: request.task_type.clone(),
            required_hours: request.required_hours,
            today_day: request.today_day,
            deadline_day: request.deadline_day,
            worker_name: None,
            proficiency: None,
            total_availability: None,
            message: format!(
                "No worker found with enough availability for {} between today and {}.",
                request.task_type, request.deadline_day
            ),
        };

        if let Some(best) = outcome.best() {
            recommendation.matched = true;
            recommendation.worker_name = Some(best.worker.name.clone());
            recommendation.proficiency = Some(best.proficiency);
            recommendation.total_availability = Some(best.total_availability);
            recommendation.message = format!(
                "The best worker for this task is {}, with proficiency {} in {}, and {} hours available until {}.",
                best.worker.name,
                best.proficiency,
                request.task_type,
                best.total_availability,
                request.deadline_day
            );
        }

        recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::find_best_worker_for;
    use crate::seed::default_workers;

    #[test]
    fn describes_the_matched_worker() {
        let request = TaskRequest::parse("Review", 10, "Tuesday", "Monday").unwrap();
        let outcome = find_best_worker_for(&default_workers(), &request);

        let recommendation = Recommendation::from_outcome(&outcome, &request);

        assert!(recommendation.matched);
        assert_eq!(recommendation.worker_name.as_deref(), Some("Bob"));
        assert_eq!(
            recommendation.message,
            "The best worker for this task is Bob, with proficiency 5 in Review, and 12 hours available until Tuesday."
        );
    }

    #[test]
    fn describes_no_match() {
        let request = TaskRequest::parse("Testing", 1, "Friday", "Monday").unwrap();
        let recommendation = Recommendation::from_outcome(&MatchOutcome::NoMatch, &request);

        assert!(!recommendation.matched);
        assert_eq!(recommendation.total_availability, None);
        assert_eq!(
            recommendation.message,
            "No worker found with enough availability for Testing between today and Friday."
        );

        let value = serde_json::to_value(&recommendation).unwrap();
        assert!(value.get("worker_name").is_none());
        assert_eq!(value["deadline_day"], "Friday");
    }
}
