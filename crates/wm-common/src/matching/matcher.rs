use tracing::debug;

use super::{
    BestWorker, MatchError, MatchOutcome, TaskRequest, availability::total_availability,
    qualify::qualified_workers,
};
use crate::Worker;

/// Pick the most proficient worker for `task_type` who has at least
/// `required_hours` available from `today_day` through `deadline_day`.
///
/// Day tokens are validated before any worker is considered; a token outside
/// Monday..Friday is an error, while "nobody fits" is [`MatchOutcome::NoMatch`].
pub fn find_best_worker(
    workers: &[Worker],
    task_type: &str,
    required_hours: u32,
    deadline_day: &str,
    today_day: &str,
) -> Result<MatchOutcome, MatchError> {
    let request = TaskRequest::parse(task_type, required_hours, deadline_day, today_day)?;
    Ok(find_best_worker_for(workers, &request))
}

/// Same as [`find_best_worker`] with the days already resolved.
pub fn find_best_worker_for(workers: &[Worker], request: &TaskRequest) -> MatchOutcome {
    for candidate in qualified_workers(workers, &request.task_type) {
        let total = total_availability(
            &candidate.worker.availability,
            request.today_day,
            request.deadline_day,
        );

        debug!(
            worker = %candidate.worker.name,
            proficiency = candidate.proficiency,
            total_availability = total,
            required_hours = request.required_hours,
            "evaluated candidate"
        );

        if total >= request.required_hours {
            return MatchOutcome::Matched(BestWorker {
                worker: candidate.worker.clone(),
                proficiency: candidate.proficiency,
                total_availability: total,
            });
        }
    }

    MatchOutcome::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_workers;
    use crate::weekday::{DayRole, WeekDay};
    use crate::Availability;

    fn writers() -> Vec<Worker> {
        vec![
            Worker::new("A", Availability::uniform(2)).with_task_type("writing", 3),
            Worker::new("B", Availability::uniform(1)).with_task_type("writing", 5),
        ]
    }

    fn matched_name(outcome: &MatchOutcome) -> Option<&str> {
        outcome.best().map(|best| best.worker.name.as_str())
    }

    #[test]
    fn higher_proficiency_wins_when_it_meets_the_threshold() {
        let outcome = find_best_worker(&writers(), "writing", 3, "Wednesday", "Monday").unwrap();

        let best = outcome.best().expect("B should match");
        assert_eq!(best.worker.name, "B");
        assert_eq!(best.proficiency, 5);
        assert_eq!(best.total_availability, 3);
    }

    #[test]
    fn falls_back_to_less_proficient_worker_with_enough_hours() {
        let outcome = find_best_worker(&writers(), "writing", 6, "Wednesday", "Monday").unwrap();

        let best = outcome.best().expect("A should match");
        assert_eq!(best.worker.name, "A");
        assert_eq!(best.total_availability, 6);
    }

    #[test]
    fn unknown_task_type_is_no_match() {
        let outcome = find_best_worker(&writers(), "painting", 0, "Friday", "Monday").unwrap();
        assert_eq!(outcome, MatchOutcome::NoMatch);
    }

    #[test]
    fn nobody_with_enough_hours_is_no_match() {
        let outcome = find_best_worker(&writers(), "writing", 11, "Friday", "Monday").unwrap();
        assert!(!outcome.is_match());
    }

    #[test]
    fn saturday_today_is_rejected() {
        let err = find_best_worker(&writers(), "writing", 1, "Friday", "Saturday").unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidDay {
                role: DayRole::Today,
                value: "Saturday".into(),
            }
        );
    }

    #[test]
    fn invalid_deadline_is_rejected_even_without_candidates() {
        let err = find_best_worker(&[], "writing", 1, "Sunday", "Monday").unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidDay {
                role: DayRole::Deadline,
                ..
            }
        ));
    }

    #[test]
    fn zero_hours_returns_first_qualified_worker() {
        let request = TaskRequest {
            task_type: "writing".into(),
            required_hours: 0,
            deadline_day: WeekDay::Tuesday,
            today_day: WeekDay::Tuesday,
        };

        let outcome = find_best_worker_for(&writers(), &request);
        let best = outcome.best().unwrap();
        assert_eq!(best.worker.name, "B");
        assert_eq!(best.total_availability, 1);
    }

    #[test]
    fn equal_proficiency_prefers_input_order() {
        let workers = vec![
            Worker::new("early", Availability::uniform(4)).with_task_type("Review", 4),
            Worker::new("late", Availability::uniform(9)).with_task_type("Review", 4),
        ];

        let outcome = find_best_worker(&workers, "Review", 4, "Monday", "Monday").unwrap();
        assert_eq!(matched_name(&outcome), Some("early"));

        let outcome = find_best_worker(&workers, "Review", 5, "Monday", "Monday").unwrap();
        assert_eq!(matched_name(&outcome), Some("late"));
    }

    #[test]
    fn result_has_max_proficiency_among_eligible_workers() {
        let workers = default_workers();
        let request = TaskRequest::parse("Design", 12, "Tuesday", "Monday").unwrap();

        let eligible_max = workers
            .iter()
            .filter_map(|w| {
                let p = w.proficiency("Design")?;
                let total = total_availability(&w.availability, request.today_day, request.deadline_day);
                (total >= request.required_hours).then_some(p)
            })
            .max();

        let outcome = find_best_worker_for(&workers, &request);
        assert_eq!(outcome.best().map(|b| b.proficiency), eligible_max);
        // Charlie (Design 5) has only 7h by Tuesday; Eve (Design 4) has 12h.
        assert_eq!(matched_name(&outcome), Some("Eve"));
    }

    #[test]
    fn deadline_wraps_into_next_week() {
        let outcome = find_best_worker(&default_workers(), "Translation", 14, "Monday", "Friday").unwrap();

        let best = outcome.best().unwrap();
        // Alice: Friday 8 + Monday 8
        assert_eq!(best.worker.name, "Alice");
        assert_eq!(best.total_availability, 16);
    }

    #[test]
    fn does_not_mutate_the_snapshot() {
        let workers = writers();
        let before = workers.clone();
        let _ = find_best_worker(&workers, "writing", 3, "Friday", "Monday").unwrap();
        assert_eq!(workers, before);
    }
}
