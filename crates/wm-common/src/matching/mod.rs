pub mod availability;
pub mod matcher;
pub mod qualify;

use thiserror::Error;

use crate::weekday::{DayRole, WeekDay};
use crate::Worker;

pub use availability::total_availability;
pub use matcher::{find_best_worker, find_best_worker_for};
pub use qualify::{QualifiedWorker, qualified_workers};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid {role} day {value:?}: expected a weekday between Monday and Friday")]
    InvalidDay { role: DayRole, value: String },
}

/// A task to staff, with both days already resolved into the business week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub task_type: String,
    pub required_hours: u32,
    pub deadline_day: WeekDay,
    pub today_day: WeekDay,
}

impl TaskRequest {
    /// Build a request from raw day tokens. Both tokens are checked before
    /// any worker is looked at.
    pub fn parse(
        task_type: impl Into<String>,
        required_hours: u32,
        deadline_day: &str,
        today_day: &str,
    ) -> Result<Self, MatchError> {
        let today_day = WeekDay::parse_for(today_day, DayRole::Today)?;
        let deadline_day = WeekDay::parse_for(deadline_day, DayRole::Deadline)?;

        Ok(Self {
            task_type: task_type.into(),
            required_hours,
            deadline_day,
            today_day,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestWorker {
    pub worker: Worker,
    pub proficiency: u8,
    pub total_availability: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(BestWorker),
    NoMatch,
}

impl MatchOutcome {
    pub fn best(&self) -> Option<&BestWorker> {
        match self {
            MatchOutcome::Matched(best) => Some(best),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}
