pub mod api;
pub mod logging;
pub mod matching;
pub mod seed;
pub mod store;
pub mod weekday;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use weekday::WeekDay;

/// Lowest and highest proficiency a worker can hold for a task type.
pub const MIN_PROFICIENCY: u8 = 1;
pub const MAX_PROFICIENCY: u8 = 5;

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub name: String,
    /// task type name -> proficiency (1..=5)
    #[serde(default)]
    pub task_types: BTreeMap<String, u8>,
    pub availability: Availability,
}

impl Worker {
    pub fn new(name: impl Into<String>, availability: Availability) -> Self {
        Self {
            name: name.into(),
            task_types: BTreeMap::new(),
            availability,
        }
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>, proficiency: u8) -> Self {
        self.task_types.insert(task_type.into(), proficiency);
        self
    }

    /// Proficiency for `task_type`, treating a zero rating as "not qualified".
    pub fn proficiency(&self, task_type: &str) -> Option<u8> {
        self.task_types
            .get(task_type)
            .copied()
            .filter(|level| *level > 0)
    }

    pub fn has_task_type(&self, task_type: &str) -> bool {
        self.proficiency(task_type).is_some()
    }
}

/// Hours available on each business weekday.
///
/// Serialized as an object keyed `Monday`..`Friday`; all five keys are
/// required and no other keys are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Availability {
    pub monday: u32,
    pub tuesday: u32,
    pub wednesday: u32,
    pub thursday: u32,
    pub friday: u32,
}

impl Availability {
    pub const fn uniform(hours: u32) -> Self {
        Self {
            monday: hours,
            tuesday: hours,
            wednesday: hours,
            thursday: hours,
            friday: hours,
        }
    }

    pub const fn new(monday: u32, tuesday: u32, wednesday: u32, thursday: u32, friday: u32) -> Self {
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
        }
    }

    pub fn hours_on(&self, day: WeekDay) -> u32 {
        match day {
            WeekDay::Monday => self.monday,
            WeekDay::Tuesday => self.tuesday,
            WeekDay::Wednesday => self.wednesday,
            WeekDay::Thursday => self.thursday,
            WeekDay::Friday => self.friday,
        }
    }

    pub fn weekly_total(&self) -> u32 {
        WeekDay::ALL
            .iter()
            .fold(0u32, |acc, day| acc.saturating_add(self.hours_on(*day)))
    }
}
