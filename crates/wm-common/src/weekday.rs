//! Business-week day cycle used by availability accumulation.
//!
//! Only Monday through Friday exist here. Saturday and Sunday are rejected
//! rather than folded into the cycle, both for "today" and for deadlines.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::matching::MatchError;

/// Number of days in one accumulation cycle.
pub const WEEK_LEN: usize = 5;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Which argument of a match request carried a day token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DayRole {
    Today,
    Deadline,
}

impl WeekDay {
    pub const ALL: [WeekDay; WEEK_LEN] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ];

    pub fn index(self) -> usize {
        match self {
            WeekDay::Monday => 0,
            WeekDay::Tuesday => 1,
            WeekDay::Wednesday => 2,
            WeekDay::Thursday => 3,
            WeekDay::Friday => 4,
        }
    }

    /// Following business day; Friday wraps to Monday.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % WEEK_LEN]
    }

    /// Parse a user supplied token, naming the offending argument on failure.
    pub fn parse_for(raw: &str, role: DayRole) -> Result<Self, MatchError> {
        raw.trim()
            .parse::<WeekDay>()
            .map_err(|_| MatchError::InvalidDay {
                role,
                value: raw.to_string(),
            })
    }

    /// Resolve a calendar weekday as "today". Weekends are not part of the cycle.
    pub fn today_from_chrono(day: chrono::Weekday) -> Result<Self, MatchError> {
        let resolved = match day {
            chrono::Weekday::Mon => WeekDay::Monday,
            chrono::Weekday::Tue => WeekDay::Tuesday,
            chrono::Weekday::Wed => WeekDay::Wednesday,
            chrono::Weekday::Thu => WeekDay::Thursday,
            chrono::Weekday::Fri => WeekDay::Friday,
            chrono::Weekday::Sat => return Err(weekend(DayRole::Today, "Saturday")),
            chrono::Weekday::Sun => return Err(weekend(DayRole::Today, "Sunday")),
        };
        Ok(resolved)
    }

    /// Today's business day according to the local clock.
    pub fn today_local() -> Result<Self, MatchError> {
        use chrono::Datelike;
        Self::today_from_chrono(chrono::Local::now().weekday())
    }
}

fn weekend(role: DayRole, name: &str) -> MatchError {
    MatchError::InvalidDay {
        role,
        value: name.to_string(),
    }
}

/// Days visited when accumulating from `start` through `end`, wrapping
/// Friday -> Monday. Never longer than one week.
pub fn days_through(start: WeekDay, end: WeekDay) -> Vec<WeekDay> {
    let mut days = Vec::with_capacity(WEEK_LEN);
    let mut current = start;

    while days.len() < WEEK_LEN {
        days.push(current);
        if current == end {
            break;
        }
        current = current.next();
    }

    days
}
