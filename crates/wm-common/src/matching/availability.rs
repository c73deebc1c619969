use crate::weekday::{WeekDay, days_through};
use crate::Availability;

/// Hours available from `today` through `deadline` inclusive, wrapping
/// Friday -> Monday and stopping after one week at most.
pub fn total_availability(availability: &Availability, today: WeekDay, deadline: WeekDay) -> u32 {
    days_through(today, deadline)
        .into_iter()
        .fold(0u32, |acc, day| acc.saturating_add(availability.hours_on(day)))
}
