//! Static time-of-day to hour-range table and hour arithmetic shared by the
//! assigner.

use std::ops::RangeInclusive;

use crate::models::TimeOfDay;

/// Hours scanned, in order, when none of an activity's preferred hours is
/// free.
pub const FALLBACK_HOURS: RangeInclusive<i8> = 8..=20;

/// Calendar hours (0-23) covered by a time-of-day window.
pub fn hours(time_of_day: TimeOfDay) -> &'static [i8] {
    match time_of_day {
        TimeOfDay::EarlyMorning => &[6, 7, 8],
        TimeOfDay::Morning => &[9, 10, 11],
        TimeOfDay::Afternoon => &[12, 13, 14, 15, 16],
        TimeOfDay::Evening => &[17, 18, 19],
        TimeOfDay::Night => &[20, 21, 22],
    }
}

/// Expands preferred windows into candidate start hours.
///
/// Windows are concatenated in the order given. Hours shared by two
/// windows are kept twice.
pub fn candidate_hours(preferred: &[TimeOfDay]) -> Vec<i8> {
    preferred
        .iter()
        .flat_map(|&time_of_day| hours(time_of_day).iter().copied())
        .collect()
}

/// Whole hours a duration occupies: `ceil(minutes / 60)`, at least one.
pub fn hour_span(duration_minutes: u32) -> i64 {
    (i64::from(duration_minutes) + 59).div_euclid(60).max(1)
}

/// Half-open range of whole hours `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: i64,
    pub end: i64,
}

impl HourRange {
    /// Range starting at `hour` covering `duration_minutes` rounded up.
    pub fn starting_at(hour: i8, duration_minutes: u32) -> Self {
        let start = i64::from(hour);
        Self {
            start,
            end: start + hour_span(duration_minutes),
        }
    }

    /// True when the two ranges share at least one hour.
    pub fn overlaps(&self, other: &HourRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}
