//! Automatic start-time assignment for newly added activities.

use jiff::{
    civil::{DateTime, Weekday},
    ToSpan,
};
use log::{debug, warn};

use super::time_table::{candidate_hours, HourRange, FALLBACK_HOURS};
use crate::models::{Activity, DayLabel, ScheduledActivity};

/// Computes a start time for `activity` on `day`.
///
/// Preferred hours (expanded from the activity's time-of-day windows) are
/// tried first, then every hour in [`FALLBACK_HOURS`]. The first hour whose
/// range does not overlap any existing activity wins and is placed on the
/// next calendar occurrence of `day` relative to `now`.
///
/// When every candidate is taken the result is `now` plus one hour, which
/// may overlap existing activities. This function never fails and never
/// mutates `existing`.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use weekendly_core::{
///     catalog::Catalog,
///     models::DayLabel,
///     scheduling::assign_start_time,
/// };
///
/// let catalog = Catalog::builtin();
/// let brunch = catalog.activity("brunch-cafe").unwrap();
/// // Wednesday morning
/// let now = date(2025, 6, 4).at(8, 30, 0, 0);
///
/// let start = assign_start_time(brunch, DayLabel::Saturday, &[], now);
/// assert_eq!(start, date(2025, 6, 7).at(9, 0, 0, 0));
/// ```
pub fn assign_start_time(
    activity: &Activity,
    day: DayLabel,
    existing: &[ScheduledActivity],
    now: DateTime,
) -> DateTime {
    let occupied: Vec<HourRange> = existing
        .iter()
        .map(|other| HourRange::starting_at(other.scheduled_time.hour(), other.duration))
        .collect();
    let is_free = |hour: &i8| {
        let trial = HourRange::starting_at(*hour, activity.duration);
        !occupied.iter().any(|taken| trial.overlaps(taken))
    };

    let slot = candidate_hours(&activity.time_of_day)
        .into_iter()
        .find(&is_free)
        .map(|hour| (hour, "preferred window"))
        .or_else(|| {
            let mut fallback = FALLBACK_HOURS;
            fallback.find(&is_free).map(|hour| (hour, "fallback scan"))
        });

    if let Some((hour, stage)) = slot {
        if let Some(start) = on_day_at(day, hour, now) {
            debug!(
                "Assigned '{}' to {} {:02}:00 from {}",
                activity.id,
                day.as_str(),
                hour,
                stage
            );
            return start;
        }
    }

    warn!(
        "No free hour for '{}' on {}, falling back to one hour from now",
        activity.id,
        day.as_str()
    );
    now.checked_add(1.hour()).unwrap_or(now)
}

/// Number of days from `today` until the next occurrence of `day`.
///
/// Zero when today already is that day, except for Monday which always
/// rolls over to next week.
pub fn days_until(today: Weekday, day: DayLabel) -> i8 {
    let target = day.weekday().to_sunday_zero_offset();
    let offset = (target - today.to_sunday_zero_offset()).rem_euclid(7);
    if offset == 0 && day == DayLabel::Monday {
        7
    } else {
        offset
    }
}

/// `hour:00:00.000` on the next occurrence of `day` from `now`.
fn on_day_at(day: DayLabel, hour: i8, now: DateTime) -> Option<DateTime> {
    let offset = i64::from(days_until(now.weekday(), day));
    let date = now.date().checked_add(offset.days()).ok()?;
    Some(date.at(hour, 0, 0, 0))
}
