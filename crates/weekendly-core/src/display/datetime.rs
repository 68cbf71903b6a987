//! DateTime display utilities.
//!
//! Plan metadata uses instants ([`Timestamp`]) shown in the system time zone.
//! Scheduled activities use local wall-clock times ([`DateTime`]) and are
//! shown as-is.

use std::fmt;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Calendar date of a `Timestamp` in the system time zone (`YYYY-MM-DD`).
pub struct LocalDate<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(TimeZone::system()).date())
    }
}

/// Time of day of a scheduled start as `HH:MM`.
pub struct ClockTime<'a>(pub &'a DateTime);

impl fmt::Display for ClockTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

/// Weekday, date and time of a scheduled start, e.g. `Sat 2025-06-07 09:00`.
pub struct ScheduleTime<'a>(pub &'a DateTime);

impl fmt::Display for ScheduleTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_schedule_time_formats() {
        let start = date(2025, 6, 7).at(9, 5, 0, 0);
        assert_eq!(ClockTime(&start).to_string(), "09:05");
        assert_eq!(ScheduleTime(&start).to_string(), "Sat 2025-06-07 09:05");
    }
}
