//! Wall-clock labels for timelines.
//!
//! Schedules are computed in minutes from plan start. A [`ClockAnchor`] pins
//! that origin to a time of day so renderers can print "18:05" instead of
//! "5 min".

use std::fmt;

use jiff::{civil::Time, SignedDuration};

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Minutes as a duration within one day; whole days drop out since clock
/// times wrap anyway.
fn day_minutes(minutes: u64) -> SignedDuration {
    SignedDuration::from_mins((minutes % MINUTES_PER_DAY) as i64)
}

/// How minute offsets map to times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAnchor {
    /// The plan starts at this time
    StartAt(Time),
    /// The last step finishes at this time
    ServeAt(Time),
}

impl ClockAnchor {
    /// Time of day at which minute 0 falls for a plan of `total` minutes.
    pub fn plan_start(&self, total: u64) -> Time {
        match *self {
            ClockAnchor::StartAt(start) => start,
            ClockAnchor::ServeAt(serve) => {
                serve.wrapping_sub(day_minutes(total))
            }
        }
    }

    /// Time of day of minute `offset` in a plan of `total` minutes.
    ///
    /// Times wrap around midnight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::time;
    /// use simmer_core::display::ClockAnchor;
    ///
    /// let anchor = ClockAnchor::ServeAt(time(19, 0, 0, 0));
    /// assert_eq!(anchor.at(45, 0), time(18, 15, 0, 0));
    /// assert_eq!(anchor.at(45, 45), time(19, 0, 0, 0));
    /// ```
    pub fn at(&self, total: u64, offset: u64) -> Time {
        self.plan_start(total).wrapping_add(day_minutes(offset))
    }
}

/// Formats a time of day as `HH:MM`.
pub struct ClockTime(pub Time);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_start_at_offsets_forward() {
        let anchor = ClockAnchor::StartAt(time(17, 30, 0, 0));
        assert_eq!(anchor.plan_start(90), time(17, 30, 0, 0));
        assert_eq!(anchor.at(90, 45), time(18, 15, 0, 0));
    }

    #[test]
    fn test_serve_at_wraps_past_midnight() {
        let anchor = ClockAnchor::ServeAt(time(0, 20, 0, 0));
        assert_eq!(anchor.plan_start(30), time(23, 50, 0, 0));
    }

    #[test]
    fn test_multi_day_offsets_wrap() {
        let anchor = ClockAnchor::StartAt(time(8, 0, 0, 0));
        assert_eq!(anchor.at(0, 3 * MINUTES_PER_DAY + 30), time(8, 30, 0, 0));
        assert_eq!(anchor.at(0, u64::MAX), anchor.at(0, u64::MAX % MINUTES_PER_DAY));
    }

    #[test]
    fn test_clock_time_format() {
        assert_eq!(ClockTime(time(7, 5, 0, 0)).to_string(), "07:05");
    }
}
