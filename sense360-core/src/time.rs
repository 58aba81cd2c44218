//! Time-of-Day Arithmetic
//!
//! A wall-clock time as hour and minute, interchangeable with a
//! minutes-since-midnight count in `[0, 1440)`. The device RTC hands the
//! firmware an hour/minute pair; everything downstream (night-mode
//! windows, countdowns) works on minute-of-day arithmetic.

use crate::constants::time::{MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// A wall-clock time of day
///
/// Plain value type with public fields; `from_minutes` always produces a
/// valid time, while raw construction from RTC registers may not - check
/// with [`TimeOfDay::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
}

impl TimeOfDay {
    /// 00:00
    pub const MIDNIGHT: TimeOfDay = TimeOfDay::new(0, 0);

    /// Construct from hour and minute, unchecked
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes since midnight (0-1439 for a valid time)
    pub const fn to_minutes(self) -> u16 {
        self.hour as u16 * MINUTES_PER_HOUR + self.minute as u16
    }

    /// Build a time from a minutes-since-midnight count
    ///
    /// The input is normalized into `[0, 1440)` first, so counts past
    /// midnight in either direction wrap around: 1500 becomes 01:00 and
    /// -30 becomes 23:30.
    pub fn from_minutes(minutes: i32) -> Self {
        let minutes = minutes.rem_euclid(MINUTES_PER_DAY as i32) as u16;

        Self::new(
            (minutes / MINUTES_PER_HOUR) as u8,
            (minutes % MINUTES_PER_HOUR) as u8,
        )
    }

    /// Whether hour and minute are within range
    pub const fn is_valid(self) -> bool {
        is_valid_time(self.hour, self.minute)
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Check that an hour/minute pair is a real time of day
pub const fn is_valid_time(hour: u8, minute: u8) -> bool {
    hour <= 23 && minute <= 59
}

/// Minutes from `current` until `target`, wrapping into the next day
///
/// Zero when the target is now; never negative.
pub fn minutes_until(current: TimeOfDay, target: TimeOfDay) -> u16 {
    let current = current.to_minutes();
    let target = target.to_minutes();

    if target >= current {
        target - current
    } else {
        // Target is tomorrow
        (MINUTES_PER_DAY - current) + target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_minutes_conversions() {
        assert_eq!(TimeOfDay::MIDNIGHT.to_minutes(), 0);
        assert_eq!(TimeOfDay::new(12, 0).to_minutes(), 720);
        assert_eq!(TimeOfDay::new(23, 59).to_minutes(), 1439);
        assert_eq!(TimeOfDay::new(7, 45).to_minutes(), 465);
    }

    #[test]
    fn from_minutes_conversions() {
        assert_eq!(TimeOfDay::from_minutes(0), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_minutes(720), TimeOfDay::new(12, 0));
        assert_eq!(TimeOfDay::from_minutes(465), TimeOfDay::new(7, 45));
    }

    #[test]
    fn from_minutes_wraps_forward() {
        assert_eq!(TimeOfDay::from_minutes(1440), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_minutes(1500), TimeOfDay::new(1, 0));
    }

    #[test]
    fn from_minutes_wraps_negative() {
        assert_eq!(TimeOfDay::from_minutes(-30), TimeOfDay::new(23, 30));
        assert_eq!(TimeOfDay::from_minutes(-1440), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn round_trip_all_valid_times() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let t = TimeOfDay::new(hour, minute);
                assert_eq!(TimeOfDay::from_minutes(t.to_minutes() as i32), t);
            }
        }
    }

    #[test]
    fn validity_checks() {
        assert!(is_valid_time(0, 0));
        assert!(is_valid_time(23, 59));
        assert!(!is_valid_time(24, 0));
        assert!(!is_valid_time(0, 60));
        assert!(TimeOfDay::new(22, 30).is_valid());
        assert!(!TimeOfDay::new(25, 0).is_valid());
    }

    #[test]
    fn minutes_until_same_day() {
        let now = TimeOfDay::new(10, 15);
        assert_eq!(minutes_until(now, TimeOfDay::new(10, 45)), 30);
        assert_eq!(minutes_until(now, TimeOfDay::new(11, 15)), 60);
        assert_eq!(minutes_until(now, now), 0);
    }

    #[test]
    fn minutes_until_wraps_to_tomorrow() {
        assert_eq!(minutes_until(TimeOfDay::new(23, 30), TimeOfDay::new(0, 30)), 60);
        assert_eq!(minutes_until(TimeOfDay::new(12, 0), TimeOfDay::new(11, 0)), 1380);
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", TimeOfDay::new(7, 5)), "07:05");
        assert_eq!(format!("{}", TimeOfDay::new(22, 30)), "22:30");
    }
}
