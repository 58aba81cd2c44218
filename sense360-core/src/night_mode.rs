//! Night-Mode Window Logic
//!
//! Decides when the device should dim its LEDs and display. The window
//! is a time-of-day interval that may cross midnight (22:00-07:00 is the
//! shipped default), with a manual override and a fail-safe: when the
//! clock is not trustworthy the device stays in day mode rather than
//! going dark on bad data.

use crate::errors::{ConfigError, ConfigResult};
use crate::time::TimeOfDay;

/// Manual override for the night-mode decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NightModeOverride {
    /// Follow the time-based window
    #[default]
    Auto,
    /// Never enter night mode
    ForceOff,
    /// Always stay in night mode
    ForceOn,
}

/// Whether `current` falls inside the night window
///
/// Both boundaries are half-open: the start minute is inside, the end
/// minute is not. A window whose start is after its end crosses midnight
/// and matches the union of the two wrap-around segments.
pub fn is_within_night_mode(current: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> bool {
    let current = current.to_minutes();
    let start = start.to_minutes();
    let end = end.to_minutes();

    if start <= end {
        // Same-day window
        current >= start && current < end
    } else {
        // Window crosses midnight
        current >= start || current < end
    }
}

/// The next time the night-mode state flips
///
/// While in night mode the next change is the window end; otherwise it
/// is the window start.
pub const fn next_state_change(
    start: TimeOfDay,
    end: TimeOfDay,
    currently_night: bool,
) -> TimeOfDay {
    if currently_night {
        end
    } else {
        start
    }
}

/// Full night-mode decision ladder
///
/// Overrides win outright; then the feature must be enabled and the
/// clock trustworthy before the time window is consulted. An invalid
/// clock falls back to day mode.
pub fn should_be_night_mode(
    current: TimeOfDay,
    start: TimeOfDay,
    end: TimeOfDay,
    enabled: bool,
    override_mode: NightModeOverride,
    time_valid: bool,
) -> bool {
    match override_mode {
        NightModeOverride::ForceOn => return true,
        NightModeOverride::ForceOff => return false,
        NightModeOverride::Auto => {}
    }

    if !enabled {
        return false;
    }

    if !time_valid {
        // No trustworthy clock: stay in day mode
        return false;
    }

    is_within_night_mode(current, start, end)
}

/// Night-mode configuration as stored in device settings
///
/// Start/end are validated at construction; the override and enable flag
/// mirror the switches exposed in the device UI.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NightSchedule {
    /// Window start (inclusive)
    pub start: TimeOfDay,
    /// Window end (exclusive)
    pub end: TimeOfDay,
    /// Whether the night-mode feature is enabled at all
    pub enabled: bool,
    /// Manual override
    pub override_mode: NightModeOverride,
}

impl NightSchedule {
    /// Enabled schedule with the given window and no override
    ///
    /// Rejects start or end times that are not real times of day.
    pub fn try_new(start: TimeOfDay, end: TimeOfDay) -> ConfigResult<Self> {
        for t in [start, end] {
            if !t.is_valid() {
                return Err(ConfigError::InvalidTime {
                    hour: t.hour,
                    minute: t.minute,
                });
            }
        }

        Ok(Self {
            start,
            end,
            enabled: true,
            override_mode: NightModeOverride::Auto,
        })
    }

    /// Whether night mode should be active right now
    pub fn is_active(&self, current: TimeOfDay, time_valid: bool) -> bool {
        should_be_night_mode(
            current,
            self.start,
            self.end,
            self.enabled,
            self.override_mode,
            time_valid,
        )
    }

    /// The next time the active state flips
    pub fn next_change(&self, currently_night: bool) -> TimeOfDay {
        next_state_change(self.start, self.end, currently_night)
    }
}
