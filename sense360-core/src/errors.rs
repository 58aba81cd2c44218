//! Error Types for Configuration Validation
//!
//! The sensor-value path never fails out-of-band: NaN input yields an
//! `Unknown` status, an invalid [`CalibrationResult`](crate::CalibrationResult),
//! or a propagated NaN. Errors exist only on the configuration path, where
//! a rejected value means a bad user setting rather than a bad reading.
//!
//! Errors are kept small for embedded use: `Copy`, inline payloads only,
//! no heap. `defmt::Format` is provided behind the `defmt` feature so
//! rejected settings are loggable on-probe.

use thiserror_no_std::Error;

/// Result type for configuration constructors
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration validation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Hour or minute outside the valid time-of-day range
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime {
        /// Rejected hour (valid range 0-23)
        hour: u8,
        /// Rejected minute (valid range 0-59)
        minute: u8,
    },

    /// Classification thresholds must satisfy good < moderate < unhealthy
    #[error("thresholds not strictly ascending: {good}, {moderate}, {unhealthy}")]
    ThresholdsNotAscending {
        /// Upper limit for the Good bucket
        good: f32,
        /// Upper limit for the Moderate bucket
        moderate: f32,
        /// Upper limit for the Unhealthy bucket
        unhealthy: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidTime { hour, minute } =>
                defmt::write!(fmt, "Invalid time {}:{}", hour, minute),
            Self::ThresholdsNotAscending { good, moderate, unhealthy } =>
                defmt::write!(fmt, "Thresholds not ascending: {}, {}, {}", good, moderate, unhealthy),
        }
    }
}
