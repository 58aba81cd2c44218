//! Constants for the Sense360 core
//!
//! Centralized, documented constants used throughout the helper routines.
//! All numeric values live here with their units spelled out in the name,
//! grouped by domain:
//!
//! - **Calibration**: offset clamp ranges and recalibration error thresholds
//! - **Thresholds**: per-pollutant default classification triples
//! - **Led**: brightness steps and pulse animation parameters
//! - **Time**: minute-of-day conversion factors

/// Offset clamp ranges and recalibration error thresholds.
pub mod calibration;

/// Default classification thresholds per pollutant.
pub mod thresholds;

/// LED brightness steps and pulse animation parameters.
pub mod led;

/// Minute-of-day conversion factors.
pub mod time;

// Re-export commonly used constants for convenience
pub use calibration::{
    TEMP_OFFSET_MIN_C, TEMP_OFFSET_MAX_C,
    HUMIDITY_OFFSET_MIN_PCT, HUMIDITY_OFFSET_MAX_PCT,
};

pub use thresholds::{
    PM25_GOOD, PM25_MODERATE, PM25_UNHEALTHY,
    CO2_GOOD, CO2_MODERATE, CO2_UNHEALTHY,
};

pub use time::MINUTES_PER_DAY;
