//! Threshold-Based Air Quality Classification
//!
//! Maps scalar sensor readings (PM, VOC, NOx, CO2) onto the ordered
//! Good/Moderate/Unhealthy/Poor ladder, reduces multiple statuses to the
//! worst one, and papers over transient NaN gaps from sensors that are
//! still warming up.
//!
//! All comparisons are strict less-than: a reading exactly equal to a
//! threshold falls into the next (worse) bucket. NaN readings classify as
//! `Unknown`, which is excluded from worst-of reductions unless every
//! input is Unknown.

use crate::constants::thresholds as defaults;
use crate::errors::{ConfigError, ConfigResult};

/// Air quality status for a sensor reading
///
/// Ordered by severity: `Good < Moderate < Unhealthy < Poor`. `Unknown`
/// marks an invalid (NaN) reading and sits below every real status so it
/// never wins a max-based aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum AirQualityStatus {
    /// Reading was NaN or the sensor has not reported yet
    Unknown = -1,
    /// Below the "good" threshold
    Good = 0,
    /// Below the "moderate" threshold
    Moderate = 1,
    /// Below the "unhealthy" threshold
    Unhealthy = 2,
    /// At or above the "unhealthy" threshold
    Poor = 3,
}

impl AirQualityStatus {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            AirQualityStatus::Good => "Good",
            AirQualityStatus::Moderate => "Moderate",
            AirQualityStatus::Unhealthy => "Unhealthy",
            AirQualityStatus::Poor => "Poor",
            AirQualityStatus::Unknown => "Unknown",
        }
    }
}

impl core::fmt::Display for AirQualityStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a sensor reading against a threshold triple
///
/// NaN yields `Unknown`. Otherwise the first strict-less-than test wins:
/// below `good_threshold` is Good, below `moderate_threshold` is Moderate,
/// below `unhealthy_threshold` is Unhealthy, anything else is Poor. A
/// value exactly at a threshold lands in the worse bucket.
pub fn classify_value(
    value: f32,
    good_threshold: f32,
    moderate_threshold: f32,
    unhealthy_threshold: f32,
) -> AirQualityStatus {
    if value.is_nan() {
        return AirQualityStatus::Unknown;
    }

    if value < good_threshold {
        AirQualityStatus::Good
    } else if value < moderate_threshold {
        AirQualityStatus::Moderate
    } else if value < unhealthy_threshold {
        AirQualityStatus::Unhealthy
    } else {
        AirQualityStatus::Poor
    }
}

/// Worst of two statuses, ignoring Unknown
///
/// Unknown is the identity: it only survives when both inputs are
/// Unknown. Otherwise the maximum by severity wins.
pub fn worst_status(a: AirQualityStatus, b: AirQualityStatus) -> AirQualityStatus {
    match (a, b) {
        (AirQualityStatus::Unknown, other) => other,
        (other, AirQualityStatus::Unknown) => other,
        (a, b) => a.max(b),
    }
}

/// Worst of three statuses, ignoring Unknown
pub fn worst_status3(
    a: AirQualityStatus,
    b: AirQualityStatus,
    c: AirQualityStatus,
) -> AirQualityStatus {
    worst_status(worst_status(a, b), c)
}

/// Worst of four statuses, ignoring Unknown
pub fn worst_status4(
    a: AirQualityStatus,
    b: AirQualityStatus,
    c: AirQualityStatus,
    d: AirQualityStatus,
) -> AirQualityStatus {
    worst_status(worst_status(a, b), worst_status(c, d))
}

/// Worst status over any number of readings
///
/// Returns `Unknown` for an empty or all-Unknown input.
pub fn worst_status_of<I>(statuses: I) -> AirQualityStatus
where
    I: IntoIterator<Item = AirQualityStatus>,
{
    statuses
        .into_iter()
        .fold(AirQualityStatus::Unknown, worst_status)
}

/// Pick a displayable value when the current reading may be NaN
///
/// Returns `current` if it is a real number, else `last_valid` if that is,
/// else `fallback`. Used for the CO2 sensor during its heating-up phase,
/// where readings drop out for a few cycles.
pub fn preserve_last_valid(current: f32, last_valid: f32, fallback: f32) -> f32 {
    if !current.is_nan() {
        return current;
    }
    if !last_valid.is_nan() {
        return last_valid;
    }
    fallback
}

/// Advance the caller-held last-valid tracker
///
/// Returns `current` when it is a real number, else the unchanged
/// `last_valid`. The caller stores the return value and threads it back
/// in on the next polling cycle; there is no hidden state here.
pub fn update_last_valid(current: f32, last_valid: f32) -> f32 {
    if !current.is_nan() {
        return current;
    }
    last_valid
}

/// A validated threshold triple for one pollutant
///
/// Carries the upper limits of the Good, Moderate, and Unhealthy buckets.
/// The named constructors give the Sense360 defaults; deployments build
/// their own with [`Thresholds::try_new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Upper limit for Good
    pub good: f32,
    /// Upper limit for Moderate
    pub moderate: f32,
    /// Upper limit for Unhealthy
    pub unhealthy: f32,
}

impl Thresholds {
    /// Validated constructor: rejects triples that are not strictly ascending
    ///
    /// NaN fails the ascending comparison, so NaN thresholds are rejected
    /// by the same check.
    pub fn try_new(good: f32, moderate: f32, unhealthy: f32) -> ConfigResult<Self> {
        if !(good < moderate && moderate < unhealthy) {
            return Err(ConfigError::ThresholdsNotAscending {
                good,
                moderate,
                unhealthy,
            });
        }
        Ok(Self {
            good,
            moderate,
            unhealthy,
        })
    }

    /// Default PM1.0 thresholds (µg/m³)
    pub const fn pm1() -> Self {
        Self {
            good: defaults::PM1_GOOD,
            moderate: defaults::PM1_MODERATE,
            unhealthy: defaults::PM1_UNHEALTHY,
        }
    }

    /// Default PM2.5 thresholds (µg/m³)
    pub const fn pm2_5() -> Self {
        Self {
            good: defaults::PM25_GOOD,
            moderate: defaults::PM25_MODERATE,
            unhealthy: defaults::PM25_UNHEALTHY,
        }
    }

    /// Default PM4.0 thresholds (µg/m³)
    pub const fn pm4() -> Self {
        Self {
            good: defaults::PM40_GOOD,
            moderate: defaults::PM40_MODERATE,
            unhealthy: defaults::PM40_UNHEALTHY,
        }
    }

    /// Default PM10 thresholds (µg/m³)
    pub const fn pm10() -> Self {
        Self {
            good: defaults::PM10_GOOD,
            moderate: defaults::PM10_MODERATE,
            unhealthy: defaults::PM10_UNHEALTHY,
        }
    }

    /// Default VOC index thresholds
    pub const fn voc() -> Self {
        Self {
            good: defaults::VOC_GOOD,
            moderate: defaults::VOC_MODERATE,
            unhealthy: defaults::VOC_UNHEALTHY,
        }
    }

    /// Default NOx index thresholds
    pub const fn nox() -> Self {
        Self {
            good: defaults::NOX_GOOD,
            moderate: defaults::NOX_MODERATE,
            unhealthy: defaults::NOX_UNHEALTHY,
        }
    }

    /// Default CO2 thresholds (ppm)
    pub const fn co2() -> Self {
        Self {
            good: defaults::CO2_GOOD,
            moderate: defaults::CO2_MODERATE,
            unhealthy: defaults::CO2_UNHEALTHY,
        }
    }

    /// Classify a reading against this triple
    pub fn classify(&self, value: f32) -> AirQualityStatus {
        classify_value(value, self.good, self.moderate, self.unhealthy)
    }
}
