//! Status LED Color and Brightness Logic
//!
//! Maps severity levels onto the RGB status LED: one fixed color per
//! level, a brightness scale that escalates with severity, and a slow
//! sine "breathing" pulse overlaid when air quality is poor.
//!
//! The classification ladder here mirrors
//! [`thresholds::classify_value`](crate::thresholds::classify_value) over
//! the LED-side [`SeverityLevel`]; the two are kept functionally
//! identical.

use core::f32::consts::PI;

use crate::constants::led::{
    BRIGHTNESS_GOOD, BRIGHTNESS_MAX, BRIGHTNESS_MODERATE, BRIGHTNESS_UNHEALTHY,
    PULSE_FLOOR, PULSE_PERIOD_MS, PULSE_SWING,
};
use crate::thresholds::AirQualityStatus;

/// An RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Color {
    /// Construct a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Severity level driving the status LED
///
/// Same ordering as [`AirQualityStatus`]: `Unknown = -1` sits below every
/// real level, so plain max-aggregation never lets it win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum SeverityLevel {
    /// No valid reading
    Unknown = -1,
    /// Air quality is good
    Good = 0,
    /// Air quality is moderate
    Moderate = 1,
    /// Air quality is unhealthy
    Unhealthy = 2,
    /// Air quality is poor
    Poor = 3,
}

impl SeverityLevel {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            SeverityLevel::Good => "Good",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Unhealthy => "Unhealthy",
            SeverityLevel::Poor => "Poor",
            SeverityLevel::Unknown => "Unknown",
        }
    }
}

impl From<AirQualityStatus> for SeverityLevel {
    fn from(status: AirQualityStatus) -> Self {
        match status {
            AirQualityStatus::Unknown => SeverityLevel::Unknown,
            AirQualityStatus::Good => SeverityLevel::Good,
            AirQualityStatus::Moderate => SeverityLevel::Moderate,
            AirQualityStatus::Unhealthy => SeverityLevel::Unhealthy,
            AirQualityStatus::Poor => SeverityLevel::Poor,
        }
    }
}

impl From<SeverityLevel> for AirQualityStatus {
    fn from(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Unknown => AirQualityStatus::Unknown,
            SeverityLevel::Good => AirQualityStatus::Good,
            SeverityLevel::Moderate => AirQualityStatus::Moderate,
            SeverityLevel::Unhealthy => AirQualityStatus::Unhealthy,
            SeverityLevel::Poor => AirQualityStatus::Poor,
        }
    }
}

/// Fixed LED color for a severity level
///
/// Poor keeps the most-visible alert color so a failure to classify can
/// never render as "all clear".
pub const fn color_for_severity(level: SeverityLevel) -> Color {
    match level {
        SeverityLevel::Unknown => Color::new(24, 32, 64), // dim blue/gray
        SeverityLevel::Good => Color::new(0, 255, 0),     // green
        SeverityLevel::Moderate => Color::new(255, 128, 0), // orange
        SeverityLevel::Unhealthy => Color::new(255, 0, 0), // red
        SeverityLevel::Poor => Color::new(128, 0, 255),   // purple
    }
}

/// Scale a color by a brightness factor
///
/// The factor is clamped to [0, 1] first; each channel is multiplied and
/// truncated.
pub fn scale_color(color: Color, scale: f32) -> Color {
    let scale = scale.clamp(0.0, 1.0);

    Color::new(
        (color.red as f32 * scale) as u8,
        (color.green as f32 * scale) as u8,
        (color.blue as f32 * scale) as u8,
    )
}

/// Classify a sensor value into an LED severity level
///
/// Strict-less-than ladder, same semantics as
/// [`thresholds::classify_value`](crate::thresholds::classify_value):
/// NaN is Unknown, a value exactly at a threshold takes the worse level.
pub fn compute_level(
    value: f32,
    good_threshold: f32,
    moderate_threshold: f32,
    unhealthy_threshold: f32,
) -> SeverityLevel {
    if value.is_nan() {
        return SeverityLevel::Unknown;
    }

    if value < good_threshold {
        SeverityLevel::Good
    } else if value < moderate_threshold {
        SeverityLevel::Moderate
    } else if value < unhealthy_threshold {
        SeverityLevel::Unhealthy
    } else {
        SeverityLevel::Poor
    }
}

/// Brightness scale for the worst observed level
///
/// Good 40%, Moderate 60%, Unhealthy 80%, Poor and Unknown 100%.
pub const fn brightness_scale_for_level(level: SeverityLevel) -> f32 {
    match level {
        SeverityLevel::Good => BRIGHTNESS_GOOD,
        SeverityLevel::Moderate => BRIGHTNESS_MODERATE,
        SeverityLevel::Unhealthy => BRIGHTNESS_UNHEALTHY,
        SeverityLevel::Poor | SeverityLevel::Unknown => BRIGHTNESS_MAX,
    }
}

/// Breathing pulse multiplier for poor air quality
///
/// Sine wave with a 5 s period; output stays within [0.90, 1.00]. Input
/// is milliseconds since boot; phase wraps with the period so the counter
/// may overflow freely.
pub fn compute_pulse_multiplier(millis: u64) -> f32 {
    let phase = (millis % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;
    let pulse = PULSE_FLOOR + PULSE_SWING * (0.5 + 0.5 * libm::sinf(phase * 2.0 * PI));
    pulse.min(1.0)
}

/// Worst severity among the four particulate channels
///
/// Plain maximum: `Unknown = -1` is dominated by any real level, so no
/// special-casing is needed at this layer.
pub fn aggregate_pm_levels(
    pm1: SeverityLevel,
    pm2_5: SeverityLevel,
    pm4: SeverityLevel,
    pm10: SeverityLevel,
) -> SeverityLevel {
    pm1.max(pm2_5).max(pm4.max(pm10))
}

/// Worst severity across all sensor groups
pub fn compute_overall_severity(
    pm: SeverityLevel,
    voc: SeverityLevel,
    nox: SeverityLevel,
    co2: SeverityLevel,
) -> SeverityLevel {
    pm.max(voc).max(nox.max(co2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use SeverityLevel::*;

    #[test]
    fn colors_per_level() {
        assert_eq!(color_for_severity(Unknown), Color::new(24, 32, 64));
        assert_eq!(color_for_severity(Good), Color::new(0, 255, 0));
        assert_eq!(color_for_severity(Moderate), Color::new(255, 128, 0));
        assert_eq!(color_for_severity(Unhealthy), Color::new(255, 0, 0));
        assert_eq!(color_for_severity(Poor), Color::new(128, 0, 255));
    }

    #[test]
    fn scale_color_full_and_half() {
        let c = Color::new(200, 100, 50);
        assert_eq!(scale_color(c, 1.0), c);
        assert_eq!(scale_color(c, 0.5), Color::new(100, 50, 25));
    }

    #[test]
    fn scale_color_zero() {
        assert_eq!(scale_color(Color::new(200, 100, 50), 0.0), Color::new(0, 0, 0));
    }

    #[test]
    fn scale_color_clamps_factor() {
        let c = Color::new(200, 100, 50);
        assert_eq!(scale_color(c, -0.5), Color::new(0, 0, 0));
        assert_eq!(scale_color(c, 1.5), c);
    }

    #[test]
    fn compute_level_each_bucket() {
        assert_eq!(compute_level(5.0, 10.0, 25.0, 50.0), Good);
        assert_eq!(compute_level(15.0, 10.0, 25.0, 50.0), Moderate);
        assert_eq!(compute_level(30.0, 10.0, 25.0, 50.0), Unhealthy);
        assert_eq!(compute_level(60.0, 10.0, 25.0, 50.0), Poor);
        assert_eq!(compute_level(f32::NAN, 10.0, 25.0, 50.0), Unknown);
    }

    #[test]
    fn compute_level_boundaries() {
        assert_eq!(compute_level(10.0, 10.0, 25.0, 50.0), Moderate);
        assert_eq!(compute_level(25.0, 10.0, 25.0, 50.0), Unhealthy);
        assert_eq!(compute_level(50.0, 10.0, 25.0, 50.0), Poor);
        assert_eq!(compute_level(9.99, 10.0, 25.0, 50.0), Good);
    }

    #[test]
    fn level_matches_status_ladder() {
        // The LED ladder must stay functionally identical to thresholds::classify_value
        use crate::thresholds::classify_value;
        for value in [f32::NAN, -1.0, 0.0, 9.99, 10.0, 24.0, 25.0, 49.0, 50.0, 1e9] {
            let level = compute_level(value, 10.0, 25.0, 50.0);
            let status = classify_value(value, 10.0, 25.0, 50.0);
            assert_eq!(AirQualityStatus::from(level), status);
        }
    }

    #[test]
    fn brightness_steps() {
        assert_eq!(brightness_scale_for_level(Good), 0.40);
        assert_eq!(brightness_scale_for_level(Moderate), 0.60);
        assert_eq!(brightness_scale_for_level(Unhealthy), 0.80);
        assert_eq!(brightness_scale_for_level(Poor), 1.00);
        assert_eq!(brightness_scale_for_level(Unknown), 1.00);
    }

    #[test]
    fn pulse_at_phase_points() {
        // sin(0) = 0 at t=0: multiplier is floor + half swing
        assert!((compute_pulse_multiplier(0) - 0.95).abs() < 1e-3);
        // Quarter period: sine peak, capped at 1.0
        assert!((compute_pulse_multiplier(1250) - 1.0).abs() < 1e-3);
        // Three-quarter period: sine trough
        assert!((compute_pulse_multiplier(3750) - 0.90).abs() < 1e-3);
    }

    #[test]
    fn pulse_stays_in_bounds() {
        for millis in (0..20_000u64).step_by(50) {
            let pulse = compute_pulse_multiplier(millis);
            assert!((0.90..=1.00).contains(&pulse), "pulse {} at {} ms", pulse, millis);
        }
    }

    #[test]
    fn aggregate_pm() {
        assert_eq!(aggregate_pm_levels(Good, Good, Good, Good), Good);
        assert_eq!(aggregate_pm_levels(Good, Moderate, Good, Good), Moderate);
        assert_eq!(aggregate_pm_levels(Good, Poor, Unhealthy, Moderate), Poor);
        // Unknown is dominated by any real level
        assert_eq!(aggregate_pm_levels(Unknown, Good, Unknown, Good), Good);
    }

    #[test]
    fn overall_severity() {
        assert_eq!(compute_overall_severity(Good, Good, Good, Good), Good);
        assert_eq!(compute_overall_severity(Moderate, Good, Unhealthy, Good), Unhealthy);
        assert_eq!(compute_overall_severity(Poor, Poor, Poor, Poor), Poor);
    }

    #[test]
    fn status_level_round_trip() {
        for status in [
            AirQualityStatus::Unknown,
            AirQualityStatus::Good,
            AirQualityStatus::Moderate,
            AirQualityStatus::Unhealthy,
            AirQualityStatus::Poor,
        ] {
            assert_eq!(AirQualityStatus::from(SeverityLevel::from(status)), status);
        }
    }
}
