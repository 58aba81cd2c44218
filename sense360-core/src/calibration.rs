//! Single-Point Calibration for Temperature/Humidity Sensors
//!
//! Derives constant additive offsets from one paired (reference, raw)
//! measurement and applies them to subsequent raw readings. Used for the
//! SHT30 on Sense360 devices, where factory bias is stable but nonzero.
//!
//! Offsets are clamped to a safe range at computation time: a huge offset
//! means the reference or the sensor is wrong, and applying it would make
//! readings worse rather than better. NaN anywhere in the input marks the
//! result invalid instead of poisoning later arithmetic.

use crate::constants::calibration::{
    HUMIDITY_ERROR_THRESHOLD_PCT, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT,
    HUMIDITY_OFFSET_MAX_PCT, HUMIDITY_OFFSET_MIN_PCT, TEMP_ERROR_THRESHOLD_C,
    TEMP_OFFSET_MAX_C, TEMP_OFFSET_MIN_C,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Offsets produced by a single-point calibration run
///
/// Immutable once produced. `valid` is false when any calibration input
/// was NaN; the offsets are zero in that case and must not be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationResult {
    /// Additive temperature offset (°C)
    pub temperature_offset: f32,
    /// Additive humidity offset (%RH)
    pub humidity_offset: f32,
    /// Whether the offsets were computed from clean input
    pub valid: bool,
}

impl CalibrationResult {
    /// Result with the given offsets, marked valid
    pub const fn new(temperature_offset: f32, humidity_offset: f32) -> Self {
        Self {
            temperature_offset,
            humidity_offset,
            valid: true,
        }
    }

    /// Zero-offset result marked invalid
    pub const fn invalid() -> Self {
        Self {
            temperature_offset: 0.0,
            humidity_offset: 0.0,
            valid: false,
        }
    }
}

impl Default for CalibrationResult {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Compute calibration offsets from one reference/raw measurement pair
///
/// Offset = reference − raw, per channel, each clamped to its safe range
/// (temperature ±30 °C, humidity ±50 %RH). Returns an invalid result if
/// any input is NaN.
pub fn compute_single_point_calibration(
    reference_temp: f32,
    reference_humidity: f32,
    raw_temp: f32,
    raw_humidity: f32,
) -> CalibrationResult {
    if reference_temp.is_nan()
        || reference_humidity.is_nan()
        || raw_temp.is_nan()
        || raw_humidity.is_nan()
    {
        return CalibrationResult::invalid();
    }

    let temp_error = reference_temp - raw_temp;
    let temp_offset = temp_error.clamp(TEMP_OFFSET_MIN_C, TEMP_OFFSET_MAX_C);
    if temp_offset != temp_error {
        log_warn!("temperature offset {} clamped to {}", temp_error, temp_offset);
    }

    let humidity_error = reference_humidity - raw_humidity;
    let humidity_offset = humidity_error.clamp(HUMIDITY_OFFSET_MIN_PCT, HUMIDITY_OFFSET_MAX_PCT);
    if humidity_offset != humidity_error {
        log_warn!("humidity offset {} clamped to {}", humidity_error, humidity_offset);
    }

    CalibrationResult::new(temp_offset, humidity_offset)
}

/// Apply a calibration offset to a raw temperature reading
///
/// NaN raw propagates to NaN output. The offset is assumed finite; it
/// comes from [`compute_single_point_calibration`], which guarantees it.
pub fn apply_temperature_calibration(raw_temp: f32, offset: f32) -> f32 {
    if raw_temp.is_nan() {
        return f32::NAN;
    }
    raw_temp + offset
}

/// Apply a calibration offset to a raw humidity reading
///
/// The result is clamped to the physical [0, 100] %RH range. NaN raw
/// propagates to NaN output, skipping the clamp.
pub fn apply_humidity_calibration(raw_humidity: f32, offset: f32) -> f32 {
    if raw_humidity.is_nan() {
        return f32::NAN;
    }
    (raw_humidity + offset).clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT)
}

/// Check that stored offsets are finite and within the safe ranges
///
/// Bounds are inclusive: an offset of exactly ±30 °C / ±50 %RH passes.
pub fn validate_calibration_offsets(temp_offset: f32, humidity_offset: f32) -> bool {
    if !temp_offset.is_finite() || !humidity_offset.is_finite() {
        return false;
    }

    temp_offset >= TEMP_OFFSET_MIN_C
        && temp_offset <= TEMP_OFFSET_MAX_C
        && humidity_offset >= HUMIDITY_OFFSET_MIN_PCT
        && humidity_offset <= HUMIDITY_OFFSET_MAX_PCT
}

/// Recommend recalibration when the reference disagrees with the sensor
///
/// True iff the temperature error exceeds 2.0 °C or the humidity error
/// exceeds 5.0 %RH, strictly. An error exactly at the threshold does not
/// trigger. Any NaN input returns false: no recommendation can be made
/// from a reading that is not there.
pub fn should_calibrate(
    reference_temp: f32,
    reference_humidity: f32,
    raw_temp: f32,
    raw_humidity: f32,
) -> bool {
    if reference_temp.is_nan()
        || reference_humidity.is_nan()
        || raw_temp.is_nan()
        || raw_humidity.is_nan()
    {
        log_warn!("should_calibrate called with NaN input");
        return false;
    }

    let temp_error = libm::fabsf(reference_temp - raw_temp);
    let humidity_error = libm::fabsf(reference_humidity - raw_humidity);

    temp_error > TEMP_ERROR_THRESHOLD_C || humidity_error > HUMIDITY_ERROR_THRESHOLD_PCT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_positive_offset() {
        let result = compute_single_point_calibration(24.5, 52.0, 22.0, 45.0);
        assert!(result.valid);
        assert!((result.temperature_offset - 2.5).abs() < 1e-5);
        assert!((result.humidity_offset - 7.0).abs() < 1e-5);
    }

    #[test]
    fn simple_negative_offset() {
        let result = compute_single_point_calibration(20.0, 40.0, 23.0, 48.0);
        assert!(result.valid);
        assert!((result.temperature_offset + 3.0).abs() < 1e-5);
        assert!((result.humidity_offset + 8.0).abs() < 1e-5);
    }

    #[test]
    fn zero_offset() {
        let result = compute_single_point_calibration(22.0, 45.0, 22.0, 45.0);
        assert!(result.valid);
        assert_eq!(result.temperature_offset, 0.0);
        assert_eq!(result.humidity_offset, 0.0);
    }

    #[test]
    fn clamps_temperature_offset() {
        // 100 degree error clamps to +30
        let result = compute_single_point_calibration(120.0, 50.0, 20.0, 50.0);
        assert!(result.valid);
        assert_eq!(result.temperature_offset, 30.0);

        let result = compute_single_point_calibration(-80.0, 50.0, 20.0, 50.0);
        assert_eq!(result.temperature_offset, -30.0);
    }

    #[test]
    fn clamps_humidity_offset() {
        let result = compute_single_point_calibration(22.0, 99.0, 22.0, 10.0);
        assert!(result.valid);
        assert_eq!(result.humidity_offset, 50.0);

        let result = compute_single_point_calibration(22.0, 1.0, 22.0, 90.0);
        assert_eq!(result.humidity_offset, -50.0);
    }

    #[test]
    fn nan_input_invalidates_result() {
        let cases = [
            compute_single_point_calibration(f32::NAN, 52.0, 22.0, 45.0),
            compute_single_point_calibration(24.5, f32::NAN, 22.0, 45.0),
            compute_single_point_calibration(24.5, 52.0, f32::NAN, 45.0),
            compute_single_point_calibration(24.5, 52.0, 22.0, f32::NAN),
        ];
        for result in cases {
            assert!(!result.valid);
            assert_eq!(result.temperature_offset, 0.0);
            assert_eq!(result.humidity_offset, 0.0);
        }
    }

    #[test]
    fn apply_temperature_normal_and_negative() {
        assert!((apply_temperature_calibration(21.0, 2.5) - 23.5).abs() < 1e-5);
        assert!((apply_temperature_calibration(21.0, -1.5) - 19.5).abs() < 1e-5);
    }

    #[test]
    fn apply_temperature_nan_propagates() {
        assert!(apply_temperature_calibration(f32::NAN, 2.5).is_nan());
    }

    #[test]
    fn apply_humidity_clamps_to_physical_range() {
        assert!((apply_humidity_calibration(48.0, 7.0) - 55.0).abs() < 1e-5);
        assert_eq!(apply_humidity_calibration(98.0, 10.0), 100.0);
        assert_eq!(apply_humidity_calibration(3.0, -10.0), 0.0);
    }

    #[test]
    fn apply_humidity_nan_propagates() {
        assert!(apply_humidity_calibration(f32::NAN, 7.0).is_nan());
    }

    #[test]
    fn validate_offsets() {
        assert!(validate_calibration_offsets(2.5, 7.0));
        assert!(!validate_calibration_offsets(31.0, 0.0));
        assert!(!validate_calibration_offsets(0.0, -51.0));
        assert!(!validate_calibration_offsets(f32::NAN, 0.0));
        assert!(!validate_calibration_offsets(0.0, f32::INFINITY));
    }

    #[test]
    fn validate_offsets_at_boundaries() {
        // Bounds are inclusive
        assert!(validate_calibration_offsets(30.0, 50.0));
        assert!(validate_calibration_offsets(-30.0, -50.0));
    }

    #[test]
    fn should_calibrate_on_large_errors() {
        assert!(should_calibrate(25.0, 50.0, 22.0, 50.0)); // 3 °C off
        assert!(should_calibrate(22.0, 57.0, 22.0, 50.0)); // 7 %RH off
        assert!(should_calibrate(25.0, 57.0, 22.0, 50.0)); // both
    }

    #[test]
    fn should_not_calibrate_on_small_errors() {
        assert!(!should_calibrate(22.5, 51.0, 22.0, 50.0));
    }

    #[test]
    fn threshold_is_strict() {
        // Exactly at threshold does not trigger
        assert!(!should_calibrate(24.0, 50.0, 22.0, 50.0)); // exactly 2.0 °C
        assert!(!should_calibrate(22.0, 55.0, 22.0, 50.0)); // exactly 5.0 %RH
        assert!(should_calibrate(24.1, 50.0, 22.0, 50.0));
    }

    #[test]
    fn should_calibrate_nan_returns_false() {
        assert!(!should_calibrate(f32::NAN, 50.0, 22.0, 50.0));
        assert!(!should_calibrate(25.0, 50.0, 22.0, f32::NAN));
    }

    #[test]
    fn full_calibration_workflow() {
        // Derive offsets from the reference pair, then correct a new reading
        let reference = (24.5, 52.0);
        let raw = (22.0, 45.0);
        assert!(should_calibrate(reference.0, reference.1, raw.0, raw.1));

        let result = compute_single_point_calibration(reference.0, reference.1, raw.0, raw.1);
        assert!(result.valid);
        assert!(validate_calibration_offsets(
            result.temperature_offset,
            result.humidity_offset
        ));

        let temp = apply_temperature_calibration(21.0, result.temperature_offset);
        let humidity = apply_humidity_calibration(48.0, result.humidity_offset);
        assert!((temp - 23.5).abs() < 1e-5);
        assert!((humidity - 55.0).abs() < 1e-5);
    }
}
