//! Calibration Ranges and Error Thresholds
//!
//! Safe ranges for single-point calibration offsets and the error
//! magnitudes above which recalibration is recommended. Values match the
//! SHT30 deployment limits used across Sense360 devices.

// ===== OFFSET CLAMP RANGES =====

/// Minimum allowed temperature calibration offset (°C).
///
/// An offset below this indicates a broken sensor or a bad reference,
/// not a calibratable bias.
pub const TEMP_OFFSET_MIN_C: f32 = -30.0;

/// Maximum allowed temperature calibration offset (°C).
pub const TEMP_OFFSET_MAX_C: f32 = 30.0;

/// Minimum allowed humidity calibration offset (%RH).
pub const HUMIDITY_OFFSET_MIN_PCT: f32 = -50.0;

/// Maximum allowed humidity calibration offset (%RH).
pub const HUMIDITY_OFFSET_MAX_PCT: f32 = 50.0;

// ===== PHYSICAL LIMITS =====

/// Minimum physically meaningful relative humidity (%).
///
/// Source: Physics (0% RH = no water vapor)
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Maximum physically meaningful relative humidity (%).
///
/// Source: Physics (100% RH = saturated air)
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== RECALIBRATION THRESHOLDS =====

/// Temperature error above which recalibration is recommended (°C).
///
/// Strict greater-than: an error of exactly 2.0 °C does not trigger.
/// Source: SHT30 datasheet typical accuracy is ±0.2 °C; a 2 °C error
/// means the stored offset no longer matches the environment.
pub const TEMP_ERROR_THRESHOLD_C: f32 = 2.0;

/// Humidity error above which recalibration is recommended (%RH).
///
/// Strict greater-than, same as the temperature threshold.
pub const HUMIDITY_ERROR_THRESHOLD_PCT: f32 = 5.0;
