//! Default Classification Thresholds
//!
//! Per-pollutant threshold triples for the Good/Moderate/Unhealthy/Poor
//! ladder. A reading strictly below the "good" threshold is Good, strictly
//! below "moderate" is Moderate, strictly below "unhealthy" is Unhealthy,
//! anything else is Poor.
//!
//! Particulate values are informed by the WHO 2021 air quality guidelines,
//! VOC/NOx by the Sensirion SGP4x index ranges, CO2 by common indoor air
//! guidance (ASHRAE ventilation levels). These are configuration data, not
//! logic - deployments override them per site.

// ===== PARTICULATE MATTER (µg/m³) =====

/// PM1.0 upper limit for Good.
pub const PM1_GOOD: f32 = 10.0;
/// PM1.0 upper limit for Moderate.
pub const PM1_MODERATE: f32 = 20.0;
/// PM1.0 upper limit for Unhealthy.
pub const PM1_UNHEALTHY: f32 = 35.0;

/// PM2.5 upper limit for Good.
pub const PM25_GOOD: f32 = 10.0;
/// PM2.5 upper limit for Moderate.
pub const PM25_MODERATE: f32 = 25.0;
/// PM2.5 upper limit for Unhealthy.
pub const PM25_UNHEALTHY: f32 = 50.0;

/// PM4.0 upper limit for Good.
pub const PM40_GOOD: f32 = 20.0;
/// PM4.0 upper limit for Moderate.
pub const PM40_MODERATE: f32 = 40.0;
/// PM4.0 upper limit for Unhealthy.
pub const PM40_UNHEALTHY: f32 = 75.0;

/// PM10 upper limit for Good.
pub const PM10_GOOD: f32 = 20.0;
/// PM10 upper limit for Moderate.
pub const PM10_MODERATE: f32 = 50.0;
/// PM10 upper limit for Unhealthy.
pub const PM10_UNHEALTHY: f32 = 100.0;

// ===== GAS INDICES (Sensirion index, 0-500) =====

/// VOC index upper limit for Good.
pub const VOC_GOOD: f32 = 80.0;
/// VOC index upper limit for Moderate.
pub const VOC_MODERATE: f32 = 150.0;
/// VOC index upper limit for Unhealthy.
pub const VOC_UNHEALTHY: f32 = 250.0;

/// NOx index upper limit for Good.
pub const NOX_GOOD: f32 = 80.0;
/// NOx index upper limit for Moderate.
pub const NOX_MODERATE: f32 = 150.0;
/// NOx index upper limit for Unhealthy.
pub const NOX_UNHEALTHY: f32 = 250.0;

// ===== CO2 (ppm) =====

/// CO2 upper limit for Good.
pub const CO2_GOOD: f32 = 750.0;
/// CO2 upper limit for Moderate.
pub const CO2_MODERATE: f32 = 1000.0;
/// CO2 upper limit for Unhealthy.
pub const CO2_UNHEALTHY: f32 = 1500.0;
