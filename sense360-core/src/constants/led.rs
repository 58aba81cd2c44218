//! LED Brightness and Animation Parameters
//!
//! Brightness steps escalate with severity so a worse status is more
//! visible across the room, and the pulse parameters drive the breathing
//! animation used when air quality is poor.

// ===== BRIGHTNESS STEPS =====

/// LED brightness when the worst level is Good.
pub const BRIGHTNESS_GOOD: f32 = 0.40;

/// LED brightness when the worst level is Moderate.
pub const BRIGHTNESS_MODERATE: f32 = 0.60;

/// LED brightness when the worst level is Unhealthy.
pub const BRIGHTNESS_UNHEALTHY: f32 = 0.80;

/// LED brightness when the worst level is Poor or Unknown.
///
/// Unknown gets full brightness: a sensor that cannot report is treated
/// as loudly as the worst reading it could be hiding.
pub const BRIGHTNESS_MAX: f32 = 1.00;

// ===== PULSE ANIMATION =====

/// Period of the breathing pulse (milliseconds).
pub const PULSE_PERIOD_MS: u64 = 5000;

/// Lowest multiplier the pulse reaches.
///
/// The sine term keeps the output at or above this floor without an
/// explicit lower clamp.
pub const PULSE_FLOOR: f32 = 0.90;

/// Peak-to-floor swing of the pulse multiplier.
pub const PULSE_SWING: f32 = 0.10;
