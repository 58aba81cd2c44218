//! Core helper routines for the Sense360 air quality monitor
//!
//! Pure, stateless building blocks used by the device firmware:
//! sensor calibration offsets, threshold-based severity classification,
//! LED color/brightness mapping, and night-mode time windows.
//!
//! Key constraints:
//! - Runs on small MCU targets (no_std, no heap)
//! - Every function is total: NaN input yields a sentinel, never a panic
//! - Reentrant - the only cross-call state is a caller-held float
//!
//! ```
//! use sense360_core::{Thresholds, AirQualityStatus};
//!
//! let pm25 = Thresholds::pm2_5();
//!
//! // Classify a sensor reading
//! match pm25.classify(8.0) {
//!     AirQualityStatus::Good => {} // LED stays green
//!     status => { let _ = status.name(); } // escalate
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calibration;
pub mod constants;
pub mod errors;
pub mod led;
pub mod night_mode;
pub mod thresholds;
pub mod time;

// Public API
pub use calibration::CalibrationResult;
pub use errors::{ConfigError, ConfigResult};
pub use led::{Color, SeverityLevel};
pub use night_mode::{NightModeOverride, NightSchedule};
pub use thresholds::{AirQualityStatus, Thresholds};
pub use time::TimeOfDay;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
