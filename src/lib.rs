//! # Twilight Times Library
//!
//! Twilight and sun-crossing time calculations for lighting-schedule applications.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes the UTC instant at which the sun crosses a given
//! angle relative to the horizon (sunrise/sunset, civil, nautical, and
//! astronomical twilight), using the closed-form almanac algorithm
//! ("Almanac for Computers", U.S. Naval Observatory, 1990). On top of the
//! single-crossing core it provides a multi-day nautical twilight report
//! with fixed output formatting.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Deterministic: pure computation, no I/O, no ambient clock - report start dates are injected
//! - Thread-safe: stateless, immutable data structures
//! - Polar day/night reported as `None`, never as an error
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `NaiveDate`/`DateTime<Utc>` based convenience API and the report driver
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! twilight-times = "0.1"
//!
//! # Minimal std (no chrono, numeric API only)
//! twilight-times = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! twilight-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Accuracy
//!
//! The almanac algorithm is a deliberately low-precision approximate
//! ephemeris: results are good to a minute or two, which is sufficient for
//! scheduling street lighting. Its day-of-year approximation and constants
//! are preserved exactly for compatibility with existing schedule consumers;
//! this is not the place to look for arcsecond ephemeris accuracy.
//!
//! ## Quick Start
//!
//! ### Single crossing (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use twilight_times::{almanac, Direction, Horizon};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let dawn = almanac::crossing_time_for_horizon(
//!     date,
//!     48.21,   // Vienna latitude
//!     16.37,   // Vienna longitude
//!     190.0,   // elevation (meters)
//!     Horizon::NauticalTwilight,
//!     Direction::Rising,
//! ).unwrap();
//!
//! match dawn {
//!     Some(instant) => println!("Nautical dawn: {} UTC", instant.format("%H:%M:%S")),
//!     None => println!("Not occurring"),
//! }
//! # }
//! ```
//!
//! ### Single crossing (numeric API, no chrono)
//! ```rust
//! use twilight_times::{almanac, Direction};
//!
//! let dusk = almanac::crossing_time_utc(
//!     2025, 3, 10,
//!     48.21,   // Vienna latitude
//!     16.37,   // Vienna longitude
//!     190.0,   // elevation (meters)
//!     -12.0,   // nautical twilight angle
//!     Direction::Setting,
//! ).unwrap();
//!
//! if let Some(t) = dusk {
//!     let (day_offset, hours) = t.day_and_hours();
//!     println!("Nautical dusk: {hours:.3} h UTC (day offset {day_offset})");
//! }
//! ```
//!
//! ### Multi-day report (requires std + chrono)
//! ```rust
//! # #[cfg(all(feature = "std", feature = "chrono"))] {
//! use twilight_times::report::twilight_report;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let report = twilight_report(start, 40.7128, -74.0060, 0.0, 5).unwrap();
//! for day in &report {
//!     println!("{day}");
//! }
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{Direction, Horizon, HoursUtc};
#[cfg(all(feature = "std", feature = "chrono"))]
pub use crate::report::{DEFAULT_REPORT_DAYS, TwilightDay};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Report driver (needs formatting and chrono dates)
#[cfg(all(feature = "std", feature = "chrono"))]
pub mod report;
