//! Core data types for twilight time calculations.

use crate::math::floor;
use crate::{Error, Result};

/// Which of the two daily crossings of a sun angle to compute.
///
/// The sun crosses any reachable altitude twice per day: once on the way up
/// (dawn side) and once on the way down (dusk side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Morning crossing - the sun is ascending through the target angle.
    Rising,
    /// Evening crossing - the sun is descending through the target angle.
    Setting,
}

impl Direction {
    /// Checks whether this is the morning (rising) crossing.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }
}

/// Predefined sun angles for sunrise/sunset and twilight calculations.
///
/// Corresponds to the standard twilight definitions; negative angles are
/// below the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom sun angle
    Custom(f64),
}

impl Horizon {
    /// Gets the sun angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn crossing_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83337, // Accounts for refraction and sun's radius
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified sun angle.
    ///
    /// # Errors
    /// Returns `InvalidCrossingAngle` if the angle is outside -90 to +90 degrees.
    pub fn custom(angle_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&angle_degrees) {
            return Err(Error::invalid_crossing_angle(angle_degrees));
        }
        Ok(Self::Custom(angle_degrees))
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::SunriseSunset => 0.hash(state),
            Self::CivilTwilight => 1.hash(state),
            Self::NauticalTwilight => 2.hash(state),
            Self::AstronomicalTwilight => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Hours since midnight UTC of the calculation date.
///
/// Carrier type for crossing times in the numeric (non-chrono) API. The raw
/// algorithm output is always in [0, 24), but the elevation shift can push a
/// value slightly negative (previous day) or past 24 (next day):
///
/// # Example
/// ```
/// # use twilight_times::HoursUtc;
/// let dawn = HoursUtc::from_hours(7.5); // 07:30 on the calculation date
/// let shifted = HoursUtc::from_hours(-0.01); // just before midnight, previous day
/// let (day_offset, hours) = shifted.day_and_hours();
/// assert_eq!(day_offset, -1);
/// assert!(hours > 23.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date
    /// - `hours_in_day`: 0.0 to < 24.0
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}
