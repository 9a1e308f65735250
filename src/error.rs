//! Error types for twilight time calculations.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during twilight time calculations.
///
/// All errors are rejected input; the algorithm itself never fails for
/// validated inputs. A day without the requested crossing is reported as
/// `None`, not as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid target crossing angle (must be between -90 and +90 degrees).
    InvalidCrossingAngle {
        /// The invalid crossing angle provided.
        value: f64,
    },
    /// Invalid observer elevation in meters (must be finite).
    InvalidElevation {
        /// The invalid elevation value provided.
        value: f64,
    },
    /// Invalid or unrepresentable calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidCrossingAngle { value } => {
                write!(
                    f,
                    "invalid crossing angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be finite)")
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid crossing angle error.
    #[must_use]
    pub const fn invalid_crossing_angle(value: f64) -> Self {
        Self::InvalidCrossingAngle { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is non-finite or outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is non-finite or outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a target crossing angle (degrees relative to the horizon).
///
/// Twilight angles are negative (below the horizon); positive angles up to
/// +90° are accepted for generality.
///
/// # Errors
/// Returns `InvalidCrossingAngle` if the angle is non-finite or outside -90 to +90 degrees.
pub fn check_crossing_angle(angle: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&angle) {
        return Err(Error::invalid_crossing_angle(angle));
    }
    Ok(())
}

/// Validates an observer elevation in meters.
///
/// Negative elevations (below sea level) are accepted; they simply produce
/// no correction.
///
/// # Errors
/// Returns `InvalidElevation` if the elevation is not finite.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(40.7128).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-74.0060).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_crossing_angle_validation() {
        assert!(check_crossing_angle(-12.0).is_ok());
        assert!(check_crossing_angle(-6.0).is_ok());
        assert!(check_crossing_angle(-18.0).is_ok());
        assert!(check_crossing_angle(0.0).is_ok());
        assert!(check_crossing_angle(90.0).is_ok());
        assert!(check_crossing_angle(-90.0).is_ok());

        assert!(check_crossing_angle(-91.0).is_err());
        assert!(check_crossing_angle(91.0).is_err());
        assert!(check_crossing_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_elevation_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(1500.0).is_ok());
        assert!(check_elevation(-430.0).is_ok()); // Dead Sea shore

        assert!(check_elevation(f64::NAN).is_err());
        assert!(check_elevation(f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::invalid_crossing_angle(-95.0);
        assert_eq!(
            err.to_string(),
            "invalid crossing angle -95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_date("date overflow");
        assert_eq!(err.to_string(), "invalid date: date overflow");
    }
}
