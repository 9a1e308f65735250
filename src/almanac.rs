//! Sun-crossing time calculation using the classic almanac algorithm.
//!
//! This follows the closed-form sunrise/sunset algorithm from the
//! "Almanac for Computers" (U.S. Naval Observatory, 1990), generalized to an
//! arbitrary target sun angle so the same routine yields sunrise/sunset as
//! well as civil, nautical, and astronomical twilight crossings.
//!
//! The algorithm is a low-precision approximate ephemeris (equation-of-time
//! style): it uses an approximate day-of-year formula, a two-term equation
//! of center, and a quadrant-corrected right ascension. Accuracy is on the
//! order of a minute or two, which is sufficient for lighting-schedule
//! purposes. The constants and the day-of-year approximation are deliberate
//! and must not be replaced with higher-precision equivalents; downstream
//! consumers depend on output compatibility.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::{check_coordinates, check_crossing_angle, check_elevation};
use crate::math::{
    acos, asin, atan, cos, degrees_to_radians, floor, radians_to_degrees, sin, tan,
    wrap_degrees_0_to_360, wrap_hours_0_to_24,
};
#[cfg(feature = "chrono")]
use crate::types::Horizon;
use crate::types::{Direction, HoursUtc};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Per 1000 m of observer elevation the sun appears to rise about one minute
/// earlier and set one minute later. Linear approximation, not a geometric
/// horizon-dip correction; only applied for elevations above sea level.
const ELEVATION_SECONDS_PER_METER: f64 = 60.0 / 1000.0;

/// Calculate the UTC time at which the sun crosses a target angle.
///
/// This is the numeric API: the date is given as year/month/day components
/// and the result is hours since midnight UTC of that date. It works without
/// the `chrono` feature.
///
/// # Arguments
/// * `year` - Year (e.g., 2025)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `elevation` - Observer elevation in meters (correction applied only above 0)
/// * `angle` - Target sun angle in degrees (negative = below horizon, e.g. -12 for nautical)
/// * `direction` - Morning (`Rising`) or evening (`Setting`) crossing
///
/// # Returns
/// `Some(HoursUtc)` with the crossing time, or `None` when the sun never
/// reaches the target angle that day at that location (polar day or polar
/// night). `None` is a valid outcome, not an error.
///
/// # Errors
/// Returns an error for out-of-range coordinates, a non-finite elevation, an
/// out-of-range crossing angle, or an invalid month/day.
///
/// # Example
/// ```rust
/// use twilight_times::{almanac, Direction};
///
/// // Nautical dawn in New York on a winter day
/// let dawn = almanac::crossing_time_utc(
///     2025, 1, 15,
///     40.7128,   // New York latitude
///     -74.0060,  // New York longitude
///     0.0,       // sea level
///     -12.0,     // nautical twilight angle
///     Direction::Rising,
/// ).unwrap();
///
/// let t = dawn.expect("mid-latitude winter day has a nautical dawn");
/// assert!(t.hours() >= 0.0 && t.hours() < 24.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn crossing_time_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    angle: f64,
    direction: Direction,
) -> Result<Option<HoursUtc>> {
    check_coordinates(latitude, longitude)?;
    check_crossing_angle(angle)?;
    check_elevation(elevation)?;
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_date("day must be between 1 and 31"));
    }

    Ok(crossing_hours(
        year, month, day, latitude, longitude, elevation, angle, direction,
    ))
}

/// Core almanac computation. Inputs are pre-validated.
#[allow(clippy::too_many_arguments)]
fn crossing_hours(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    angle: f64,
    direction: Direction,
) -> Option<HoursUtc> {
    let lat_rad = degrees_to_radians(latitude);

    let year = f64::from(year);
    let month = f64::from(month);
    let day = f64::from(day);

    // Approximate day of year. Intentionally not a calendar lookup; the
    // almanac formula must be kept as-is for output compatibility.
    let n1 = floor(275.0 * month / 9.0);
    let n2 = floor((month + 9.0) / 12.0);
    let n3 = 1.0 + floor((year - 4.0 * floor(year / 4.0) + 2.0) / 3.0);
    let n = n1 - (n2 * n3) + day - 30.0;

    let lng_hour = longitude / 15.0;

    // Approximate event time, anchored at 6h local for rising and 18h for setting
    let t = match direction {
        Direction::Rising => n + ((6.0 - lng_hour) / 24.0),
        Direction::Setting => n + ((18.0 - lng_hour) / 24.0),
    };

    // Sun's mean anomaly (degrees)
    let m = (0.9856 * t) - 3.289;

    // Sun's true longitude, via a two-term equation of center
    let l = wrap_degrees_0_to_360(
        m + (1.916 * sin(degrees_to_radians(m)))
            + (0.020 * sin(degrees_to_radians(2.0 * m)))
            + 282.634,
    );

    // Sun's right ascension, adjusted into the same quadrant as L
    let mut ra = wrap_degrees_0_to_360(radians_to_degrees(atan(0.91764 * tan(degrees_to_radians(l)))));
    let l_quadrant = floor(l / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    ra += l_quadrant - ra_quadrant;
    let ra_hours = ra / 15.0;

    // Sun's declination
    let sin_dec = 0.39782 * sin(degrees_to_radians(l));
    let cos_dec = cos(asin(sin_dec));

    // Sun's local hour angle at the target altitude
    let cos_h =
        (sin(degrees_to_radians(angle)) - (sin_dec * sin(lat_rad))) / (cos_dec * cos(lat_rad));

    if cos_h > 1.0 {
        // Sun never descends to the target angle (e.g. polar day)
        return None;
    }
    if cos_h < -1.0 {
        // Sun never ascends to the target angle (e.g. polar night)
        return None;
    }

    let h = match direction {
        Direction::Rising => 360.0 - radians_to_degrees(acos(cos_h)),
        Direction::Setting => radians_to_degrees(acos(cos_h)),
    };
    let h = h / 15.0;

    // Local mean time of the crossing
    let t_local = h + ra_hours - (0.06571 * t) - 6.622;

    // Convert to UTC, wrapped into [0, 24)
    let ut = wrap_hours_0_to_24(t_local - lng_hour);

    // Truncate to whole seconds, not rounded
    let hours = floor(ut);
    let minutes = floor((ut - hours) * 60.0);
    let seconds = floor(((ut - hours) * 60.0 - minutes) * 60.0);
    let mut total_seconds = hours * 3600.0 + minutes * 60.0 + seconds;

    if elevation > 0.0 {
        let shift = elevation * ELEVATION_SECONDS_PER_METER;
        match direction {
            Direction::Rising => total_seconds -= shift,
            Direction::Setting => total_seconds += shift,
        }
    }

    Some(HoursUtc::from_hours(total_seconds / 3600.0))
}

/// Calculate the UTC instant at which the sun crosses a target angle.
///
/// Chrono variant of [`crossing_time_utc`]: takes a calendar date and
/// composes a full `DateTime<Utc>`. The elevation shift can move the instant
/// across midnight onto an adjacent calendar day; the composed instant
/// reflects that.
///
/// # Arguments
/// * `date` - Calendar date to calculate for
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `elevation` - Observer elevation in meters (correction applied only above 0)
/// * `angle` - Target sun angle in degrees (negative = below horizon)
/// * `direction` - Morning (`Rising`) or evening (`Setting`) crossing
///
/// # Returns
/// `Some(DateTime<Utc>)` with the crossing instant, or `None` for polar
/// day/night conditions.
///
/// # Errors
/// Returns an error for out-of-range coordinates, a non-finite elevation, or
/// an out-of-range crossing angle.
///
/// # Example
/// ```rust
/// use twilight_times::{almanac, Direction};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let dusk = almanac::crossing_time(date, 51.5074, -0.1278, 0.0, -12.0, Direction::Setting)
///     .unwrap()
///     .expect("London always has a nautical dusk in March");
/// println!("Nautical dusk: {}", dusk.format("%H:%M:%S"));
/// ```
#[cfg(feature = "chrono")]
pub fn crossing_time(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    angle: f64,
    direction: Direction,
) -> Result<Option<DateTime<Utc>>> {
    let hours = crossing_time_utc(
        date.year(),
        date.month(),
        date.day(),
        latitude,
        longitude,
        elevation,
        angle,
        direction,
    )?;

    Ok(hours.map(|t| compose_instant(date, t)))
}

/// Calculate the UTC crossing instant for a predefined horizon.
///
/// # Errors
/// Returns an error for out-of-range coordinates or a non-finite elevation.
///
/// # Example
/// ```rust
/// use twilight_times::{almanac, Direction, Horizon};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let civil_dawn = almanac::crossing_time_for_horizon(
///     date,
///     48.21, 16.37, // Vienna
///     190.0,
///     Horizon::CivilTwilight,
///     Direction::Rising,
/// ).unwrap();
/// assert!(civil_dawn.is_some());
/// ```
#[cfg(feature = "chrono")]
pub fn crossing_time_for_horizon(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    horizon: Horizon,
    direction: Direction,
) -> Result<Option<DateTime<Utc>>> {
    crossing_time(
        date,
        latitude,
        longitude,
        elevation,
        horizon.crossing_angle(),
        direction,
    )
}

/// Calculate nautical dawn: the morning crossing of 12° below the horizon.
///
/// # Errors
/// Returns an error for out-of-range coordinates or a non-finite elevation.
#[cfg(feature = "chrono")]
pub fn nautical_dawn(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<Option<DateTime<Utc>>> {
    crossing_time_for_horizon(
        date,
        latitude,
        longitude,
        elevation,
        Horizon::NauticalTwilight,
        Direction::Rising,
    )
}

/// Calculate nautical dusk: the evening crossing of 12° below the horizon.
///
/// # Errors
/// Returns an error for out-of-range coordinates or a non-finite elevation.
#[cfg(feature = "chrono")]
pub fn nautical_dusk(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<Option<DateTime<Utc>>> {
    crossing_time_for_horizon(
        date,
        latitude,
        longitude,
        elevation,
        Horizon::NauticalTwilight,
        Direction::Setting,
    )
}

/// Composes midnight UTC of `date` plus the computed offset.
///
/// Microsecond resolution keeps the fractional part of the elevation shift.
#[cfg(feature = "chrono")]
fn compose_instant(date: NaiveDate, t: HoursUtc) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let micros = (t.hours() * 3_600_000_000.0).round() as i64;
    midnight + Duration::microseconds(micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_time_utc_mid_latitude() {
        // London-ish coordinates: nautical twilight exists year round
        let dawn =
            crossing_time_utc(2025, 3, 10, 51.5, 0.0, 0.0, -12.0, Direction::Rising).unwrap();
        let dusk =
            crossing_time_utc(2025, 3, 10, 51.5, 0.0, 0.0, -12.0, Direction::Setting).unwrap();

        let dawn = dawn.expect("dawn should occur");
        let dusk = dusk.expect("dusk should occur");

        assert!(dawn.hours() >= 0.0 && dawn.hours() < 24.0);
        assert!(dusk.hours() >= 0.0 && dusk.hours() < 24.0);
        // At the prime meridian UTC tracks local time, so dawn precedes dusk
        assert!(dawn.hours() < dusk.hours());
    }

    #[test]
    fn test_crossing_time_utc_polar_day() {
        // High arctic midsummer: the sun never gets 12° below the horizon
        let dawn = crossing_time_utc(2025, 6, 21, 89.0, 0.0, 0.0, -12.0, Direction::Rising).unwrap();
        let dusk =
            crossing_time_utc(2025, 6, 21, 89.0, 0.0, 0.0, -12.0, Direction::Setting).unwrap();

        assert_eq!(dawn, None);
        assert_eq!(dusk, None);
    }

    #[test]
    fn test_crossing_time_utc_polar_night_for_positive_angle() {
        // High arctic midwinter: the sun never climbs above the horizon
        let sunrise =
            crossing_time_utc(2025, 12, 21, 89.0, 0.0, 0.0, 0.0, Direction::Rising).unwrap();
        assert_eq!(sunrise, None);
    }

    #[test]
    fn test_crossing_time_utc_validation() {
        assert!(crossing_time_utc(2025, 1, 1, 95.0, 0.0, 0.0, -12.0, Direction::Rising).is_err());
        assert!(crossing_time_utc(2025, 1, 1, 0.0, 185.0, 0.0, -12.0, Direction::Rising).is_err());
        assert!(
            crossing_time_utc(2025, 1, 1, 0.0, 0.0, f64::NAN, -12.0, Direction::Rising).is_err()
        );
        assert!(crossing_time_utc(2025, 1, 1, 0.0, 0.0, 0.0, -95.0, Direction::Rising).is_err());
        assert!(crossing_time_utc(2025, 13, 1, 0.0, 0.0, 0.0, -12.0, Direction::Rising).is_err());
        assert!(crossing_time_utc(2025, 1, 32, 0.0, 0.0, 0.0, -12.0, Direction::Rising).is_err());
    }

    #[test]
    fn test_determinism() {
        let a = crossing_time_utc(2025, 9, 1, 40.7128, -74.0060, 10.0, -12.0, Direction::Rising)
            .unwrap()
            .unwrap();
        let b = crossing_time_utc(2025, 9, 1, 40.7128, -74.0060, 10.0, -12.0, Direction::Rising)
            .unwrap()
            .unwrap();
        assert_eq!(a.hours().to_bits(), b.hours().to_bits());
    }

    #[test]
    fn test_elevation_shift_direction() {
        // 1000 m shifts the truncated time by exactly 60 seconds
        let at_sea = crossing_hours(2025, 3, 10, 51.5, 0.0, 0.0, -12.0, Direction::Rising).unwrap();
        let raised =
            crossing_hours(2025, 3, 10, 51.5, 0.0, 1000.0, -12.0, Direction::Rising).unwrap();
        let diff_seconds = (at_sea.hours() - raised.hours()) * 3600.0;
        assert!((diff_seconds - 60.0).abs() < 1e-6);

        let at_sea_dusk =
            crossing_hours(2025, 3, 10, 51.5, 0.0, 0.0, -12.0, Direction::Setting).unwrap();
        let raised_dusk =
            crossing_hours(2025, 3, 10, 51.5, 0.0, 1000.0, -12.0, Direction::Setting).unwrap();
        let diff_seconds = (raised_dusk.hours() - at_sea_dusk.hours()) * 3600.0;
        assert!((diff_seconds - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_elevation_produces_no_correction() {
        let at_sea = crossing_hours(2025, 3, 10, 51.5, 0.0, 0.0, -12.0, Direction::Rising).unwrap();
        let below =
            crossing_hours(2025, 3, 10, 51.5, 0.0, -430.0, -12.0, Direction::Rising).unwrap();
        assert_eq!(at_sea.hours().to_bits(), below.hours().to_bits());
    }

    #[test]
    fn test_truncation_to_whole_seconds() {
        // Without an elevation shift the result is a whole number of seconds
        let t = crossing_hours(2025, 7, 4, 35.0, 139.0, 0.0, -12.0, Direction::Setting).unwrap();
        let total_seconds = t.hours() * 3600.0;
        assert_eq!(total_seconds, total_seconds.floor());
    }

    #[cfg(feature = "chrono")]
    mod chrono_tests {
        use super::super::*;
        use chrono::Timelike;

        #[test]
        fn test_crossing_time_composes_requested_date() {
            let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
            let dawn = crossing_time(date, 51.5074, -0.1278, 0.0, -12.0, Direction::Rising)
                .unwrap()
                .expect("dawn should occur");

            assert_eq!(dawn.date_naive(), date);
            assert_eq!(dawn.nanosecond() % 1000, 0);
        }

        #[test]
        fn test_crossing_time_for_horizon_matches_raw_angle() {
            let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
            let by_horizon = crossing_time_for_horizon(
                date,
                48.21,
                16.37,
                0.0,
                Horizon::NauticalTwilight,
                Direction::Rising,
            )
            .unwrap();
            let by_angle =
                crossing_time(date, 48.21, 16.37, 0.0, -12.0, Direction::Rising).unwrap();
            assert_eq!(by_horizon, by_angle);
        }

        #[test]
        fn test_nautical_wrappers() {
            let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
            let dawn = nautical_dawn(date, 40.7128, -74.0060, 0.0).unwrap();
            let dusk = nautical_dusk(date, 40.7128, -74.0060, 0.0).unwrap();

            let dawn = dawn.expect("winter dawn in New York");
            let dusk = dusk.expect("winter dusk in New York");
            assert!(dawn < dusk);
        }

        #[test]
        fn test_utc_wrap_and_exact_elevation_shift() {
            let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
            let dusk = nautical_dusk(date, 40.7128, -74.0060, 0.0)
                .unwrap()
                .expect("dusk should occur");

            // Summer New York nautical dusk is shortly after midnight UTC
            assert_eq!(dusk.date_naive(), date);
            assert!(dusk.hour() < 6);

            let dawn_sea = nautical_dawn(date, 40.7128, -74.0060, 0.0)
                .unwrap()
                .expect("dawn should occur");
            // A hypothetical observer 3 km up sees dawn 3 minutes earlier
            let dawn_high = nautical_dawn(date, 40.7128, -74.0060, 3000.0)
                .unwrap()
                .expect("dawn should occur");
            assert_eq!(dawn_sea - Duration::seconds(180), dawn_high);
        }
    }
}
