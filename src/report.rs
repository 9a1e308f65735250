//! Multi-day nautical twilight reports.
//!
//! Produces one entry per calendar day with formatted nautical dawn and dusk
//! times, the shape consumed by lighting-schedule tooling. The start date is
//! always supplied by the caller so report generation stays deterministic;
//! reading a wall clock is the caller's business.

use crate::almanac::{nautical_dawn, nautical_dusk};
use crate::error::{check_coordinates, check_elevation};
use crate::{Error, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};
use core::fmt;

/// Default number of days covered by a twilight report.
pub const DEFAULT_REPORT_DAYS: u32 = 5;

/// Literal emitted when a crossing does not occur on a given day.
const NOT_OCCURRING: &str = "Not occurring";

/// Nautical dawn and dusk for a single calendar day.
///
/// A `None` event means the sun never crosses 12° below the horizon that day
/// at that location (polar day or polar night); it formats as the literal
/// `Not occurring`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilightDay {
    date: NaiveDate,
    dawn: Option<DateTime<Utc>>,
    dusk: Option<DateTime<Utc>>,
}

impl TwilightDay {
    /// Gets the calendar date this entry describes.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the nautical dawn instant, if it occurs.
    #[must_use]
    pub const fn dawn(&self) -> Option<DateTime<Utc>> {
        self.dawn
    }

    /// Gets the nautical dusk instant, if it occurs.
    #[must_use]
    pub const fn dusk(&self) -> Option<DateTime<Utc>> {
        self.dusk
    }

    /// Formats the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Formats the dawn time as `HH:MM:SS` UTC, or `Not occurring`.
    #[must_use]
    pub fn dawn_string(&self) -> String {
        format_event(self.dawn)
    }

    /// Formats the dusk time as `HH:MM:SS` UTC, or `Not occurring`.
    #[must_use]
    pub fn dusk_string(&self) -> String {
        format_event(self.dusk)
    }
}

impl fmt::Display for TwilightDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  nautical dawn {}  nautical dusk {}",
            self.date_string(),
            self.dawn_string(),
            self.dusk_string()
        )
    }
}

fn format_event(instant: Option<DateTime<Utc>>) -> String {
    instant.map_or_else(
        || NOT_OCCURRING.to_string(),
        |t| t.format("%H:%M:%S").to_string(),
    )
}

/// Builds a nautical twilight report for `days` consecutive calendar days.
///
/// Entries are ordered by increasing date starting at `start`; each day is
/// computed independently. `days = 0` yields an empty report, not an error.
///
/// # Arguments
/// * `start` - First calendar date of the report
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `elevation` - Observer elevation in meters (correction applied only above 0)
/// * `days` - Number of consecutive days to cover
///
/// # Errors
/// Returns an error for out-of-range coordinates, a non-finite elevation, or
/// a date range that overflows the supported calendar.
///
/// # Example
/// ```rust
/// use twilight_times::report::{twilight_report, DEFAULT_REPORT_DAYS};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let report = twilight_report(start, 40.7128, -74.0060, 0.0, DEFAULT_REPORT_DAYS).unwrap();
///
/// assert_eq!(report.len(), 5);
/// for day in &report {
///     println!("{day}");
/// }
/// ```
pub fn twilight_report(
    start: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    days: u32,
) -> Result<Vec<TwilightDay>> {
    check_coordinates(latitude, longitude)?;
    check_elevation(elevation)?;

    let mut report = Vec::with_capacity(days as usize);
    for i in 0..days {
        let date = start
            .checked_add_days(Days::new(u64::from(i)))
            .ok_or_else(|| Error::invalid_date("report range exceeds the supported calendar"))?;

        report.push(TwilightDay {
            date,
            dawn: nautical_dawn(date, latitude, longitude, elevation)?,
            dusk: nautical_dusk(date, latitude, longitude, elevation)?,
        });
    }

    Ok(report)
}
