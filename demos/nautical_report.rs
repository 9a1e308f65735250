//! Five-day nautical twilight report for a handful of streetlight deployments.

use chrono::NaiveDate;
use twilight_times::report::{DEFAULT_REPORT_DAYS, twilight_report};

#[derive(Debug)]
struct Site {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sites = [
        Site {
            name: "New York, USA",
            latitude: 40.7128,
            longitude: -74.0060,
            elevation: 10.0,
        },
        Site {
            name: "Vienna, Austria",
            latitude: 48.21,
            longitude: 16.37,
            elevation: 190.0,
        },
        Site {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            elevation: 0.0,
        },
    ];

    // Fixed start date; a scheduler would inject its own current date here.
    let start = NaiveDate::from_ymd_opt(2025, 6, 18).ok_or("invalid date")?;

    for site in &sites {
        println!(
            "{} ({:.4}, {:.4}, {:.0} m)",
            site.name, site.latitude, site.longitude, site.elevation
        );

        let report = twilight_report(
            start,
            site.latitude,
            site.longitude,
            site.elevation,
            DEFAULT_REPORT_DAYS,
        )?;

        for day in &report {
            println!("  {day}");
        }
        println!();
    }

    Ok(())
}
