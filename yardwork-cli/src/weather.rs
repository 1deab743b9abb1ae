use anyhow::Result;
use inquire::Text;

use yardwork_core::weather::{CityRecord, SessionAverage, TempStats, is_close, parse_sample};

use crate::report;

/// Cities collected unconditionally before the tracker starts asking
/// whether to continue.
const MIN_CITIES: usize = 5;

/// Interactive weather tracker flow.
///
/// The running aggregate is an explicit accumulator threaded through the
/// loop rather than process-wide state.
pub fn run() -> Result<()> {
    println!("Weather Data");
    println!();

    let mut session = SessionAverage::default();

    loop {
        if session.cities() >= MIN_CITIES && !another_city()? {
            break;
        }

        let city = collect_city()?;
        session.absorb(city.temps.average());

        println!();
        println!("{}", report::city_report(&city, session.overall()));
        println!();
    }

    println!();
    println!("{}", report::overall_report(session.overall()));

    Ok(())
}

/// Anything other than a y counts as no, so this stays a free-text prompt
/// rather than a `Confirm`.
fn another_city() -> Result<bool> {
    let answer = Text::new("Add another city? (y/n)").prompt()?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn collect_city() -> Result<CityRecord> {
    let name = Text::new("Enter city name").prompt()?;

    println!();
    println!("Note: Temperatures should be recorded in Fahrenheit.");

    let mut temps = TempStats::default();
    loop {
        let raw = Text::new("Enter a temperature (type 'close' to exit)").prompt()?;
        if is_close(&raw) {
            break;
        }
        temps.record(parse_sample(&raw));
    }

    Ok(CityRecord { name, temps })
}
