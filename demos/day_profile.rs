//! Prints the sun and per-face exposure of a structure over one day.
//!
//! Usage: `cargo run --example day_profile -- [LAT LON DATE ROTATION INTERVAL]`
//!
//! DATE is an RFC 3339 timestamp whose offset selects the local day, for example
//! `2026-06-21T00:00:00+02:00`. Set `RUST_LOG=debug` (or `trace`) to see what the
//! sampler does.

use chrono::{DateTime, FixedOffset};
use solar_exposure::{ClearSkyModel, Face, Grena3Provider, Structure, sample_day};
use std::env;
use std::error::Error;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    args.get(index)
        .map_or(Ok(default), |value| value.parse().map_err(Into::into))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let latitude: f64 = arg(&args, 0, 48.21)?;
    let longitude: f64 = arg(&args, 1, 16.37)?;
    let date: DateTime<FixedOffset> = match args.get(2) {
        Some(value) => DateTime::parse_from_rfc3339(value)?,
        None => DateTime::parse_from_rfc3339("2026-06-21T00:00:00+02:00")?,
    };
    let rotation: f64 = arg(&args, 3, 0.0)?;
    let interval: u32 = arg(&args, 4, 30)?;

    let structure = Structure::new(rotation)?;
    let day = sample_day(&date, latitude, longitude, interval, &Grena3Provider::new())?;
    let table = day.exposure(&structure, &ClearSkyModel::standard());

    println!(
        "{} at ({latitude:.4}, {longitude:.4}), structure rotated {rotation:+.1}°",
        date.date_naive()
    );
    match day.window().sunrise().zip(day.window().sunset()) {
        Some((sunrise, sunset)) => println!(
            "sunrise {}  transit {}  sunset {}",
            sunrise.format("%H:%M"),
            day.window().transit().format("%H:%M"),
            sunset.format("%H:%M")
        ),
        None => println!(
            "{}, transit {}",
            day.window().kind(),
            day.window().transit().format("%H:%M")
        ),
    }
    println!();

    print!("{:>5} {:>8} {:>8}", "time", "azimuth", "altitude");
    for face in Face::ALL {
        print!(" {:>6}", face.name());
    }
    println!();

    for (index, sample) in day.samples().iter().enumerate() {
        let position = sample.position();
        print!(
            "{:>5} {:>7.1}° {:>7.1}°",
            sample.instant().format("%H:%M"),
            position.azimuth_degrees(),
            position.altitude_degrees()
        );
        for value in table.row(index).unwrap_or_default() {
            print!(" {value:>6.3}");
        }
        println!();
    }

    Ok(())
}
