//! Sunrise, solar transit and sunset.
//!
//! Uses the interpolation scheme of NREL SPA Appendix A.2 (Reda & Andreas,
//! 2003), fed with right ascension and declination from the same Grena model
//! that drives [`crate::position`]. The resulting times agree with almanac
//! values to within a minute or so at temperate latitudes.
//!
//! The A.2 scheme works from a base instant: sidereal time is taken at the
//! base, the sun's coordinates one day before, at and after it, and every
//! event is returned as a fraction of a day past the base. The numeric API uses
//! 0 UT as base; the chrono API uses local midnight so that events land on the
//! requested local calendar day.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::error::check_coordinates;
use crate::math::{
    acos, asin, cos, degrees_to_radians, floor, mul_add, normalize_degrees_0_to_360,
    normalize_to_unit_range, radians_to_degrees, sin,
};
use crate::position::{EclipticState, grena_t, sidereal_angle};
use crate::time::JulianDate;
use crate::{DayWindow, Horizon, HoursUtc, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Duration, TimeZone};

/// Sidereal degrees per solar day.
const SIDEREAL_RATE: f64 = 360.985647;

/// Sunrise, transit and sunset for a calendar day, as hours since 0 UT.
///
/// # Errors
/// Returns error for invalid date components or coordinates.
///
/// # Example
/// ```
/// use solar_exposure::{sunrise, Horizon};
///
/// let window = sunrise::sunrise_sunset_utc(
///     2023, 3, 20,
///     0.0, 0.0,     // on the equator at Greenwich
///     69.0,         // deltaT (seconds)
///     Horizon::SunriseSunset,
/// ).unwrap();
///
/// let sunrise = window.sunrise().unwrap().hours();
/// let sunset = window.sunset().unwrap().hours();
/// assert!((sunrise - 6.07).abs() < 0.1);
/// assert!((sunset - 18.18).abs() < 0.1);
/// ```
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    horizon: Horizon,
) -> Result<DayWindow<HoursUtc>> {
    check_coordinates(latitude, longitude)?;

    let jd_midnight = JulianDate::from_utc(year, month, day, 0, 0, 0.0, 0.0)?;
    let fractions = day_fractions(
        jd_midnight,
        latitude,
        longitude,
        delta_t,
        horizon.elevation_angle(),
    );

    Ok(fractions.map(|fraction| HoursUtc::from_hours(fraction * 24.0)))
}

/// Sunrise, transit and sunset for the local calendar day of `date`.
///
/// Only the date part of `date` matters. Times are returned in `date`'s time
/// zone. On polar days and nights only the transit is reported.
///
/// # Errors
/// Returns error for invalid coordinates or a calendar day the time zone
/// skips entirely.
///
/// # Example
/// ```rust
/// use solar_exposure::{sunrise, Horizon};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let date = "2023-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let window = sunrise::sunrise_sunset(&date, 48.21, 16.37, 69.0, Horizon::SunriseSunset).unwrap();
///
/// // Vienna, summer solstice: sunrise just before 5 am, sunset just before 9 pm.
/// assert_eq!(window.sunrise().unwrap().hour(), 4);
/// assert_eq!(window.sunset().unwrap().hour(), 20);
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    horizon: Horizon,
) -> Result<DayWindow<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;

    let day_start = crate::time::start_of_local_day(date)?;
    let base = JulianDate::from_datetime(&day_start, 0.0)?;
    let fractions = day_fractions(
        base,
        latitude,
        longitude,
        delta_t,
        horizon.elevation_angle(),
    );

    Ok(fractions.map(|fraction| add_fraction_of_day(&day_start, fraction)))
}

#[cfg(feature = "chrono")]
fn add_fraction_of_day<Tz: TimeZone>(day_start: &DateTime<Tz>, fraction: f64) -> DateTime<Tz> {
    const MS_PER_DAY: f64 = 86_400_000.0;
    day_start.clone() + Duration::milliseconds((MS_PER_DAY * fraction) as i64)
}

#[derive(Debug, Clone, Copy)]
struct AlphaDelta {
    /// Right ascension, degrees
    alpha: f64,
    /// Declination, degrees
    delta: f64,
}

impl AlphaDelta {
    fn at(t: f64) -> Self {
        let state = EclipticState::at(t);
        Self {
            alpha: normalize_degrees_0_to_360(radians_to_degrees(state.alpha)),
            delta: radians_to_degrees(state.delta),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PolarType {
    AllDay,
    AllNight,
}

/// Events of the day starting at `base`, as fractions of a day past `base`.
fn day_fractions(
    base: JulianDate,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    elevation_angle: f64,
) -> DayWindow<f64> {
    let t0 = grena_t(base);

    // A.2.1. Sidereal time at the base instant
    let nu_degrees = normalize_degrees_0_to_360(radians_to_degrees(sidereal_angle(t0)));

    // A.2.2. Sun coordinates on the previous, same and next day
    let alpha_deltas = [
        AlphaDelta::at(grena_t(base.add_days(-1.0))),
        AlphaDelta::at(t0),
        AlphaDelta::at(grena_t(base.add_days(1.0))),
    ];

    // A.2.3. Approximate transit
    let m0 = (alpha_deltas[1].alpha - longitude - nu_degrees) / 360.0;

    let polar_type = check_polar_conditions(latitude, elevation_angle, alpha_deltas[1].delta);
    let m_values = approximate_times(m0, latitude, elevation_angle, alpha_deltas[1].delta);
    let (transit, sunrise, sunset) = final_time_fractions(
        m_values,
        nu_degrees,
        delta_t,
        latitude,
        longitude,
        elevation_angle,
        &alpha_deltas,
    );

    match polar_type {
        Some(PolarType::AllDay) => DayWindow::AllDay { transit },
        Some(PolarType::AllNight) => DayWindow::AllNight { transit },
        None => {
            // Keep sunrise < transit < sunset when an event wraps past the base day.
            let sunrise = if sunrise > transit { sunrise - 1.0 } else { sunrise };
            let sunset = if sunset < transit { sunset + 1.0 } else { sunset };
            DayWindow::RegularDay {
                sunrise,
                transit,
                sunset,
            }
        }
    }
}

/// Cosine of the local hour angle at which the sun crosses `elevation_angle`.
fn hour_angle_cosine(latitude: f64, elevation_angle: f64, delta: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta_rad = degrees_to_radians(delta);
    let elevation_rad = degrees_to_radians(elevation_angle);

    mul_add(sin(phi), -sin(delta_rad), sin(elevation_rad)) / (cos(phi) * cos(delta_rad))
}

fn check_polar_conditions(latitude: f64, elevation_angle: f64, delta: f64) -> Option<PolarType> {
    let cos_h0 = hour_angle_cosine(latitude, elevation_angle, delta);
    if cos_h0 < -1.0 {
        Some(PolarType::AllDay)
    } else if cos_h0 > 1.0 {
        Some(PolarType::AllNight)
    } else {
        None
    }
}

/// A.2.5-6. Approximate transit, sunrise and sunset fractions.
fn approximate_times(m0: f64, latitude: f64, elevation_angle: f64, delta: f64) -> [f64; 3] {
    let h0 = acos(hour_angle_cosine(latitude, elevation_angle, delta));
    // NaN on polar days; only the transit is used then
    let h0_degrees = radians_to_degrees(h0).min(180.0);

    [
        normalize_to_unit_range(m0),
        normalize_to_unit_range(m0 - h0_degrees / 360.0),
        normalize_to_unit_range(m0 + h0_degrees / 360.0),
    ]
}

/// A.2.8-15. Corrected transit, sunrise and sunset fractions.
fn final_time_fractions(
    m_values: [f64; 3],
    nu_degrees: f64,
    delta_t: f64,
    latitude: f64,
    longitude: f64,
    elevation_angle: f64,
    alpha_deltas: &[AlphaDelta; 3],
) -> (f64, f64, f64) {
    let phi = degrees_to_radians(latitude);

    let mut h_prime = [0.0; 3];
    let mut altitude = [0.0; 3];
    let mut declination = [0.0; 3];
    for i in 0..3 {
        // A.2.8-9. Sidereal time and TT offset of each event
        let nu = mul_add(SIDEREAL_RATE, m_values[i], nu_degrees);
        let n = m_values[i] + delta_t / 86400.0;

        // A.2.10-11. Interpolated coordinates and local hour angle
        let interpolated = interpolate_alpha_delta(alpha_deltas, n);
        h_prime[i] = limit_h_prime(nu + longitude - interpolated.alpha);
        declination[i] = interpolated.delta;

        // A.2.12. Sun altitude at the approximate event time
        let delta_rad = degrees_to_radians(interpolated.delta);
        altitude[i] = radians_to_degrees(asin(mul_add(
            sin(phi),
            sin(delta_rad),
            cos(phi) * cos(delta_rad) * cos(degrees_to_radians(h_prime[i])),
        )));
    }

    let correction = |i: usize| {
        (altitude[i] - elevation_angle)
            / (360.0
                * cos(degrees_to_radians(declination[i]))
                * cos(phi)
                * sin(degrees_to_radians(h_prime[i])))
    };

    // A.2.13-15.
    let transit = m_values[0] - h_prime[0] / 360.0;
    let sunrise = m_values[1] + correction(1);
    let sunset = m_values[2] + correction(2);

    (transit, sunrise, sunset)
}

/// A.2.10. Three-point interpolation of the sun coordinates at day fraction `n`.
fn interpolate_alpha_delta(alpha_deltas: &[AlphaDelta; 3], n: f64) -> AlphaDelta {
    let a = limit_if_necessary(alpha_deltas[1].alpha - alpha_deltas[0].alpha);
    let a_prime = limit_if_necessary(alpha_deltas[1].delta - alpha_deltas[0].delta);

    let b = limit_if_necessary(alpha_deltas[2].alpha - alpha_deltas[1].alpha);
    let b_prime = limit_if_necessary(alpha_deltas[2].delta - alpha_deltas[1].delta);

    let c = b - a;
    let c_prime = b_prime - a_prime;

    AlphaDelta {
        alpha: alpha_deltas[1].alpha + (n * mul_add(c, n, a + b)) / 2.0,
        delta: alpha_deltas[1].delta + (n * mul_add(c_prime, n, a_prime + b_prime)) / 2.0,
    }
}

/// Wraps day-to-day differences that crossed the 0°/360° seam.
fn limit_if_necessary(val: f64) -> f64 {
    if val.abs() > 2.0 {
        normalize_to_unit_range(val)
    } else {
        val
    }
}

/// Local hour angle limited to [-180°, 180°].
fn limit_h_prime(h_prime: f64) -> f64 {
    let normalized = h_prime / 360.0;
    let limited = 360.0 * (normalized - floor(normalized));

    if limited > 180.0 {
        limited - 360.0
    } else {
        limited
    }
}
