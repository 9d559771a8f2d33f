//! Sun position from Grena's algorithm no. 3.
//!
//! Grena, 'Five new algorithms for the computation of sun position from 2010
//! to 2110', Solar Energy 86 (2012) pp. 1323-1337. Maximum error is about
//! 0.01° inside 2010–2110 and grows slowly outside it; plenty for shading a
//! building, which is all this crate needs.
//!
//! The ecliptic part of the model is shared with the sunrise/sunset code.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{PI, TAU, asin, atan2, cos, degrees_to_radians, sin, sqrt};
use crate::time::JulianDate;
use crate::{Result, SunPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Julian date at which Grena's time variable `t` is zero (2060-01-01 0h UT).
const GRENA_EPOCH_JD: f64 = 2_473_459.5;

/// Days per second, as used by Grena for the ΔT correction.
const DAYS_PER_SECOND: f64 = 1.1574e-5;

/// Sun position for an instant and location.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `delta_t` - ΔT in seconds (difference between TT and UT1)
///
/// # Errors
/// Returns error for invalid coordinates.
///
/// # Example
/// ```rust
/// use solar_exposure::position;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2023-06-21T13:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let sun = position::solar_position(datetime, 48.21, 16.37, 69.0).unwrap();
///
/// // Near solar noon in Vienna on the solstice: high in the southern sky.
/// assert!(sun.altitude_degrees() > 60.0);
/// assert!(sun.azimuth_degrees() > 150.0 && sun.azimuth_degrees() < 210.0);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
) -> Result<SunPosition> {
    let jd = JulianDate::from_datetime(&datetime, delta_t)?;
    solar_position_from_julian(jd, latitude, longitude)
}

/// Sun position from a Julian date (which carries ΔT).
///
/// # Errors
/// Returns error for invalid coordinates.
pub fn solar_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    check_coordinates(latitude, longitude)?;

    let t = grena_t(jd);
    let ecliptic = EclipticState::at(t + DAYS_PER_SECOND * jd.delta_t());

    // Hour angle, wrapped to [-π, π)
    let mut h = sidereal_angle(t) + degrees_to_radians(longitude) - ecliptic.alpha;
    h = ((h + PI) % TAU) - PI;
    if h < -PI {
        h += TAU;
    }

    let s_phi = sin(degrees_to_radians(latitude));
    let c_phi = sqrt(1.0 - s_phi * s_phi);
    let s_delta = sin(ecliptic.delta);
    let c_delta = sqrt(1.0 - s_delta * s_delta);
    let s_h = sin(h);
    let c_h = cos(h);

    // Topocentric elevation including the parallax term
    let s_epsilon0 = s_phi * s_delta + c_phi * c_delta * c_h;
    let altitude = asin(s_epsilon0) - 4.26e-5 * sqrt(1.0 - s_epsilon0 * s_epsilon0);
    let gamma = atan2(s_h, c_h * s_phi - s_delta * c_phi / c_delta);

    Ok(SunPosition::new(gamma + PI, altitude))
}

/// Apparent right ascension and declination of the sun, radians.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EclipticState {
    /// Right ascension in [0, 2π)
    pub(crate) alpha: f64,
    /// Declination
    pub(crate) delta: f64,
}

impl EclipticState {
    /// Evaluates Grena's solar longitude and obliquity at `t_e` (TT days from
    /// the Grena epoch).
    pub(crate) fn at(t_e: f64) -> Self {
        let omega = 0.0172019715 * t_e;

        let lambda = -1.388803
            + 1.720279216e-2 * t_e
            + 3.3366e-2 * sin(omega - 0.06172)
            + 3.53e-4 * sin(2.0 * omega - 0.1163);
        let epsilon = 4.089567e-1 - 6.19e-9 * t_e;

        let s_lambda = sin(lambda);
        let c_lambda = cos(lambda);
        let s_epsilon = sin(epsilon);
        let c_epsilon = sqrt(1.0 - s_epsilon * s_epsilon);

        let mut alpha = atan2(s_lambda * c_epsilon, c_lambda);
        if alpha < 0.0 {
            alpha += TAU;
        }

        Self {
            alpha,
            delta: asin(s_lambda * s_epsilon),
        }
    }
}

/// Grena's time variable: UT days since the algorithm epoch.
pub(crate) fn grena_t(jd: JulianDate) -> f64 {
    jd.julian_date() - GRENA_EPOCH_JD
}

/// Greenwich sidereal angle in radians (unnormalized) at UT day `t`.
pub(crate) fn sidereal_angle(t: f64) -> f64 {
    1.7528311 + 6.300388099 * t
}
