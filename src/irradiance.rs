//! Clear-sky irradiance on an oriented surface.
//!
//! The intensity of direct sunlight on a surface is the product of two factors:
//!
//! 1. a geometric factor, the cosine of the angle between the sun direction and
//!    the surface's outward normal, clamped to [0, 1] so the sun behind the
//!    surface contributes nothing;
//! 2. an atmospheric transmittance that decays exponentially with the
//!    Kasten–Young relative air mass.
//!
//! The transmittance law `τ = τ0 · exp(−k · (AM − 1))` is an empirical
//! clear-sky fit, not a radiative-transfer solution. Its two constants live in
//! [`ClearSkyModel`] so they can be tuned and audited.
//!
//! The functions here are total: they never fail, return exactly zero when the
//! sun is at or below the horizon, and propagate NaN inputs as NaN.

#![allow(clippy::unreadable_literal)]

use crate::math::{dot, exp, powf, radians_to_degrees, sin};
use crate::{Error, Result, SunPosition, SurfaceOrientation};

/// Coefficients of the Kasten & Young (1989) air mass formula.
const KASTEN_YOUNG_A: f64 = 0.50572;
const KASTEN_YOUNG_B: f64 = 6.07995;
const KASTEN_YOUNG_C: f64 = -1.6364;

/// Relative optical air mass for a sun at `altitude` radians.
///
/// Returns `f64::INFINITY` at or below the horizon; 1.0 (to within the fit's
/// precision) at the zenith.
///
/// # Example
/// ```
/// # use solar_exposure::irradiance::air_mass;
/// use core::f64::consts::FRAC_PI_2;
///
/// assert!((air_mass(FRAC_PI_2) - 1.0).abs() < 1e-3);
/// assert_eq!(air_mass(0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn air_mass(altitude: f64) -> f64 {
    if altitude <= 0.0 {
        return f64::INFINITY;
    }

    let altitude_degrees = radians_to_degrees(altitude);
    1.0 / (sin(altitude) + KASTEN_YOUNG_A * powf(altitude_degrees + KASTEN_YOUNG_B, KASTEN_YOUNG_C))
}

/// Cosine of the incidence angle between the sun and a surface normal,
/// clamped to [0, 1].
///
/// Zero when the sun is behind the surface. The upper bound absorbs rounding
/// in the dot product of two unit vectors. NaN inputs yield NaN.
#[must_use]
pub fn geometric_factor(sun: &SunPosition, surface: &SurfaceOrientation) -> f64 {
    let cosine = dot(&sun.direction(), &surface.normal());
    if cosine < 0.0 {
        0.0
    } else if cosine > 1.0 {
        1.0
    } else {
        cosine
    }
}

/// Normalized clear-sky intensity in [0, 1] with the standard constants.
///
/// See [`ClearSkyModel::intensity`].
#[must_use]
pub fn intensity(sun: &SunPosition, surface: &SurfaceOrientation) -> f64 {
    ClearSkyModel::standard().intensity(sun, surface)
}

/// Constants of the clear-sky attenuation law.
///
/// # Example
/// ```
/// # use solar_exposure::irradiance::ClearSkyModel;
/// let standard = ClearSkyModel::standard();
/// assert_eq!(standard.zenith_transmittance(), 0.8);
/// assert_eq!(standard.extinction(), 0.08);
///
/// // A hazier sky
/// let hazy = ClearSkyModel::new(0.7, 0.12).unwrap();
/// assert!(hazy.transmittance(2.0) < standard.transmittance(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearSkyModel {
    /// Fraction of direct light reaching the ground with the sun at the zenith
    zenith_transmittance: f64,
    /// Decay rate per unit air mass beyond one
    extinction: f64,
}

impl Default for ClearSkyModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl ClearSkyModel {
    /// Creates a model with custom constants.
    ///
    /// # Errors
    /// Returns `InvalidTransmittance` unless `0 < zenith_transmittance <= 1`, and
    /// `InvalidExtinction` unless `extinction` is finite and non-negative.
    pub fn new(zenith_transmittance: f64, extinction: f64) -> Result<Self> {
        if !(zenith_transmittance > 0.0 && zenith_transmittance <= 1.0) {
            return Err(Error::invalid_transmittance(zenith_transmittance));
        }
        if !extinction.is_finite() || extinction < 0.0 {
            return Err(Error::invalid_extinction(extinction));
        }
        Ok(Self {
            zenith_transmittance,
            extinction,
        })
    }

    /// The empirical constants τ0 = 0.8 and k = 0.08.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            zenith_transmittance: 0.8,
            extinction: 0.08,
        }
    }

    /// Zenith transmittance τ0.
    #[must_use]
    pub const fn zenith_transmittance(&self) -> f64 {
        self.zenith_transmittance
    }

    /// Extinction rate k per unit air mass.
    #[must_use]
    pub const fn extinction(&self) -> f64 {
        self.extinction
    }

    /// Fraction of direct light surviving `air_mass`, clamped to [0, 1].
    ///
    /// Infinite air mass (sun below the horizon) transmits nothing.
    #[must_use]
    pub fn transmittance(&self, air_mass: f64) -> f64 {
        if air_mass.is_infinite() {
            return 0.0;
        }

        (self.zenith_transmittance * exp(-self.extinction * (air_mass - 1.0))).clamp(0.0, 1.0)
    }

    /// Normalized intensity of direct sunlight on `surface`, in [0, 1].
    ///
    /// # Example
    /// ```
    /// use solar_exposure::{irradiance::ClearSkyModel, SunPosition, SurfaceOrientation};
    /// use core::f64::consts::{FRAC_PI_2, PI};
    ///
    /// let model = ClearSkyModel::standard();
    /// let overhead = SunPosition::new(0.0, FRAC_PI_2);
    /// let roof = SurfaceOrientation::roof();
    /// assert!((model.intensity(&overhead, &roof) - 0.8).abs() < 1e-3);
    ///
    /// // A south wall gets nothing from a sun standing in the north.
    /// let north_sun = SunPosition::new(0.0, 0.5);
    /// assert_eq!(model.intensity(&north_sun, &SurfaceOrientation::wall(PI)), 0.0);
    /// ```
    #[must_use]
    pub fn intensity(&self, sun: &SunPosition, surface: &SurfaceOrientation) -> f64 {
        if sun.altitude() <= 0.0 {
            return 0.0;
        }

        geometric_factor(sun, surface) * self.transmittance(air_mass(sun.altitude()))
    }
}
