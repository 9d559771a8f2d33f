//! Core data types: sun positions, surface orientations and day windows.

use crate::math::{
    Enu, PI, enu_unit_vector, floor, normalize_radians_0_to_tau, radians_to_degrees,
};
use crate::{Error, Result};

/// Predefined elevation angles for sunrise/sunset calculations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    #[default]
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle in degrees
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83337,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Position of the sun as seen by an observer on the ground.
///
/// Both angles are in radians:
/// - azimuth: 0 = North, increasing toward East, normalized to [0, 2π)
/// - altitude: 0 = horizon, π/2 = zenith, negative below the horizon
///
/// # Example
/// ```
/// # use solar_exposure::SunPosition;
/// use core::f64::consts::{FRAC_PI_4, PI};
///
/// let position = SunPosition::new(-PI / 2.0, FRAC_PI_4);
/// assert!((position.azimuth() - 1.5 * PI).abs() < 1e-12);
/// assert!((position.altitude_degrees() - 45.0).abs() < 1e-12);
/// assert!(position.is_sun_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    azimuth: f64,
    altitude: f64,
}

impl SunPosition {
    /// Creates a sun position from azimuth and altitude in radians.
    ///
    /// The azimuth is normalized; the altitude is stored as given.
    #[must_use]
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Self {
            azimuth: normalize_radians_0_to_tau(azimuth),
            altitude,
        }
    }

    /// Azimuth in radians (0 = North, increasing toward East).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Azimuth in degrees [0, 360).
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Altitude in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Zenith angle in radians (π/2 − altitude).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        PI / 2.0 - self.altitude
    }

    /// Checks if the sun is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }

    /// Unit vector pointing from the observer toward the sun, East–North–Up.
    #[must_use]
    pub fn direction(&self) -> Enu {
        enu_unit_vector(self.azimuth, self.altitude)
    }
}

/// Orientation of a flat surface, described by its outward normal.
///
/// - azimuth: compass direction the surface faces, radians from North toward East
/// - tilt: angle of the normal above the horizontal plane, 0 = vertical wall,
///   π/2 = horizontal roof facing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOrientation {
    azimuth: f64,
    tilt: f64,
}

impl SurfaceOrientation {
    /// Creates an orientation from azimuth and tilt in radians.
    #[must_use]
    pub const fn new(azimuth: f64, tilt: f64) -> Self {
        Self { azimuth, tilt }
    }

    /// A vertical wall facing `azimuth`.
    #[must_use]
    pub const fn wall(azimuth: f64) -> Self {
        Self::new(azimuth, 0.0)
    }

    /// A horizontal, upward-facing roof.
    #[must_use]
    pub const fn roof() -> Self {
        Self::new(0.0, PI / 2.0)
    }

    /// Azimuth of the outward normal in radians.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Tilt of the outward normal in radians.
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Outward unit normal, East–North–Up.
    #[must_use]
    pub fn normal(&self) -> Enu {
        enu_unit_vector(self.azimuth, self.tilt)
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Used for sunrise/sunset times without the chrono dependency.
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Example
    /// ```
    /// # use solar_exposure::HoursUtc;
    /// let (day_offset, hours) = HoursUtc::from_hours(-1.5).day_and_hours();
    /// assert_eq!(day_offset, -1);
    /// assert!((hours - 22.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset = floor(hours / 24.0);
        let mut normalized = hours - day_offset * 24.0;
        if normalized >= 24.0 {
            normalized -= 24.0;
            day_offset += 1.0;
        }

        let day_offset = day_offset.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
        (day_offset, normalized)
    }
}

/// Sunrise and sunset for one day at one location.
///
/// At high latitudes the sun may stay above or below the horizon all day; those
/// days carry only the transit (solar noon) and act as "always up"/"always down"
/// markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayWindow<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit
        transit: T,
    },
}

impl<T> DayWindow<T> {
    /// Gets the transit time (solar noon).
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Maps every contained time through `f`, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> DayWindow<U> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => DayWindow::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
            },
            Self::AllDay { transit } => DayWindow::AllDay {
                transit: f(transit),
            },
            Self::AllNight { transit } => DayWindow::AllNight {
                transit: f(transit),
            },
        }
    }

    /// Short label for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RegularDay { .. } => "regular day",
            Self::AllDay { .. } => "polar day",
            Self::AllNight { .. } => "polar night",
        }
    }
}
