//! Pluggable source of sun positions and day windows.
//!
//! The sampler only needs two answers for a location: where the sun stands at
//! an instant, and when it rises and sets on a day. [`SunPositionProvider`]
//! captures exactly that, so callers can swap in a higher-precision ephemeris
//! or canned values in tests. [`Grena3Provider`] is the built-in one.

use crate::position::solar_position;
use crate::sunrise::sunrise_sunset;
use crate::time::DeltaT;
use crate::{DayWindow, Horizon, Result, SunPosition};
use chrono::{DateTime, TimeZone};
use log::trace;

/// Computes the sun's position and daily rise/set window for a location.
///
/// Latitude and longitude are in degrees. Implementations validate them and
/// report invalid input as an error.
pub trait SunPositionProvider {
    /// Sun position at `instant`.
    ///
    /// # Errors
    /// Implementation-defined, typically invalid coordinates.
    fn position<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<SunPosition>;

    /// Sunrise, transit and sunset for the local calendar day of `date`.
    ///
    /// # Errors
    /// Implementation-defined, typically invalid coordinates.
    fn day_window<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<DayWindow<DateTime<Tz>>>;
}

impl<P: SunPositionProvider + ?Sized> SunPositionProvider for &P {
    fn position<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<SunPosition> {
        (**self).position(instant, latitude, longitude)
    }

    fn day_window<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<DayWindow<DateTime<Tz>>> {
        (**self).day_window(date, latitude, longitude)
    }
}

/// Provider backed by Grena's algorithm no. 3 and the SPA sunrise scheme.
///
/// # Example
/// ```
/// use solar_exposure::{Grena3Provider, Horizon, SunPositionProvider};
/// use chrono::{DateTime, FixedOffset};
///
/// let provider = Grena3Provider::new().with_horizon(Horizon::CivilTwilight);
/// let date = "2023-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let window = provider.day_window(&date, 48.21, 16.37).unwrap();
/// assert!(window.is_regular_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grena3Provider {
    /// Fixed ΔT in seconds; estimated per date when absent
    delta_t: Option<f64>,
    horizon: Horizon,
}

impl Grena3Provider {
    /// Provider estimating ΔT from each date, standard sunrise horizon.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delta_t: None,
            horizon: Horizon::SunriseSunset,
        }
    }

    /// Uses a fixed ΔT (seconds) instead of the estimate.
    #[must_use]
    pub const fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = Some(delta_t);
        self
    }

    /// Uses `horizon` to define sunrise and sunset.
    #[must_use]
    pub const fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// The configured horizon.
    #[must_use]
    pub const fn horizon(&self) -> Horizon {
        self.horizon
    }

    fn delta_t_for<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Result<f64> {
        if let Some(delta_t) = self.delta_t {
            return Ok(delta_t);
        }
        let estimated = DeltaT::estimate_from_date_like(datetime)?;
        trace!("estimated ΔT {estimated:.2}s for {}", datetime.naive_local().date());
        Ok(estimated)
    }
}

impl SunPositionProvider for Grena3Provider {
    fn position<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<SunPosition> {
        let delta_t = self.delta_t_for(instant)?;
        solar_position(instant.clone(), latitude, longitude, delta_t)
    }

    fn day_window<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<DayWindow<DateTime<Tz>>> {
        let delta_t = self.delta_t_for(date)?;
        sunrise_sunset(date, latitude, longitude, delta_t, self.horizon)
    }
}
