//! Sun positions across one local calendar day.
//!
//! The day is sampled at a fixed stride of absolute time, from local midnight
//! up to and including the last instant at or before 23:59:59.999 local time.
//! Sampling ignores sunrise and sunset: night samples are kept so that every
//! day of a series has the same shape. On days with a daylight-saving
//! transition the stride stays constant, so such days carry fewer or more
//! samples than usual.

use crate::error::check_interval;
use crate::exposure::ExposureTable;
use crate::irradiance::ClearSkyModel;
use crate::provider::SunPositionProvider;
use crate::time::{end_of_local_day, start_of_local_day};
use crate::{DayWindow, Error, Result, Structure, SunPosition};
use chrono::{DateTime, Duration, TimeZone};
use log::{debug, trace};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Sun position at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SunSample<Tz: TimeZone> {
    instant: DateTime<Tz>,
    position: SunPosition,
}

impl<Tz: TimeZone> SunSample<Tz> {
    /// Creates a sample.
    pub const fn new(instant: DateTime<Tz>, position: SunPosition) -> Self {
        Self { instant, position }
    }

    /// The sampled instant, in the caller's time zone.
    pub const fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }

    /// Sun position at the instant.
    pub const fn position(&self) -> SunPosition {
        self.position
    }
}

/// All samples of a day together with its sunrise/sunset window.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledDay<Tz: TimeZone> {
    samples: Vec<SunSample<Tz>>,
    window: DayWindow<DateTime<Tz>>,
}

impl<Tz: TimeZone> SampledDay<Tz> {
    /// The samples, in increasing time order.
    #[must_use]
    pub fn samples(&self) -> &[SunSample<Tz>] {
        &self.samples
    }

    /// Sunrise, transit and sunset of the day, or a polar marker.
    pub const fn window(&self) -> &DayWindow<DateTime<Tz>> {
        &self.window
    }

    /// Sun positions in sample order.
    #[must_use]
    pub fn positions(&self) -> Vec<SunPosition> {
        self.samples.iter().map(SunSample::position).collect()
    }

    /// Samples with the sun above the horizon.
    pub fn daylight_samples(&self) -> impl Iterator<Item = &SunSample<Tz>> + '_ {
        self.samples
            .iter()
            .filter(|sample| sample.position.is_sun_up())
    }

    /// Irradiance of every face of `structure` at every sample.
    #[must_use]
    pub fn exposure(&self, structure: &Structure, model: &ClearSkyModel) -> ExposureTable {
        ExposureTable::compute(&self.positions(), &structure.surfaces(), model)
    }

    /// Splits into samples and window.
    #[must_use]
    pub fn into_parts(self) -> (Vec<SunSample<Tz>>, DayWindow<DateTime<Tz>>) {
        (self.samples, self.window)
    }
}

/// Samples the sun over the local calendar day of `date`.
///
/// Only the date part of `date` matters; results are in its time zone.
/// Coordinates are passed through to `provider` unchecked.
///
/// # Errors
/// Returns `InvalidInterval` for a zero interval, `InvalidDateTime` when the
/// time zone skips the whole calendar day, and any error from `provider`.
///
/// # Example
/// ```
/// use solar_exposure::{sample_day, Grena3Provider};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let date = "2023-06-21T15:30:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let day = sample_day(&date, 48.21, 16.37, 15, &Grena3Provider::new()).unwrap();
///
/// assert_eq!(day.samples().len(), 96);
/// assert_eq!(day.samples()[0].instant().hour(), 0);
/// assert!(day.window().is_regular_day());
/// ```
pub fn sample_day<Tz: TimeZone, P: SunPositionProvider + ?Sized>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    interval_minutes: u32,
    provider: &P,
) -> Result<SampledDay<Tz>> {
    check_interval(interval_minutes)?;

    let start = start_of_local_day(date)?;
    let end = end_of_local_day(date)?;
    let stride = Duration::minutes(i64::from(interval_minutes));

    let mut samples = Vec::with_capacity(MINUTES_PER_DAY.div_ceil(interval_minutes) as usize);
    let mut instant = start.clone();
    while instant <= end {
        let position = provider.position(&instant, latitude, longitude)?;
        trace!(
            "{}: azimuth {:.2}°, altitude {:.2}°",
            instant.naive_local(),
            position.azimuth_degrees(),
            position.altitude_degrees()
        );
        let next = instant
            .clone()
            .checked_add_signed(stride)
            .ok_or_else(|| Error::invalid_datetime("sample instant is out of range"))?;
        samples.push(SunSample::new(instant, position));
        instant = next;
    }

    let window = provider.day_window(&start, latitude, longitude)?;
    debug!(
        "sampled {} every {interval_minutes} min at ({latitude}, {longitude}): {} samples, {}",
        start.date_naive(),
        samples.len(),
        window.kind()
    );

    Ok(SampledDay { samples, window })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, Grena3Provider, Horizon};
    use chrono::{FixedOffset, Timelike, Utc};

    /// Sun due south at a fixed height, all day; for checking the sampler
    /// without an ephemeris.
    struct FixedSun {
        altitude: f64,
    }

    impl SunPositionProvider for FixedSun {
        fn position<Tz: TimeZone>(
            &self,
            _instant: &DateTime<Tz>,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<SunPosition> {
            Ok(SunPosition::new(core::f64::consts::PI, self.altitude))
        }

        fn day_window<Tz: TimeZone>(
            &self,
            date: &DateTime<Tz>,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<DayWindow<DateTime<Tz>>> {
            Ok(DayWindow::AllDay {
                transit: date.clone(),
            })
        }
    }

    struct Failing;

    impl SunPositionProvider for Failing {
        fn position<Tz: TimeZone>(
            &self,
            _instant: &DateTime<Tz>,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<SunPosition> {
            Err(Error::computation_error("no ephemeris"))
        }

        fn day_window<Tz: TimeZone>(
            &self,
            _date: &DateTime<Tz>,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<DayWindow<DateTime<Tz>>> {
            Err(Error::computation_error("no ephemeris"))
        }
    }

    #[test]
    fn test_stride_and_bounds() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
        let day = sample_day(&date, 0.0, 0.0, 7, &FixedSun { altitude: 0.5 }).unwrap();

        // 0:00, 0:07, ... 23:55
        assert_eq!(day.samples().len(), 206);
        let first = day.samples()[0].instant();
        assert_eq!((first.hour(), first.minute()), (0, 0));
        let last = day.samples().last().unwrap().instant();
        assert_eq!((last.hour(), last.minute()), (23, 55));

        for pair in day.samples().windows(2) {
            assert_eq!(
                pair[1].instant().clone() - pair[0].instant().clone(),
                Duration::minutes(7)
            );
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(
            sample_day(&date, 0.0, 0.0, 0, &FixedSun { altitude: 0.5 }),
            Err(Error::invalid_interval(0))
        );
    }

    #[test]
    fn test_provider_error_propagates() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(
            sample_day(&date, 0.0, 0.0, 15, &Failing),
            Err(Error::computation_error("no ephemeris"))
        );
    }

    #[test]
    fn test_whole_day_single_sample() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let day = sample_day(&date, 0.0, 0.0, 1440, &FixedSun { altitude: 0.5 }).unwrap();
        assert_eq!(day.samples().len(), 1);

        let day = sample_day(&date, 0.0, 0.0, 5000, &FixedSun { altitude: 0.5 }).unwrap();
        assert_eq!(day.samples().len(), 1);
    }

    #[test]
    fn test_daylight_filter_and_exposure() {
        let date = "2023-06-21T00:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let provider = Grena3Provider::new().with_delta_t(69.0);
        let day = sample_day(&date, 48.21, 16.37, 30, &provider).unwrap();

        let daylight: Vec<_> = day.daylight_samples().collect();
        assert!(!daylight.is_empty() && daylight.len() < day.samples().len());
        assert!(daylight.iter().all(|s| s.position().is_sun_up()));

        let table = day.exposure(&Structure::default(), &ClearSkyModel::standard());
        assert_eq!(table.len(), day.samples().len());
        let roof: Vec<f64> = table.face_series(Face::Roof).unwrap().collect();
        for (sample, value) in day.samples().iter().zip(roof) {
            if !sample.position().is_sun_up() {
                assert_eq!(value, 0.0);
            }
        }
    }

    #[test]
    fn test_window_matches_provider() {
        let date = Utc.with_ymd_and_hms(2023, 6, 21, 9, 0, 0).unwrap();
        let provider = Grena3Provider::new()
            .with_delta_t(69.0)
            .with_horizon(Horizon::CivilTwilight);
        let day = sample_day(&date, 48.21, 16.37, 60, &provider).unwrap();
        let (samples, window) = day.into_parts();

        assert_eq!(samples.len(), 24);
        assert_eq!(window, provider.day_window(&date, 48.21, 16.37).unwrap());
    }
}
