//! Julian dates and ΔT (Delta T) estimation.

#![allow(clippy::unreadable_literal)]

use crate::math::{floor, polynomial};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date representation for astronomical calculations.
///
/// Carries ΔT alongside the UT-based Julian date so that the ephemeris can
/// move to terrestrial time where it needs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD) - referenced to UT1
    jd: f64,
    /// Delta T in seconds - difference between TT and UT1
    delta_t: f64,
}

impl JulianDate {
    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// # Errors
    /// Returns error if the UTC date/time components are out of range.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &chrono::DateTime<Tz>,
        delta_t: f64,
    ) -> Result<Self> {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self::from_utc(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
            delta_t,
        )
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Errors
    /// Returns error if any component is outside its calendar range.
    ///
    /// # Example
    /// ```
    /// # use solar_exposure::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        delta_t: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let jd = calculate_julian_date(year, month, day, hour, minute, second);
        Ok(Self { jd, delta_t })
    }

    /// Gets the Julian Date (JD) value, referenced to UT1.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Julian Ephemeris Day: JD + ΔT/86400.
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    pub(crate) fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
            delta_t: self.delta_t,
        }
    }
}

/// Meeus, "Astronomical Algorithms", ch. 7, for the Gregorian calendar.
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let (y, m) = if month < 3 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let a = floor(f64::from(y) / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d + b - 1524.5
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// First instant of the local calendar day containing `datetime`.
///
/// Picks the earlier mapping when midnight is ambiguous. When the zone skips
/// midnight (a DST gap at 00:00), the day starts at the end of the gap.
///
/// # Errors
/// Returns `InvalidDateTime` if the zone skips the whole calendar day.
#[cfg(feature = "chrono")]
pub(crate) fn start_of_local_day<Tz: TimeZone>(
    datetime: &chrono::DateTime<Tz>,
) -> Result<chrono::DateTime<Tz>> {
    let date = datetime.date_naive();
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::invalid_datetime("midnight is out of range"))?;
    let tz = datetime.timezone();
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(start);
    }

    let start = first_instant_from(&tz, date)?;
    if start.date_naive() == date {
        Ok(start)
    } else {
        Err(Error::invalid_datetime(
            "local day does not exist in this time zone",
        ))
    }
}

/// Last representable millisecond (23:59:59.999) of the local calendar day
/// containing `datetime`.
///
/// Picks the later mapping when the time is ambiguous. When the zone skips
/// the end of the day, returns the last millisecond before the gap.
#[cfg(feature = "chrono")]
pub(crate) fn end_of_local_day<Tz: TimeZone>(
    datetime: &chrono::DateTime<Tz>,
) -> Result<chrono::DateTime<Tz>> {
    let date = datetime.date_naive();
    let last = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| Error::invalid_datetime("end of day is out of range"))?;
    let tz = datetime.timezone();
    if let Some(end) = tz.from_local_datetime(&last).latest() {
        return Ok(end);
    }

    let next_day = date
        .succ_opt()
        .ok_or_else(|| Error::invalid_datetime("end of day is out of range"))?;
    first_instant_from(&tz, next_day)?
        .checked_sub_signed(chrono::Duration::milliseconds(1))
        .ok_or_else(|| Error::invalid_datetime("end of day is out of range"))
}

/// Earliest instant whose local date is `date` or later.
///
/// Bisects over whole UTC seconds within 26 hours of local midnight, which
/// brackets every real UTC offset.
#[cfg(feature = "chrono")]
fn first_instant_from<Tz: TimeZone>(
    tz: &Tz,
    date: chrono::NaiveDate,
) -> Result<chrono::DateTime<Tz>> {
    const BRACKET_SECONDS: i64 = 26 * 3600;

    let out_of_range = || Error::invalid_datetime("local day is out of range");
    let earliest = date
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.checked_sub_signed(chrono::Duration::seconds(BRACKET_SECONDS)))
        .ok_or_else(out_of_range)?;
    let at = |seconds: i64| {
        earliest
            .checked_add_signed(chrono::Duration::seconds(seconds))
            .map(|utc| tz.from_utc_datetime(&utc))
            .ok_or_else(out_of_range)
    };

    // Invariant: the local date at `before` precedes `date`, at `after` it does not
    let (mut before, mut after) = (0, 2 * BRACKET_SECONDS);
    while after - before > 1 {
        let middle = before + (after - before) / 2;
        if at(middle)?.date_naive() >= date {
            after = middle;
        } else {
            before = middle;
        }
    }

    at(after)
}

/// ΔT (Delta T) estimation.
///
/// ΔT is the difference between Terrestrial Time (TT) and Universal Time (UT1).
/// Estimates use the Espenak & Meeus polynomial fits as updated in 2014,
/// restricted to 1900–3000.
pub struct DeltaT;

impl DeltaT {
    /// Estimates ΔT in seconds for a decimal year.
    ///
    /// See: <https://www.eclipsewise.com/help/deltatpoly2014.html>
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for years outside 1900 to 3000.
    ///
    /// # Example
    /// ```
    /// # use solar_exposure::time::DeltaT;
    /// let delta_t = DeltaT::estimate(2024.0).unwrap();
    /// assert!(delta_t > 60.0 && delta_t < 80.0);
    /// ```
    pub fn estimate(decimal_year: f64) -> Result<f64> {
        let year = decimal_year;

        if !year.is_finite() {
            return Err(Error::invalid_datetime("year must be finite"));
        }

        let delta_t = if year < 1900.0 {
            return Err(Error::invalid_datetime(
                "ΔT estimates not available before year 1900",
            ));
        } else if year < 1920.0 {
            polynomial(&[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197], year - 1900.0)
        } else if year < 1941.0 {
            polynomial(&[21.20, 0.84493, -0.076100, 0.0020936], year - 1920.0)
        } else if year < 1961.0 {
            polynomial(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], year - 1950.0)
        } else if year < 1986.0 {
            polynomial(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], year - 1975.0)
        } else if year < 2005.0 {
            polynomial(
                &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
                year - 2000.0,
            )
        } else if year < 2015.0 {
            polynomial(&[64.69, 0.2930], year - 2005.0)
        } else if year <= 3000.0 {
            polynomial(&[67.62, 0.3645, 0.0039755], year - 2015.0)
        } else {
            return Err(Error::invalid_datetime(
                "ΔT estimates not available beyond year 3000",
            ));
        };

        Ok(delta_t)
    }

    /// Estimates ΔT from year and month, using the middle of the month.
    ///
    /// # Errors
    /// Returns error if month is outside 1-12 or the year is out of range.
    pub fn estimate_from_date(year: i32, month: u32) -> Result<f64> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }

        Self::estimate(f64::from(year) + (f64::from(month) - 0.5) / 12.0)
    }

    /// Estimates ΔT from any chrono date-like value.
    ///
    /// # Errors
    /// Returns error if the year is out of range.
    #[cfg(feature = "chrono")]
    pub fn estimate_from_date_like<D: Datelike>(date: &D) -> Result<f64> {
        Self::estimate_from_date(date.year(), date.month())
    }
}
