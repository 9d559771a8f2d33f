//! Day sampling across time zones, DST transitions and polar latitudes.

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Europe::{Oslo, Vienna};
use chrono_tz::TZ_VARIANTS;
use solar_exposure::{
    ClearSkyModel, Error, Grena3Provider, Horizon, SampledDay, Structure, SunPositionProvider,
    sample_day, sunrise,
};

const VIENNA: (f64, f64) = (48.2082, 16.3738);
const TROMSO: (f64, f64) = (69.6492, 18.9553);

fn sample<Tz: TimeZone>(date: &DateTime<Tz>, location: (f64, f64), interval: u32) -> SampledDay<Tz> {
    let _ = env_logger::builder().is_test(true).try_init();
    sample_day(date, location.0, location.1, interval, &Grena3Provider::new()).unwrap()
}

fn last_millisecond() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Local noon of some date on which the zone's clocks skip 00:00.
fn find_date_with_missing_midnight() -> Option<DateTime<chrono_tz::Tz>> {
    for tz in TZ_VARIANTS {
        for year in 2000..=2030 {
            for month in 1..=12 {
                for day in 1..=31 {
                    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                        continue;
                    };

                    let midnight = tz.from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
                    if matches!(midnight, LocalResult::None) {
                        if let LocalResult::Single(noon) =
                            tz.from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
                        {
                            return Some(noon);
                        }
                    }
                }
            }
        }
    }
    None
}

#[test]
fn test_quarter_hour_day_covers_local_midnight_to_midnight() {
    let date = "2023-06-21T10:45:00+02:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let day = sample(&date, VIENNA, 15);

    assert_eq!(day.samples().len(), 96);

    let first = day.samples().first().unwrap().instant();
    assert_eq!(first.naive_local().time(), NaiveTime::MIN);
    assert_eq!(first.date_naive(), date.date_naive());

    let last = day.samples().last().unwrap().instant();
    assert!(last.naive_local().time() <= last_millisecond());
    assert_eq!((last.hour(), last.minute()), (23, 45));
    assert_eq!(last.date_naive(), date.date_naive());
}

#[test]
fn test_ten_minute_day() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let day = sample(&date, VIENNA, 10);
    assert_eq!(day.samples().len(), 144);
}

#[test]
fn test_uneven_interval_stops_before_midnight() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    // 1440 / 25 = 57.6, so 58 samples, the last at 23:45
    let day = sample(&date, VIENNA, 25);
    assert_eq!(day.samples().len(), 58);
    let last = day.samples().last().unwrap().instant();
    assert_eq!((last.hour(), last.minute()), (23, 45));
}

#[test]
fn test_samples_strictly_increasing_at_constant_stride() {
    let date = Vienna.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let day = sample(&date, VIENNA, 15);

    for pair in day.samples().windows(2) {
        let step = pair[1].instant().clone() - pair[0].instant().clone();
        assert_eq!(step, Duration::minutes(15));
    }
}

#[test]
fn test_spring_forward_day_is_shorter() {
    // Clocks jump from 02:00 to 03:00, the local day lasts 23 hours
    let date = Vienna.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let day = sample(&date, VIENNA, 15);
    assert_eq!(day.samples().len(), 92);

    let first = day.samples().first().unwrap().instant();
    assert_eq!(first.naive_local().time(), NaiveTime::MIN);
    let last = day.samples().last().unwrap().instant();
    assert_eq!((last.hour(), last.minute()), (23, 45));
}

#[test]
fn test_fall_back_day_is_longer() {
    // Clocks fall back from 03:00 to 02:00, the local day lasts 25 hours
    let date = Vienna.with_ymd_and_hms(2024, 10, 27, 12, 0, 0).unwrap();
    let day = sample(&date, VIENNA, 15);
    assert_eq!(day.samples().len(), 100);

    let last = day.samples().last().unwrap().instant();
    assert_eq!((last.hour(), last.minute()), (23, 45));
    assert_eq!(last.date_naive(), date.date_naive());
}

#[test]
fn test_day_without_local_midnight_starts_after_the_gap() {
    let date = find_date_with_missing_midnight().expect("some zone skips midnight");
    let provider = Grena3Provider::new().with_delta_t(69.0);
    let day = sample_day(&date, 0.0, 0.0, 15, &provider)
        .unwrap_or_else(|error| panic!("{date} ({}): {error}", date.timezone()));

    let first = day.samples().first().unwrap().instant();
    assert!(first.naive_local().time() > NaiveTime::MIN);
    for sample in day.samples() {
        assert_eq!(sample.instant().date_naive(), date.date_naive());
    }
    for pair in day.samples().windows(2) {
        assert_eq!(pair[1].instant().clone() - pair[0].instant().clone(), Duration::minutes(15));
    }
    let after_last = day.samples().last().unwrap().instant().clone() + Duration::minutes(15);
    assert!(after_last.date_naive() > date.date_naive());

    assert!(sunrise::sunrise_sunset(&date, 0.0, 0.0, 69.0, Horizon::SunriseSunset).is_ok());
}

#[test]
fn test_sao_paulo_summer_time_start() {
    // Clocks jumped from 00:00 to 01:00 on 2018-11-04
    let date = Sao_Paulo.with_ymd_and_hms(2018, 11, 4, 12, 0, 0).unwrap();
    let day = sample(&date, (-23.5505, -46.6333), 15);

    assert_eq!(day.samples().len(), 92);
    let first = day.samples().first().unwrap().instant();
    assert_eq!(first.to_rfc3339(), "2018-11-04T01:00:00-02:00");
    let last = day.samples().last().unwrap().instant();
    assert_eq!((last.hour(), last.minute()), (23, 45));
    assert!(day.window().is_regular_day());
}

#[test]
fn test_sampling_is_deterministic() {
    let date = Vienna.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let a = sample(&date, VIENNA, 15);
    let b = sample(&date, VIENNA, 15);
    assert_eq!(a, b);

    let structure = Structure::new(15.0).unwrap();
    let model = ClearSkyModel::standard();
    assert_eq!(a.exposure(&structure, &model), b.exposure(&structure, &model));
}

#[test]
fn test_time_of_day_of_input_is_ignored() {
    let morning = Vienna.with_ymd_and_hms(2024, 6, 1, 6, 0, 0).unwrap();
    let evening = Vienna.with_ymd_and_hms(2024, 6, 1, 22, 30, 0).unwrap();
    assert_eq!(sample(&morning, VIENNA, 30), sample(&evening, VIENNA, 30));
}

#[test]
fn test_zero_interval_is_rejected() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let result = sample_day(&date, VIENNA.0, VIENNA.1, 0, &Grena3Provider::new());
    assert_eq!(result, Err(Error::InvalidInterval { minutes: 0 }));
}

#[test]
fn test_invalid_coordinates_reported_by_provider() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let result = sample_day(&date, 123.0, 0.0, 15, &Grena3Provider::new());
    assert_eq!(result, Err(Error::InvalidLatitude { value: 123.0 }));
}

#[test]
fn test_window_matches_provider_for_same_day() {
    let date = Vienna.with_ymd_and_hms(2024, 6, 21, 15, 0, 0).unwrap();
    let provider = Grena3Provider::new();
    let day = sample_day(&date, VIENNA.0, VIENNA.1, 15, &provider).unwrap();

    let window = day.window();
    assert!(window.is_regular_day());
    assert_eq!(window, &provider.day_window(&date, VIENNA.0, VIENNA.1).unwrap());

    // Samples before sunrise and after sunset are dark, those between are lit
    let sunrise = window.sunrise().unwrap();
    let sunset = window.sunset().unwrap();
    for sample in day.samples() {
        let instant = sample.instant();
        let margin = Duration::minutes(15);
        if *instant < sunrise.clone() - margin || *instant > sunset.clone() + margin {
            assert!(!sample.position().is_sun_up(), "{instant} should be dark");
        } else if *instant > sunrise.clone() + margin && *instant < sunset.clone() - margin {
            assert!(sample.position().is_sun_up(), "{instant} should be lit");
        }
    }
}

#[test]
fn test_midnight_sun_passes_through() {
    let date = Oslo.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
    let day = sample(&date, TROMSO, 15);

    assert!(day.window().is_polar_day());
    assert!(day.window().sunrise().is_none());
    assert_eq!(day.samples().len(), 96);
    assert_eq!(day.daylight_samples().count(), day.samples().len());
}

#[test]
fn test_polar_night_is_dark_on_every_face() {
    let date = Oslo.with_ymd_and_hms(2023, 12, 21, 0, 0, 0).unwrap();
    let day = sample(&date, TROMSO, 15);

    assert!(day.window().is_polar_night());
    assert_eq!(day.daylight_samples().count(), 0);

    let table = day.exposure(&Structure::default(), &ClearSkyModel::standard());
    assert_eq!(table.len(), 96);
    for row in 0..table.len() {
        assert!(table.row(row).unwrap().iter().all(|&value| value == 0.0));
    }
}
