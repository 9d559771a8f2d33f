//! # Solar Exposure Library
//!
//! Direct-sunlight exposure of the walls and roof of a rectangular structure over one day.
//!
//! The library combines two pieces:
//! - a **time sampler** that walks a local calendar day at a fixed stride and asks a
//!   sun-position provider where the sun stands at each instant, together with the day's
//!   sunrise and sunset;
//! - an **irradiance model** that turns a sun position into a normalized intensity in
//!   [0, 1] for any oriented surface, from the angle of incidence and a clear-sky
//!   attenuation law based on the Kasten–Young air mass.
//!
//! A [`Structure`] supplies the five surfaces (four walls and a flat roof), optionally
//! rotated by up to ±45°. The built-in [`Grena3Provider`] uses Grena's algorithm no. 3
//! for positions and the NREL SPA interpolation scheme for sunrise and sunset.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based API, the provider and (with `std`) the sampler
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (sampler, provider, exposure tables)
//! solar-exposure = "0.1"
//!
//! # Minimal no_std (irradiance model, structure and numeric ephemeris only)
//! solar-exposure = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Grena, R. (2012). Five new algorithms for the computation of sun position from 2010 to 2110.
//!   Solar Energy, 86(5), 1323-1337. DOI: <http://dx.doi.org/10.1016/j.solener.2012.01.024>
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//! - Kasten, F.; Young, A. T. (1989). Revised optical air mass tables and approximation
//!   formula. Applied Optics, 28(22), 4735-4738.
//!
//! ## Quick Start
//!
//! ### Day profile of a structure (with chrono)
//! ```rust
//! # #[cfg(all(feature = "std", feature = "chrono"))] {
//! use solar_exposure::{sample_day, ClearSkyModel, Face, Grena3Provider, Structure};
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2026-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let day = sample_day(
//!     &date,
//!     48.21,  // Vienna latitude
//!     16.37,  // Vienna longitude
//!     15,     // minutes between samples
//!     &Grena3Provider::new(),
//! ).unwrap();
//!
//! let house = Structure::new(20.0).unwrap(); // turned 20° clockwise
//! let table = day.exposure(&house, &ClearSkyModel::standard());
//!
//! for (sample, row) in day.samples().iter().zip(0..table.len()) {
//!     println!("{} {:?}", sample.instant().format("%H:%M"), table.row(row));
//! }
//! let peak = table.face_series(Face::Roof).unwrap().fold(0.0, f64::max);
//! assert!(peak > 0.65 && peak < 0.8);
//! # }
//! ```
//!
//! ### Irradiance only (works in `no_std`)
//! ```rust
//! use solar_exposure::{intensity, SunPosition, SurfaceOrientation};
//!
//! // Sun 40° high in the south-east, wall facing south
//! let sun = SunPosition::new(135f64.to_radians(), 40f64.to_radians());
//! let wall = SurfaceOrientation::wall(180f64.to_radians());
//!
//! let value = intensity(&sun, &wall);
//! assert!(value > 0.0 && value < 1.0);
//! ```
//!
//! ### Sunrise and Sunset (numeric API, no chrono)
//! ```rust
//! use solar_exposure::{sunrise, Horizon};
//!
//! let window = sunrise::sunrise_sunset_utc(2026, 6, 21, 48.21, 16.37, 69.0, Horizon::SunriseSunset)
//!     .unwrap();
//! if let Some(sunrise) = window.sunrise() {
//!     println!("Sunrise: {:.2} h UTC", sunrise.hours());
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0 = North, measured clockwise toward East, radians in [0, 2π)
//! - **Altitude**: 0 = horizon, π/2 = directly overhead, negative below the horizon
//! - **Tilt**: angle of a surface normal above the horizontal, 0 = wall, π/2 = roof
//! - **Rotation**: a structure rotated by a positive angle turns clockwise seen from above

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
#[cfg(feature = "std")]
pub use crate::exposure::ExposureTable;
pub use crate::irradiance::{ClearSkyModel, intensity};
#[cfg(feature = "chrono")]
pub use crate::provider::{Grena3Provider, SunPositionProvider};
#[cfg(all(feature = "std", feature = "chrono"))]
pub use crate::sampler::{SampledDay, SunSample, sample_day};
pub use crate::structure::{Face, Structure};
pub use crate::types::{DayWindow, Horizon, HoursUtc, SunPosition, SurfaceOrientation};

// Model modules
#[cfg(feature = "std")]
pub mod exposure;
pub mod irradiance;
pub mod structure;

// Ephemeris modules
pub mod position;
#[cfg(feature = "chrono")]
pub mod provider;
pub mod sunrise;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(all(feature = "std", feature = "chrono"))]
pub mod sampler;
pub mod time;
