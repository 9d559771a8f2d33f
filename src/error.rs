//! Error types for the solar exposure library.
//!
//! The irradiance model itself never fails; these errors come from building
//! configuration values, from the sun-position provider and from the sampler.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring or sampling a day.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation angle for sunrise/sunset calculations.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Sampling interval of zero minutes.
    InvalidInterval {
        /// The invalid interval in minutes.
        minutes: u32,
    },
    /// Structure rotation outside the supported range.
    InvalidRotation {
        /// The invalid rotation in degrees.
        value: f64,
    },
    /// Zenith transmittance outside (0, 1].
    InvalidTransmittance {
        /// The invalid transmittance value provided.
        value: f64,
    },
    /// Negative or non-finite extinction rate.
    InvalidExtinction {
        /// The invalid extinction rate provided.
        value: f64,
    },
    /// Invalid date/time for the requested computation.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error.
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidInterval { minutes } => {
                write!(f, "invalid sampling interval {minutes} min (must be positive)")
            }
            Self::InvalidRotation { value } => {
                write!(
                    f,
                    "invalid structure rotation {value}° (must be between -45° and +45°)"
                )
            }
            Self::InvalidTransmittance { value } => {
                write!(
                    f,
                    "invalid zenith transmittance {value} (must be in (0, 1])"
                )
            }
            Self::InvalidExtinction { value } => {
                write!(
                    f,
                    "invalid extinction rate {value} (must be finite and non-negative)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid sampling interval error.
    #[must_use]
    pub const fn invalid_interval(minutes: u32) -> Self {
        Self::InvalidInterval { minutes }
    }

    /// Creates an invalid rotation error.
    #[must_use]
    pub const fn invalid_rotation(value: f64) -> Self {
        Self::InvalidRotation { value }
    }

    /// Creates an invalid transmittance error.
    #[must_use]
    pub const fn invalid_transmittance(value: f64) -> Self {
        Self::InvalidTransmittance { value }
    }

    /// Creates an invalid extinction rate error.
    #[must_use]
    pub const fn invalid_extinction(value: f64) -> Self {
        Self::InvalidExtinction { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a sampling interval.
///
/// # Errors
/// Returns `InvalidInterval` for a zero interval.
pub const fn check_interval(minutes: u32) -> Result<()> {
    if minutes == 0 {
        return Err(Error::invalid_interval(minutes));
    }
    Ok(())
}

/// Validates a structure rotation in degrees (-45 to +45).
///
/// # Errors
/// Returns `InvalidRotation` if the rotation is outside -45 to +45 degrees.
pub fn check_rotation(degrees: f64) -> Result<()> {
    if !(-45.0..=45.0).contains(&degrees) {
        return Err(Error::invalid_rotation(degrees));
    }
    Ok(())
}
