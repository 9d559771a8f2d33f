//! A rectangular structure with four walls and a flat roof.
//!
//! The structure may be turned about its vertical axis by up to 45° either
//! way. Rotation is measured clockwise seen from above, so a positive rotation
//! swings the north wall toward the east.

use crate::error::check_rotation;
use crate::math::{PI, degrees_to_radians, normalize_radians_0_to_tau};
use crate::{Result, SurfaceOrientation};
use core::fmt;

/// One of the five sun-facing surfaces of a [`Structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Wall whose outward normal points north before rotation.
    North,
    /// Wall facing east before rotation.
    East,
    /// Wall facing south before rotation.
    South,
    /// Wall facing west before rotation.
    West,
    /// Horizontal roof.
    Roof,
}

impl Face {
    /// All faces, walls first in compass order.
    pub const ALL: [Self; 5] = [Self::North, Self::East, Self::South, Self::West, Self::Roof];

    /// Outward-normal azimuth of the unrotated face in radians.
    ///
    /// The roof has no meaningful azimuth and reports 0.
    #[must_use]
    pub const fn base_azimuth(self) -> f64 {
        match self {
            Self::North | Self::Roof => 0.0,
            Self::East => PI / 2.0,
            Self::South => PI,
            Self::West => 3.0 * PI / 2.0,
        }
    }

    /// Whether this face is a vertical wall.
    #[must_use]
    pub const fn is_wall(self) -> bool {
        !matches!(self, Self::Roof)
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::Roof => "roof",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rectangular structure rotated about its vertical axis.
///
/// # Example
/// ```
/// use solar_exposure::{Face, Structure};
///
/// let house = Structure::new(30.0).unwrap();
/// let north = house.orientation(Face::North);
/// assert!((north.azimuth().to_degrees() - 30.0).abs() < 1e-9);
///
/// assert!(Structure::new(60.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Structure {
    /// Clockwise rotation in radians
    rotation: f64,
}

impl Structure {
    /// Creates a structure rotated by `rotation_degrees` (-45 to +45).
    ///
    /// # Errors
    /// Returns `InvalidRotation` outside that range or for NaN.
    pub fn new(rotation_degrees: f64) -> Result<Self> {
        check_rotation(rotation_degrees)?;
        Ok(Self {
            rotation: degrees_to_radians(rotation_degrees),
        })
    }

    /// Rotation in radians.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Orientation of a single face.
    #[must_use]
    pub fn orientation(&self, face: Face) -> SurfaceOrientation {
        match face {
            Face::Roof => SurfaceOrientation::roof(),
            wall => SurfaceOrientation::wall(normalize_radians_0_to_tau(
                wall.base_azimuth() + self.rotation,
            )),
        }
    }

    /// All five faces with their orientations, in [`Face::ALL`] order.
    #[must_use]
    pub fn surfaces(&self) -> [(Face, SurfaceOrientation); 5] {
        Face::ALL.map(|face| (face, self.orientation(face)))
    }
}
