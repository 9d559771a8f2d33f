//! Irradiance of every surface at every sampled instant.

use crate::irradiance::ClearSkyModel;
use crate::{Face, SunPosition, SurfaceOrientation};

/// Normalized intensities laid out row-major: one row per instant, one column
/// per surface.
///
/// # Example
/// ```
/// use solar_exposure::{ClearSkyModel, ExposureTable, Face, Structure, SunPosition};
/// use core::f64::consts::PI;
///
/// let positions = [SunPosition::new(PI, 0.6), SunPosition::new(0.0, -0.2)];
/// let table = ExposureTable::compute(
///     &positions,
///     &Structure::default().surfaces(),
///     &ClearSkyModel::standard(),
/// );
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.row(1), Some(&[0.0; 5][..]));
/// let south: Vec<f64> = table.face_series(Face::South).unwrap().collect();
/// assert!(south[0] > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureTable {
    surfaces: Vec<(Face, SurfaceOrientation)>,
    values: Vec<f64>,
}

impl ExposureTable {
    /// Evaluates `model` for each position against each surface.
    #[must_use]
    pub fn compute(
        positions: &[SunPosition],
        surfaces: &[(Face, SurfaceOrientation)],
        model: &ClearSkyModel,
    ) -> Self {
        let mut values = Vec::with_capacity(positions.len() * surfaces.len());
        for sun in positions {
            values.extend(
                surfaces
                    .iter()
                    .map(|(_, surface)| model.intensity(sun, surface)),
            );
        }

        Self {
            surfaces: surfaces.to_vec(),
            values,
        }
    }

    /// Number of instants.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.surfaces.is_empty() {
            0
        } else {
            self.values.len() / self.surfaces.len()
        }
    }

    /// Whether the table holds no instants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The surfaces, in column order.
    #[must_use]
    pub fn surfaces(&self) -> &[(Face, SurfaceOrientation)] {
        &self.surfaces
    }

    /// All surface values for instant `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        let width = self.surfaces.len();
        let start = index.checked_mul(width)?;
        self.values.get(start..start + width).filter(|_| index < self.len())
    }

    /// Value at instant `index` for surface column `column`.
    #[must_use]
    pub fn value(&self, index: usize, column: usize) -> Option<f64> {
        if column >= self.surfaces.len() {
            return None;
        }
        self.row(index).map(|row| row[column])
    }

    /// Values of surface column `column` across all instants.
    pub fn series(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        let width = self.surfaces.len();
        let skip = if column < width { column } else { self.values.len() };
        self.values.iter().skip(skip).step_by(width.max(1)).copied()
    }

    /// Values for `face` across all instants, if the table has that face.
    pub fn face_series(&self, face: Face) -> Option<impl Iterator<Item = f64> + '_> {
        let column = self.surfaces.iter().position(|(f, _)| *f == face)?;
        Some(self.series(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Structure;
    use crate::math::PI;

    fn noon_and_night() -> Vec<SunPosition> {
        vec![
            SunPosition::new(0.0, -0.3),
            SunPosition::new(PI, 1.0),
            SunPosition::new(PI / 2.0, 0.2),
        ]
    }

    #[test]
    fn test_table_shape() {
        let table = ExposureTable::compute(
            &noon_and_night(),
            &Structure::default().surfaces(),
            &ClearSkyModel::standard(),
        );

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.surfaces().len(), 5);
        assert_eq!(table.row(0).map(<[f64]>::len), Some(5));
        assert_eq!(table.row(3), None);
        assert_eq!(table.value(0, 5), None);
        assert_eq!(table.series(4).count(), 3);
    }

    #[test]
    fn test_night_row_is_dark() {
        let table = ExposureTable::compute(
            &noon_and_night(),
            &Structure::default().surfaces(),
            &ClearSkyModel::standard(),
        );
        assert!(table.row(0).unwrap().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_face_lookup() {
        let table = ExposureTable::compute(
            &noon_and_night(),
            &Structure::default().surfaces(),
            &ClearSkyModel::standard(),
        );

        let north: Vec<f64> = table.face_series(Face::North).unwrap().collect();
        let south: Vec<f64> = table.face_series(Face::South).unwrap().collect();
        assert_eq!(north[1], 0.0);
        assert!(south[1] > 0.0);

        let east = table.value(2, 1).unwrap();
        let west = table.value(2, 3).unwrap();
        assert!(east > 0.0);
        assert_eq!(west, 0.0);
    }

    #[test]
    fn test_subset_of_faces() {
        let structure = Structure::default();
        let walls = [
            (Face::East, structure.orientation(Face::East)),
            (Face::West, structure.orientation(Face::West)),
        ];
        let table = ExposureTable::compute(&noon_and_night(), &walls, &ClearSkyModel::standard());
        assert!(table.face_series(Face::Roof).is_none());
        assert_eq!(table.series(7).count(), 0);
    }

    #[test]
    fn test_empty_inputs() {
        let model = ClearSkyModel::standard();
        let no_positions = ExposureTable::compute(&[], &Structure::default().surfaces(), &model);
        assert!(no_positions.is_empty());

        let no_surfaces = ExposureTable::compute(&noon_and_night(), &[], &model);
        assert!(no_surfaces.is_empty());
        assert_eq!(no_surfaces.row(0), None);
    }
}
