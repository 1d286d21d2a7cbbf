//! Validation for geographic coordinates and cell sets.

use crate::error::{GridError, Result};
use crate::types::GeoHash;
use geo::Point;

/// Rejects a `(lng, lat)` point the codec cannot place on the grid.
///
/// Both axes must be finite and inside the closed WGS84 ranges; the poles
/// and the antimeridian themselves are accepted.
///
/// ```
/// use geo::Point;
/// use spatio_geohash::compute::validation::validate_geographic_point;
///
/// assert!(validate_geographic_point(&Point::new(24.938385, 60.169909)).is_ok());
/// assert!(validate_geographic_point(&Point::new(180.0, -90.0)).is_ok());
/// assert!(validate_geographic_point(&Point::new(24.9, 90.5)).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (lng, lat) = point.x_y();

    // NaN and infinities fall outside both ranges
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GridError::InvalidInput(format!(
            "cannot encode latitude {}, expected -90..=90",
            lat
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(GridError::InvalidInput(format!(
            "cannot encode longitude {}, expected -180..=180",
            lng
        )));
    }

    Ok(())
}

/// Validates that every cell has the same length and returns that length.
///
/// Returns `EmptyInput` when there are no cells, labelled with `what`.
pub fn uniform_precision(cells: &[GeoHash], what: &'static str) -> Result<usize> {
    let first = cells.first().ok_or(GridError::EmptyInput(what))?;
    let expected = first.as_str().len();

    if let Some(other) = cells.iter().find(|c| c.as_str().len() != expected) {
        return Err(GridError::MixedPrecision {
            expected,
            found: other.as_str().len(),
        });
    }

    Ok(expected)
}
