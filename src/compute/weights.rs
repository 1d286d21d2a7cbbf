//! Viewport weighting: the share of a viewport each cell covers.

use crate::codec::Codec;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::spatial::approximate_area_km2;
use crate::types::{BoundingBox, GeoHash};

/// Viewport spanned by the centers of the two corner cells.
pub fn viewport<C: Codec>(
    codec: &C,
    north_east: &GeoHash,
    south_west: &GeoHash,
) -> Result<BoundingBox> {
    let ne = codec.decode(north_east)?.center();
    let sw = codec.decode(south_west)?.center();
    Ok(BoundingBox::new(ne.y(), ne.x(), sw.y(), sw.x()))
}

/// For each cell, the fraction of the viewport area covered by the part of
/// the cell that is visible in it.
///
/// Areas use the flat-rectangle approximation from
/// [`approximate_area_km2`]. Cells outside the viewport weigh `0.0`; a cell
/// containing the whole viewport weighs `1.0`.
///
/// Corner cells in the same row or the same column span a viewport with no
/// area, so this returns [`GridError::InvalidInput`] for them even though
/// [`geohashes_in`](crate::compute::tiling::geohashes_in) tiles them fine.
pub fn weights<C: Codec>(
    codec: &C,
    config: &GridConfig,
    cells: &[GeoHash],
    north_east: &GeoHash,
    south_west: &GeoHash,
) -> Result<Vec<f64>> {
    let view = viewport(codec, north_east, south_west)?;
    let view_area = approximate_area_km2(&view, config.earth_radius_km);

    if view_area.is_nan() || view_area <= 0.0 {
        log::warn!(
            "Rejecting weights for degenerate viewport {}..{}",
            north_east,
            south_west
        );
        return Err(GridError::InvalidInput(format!(
            "viewport between {} and {} has no area",
            north_east, south_west
        )));
    }

    cells
        .iter()
        .map(|cell| {
            let bbox = codec.decode(cell)?;
            let visible = bbox
                .intersection(&view)
                .map(|clipped| approximate_area_km2(&clipped, config.earth_radius_km))
                .unwrap_or(0.0);

            Ok((visible / view_area).clamp(0.0, 1.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Base32Codec;
    use crate::compute::tiling::geohashes_in;
    use crate::types::{Direction, Precision};
    use geo::Point;

    fn corners(precision: usize) -> Result<(GeoHash, GeoHash)> {
        corners_around(precision, 0.01)
    }

    fn corners_around(precision: usize, d: f64) -> Result<(GeoHash, GeoHash)> {
        let codec = Base32Codec;
        let p = Precision::new(precision)?;
        let ne = codec.encode(Point::new(24.9384 + d, 60.1699 + d), p)?;
        let sw = codec.encode(Point::new(24.9384 - d, 60.1699 - d), p)?;
        Ok((ne, sw))
    }

    #[test]
    fn test_containing_cell_weighs_one() -> Result<()> {
        let (ne, sw) = corners(7)?;
        let parent = ne.round(Precision::new(3)?);

        let w = weights(&Base32Codec, &GridConfig::default(), &[parent], &ne, &sw)?;
        assert_eq!(w, vec![1.0]);
        Ok(())
    }

    #[test]
    fn test_disjoint_cell_weighs_zero() -> Result<()> {
        let (ne, sw) = corners(7)?;
        let far = GeoHash::parse("9q8yyk")?;

        let w = weights(&Base32Codec, &GridConfig::default(), &[far], &ne, &sw)?;
        assert_eq!(w, vec![0.0]);
        Ok(())
    }

    #[test]
    fn test_tiling_weights_are_bounded_and_cover_viewport() -> Result<()> {
        let codec = Base32Codec;
        let config = GridConfig::default();
        let (ne, sw) = corners(6)?;

        let area = geohashes_in(&codec, &config, &ne, &sw)?;
        let w = weights(&codec, &config, &area, &ne, &sw)?;

        assert_eq!(w.len(), area.len());
        assert!(w.iter().all(|x| (0.0..=1.0).contains(x)));

        // the tiling covers the viewport, so the visible shares add up to ~1
        let total: f64 = w.iter().sum();
        assert!((total - 1.0).abs() < 0.01, "total weight {}", total);
        Ok(())
    }

    #[test]
    fn test_empty_cells_give_empty_weights() -> Result<()> {
        let (ne, sw) = corners(6)?;
        assert!(weights(&Base32Codec, &GridConfig::default(), &[], &ne, &sw)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_degenerate_viewport_rejected() -> Result<()> {
        let (ne, _) = corners(6)?;
        let result = weights(&Base32Codec, &GridConfig::default(), &[ne.clone()], &ne, &ne);
        assert!(matches!(result, Err(GridError::InvalidInput(_))));
        Ok(())
    }

    #[test]
    fn test_fine_precision_weights_cover_viewport() -> Result<()> {
        let codec = Base32Codec;
        let config = GridConfig::default();

        // ~20 m viewport at precision 11, ~4 m at precision 12
        for (precision, d) in [(11, 0.00009), (12, 0.00002)] {
            let (ne, sw) = corners_around(precision, d)?;
            let view = viewport(&codec, &ne, &sw)?;

            let area = geohashes_in(&codec, &config, &ne, &sw)?;
            let w = weights(&codec, &config, &area, &ne, &sw)?;

            for (cell, weight) in area.iter().zip(&w) {
                let bbox = codec.decode(cell)?;
                let inside = bbox.north <= view.north
                    && bbox.south >= view.south
                    && bbox.east <= view.east
                    && bbox.west >= view.west;
                if inside {
                    assert!(*weight > 0.0, "{} inside the viewport weighs 0", cell);
                }
            }

            let total: f64 = w.iter().sum();
            assert!(
                (total - 1.0).abs() < 0.01,
                "precision {}: total weight {}",
                precision,
                total
            );
        }
        Ok(())
    }

    #[test]
    fn test_same_row_corners_rejected() -> Result<()> {
        let codec = Base32Codec;
        let config = GridConfig::default();
        let (ne, _) = corners(6)?;
        let west = codec.adjacent(&codec.adjacent(&ne, Direction::West)?, Direction::West)?;

        // tiling the single row works, weighting it does not
        assert_eq!(geohashes_in(&codec, &config, &ne, &west)?.len(), 3);
        let result = weights(&codec, &config, &[ne.clone()], &ne, &west);
        assert!(matches!(result, Err(GridError::InvalidInput(_))));
        Ok(())
    }
}
