//! Rectangle tiling: cover the box spanned by two corner cells with a grid
//! of same-precision cells.
//!
//! The west and east columns are walked south from the northern corners,
//! then every row is walked east from its west cell to its east cell. Each
//! walk is bounded by the number of steps the rectangle span allows, so
//! malformed corners fail with [`GridError::TilingFailed`] instead of looping.

use crate::codec::Codec;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::types::{Direction, GeoHash};
use geo::Point;

/// Steps beyond the geometric span a walk may take before giving up.
const WALK_SLACK: usize = 2;

/// All cells covering the rectangle between `north_east` and `south_west`.
///
/// The output precision is the shorter of the two corner lengths. Cells are
/// returned row-major: north to south, west to east within a row. The first
/// row ends with the rounded north-east cell and the last row starts with
/// the rounded south-west cell.
pub fn geohashes_in<C: Codec>(
    codec: &C,
    config: &GridConfig,
    north_east: &GeoHash,
    south_west: &GeoHash,
) -> Result<Vec<GeoHash>> {
    let precision = north_east.precision().min(south_west.precision());
    let north_east = north_east.round(precision);
    let south_west = south_west.round(precision);

    let ne_box = codec.decode(&north_east)?;
    let sw_box = codec.decode(&south_west)?;
    let (n, e) = (ne_box.center().y(), ne_box.center().x());
    let (s, w) = (sw_box.center().y(), sw_box.center().x());

    if n < s {
        log::warn!(
            "Rejecting tiling: north-east corner {} lies south of {}",
            north_east,
            south_west
        );
        return Err(GridError::TilingFailed(format!(
            "north-east corner {} lies south of south-west corner {}",
            north_east, south_west
        )));
    }

    if e < w {
        log::warn!(
            "Rejecting tiling: {} lies west of {} (antimeridian crossing?)",
            north_east,
            south_west
        );
        return Err(GridError::TilingFailed(format!(
            "north-east corner {} lies west of south-west corner {}",
            north_east, south_west
        )));
    }

    let north_west = codec.encode(Point::new(w, n), precision)?;
    let south_east = codec.encode(Point::new(e, s), precision)?;

    let max_rows = step_bound(n - s, ne_box.height(), config.max_tiling_steps);
    let max_cols = step_bound(e - w, ne_box.width(), config.max_tiling_steps);

    // first and last columns of the box
    let head = walk(codec, &north_west, &south_west, Direction::South, max_rows)?;
    let tail = walk(codec, &north_east, &south_east, Direction::South, max_rows)?;

    if head.len() != tail.len() {
        return Err(GridError::TilingFailed(format!(
            "west column has {} cells but east column has {}",
            head.len(),
            tail.len()
        )));
    }

    let mut area = Vec::new();
    for (west, east) in head.iter().zip(&tail) {
        let row = walk(codec, west, east, Direction::East, max_cols)?;
        if area.len() + row.len() > config.max_tiles {
            log::warn!(
                "Tiling between {} and {} exceeds {} cells",
                north_east,
                south_west,
                config.max_tiles
            );
            return Err(GridError::TilingFailed(format!(
                "tiling exceeds the limit of {} cells",
                config.max_tiles
            )));
        }
        area.extend(row);
    }

    log::debug!(
        "Tiled {}..{} at precision {}: {} rows, {} cells",
        north_east,
        south_west,
        precision,
        head.len(),
        area.len()
    );

    Ok(area)
}

/// Cells from `from` to `to` inclusive, stepping in `direction`.
///
/// Fails once more than `max_steps` steps were taken without reaching `to`.
pub fn walk<C: Codec>(
    codec: &C,
    from: &GeoHash,
    to: &GeoHash,
    direction: Direction,
    max_steps: usize,
) -> Result<Vec<GeoHash>> {
    let mut seq = vec![from.clone()];

    while let Some(last) = seq.last().filter(|last| *last != to) {
        if seq.len() > max_steps {
            log::warn!(
                "Walk {:?} from {} did not reach {} within {} steps",
                direction,
                from,
                to,
                max_steps
            );
            return Err(GridError::TilingFailed(format!(
                "walking {} from {} did not reach {} within {} steps",
                direction.as_str(),
                from,
                to,
                max_steps
            )));
        }

        let next = codec.adjacent(last, direction)?;
        seq.push(next);
    }

    Ok(seq)
}

/// Number of steps needed to cross `span` degrees with cells of `extent`
/// degrees, plus slack, capped at `cap`.
fn step_bound(span: f64, extent: f64, cap: usize) -> usize {
    if extent.is_nan() || extent <= 0.0 || !span.is_finite() {
        return cap;
    }

    let steps = (span / extent).round();
    if steps >= cap as f64 {
        return cap;
    }

    (steps as usize + WALK_SLACK).min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Base32Codec;
    use crate::types::Precision;
    use rustc_hash::FxHashSet;

    fn cell(hash: &str) -> GeoHash {
        GeoHash::parse(hash).unwrap()
    }

    #[test]
    fn test_single_cell_tiling() -> Result<()> {
        let hash = cell("ud9wr3");
        let area = geohashes_in(&Base32Codec, &GridConfig::default(), &hash, &hash)?;
        assert_eq!(area, vec![hash]);
        Ok(())
    }

    #[test]
    fn test_three_by_three_tiling() -> Result<()> {
        let codec = Base32Codec;
        let center = cell("ud9wr3xe");
        let north_east = codec.adjacent(&codec.adjacent(&center, Direction::North)?, Direction::East)?;
        let south_west = codec.adjacent(&codec.adjacent(&center, Direction::South)?, Direction::West)?;

        let area = geohashes_in(&codec, &GridConfig::default(), &north_east, &south_west)?;
        assert_eq!(area.len(), 9);
        assert_eq!(area[4], center);
        assert_eq!(area[2], north_east);
        assert_eq!(area[6], south_west);

        let unique: FxHashSet<_> = area.iter().collect();
        assert_eq!(unique.len(), 9);
        Ok(())
    }

    #[test]
    fn test_mixed_precision_uses_coarser() -> Result<()> {
        let codec = Base32Codec;
        let ne = codec.encode(Point::new(24.9484, 60.1799), Precision::new(8)?)?;
        let sw = codec.encode(Point::new(24.9284, 60.1599), Precision::new(6)?)?;

        let area = geohashes_in(&codec, &GridConfig::default(), &ne, &sw)?;
        assert!(!area.is_empty());
        assert!(area.iter().all(|h| h.precision().get() == 6));
        assert!(area.contains(&ne.round(Precision::new(6)?)));
        assert_eq!(area.last().map(|h| h.precision().get()), Some(6));
        Ok(())
    }

    #[test]
    fn test_swapped_corners_fail() -> Result<()> {
        let codec = Base32Codec;
        let ne = codec.encode(Point::new(24.9484, 60.1799), Precision::new(6)?)?;
        let sw = codec.encode(Point::new(24.9284, 60.1599), Precision::new(6)?)?;

        let result = geohashes_in(&codec, &GridConfig::default(), &sw, &ne);
        assert!(matches!(result, Err(GridError::TilingFailed(_))));
        Ok(())
    }

    #[test]
    fn test_walk_is_bounded() {
        let codec = Base32Codec;
        let from = cell("ud9wr3xe");
        let unreachable = cell("ud9wr3xs"); // north of `from`, never reached walking south

        let result = walk(&codec, &from, &unreachable, Direction::South, 16);
        assert!(matches!(result, Err(GridError::TilingFailed(_))));
    }

    #[test]
    fn test_max_tiles_limit() -> Result<()> {
        let codec = Base32Codec;
        let ne = codec.encode(Point::new(25.0, 60.2), Precision::new(6)?)?;
        let sw = codec.encode(Point::new(24.9, 60.1), Precision::new(6)?)?;

        let config = GridConfig::default().with_max_tiles(4);
        let result = geohashes_in(&codec, &config, &ne, &sw);
        assert!(matches!(result, Err(GridError::TilingFailed(_))));
        Ok(())
    }

    #[test]
    fn test_step_bound() {
        assert_eq!(step_bound(0.0, 1.0, 100), WALK_SLACK);
        assert_eq!(step_bound(10.0, 1.0, 100), 10 + WALK_SLACK);
        assert_eq!(step_bound(1e9, 1.0, 100), 100);
        assert_eq!(step_bound(1.0, 0.0, 100), 100);
        assert_eq!(step_bound(f64::NAN, 1.0, 100), 100);
    }
}
