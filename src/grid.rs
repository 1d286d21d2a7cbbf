//! The geohash grid: cell navigation plus the tiling, hierarchy, weighting
//! and path algorithms, bound to one codec and configuration.

use crate::codec::{Base32Codec, Codec};
use crate::compute::{hierarchy, path, tiling, weights};
use crate::config::GridConfig;
use crate::error::Result;
use crate::types::{BoundingBox, Direction, GeoHash, Precision};
use geo::Point;

pub use crate::compute::path::CellPath;

/// Geohash grid operations.
///
/// `Grid` holds only immutable state and is cheap to share across threads.
///
/// ```rust
/// use spatio_geohash::{Grid, Precision};
///
/// let grid = Grid::new();
/// let hash = grid.encode(60.169909, 24.938385, Precision::new(8)?)?;
/// assert_eq!(hash.as_str(), "ud9wr3xe");
/// assert_eq!(grid.north_of(&hash)?.as_str(), "ud9wr3xs");
/// assert_eq!(grid.south_of(&hash)?.as_str(), "ud9wr3xd");
/// # Ok::<(), spatio_geohash::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid<C = Base32Codec> {
    codec: C,
    config: GridConfig,
}

impl Grid<Base32Codec> {
    /// Grid with the base-32 codec and default configuration.
    pub fn new() -> Self {
        Self {
            codec: Base32Codec,
            config: GridConfig::default(),
        }
    }

    pub fn with_config(config: GridConfig) -> Result<Self> {
        Self::with_codec(Base32Codec, config)
    }
}

impl Default for Grid<Base32Codec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> Grid<C> {
    /// Grid over a custom codec. The configuration is validated.
    pub fn with_codec(codec: C, config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { codec, config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encode `(lat, lng)` at `precision`.
    pub fn encode(&self, lat: f64, lng: f64, precision: Precision) -> Result<GeoHash> {
        self.codec.encode(Point::new(lng, lat), precision)
    }

    /// Encode `(lat, lng)` at the configured default precision.
    pub fn encode_default(&self, lat: f64, lng: f64) -> Result<GeoHash> {
        self.encode(lat, lng, self.config.precision()?)
    }

    pub fn round(&self, hash: &GeoHash, precision: Precision) -> GeoHash {
        hash.round(precision)
    }

    pub fn neighbor(&self, hash: &GeoHash, direction: Direction) -> Result<GeoHash> {
        self.codec.adjacent(hash, direction)
    }

    pub fn north_of(&self, hash: &GeoHash) -> Result<GeoHash> {
        self.neighbor(hash, Direction::North)
    }

    pub fn south_of(&self, hash: &GeoHash) -> Result<GeoHash> {
        self.neighbor(hash, Direction::South)
    }

    pub fn east_of(&self, hash: &GeoHash) -> Result<GeoHash> {
        self.neighbor(hash, Direction::East)
    }

    pub fn west_of(&self, hash: &GeoHash) -> Result<GeoHash> {
        self.neighbor(hash, Direction::West)
    }

    /// Center of the cell as `(lat, lng)`.
    pub fn to_lat_lng(&self, hash: &GeoHash) -> Result<(f64, f64)> {
        let center = self.to_point(hash)?;
        Ok((center.y(), center.x()))
    }

    /// Center of the cell as a `(lng, lat)` point.
    pub fn to_point(&self, hash: &GeoHash) -> Result<Point> {
        Ok(self.codec.decode(hash)?.center())
    }

    pub fn to_bbox(&self, hash: &GeoHash) -> Result<BoundingBox> {
        self.codec.decode(hash)
    }

    /// Cells covering the rectangle between two corner cells.
    /// See [`tiling::geohashes_in`].
    pub fn geohashes_in(&self, north_east: &GeoHash, south_west: &GeoHash) -> Result<Vec<GeoHash>> {
        tiling::geohashes_in(&self.codec, &self.config, north_east, south_west)
    }

    /// Ancestor layers of a set of same-precision cells.
    /// See [`hierarchy::predecessors`].
    pub fn predecessors(&self, cells: &[GeoHash]) -> Result<Vec<Vec<GeoHash>>> {
        hierarchy::predecessors(cells)
    }

    /// Viewport share of every cell. See [`weights::weights`].
    pub fn weights(
        &self,
        cells: &[GeoHash],
        north_east: &GeoHash,
        south_west: &GeoHash,
    ) -> Result<Vec<f64>> {
        weights::weights(&self.codec, &self.config, cells, north_east, south_west)
    }

    /// Short visiting order over `cells` using the configured metric.
    /// See [`path::shortest_path`].
    pub fn shortest_path(&self, cells: &[GeoHash]) -> Result<CellPath> {
        path::shortest_path(&self.codec, self.config.path_metric, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::spatial::DistanceMetric;

    fn cell(hash: &str) -> GeoHash {
        GeoHash::parse(hash).unwrap()
    }

    #[test]
    fn test_encode_all_precisions() -> Result<()> {
        let grid = Grid::new();
        let full = grid.encode_default(60.169909, 24.938385)?;
        assert_eq!(full.as_str(), "ud9wr3xe47zx");

        for p in 1..=12 {
            let precision = Precision::new(p)?;
            assert_eq!(
                grid.encode(60.169909, 24.938385, precision)?,
                full.round(precision)
            );
        }
        Ok(())
    }

    #[test]
    fn test_encode_default_precision_from_config() -> Result<()> {
        let grid = Grid::with_config(GridConfig::default().with_default_precision(5))?;
        assert_eq!(grid.encode_default(60.169909, 24.938385)?.as_str(), "ud9wr");
        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<()> {
        let grid = Grid::new();

        let hash = cell("ud9wr3xe");
        assert_eq!(grid.north_of(&hash)?, cell("ud9wr3xs"));
        assert_eq!(grid.south_of(&hash)?, cell("ud9wr3xd"));
        assert_eq!(grid.west_of(&hash)?, cell("ud9wr3x7"));
        assert_eq!(grid.east_of(&hash)?, cell("ud9wr3xg"));

        let hash = cell("ud9wr3x");
        assert_eq!(grid.north_of(&hash)?, cell("ud9wr3z"));
        assert_eq!(grid.south_of(&hash)?, cell("ud9wr3r"));
        assert_eq!(grid.west_of(&hash)?, cell("ud9wr3w"));
        assert_eq!(grid.east_of(&hash)?, cell("ud9wr98"));
        Ok(())
    }

    #[test]
    fn test_neighbor_round_trip() -> Result<()> {
        let grid = Grid::new();
        for hash in ["ud9wr3xe47zx", "ud9wr3x", "u33dbf", "gcpvj0du"] {
            let hash = cell(hash);
            assert_eq!(grid.south_of(&grid.north_of(&hash)?)?, hash);
            assert_eq!(grid.west_of(&grid.east_of(&hash)?)?, hash);
        }
        Ok(())
    }

    #[test]
    fn test_center_and_bbox() -> Result<()> {
        let grid = Grid::new();
        let hash = cell("ud9wr3xe4");

        let (lat, lng) = grid.to_lat_lng(&hash)?;
        assert!((lat - 60.169909).abs() < 1e-3);
        assert!((lng - 24.938385).abs() < 1e-3);

        let bbox = grid.to_bbox(&hash)?;
        assert!(bbox.south < lat && lat < bbox.north);
        assert!(bbox.west < lng && lng < bbox.east);
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GridConfig::default().with_max_tiles(0);
        assert!(matches!(
            Grid::with_config(config),
            Err(GridError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_path_uses_configured_metric() -> Result<()> {
        let cells = vec![cell("ud9wr3xe"), cell("ud9wr3xg")];

        let haversine = Grid::new().shortest_path(&cells)?;
        let euclidean = Grid::with_config(
            GridConfig::default().with_path_metric(DistanceMetric::Euclidean),
        )?
        .shortest_path(&cells)?;

        assert_eq!(haversine.cells, euclidean.cells);
        // meters vs degrees
        assert!(haversine.cost > 1.0);
        assert!(euclidean.cost < 1.0);
        Ok(())
    }

    #[test]
    fn test_grid_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
