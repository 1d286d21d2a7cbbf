//! Geohash grid toolkit: neighbor navigation, rectangle tiling, prefix
//! hierarchies, viewport weighting and cell path ordering.
//!
//! ```rust
//! use spatio_geohash::{Grid, Precision};
//!
//! let grid = Grid::new();
//!
//! let ne = grid.encode(60.1799, 24.9484, Precision::new(6)?)?;
//! let sw = grid.encode(60.1599, 24.9284, Precision::new(6)?)?;
//!
//! let cells = grid.geohashes_in(&ne, &sw)?;
//! let layers = grid.predecessors(&cells)?;
//! let weights = grid.weights(&cells, &ne, &sw)?;
//! let path = grid.shortest_path(&cells)?;
//!
//! assert_eq!(layers.len(), 5);
//! assert_eq!(weights.len(), cells.len());
//! assert_eq!(path.len(), cells.len());
//! # Ok::<(), spatio_geohash::GridError>(())
//! ```

pub mod codec;
pub mod compute;
pub mod config;
pub mod error;
pub mod grid;
pub mod spatial;
pub mod types;
pub mod zone;

pub use codec::{Base32Codec, Codec};
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::{CellPath, Grid};
pub use types::{BoundingBox, Direction, GeoHash, GeoHashes, MAX_PRECISION, Precision};
pub use zone::{GeoZone, from_zone, to_zone};

pub use spatial::{DistanceMetric, distance_between};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        BoundingBox, CellPath, Direction, GeoHash, GeoZone, Grid, GridConfig, GridError,
        Precision, Result,
    };

    pub use crate::codec::{Base32Codec, Codec};

    pub use crate::spatial::DistanceMetric;

    pub use geo::Point;
}
