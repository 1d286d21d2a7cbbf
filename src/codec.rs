//! Codec boundary: base-32 geohash encode, decode and adjacency.
//!
//! The grid algorithms only talk to the [`Codec`] trait. [`Base32Codec`]
//! delegates the bit interleaving to the `geohash` crate.

use crate::compute::validation::validate_geographic_point;
use crate::error::Result;
use crate::types::{BoundingBox, Direction, GeoHash, Precision};
use geo::Point;

/// Encode/decode/adjacent primitives over geohash cells.
pub trait Codec {
    /// Encode a `(lng, lat)` point into a cell of `precision` characters.
    fn encode(&self, point: Point, precision: Precision) -> Result<GeoHash>;

    /// Bounding box of a cell.
    fn decode(&self, hash: &GeoHash) -> Result<BoundingBox>;

    /// The cell sharing an edge with `hash` in `direction`, at the same precision.
    fn adjacent(&self, hash: &GeoHash, direction: Direction) -> Result<GeoHash>;
}

/// Classic geohash codec (alternating longitude/latitude bits, base-32 alphabet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base32Codec;

impl Codec for Base32Codec {
    fn encode(&self, point: Point, precision: Precision) -> Result<GeoHash> {
        validate_geographic_point(&point)?;
        let hash = geohash::encode(point.into(), precision.get())?;
        Ok(GeoHash::from_codec(hash))
    }

    fn decode(&self, hash: &GeoHash) -> Result<BoundingBox> {
        let rect = geohash::decode_bbox(hash.as_str())?;
        Ok(BoundingBox::from(rect))
    }

    fn adjacent(&self, hash: &GeoHash, direction: Direction) -> Result<GeoHash> {
        let neighbor = geohash::neighbor(hash.as_str(), direction.into())?;
        Ok(GeoHash::from_codec(neighbor))
    }
}
