//! Grid algorithms, validation, and GeoJSON conversion.
//!
//! Every algorithm takes the codec explicitly, so the same code runs against
//! the base-32 codec or any other [`Codec`](crate::codec::Codec).

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod hierarchy;
pub mod path;
pub mod tiling;
pub mod validation;
pub mod weights;
