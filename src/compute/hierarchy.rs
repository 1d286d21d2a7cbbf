//! Prefix hierarchy: coarser layers derived from a set of same-precision cells.

use crate::compute::validation::uniform_precision;
use crate::error::Result;
use crate::types::GeoHash;
use rustc_hash::FxHashSet;

/// All predecessors of `cells`, one layer per coarser precision.
///
/// For input cells of length `L` the result has `L - 1` layers and
/// `layers[r]` holds the distinct prefixes of length `r + 1`, in the order
/// they are first seen.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::GeoHash;
/// use spatio_geohash::compute::hierarchy::predecessors;
///
/// let cells: Vec<GeoHash> = ["ud9w", "ud9x", "ud8b"]
///     .iter()
///     .map(|h| h.parse().unwrap())
///     .collect();
///
/// let layers = predecessors(&cells).unwrap();
/// assert_eq!(layers.len(), 3);
/// assert_eq!(layers[0].len(), 1); // "u"
/// assert_eq!(layers[2].len(), 2); // "ud9", "ud8"
/// ```
pub fn predecessors(cells: &[GeoHash]) -> Result<Vec<Vec<GeoHash>>> {
    let len = uniform_precision(cells, "predecessors require at least one cell")?;
    let mut layers = Vec::with_capacity(len - 1);

    for rank in 1..len {
        let mut index = FxHashSet::default();
        let mut layer = Vec::new();

        for cell in cells {
            let prefix = &cell.as_str()[..rank];
            if index.insert(prefix) {
                layer.push(GeoHash::from_codec(prefix.to_string()));
            }
        }

        layers.push(layer);
    }

    Ok(layers)
}
