//! GeoJSON conversion for cells and weighted cell sets.

use crate::codec::Codec;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::types::{BoundingBox, GeoHash};
use crate::zone::GeoZone;
use geojson::{Feature, FeatureCollection, Geometry, Value, feature::Id};
use serde_json::Map;

/// Closed exterior ring of a bounding box, counter-clockwise from south-west.
fn bbox_to_geometry(bbox: &BoundingBox) -> Geometry {
    let ring = vec![
        vec![bbox.west, bbox.south],
        vec![bbox.east, bbox.south],
        vec![bbox.east, bbox.north],
        vec![bbox.west, bbox.north],
        vec![bbox.west, bbox.south],
    ];

    Geometry::new(Value::Polygon(vec![ring]))
}

/// Converts one cell into a polygon feature with `geohash` and `zone` properties.
pub fn cell_to_feature<C: Codec>(grid: &Grid<C>, hash: &GeoHash) -> Result<Feature> {
    let bbox = grid.to_bbox(hash)?;

    let mut properties = Map::new();
    properties.insert("geohash".into(), hash.as_str().into());
    properties.insert("zone".into(), GeoZone::new(hash).as_str().into());

    Ok(Feature {
        bbox: None,
        geometry: Some(bbox_to_geometry(&bbox)),
        id: Some(Id::String(hash.to_string())),
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Converts cells into a feature collection. With `weights`, each feature
/// also carries a `weight` property; the slices must be the same length.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{GeoHash, Grid};
/// use spatio_geohash::compute::geojson::to_feature_collection;
///
/// let grid = Grid::new();
/// let cells: Vec<GeoHash> = vec!["ud9wr3".parse().unwrap(), "ud9wr6".parse().unwrap()];
///
/// let collection = to_feature_collection(&grid, &cells, Some(&[0.25, 0.75][..])).unwrap();
/// assert_eq!(collection.features.len(), 2);
/// ```
pub fn to_feature_collection<C: Codec>(
    grid: &Grid<C>,
    cells: &[GeoHash],
    weights: Option<&[f64]>,
) -> Result<FeatureCollection> {
    if let Some(weights) = weights
        && weights.len() != cells.len()
    {
        return Err(GridError::InvalidInput(format!(
            "{} weights given for {} cells",
            weights.len(),
            cells.len()
        )));
    }

    let mut features = Vec::with_capacity(cells.len());
    for (idx, hash) in cells.iter().enumerate() {
        let mut feature = cell_to_feature(grid, hash)?;
        if let (Some(weights), Some(properties)) = (weights, feature.properties.as_mut()) {
            properties.insert("weight".into(), weights[idx].into());
        }
        features.push(feature);
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
