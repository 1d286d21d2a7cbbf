//! Path ordering: a short visiting order over an unordered bag of cells.
//!
//! Greedy nearest-neighbor tour over cell centers. The tour starts at the
//! lexicographically smallest cell and always moves to the closest unvisited
//! cell; equal distances go to the smaller cell string, then to the earlier
//! input position. Identical input therefore always yields identical output.

use crate::codec::Codec;
use crate::error::{GridError, Result};
use crate::spatial::{DistanceMetric, distance_between};
use crate::types::GeoHash;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Visiting order over a set of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellPath {
    /// Every input cell exactly once, in visiting order
    pub cells: Vec<GeoHash>,
    /// Sum of leg lengths between consecutive cell centers (meters for
    /// geographic metrics, degrees for `Euclidean`)
    pub cost: f64,
}

impl CellPath {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Order `cells` into a short path.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::GeoHash;
/// use spatio_geohash::codec::Base32Codec;
/// use spatio_geohash::compute::path::shortest_path;
/// use spatio_geohash::spatial::DistanceMetric;
///
/// let cells: Vec<GeoHash> = ["ud9wr3xg", "ud9wr3x7", "ud9wr3xe"]
///     .iter()
///     .map(|h| h.parse().unwrap())
///     .collect();
///
/// let path = shortest_path(&Base32Codec, DistanceMetric::Haversine, &cells).unwrap();
/// let order: Vec<&str> = path.cells.iter().map(|h| h.as_str()).collect();
/// assert_eq!(order, ["ud9wr3x7", "ud9wr3xe", "ud9wr3xg"]);
/// ```
pub fn shortest_path<C: Codec>(
    codec: &C,
    metric: DistanceMetric,
    cells: &[GeoHash],
) -> Result<CellPath> {
    let centers = cells
        .iter()
        .map(|cell| codec.decode(cell).map(|bbox| bbox.center()))
        .collect::<Result<Vec<Point>>>()?;

    let start = (0..cells.len())
        .min_by(|&a, &b| cells[a].cmp(&cells[b]))
        .ok_or(GridError::EmptyInput("shortest path requires at least one cell"))?;

    let mut visited = vec![false; cells.len()];
    let mut order = Vec::with_capacity(cells.len());
    let mut cost = 0.0;

    visited[start] = true;
    order.push(start);
    let mut current = start;

    while let Some((next, distance)) = nearest_unvisited(cells, &centers, &visited, current, metric)
    {
        visited[next] = true;
        order.push(next);
        cost += distance;
        current = next;
    }

    log::debug!(
        "Ordered {} cells starting at {}, cost {:.3}",
        cells.len(),
        cells[start],
        cost
    );

    Ok(CellPath {
        cells: order.into_iter().map(|i| cells[i].clone()).collect(),
        cost,
    })
}

/// Total length of visiting `cells` in the given order.
pub fn path_cost<C: Codec>(codec: &C, metric: DistanceMetric, cells: &[GeoHash]) -> Result<f64> {
    let centers = cells
        .iter()
        .map(|cell| codec.decode(cell).map(|bbox| bbox.center()))
        .collect::<Result<Vec<Point>>>()?;

    Ok(centers
        .windows(2)
        .map(|pair| distance_between(&pair[0], &pair[1], metric))
        .sum())
}

fn nearest_unvisited(
    cells: &[GeoHash],
    centers: &[Point],
    visited: &[bool],
    current: usize,
    metric: DistanceMetric,
) -> Option<(usize, f64)> {
    (0..cells.len())
        .filter(|&i| !visited[i])
        .map(|i| (i, distance_between(&centers[current], &centers[i], metric)))
        .min_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| cells[a.0].cmp(&cells[b.0]))
        })
}
