//! Distance and area helpers leveraging the geo crate.
//!
//! Point distances go through the `geo` metric spaces. The planar box area
//! used for viewport weighting is a deliberately simple approximation, see
//! [`approximate_area_km2`].

use crate::types::BoundingBox;
use geo::{Distance, Euclidean, Geodesic, Haversine, Point, Rhumb};
use serde::{Deserialize, Serialize};

/// Mean equatorial radius used by the area approximation, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// Metric used to measure legs between cell centers.
///
/// The geographic metrics return meters. `Euclidean` measures straight
/// lines in degrees, which is cheap but distorts east-west legs away from
/// the equator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Great circle on a mean-radius sphere
    #[default]
    Haversine,
    /// Ellipsoidal shortest path (Karney)
    Geodesic,
    /// Constant-bearing line
    Rhumb,
    /// Planar distance in degrees
    Euclidean,
}

/// Distance between two `(lng, lat)` points under `metric`.
///
/// ```rust
/// use geo::Point;
/// use spatio_geohash::spatial::{distance_between, DistanceMetric};
///
/// // two points on the same parallel, about 38 m apart
/// let west = Point::new(24.93827, 60.16996);
/// let east = Point::new(24.93896, 60.16996);
///
/// let meters = distance_between(&west, &east, DistanceMetric::Haversine);
/// assert!(meters > 30.0 && meters < 45.0);
/// assert!(distance_between(&west, &east, DistanceMetric::Euclidean) < 0.001);
/// ```
pub fn distance_between(point1: &Point, point2: &Point, metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Haversine => Haversine.distance(*point1, *point2),
        DistanceMetric::Geodesic => Geodesic.distance(*point1, *point2),
        DistanceMetric::Rhumb => Rhumb.distance(*point1, *point2),
        DistanceMetric::Euclidean => Euclidean.distance(*point1, *point2),
    }
}

/// Great-circle distance on a sphere of `radius_km`, in kilometers.
///
/// Arguments are `(lat, lng)` pairs in degrees. Uses the haversine form,
/// which keeps its precision for centimetre-sized cell edges where the
/// law of cosines rounds to zero.
pub fn arc_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64, radius_km: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let half_dphi = (lat2 - lat1).to_radians() / 2.0;
    let half_dlambda = (lng2 - lng1).to_radians() / 2.0;

    let h = half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2);

    // h can drift just past 1.0 for antipodal points
    2.0 * h.sqrt().min(1.0).asin() * radius_km
}

/// Flat-rectangle area of a box in square kilometers: the length of its
/// western edge times the length of its southern edge.
///
/// Good enough at city or regional scale, increasingly wrong near the poles
/// and for very large boxes. Inverted or empty boxes have zero area.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::BoundingBox;
/// use spatio_geohash::spatial::{approximate_area_km2, EARTH_RADIUS_KM};
///
/// let one_degree = BoundingBox::new(1.0, 1.0, 0.0, 0.0);
/// let area = approximate_area_km2(&one_degree, EARTH_RADIUS_KM);
/// assert!((area - 12_391.0).abs() < 10.0);
/// ```
pub fn approximate_area_km2(bbox: &BoundingBox, radius_km: f64) -> f64 {
    if bbox.north <= bbox.south || bbox.east <= bbox.west {
        return 0.0;
    }

    let height = arc_distance_km(bbox.south, bbox.west, bbox.north, bbox.west, radius_km);
    let width = arc_distance_km(bbox.south, bbox.west, bbox.south, bbox.east, radius_km);
    height * width
}
