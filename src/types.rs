//! Core value types: geohash cells, precisions, bounding boxes and directions.
//!
//! All types are immutable values. [`GeoHash`] validates its text on
//! construction so the rest of the crate can rely on the base-32 alphabet
//! and the 1..=12 length range.
use crate::error::{GridError, Result};
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base-32 alphabet used by geohash strings.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest geohash the codec produces.
pub const MAX_PRECISION: usize = 12;

/// Geohash precision, the character length of a cell (1..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Precision(u8);

impl Precision {
    /// Finest precision supported by the codec.
    pub const MAX: Precision = Precision(MAX_PRECISION as u8);

    /// Coarsest precision, a single character cell.
    pub const MIN: Precision = Precision(1);

    /// Create a precision, rejecting values outside of 1..=12.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatio_geohash::Precision;
    ///
    /// assert_eq!(Precision::new(8).unwrap().get(), 8);
    /// assert!(Precision::new(0).is_err());
    /// assert!(Precision::new(13).is_err());
    /// ```
    pub fn new(precision: usize) -> Result<Self> {
        if (1..=MAX_PRECISION).contains(&precision) {
            Ok(Self(precision as u8))
        } else {
            Err(GridError::InvalidPrecision(precision))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<usize> for Precision {
    type Error = GridError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Precision> for usize {
    fn from(value: Precision) -> Self {
        value.get()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A geohash cell.
///
/// The string is a byte-exact prefix of every finer cell inside it, which is
/// what [`GeoHash::round`] and the hierarchy builder rely on.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{GeoHash, Precision};
///
/// let hash: GeoHash = "ud9wr3xe47zx".parse().unwrap();
/// assert_eq!(hash.precision().get(), 12);
/// assert_eq!(hash.round(Precision::new(5).unwrap()).as_str(), "ud9wr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoHash(String);

/// Unordered bag of cells.
pub type GeoHashes = Vec<GeoHash>;

impl GeoHash {
    /// Parse and validate a geohash string.
    pub fn parse(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();

        if hash.is_empty() {
            return Err(GridError::InvalidGeohash("geohash cannot be empty".into()));
        }

        if hash.len() > MAX_PRECISION {
            return Err(GridError::InvalidGeohash(format!(
                "'{}' is longer than {} characters",
                hash, MAX_PRECISION
            )));
        }

        if let Some(c) = hash.bytes().find(|b| !ALPHABET.contains(b)) {
            return Err(GridError::InvalidGeohash(format!(
                "'{}' contains '{}' outside of the base-32 alphabet",
                hash, c as char
            )));
        }

        Ok(Self(hash))
    }

    /// Wrap text produced by the codec. The codec only emits valid cells.
    pub(crate) fn from_codec(hash: String) -> Self {
        debug_assert!(Self::parse(hash.as_str()).is_ok());
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Character length of the cell.
    pub fn precision(&self) -> Precision {
        Precision(self.0.len() as u8)
    }

    /// Truncate to `precision`. Rounding to a precision at or above the
    /// cell's own length returns the cell unchanged.
    pub fn round(&self, precision: Precision) -> GeoHash {
        if self.0.len() <= precision.get() {
            return self.clone();
        }

        Self(self.0[..precision.get()].to_string())
    }

    /// The enclosing cell one level coarser, `None` for single character cells.
    pub fn parent(&self) -> Option<GeoHash> {
        if self.0.len() <= 1 {
            return None;
        }

        Some(Self(self.0[..self.0.len() - 1].to_string()))
    }

    /// The 32 cells one level finer, in alphabet order.
    /// Empty when the cell is already at maximum precision.
    pub fn children(&self) -> Vec<GeoHash> {
        if self.0.len() >= MAX_PRECISION {
            return Vec::new();
        }

        ALPHABET
            .iter()
            .map(|&c| {
                let mut child = String::with_capacity(self.0.len() + 1);
                child.push_str(&self.0);
                child.push(c as char);
                Self(child)
            })
            .collect()
    }

    /// True when `self` is a strict prefix of `other`.
    pub fn is_ancestor_of(&self, other: &GeoHash) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GeoHash {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for GeoHash {
    type Error = GridError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<GeoHash> for String {
    fn from(value: GeoHash) -> Self {
        value.0
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Axis-aligned latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Midpoint of the box as a `(lng, lat)` point.
    pub fn center(&self) -> Point {
        Point::new(
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Clip against `other`. `None` when the boxes share no area.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatio_geohash::BoundingBox;
    ///
    /// let a = BoundingBox::new(10.0, 10.0, 0.0, 0.0);
    /// let b = BoundingBox::new(15.0, 15.0, 5.0, 5.0);
    /// assert_eq!(a.intersection(&b), Some(BoundingBox::new(10.0, 10.0, 5.0, 5.0)));
    ///
    /// let far = BoundingBox::new(30.0, 30.0, 20.0, 20.0);
    /// assert!(a.intersection(&far).is_none());
    /// ```
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let clipped = BoundingBox {
            north: self.north.min(other.north),
            east: self.east.min(other.east),
            south: self.south.max(other.south),
            west: self.west.max(other.west),
        };

        if clipped.north > clipped.south && clipped.east > clipped.west {
            Some(clipped)
        } else {
            None
        }
    }

    /// Inclusive containment test, `x` is longitude and `y` latitude.
    pub fn contains(&self, point: &Point) -> bool {
        (self.south..=self.north).contains(&point.y())
            && (self.west..=self.east).contains(&point.x())
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.west, y: self.south },
            geo::coord! { x: self.east, y: self.north },
        )
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        let (min, max) = (rect.min(), rect.max());
        Self {
            north: max.y,
            east: max.x,
            south: min.y,
            west: min.x,
        }
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

/// Cardinal direction for neighbor lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Name used by classic geohash adjacency tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "top",
            Direction::South => "bottom",
            Direction::East => "right",
            Direction::West => "left",
        }
    }
}

impl From<Direction> for geohash::Direction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => geohash::Direction::N,
            Direction::South => geohash::Direction::S,
            Direction::East => geohash::Direction::E,
            Direction::West => geohash::Direction::W,
        }
    }
}
