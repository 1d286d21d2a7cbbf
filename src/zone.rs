//! Zone identifiers: globally scoped names for geohash cells.
//!
//! A zone is the cell string under the `g` namespace, e.g. `g:ud8q81`.
//! Coarser zones are simply shorter cells, so `g:u` contains `g:ud8q81`.

use crate::error::{GridError, Result};
use crate::types::GeoHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace token of geohash zones.
pub const ZONE_NAMESPACE: &str = "g";

/// Namespaced identifier derived 1:1 from a [`GeoHash`].
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{GeoHash, GeoZone};
///
/// let hash: GeoHash = "ud9wr".parse().unwrap();
/// let zone = GeoZone::from(&hash);
/// assert_eq!(zone.as_str(), "g:ud9wr");
/// assert_eq!(zone.geohash(), hash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoZone(String);

impl GeoZone {
    pub fn new(hash: &GeoHash) -> Self {
        Self(format!("{}:{}", ZONE_NAMESPACE, hash))
    }

    /// Parse an identifier, requiring the `g` namespace and a valid cell.
    pub fn parse(zone: &str) -> Result<Self> {
        let (namespace, reference) = zone
            .split_once(':')
            .ok_or_else(|| GridError::InvalidZone(format!("'{}' has no namespace", zone)))?;

        if namespace != ZONE_NAMESPACE {
            return Err(GridError::InvalidZone(format!(
                "'{}' is not in the '{}' namespace",
                zone, ZONE_NAMESPACE
            )));
        }

        let hash = GeoHash::parse(reference)
            .map_err(|e| GridError::InvalidZone(format!("'{}': {}", zone, e)))?;

        Ok(Self::new(&hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reference part of the identifier, the cell itself.
    pub fn geohash(&self) -> GeoHash {
        GeoHash::from_codec(self.0[ZONE_NAMESPACE.len() + 1..].to_string())
    }
}

pub fn to_zone(hash: &GeoHash) -> GeoZone {
    GeoZone::new(hash)
}

pub fn from_zone(zone: &GeoZone) -> GeoHash {
    zone.geohash()
}

impl From<&GeoHash> for GeoZone {
    fn from(hash: &GeoHash) -> Self {
        Self::new(hash)
    }
}

impl From<GeoHash> for GeoZone {
    fn from(hash: GeoHash) -> Self {
        Self::new(&hash)
    }
}

impl From<&GeoZone> for GeoHash {
    fn from(zone: &GeoZone) -> Self {
        zone.geohash()
    }
}

impl fmt::Display for GeoZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GeoZone {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GeoZone {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<GeoZone> for String {
    fn from(value: GeoZone) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASHES: &[&str] = &[
        "ud9wr3xe47zx",
        "ud9wr3xe47z",
        "ud9wr3xe47",
        "ud9wr3xe4",
        "ud9wr3xe",
        "ud9wr3x",
        "ud9wr3",
        "ud9wr",
        "ud9w",
        "ud9",
        "ud",
        "u",
    ];

    #[test]
    fn test_zone_bijection() -> Result<()> {
        for text in HASHES {
            let hash = GeoHash::parse(*text)?;
            let zone = to_zone(&hash);

            assert_eq!(zone.as_str(), format!("g:{}", text));
            assert_eq!(from_zone(&zone), hash);
        }
        Ok(())
    }

    #[test]
    fn test_zone_parse() -> Result<()> {
        let zone: GeoZone = "g:ud8q81".parse()?;
        assert_eq!(zone.geohash().as_str(), "ud8q81");

        assert!(GeoZone::parse("ud8q81").is_err());
        assert!(GeoZone::parse("h:ud8q81").is_err());
        assert!(GeoZone::parse("g:").is_err());
        assert!(GeoZone::parse("g:ud8a").is_err());
        Ok(())
    }

    #[test]
    fn test_zone_serde() {
        let zone: GeoZone = serde_json::from_str("\"g:ud9\"").unwrap();
        assert_eq!(serde_json::to_string(&zone).unwrap(), "\"g:ud9\"");
        assert!(serde_json::from_str::<GeoZone>("\"x:ud9\"").is_err());
    }
}
