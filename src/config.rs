//! Grid configuration
//!
//! Serializable settings for the grid algorithms, loadable from JSON or
//! (with the `toml` feature) TOML. Every field has a default, so partial
//! documents are fine.

use crate::error::{GridError, Result};
use crate::spatial::{DistanceMetric, EARTH_RADIUS_KM};
use crate::types::{MAX_PRECISION, Precision};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for [`Grid`](crate::Grid).
///
/// # Example
///
/// ```rust
/// use spatio_geohash::GridConfig;
/// use spatio_geohash::spatial::DistanceMetric;
///
/// let json = r#"{
///     "default_precision": 9,
///     "path_metric": "geodesic"
/// }"#;
/// let config = GridConfig::from_json_str(json).unwrap();
/// assert_eq!(config.default_precision, 9);
/// assert_eq!(config.path_metric, DistanceMetric::Geodesic);
/// assert_eq!(config.max_tiles, GridConfig::default().max_tiles);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Precision used when encoding without an explicit precision (1-12, default: 12)
    #[serde(default = "GridConfig::default_precision")]
    pub default_precision: usize,

    /// Upper bound on steps for a single column or row walk while tiling
    #[serde(default = "GridConfig::default_max_tiling_steps")]
    pub max_tiling_steps: usize,

    /// Upper bound on the number of cells a tiling may produce
    #[serde(default = "GridConfig::default_max_tiles")]
    pub max_tiles: usize,

    /// Sphere radius used by the viewport area approximation
    #[serde(default = "GridConfig::default_earth_radius_km")]
    pub earth_radius_km: f64,

    /// Metric for nearest-neighbor selection and path cost
    #[serde(default)]
    pub path_metric: DistanceMetric,
}

impl GridConfig {
    const fn default_precision() -> usize {
        MAX_PRECISION
    }

    const fn default_max_tiling_steps() -> usize {
        4096
    }

    const fn default_max_tiles() -> usize {
        1_000_000
    }

    const fn default_earth_radius_km() -> f64 {
        EARTH_RADIUS_KM
    }

    pub fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision;
        self
    }

    pub fn with_max_tiling_steps(mut self, steps: usize) -> Self {
        self.max_tiling_steps = steps;
        self
    }

    pub fn with_max_tiles(mut self, tiles: usize) -> Self {
        self.max_tiles = tiles;
        self
    }

    pub fn with_earth_radius_km(mut self, radius_km: f64) -> Self {
        self.earth_radius_km = radius_km;
        self
    }

    pub fn with_path_metric(mut self, metric: DistanceMetric) -> Self {
        self.path_metric = metric;
        self
    }

    /// Default precision as a validated [`Precision`].
    pub fn precision(&self) -> Result<Precision> {
        Precision::new(self.default_precision)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&self.default_precision) {
            return Err(GridError::InvalidConfig(format!(
                "default_precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.default_precision
            )));
        }

        if self.max_tiling_steps == 0 {
            return Err(GridError::InvalidConfig(
                "max_tiling_steps must be greater than zero".into(),
            ));
        }

        if self.max_tiles == 0 {
            return Err(GridError::InvalidConfig(
                "max_tiles must be greater than zero".into(),
            ));
        }

        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "earth_radius_km must be finite and positive, got {}",
                self.earth_radius_km
            )));
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` or `.toml` file, chosen by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml_str(&contents),
            other => Err(GridError::InvalidConfig(format!(
                "unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
            max_tiling_steps: Self::default_max_tiling_steps(),
            max_tiles: Self::default_max_tiles(),
            earth_radius_km: Self::default_earth_radius_km(),
            path_metric: DistanceMetric::default(),
        }
    }
}
