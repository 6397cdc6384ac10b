//! Configuration for formatting a velocity field.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use velmap_common::{VelmapError, VelmapResult};

use crate::wire::{REF_TIME_FORMAT, REF_TIME_PLACEHOLDER};

/// How to read the grid and what to put in record headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Name of the latitude dimension/coordinate.
    pub lat_dim: String,

    /// Name of the longitude dimension/coordinate.
    pub lon_dim: String,

    /// Velocity units. When unset, taken from the variables' `units`
    /// attributes, which must agree.
    pub units: Option<String>,

    /// Reference time written to record headers. When unset, a fixed
    /// placeholder is used so output stays deterministic.
    pub ref_time: Option<NaiveDateTime>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            lat_dim: "latitude".to_string(),
            lon_dim: "longitude".to_string(),
            units: None,
            ref_time: None,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lat_dim(mut self, lat_dim: impl Into<String>) -> Self {
        self.lat_dim = lat_dim.into();
        self
    }

    pub fn with_lon_dim(mut self, lon_dim: impl Into<String>) -> Self {
        self.lon_dim = lon_dim.into();
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_ref_time(mut self, ref_time: NaiveDateTime) -> Self {
        self.ref_time = Some(ref_time);
        self
    }

    /// Load configuration from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> VelmapResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> VelmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VelmapError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> VelmapResult<()> {
        if self.lat_dim.is_empty() || self.lon_dim.is_empty() {
            return Err(VelmapError::InvalidConfig(
                "lat_dim and lon_dim must not be empty".to_string(),
            ));
        }

        if self.lat_dim == self.lon_dim {
            return Err(VelmapError::InvalidConfig(format!(
                "lat_dim and lon_dim must differ, both are '{}'",
                self.lat_dim
            )));
        }

        Ok(())
    }

    /// The header `refTime` string.
    pub fn ref_time_string(&self) -> String {
        match self.ref_time {
            Some(t) => t.format(REF_TIME_FORMAT).to_string(),
            None => REF_TIME_PLACEHOLDER.to_string(),
        }
    }
}
