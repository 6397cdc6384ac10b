//! Grid geometry inferred from coordinate vectors.

use crate::{BoundingBox, VelmapError, VelmapResult};
use serde::{Deserialize, Serialize};

/// Geometry of a regular (equirectangular) lat/lon grid.
///
/// Derived from the coordinate vectors on every call; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of points in X (longitude) direction
    pub nx: usize,
    /// Number of points in Y (latitude) direction
    pub ny: usize,
    /// Grid resolution in X direction (degrees)
    pub dx: f64,
    /// Grid resolution in Y direction (degrees)
    pub dy: f64,
    /// Extent of the coordinate vectors
    pub bbox: BoundingBox,
}

impl GridSpec {
    /// Infer grid geometry from latitude and longitude coordinate vectors.
    ///
    /// Spacing is `(max - min) / (n - 1)` on each axis. Axes with fewer than
    /// two points fail with [`VelmapError::DegenerateAxis`], and any NaN or
    /// infinite coordinate fails with [`VelmapError::NonFiniteCoordinate`].
    /// The longitude axis is checked first.
    pub fn from_coords(
        lat: &[f64],
        lon: &[f64],
        lat_dim: &str,
        lon_dim: &str,
    ) -> VelmapResult<Self> {
        let (min_lon, max_lon) = axis_range(lon_dim, lon)?;
        let (min_lat, max_lat) = axis_range(lat_dim, lat)?;
        let bbox = BoundingBox::new(min_lon, min_lat, max_lon, max_lat);

        let nx = lon.len();
        let ny = lat.len();

        Ok(Self {
            nx,
            ny,
            dx: bbox.width() / (nx - 1) as f64,
            dy: bbox.height() / (ny - 1) as f64,
            bbox,
        })
    }

    /// Northernmost latitude (first row after orientation).
    pub fn la1(&self) -> f64 {
        self.bbox.max_lat
    }

    /// Southernmost latitude.
    pub fn la2(&self) -> f64 {
        self.bbox.min_lat
    }

    /// Westernmost longitude.
    pub fn lo1(&self) -> f64 {
        self.bbox.min_lon
    }

    /// Easternmost longitude.
    pub fn lo2(&self) -> f64 {
        self.bbox.max_lon
    }
}

/// Validate one coordinate vector and return its (min, max).
fn axis_range(axis: &str, coords: &[f64]) -> VelmapResult<(f64, f64)> {
    if coords.len() < 2 {
        return Err(VelmapError::DegenerateAxis {
            axis: axis.to_string(),
            len: coords.len(),
        });
    }

    if let Some(index) = coords.iter().position(|v| !v.is_finite()) {
        return Err(VelmapError::NonFiniteCoordinate {
            axis: axis.to_string(),
            index,
        });
    }

    Ok(coords
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
}

/// A (latitude, longitude) pair, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Arithmetic mean of each coordinate vector, taken independently.
    ///
    /// This is not an area-weighted centroid. Expects vectors already
    /// accepted by [`GridSpec::from_coords`].
    pub fn mean_of(lat: &[f64], lon: &[f64]) -> Self {
        Self(mean(lat), mean(lon))
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// True when no adjacent pair is non-decreasing (north to south).
///
/// Vectors with fewer than two points are trivially descending.
pub fn is_strictly_descending(coords: &[f64]) -> bool {
    !coords.windows(2).any(|w| w[1] - w[0] >= 0.0)
}
