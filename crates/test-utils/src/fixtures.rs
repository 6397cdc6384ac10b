//! Common test fixtures for velocity-map tests.
//!
//! This module provides pre-defined grids and names that represent common
//! scenarios when formatting velocity fields.

/// Common variable and axis names.
pub mod names {
    /// CF-style dimension names (the formatter's defaults)
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";

    /// Short dimension names used by many ocean models
    pub const LAT: &str = "lat";
    pub const LON: &str = "lon";

    /// Surface current components
    pub const U_CURRENT: &str = "uo";
    pub const V_CURRENT: &str = "vo";

    /// 10m wind components
    pub const U_WIND: &str = "u10";
    pub const V_WIND: &str = "v10";
}

/// Common grid specifications for testing.
pub mod grid {
    /// Grid specification for testing.
    #[derive(Debug, Clone, Copy)]
    pub struct GridSpec {
        pub nx: usize,
        pub ny: usize,
        pub min_lon: f64,
        pub max_lon: f64,
        pub min_lat: f64,
        pub max_lat: f64,
    }

    impl GridSpec {
        /// Returns the total number of grid cells.
        pub fn size(&self) -> usize {
            self.nx * self.ny
        }

        /// Returns the spacing in degrees, `(max - min) / (n - 1)`.
        pub fn resolution(&self) -> (f64, f64) {
            let dx = (self.max_lon - self.min_lon) / (self.nx - 1) as f64;
            let dy = (self.max_lat - self.min_lat) / (self.ny - 1) as f64;
            (dx, dy)
        }

        /// Latitudes ascending from south to north.
        pub fn lat_ascending(&self) -> Vec<f64> {
            let (_, dy) = self.resolution();
            crate::create_coords(self.min_lat, dy, self.ny)
        }

        /// Latitudes descending from north to south.
        pub fn lat_descending(&self) -> Vec<f64> {
            let (_, dy) = self.resolution();
            crate::create_coords(self.max_lat, -dy, self.ny)
        }

        /// Longitudes ascending from west to east.
        pub fn lon(&self) -> Vec<f64> {
            let (dx, _) = self.resolution();
            crate::create_coords(self.min_lon, dx, self.nx)
        }
    }

    /// Global 1 degree grid
    pub const GLOBAL_1DEG: GridSpec = GridSpec {
        nx: 360,
        ny: 181,
        min_lon: 0.0,
        max_lon: 359.0,
        min_lat: -90.0,
        max_lat: 90.0,
    };

    /// Norwegian coast at 0.5 degree
    pub const NORWAY_COAST: GridSpec = GridSpec {
        nx: 21,
        ny: 13,
        min_lon: 0.0,
        max_lon: 10.0,
        min_lat: 60.0,
        max_lat: 66.0,
    };

    /// Simple 3x3 test grid
    pub const SIMPLE_3X3: GridSpec = GridSpec {
        nx: 3,
        ny: 3,
        min_lon: 0.0,
        max_lon: 20.0,
        min_lat: 10.0,
        max_lat: 30.0,
    };
}

/// Common config documents for testing.
pub mod configs {
    /// Short dimension names and explicit units
    pub const SHORT_DIMS_YAML: &str = "lat_dim: lat\nlon_dim: lon\nunits: m/s\n";

    /// Fixed reference time
    pub const REF_TIME_YAML: &str = "ref_time: 2024-01-15T12:00:00\n";

    /// Same name for both axes (invalid)
    pub const SAME_DIMS_YAML: &str = "lat_dim: x\nlon_dim: x\n";
}
