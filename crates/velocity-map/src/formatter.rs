//! Formatting a labelled u/v grid into a display payload.

use tracing::{debug, info, warn};
use velmap_common::grid::is_strictly_descending;
use velmap_common::{GridSpec, LabelledGrid, LatLon, VelmapError, VelmapResult};

use crate::config::PlotConfig;
use crate::display::DisplaySink;
use crate::field::WorkingField;
use crate::payload::{merge_options, DisplayOptions, DisplayPayload};
use crate::record::VelocityRecord;
use crate::wire::{VelocityComponent, MISSING_FILL_VALUE};

/// Turns a pair of named velocity variables into a [`DisplayPayload`].
///
/// Holds only configuration, so a single formatter can be shared across
/// threads and reused for any number of grids.
#[derive(Debug, Clone, Default)]
pub struct GridFieldFormatter {
    config: PlotConfig,
}

impl GridFieldFormatter {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Validate and transform `u_var`/`v_var` from `grid`.
    ///
    /// Steps, all on working copies:
    /// 1. check each variable lies on exactly `{lat_dim, lon_dim}` and fill
    ///    missing (NaN or infinite) values with 0
    /// 2. resolve units (override, else matching `units` attributes, else "")
    /// 3. infer spacing and bounds from the coordinate vectors, rejecting
    ///    short axes and non-finite coordinates
    /// 4. flip rows so latitude runs north to south
    /// 5. build the u and v records, in that order
    /// 6. center the map on the mean latitude/longitude, letting `options`
    ///    override any computed key
    pub fn format<G: LabelledGrid + ?Sized>(
        &self,
        grid: &G,
        u_var: &str,
        v_var: &str,
        options: DisplayOptions,
    ) -> VelmapResult<DisplayPayload> {
        self.config.validate()?;
        let lat_dim = self.config.lat_dim.as_str();
        let lon_dim = self.config.lon_dim.as_str();

        let mut u = self.working_field(grid, u_var)?;
        let mut v = self.working_field(grid, v_var)?;

        let units = self.resolve_units(grid, u_var, v_var)?;

        let mut lat = grid
            .coordinate(lat_dim)
            .ok_or_else(|| VelmapError::CoordinateNotFound(lat_dim.to_string()))?
            .to_vec();
        let lon = grid
            .coordinate(lon_dim)
            .ok_or_else(|| VelmapError::CoordinateNotFound(lon_dim.to_string()))?;

        // Bounds do not depend on row order, so geometry is checked first.
        let spec = GridSpec::from_coords(&lat, lon, lat_dim, lon_dim)?;

        // The frontend expects the first row to be the northernmost.
        let reversed = !is_strictly_descending(&lat);
        if reversed {
            debug!(axis = lat_dim, "Latitude not descending, reversing rows");
            lat.reverse();
            u.reverse_rows();
            v.reverse_rows();
        }
        let ref_time = self.config.ref_time_string();

        let records = [
            VelocityRecord::new(
                VelocityComponent::Eastward,
                &units,
                &spec,
                &ref_time,
                u.into_values(),
            ),
            VelocityRecord::new(
                VelocityComponent::Northward,
                &units,
                &spec,
                &ref_time,
                v.into_values(),
            ),
        ];

        let center = LatLon::mean_of(&lat, lon);

        info!(
            u_var = u_var,
            v_var = v_var,
            nx = spec.nx,
            ny = spec.ny,
            dx = spec.dx,
            dy = spec.dy,
            units = %units,
            reversed = reversed,
            "Formatted velocity field"
        );

        Ok(DisplayPayload::new(
            records,
            center,
            merge_options(center, options),
        ))
    }

    /// Format and hand the payload to `sink` in one call.
    ///
    /// Nothing reaches the sink if formatting fails.
    pub fn plot<G, S>(
        &self,
        grid: &G,
        u_var: &str,
        v_var: &str,
        options: DisplayOptions,
        sink: &S,
    ) -> VelmapResult<S::Output>
    where
        G: LabelledGrid + ?Sized,
        S: DisplaySink + ?Sized,
    {
        self.format(grid, u_var, v_var, options)?.display(sink)
    }

    fn working_field<G: LabelledGrid + ?Sized>(
        &self,
        grid: &G,
        name: &str,
    ) -> VelmapResult<WorkingField> {
        let mut field =
            WorkingField::extract(grid, name, &self.config.lat_dim, &self.config.lon_dim)?;

        let filled = field.fill_missing(MISSING_FILL_VALUE);
        if filled > 0 {
            debug!(variable = name, filled = filled, "Filled missing values");
        }

        Ok(field)
    }

    fn resolve_units<G: LabelledGrid + ?Sized>(
        &self,
        grid: &G,
        u_var: &str,
        v_var: &str,
    ) -> VelmapResult<String> {
        let u_units = grid.variable(u_var).and_then(|v| v.units());
        let v_units = grid.variable(v_var).and_then(|v| v.units());

        if let Some(units) = &self.config.units {
            for (name, attr) in [(u_var, u_units), (v_var, v_units)] {
                if let Some(attr) = attr.filter(|a| *a != units.as_str()) {
                    warn!(
                        variable = name,
                        attribute = attr,
                        units = %units,
                        "Units override differs from variable attribute"
                    );
                }
            }
            return Ok(units.clone());
        }

        if u_units != v_units {
            return Err(VelmapError::UnitsConflict {
                u_var: u_var.to_string(),
                v_var: v_var.to_string(),
                u_units: u_units.map(str::to_string),
                v_units: v_units.map(str::to_string),
            });
        }

        Ok(u_units.unwrap_or_default().to_string())
    }
}

/// Accessor over a labelled grid, mirroring `grid.velmap().plot(u, v)`.
#[derive(Debug, Clone)]
pub struct VelocityMap<'a, G: ?Sized> {
    grid: &'a G,
    formatter: GridFieldFormatter,
    options: DisplayOptions,
}

impl<'a, G: LabelledGrid + ?Sized> VelocityMap<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Self {
            grid,
            formatter: GridFieldFormatter::default(),
            options: DisplayOptions::new(),
        }
    }

    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.formatter = GridFieldFormatter::new(config);
        self
    }

    /// Set one display option for the frontend.
    pub fn with_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn format(&self, u_var: &str, v_var: &str) -> VelmapResult<DisplayPayload> {
        self.formatter
            .format(self.grid, u_var, v_var, self.options.clone())
    }

    pub fn plot<S: DisplaySink + ?Sized>(
        &self,
        u_var: &str,
        v_var: &str,
        sink: &S,
    ) -> VelmapResult<S::Output> {
        self.formatter
            .plot(self.grid, u_var, v_var, self.options.clone(), sink)
    }
}

/// Adds [`velmap`](VelocityMapExt::velmap) to every labelled grid.
pub trait VelocityMapExt: LabelledGrid {
    fn velmap(&self) -> VelocityMap<'_, Self> {
        VelocityMap::new(self)
    }
}

impl<G: LabelledGrid + ?Sized> VelocityMapExt for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use velmap_common::{Dataset, Variable};

    fn dataset(u_units: Option<&str>, v_units: Option<&str>) -> Dataset {
        let mut u = Variable::new("u", ["latitude", "longitude"], vec![1.0; 4]);
        let mut v = Variable::new("v", ["latitude", "longitude"], vec![2.0; 4]);
        if let Some(units) = u_units {
            u = u.with_units(units);
        }
        if let Some(units) = v_units {
            v = v.with_units(units);
        }
        Dataset::new()
            .with_coord("latitude", vec![1.0, 0.0])
            .with_coord("longitude", vec![0.0, 1.0])
            .with_variable(u)
            .unwrap()
            .with_variable(v)
            .unwrap()
    }

    #[test]
    fn test_units_from_matching_attributes() {
        let formatter = GridFieldFormatter::default();
        let units = formatter
            .resolve_units(&dataset(Some("m/s"), Some("m/s")), "u", "v")
            .unwrap();
        assert_eq!(units, "m/s");
    }

    #[test]
    fn test_units_absent_resolve_to_empty() {
        let formatter = GridFieldFormatter::default();
        let units = formatter
            .resolve_units(&dataset(None, None), "u", "v")
            .unwrap();
        assert_eq!(units, "");
    }

    #[test]
    fn test_units_one_absent_conflicts() {
        let formatter = GridFieldFormatter::default();
        let err = formatter
            .resolve_units(&dataset(Some("m/s"), None), "u", "v")
            .unwrap_err();
        match err {
            VelmapError::UnitsConflict {
                u_var,
                v_var,
                u_units,
                v_units,
            } => {
                assert_eq!(u_var, "u");
                assert_eq!(v_var, "v");
                assert_eq!(u_units.as_deref(), Some("m/s"));
                assert_eq!(v_units, None);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_units_override_skips_attribute_check() {
        let formatter = GridFieldFormatter::new(PlotConfig::new().with_units("knots"));
        let units = formatter
            .resolve_units(&dataset(Some("m/s"), Some("cm/s")), "u", "v")
            .unwrap();
        assert_eq!(units, "knots");
    }

    #[test]
    fn test_invalid_config_fails_before_reading_grid() {
        let formatter =
            GridFieldFormatter::new(PlotConfig::new().with_lat_dim("x").with_lon_dim("x"));
        let err = formatter
            .format(&dataset(None, None), "missing", "v", DisplayOptions::new())
            .unwrap_err();
        assert_eq!(err.error_code(), "InvalidConfig");
    }
}
