//! Working copies of velocity variables.
//!
//! A [`WorkingField`] is extracted from a [`LabelledGrid`] once per call and
//! owns its values, so filling and reorienting never touch the caller's grid.

use std::collections::BTreeSet;

use velmap_common::{LabelledGrid, VelmapError, VelmapResult};

/// A variable's values laid out latitude-major (`ny` rows of `nx`).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingField {
    ny: usize,
    nx: usize,
    values: Vec<f64>,
}

impl WorkingField {
    /// Copy a variable out of `grid`, checking that it is laid out on exactly
    /// the `{lat_dim, lon_dim}` axis pair.
    ///
    /// Variables stored longitude-major are transposed so rows always follow
    /// the latitude axis.
    pub fn extract<G: LabelledGrid + ?Sized>(
        grid: &G,
        name: &str,
        lat_dim: &str,
        lon_dim: &str,
    ) -> VelmapResult<Self> {
        let variable = grid
            .variable(name)
            .ok_or_else(|| VelmapError::VariableNotFound(name.to_string()))?;

        let dims = variable.dims();
        let expected: BTreeSet<&str> = [lat_dim, lon_dim].into_iter().collect();
        let found: BTreeSet<&str> = dims.iter().map(String::as_str).collect();
        if dims.len() != 2 || found != expected {
            return Err(VelmapError::DimensionMismatch {
                variable: name.to_string(),
                expected: vec![lat_dim.to_string(), lon_dim.to_string()],
                found: dims.to_vec(),
            });
        }

        let ny = grid
            .axis_len(lat_dim)
            .ok_or_else(|| VelmapError::CoordinateNotFound(lat_dim.to_string()))?;
        let nx = grid
            .axis_len(lon_dim)
            .ok_or_else(|| VelmapError::CoordinateNotFound(lon_dim.to_string()))?;

        let data = variable.data();
        if data.len() != ny * nx {
            return Err(VelmapError::ShapeMismatch {
                variable: name.to_string(),
                expected: ny * nx,
                found: data.len(),
            });
        }

        let values = if variable.axis_position(lat_dim) == Some(0) {
            data.to_vec()
        } else {
            transpose(data, nx, ny)
        };

        Ok(Self {
            ny,
            nx,
            values,
        })
    }

    /// Replace every non-finite value (NaN or infinity) with `fill`,
    /// returning how many cells were filled.
    pub fn fill_missing(&mut self, fill: f64) -> usize {
        let mut filled = 0;
        for value in self.values.iter_mut().filter(|v| !v.is_finite()) {
            *value = fill;
            filled += 1;
        }
        filled
    }

    /// Reverse the order of rows along the latitude axis.
    pub fn reverse_rows(&mut self) {
        if self.nx == 0 || self.ny < 2 {
            return;
        }
        self.values = self
            .values
            .chunks_exact(self.nx)
            .rev()
            .flatten()
            .copied()
            .collect();
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Transpose `rows x cols` row-major data into `cols x rows`.
fn transpose(data: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len());
    for c in 0..cols {
        for r in 0..rows {
            out.push(data[r * cols + c]);
        }
    }
    out
}
