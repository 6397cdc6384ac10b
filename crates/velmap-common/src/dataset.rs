//! Labelled grids: 2-D data addressed by named axes.
//!
//! [`LabelledGrid`] is the read-only view the formatter works against.
//! [`Dataset`] is the in-memory implementation used by callers that build
//! grids directly (or after loading them from a file format of their choice).

use std::collections::BTreeMap;

use crate::{VelmapError, VelmapResult};

/// Attribute holding a variable's physical units.
pub const UNITS_ATTR: &str = "units";

/// Read access to named variables and their coordinate axes.
pub trait LabelledGrid {
    /// Look up a variable by name.
    fn variable(&self, name: &str) -> Option<&Variable>;

    /// Coordinate vector backing an axis.
    fn coordinate(&self, axis: &str) -> Option<&[f64]>;

    /// Names of the axes a variable is laid out on, in storage order.
    fn axis_names(&self, name: &str) -> Option<&[String]> {
        self.variable(name).map(Variable::dims)
    }

    /// Number of points along an axis.
    fn axis_len(&self, axis: &str) -> Option<usize> {
        self.coordinate(axis).map(<[f64]>::len)
    }
}

/// One named field over a labelled grid.
///
/// Values are stored flat in the order given by `dims` (last axis fastest).
/// Missing values are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    dims: Vec<String>,
    data: Vec<f64>,
    attrs: BTreeMap<String, String>,
}

impl Variable {
    /// Create a variable laid out on `dims`.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        dims: impl IntoIterator<Item = S>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            dims: dims.into_iter().map(Into::into).collect(),
            data,
            attrs: BTreeMap::new(),
        }
    }

    /// Create a variable from optional values, `None` marking a missing cell.
    pub fn from_options<S: Into<String>>(
        name: impl Into<String>,
        dims: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        let data = values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
        Self::new(name, dims, data)
    }

    /// Attach an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Attach a `units` attribute.
    pub fn with_units(self, units: impl Into<String>) -> Self {
        self.with_attr(UNITS_ATTR, units)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// The `units` attribute, if present.
    pub fn units(&self) -> Option<&str> {
        self.attr(UNITS_ATTR)
    }

    /// Position of an axis in this variable's storage order.
    pub fn axis_position(&self, axis: &str) -> Option<usize> {
        self.dims.iter().position(|d| d == axis)
    }
}

/// An in-memory labelled grid.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    coords: BTreeMap<String, Vec<f64>>,
    variables: BTreeMap<String, Variable>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the coordinate vector for an axis.
    pub fn with_coord(mut self, axis: impl Into<String>, values: Vec<f64>) -> Self {
        self.insert_coord(axis, values);
        self
    }

    /// Add (or replace) the coordinate vector for an axis.
    pub fn insert_coord(&mut self, axis: impl Into<String>, values: Vec<f64>) {
        self.coords.insert(axis.into(), values);
    }

    /// Add a variable, checking its data against the coordinate lengths.
    pub fn with_variable(mut self, variable: Variable) -> VelmapResult<Self> {
        self.insert_variable(variable)?;
        Ok(self)
    }

    /// Add a variable, checking its data against the coordinate lengths.
    ///
    /// Every axis the variable names must already have a coordinate vector.
    pub fn insert_variable(&mut self, variable: Variable) -> VelmapResult<()> {
        let mut expected = 1usize;
        for dim in variable.dims() {
            let len = self
                .coords
                .get(dim)
                .map(Vec::len)
                .ok_or_else(|| VelmapError::CoordinateNotFound(dim.clone()))?;
            expected *= len;
        }

        if variable.data().len() != expected {
            return Err(VelmapError::ShapeMismatch {
                variable: variable.name().to_string(),
                expected,
                found: variable.data().len(),
            });
        }

        self.variables.insert(variable.name().to_string(), variable);
        Ok(())
    }
}

impl LabelledGrid for Dataset {
    fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    fn coordinate(&self, axis: &str) -> Option<&[f64]> {
        self.coords.get(axis).map(Vec::as_slice)
    }
}
