//! Velocity records: the per-component unit of the display payload.
//!
//! Serialized field names follow the frontend's header schema
//! (`parameterUnit`, `la1`, `refTime`, ...).

use serde::{Deserialize, Serialize};
use velmap_common::GridSpec;

use crate::wire::VelocityComponent;

/// One velocity component: header plus latitude-major data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityRecord {
    pub header: RecordHeader,

    /// Values flattened row by row, north to south, west to east.
    pub data: Vec<f64>,
}

impl VelocityRecord {
    pub fn new(
        component: VelocityComponent,
        units: &str,
        grid: &GridSpec,
        ref_time: &str,
        data: Vec<f64>,
    ) -> Self {
        Self {
            header: RecordHeader::new(component, units, grid, ref_time),
            data,
        }
    }

    /// The component this record carries, from its header codes.
    pub fn component(&self) -> Option<VelocityComponent> {
        VelocityComponent::from_parameter_number(self.header.parameter_number)
    }

    /// Value at a (row, col) position, rows running north to south.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.header.ny || col >= self.header.nx {
            return None;
        }
        self.data.get(row * self.header.nx + col).copied()
    }

    /// Check that the data length matches the header's grid size.
    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.header.nx * self.header.ny
    }
}

/// Record header describing units, component codes and grid geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordHeader {
    pub parameter_unit: String,
    pub parameter_number: u8,
    pub dx: f64,
    pub dy: f64,
    pub parameter_number_name: String,
    /// Northernmost latitude
    pub la1: f64,
    /// Southernmost latitude
    pub la2: f64,
    pub parameter_category: u8,
    /// Westernmost longitude
    pub lo1: f64,
    /// Easternmost longitude
    pub lo2: f64,
    pub nx: usize,
    pub ny: usize,
    pub ref_time: String,
}

impl RecordHeader {
    pub fn new(component: VelocityComponent, units: &str, grid: &GridSpec, ref_time: &str) -> Self {
        Self {
            parameter_unit: units.to_string(),
            parameter_number: component.parameter_number(),
            dx: grid.dx,
            dy: grid.dy,
            parameter_number_name: component.parameter_name().to_string(),
            la1: grid.la1(),
            la2: grid.la2(),
            parameter_category: component.parameter_category(),
            lo1: grid.lo1(),
            lo2: grid.lo2(),
            nx: grid.nx,
            ny: grid.ny,
            ref_time: ref_time.to_string(),
        }
    }
}
