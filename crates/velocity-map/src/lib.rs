//! Velocity fields as interactive maps.
//!
//! This crate turns a pair of u/v velocity variables on a regular
//! latitude-longitude grid into the `application/velocity+json` payload
//! consumed by notebook map frontends.
//!
//! # Architecture
//!
//! ```text
//! LabelledGrid (u_var, v_var)
//!      │
//!      ▼
//! GridFieldFormatter::format
//!      │
//!      ├─► Check axes, fill missing values (working copies)
//!      ├─► Resolve units
//!      ├─► Flip rows so latitude runs north to south
//!      ├─► Infer GridSpec from coordinate vectors
//!      └─► Build [u_record, v_record] + merged display options
//!               │
//!               ▼
//!          DisplayPayload::display(sink)
//! ```
//!
//! # Example
//!
//! ```
//! use velmap_common::{Dataset, Variable};
//! use velocity_map::{RecordingSink, VelocityMapExt};
//!
//! let grid = Dataset::new()
//!     .with_coord("latitude", vec![0.0, 10.0])
//!     .with_coord("longitude", vec![0.0, 10.0, 20.0])
//!     .with_variable(Variable::new("u", ["latitude", "longitude"], vec![1.0; 6]).with_units("m/s"))?
//!     .with_variable(Variable::new("v", ["latitude", "longitude"], vec![0.5; 6]).with_units("m/s"))?;
//!
//! let sink = RecordingSink::new();
//! grid.velmap().with_option("zoom", 3).plot("u", "v", &sink)?;
//!
//! let records = sink.last().unwrap().records()?;
//! assert_eq!(records[0].header.parameter_number_name, "Eastward current");
//! # Ok::<(), velmap_common::VelmapError>(())
//! ```

pub mod config;
pub mod display;
pub mod field;
pub mod formatter;
pub mod payload;
pub mod record;
pub mod wire;

// Re-export commonly used types at crate root
pub use config::PlotConfig;
pub use display::{DisplayBundle, DisplayDataWriter, DisplaySink, RecordingSink};
pub use formatter::{GridFieldFormatter, VelocityMap, VelocityMapExt};
pub use payload::{merge_options, DisplayOptions, DisplayPayload};
pub use record::{RecordHeader, VelocityRecord};
pub use velmap_common::{Dataset, LabelledGrid, LatLon, Variable, VelmapError, VelmapResult};
pub use wire::{VelocityComponent, VELOCITY_MEDIA_TYPE};
