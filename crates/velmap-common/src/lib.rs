//! Common types shared across the velocity-map crates.
//!
//! - [`LabelledGrid`]: read access to named 2-D variables and their axes
//! - [`Dataset`]: an in-memory labelled grid
//! - [`GridSpec`]: geometry inferred from coordinate vectors
//! - [`VelmapError`]: the error taxonomy for every crate in the workspace

pub mod bbox;
pub mod dataset;
pub mod error;
pub mod grid;

pub use bbox::BoundingBox;
pub use dataset::{Dataset, LabelledGrid, Variable};
pub use error::{VelmapError, VelmapResult};
pub use grid::{GridSpec, LatLon};
