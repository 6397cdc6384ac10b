//! Error types for velocity-map.

use thiserror::Error;

/// Result type alias using VelmapError.
pub type VelmapResult<T> = Result<T, VelmapError>;

/// Primary error type for formatting a velocity field.
#[derive(Debug, Error)]
pub enum VelmapError {
    // === Validation Errors ===
    #[error(
        "Invalid dimensions for variable '{variable}': should include only {expected:?}, found {found:?}"
    )]
    DimensionMismatch {
        variable: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error(
        "Different units found for U-component '{u_var}' and V-component '{v_var}' variables: '{}' and '{}'",
        units_label(.u_units),
        units_label(.v_units)
    )]
    UnitsConflict {
        u_var: String,
        v_var: String,
        u_units: Option<String>,
        v_units: Option<String>,
    },

    #[error("Axis '{axis}' has {len} point(s), at least 2 are needed to infer grid spacing")]
    DegenerateAxis { axis: String, len: usize },

    #[error("Axis '{axis}' has a non-finite coordinate at index {index}")]
    NonFiniteCoordinate { axis: String, index: usize },

    // === Dataset Errors ===
    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Coordinate not found for axis: {0}")]
    CoordinateNotFound(String),

    #[error("Shape mismatch for variable '{variable}': expected {expected} values, found {found}")]
    ShapeMismatch {
        variable: String,
        expected: usize,
        found: usize,
    },

    // === Infrastructure Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Display failed: {0}")]
    Display(String),
}

fn units_label(units: &Option<String>) -> &str {
    units.as_deref().unwrap_or("<none>")
}

impl VelmapError {
    /// Stable identifier for this error, suitable for matching on in callers
    /// that only see the rendered message.
    pub fn error_code(&self) -> &'static str {
        match self {
            VelmapError::DimensionMismatch { .. } => "DimensionMismatch",
            VelmapError::UnitsConflict { .. } => "UnitsConflict",
            VelmapError::DegenerateAxis { .. } => "DegenerateAxis",
            VelmapError::NonFiniteCoordinate { .. } => "NonFiniteCoordinate",
            VelmapError::VariableNotFound(_) => "VariableNotFound",
            VelmapError::CoordinateNotFound(_) => "CoordinateNotFound",
            VelmapError::ShapeMismatch { .. } => "ShapeMismatch",
            VelmapError::InvalidConfig(_) => "InvalidConfig",
            VelmapError::Serialization(_) => "Serialization",
            VelmapError::Display(_) => "Display",
        }
    }

    /// True for errors caused by the shape or metadata of the input grid.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            VelmapError::DimensionMismatch { .. }
                | VelmapError::UnitsConflict { .. }
                | VelmapError::DegenerateAxis { .. }
                | VelmapError::NonFiniteCoordinate { .. }
                | VelmapError::VariableNotFound(_)
                | VelmapError::CoordinateNotFound(_)
                | VelmapError::ShapeMismatch { .. }
        )
    }
}

// Conversion from common error types
impl From<std::io::Error> for VelmapError {
    fn from(err: std::io::Error) -> Self {
        VelmapError::Display(err.to_string())
    }
}

impl From<serde_json::Error> for VelmapError {
    fn from(err: serde_json::Error) -> Self {
        VelmapError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for VelmapError {
    fn from(err: serde_yaml::Error) -> Self {
        VelmapError::InvalidConfig(format!("YAML error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = VelmapError::DimensionMismatch {
            variable: "u".to_string(),
            expected: vec!["latitude".to_string(), "longitude".to_string()],
            found: vec!["latitude".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'u'"));
        assert!(msg.contains("longitude"));
        assert_eq!(err.error_code(), "DimensionMismatch");
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_units_conflict_message_shows_absent_units() {
        let err = VelmapError::UnitsConflict {
            u_var: "u".to_string(),
            v_var: "v".to_string(),
            u_units: Some("m/s".to_string()),
            v_units: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("'m/s' and '<none>'"));
    }

    #[test]
    fn test_non_finite_coordinate_is_validation_error() {
        let err = VelmapError::NonFiniteCoordinate {
            axis: "latitude".to_string(),
            index: 2,
        };
        assert_eq!(err.error_code(), "NonFiniteCoordinate");
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_io_error_maps_to_display() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: VelmapError = io.into();
        assert_eq!(err.error_code(), "Display");
        assert!(!err.is_validation_error());
    }
}
