//! Wire-level constants for the `application/velocity+json` payload.
//!
//! The map frontend reads records in the GRIB2-derived JSON layout used by
//! leaflet-velocity style renderers. Everything the frontend keys on lives
//! here so the schema has a single definition.

use serde::{Deserialize, Serialize};

/// Content type the display frontend is registered for.
pub const VELOCITY_MEDIA_TYPE: &str = "application/velocity+json";

/// Reference time written when no explicit time is configured.
///
/// The frontend only displays this string; it does not drive any animation.
pub const REF_TIME_PLACEHOLDER: &str = "2017-02-01 23:00:00";

/// `strftime` format used for configured reference times.
pub const REF_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// GRIB2 parameter category for momentum (discipline 0, table 4.1).
pub const PARAMETER_CATEGORY_MOMENTUM: u8 = 2;

/// Display option carrying the computed `[lat, lon]` map center.
pub const CENTER_OPTION: &str = "latlon_center";

/// Value written in place of missing samples.
pub const MISSING_FILL_VALUE: f64 = 0.0;

/// The two physical quantities of a horizontal velocity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VelocityComponent {
    /// Zonal (u) component
    Eastward,
    /// Meridional (v) component
    Northward,
}

impl VelocityComponent {
    /// Components in the order the frontend expects them: u, then v.
    pub const ALL: [VelocityComponent; 2] =
        [VelocityComponent::Eastward, VelocityComponent::Northward];

    /// GRIB2 parameter number within the momentum category.
    pub fn parameter_number(&self) -> u8 {
        match self {
            VelocityComponent::Eastward => 2,
            VelocityComponent::Northward => 3,
        }
    }

    pub fn parameter_category(&self) -> u8 {
        PARAMETER_CATEGORY_MOMENTUM
    }

    /// Human-readable name shown by the frontend.
    pub fn parameter_name(&self) -> &'static str {
        match self {
            VelocityComponent::Eastward => "Eastward current",
            VelocityComponent::Northward => "Northward current",
        }
    }

    /// Reverse lookup from a header's parameter number.
    pub fn from_parameter_number(number: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.parameter_number() == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_codes() {
        assert_eq!(VelocityComponent::Eastward.parameter_number(), 2);
        assert_eq!(VelocityComponent::Northward.parameter_number(), 3);
        assert_eq!(VelocityComponent::Eastward.parameter_category(), 2);
        assert_eq!(VelocityComponent::Northward.parameter_category(), 2);
    }

    #[test]
    fn test_component_order_is_u_then_v() {
        assert_eq!(
            VelocityComponent::ALL,
            [VelocityComponent::Eastward, VelocityComponent::Northward]
        );
    }

    #[test]
    fn test_from_parameter_number() {
        assert_eq!(
            VelocityComponent::from_parameter_number(3),
            Some(VelocityComponent::Northward)
        );
        assert_eq!(VelocityComponent::from_parameter_number(4), None);
    }
}
