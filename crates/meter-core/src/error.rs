//! Error types for meter-core.

use thiserror::Error;

/// Smallest arc portion the gauge geometry supports.
pub const MIN_ARC_PORTION: f64 = 0.5;

/// Errors raised while building or loading a gauge configuration.
#[derive(Debug, Error)]
pub enum MeterError {
    /// The visible arc is smaller than a half circle (or not a number).
    #[error("invalid arc portion {portion}: must be at least {MIN_ARC_PORTION}")]
    InvalidArcPortion {
        /// The rejected portion.
        portion: f64,
    },

    /// YAML configuration could not be parsed or serialized.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result alias for meter-core operations.
pub type Result<T> = std::result::Result<T, MeterError>;

/// Check the arc portion contract shared by every partial-circle calculation.
pub(crate) fn check_arc_portion(portion: f64) -> Result<f64> {
    if portion.is_finite() && portion >= MIN_ARC_PORTION {
        Ok(portion)
    } else {
        Err(MeterError::InvalidArcPortion { portion })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arc_portion_display() {
        let err = MeterError::InvalidArcPortion { portion: 0.3 };
        let msg = err.to_string();
        assert!(msg.contains("invalid arc portion 0.3"));
        assert!(msg.contains("at least 0.5"));
    }

    #[test]
    fn test_check_arc_portion_accepts_half_circle() {
        assert_eq!(check_arc_portion(0.5).ok(), Some(0.5));
        assert_eq!(check_arc_portion(1.0).ok(), Some(1.0));
    }

    #[test]
    fn test_check_arc_portion_rejects_small() {
        assert!(matches!(
            check_arc_portion(0.49),
            Err(MeterError::InvalidArcPortion { .. })
        ));
    }

    #[test]
    fn test_check_arc_portion_rejects_nan() {
        assert!(check_arc_portion(f64::NAN).is_err());
        assert!(check_arc_portion(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_yaml_error_from() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("not: [a number").unwrap_err();
        let err: MeterError = yaml_err.into();
        assert!(matches!(err, MeterError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_meter_error_debug() {
        let err = MeterError::InvalidArcPortion { portion: 0.1 };
        assert!(format!("{err:?}").contains("InvalidArcPortion"));
    }
}
