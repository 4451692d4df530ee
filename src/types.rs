//! Shared data structures for slope stability FOS estimation
//!
//! This module defines the core types for the estimation pipeline:
//! - ParameterSet: the four physical inputs to one FOS estimation
//! - ValidRange: closed interval a parameter (or the FOS output) must lie in
//! - RecordError: per-record failure taxonomy (parse / range / malformed)
//! - EstimationResult: one formatted FOS value or one diagnostic per record

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Input Parameters
// ============================================================================

/// The four physical inputs to one FOS estimation.
///
/// Immutable once constructed; created per evaluation request, either from
/// interactive input or from one record of a batch file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Cohesion c (kN/m²)
    pub cohesion: f64,
    /// Angle of internal friction Ø (°)
    pub friction_angle: f64,
    /// Unit weight γ (kN/m³)
    pub unit_weight: f64,
    /// Seismic coefficient ke (dimensionless)
    pub seismic_coefficient: f64,
}

impl ParameterSet {
    pub const fn new(
        cohesion: f64,
        friction_angle: f64,
        unit_weight: f64,
        seismic_coefficient: f64,
    ) -> Self {
        Self {
            cohesion,
            friction_angle,
            unit_weight,
            seismic_coefficient,
        }
    }

    /// Fields in canonical record order: [c, Ø, γ, ke].
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.cohesion,
            self.friction_angle,
            self.unit_weight,
            self.seismic_coefficient,
        ]
    }
}

// ============================================================================
// Valid Ranges
// ============================================================================

/// Closed interval [min, max] a value must lie in, with display metadata.
///
/// Instances are process-wide constants (see `surrogate::weights`); nothing
/// is mutated after startup, so they are safe for unrestricted concurrent
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidRange {
    /// Parameter name as shown to the user (e.g. "cohesion").
    pub label: &'static str,
    /// Physical unit (e.g. "kN/m²"); "-" for dimensionless quantities.
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub const fn new(label: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        Self {
            label,
            unit,
            min,
            max,
        }
    }

    /// Inclusive bounds check: boundary values are accepted.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl std::fmt::Display for ValidRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} to {}",
            self.label, self.unit, self.min, self.max
        )
    }
}

// ============================================================================
// Record-Scoped Errors
// ============================================================================

/// Why a single record was rejected.
///
/// All variants are record-scoped and non-fatal: a batch continues past a
/// failing record, and every failure is surfaced as a diagnostic (never a
/// silent drop).
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordError {
    /// A text field cannot be interpreted as a real number.
    #[error("invalid input values: {field} = {value:?} is not a number")]
    Parse { field: &'static str, value: String },

    /// A parsed value lies outside its fixed valid interval. Computation is
    /// skipped entirely for the record; the surrogate never extrapolates
    /// silently.
    #[error("use valid range for input values: {field} = {value} is outside {min} to {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A record does not decompose into exactly four numeric fields.
    #[error("malformed record: expected {expected} fields, got {got}")]
    Malformed { expected: usize, got: usize },
}

// ============================================================================
// Estimation Result
// ============================================================================

/// Outcome of evaluating one record: a numeric FOS tagged Success, or a
/// diagnostic tagged Failure. Exactly one per ParameterSet evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimationResult {
    Success { fos: f64 },
    Failure { error: RecordError },
}

impl EstimationResult {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The estimated FOS, if the record was accepted.
    pub const fn fos(&self) -> Option<f64> {
        match self {
            Self::Success { fos } => Some(*fos),
            Self::Failure { .. } => None,
        }
    }

    pub const fn error(&self) -> Option<&RecordError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

/// FOS values are always rendered with exactly three digits after the
/// decimal point, regardless of intermediate magnitude.
impl std::fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { fos } => write!(f, "{fos:.3}"),
            Self::Failure { error } => write!(f, "{error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let range = ValidRange::new("cohesion", "kN/m²", 809.77, 1195.17);
        assert!(range.contains(809.77));
        assert!(range.contains(1195.17));
        assert!(range.contains(1000.0));
        assert!(!range.contains(809.76));
        assert!(!range.contains(1195.18));
    }

    #[test]
    fn success_renders_three_decimals() {
        let result = EstimationResult::Success { fos: 1.8143726 };
        assert_eq!(result.to_string(), "1.814");

        let result = EstimationResult::Success { fos: 2.0 };
        assert_eq!(result.to_string(), "2.000");
    }

    #[test]
    fn failure_diagnostics_use_fixed_prefixes() {
        let parse = EstimationResult::Failure {
            error: RecordError::Parse {
                field: "cohesion",
                value: "abc".to_string(),
            },
        };
        assert!(parse.to_string().starts_with("invalid input values"));

        let range = EstimationResult::Failure {
            error: RecordError::OutOfRange {
                field: "friction angle",
                value: 49.41,
                min: 35.18,
                max: 49.40,
            },
        };
        assert!(range
            .to_string()
            .starts_with("use valid range for input values"));
    }

    #[test]
    fn parameter_set_field_order() {
        let params = ParameterSet::new(1000.0, 40.0, 24.0, 0.10);
        assert_eq!(params.as_array(), [1000.0, 40.0, 24.0, 0.10]);
    }
}
