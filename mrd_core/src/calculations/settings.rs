//! Numerical settings for the fiber discretization and neutral-axis search.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of concrete fibers in the compression zone
pub const DEFAULT_FIBER_COUNT: usize = 400;

/// Default convergence tolerance on net axial force (N)
pub const DEFAULT_FORCE_TOLERANCE_N: f64 = 1e-3;

/// Default iteration cap for the bisection
pub const DEFAULT_MAX_ITERATIONS: usize = 120;

/// Default lower end of the neutral-axis bracket (mm)
pub const DEFAULT_MIN_DEPTH_MM: f64 = 1e-3;

/// Solver configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fiber_count": 400,
///   "force_tolerance_n": 0.001,
///   "max_iterations": 120,
///   "min_depth_mm": 0.001
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Number of fibers the compression zone is sliced into.
    ///
    /// More fibers give a smoother stress integral at linear cost.
    pub fiber_count: usize,

    /// Convergence tolerance |N(c)| (N)
    pub force_tolerance_n: f64,

    /// Maximum bisection steps
    pub max_iterations: usize,

    /// Smallest trial neutral-axis depth (mm); the bracket is
    /// [min_depth, h − min_depth]
    pub min_depth_mm: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            fiber_count: DEFAULT_FIBER_COUNT,
            force_tolerance_n: DEFAULT_FORCE_TOLERANCE_N,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_depth_mm: DEFAULT_MIN_DEPTH_MM,
        }
    }
}

impl SolverSettings {
    /// Settings with a custom fiber count
    pub fn with_fiber_count(mut self, fiber_count: usize) -> Self {
        self.fiber_count = fiber_count;
        self
    }

    /// Validate solver settings against the section depth.
    pub fn validate(&self, section_depth_mm: f64) -> CalcResult<()> {
        if self.fiber_count == 0 {
            return Err(CalcError::invalid_input(
                "fiber_count",
                "0",
                "At least one concrete fiber is required",
            ));
        }
        if !(self.force_tolerance_n.is_finite() && self.force_tolerance_n > 0.0) {
            return Err(CalcError::invalid_input(
                "force_tolerance_n",
                self.force_tolerance_n.to_string(),
                "Tolerance must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "max_iterations",
                "0",
                "At least one iteration is required",
            ));
        }
        if !(self.min_depth_mm > 0.0 && 2.0 * self.min_depth_mm < section_depth_mm) {
            return Err(CalcError::invalid_input(
                "min_depth_mm",
                self.min_depth_mm.to_string(),
                format!("Must be positive and below half the section depth ({section_depth_mm} mm)"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SolverSettings::default().validate(600.0).is_ok());
    }

    #[test]
    fn test_zero_fibers_rejected() {
        let settings = SolverSettings::default().with_fiber_count(0);
        assert!(settings.validate(600.0).is_err());
    }

    #[test]
    fn test_bracket_must_fit_section() {
        let settings = SolverSettings {
            min_depth_mm: 300.0,
            ..Default::default()
        };
        assert!(settings.validate(600.0).is_err());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let settings: SolverSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, SolverSettings::default());
    }
}
