//! # Materials
//!
//! Material parameters and Eurocode 2 constitutive laws for reinforced
//! concrete sections.
//!
//! ## Material Laws
//!
//! - **Concrete**: parabola-rectangle diagram (EN 1992-1-1 3.1.7), no tension
//! - **Reinforcing steel**: bilinear elastic-plastic diagram (EN 1992-1-1 3.2.7),
//!   horizontal top branch or inclined hardening branch
//!
//! ## Example
//!
//! ```rust
//! use mrd_core::materials::{MaterialParams, concrete_stress};
//!
//! let mat = MaterialParams::default(); // C30/37, B500, class B
//! assert!((mat.fcd() - 17.0).abs() < 1e-9);
//! assert!((concrete_stress(mat.eps_cu, &mat) - mat.fcd()).abs() < 1e-9);
//! ```

pub mod concrete;
pub mod rebar;
pub mod steel;

pub use concrete::concrete_stress;
pub use rebar::RebarSize;
pub use steel::{steel_stress, SteelBranch};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Highest characteristic concrete strength covered by the n = 2 parabola
/// and the constant strain limits (MPa).
pub const MAX_FCK_MPA: f64 = 50.0;

/// Concrete and reinforcing-steel design parameters.
///
/// Defaults: C30/37 concrete, B500 class B steel, EN 1992-1-1 partial
/// factors for persistent situations, αcc = 0.85.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fck_mpa": 30.0,
///   "fyk_mpa": 500.0,
///   "gamma_c": 1.5,
///   "gamma_s": 1.15,
///   "alpha_cc": 0.85,
///   "es_mpa": 200000.0,
///   "eps_c2": 0.002,
///   "eps_cu": 0.0035,
///   "eps_ud": 0.045,
///   "steel_branch": "HorizontalPlateau"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialParams {
    /// Characteristic cylinder strength of concrete fck (MPa)
    pub fck_mpa: f64,

    /// Characteristic yield strength of reinforcement fyk (MPa)
    pub fyk_mpa: f64,

    /// Partial safety factor for concrete γc
    pub gamma_c: f64,

    /// Partial safety factor for reinforcing steel γs
    pub gamma_s: f64,

    /// Long-term/unfavourable effects coefficient αcc
    pub alpha_cc: f64,

    /// Modulus of elasticity of reinforcement Es (MPa)
    pub es_mpa: f64,

    /// Concrete strain at reaching maximum strength εc2
    pub eps_c2: f64,

    /// Ultimate concrete compressive strain εcu2
    pub eps_cu: f64,

    /// Design ultimate strain of reinforcement εud
    pub eps_ud: f64,

    /// Shape of the steel diagram beyond yield
    pub steel_branch: SteelBranch,
}

impl Default for MaterialParams {
    fn default() -> Self {
        MaterialParams {
            fck_mpa: 30.0,
            fyk_mpa: 500.0,
            gamma_c: 1.5,
            gamma_s: 1.15,
            alpha_cc: 0.85,
            es_mpa: 200_000.0,
            eps_c2: 0.0020,
            eps_cu: 0.0035,
            // 0.9 × εuk with εuk = 5 % (ductility class B)
            eps_ud: 0.045,
            steel_branch: SteelBranch::HorizontalPlateau,
        }
    }
}

impl MaterialParams {
    /// Create parameters for the given concrete and steel grades, keeping
    /// the default partial factors and strain limits.
    pub fn new(fck_mpa: f64, fyk_mpa: f64) -> Self {
        MaterialParams {
            fck_mpa,
            fyk_mpa,
            ..Default::default()
        }
    }

    /// Use the inclined hardening branch with ratio k = ftk/fyk.
    pub fn with_hardening(mut self, k: f64) -> Self {
        self.steel_branch = SteelBranch::InclinedHardening { k };
        self
    }

    /// Design compressive strength fcd = αcc·fck/γc (MPa)
    pub fn fcd(&self) -> f64 {
        self.alpha_cc * self.fck_mpa / self.gamma_c
    }

    /// Design yield strength fyd = fyk/γs (MPa)
    pub fn fyd(&self) -> f64 {
        self.fyk_mpa / self.gamma_s
    }

    /// Design yield strain εyd = fyd/Es
    pub fn eps_yd(&self) -> f64 {
        self.fyd() / self.es_mpa
    }

    /// Characteristic ultimate strain εuk, recovered from εud = 0.9·εuk
    pub fn eps_uk(&self) -> f64 {
        self.eps_ud / 0.9
    }

    /// Validate material parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.fck_mpa > 0.0 && self.fck_mpa <= MAX_FCK_MPA) {
            return Err(CalcError::invalid_input(
                "fck_mpa",
                self.fck_mpa.to_string(),
                "fck must be in (0, 50] MPa for the parabola-rectangle diagram",
            ));
        }

        let positive = [
            ("fyk_mpa", self.fyk_mpa),
            ("gamma_c", self.gamma_c),
            ("gamma_s", self.gamma_s),
            ("alpha_cc", self.alpha_cc),
            ("es_mpa", self.es_mpa),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }

        if !(self.eps_c2 > 0.0 && self.eps_c2 < self.eps_cu) {
            return Err(CalcError::invalid_input(
                "eps_c2",
                self.eps_c2.to_string(),
                format!("Must satisfy 0 < eps_c2 < eps_cu ({})", self.eps_cu),
            ));
        }

        if !(self.eps_ud.is_finite() && self.eps_ud > self.eps_yd()) {
            return Err(CalcError::invalid_input(
                "eps_ud",
                self.eps_ud.to_string(),
                format!("Ultimate strain must exceed the yield strain ({:.5})", self.eps_yd()),
            ));
        }

        if let SteelBranch::InclinedHardening { k } = self.steel_branch {
            if !(k.is_finite() && k >= 1.0) {
                return Err(CalcError::invalid_input(
                    "steel_branch.k",
                    k.to_string(),
                    "Hardening ratio k = ftk/fyk must be at least 1.0",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_strengths() {
        let mat = MaterialParams::default();
        assert!((mat.fcd() - 17.0).abs() < 1e-9);
        assert!((mat.fyd() - 434.7826).abs() < 1e-3);
        assert!((mat.eps_yd() - 0.0021739).abs() < 1e-6);
        assert!((mat.eps_uk() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_default_validates() {
        assert!(MaterialParams::default().validate().is_ok());
        assert!(MaterialParams::new(50.0, 500.0).validate().is_ok());
    }

    #[test]
    fn test_high_strength_concrete_rejected() {
        let err = MaterialParams::new(60.0, 500.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "fck_mpa"));
    }

    #[test]
    fn test_inverted_concrete_strains_rejected() {
        let mat = MaterialParams {
            eps_c2: 0.004,
            ..Default::default()
        };
        assert!(mat.validate().is_err());
    }

    #[test]
    fn test_ultimate_below_yield_rejected() {
        let mat = MaterialParams {
            eps_ud: 0.001,
            ..Default::default()
        };
        assert!(mat.validate().is_err());
    }

    #[test]
    fn test_hardening_ratio_rejected_below_one() {
        let mat = MaterialParams::default().with_hardening(0.9);
        assert!(mat.validate().is_err());
        assert!(MaterialParams::default().with_hardening(1.08).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mat: MaterialParams = serde_json::from_str(r#"{ "fck_mpa": 25.0 }"#).unwrap();
        assert_eq!(mat.fck_mpa, 25.0);
        assert_eq!(mat.fyk_mpa, 500.0);
        assert_eq!(mat.steel_branch, SteelBranch::HorizontalPlateau);
    }
}
