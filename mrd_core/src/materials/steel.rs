//! Reinforcing steel: bilinear design diagram (EN 1992-1-1 3.2.7).
//!
//! ```text
//!  σs
//! k·fyd ┤                 ╱┐  (inclined branch, optional)
//!   fyd ┤      ┌─────────┘ │  (horizontal branch)
//!       │    ╱             │
//!       │  ╱               │
//!       └─┴──────┴─────────┴── εs
//!         0     εyd       εud
//! ```
//!
//! The diagram is symmetric in tension and compression; stresses carry the
//! sign of the strain.

use serde::{Deserialize, Serialize};

use super::MaterialParams;
use crate::errors::{CalcError, CalcResult};

/// Top branch of the steel design diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SteelBranch {
    /// Perfectly plastic: σ = fyd beyond yield
    #[default]
    HorizontalPlateau,
    /// Linear hardening from fyd at εyd to k·fyd at εuk
    InclinedHardening {
        /// Ratio k = (ft/fy)k, 1.08 for class B
        k: f64,
    },
}

/// Steel stress (MPa, signed) for strain `eps`.
///
/// Fails with [`CalcError::StrainLimitExceeded`] once |ε| exceeds εud: the
/// bar has ruptured and the assumed strain profile is not admissible.
///
/// ```rust
/// use mrd_core::materials::{MaterialParams, steel_stress};
///
/// let mat = MaterialParams::default();
/// assert!((steel_stress(0.001, &mat).unwrap() - 200.0).abs() < 1e-9);
/// assert!((steel_stress(-0.01, &mat).unwrap() + mat.fyd()).abs() < 1e-9);
/// assert!(steel_stress(0.05, &mat).is_err());
/// ```
pub fn steel_stress(eps: f64, params: &MaterialParams) -> CalcResult<f64> {
    // Negated comparison so a NaN strain is rejected too
    if !(eps.abs() <= params.eps_ud) {
        return Err(CalcError::strain_limit_exceeded(
            "reinforcement",
            eps,
            params.eps_ud,
        ));
    }
    Ok(steel_stress_unbounded(eps, params))
}

/// Same diagram as [`steel_stress`] without the rupture check.
///
/// Only the neutral-axis search uses this: trial depths near zero put the
/// tension steel far past εud, and N(c) must stay defined (and monotonic)
/// there. The converged state is re-checked with [`steel_stress`].
#[inline]
pub(crate) fn steel_stress_unbounded(eps: f64, params: &MaterialParams) -> f64 {
    let fyd = params.fyd();
    let eps_yd = params.eps_yd();
    let magnitude = eps.abs();

    if magnitude <= eps_yd {
        return params.es_mpa * eps;
    }

    let plastic = match params.steel_branch {
        SteelBranch::HorizontalPlateau => fyd,
        SteelBranch::InclinedHardening { k } => {
            let slope = (k - 1.0) * fyd / (params.eps_uk() - eps_yd);
            fyd + slope * (magnitude - eps_yd)
        }
    };
    plastic.copysign(eps)
}
