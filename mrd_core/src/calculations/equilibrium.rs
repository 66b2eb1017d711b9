//! # Neutral-Axis Search
//!
//! Finds the neutral-axis depth c* at which the section is in axial
//! equilibrium under pure bending, N(c*) ≈ 0.
//!
//! ## Algorithm
//!
//! 1. Evaluate N at both ends of the bracket [c_min, h − c_min]
//! 2. Require a sign change (N is monotonically increasing in c: a deeper
//!    neutral axis adds concrete compression and relieves steel tension)
//! 3. Bisect until |N| < tolerance
//!
//! With no tension steel N(c) never changes sign, and the search fails with
//! [`CalcError::NoEquilibriumFound`] instead of returning a meaningless depth.
//! Exhausting the iteration cap fails the same way.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::fibers::discretize;
use super::settings::SolverSettings;
use crate::errors::{CalcError, CalcResult};
use crate::materials::steel::steel_stress_unbounded;
use crate::materials::MaterialParams;
use crate::section::{BendingSign, Section};

/// Trial neutral-axis depth and the resulting net axial force
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumState {
    /// Neutral-axis depth from the compressed face c (mm)
    pub neutral_axis_mm: f64,
    /// Net axial force N(c), compression positive (N)
    pub net_force_n: f64,
    /// Bisection steps taken
    pub iterations: usize,
}

/// Net axial force N(c) (N, compression positive).
///
/// Sum of concrete fiber forces and signed steel layer forces. Steel is
/// evaluated without the rupture check so N stays defined over the whole
/// bracket.
pub fn net_axial_force(
    section: &Section,
    sign: BendingSign,
    neutral_axis_mm: f64,
    params: &MaterialParams,
    settings: &SolverSettings,
) -> CalcResult<f64> {
    let profile = discretize(section, sign, neutral_axis_mm, params, settings.fiber_count)?;
    let steel: f64 = profile
        .layers
        .iter()
        .map(|layer| steel_stress_unbounded(layer.strain, params) * layer.area_mm2)
        .sum();
    Ok(profile.concrete_force_n() + steel)
}

/// Find the neutral-axis depth for pure bending with the given sign.
///
/// The returned depth always lies strictly inside (0, h) and meets the force
/// tolerance. Deterministic: identical inputs give identical results.
pub fn solve(
    section: &Section,
    sign: BendingSign,
    params: &MaterialParams,
    settings: &SolverSettings,
) -> CalcResult<EquilibriumState> {
    let force = |c: f64| net_axial_force(section, sign, c, params, settings);

    let mut c_low = settings.min_depth_mm;
    let mut c_high = section.depth_mm - settings.min_depth_mm;
    let mut n_low = force(c_low)?;
    let n_high = force(c_high)?;

    debug!(
        "{sign} bending: bracket c=[{c_low:.3}, {c_high:.3}] mm, N=[{n_low:.1}, {n_high:.1}] N"
    );

    if n_low * n_high >= 0.0 {
        return Err(CalcError::no_equilibrium(
            sign.to_string(),
            format!(
                "net axial force does not change sign over c in [{c_low}, {c_high}] mm \
                 (N = {n_low:.1} N .. {n_high:.1} N); check the tension reinforcement"
            ),
        ));
    }

    let mut last = (c_low, n_low);
    for iteration in 1..=settings.max_iterations {
        let c_mid = 0.5 * (c_low + c_high);
        let n_mid = force(c_mid)?;
        last = (c_mid, n_mid);
        trace!("{sign} bending: iteration {iteration}, c={c_mid:.6} mm, N={n_mid:.4} N");

        if n_mid.abs() < settings.force_tolerance_n {
            debug!("{sign} bending: converged to c={c_mid:.3} mm in {iteration} iterations");
            return Ok(EquilibriumState {
                neutral_axis_mm: c_mid,
                net_force_n: n_mid,
                iterations: iteration,
            });
        }

        if n_low * n_mid <= 0.0 {
            c_high = c_mid;
        } else {
            c_low = c_mid;
            n_low = n_mid;
        }
    }

    let (c_last, n_last) = last;
    Err(CalcError::no_equilibrium(
        sign.to_string(),
        format!(
            "iteration cap {} reached, residual {:.3} N at c={:.3} mm",
            settings.max_iterations, n_last, c_last
        ),
    ))
}
