//! # Resisting Moment
//!
//! Integrates fiber and layer forces at the converged neutral axis to obtain
//! the design resisting moment MRd.
//!
//! ## Reference Axis
//!
//! Moments are taken about the section mid-depth h/2 (gross-section
//! centroid). At axial equilibrium the internal forces form a pure couple,
//! so this choice only affects MRd through the residual force left by the
//! solver tolerance (|N|·h/2, far below reporting precision).
//!
//! ```text
//!   ┌──────────────┐ ─┬─  C (concrete + compressed steel)
//!   │▓▓▓▓▓▓▓▓▓▓▓▓▓▓│  │
//!   │ ─ ─ ─ ─ ─ ─ ─│  z = MRd / C
//!   │              │  │
//!   │  ●  ●  ●  ●  │ ─┴─  T (tension steel)
//!   └──────────────┘
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use super::equilibrium::EquilibriumState;
use super::fibers::discretize;
use super::settings::SolverSettings;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{steel_stress, MaterialParams};
use crate::section::{BendingSign, Section};
use crate::units::{Kilonewtons, KilonewtonMeters, Millimeters, NewtonMillimeters, Newtons};

/// Stress state of one reinforcement layer at capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerResult {
    /// Index of the layer in the section input
    pub index: usize,
    /// Depth from the compressed face (mm)
    pub depth_mm: f64,
    /// Steel area (mm²)
    pub area_mm2: f64,
    /// Strain (compression positive)
    pub strain: f64,
    /// Stress (MPa, compression positive)
    pub stress_mpa: f64,
    /// Layer force (kN, compression positive)
    pub force_kn: f64,
    /// Whether the layer strain has passed εyd
    pub yielded: bool,
}

/// Capacity for one bending sign.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sign": "Positive",
///   "mrd_knm": 265.05,
///   "neutral_axis_mm": 94.45,
///   "lever_arm_mm": 508.0,
///   "compression_force_kn": 521.74,
///   "tension_force_kn": 521.74,
///   "residual_force_n": 0.0004,
///   "curvature_per_mm": 3.7e-5,
///   "iterations": 31,
///   "layers": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Bending sign this record belongs to
    pub sign: BendingSign,

    /// Design resisting moment MRd (kN·m), reported as a magnitude
    pub mrd_knm: f64,

    /// Neutral-axis depth c from the compressed face (mm)
    pub neutral_axis_mm: f64,

    /// Internal lever arm z = MRd / C (mm)
    pub lever_arm_mm: f64,

    /// Resultant compression C, concrete plus compressed steel (kN)
    pub compression_force_kn: f64,

    /// Resultant tension T (kN)
    pub tension_force_kn: f64,

    /// Net axial force left at c (N)
    pub residual_force_n: f64,

    /// Curvature at ultimate κ = εcu/c (1/mm)
    pub curvature_per_mm: f64,

    /// Bisection steps used by the neutral-axis search
    pub iterations: usize,

    /// Per-layer stress state
    pub layers: Vec<LayerResult>,
}

impl ResultRecord {
    /// Depth of the deepest loaded layer from the compressed face (mm)
    pub fn effective_depth_mm(&self) -> Option<f64> {
        self.layers
            .iter()
            .filter(|l| l.area_mm2 > 0.0)
            .map(|l| l.depth_mm)
            .reduce(f64::max)
    }

    /// Relative neutral-axis depth c/d
    pub fn relative_neutral_axis(&self) -> Option<f64> {
        self.effective_depth_mm().map(|d| self.neutral_axis_mm / d)
    }

    /// Whether every loaded tension layer has yielded (ductile failure)
    pub fn tension_steel_yields(&self) -> bool {
        self.layers
            .iter()
            .filter(|l| l.area_mm2 > 0.0 && l.strain < 0.0)
            .all(|l| l.yielded)
    }
}

impl std::fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MRd{} = {} (c={}, z≈{})",
            self.sign.symbol(),
            KilonewtonMeters(self.mrd_knm),
            Millimeters(self.neutral_axis_mm),
            Millimeters(self.lever_arm_mm)
        )
    }
}

/// Compute MRd at a converged neutral-axis depth.
///
/// Fails with [`CalcError::StrainLimitExceeded`] if any layer is past εud at
/// the converged strain profile.
pub fn capacity(
    section: &Section,
    sign: BendingSign,
    state: &EquilibriumState,
    params: &MaterialParams,
    settings: &SolverSettings,
) -> CalcResult<ResultRecord> {
    let profile = discretize(
        section,
        sign,
        state.neutral_axis_mm,
        params,
        settings.fiber_count,
    )?;
    let mid_depth = section.depth_mm / 2.0;
    let eps_yd = params.eps_yd();

    let mut compression = Newtons(0.0);
    let mut tension = Newtons(0.0);
    let mut moment = NewtonMillimeters(0.0);

    for fiber in &profile.fibers {
        let force = Newtons(fiber.force_n);
        compression = compression + force;
        moment = moment + force * Millimeters(mid_depth - fiber.depth_mm);
    }

    let mut layers = Vec::with_capacity(profile.layers.len());
    for layer in &profile.layers {
        let stress_mpa = steel_stress(layer.strain, params).map_err(|_| {
            CalcError::strain_limit_exceeded(
                format!(
                    "{sign} bending, layer {} (d={:.1} mm)",
                    layer.index, layer.depth_mm
                ),
                layer.strain,
                params.eps_ud,
            )
        })?;
        let force = Newtons(stress_mpa * layer.area_mm2);
        if force.0 >= 0.0 {
            compression = compression + force;
        } else {
            tension = tension + Newtons(-force.0);
        }
        moment = moment + force * Millimeters(mid_depth - layer.depth_mm);

        layers.push(LayerResult {
            index: layer.index,
            depth_mm: layer.depth_mm,
            area_mm2: layer.area_mm2,
            strain: layer.strain,
            stress_mpa,
            force_kn: Kilonewtons::from(force).0,
            yielded: layer.strain.abs() >= eps_yd,
        });
    }

    if compression.0 <= 0.0 {
        return Err(CalcError::Internal {
            message: format!("{sign} bending: no compression resultant at c={:.3} mm", state.neutral_axis_mm),
        });
    }

    let mrd = KilonewtonMeters::from(NewtonMillimeters(moment.0.abs()));
    let lever_arm_mm = moment.0.abs() / compression.0;

    let record = ResultRecord {
        sign,
        mrd_knm: mrd.0,
        neutral_axis_mm: state.neutral_axis_mm,
        lever_arm_mm,
        compression_force_kn: Kilonewtons::from(compression).0,
        tension_force_kn: Kilonewtons::from(tension).0,
        residual_force_n: state.net_force_n,
        curvature_per_mm: profile.curvature_per_mm,
        iterations: state.iterations,
        layers,
    };

    if !record.tension_steel_yields() {
        warn!(
            "{sign} bending: tension steel does not yield at c={:.1} mm (c/d={:.3}); section is over-reinforced",
            record.neutral_axis_mm,
            record.relative_neutral_axis().unwrap_or(f64::NAN)
        );
    }

    Ok(record)
}
