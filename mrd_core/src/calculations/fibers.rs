//! # Fiber Discretization
//!
//! Slices the compression zone of a section into thin concrete fibers for a
//! trial neutral-axis depth and evaluates the linear strain profile at every
//! fiber and reinforcement layer.
//!
//! ## Strain Profile
//!
//! ```text
//!  y = 0  ├── εcu ──┐          compressed face
//!         │        ╱
//!         │  fibers          dy = c / N
//!  y = c  ├──── 0 ┘            neutral axis
//!         │      ╱
//!         │     ╱  tension
//!  y = h  ┴────┘
//! ```
//!
//! ε(y) = εcu·(c − y)/c with y measured from the compressed face: the
//! extreme fiber sits at the ultimate concrete strain, strain vanishes at the
//! neutral axis and the profile is extrapolated linearly to every layer.

use crate::errors::{CalcError, CalcResult};
use crate::materials::{concrete_stress, MaterialParams};
use crate::section::{BendingSign, Section};

/// A thin slice of the concrete compression zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fiber {
    /// Depth of the fiber midpoint from the compressed face (mm)
    pub depth_mm: f64,
    /// Fiber thickness (mm)
    pub thickness_mm: f64,
    /// Strain at the fiber midpoint (compression positive)
    pub strain: f64,
    /// Concrete stress (MPa)
    pub stress_mpa: f64,
    /// Fiber force σ·dy·b (N)
    pub force_n: f64,
}

/// Strain at a reinforcement layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStrain {
    /// Index of the layer in [`Section::layers`]
    pub index: usize,
    /// Layer depth from the compressed face (mm)
    pub depth_mm: f64,
    /// Steel area (mm²)
    pub area_mm2: f64,
    /// Strain (compression positive)
    pub strain: f64,
}

/// Discretized section for one trial neutral-axis depth.
#[derive(Debug, Clone)]
pub struct StrainProfile {
    /// Trial neutral-axis depth c (mm)
    pub neutral_axis_mm: f64,
    /// Curvature κ = εcu/c (1/mm)
    pub curvature_per_mm: f64,
    /// Concrete fibers spanning [0, c], ordered from the compressed face
    pub fibers: Vec<Fiber>,
    /// Strains at each reinforcement layer
    pub layers: Vec<LayerStrain>,
}

impl StrainProfile {
    /// Strain at depth y from the compressed face
    #[inline]
    pub fn strain_at(&self, depth_mm: f64) -> f64 {
        self.curvature_per_mm * (self.neutral_axis_mm - depth_mm)
    }

    /// Resultant concrete force (N)
    pub fn concrete_force_n(&self) -> f64 {
        self.fibers.iter().map(|f| f.force_n).sum()
    }
}

/// Discretize the section at trial depth `c` for the given bending sign.
///
/// Trial depths outside (0, h) are rejected rather than clamped: the solver
/// owns the bracket and must never feed them here.
pub fn discretize(
    section: &Section,
    sign: BendingSign,
    neutral_axis_mm: f64,
    params: &MaterialParams,
    fiber_count: usize,
) -> CalcResult<StrainProfile> {
    let h = section.depth_mm;
    if !(neutral_axis_mm > 0.0 && neutral_axis_mm < h) {
        return Err(CalcError::invalid_input(
            "neutral_axis_mm",
            neutral_axis_mm.to_string(),
            format!("Trial depth must lie in (0, {h}) mm"),
        ));
    }
    if fiber_count == 0 {
        return Err(CalcError::invalid_input(
            "fiber_count",
            "0",
            "At least one concrete fiber is required",
        ));
    }

    let c = neutral_axis_mm;
    let kappa = params.eps_cu / c;
    let dy = c / fiber_count as f64;
    let b = section.width_mm;

    let fibers = (0..fiber_count)
        .map(|i| {
            let y = (i as f64 + 0.5) * dy;
            let strain = kappa * (c - y);
            let stress_mpa = concrete_stress(strain, params);
            Fiber {
                depth_mm: y,
                thickness_mm: dy,
                strain,
                stress_mpa,
                force_n: stress_mpa * dy * b,
            }
        })
        .collect();

    let layers = section
        .layers_for(sign)
        .enumerate()
        .map(|(index, layer)| LayerStrain {
            index,
            depth_mm: layer.depth_mm,
            area_mm2: layer.area_mm2,
            strain: kappa * (c - layer.depth_mm),
        })
        .collect();

    Ok(StrainProfile {
        neutral_axis_mm: c,
        curvature_per_mm: kappa,
        fibers,
        layers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::ReinforcementLayer;

    fn test_section() -> Section {
        Section::doubly_reinforced(300.0, 600.0, 50.0, 400.0, 1200.0)
    }

    #[test]
    fn test_extreme_fiber_strain() {
        let mat = MaterialParams::default();
        let profile = discretize(&test_section(), BendingSign::Positive, 100.0, &mat, 400).unwrap();
        assert_eq!(profile.fibers.len(), 400);
        assert!((profile.strain_at(0.0) - mat.eps_cu).abs() < 1e-15);
        assert!(profile.strain_at(100.0).abs() < 1e-15);
        // Midpoint strains stay inside the concrete domain
        assert!(profile.fibers.iter().all(|f| f.strain > 0.0 && f.strain < mat.eps_cu));
    }

    #[test]
    fn test_fibers_span_compression_zone() {
        let mat = MaterialParams::default();
        let profile = discretize(&test_section(), BendingSign::Positive, 80.0, &mat, 10).unwrap();
        let total: f64 = profile.fibers.iter().map(|f| f.thickness_mm).sum();
        assert!((total - 80.0).abs() < 1e-9);
        assert!((profile.fibers[0].depth_mm - 4.0).abs() < 1e-12);
        assert!(profile.fibers.windows(2).all(|w| w[0].depth_mm < w[1].depth_mm));
    }

    #[test]
    fn test_layer_strains_extrapolated() {
        let mat = MaterialParams::default();
        let profile = discretize(&test_section(), BendingSign::Positive, 100.0, &mat, 50).unwrap();
        // Top layer at 50 mm: 0.0035 × 50/100
        assert!((profile.layers[0].strain - 0.00175).abs() < 1e-12);
        // Bottom layer at 550 mm: 0.0035 × (−450)/100
        assert!((profile.layers[1].strain + 0.01575).abs() < 1e-12);
    }

    #[test]
    fn test_negative_bending_mirrors_layers() {
        let mat = MaterialParams::default();
        let profile = discretize(&test_section(), BendingSign::Negative, 100.0, &mat, 50).unwrap();
        assert_eq!(profile.layers[0].depth_mm, 550.0);
        assert_eq!(profile.layers[0].index, 0);
        assert!(profile.layers[0].strain < 0.0);
        assert!(profile.layers[1].strain > 0.0);
    }

    #[test]
    fn test_concrete_resultant_matches_stress_block() {
        // Parabola-rectangle with εcu = 3.5‰: C = 0.8095·fcd·b·c
        let mat = MaterialParams::default();
        let section = Section::new(300.0, 600.0).with_layer(ReinforcementLayer::new(550.0, 0.0));
        let profile = discretize(&section, BendingSign::Positive, 100.0, &mat, 2000).unwrap();
        let expected = 0.809_524 * 17.0 * 300.0 * 100.0;
        assert!((profile.concrete_force_n() - expected).abs() / expected < 1e-4);
    }

    #[test]
    fn test_invalid_trial_depths_rejected() {
        let mat = MaterialParams::default();
        let section = test_section();
        for c in [0.0, -5.0, 600.0, 700.0, f64::NAN] {
            assert!(discretize(&section, BendingSign::Positive, c, &mat, 100).is_err());
        }
        assert!(discretize(&section, BendingSign::Positive, 100.0, &mat, 0).is_err());
    }
}
