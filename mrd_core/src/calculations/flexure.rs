//! # Flexural Capacity of Rectangular RC Sections
//!
//! Design resisting moment MRd of a rectangular reinforced-concrete section
//! for positive and negative bending, by the EN 1992-1-1 fiber method.
//!
//! ## Assumptions
//!
//! - Plane sections remain plane; perfect bond
//! - Concrete tensile strength ignored
//! - Ultimate state reached at εcu on the compressed face
//! - Pure bending (no applied axial force)
//! - fck ≤ 50 MPa
//! - Bar area is not deducted from the concrete it displaces
//!
//! ## Example
//!
//! ```rust
//! use mrd_core::calculations::flexure::{calculate, FlexuralInput};
//! use mrd_core::section::Section;
//!
//! let input = FlexuralInput::new(
//!     "B-1",
//!     Section::doubly_reinforced(300.0, 600.0, 50.0, 400.0, 1200.0),
//! );
//! let result = calculate(&input).unwrap();
//!
//! println!("{}", result.positive);
//! println!("{}", result.negative);
//! assert!(result.positive.mrd_knm > result.negative.mrd_knm);
//! ```

use serde::{Deserialize, Serialize};

use super::capacity::{capacity, ResultRecord};
use super::equilibrium::solve;
use super::settings::SolverSettings;
use crate::errors::CalcResult;
use crate::materials::MaterialParams;
use crate::section::{BendingSign, Section};

/// Input for a flexural capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "section": {
///     "width_mm": 300.0,
///     "depth_mm": 600.0,
///     "layers": [
///       { "depth_mm": 50.0, "area_mm2": 400.0 },
///       { "depth_mm": 550.0, "area_mm2": 1200.0 }
///     ]
///   },
///   "materials": { "fck_mpa": 30.0, "fyk_mpa": 500.0 },
///   "settings": { "fiber_count": 400 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexuralInput {
    /// User label for this section (e.g., "B-1", "Edge beam")
    #[serde(default)]
    pub label: String,

    /// Section geometry and reinforcement
    pub section: Section,

    /// Concrete and steel parameters
    #[serde(default)]
    pub materials: MaterialParams,

    /// Numerical settings
    #[serde(default)]
    pub settings: SolverSettings,
}

impl FlexuralInput {
    /// Input with default materials and solver settings
    pub fn new(label: impl Into<String>, section: Section) -> Self {
        FlexuralInput {
            label: label.into(),
            section,
            materials: MaterialParams::default(),
            settings: SolverSettings::default(),
        }
    }

    /// Replace the material parameters (builder pattern)
    pub fn with_materials(mut self, materials: MaterialParams) -> Self {
        self.materials = materials;
        self
    }

    /// Replace the solver settings (builder pattern)
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validate section, materials and settings.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.materials.validate()?;
        self.settings.validate(self.section.depth_mm)
    }
}

/// Capacities for both bending signs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexuralResult {
    /// Label copied from the input
    pub label: String,
    /// Top face in compression
    pub positive: ResultRecord,
    /// Bottom face in compression
    pub negative: ResultRecord,
}

impl FlexuralResult {
    /// Record for the given sign
    pub fn for_sign(&self, sign: BendingSign) -> &ResultRecord {
        match sign {
            BendingSign::Positive => &self.positive,
            BendingSign::Negative => &self.negative,
        }
    }
}

/// Capacity for a single bending sign.
pub fn calculate_sign(input: &FlexuralInput, sign: BendingSign) -> CalcResult<ResultRecord> {
    input.validate()?;
    evaluate(input, sign)
}

/// Capacity for positive and negative bending.
///
/// The input is validated once and the two signs are evaluated
/// independently; the first failure is returned.
pub fn calculate(input: &FlexuralInput) -> CalcResult<FlexuralResult> {
    input.validate()?;
    Ok(FlexuralResult {
        label: input.label.clone(),
        positive: evaluate(input, BendingSign::Positive)?,
        negative: evaluate(input, BendingSign::Negative)?,
    })
}

/// Neutral-axis search and moment integration for an already validated input
fn evaluate(input: &FlexuralInput, sign: BendingSign) -> CalcResult<ResultRecord> {
    let state = solve(&input.section, sign, &input.materials, &input.settings)?;
    capacity(&input.section, sign, &state, &input.materials, &input.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{singly_reinforced_mrd_nmm, singly_reinforced_neutral_axis_mm};
    use crate::errors::CalcError;
    use crate::materials::RebarSize;
    use crate::section::ReinforcementLayer;

    fn fixture_input() -> FlexuralInput {
        FlexuralInput::new(
            "Fixture",
            Section::doubly_reinforced(300.0, 600.0, 50.0, 400.0, 1200.0),
        )
    }

    /// 300×600, 35 mm cover, 2Ø16 top, 4Ø16 bottom
    fn demo_input() -> FlexuralInput {
        let centroid = 35.0 + 16.0 / 2.0;
        let section = Section::new(300.0, 600.0)
            .with_layer(ReinforcementLayer::from_bars(centroid, &[RebarSize::D16; 2]))
            .with_layer(ReinforcementLayer::from_bars(600.0 - centroid, &[RebarSize::D16; 4]));
        FlexuralInput::new("Demo", section)
    }

    #[test]
    fn test_regression_fixture() {
        let result = calculate(&fixture_input()).unwrap();
        assert!((result.positive.neutral_axis_mm - 94.45).abs() < 0.5);
        assert!((result.positive.mrd_knm - 265.0).abs() / 265.0 < 0.05);

        assert!(result.negative.neutral_axis_mm > 40.0 && result.negative.neutral_axis_mm < 50.0);
        assert!((result.negative.mrd_knm - 92.93).abs() < 0.5);
    }

    #[test]
    fn test_demo_section() {
        let result = calculate(&demo_input()).unwrap();
        assert!((result.positive.mrd_knm - 184.10).abs() < 0.5);
        assert!((result.positive.neutral_axis_mm - 63.0).abs() < 0.5);
        assert!((result.negative.mrd_knm - 94.32).abs() < 0.5);
        assert_eq!(result.label, "Demo");
    }

    #[test]
    fn test_symmetric_section_equal_capacities() {
        let input = FlexuralInput::new(
            "Symmetric",
            Section::doubly_reinforced(300.0, 600.0, 50.0, 800.0, 800.0),
        );
        let result = calculate(&input).unwrap();
        let (pos, neg) = (result.positive.mrd_knm, result.negative.mrd_knm);
        assert!((pos - neg).abs() / pos < 1e-3);
        assert!((result.positive.neutral_axis_mm - result.negative.neutral_axis_mm).abs() < 0.1);
    }

    #[test]
    fn test_capacity_increases_with_tension_steel() {
        let mut prev = 0.0;
        for area in [800.0, 1200.0, 1600.0, 2000.0] {
            let input = FlexuralInput::new(
                "Monotonic",
                Section::doubly_reinforced(300.0, 600.0, 50.0, 400.0, area),
            );
            let mrd = calculate_sign(&input, BendingSign::Positive).unwrap().mrd_knm;
            assert!(mrd > prev, "MRd({area}) = {mrd} not above {prev}");
            prev = mrd;
        }
    }

    #[test]
    fn test_neutral_axis_inside_section() {
        for area in [300.0, 1200.0, 4000.0, 8000.0] {
            let input = FlexuralInput::new(
                "Bounds",
                Section::doubly_reinforced(250.0, 500.0, 45.0, 300.0, area),
            );
            let result = calculate(&input).unwrap();
            for sign in BendingSign::ALL {
                let c = result.for_sign(sign).neutral_axis_mm;
                assert!(c > 0.0 && c < 500.0);
            }
        }
    }

    #[test]
    fn test_singly_reinforced_matches_closed_form() {
        let section = Section::new(300.0, 600.0).with_layer(ReinforcementLayer::new(550.0, 1200.0));
        let input = FlexuralInput::new("Singly", section);
        let record = calculate_sign(&input, BendingSign::Positive).unwrap();

        let mat = MaterialParams::default();
        let c = singly_reinforced_neutral_axis_mm(300.0, 1200.0, &mat);
        let m = singly_reinforced_mrd_nmm(300.0, 550.0, 1200.0, &mat) / 1e6;
        assert!((record.neutral_axis_mm - c).abs() / c < 1e-3);
        assert!((record.mrd_knm - m).abs() / m < 1e-3);
    }

    #[test]
    fn test_zero_reinforcement_fails() {
        let input = FlexuralInput::new("Plain", Section::new(300.0, 600.0));
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::NoEquilibriumFound { .. }));
    }

    #[test]
    fn test_hardening_never_reduces_capacity() {
        let plateau = calculate_sign(&fixture_input(), BendingSign::Positive).unwrap();
        let input = fixture_input().with_materials(MaterialParams::default().with_hardening(1.08));
        let hardening = calculate_sign(&input, BendingSign::Positive).unwrap();
        assert!(hardening.mrd_knm >= plateau.mrd_knm);
        assert!(hardening.mrd_knm < plateau.mrd_knm * 1.08);
    }

    #[test]
    fn test_fiber_refinement_converges() {
        let coarse = fixture_input().with_settings(SolverSettings::default().with_fiber_count(20));
        let fine = fixture_input().with_settings(SolverSettings::default().with_fiber_count(2000));
        let m_coarse = calculate_sign(&coarse, BendingSign::Positive).unwrap().mrd_knm;
        let m_fine = calculate_sign(&fine, BendingSign::Positive).unwrap().mrd_knm;
        assert!((m_coarse - m_fine).abs() / m_fine < 0.01);
    }

    #[test]
    fn test_stronger_concrete_raises_capacity() {
        let c30 = calculate_sign(&fixture_input(), BendingSign::Positive).unwrap();
        let input = fixture_input().with_materials(MaterialParams::new(45.0, 500.0));
        let c45 = calculate_sign(&input, BendingSign::Positive).unwrap();
        assert!(c45.mrd_knm > c30.mrd_knm);
        assert!(c45.neutral_axis_mm < c30.neutral_axis_mm);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = fixture_input();
        input.section.width_mm = -300.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_SECTION_GEOMETRY");

        let input = fixture_input().with_materials(MaterialParams::new(55.0, 500.0));
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let input = fixture_input().with_settings(SolverSettings::default().with_fiber_count(0));
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_both_signs_match_single_sign_runs() {
        let input = demo_input();
        let result = calculate(&input).unwrap();
        for sign in BendingSign::ALL {
            assert_eq!(result.for_sign(sign), &calculate_sign(&input, sign).unwrap());
        }
    }

    #[test]
    fn test_iteration_cap_fails_calculation() {
        let settings = SolverSettings {
            max_iterations: 3,
            ..Default::default()
        };
        let input = fixture_input().with_settings(settings);
        let err = calculate_sign(&input, BendingSign::Positive).unwrap_err();
        assert_eq!(err.error_code(), "NO_EQUILIBRIUM_FOUND");
        assert!(err.to_string().contains("iteration cap 3 reached"));
        assert!(calculate(&input).is_err());

        // The default cap leaves ample room for the ~30 steps the fixture needs
        let record = calculate_sign(&fixture_input(), BendingSign::Positive).unwrap();
        assert!(record.iterations < SolverSettings::default().max_iterations);
    }

    #[test]
    fn test_input_from_minimal_json() {
        let json = r#"{
            "section": {
                "width_mm": 300.0,
                "depth_mm": 600.0,
                "layers": [
                    { "depth_mm": 50.0, "area_mm2": 400.0 },
                    { "depth_mm": 550.0, "area_mm2": 1200.0 }
                ]
            }
        }"#;
        let input: FlexuralInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.materials, MaterialParams::default());
        assert_eq!(input.settings, SolverSettings::default());
        assert_eq!(input.section, fixture_input().section);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&fixture_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("mrd_knm"));
        assert!(json.contains("lever_arm_mm"));
        assert!(json.contains("\"Negative\""));

        let roundtrip: FlexuralResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.positive.mrd_knm - result.positive.mrd_knm).abs() < 1e-9);
    }
}
