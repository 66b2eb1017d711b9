//! Standard Reinforcing Bar Sizes
//!
//! Nominal diameters of ribbed bars per EN 10080, with cross-section areas.
//! Layers built from bars sum the individual bar areas π·Ø²/4.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Nominal reinforcing bar size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RebarSize {
    /// Ø6
    #[serde(rename = "6")]
    D6,
    /// Ø8
    #[serde(rename = "8")]
    D8,
    /// Ø10
    #[serde(rename = "10")]
    D10,
    /// Ø12
    #[serde(rename = "12")]
    D12,
    /// Ø16
    #[default]
    #[serde(rename = "16")]
    D16,
    /// Ø20
    #[serde(rename = "20")]
    D20,
    /// Ø25
    #[serde(rename = "25")]
    D25,
    /// Ø32
    #[serde(rename = "32")]
    D32,
    /// Ø40
    #[serde(rename = "40")]
    D40,
}

impl RebarSize {
    /// All bar sizes, smallest first
    pub const ALL: [RebarSize; 9] = [
        RebarSize::D6,
        RebarSize::D8,
        RebarSize::D10,
        RebarSize::D12,
        RebarSize::D16,
        RebarSize::D20,
        RebarSize::D25,
        RebarSize::D32,
        RebarSize::D40,
    ];

    /// Nominal diameter (mm)
    pub fn diameter_mm(&self) -> f64 {
        match self {
            RebarSize::D6 => 6.0,
            RebarSize::D8 => 8.0,
            RebarSize::D10 => 10.0,
            RebarSize::D12 => 12.0,
            RebarSize::D16 => 16.0,
            RebarSize::D20 => 20.0,
            RebarSize::D25 => 25.0,
            RebarSize::D32 => 32.0,
            RebarSize::D40 => 40.0,
        }
    }

    /// Nominal cross-section area (mm²)
    pub fn area_mm2(&self) -> f64 {
        circle_area_mm2(self.diameter_mm())
    }

    /// Look up a size from its nominal diameter in mm
    pub fn from_diameter(diameter_mm: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|size| (size.diameter_mm() - diameter_mm).abs() < 1e-9)
    }
}

impl std::fmt::Display for RebarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ø{}", self.diameter_mm())
    }
}

/// Area of a round bar of the given diameter (mm²)
#[inline]
pub fn circle_area_mm2(diameter_mm: f64) -> f64 {
    PI * diameter_mm * diameter_mm / 4.0
}

/// Total area of a group of bars given by diameter (mm²)
pub fn bars_area_mm2(diameters_mm: &[f64]) -> f64 {
    diameters_mm.iter().map(|&d| circle_area_mm2(d)).sum()
}
