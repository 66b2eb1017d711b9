//! # Section Model
//!
//! Geometry and reinforcement layout of a rectangular reinforced-concrete
//! cross-section.
//!
//! ## Coordinates
//!
//! ```text
//!   y = 0 ┌──────────────┐  top face
//!         │  ●        ●  │  ← layer at d₁
//!         │              │
//!       h │              │
//!         │              │
//!         │  ●  ●  ●  ●  │  ← layer at d₂
//!   y = h └──────────────┘  bottom face
//!                 b
//! ```
//!
//! Layer depths are measured from the top face. Positive bending compresses
//! the top face; negative bending compresses the bottom face and is handled
//! by mirroring the layer depths (y' = h − d).
//!
//! ## Example
//!
//! ```rust
//! use mrd_core::materials::RebarSize;
//! use mrd_core::section::{ReinforcementLayer, Section};
//!
//! let section = Section::new(300.0, 600.0)
//!     .with_layer(ReinforcementLayer::from_bars(43.0, &[RebarSize::D16; 2]))
//!     .with_layer(ReinforcementLayer::from_bars(557.0, &[RebarSize::D16; 4]));
//!
//! assert!(section.validate().is_ok());
//! assert!((section.total_steel_area_mm2() - 1206.37).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::rebar::{bars_area_mm2, RebarSize};

/// Direction of the bending moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BendingSign {
    /// Top face in compression
    Positive,
    /// Bottom face in compression
    Negative,
}

impl BendingSign {
    /// Both bending signs, positive first
    pub const ALL: [BendingSign; 2] = [BendingSign::Positive, BendingSign::Negative];

    /// Short symbol used in reports ("+" / "-")
    pub fn symbol(&self) -> &'static str {
        match self {
            BendingSign::Positive => "+",
            BendingSign::Negative => "-",
        }
    }

    /// Depth of a point measured from the compressed face
    #[inline]
    pub fn from_compressed_face(&self, depth_from_top_mm: f64, section_depth_mm: f64) -> f64 {
        match self {
            BendingSign::Positive => depth_from_top_mm,
            BendingSign::Negative => section_depth_mm - depth_from_top_mm,
        }
    }
}

impl std::fmt::Display for BendingSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BendingSign::Positive => write!(f, "positive"),
            BendingSign::Negative => write!(f, "negative"),
        }
    }
}

/// One layer of reinforcement at a single depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementLayer {
    /// Depth of the layer centroid from the top face (mm)
    pub depth_mm: f64,

    /// Total steel area of the layer (mm²)
    pub area_mm2: f64,
}

impl ReinforcementLayer {
    /// Create a layer from its depth and total area
    pub fn new(depth_mm: f64, area_mm2: f64) -> Self {
        ReinforcementLayer { depth_mm, area_mm2 }
    }

    /// Create a layer from a group of standard bars
    pub fn from_bars(depth_mm: f64, bars: &[RebarSize]) -> Self {
        let area_mm2 = bars.iter().map(RebarSize::area_mm2).sum();
        ReinforcementLayer { depth_mm, area_mm2 }
    }

    /// Create a layer from arbitrary bar diameters (mm)
    pub fn from_diameters(depth_mm: f64, diameters_mm: &[f64]) -> Self {
        ReinforcementLayer {
            depth_mm,
            area_mm2: bars_area_mm2(diameters_mm),
        }
    }
}

/// Rectangular reinforced-concrete cross-section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_mm": 300.0,
///   "depth_mm": 600.0,
///   "layers": [
///     { "depth_mm": 50.0, "area_mm2": 400.0 },
///     { "depth_mm": 550.0, "area_mm2": 1200.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section width b (mm)
    pub width_mm: f64,

    /// Overall section depth h (mm)
    pub depth_mm: f64,

    /// Reinforcement layers
    #[serde(default)]
    pub layers: Vec<ReinforcementLayer>,
}

impl Section {
    /// Create an unreinforced section
    pub fn new(width_mm: f64, depth_mm: f64) -> Self {
        Section {
            width_mm,
            depth_mm,
            layers: Vec::new(),
        }
    }

    /// Add a reinforcement layer (builder pattern)
    pub fn with_layer(mut self, layer: ReinforcementLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Section with one layer near each face at the same cover to the bar
    /// centroid.
    pub fn doubly_reinforced(
        width_mm: f64,
        depth_mm: f64,
        centroid_cover_mm: f64,
        top_area_mm2: f64,
        bottom_area_mm2: f64,
    ) -> Self {
        Section::new(width_mm, depth_mm)
            .with_layer(ReinforcementLayer::new(centroid_cover_mm, top_area_mm2))
            .with_layer(ReinforcementLayer::new(
                depth_mm - centroid_cover_mm,
                bottom_area_mm2,
            ))
    }

    /// Validate geometry and reinforcement layout.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.width_mm.is_finite() && self.width_mm > 0.0) {
            return Err(CalcError::invalid_geometry(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if !(self.depth_mm.is_finite() && self.depth_mm > 0.0) {
            return Err(CalcError::invalid_geometry(
                "depth_mm",
                self.depth_mm.to_string(),
                "Depth must be positive",
            ));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if !(layer.depth_mm > 0.0 && layer.depth_mm < self.depth_mm) {
                return Err(CalcError::invalid_geometry(
                    format!("layers[{i}].depth_mm"),
                    layer.depth_mm.to_string(),
                    format!("Layer must lie inside the section (0, {})", self.depth_mm),
                ));
            }
            if !(layer.area_mm2.is_finite() && layer.area_mm2 >= 0.0) {
                return Err(CalcError::invalid_geometry(
                    format!("layers[{i}].area_mm2"),
                    layer.area_mm2.to_string(),
                    "Steel area cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Gross concrete area A = b·h (mm²)
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.depth_mm
    }

    /// Total reinforcement area (mm²)
    pub fn total_steel_area_mm2(&self) -> f64 {
        self.layers.iter().map(|l| l.area_mm2).sum()
    }

    /// Geometric reinforcement ratio ρ = As/(b·h)
    pub fn reinforcement_ratio(&self) -> f64 {
        self.total_steel_area_mm2() / self.gross_area_mm2()
    }

    /// Layers as seen from the compressed face for the given bending sign
    pub fn layers_for(&self, sign: BendingSign) -> impl Iterator<Item = ReinforcementLayer> + '_ {
        self.layers.iter().map(move |layer| ReinforcementLayer {
            depth_mm: sign.from_compressed_face(layer.depth_mm, self.depth_mm),
            area_mm2: layer.area_mm2,
        })
    }
}
