//! # Closed-Form Equations
//!
//! Analytic formulas for the parabola-rectangle stress block. The fiber
//! method does not depend on them; they give closed-form reference values
//! for verifying the numerical integration and for quick hand checks.
//!
//! ## Modules
//!
//! - [`stress_block`] - Resultant and centroid of the concrete stress block,
//!   singly reinforced section capacity
//!
//! ## References
//!
//! - EN 1992-1-1:2004, 3.1.7 (stress-strain relations for section design)
//! - EN 1992-1-1:2004, 6.1 (bending with or without axial force)

pub mod stress_block;

pub use stress_block::{
    block_centroid_factor,
    block_fill_factor,
    singly_reinforced_mrd_nmm,
    singly_reinforced_neutral_axis_mm,
};
