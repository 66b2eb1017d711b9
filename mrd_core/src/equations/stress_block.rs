//! # Parabola-Rectangle Stress Block
//!
//! Resultant and centroid of the concrete compression zone when the extreme
//! fiber is at εcu and strain is linear down to zero at the neutral axis.
//!
//! ```text
//!        fcd
//!   ┌─────────┐ y = 0      ─┬─
//!   │         │             │ β·c
//!   │        ╱     ● C ─────┴─   C = α·fcd·b·c
//!   │      ╱
//!   │   ╱
//!   └╱          y = c
//! ```
//!
//! ## Notation
//!
//! - `α` = fill factor, C / (fcd·b·c)
//! - `β` = centroid depth ratio, distance of C from the compressed face / c

use crate::materials::MaterialParams;

/// Fill factor α = 1 − εc2 / (3·εcu)
///
/// # Example
/// ```rust
/// use mrd_core::equations::block_fill_factor;
/// use mrd_core::materials::MaterialParams;
///
/// let alpha = block_fill_factor(&MaterialParams::default());
/// assert!((alpha - 0.8095).abs() < 1e-4);
/// ```
#[inline]
pub fn block_fill_factor(params: &MaterialParams) -> f64 {
    1.0 - params.eps_c2 / (3.0 * params.eps_cu)
}

/// Centroid depth ratio β = 1 − (εcu²/2 − εc2²/12) / (εcu·(εcu − εc2/3))
///
/// # Example
/// ```rust
/// use mrd_core::equations::block_centroid_factor;
/// use mrd_core::materials::MaterialParams;
///
/// let beta = block_centroid_factor(&MaterialParams::default());
/// assert!((beta - 0.416).abs() < 1e-3);
/// ```
#[inline]
pub fn block_centroid_factor(params: &MaterialParams) -> f64 {
    let (ecu, ec2) = (params.eps_cu, params.eps_c2);
    let first_moment = ecu * ecu / 2.0 - ec2 * ec2 / 12.0;
    1.0 - first_moment / (ecu * (ecu - ec2 / 3.0))
}

/// Neutral-axis depth of a singly reinforced section with yielding steel:
/// c = As·fyd / (α·fcd·b)
pub fn singly_reinforced_neutral_axis_mm(width_mm: f64, area_mm2: f64, params: &MaterialParams) -> f64 {
    area_mm2 * params.fyd() / (block_fill_factor(params) * params.fcd() * width_mm)
}

/// Resisting moment of a singly reinforced section with yielding steel (N·mm):
/// MRd = As·fyd·(d − β·c)
///
/// Valid only while the steel yields (c/d below εcu / (εcu + εyd)).
pub fn singly_reinforced_mrd_nmm(
    width_mm: f64,
    effective_depth_mm: f64,
    area_mm2: f64,
    params: &MaterialParams,
) -> f64 {
    let c = singly_reinforced_neutral_axis_mm(width_mm, area_mm2, params);
    area_mm2 * params.fyd() * (effective_depth_mm - block_centroid_factor(params) * c)
}
