//! # Unit Types
//!
//! Newtype wrappers for the SI units used at the calculation boundary.
//! The numeric core works in N, mm and MPa (N/mm²) throughout, with stresses
//! kept as plain `f64`; these types make the conversion to reported units
//! (kN, kN·m, formatted mm) explicit.
//!
//! ## Units
//!
//! - Length: millimeters (mm)
//! - Force: newtons (N), kilonewtons (kN)
//! - Moment: newton-millimeters (N·mm), kilonewton-meters (kN·m)
//!
//! ## Example
//!
//! ```rust
//! use mrd_core::units::{KilonewtonMeters, NewtonMillimeters};
//!
//! let m: KilonewtonMeters = NewtonMillimeters(265.0e6).into();
//! assert!((m.0 - 265.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// 1 kN·m = 1e3 N × 1e3 mm
impl From<NewtonMillimeters> for KilonewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KilonewtonMeters(nmm.0 / 1.0e6)
    }
}

impl Add for Newtons {
    type Output = Newtons;
    fn add(self, rhs: Newtons) -> Newtons {
        Newtons(self.0 + rhs.0)
    }
}

impl Add for NewtonMillimeters {
    type Output = NewtonMillimeters;
    fn add(self, rhs: NewtonMillimeters) -> NewtonMillimeters {
        NewtonMillimeters(self.0 + rhs.0)
    }
}

/// Force × lever arm = moment
impl Mul<Millimeters> for Newtons {
    type Output = NewtonMillimeters;
    fn mul(self, arm: Millimeters) -> NewtonMillimeters {
        NewtonMillimeters(self.0 * arm.0)
    }
}

impl std::fmt::Display for KilonewtonMeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kN·m", self.0)
    }
}

impl std::fmt::Display for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mm", self.0)
    }
}
