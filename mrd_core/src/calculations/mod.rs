//! # Capacity Calculations
//!
//! The fiber-method pipeline, one stage per module:
//!
//! - [`fibers`] - Strain profile and concrete fibers for a trial neutral axis
//! - [`equilibrium`] - Neutral-axis search on net axial force
//! - [`capacity`] - Moment integration at the converged neutral axis
//! - [`flexure`] - `FlexuralInput` → `FlexuralResult` for both bending signs
//! - [`settings`] - Fiber count, tolerance and iteration cap
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function

pub mod capacity;
pub mod equilibrium;
pub mod fibers;
pub mod flexure;
pub mod settings;

// Re-export commonly used types
pub use capacity::{capacity, LayerResult, ResultRecord};
pub use equilibrium::{net_axial_force, solve, EquilibriumState};
pub use fibers::{discretize, Fiber, LayerStrain, StrainProfile};
pub use flexure::{calculate, calculate_sign, FlexuralInput, FlexuralResult};
pub use settings::SolverSettings;
