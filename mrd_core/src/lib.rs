//! # mrd_core - Flexural Capacity of Reinforced-Concrete Sections
//!
//! `mrd_core` computes the design resisting moment MRd of rectangular
//! reinforced-concrete sections by the EN 1992-1-1 fiber method: the
//! compression zone is sliced into concrete fibers, reinforcement is modelled
//! as discrete layers, and the neutral axis is searched until the section is
//! in axial equilibrium.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, never a silently clamped value
//!
//! ## Quick Start
//!
//! ```rust
//! use mrd_core::{calculate, FlexuralInput, Section};
//!
//! let input = FlexuralInput::new(
//!     "B-1",
//!     Section::doubly_reinforced(300.0, 600.0, 50.0, 400.0, 1200.0),
//! );
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.positive.neutral_axis_mm > 0.0);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`section`] - Section geometry and reinforcement layers
//! - [`materials`] - Material parameters and constitutive laws
//! - [`calculations`] - Fiber discretization, equilibrium and capacity
//! - [`equations`] - Closed-form stress-block formulas
//! - [`units`] - Unit newtypes for reported values
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, FlexuralInput, FlexuralResult, ResultRecord, SolverSettings};
pub use errors::{CalcError, CalcResult};
pub use materials::MaterialParams;
pub use section::{BendingSign, ReinforcementLayer, Section};
