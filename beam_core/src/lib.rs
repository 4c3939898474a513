//! # beam_core - Reinforced Concrete Beam Property Engine
//!
//! `beam_core` computes the material and cross-section properties that feed a
//! reinforced concrete beam design: concrete and reinforcing steel per
//! ACI 318, and geometric properties of the beam cross-section. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Validated at construction**: materials and shapes reject bad input once;
//!   every derived property afterwards is infallible
//! - **Pure**: derived properties are recomputed from stored inputs on access
//! - **JSON-First**: inputs and reports implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::materials::{Concrete, Steel};
//! use beam_core::shapes::{RectangularShape, Shape};
//!
//! let concrete = Concrete::new(4000.0)?;
//! let steel = Steel::new(60_000.0)?;
//! let beam = RectangularShape::new(15.0, 24.0)?;
//!
//! assert_eq!(concrete.beta1(), 0.85);
//! assert_eq!(steel.stress(0.01), 60_000.0);
//! assert_eq!(beam.section_modulus_xx(), 1440.0);
//! # Ok::<(), beam_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Concrete and reinforcing steel models
//! - [`shapes`] - Cross-section abstraction and the rectangular section
//! - [`equations`] - Pure formulas with a self-documenting registry
//! - [`report`] - JSON design input and aggregate property report
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod shapes;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use materials::{Concrete, Material, RebarGrade, Steel};
pub use report::{DesignInput, DesignReport};
pub use shapes::{RectangularShape, SectionSummary, Shape, ShapeType};
