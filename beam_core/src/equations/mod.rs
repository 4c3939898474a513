//! # Structural Engineering Equations
//!
//! Every formula used to derive material and section properties lives here as
//! a free function. Keeping equations in one place enables:
//! - Easy verification against code references (ACI 318, ASTM, Roark's)
//! - Documentation of assumptions and units
//! - Reuse by every material and shape type
//!
//! ## Modules
//!
//! - [`concrete`] - Concrete stiffness, strength and β1
//! - [`steel`] - Reinforcing steel yield strain and bilinear stress law
//! - [`section`] - Cross-section properties (A, I, S, Z, r, J)
//! - [`registry`] - Equation metadata and the Markdown reference generator
//!
//! ## Units
//!
//! US customary throughout: psi for stresses and moduli, inches for lengths.
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete
//! - ASTM A615: Deformed and Plain Carbon-Steel Bars for Concrete Reinforcement
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod concrete;
pub mod registry;
pub mod section;
pub mod steel;

// Re-export commonly used items
pub use concrete::{
    beta1,
    concrete_modulus_of_elasticity,
    concrete_tensile_strain,
    concrete_tensile_strength,
    modulus_of_rupture,
    shear_modulus,
};

pub use steel::{
    bilinear_stress,
    steel_ultimate_stress,
    yield_strain,
    STEEL_MODULUS_PSI,
};

pub use section::{
    elastic_section_modulus,
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_plastic_modulus,
    rectangular_torsion_constant,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
