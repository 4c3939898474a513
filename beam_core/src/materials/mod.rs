//! # Materials
//!
//! Material models for reinforced concrete beam design.
//!
//! ## Material Types
//!
//! - **Concrete**: normal-weight concrete per ACI 318
//! - **Steel**: deformed reinforcing bars per ASTM A615
//!
//! Both are immutable value objects validated at construction. Materials and
//! shapes are independent; nothing here combines them into a reinforced
//! section.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Concrete, Material, RebarGrade, Steel};
//!
//! let concrete = Material::Concrete(Concrete::new(4000.0)?);
//! let steel = Material::Steel(Steel::from_grade(RebarGrade::Grade60));
//!
//! // Modular ratio n = Es / Ec
//! let n = steel.modulus_of_elasticity() / concrete.modulus_of_elasticity();
//! assert!(n > 7.0 && n < 9.0);
//! # Ok::<(), beam_core::CalcError>(())
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{Concrete, ConcreteInput, ConcreteProperties};
pub use steel::{RebarGrade, Steel, SteelInput, SteelProperties};

use serde::{Deserialize, Serialize};

/// Unified material enum for all structural materials
///
/// ## JSON Serialization
///
/// Materials serialize with a "type" discriminator:
///
/// ```json
/// { "type": "Concrete", "fc_psi": 4000.0 }
/// { "type": "Steel", "fy_psi": 60000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Normal-weight concrete
    Concrete(Concrete),
    /// Reinforcing steel
    Steel(Steel),
}

impl Material {
    /// Young's modulus (psi)
    pub fn modulus_of_elasticity(&self) -> f64 {
        match self {
            Material::Concrete(c) => c.modulus_of_elasticity(),
            Material::Steel(s) => s.modulus_of_elasticity(),
        }
    }

    /// Shear modulus (psi)
    pub fn shear_modulus(&self) -> f64 {
        match self {
            Material::Concrete(c) => c.shear_modulus(),
            Material::Steel(s) => s.shear_modulus(),
        }
    }

    pub fn poisson_ratio(&self) -> f64 {
        match self {
            Material::Concrete(c) => c.poisson_ratio(),
            Material::Steel(s) => s.poisson_ratio(),
        }
    }

    /// Unit weight (lb/in³)
    pub fn unit_weight_pci(&self) -> f64 {
        match self {
            Material::Concrete(c) => c.unit_weight_pci(),
            Material::Steel(s) => s.unit_weight_pci(),
        }
    }

    /// Coefficient of thermal expansion (1/°F)
    pub fn thermal_expansion(&self) -> f64 {
        match self {
            Material::Concrete(c) => c.thermal_expansion(),
            Material::Steel(s) => s.thermal_expansion(),
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        match self {
            Material::Concrete(c) => c.display_name(),
            Material::Steel(s) => s.display_name(),
        }
    }

    /// Get material type as a string
    pub fn material_type(&self) -> &'static str {
        match self {
            Material::Concrete(_) => "Concrete",
            Material::Steel(_) => "Steel",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<Concrete> for Material {
    fn from(c: Concrete) -> Self {
        Material::Concrete(c)
    }
}

impl From<Steel> for Material {
    fn from(s: Steel) -> Self {
        Material::Steel(s)
    }
}
