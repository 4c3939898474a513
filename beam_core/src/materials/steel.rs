//! Reinforcing Steel (ASTM A615 / ACI 318)
//!
//! Deformed reinforcing bars idealized as elastic-perfectly-plastic. A
//! `Steel` is built from its specified yield strength fy, either directly or
//! from a standard [`RebarGrade`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{RebarGrade, Steel};
//!
//! let s = Steel::from_grade(RebarGrade::Grade60);
//! assert_eq!(s.fy(), 60_000.0);
//! assert_eq!(s.stress(0.01), 60_000.0); // yield plateau
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::concrete::shear_modulus;
use crate::equations::steel as eq;
use crate::errors::{require_poisson, require_positive, CalcError, CalcResult};
use crate::units::{Ksi, Pcf, Pci, Psi};

const MATERIAL: &str = "Steel";

/// Default ultimate (rupture) strain εsu
pub const DEFAULT_ULTIMATE_STRAIN: f64 = 0.09;

/// Default Poisson's ratio for carbon steel
pub const DEFAULT_POISSON_RATIO: f64 = 0.3;

/// Default unit weight for carbon steel (pcf)
pub const DEFAULT_UNIT_WEIGHT_PCF: f64 = 490.0;

/// Default coefficient of thermal expansion (1/°F)
pub const DEFAULT_THERMAL_EXPANSION: f64 = 6.5e-6;

/// Standard reinforcing bar grades (ASTM A615)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarGrade {
    #[serde(rename = "Grade 40")]
    Grade40,
    #[serde(rename = "Grade 60")]
    Grade60,
    #[serde(rename = "Grade 80")]
    Grade80,
    #[serde(rename = "Grade 100")]
    Grade100,
}

impl RebarGrade {
    /// Every standard grade, in ascending strength
    pub const ALL: [RebarGrade; 4] = [
        RebarGrade::Grade40,
        RebarGrade::Grade60,
        RebarGrade::Grade80,
        RebarGrade::Grade100,
    ];

    /// Minimum specified yield strength
    pub fn yield_strength(&self) -> Psi {
        let ksi = match self {
            RebarGrade::Grade40 => Ksi(40.0),
            RebarGrade::Grade60 => Ksi(60.0),
            RebarGrade::Grade80 => Ksi(80.0),
            RebarGrade::Grade100 => Ksi(100.0),
        };
        ksi.into()
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RebarGrade::Grade40 => "Grade 40",
            RebarGrade::Grade60 => "Grade 60",
            RebarGrade::Grade80 => "Grade 80",
            RebarGrade::Grade100 => "Grade 100",
        }
    }

    /// Parse from common string representations ("60", "Gr60", "Grade 60")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.to_uppercase().replace([' ', '_', '-'], "");
        let digits = normalized
            .trim_start_matches("GRADE")
            .trim_start_matches("GR");
        RebarGrade::ALL
            .into_iter()
            .find(|grade| grade.display_name().trim_start_matches("Grade ") == digits)
            .ok_or_else(|| {
                CalcError::invalid_input("rebar_grade", s, "Expected one of 40, 60, 80, 100")
            })
    }
}

impl std::fmt::Display for RebarGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn default_modulus() -> f64 {
    eq::STEEL_MODULUS_PSI
}

fn default_ultimate_strain() -> f64 {
    DEFAULT_ULTIMATE_STRAIN
}

fn default_poisson_ratio() -> f64 {
    DEFAULT_POISSON_RATIO
}

fn default_unit_weight_pci() -> f64 {
    Pci::from(Pcf(DEFAULT_UNIT_WEIGHT_PCF)).value()
}

fn default_thermal_expansion() -> f64 {
    DEFAULT_THERMAL_EXPANSION
}

/// Unvalidated steel parameters.
///
/// ## JSON Example
///
/// ```json
/// { "fy_psi": 60000.0, "es_psi": 29000000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelInput {
    /// Specified yield strength fy (psi)
    #[serde(alias = "fy", alias = "yield_strength")]
    pub fy_psi: f64,

    /// Modulus of elasticity Es (psi)
    #[serde(default = "default_modulus", alias = "Es", alias = "modulus_of_elasticity")]
    pub es_psi: f64,

    /// Ultimate (rupture) strain εsu
    #[serde(default = "default_ultimate_strain")]
    pub ultimate_strain: f64,

    /// Poisson's ratio ν
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,

    /// Unit weight (lb/in³)
    #[serde(default = "default_unit_weight_pci")]
    pub unit_weight_pci: f64,

    /// Coefficient of thermal expansion (1/°F)
    #[serde(default = "default_thermal_expansion")]
    pub thermal_expansion: f64,
}

impl SteelInput {
    /// Input with the given fy and every other field at its default
    pub fn new(fy_psi: f64) -> Self {
        Self {
            fy_psi,
            es_psi: eq::STEEL_MODULUS_PSI,
            ultimate_strain: DEFAULT_ULTIMATE_STRAIN,
            poisson_ratio: DEFAULT_POISSON_RATIO,
            unit_weight_pci: default_unit_weight_pci(),
            thermal_expansion: DEFAULT_THERMAL_EXPANSION,
        }
    }
}

/// Validated reinforcing steel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SteelInput", into = "SteelInput")]
pub struct Steel {
    fy_psi: f64,
    es_psi: f64,
    ultimate_strain: f64,
    poisson_ratio: f64,
    unit_weight_pci: f64,
    thermal_expansion: f64,
}

impl TryFrom<SteelInput> for Steel {
    type Error = CalcError;

    fn try_from(input: SteelInput) -> CalcResult<Self> {
        let steel = Steel {
            fy_psi: require_positive(MATERIAL, "fy_psi", input.fy_psi)?,
            es_psi: require_positive(MATERIAL, "es_psi", input.es_psi)?,
            ultimate_strain: require_positive(MATERIAL, "ultimate_strain", input.ultimate_strain)?,
            poisson_ratio: require_poisson(MATERIAL, input.poisson_ratio)?,
            unit_weight_pci: require_positive(MATERIAL, "unit_weight_pci", input.unit_weight_pci)?,
            thermal_expansion: require_positive(MATERIAL, "thermal_expansion", input.thermal_expansion)?,
        };
        log::debug!("constructed {}", steel);
        Ok(steel)
    }
}

impl From<Steel> for SteelInput {
    fn from(s: Steel) -> Self {
        SteelInput {
            fy_psi: s.fy_psi,
            es_psi: s.es_psi,
            ultimate_strain: s.ultimate_strain,
            poisson_ratio: s.poisson_ratio,
            unit_weight_pci: s.unit_weight_pci,
            thermal_expansion: s.thermal_expansion,
        }
    }
}

impl Steel {
    /// Steel with the given fy (psi) and default Es and physical constants
    pub fn new(fy_psi: f64) -> CalcResult<Self> {
        Self::try_from(SteelInput::new(fy_psi))
    }

    /// Steel at the minimum yield strength of a standard grade
    pub fn from_grade(grade: RebarGrade) -> Self {
        let input = SteelInput::new(grade.yield_strength().value());
        let steel = Steel {
            fy_psi: input.fy_psi,
            es_psi: input.es_psi,
            ultimate_strain: input.ultimate_strain,
            poisson_ratio: input.poisson_ratio,
            unit_weight_pci: input.unit_weight_pci,
            thermal_expansion: input.thermal_expansion,
        };
        log::debug!("constructed {} ({})", steel, grade);
        steel
    }

    // === Stored attributes ===

    /// Specified yield strength fy (psi)
    pub fn fy(&self) -> f64 {
        self.fy_psi
    }

    /// Same as [`Steel::fy`]
    pub fn yield_strength(&self) -> f64 {
        self.fy_psi
    }

    /// Modulus of elasticity Es (psi)
    pub fn es(&self) -> f64 {
        self.es_psi
    }

    /// Same as [`Steel::es`]
    pub fn modulus_of_elasticity(&self) -> f64 {
        self.es_psi
    }

    pub fn ultimate_strain(&self) -> f64 {
        self.ultimate_strain
    }

    pub fn poisson_ratio(&self) -> f64 {
        self.poisson_ratio
    }

    /// Unit weight (lb/in³)
    pub fn unit_weight_pci(&self) -> f64 {
        self.unit_weight_pci
    }

    /// Coefficient of thermal expansion (1/°F)
    pub fn thermal_expansion(&self) -> f64 {
        self.thermal_expansion
    }

    // === Derived properties ===

    /// Yield strain εy = fy / Es
    pub fn yield_strain(&self) -> f64 {
        eq::yield_strain(self.fy_psi, self.es_psi)
    }

    /// Same as [`Steel::yield_strain`]
    pub fn epsilon_y(&self) -> f64 {
        self.yield_strain()
    }

    /// Approximate ultimate stress 1.1 fy (psi)
    pub fn ultimate_stress(&self) -> f64 {
        eq::steel_ultimate_stress(self.fy_psi)
    }

    /// Shear modulus Es / (2(1+ν)) (psi)
    pub fn shear_modulus(&self) -> f64 {
        shear_modulus(self.es_psi, self.poisson_ratio)
    }

    /// Stress (psi) at the given strain under the bilinear law.
    ///
    /// Tension positive; compression returns the mirrored negative stress.
    pub fn stress(&self, strain: f64) -> f64 {
        eq::bilinear_stress(strain, self.fy_psi, self.es_psi)
    }

    /// Snapshot of every stored and derived property
    pub fn properties(&self) -> SteelProperties {
        SteelProperties {
            fy_psi: self.fy_psi,
            es_psi: self.es_psi,
            yield_strain: self.yield_strain(),
            ultimate_stress_psi: self.ultimate_stress(),
            ultimate_strain: self.ultimate_strain,
            gs_psi: self.shear_modulus(),
            poisson_ratio: self.poisson_ratio,
            unit_weight_pci: self.unit_weight_pci,
            thermal_expansion: self.thermal_expansion,
        }
    }

    /// Get display name (e.g., "fy = 60 ksi Steel")
    pub fn display_name(&self) -> String {
        let fy: Ksi = Psi(self.fy_psi).into();
        format!("fy = {} ksi Steel", fy.value())
    }
}

impl std::fmt::Display for Steel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Computed steel properties for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Yield strength fy (psi)
    pub fy_psi: f64,
    /// Modulus of elasticity Es (psi)
    pub es_psi: f64,
    /// Yield strain εy
    pub yield_strain: f64,
    /// Ultimate stress (psi)
    pub ultimate_stress_psi: f64,
    /// Ultimate strain εsu
    pub ultimate_strain: f64,
    /// Shear modulus (psi)
    pub gs_psi: f64,
    /// Poisson's ratio
    pub poisson_ratio: f64,
    /// Unit weight (lb/in³)
    pub unit_weight_pci: f64,
    /// Thermal expansion (1/°F)
    pub thermal_expansion: f64,
}
