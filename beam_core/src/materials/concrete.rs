//! Normal-Weight Concrete (ACI 318)
//!
//! A `Concrete` is built from its specified compressive strength f'c and a
//! handful of physical constants that default to typical normal-weight
//! values. Every derived property is a pure function of the stored inputs
//! and is recomputed on each call.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Concrete, ConcreteInput};
//!
//! let conc = Concrete::new(4000.0)?;
//! assert_eq!(conc.beta1(), 0.85);
//!
//! // Override any default through the input struct
//! let lightweight = Concrete::try_from(ConcreteInput {
//!     poisson_ratio: 0.18,
//!     ..ConcreteInput::new(5000.0)
//! })?;
//! assert!(lightweight.shear_modulus() > 0.0);
//! # Ok::<(), beam_core::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::concrete as eq;
use crate::errors::{require_poisson, require_positive, CalcError, CalcResult};
use crate::units::{Pcf, Pci};

const MATERIAL: &str = "Concrete";

/// Default Poisson's ratio for concrete
pub const DEFAULT_POISSON_RATIO: f64 = 0.2;

/// Default ultimate compressive strain εcu (ACI 318-19 22.2.2.1)
pub const DEFAULT_ULTIMATE_STRAIN: f64 = 0.003;

/// Default strain at peak compressive stress ε0
pub const DEFAULT_STRAIN_AT_PEAK_STRESS: f64 = 0.002;

/// Default unit weight for normal-weight concrete (pcf)
pub const DEFAULT_UNIT_WEIGHT_PCF: f64 = 150.0;

/// Default coefficient of thermal expansion (1/°F)
pub const DEFAULT_THERMAL_EXPANSION: f64 = 6.0e-6;

fn default_poisson_ratio() -> f64 {
    DEFAULT_POISSON_RATIO
}

fn default_ultimate_strain() -> f64 {
    DEFAULT_ULTIMATE_STRAIN
}

fn default_strain_at_peak_stress() -> f64 {
    DEFAULT_STRAIN_AT_PEAK_STRESS
}

fn default_unit_weight_pci() -> f64 {
    Pci::from(Pcf(DEFAULT_UNIT_WEIGHT_PCF)).value()
}

fn default_thermal_expansion() -> f64 {
    DEFAULT_THERMAL_EXPANSION
}

/// Unvalidated concrete parameters, as read from JSON or assembled in code.
///
/// ## JSON Example
///
/// ```json
/// { "fc_psi": 5000.0, "poisson_ratio": 0.18 }
/// ```
///
/// Only `fc_psi` (alias `fc`) is required; everything else takes the
/// normal-weight default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteInput {
    /// Specified compressive strength f'c (psi)
    #[serde(alias = "fc", alias = "compressive_strength")]
    pub fc_psi: f64,

    /// Poisson's ratio ν
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,

    /// Ultimate compressive strain εcu
    #[serde(default = "default_ultimate_strain", alias = "ultimate_compressive_strain")]
    pub ultimate_strain: f64,

    /// Strain at peak compressive stress ε0
    #[serde(default = "default_strain_at_peak_stress", alias = "strain_at_ultimate_compressive_stress")]
    pub strain_at_peak_stress: f64,

    /// Unit weight (lb/in³)
    #[serde(default = "default_unit_weight_pci")]
    pub unit_weight_pci: f64,

    /// Coefficient of thermal expansion (1/°F)
    #[serde(default = "default_thermal_expansion")]
    pub thermal_expansion: f64,
}

impl ConcreteInput {
    /// Input with the given f'c and every other field at its default
    pub fn new(fc_psi: f64) -> Self {
        Self {
            fc_psi,
            poisson_ratio: DEFAULT_POISSON_RATIO,
            ultimate_strain: DEFAULT_ULTIMATE_STRAIN,
            strain_at_peak_stress: DEFAULT_STRAIN_AT_PEAK_STRESS,
            unit_weight_pci: default_unit_weight_pci(),
            thermal_expansion: DEFAULT_THERMAL_EXPANSION,
        }
    }
}

/// Validated concrete material.
///
/// Fields are private so a `Concrete` can only come from [`Concrete::new`] or
/// [`Concrete::try_from`], both of which reject non-positive inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConcreteInput", into = "ConcreteInput")]
pub struct Concrete {
    fc_psi: f64,
    poisson_ratio: f64,
    ultimate_strain: f64,
    strain_at_peak_stress: f64,
    unit_weight_pci: f64,
    thermal_expansion: f64,
}

impl TryFrom<ConcreteInput> for Concrete {
    type Error = CalcError;

    fn try_from(input: ConcreteInput) -> CalcResult<Self> {
        let concrete = Concrete {
            fc_psi: require_positive(MATERIAL, "fc_psi", input.fc_psi)?,
            poisson_ratio: require_poisson(MATERIAL, input.poisson_ratio)?,
            ultimate_strain: require_positive(MATERIAL, "ultimate_strain", input.ultimate_strain)?,
            strain_at_peak_stress: require_positive(
                MATERIAL,
                "strain_at_peak_stress",
                input.strain_at_peak_stress,
            )?,
            unit_weight_pci: require_positive(MATERIAL, "unit_weight_pci", input.unit_weight_pci)?,
            thermal_expansion: require_positive(MATERIAL, "thermal_expansion", input.thermal_expansion)?,
        };
        log::debug!("constructed {}", concrete);
        Ok(concrete)
    }
}

impl From<Concrete> for ConcreteInput {
    fn from(c: Concrete) -> Self {
        ConcreteInput {
            fc_psi: c.fc_psi,
            poisson_ratio: c.poisson_ratio,
            ultimate_strain: c.ultimate_strain,
            strain_at_peak_stress: c.strain_at_peak_stress,
            unit_weight_pci: c.unit_weight_pci,
            thermal_expansion: c.thermal_expansion,
        }
    }
}

impl Concrete {
    /// Concrete with the given f'c (psi) and default physical constants
    pub fn new(fc_psi: f64) -> CalcResult<Self> {
        Self::try_from(ConcreteInput::new(fc_psi))
    }

    // === Stored attributes ===

    /// Specified compressive strength f'c (psi)
    pub fn fc(&self) -> f64 {
        self.fc_psi
    }

    /// Same as [`Concrete::fc`]
    pub fn compressive_strength(&self) -> f64 {
        self.fc_psi
    }

    pub fn poisson_ratio(&self) -> f64 {
        self.poisson_ratio
    }

    /// Ultimate compressive strain εcu
    pub fn ultimate_compressive_strain(&self) -> f64 {
        self.ultimate_strain
    }

    /// Strain at peak compressive stress ε0
    pub fn strain_at_peak_stress(&self) -> f64 {
        self.strain_at_peak_stress
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

    /// Modulus of elasticity Ec = 57000√f'c (psi)
    pub fn modulus_of_elasticity(&self) -> f64 {
        eq::concrete_modulus_of_elasticity(self.fc_psi)
    }

    /// Same as [`Concrete::modulus_of_elasticity`]
    pub fn ec(&self) -> f64 {
        self.modulus_of_elasticity()
    }

    /// Shear modulus Gc = Ec / (2(1+ν)) (psi)
    pub fn shear_modulus(&self) -> f64 {
        eq::shear_modulus(self.modulus_of_elasticity(), self.poisson_ratio)
    }

    /// Approximate direct tensile strength 0.1 f'c (psi)
    pub fn tensile_strength(&self) -> f64 {
        eq::concrete_tensile_strength(self.fc_psi)
    }

    /// Cracking strain ft / Ec
    pub fn tensile_strain(&self) -> f64 {
        eq::concrete_tensile_strain(self.tensile_strength(), self.modulus_of_elasticity())
    }

    /// Modulus of rupture fr = 7.5√f'c (psi)
    pub fn modulus_of_rupture(&self) -> f64 {
        eq::modulus_of_rupture(self.fc_psi)
    }

    /// Whitney stress block factor β1 (ACI 318-19 Table 22.2.2.4.3)
    pub fn beta1_factor(&self) -> f64 {
        eq::beta1(self.fc_psi)
    }

    /// Same as [`Concrete::beta1_factor`]
    pub fn beta1(&self) -> f64 {
        self.beta1_factor()
    }

    /// Snapshot of every stored and derived property
    pub fn properties(&self) -> ConcreteProperties {
        ConcreteProperties {
            fc_psi: self.fc_psi,
            ec_psi: self.modulus_of_elasticity(),
            gc_psi: self.shear_modulus(),
            ft_psi: self.tensile_strength(),
            tensile_strain: self.tensile_strain(),
            fr_psi: self.modulus_of_rupture(),
            beta1: self.beta1_factor(),
            ultimate_strain: self.ultimate_strain,
            strain_at_peak_stress: self.strain_at_peak_stress,
            poisson_ratio: self.poisson_ratio,
            unit_weight_pci: self.unit_weight_pci,
            thermal_expansion: self.thermal_expansion,
        }
    }

    /// Get display name (e.g., "4000 psi Concrete")
    pub fn display_name(&self) -> String {
        format!("{} psi Concrete", self.fc_psi)
    }
}

impl std::fmt::Display for Concrete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Computed concrete properties for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Compressive strength f'c (psi)
    pub fc_psi: f64,
    /// Modulus of elasticity Ec (psi)
    pub ec_psi: f64,
    /// Shear modulus Gc (psi)
    pub gc_psi: f64,
    /// Direct tensile strength ft (psi)
    pub ft_psi: f64,
    /// Cracking strain
    pub tensile_strain: f64,
    /// Modulus of rupture fr (psi)
    pub fr_psi: f64,
    /// Stress block factor β1
    pub beta1: f64,
    /// Ultimate compressive strain εcu
    pub ultimate_strain: f64,
    /// Strain at peak stress ε0
    pub strain_at_peak_stress: f64,
    /// Poisson's ratio
    pub poisson_ratio: f64,
    /// Unit weight (lb/in³)
    pub unit_weight_pci: f64,
    /// Thermal expansion (1/°F)
    pub thermal_expansion: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn test_ec_calculation() {
        let c = Concrete::new(4000.0).unwrap();
        assert!(approx_eq(c.ec(), 57_000.0 * 4000.0_f64.sqrt(), 0.01));
        assert_eq!(c.ec(), c.modulus_of_elasticity());
    }

    #[test]
    fn test_beta1_limits() {
        let c1 = Concrete::new(3000.0).unwrap();
        let c2 = Concrete::new(6000.0).unwrap();
        let c3 = Concrete::new(9000.0).unwrap();
        assert_eq!(c1.beta1(), 0.85);
        assert!(c2.beta1() > 0.65 && c2.beta1() < 0.85);
        assert_eq!(c3.beta1(), 0.65);
    }

    #[test]
    fn test_beta1_breakpoints() {
        assert_eq!(Concrete::new(4000.0).unwrap().beta1_factor(), 0.85);
        assert_eq!(Concrete::new(8000.0).unwrap().beta1_factor(), 0.65);
    }

    #[test]
    fn test_defaults() {
        let c = Concrete::new(4000.0).unwrap();
        assert_eq!(c.fc(), 4000.0);
        assert_eq!(c.compressive_strength(), 4000.0);
        assert_eq!(c.poisson_ratio(), 0.2);
        assert_eq!(c.ultimate_compressive_strain(), 0.003);
        assert_eq!(c.strain_at_peak_stress(), 0.002);
        assert!(approx_eq(c.unit_weight_pci(), 150.0 / 1728.0, 1e-12));
        assert_eq!(c.thermal_expansion(), 6.0e-6);
    }

    #[test]
    fn test_derived_properties() {
        let c = Concrete::new(4000.0).unwrap();
        assert!(approx_eq(c.shear_modulus(), c.ec() / 2.4, 1e-12));
        assert!(approx_eq(c.tensile_strength(), 400.0, 1e-12));
        assert!(approx_eq(c.tensile_strain(), 400.0 / c.ec(), 1e-12));
        assert!(approx_eq(c.modulus_of_rupture(), 474.34, 1e-4));
    }

    #[test]
    fn test_repeated_access_is_identical() {
        let c = Concrete::new(5500.0).unwrap();
        assert_eq!(c.ec().to_bits(), c.ec().to_bits());
        assert_eq!(c.beta1().to_bits(), c.beta1().to_bits());
        assert_eq!(c.properties(), c.properties());
    }

    #[test]
    fn test_rejects_non_positive_strength() {
        for fc in [0.0, -4000.0, f64::NAN] {
            let err = Concrete::new(fc).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_MATERIAL_PROPERTY");
            match err {
                CalcError::InvalidMaterialProperty { material, property, .. } => {
                    assert_eq!(material, "Concrete");
                    assert_eq!(property, "fc_psi");
                }
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_bad_overrides() {
        let bad_poisson = ConcreteInput { poisson_ratio: 0.6, ..ConcreteInput::new(4000.0) };
        assert!(Concrete::try_from(bad_poisson).is_err());

        let bad_strain = ConcreteInput { ultimate_strain: 0.0, ..ConcreteInput::new(4000.0) };
        assert!(Concrete::try_from(bad_strain).is_err());

        let bad_weight = ConcreteInput { unit_weight_pci: -1.0, ..ConcreteInput::new(4000.0) };
        assert!(Concrete::try_from(bad_weight).is_err());
    }

    #[test]
    fn test_json_defaults_and_alias() {
        let c: Concrete = serde_json::from_str(r#"{ "fc": 5000.0 }"#).unwrap();
        assert_eq!(c, Concrete::new(5000.0).unwrap());

        let c: Concrete = serde_json::from_str(r#"{ "fc_psi": 5000.0, "poisson_ratio": 0.15 }"#).unwrap();
        assert_eq!(c.poisson_ratio(), 0.15);
    }

    #[test]
    fn test_json_validation() {
        let result: Result<Concrete, _> = serde_json::from_str(r#"{ "fc_psi": -1.0 }"#);
        assert!(result.is_err());

        let result: Result<Concrete, _> = serde_json::from_str(r#"{ "poisson_ratio": 0.2 }"#);
        assert!(result.is_err(), "fc_psi is required");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let c = Concrete::new(6000.0).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"fc_psi\":6000.0"));
        let parsed: Concrete = serde_json::from_str(&json).unwrap();
        assert_eq!(c, parsed);
    }

    #[test]
    fn test_display_name() {
        let c = Concrete::new(4000.0).unwrap();
        assert_eq!(c.display_name(), "4000 psi Concrete");
        assert_eq!(format!("{}", c), "4000 psi Concrete");
    }
}
