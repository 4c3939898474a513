//! # Concrete Material Formulas
//!
//! Empirical relationships for normal-weight concrete. All stresses in psi,
//! strains dimensionless.
//!
//! ## Notation
//!
//! - `f'c` = Specified compressive strength
//! - `Ec` = Modulus of elasticity
//! - `Gc` = Shear modulus
//! - `ft` = Direct tensile strength (approximate)
//! - `fr` = Modulus of rupture
//! - `β1` = Whitney stress block depth factor
//!
//! ## References
//!
//! - ACI 318-19 Section 19.2.2: Modulus of elasticity
//! - ACI 318-19 Section 19.2.3: Modulus of rupture
//! - ACI 318-19 Table 22.2.2.4.3: Values of β1

/// f'c at and below which β1 = 0.85 (psi)
pub const BETA1_LOWER_FC_PSI: f64 = 4000.0;

/// f'c at and above which β1 = 0.65 (psi)
pub const BETA1_UPPER_FC_PSI: f64 = 8000.0;

/// Calculate the modulus of elasticity of normal-weight concrete
///
/// # Formula
/// Ec = 57,000 √f'c
///
/// # Example
/// ```rust
/// use beam_core::equations::concrete::concrete_modulus_of_elasticity;
///
/// let ec = concrete_modulus_of_elasticity(4000.0);
/// assert!((ec - 3_605_000.0).abs() < 1000.0);
/// ```
///
/// # Reference
/// - ACI 318-19 Section 19.2.2.1(b)
#[inline]
pub fn concrete_modulus_of_elasticity(fc_psi: f64) -> f64 {
    57_000.0 * fc_psi.sqrt()
}

/// Calculate the shear modulus from Young's modulus and Poisson's ratio
///
/// # Formula
/// G = E / (2(1 + ν))
///
/// Valid for isotropic linear-elastic materials.
#[inline]
pub fn shear_modulus(e_psi: f64, poisson_ratio: f64) -> f64 {
    e_psi / (2.0 * (1.0 + poisson_ratio))
}

/// Approximate direct tensile strength, ft = 0.1 f'c
#[inline]
pub fn concrete_tensile_strength(fc_psi: f64) -> f64 {
    0.1 * fc_psi
}

/// Strain at which concrete cracks in direct tension, εt = ft / Ec
#[inline]
pub fn concrete_tensile_strain(ft_psi: f64, ec_psi: f64) -> f64 {
    ft_psi / ec_psi
}

/// Calculate the modulus of rupture (flexural tensile strength)
///
/// # Formula
/// fr = 7.5 √f'c  (λ = 1.0, normal-weight concrete)
///
/// # Example
/// ```rust
/// use beam_core::equations::concrete::modulus_of_rupture;
///
/// let fr = modulus_of_rupture(4000.0);
/// assert!((fr - 474.34).abs() < 0.01);
/// ```
///
/// # Reference
/// - ACI 318-19 Equation 19.2.3.1
#[inline]
pub fn modulus_of_rupture(fc_psi: f64) -> f64 {
    7.5 * fc_psi.sqrt()
}

/// Calculate β1, the ratio of Whitney stress block depth to neutral axis depth
///
/// ```text
///  β1
/// 0.85 ────────┐
///              │ ╲
///              │   ╲
/// 0.65         │     └──────────
///            4000   8000      f'c (psi)
/// ```
///
/// # Formula
/// - f'c ≤ 4000 psi: β1 = 0.85
/// - 4000 < f'c < 8000 psi: β1 = 0.85 - 0.05 (f'c - 4000) / 1000
/// - f'c ≥ 8000 psi: β1 = 0.65
///
/// The function is continuous; both breakpoints return the plateau value
/// exactly.
///
/// # Example
/// ```rust
/// use beam_core::equations::concrete::beta1;
///
/// assert_eq!(beta1(3000.0), 0.85);
/// assert!((beta1(5000.0) - 0.80).abs() < 1e-12);
/// assert_eq!(beta1(9000.0), 0.65);
/// ```
///
/// # Reference
/// - ACI 318-19 Table 22.2.2.4.3
pub fn beta1(fc_psi: f64) -> f64 {
    if fc_psi <= BETA1_LOWER_FC_PSI {
        0.85
    } else if fc_psi >= BETA1_UPPER_FC_PSI {
        0.65
    } else {
        0.85 - 0.05 * ((fc_psi - BETA1_LOWER_FC_PSI) / 1000.0)
    }
}
