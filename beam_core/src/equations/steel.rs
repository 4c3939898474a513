//! # Reinforcing Steel Formulas
//!
//! Elastic-perfectly-plastic idealization of deformed reinforcing bars.
//! Stresses in psi, strains dimensionless.
//!
//! ## References
//!
//! - ACI 318-19 Section 20.2.2: Design properties of nonprestressed bars
//! - ASTM A615: Deformed carbon-steel bars for concrete reinforcement

/// Default modulus of elasticity for nonprestressed reinforcement (psi)
pub const STEEL_MODULUS_PSI: f64 = 29_000_000.0;

/// Yield strain, εy = fy / Es
#[inline]
pub fn yield_strain(fy_psi: f64, es_psi: f64) -> f64 {
    fy_psi / es_psi
}

/// Approximate ultimate (tensile) stress, fu = 1.1 fy
#[inline]
pub fn steel_ultimate_stress(fy_psi: f64) -> f64 {
    1.1 * fy_psi
}

/// Bilinear elastic-perfectly-plastic stress for a given strain.
///
/// ```text
///   fs
///  fy ┤      ┌───────────
///     │     ╱
///     │    ╱  slope Es
///     │   ╱
///     └──┴──────────────── εs
///        0   εy
/// ```
///
/// Returns `Es·ε` while `|Es·ε| ≤ fy`, otherwise `±fy` with the sign of the
/// strain. Compression mirrors tension; there is no strain hardening.
///
/// # Example
/// ```rust
/// use beam_core::equations::steel::{bilinear_stress, STEEL_MODULUS_PSI};
///
/// assert_eq!(bilinear_stress(0.01, 60_000.0, STEEL_MODULUS_PSI), 60_000.0);
/// assert_eq!(bilinear_stress(-0.01, 60_000.0, STEEL_MODULUS_PSI), -60_000.0);
/// ```
///
/// # Reference
/// - ACI 318-19 Section 20.2.2.1
pub fn bilinear_stress(strain: f64, fy_psi: f64, es_psi: f64) -> f64 {
    let elastic = strain * es_psi;
    if elastic.abs() <= fy_psi {
        elastic
    } else {
        fy_psi.copysign(strain)
    }
}
