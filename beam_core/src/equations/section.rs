//! # Cross-Section Property Formulas
//!
//! Formulas for geometric properties of beam cross-sections. The rectangular
//! primitives feed [`crate::shapes::RectangularShape`]; the generic formulas
//! (section modulus, radius of gyration) are shared by every shape through
//! the [`crate::shapes::Shape`] trait.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `S` = Elastic section modulus (I/c, where c = distance to extreme fiber)
//! - `Z` = Plastic section modulus
//! - `r` = Radius of gyration (√(I/A))
//! - `J` = Saint-Venant torsion constant
//! - `b` = Width of section
//! - `h` = Height (depth) of section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3 and Table 10.7
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties

// =============================================================================
// RECTANGULAR SECTION PRIMITIVES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(15.0, 24.0);
/// assert_eq!(area, 360.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate moment of inertia for rectangular section about centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← bending axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = b·d³/12
///
/// Pass (b, h) for the X-X axis (parallel to the width) and (h, b) for the
/// Y-Y axis.
///
/// # Arguments
/// * `b` - Dimension parallel to the bending axis
/// * `d` - Dimension perpendicular to the bending axis
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// // 15" x 24" beam, strong axis
/// let ixx = rectangular_moment_of_inertia(15.0, 24.0);
/// assert_eq!(ixx, 17_280.0);
/// ```
///
/// # Reference
/// - Roark's Formulas, Table A.1
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Calculate plastic section modulus for a doubly-symmetric solid rectangle
///
/// The plastic neutral axis coincides with the centroid, so each half of the
/// section contributes (b·d/2)·(d/4).
///
/// # Formula
/// Z = b·d²/4
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_plastic_modulus;
///
/// let zxx = rectangular_plastic_modulus(15.0, 24.0);
/// assert_eq!(zxx, 2160.0);
/// ```
#[inline]
pub fn rectangular_plastic_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 4.0
}

/// Calculate the approximate torsion constant of a solid rectangle
///
/// The section is first oriented so that `a` is the long side and `t` the
/// short side, so argument order does not matter.
///
/// # Formula
/// J ≈ a·t³ · [1/3 − 0.21 (t/a) (1 − t⁴/(12a⁴))]
///
/// Valid only for solid rectangular sections.
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_torsion_constant;
///
/// let j1 = rectangular_torsion_constant(15.0, 24.0);
/// let j2 = rectangular_torsion_constant(24.0, 15.0);
/// assert_eq!(j1, j2);
/// ```
///
/// # Reference
/// - Roark's Formulas, 8th Edition, Table 10.7 Case 4
pub fn rectangular_torsion_constant(b: f64, h: f64) -> f64 {
    let (a, t) = (b.max(h), b.min(h));
    a * t.powi(3) * (1.0 / 3.0 - 0.21 * (t / a) * (1.0 - t.powi(4) / (12.0 * a.powi(4))))
}

// =============================================================================
// GENERIC SECTION RELATIONSHIPS
// =============================================================================

/// Calculate elastic section modulus from inertia and extreme-fiber distance
///
/// The section modulus relates bending moment to extreme fiber stress:
/// σ = M/S
///
/// # Formula
/// S = I / c
///
/// # Example
/// ```rust
/// use beam_core::equations::section::elastic_section_modulus;
///
/// // 15" x 24" beam: c = h/2 = 12"
/// let sxx = elastic_section_modulus(17_280.0, 12.0);
/// assert_eq!(sxx, 1440.0);
/// ```
#[inline]
pub fn elastic_section_modulus(inertia: f64, c: f64) -> f64 {
    inertia / c
}

/// Calculate radius of gyration
///
/// Used for slenderness (kL/r) in buckling checks.
///
/// # Formula
/// r = √(I/A)
#[inline]
pub fn radius_of_gyration(inertia: f64, area: f64) -> f64 {
    (inertia / area).sqrt()
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_rectangular_area() {
        assert_eq!(rectangular_area(15.0, 24.0), 360.0);
        let a = rectangular_area(1.5, 9.25);
        assert!(approx_eq(a, 13.875), "A = {} (expected 13.875)", a);
    }

    #[test]
    fn test_rectangular_moment_of_inertia() {
        assert_eq!(rectangular_moment_of_inertia(15.0, 24.0), 17_280.0);
        assert_eq!(rectangular_moment_of_inertia(24.0, 15.0), 6750.0);
    }

    #[test]
    fn test_rectangular_plastic_modulus() {
        // Z/S = 1.5 for any rectangle
        let z = rectangular_plastic_modulus(12.0, 20.0);
        let s = elastic_section_modulus(rectangular_moment_of_inertia(12.0, 20.0), 10.0);
        assert!(approx_eq(z / s, 1.5), "shape factor = {}", z / s);
    }

    #[test]
    fn test_torsion_constant_square() {
        // Square: J ≈ 0.1406 a⁴ (exact series value 0.1406)
        let j = rectangular_torsion_constant(10.0, 10.0);
        let coeff = j / 10.0_f64.powi(4);
        assert!((coeff - 0.1408).abs() < 0.001, "J/a^4 = {}", coeff);
    }

    #[test]
    fn test_torsion_constant_thin_strip() {
        // Very thin strip tends to a·t³/3
        let j = rectangular_torsion_constant(100.0, 1.0);
        let thin = 100.0 / 3.0;
        assert!((j - thin).abs() / thin < 0.01, "J = {} (thin limit {})", j, thin);
    }

    #[test]
    fn test_torsion_constant_orientation_independent() {
        assert_eq!(
            rectangular_torsion_constant(15.0, 24.0),
            rectangular_torsion_constant(24.0, 15.0)
        );
    }

    #[test]
    fn test_elastic_section_modulus() {
        let i = rectangular_moment_of_inertia(1.5, 9.25);
        let s = elastic_section_modulus(i, 9.25 / 2.0);
        // bd²/6 = 21.39
        assert!(approx_eq(s, 21.39), "S = {} (expected 21.39)", s);
    }

    #[test]
    fn test_section_properties_consistency() {
        // I = A * r² for any section
        let b = 3.5;
        let d = 11.25;

        let i = rectangular_moment_of_inertia(b, d);
        let a = rectangular_area(b, d);
        let r = radius_of_gyration(i, a);

        assert!(approx_eq(i, a * r * r), "I = {}, A*r² = {}", i, a * r * r);
        assert!(approx_eq(r, d / 12.0_f64.sqrt()));
    }
}
