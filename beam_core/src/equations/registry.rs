//! # Equation Registry
//!
//! Central registry of every formula evaluated by beam_core. Each equation
//! carries its plain-text formula, code reference, variables, assumptions and
//! the function that implements it, so results can be audited back to source.
//!
//! ## Usage
//!
//! ```rust
//! use beam_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::Beta1Factor.metadata();
//! assert_eq!(meta.category, EquationCategory::ConcreteProperties);
//! println!("{}: {}", meta.name, meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code, standard or handbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// ASTM material standard
    ASTM { designation: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
    /// Simplified approximation used in preliminary design
    Approximation,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::ASTM { designation } => format!("ASTM {}", designation),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
            CodeReference::Approximation => "Preliminary Design Approximation".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::ASTM { .. } => "ASTM",
            CodeReference::Mechanics => "Mechanics",
            CodeReference::Approximation => "Approx.",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Concrete stiffness, strength and stress block
    ConcreteProperties,
    /// Reinforcing steel strain and stress
    SteelProperties,
    /// Section properties (A, I, S, Z, r, J)
    SectionProperties,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::ConcreteProperties => "Concrete Properties",
            EquationCategory::SteelProperties => "Steel Properties",
            EquationCategory::SectionProperties => "Section Properties",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::ConcreteProperties => 1,
            EquationCategory::SteelProperties => 2,
            EquationCategory::SectionProperties => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "f'c", "Es", "b")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "psi", "in^4", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Concrete Modulus of Elasticity")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas evaluated by beam_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Concrete
    // -------------------------------------------------------------------------
    /// Ec = 57000 √f'c
    ConcreteModulusOfElasticity,
    /// Gc = Ec / (2(1 + ν))
    ConcreteShearModulus,
    /// ft = 0.1 f'c
    ConcreteTensileStrength,
    /// εt = ft / Ec
    ConcreteTensileStrain,
    /// fr = 7.5 √f'c
    ModulusOfRupture,
    /// β1 piecewise in f'c
    Beta1Factor,

    // -------------------------------------------------------------------------
    // Steel
    // -------------------------------------------------------------------------
    /// εy = fy / Es
    SteelYieldStrain,
    /// fu = 1.1 fy
    SteelUltimateStress,
    /// fs = min(Es εs, fy)
    SteelBilinearStress,

    // -------------------------------------------------------------------------
    // Section Properties
    // -------------------------------------------------------------------------
    /// A = bh
    RectangularArea,
    /// I = bd^3/12
    RectangularMomentOfInertia,
    /// S = I/c
    ElasticSectionModulus,
    /// Z = bd^2/4
    RectangularPlasticModulus,
    /// r = √(I/A)
    RadiusOfGyration,
    /// J for a solid rectangle
    RectangularTorsionConstant,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ConcreteModulusOfElasticity => EquationMetadata {
                name: "Concrete Modulus of Elasticity",
                description: "Secant modulus of normal-weight concrete from its compressive strength",
                formula_plain: "Ec = 57000 * sqrt(f'c)",
                reference: CodeReference::ACI318 { year: 2019, section: "19.2.2.1" },
                variables: vec![
                    Variable::new("Ec", "Modulus of elasticity", "psi"),
                    Variable::new("f'c", "Specified compressive strength", "psi"),
                ],
                assumptions: vec!["Normal-weight concrete; unit weight does not enter the formula"],
                category: EquationCategory::ConcreteProperties,
                source_module: "equations/concrete.rs",
                source_function: "concrete_modulus_of_elasticity",
            },

            Equation::ConcreteShearModulus => EquationMetadata {
                name: "Concrete Shear Modulus",
                description: "Shear modulus from elastic modulus and Poisson's ratio",
                formula_plain: "Gc = Ec / (2 * (1 + nu))",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Gc", "Shear modulus", "psi"),
                    Variable::new("Ec", "Modulus of elasticity", "psi"),
                    Variable::new("nu", "Poisson's ratio", "-"),
                ],
                assumptions: vec!["Isotropic linear-elastic material"],
                category: EquationCategory::ConcreteProperties,
                source_module: "equations/concrete.rs",
                source_function: "shear_modulus",
            },

            Equation::ConcreteTensileStrength => EquationMetadata {
                name: "Concrete Tensile Strength",
                description: "Approximate direct tensile strength of concrete",
                formula_plain: "ft = 0.1 * f'c",
                reference: CodeReference::Approximation,
                variables: vec![
                    Variable::new("ft", "Direct tensile strength", "psi"),
                    Variable::new("f'c", "Specified compressive strength", "psi"),
                ],
                assumptions: vec!["Rule-of-thumb ratio; not a code value"],
                category: EquationCategory::ConcreteProperties,
                source_module: "equations/concrete.rs",
                source_function: "concrete_tensile_strength",
            },

            Equation::ConcreteTensileStrain => EquationMetadata {
                name: "Concrete Cracking Strain",
                description: "Strain at which concrete cracks in direct tension",
                formula_plain: "et = ft / Ec",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("et", "Tensile (cracking) strain", "-"),
                    Variable::new("ft", "Direct tensile strength", "psi"),
                    Variable::new("Ec", "Modulus of elasticity", "psi"),
                ],
                assumptions: vec!["Linear-elastic up to cracking"],
                category: EquationCategory::ConcreteProperties,
                source_module: "equations/concrete.rs",
                source_function: "concrete_tensile_strain",
            },

            Equation::ModulusOfRupture => EquationMetadata {
                name: "Modulus of Rupture",
                description: "Flexural tensile strength of concrete",
                formula_plain: "fr = 7.5 * sqrt(f'c)",
                reference: CodeReference::ACI318 { year: 2019, section: "19.2.3.1" },
                variables: vec![
                    Variable::new("fr", "Modulus of rupture", "psi"),
                    Variable::new("f'c", "Specified compressive strength", "psi"),
                ],
                assumptions: vec!["Lambda = 1.0 (normal-weight concrete)"],
                category: EquationCategory::ConcreteProperties,
                source_module: "equations/concrete.rs",
                source_function: "modulus_of_rupture",
            },

            Equation::Beta1Factor => EquationMetadata {
                name: "Whitney Stress Block Factor",
                description: "Ratio of equivalent rectangular stress block depth to neutral axis depth",
                formula_plain: "beta1 = 0.85 for f'c <= 4000; 0.85 - 0.05(f'c - 4000)/1000 for 4000 < f'c < 8000; 0.65 for f'c >= 8000",
                reference: CodeReference::ACI318 { year: 2019, section: "22.2.2.4.3" },
                variables: vec![
                    Variable::new("beta1", "Stress block depth factor", "-"),
                    Variable::new("f'c", "Specified compressive strength", "psi"),
                ],
                assumptions: vec!["Continuous at both breakpoints"],
                category: EquationCategory::ConcreteProperties,
                source_module: "equations/concrete.rs",
                source_function: "beta1",
            },

            Equation::SteelYieldStrain => EquationMetadata {
                name: "Steel Yield Strain",
                description: "Strain at first yield of reinforcement",
                formula_plain: "ey = fy / Es",
                reference: CodeReference::ACI318 { year: 2019, section: "21.2.2.1" },
                variables: vec![
                    Variable::new("ey", "Yield strain", "-"),
                    Variable::new("fy", "Specified yield strength", "psi"),
                    Variable::new("Es", "Modulus of elasticity", "psi"),
                ],
                assumptions: vec!["Es = 29,000,000 psi unless specified"],
                category: EquationCategory::SteelProperties,
                source_module: "equations/steel.rs",
                source_function: "yield_strain",
            },

            Equation::SteelUltimateStress => EquationMetadata {
                name: "Steel Ultimate Stress",
                description: "Approximate tensile strength of reinforcement",
                formula_plain: "fu = 1.1 * fy",
                reference: CodeReference::Approximation,
                variables: vec![
                    Variable::new("fu", "Ultimate stress", "psi"),
                    Variable::new("fy", "Specified yield strength", "psi"),
                ],
                assumptions: vec!["Lower than ASTM A615 minimum tensile strength; conservative"],
                category: EquationCategory::SteelProperties,
                source_module: "equations/steel.rs",
                source_function: "steel_ultimate_stress",
            },

            Equation::SteelBilinearStress => EquationMetadata {
                name: "Steel Bilinear Stress-Strain",
                description: "Elastic-perfectly-plastic stress for a given strain",
                formula_plain: "fs = Es * es if |Es * es| <= fy, else fy * sign(es)",
                reference: CodeReference::ACI318 { year: 2019, section: "20.2.2.1" },
                variables: vec![
                    Variable::new("fs", "Steel stress", "psi"),
                    Variable::new("es", "Steel strain", "-"),
                    Variable::new("Es", "Modulus of elasticity", "psi"),
                    Variable::new("fy", "Specified yield strength", "psi"),
                ],
                assumptions: vec!["No strain hardening", "Compression mirrors tension"],
                category: EquationCategory::SteelProperties,
                source_module: "equations/steel.rs",
                source_function: "bilinear_stress",
            },

            Equation::RectangularArea => EquationMetadata {
                name: "Rectangular Area",
                description: "Gross cross-sectional area",
                formula_plain: "A = b * h",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A", "Area", "in^2"),
                    Variable::new("b", "Width", "in"),
                    Variable::new("h", "Height", "in"),
                ],
                assumptions: vec!["Solid rectangular section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_area",
            },

            Equation::RectangularMomentOfInertia => EquationMetadata {
                name: "Rectangular Moment of Inertia",
                description: "Second moment of area about a centroidal axis",
                formula_plain: "Ixx = b*h^3/12, Iyy = h*b^3/12",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "1" },
                variables: vec![
                    Variable::new("I", "Moment of inertia", "in^4"),
                    Variable::new("b", "Width", "in"),
                    Variable::new("h", "Height", "in"),
                ],
                assumptions: vec!["Solid rectangular section", "Centroidal axes"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_moment_of_inertia",
            },

            Equation::ElasticSectionModulus => EquationMetadata {
                name: "Elastic Section Modulus",
                description: "Inertia divided by the distance to the extreme fiber",
                formula_plain: "Sxx = Ixx / (h/2), Syy = Iyy / (b/2)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("S", "Elastic section modulus", "in^3"),
                    Variable::new("I", "Moment of inertia", "in^4"),
                    Variable::new("c", "Centroid to extreme fiber", "in"),
                ],
                assumptions: vec!["Centroid at mid-depth (doubly-symmetric section)"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "elastic_section_modulus",
            },

            Equation::RectangularPlasticModulus => EquationMetadata {
                name: "Plastic Section Modulus",
                description: "First moment of area of both halves about the plastic neutral axis",
                formula_plain: "Zxx = b*h^2/4, Zyy = h*b^2/4",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Z", "Plastic section modulus", "in^3"),
                    Variable::new("b", "Width", "in"),
                    Variable::new("h", "Height", "in"),
                ],
                assumptions: vec!["Doubly-symmetric rectangular section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_plastic_modulus",
            },

            Equation::RadiusOfGyration => EquationMetadata {
                name: "Radius of Gyration",
                description: "Governs slenderness in buckling checks",
                formula_plain: "r = sqrt(I / A)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("r", "Radius of gyration", "in"),
                    Variable::new("I", "Moment of inertia", "in^4"),
                    Variable::new("A", "Area", "in^2"),
                ],
                assumptions: vec![],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "radius_of_gyration",
            },

            Equation::RectangularTorsionConstant => EquationMetadata {
                name: "Rectangular Torsion Constant",
                description: "Saint-Venant torsion constant of a solid rectangle",
                formula_plain: "J = a*t^3 * (1/3 - 0.21*(t/a)*(1 - t^4/(12*a^4))), a = max(b,h), t = min(b,h)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 10.7", case: "4" },
                variables: vec![
                    Variable::new("J", "Torsion constant", "in^4"),
                    Variable::new("a", "Long side", "in"),
                    Variable::new("t", "Short side", "in"),
                ],
                assumptions: vec!["Solid rectangular section", "Approximate series truncation"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_torsion_constant",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![SectionProperties, ConcreteProperties, SteelProperties];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Concrete
    Equation::ConcreteModulusOfElasticity,
    Equation::ConcreteShearModulus,
    Equation::ConcreteTensileStrength,
    Equation::ConcreteTensileStrain,
    Equation::ModulusOfRupture,
    Equation::Beta1Factor,
    // Steel
    Equation::SteelYieldStrain,
    Equation::SteelUltimateStress,
    Equation::SteelBilinearStress,
    // Section properties
    Equation::RectangularArea,
    Equation::RectangularMomentOfInertia,
    Equation::ElasticSectionModulus,
    Equation::RectangularPlasticModulus,
    Equation::RadiusOfGyration,
    Equation::RectangularTorsionConstant,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document as Markdown.
///
/// ```rust
/// use beam_core::equations::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Section Properties"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Beam Design Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used to derive material and section
properties. Each equation includes its formula, code reference, source
location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Stress, modulus | psi |
| Length | in |
| Area | in^2 |
| Section modulus | in^3 |
| Inertia, torsion constant | in^4 |
| Unit weight | lb/in^3 |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 15);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let ec = Equation::ConcreteModulusOfElasticity.metadata();
        assert!(ec.formula_plain.contains("57000"), "Ec formula wrong");

        let j = Equation::RectangularTorsionConstant.metadata();
        assert!(j.formula_plain.contains("0.21"), "Torsion formula wrong");
    }

    #[test]
    fn test_concrete_modulus_assumption_has_no_unit_weight() {
        let meta = Equation::ConcreteModulusOfElasticity.metadata();
        assert!(meta.assumptions.iter().any(|a| a.starts_with("Normal-weight concrete")));
        assert!(meta.assumptions.iter().all(|a| !a.contains("pcf")));
    }

    #[test]
    fn test_code_reference_citation() {
        let aci = CodeReference::ACI318 { year: 2019, section: "22.2.2.4.3" };
        assert_eq!(aci.citation(), "ACI 318-19 Section 22.2.2.4.3");

        let roark = CodeReference::Roarks { edition: 8, table: "Table 10.7", case: "4" };
        assert_eq!(roark.citation(), "Roark's 8ed, Table 10.7, Case 4");

        let astm = CodeReference::ASTM { designation: "A615" };
        assert_eq!(astm.citation(), "ASTM A615");
        assert_eq!(astm.short_form(), "ASTM");
    }

    #[test]
    fn test_in_category() {
        let concrete = Equation::in_category(EquationCategory::ConcreteProperties);
        assert_eq!(concrete.len(), 6);
        assert!(concrete.contains(&Equation::Beta1Factor));

        let steel = Equation::in_category(EquationCategory::SteelProperties);
        assert_eq!(steel.len(), 3);

        let section = Equation::in_category(EquationCategory::SectionProperties);
        assert_eq!(section.len(), 6);
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
        assert_eq!(cats[0], EquationCategory::ConcreteProperties);
    }

    #[test]
    fn test_source_functions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for eq in ALL_EQUATIONS {
            assert!(
                seen.insert(eq.metadata().source_function),
                "Duplicate source function for {:?}",
                eq
            );
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Beam Design Equations Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");

        assert!(markdown.contains("## Concrete Properties"));
        assert!(markdown.contains("## Steel Properties"));
        assert!(markdown.contains("## Section Properties"));

        assert!(markdown.contains("### Rectangular Area"));
        assert!(markdown.contains("`A = b * h`"));
        assert!(markdown.contains("### Whitney Stress Block Factor"));

        assert!(markdown.contains("ACI 318-19"));
        assert!(markdown.contains("equations/concrete.rs"));

        assert!(markdown.contains("**Total Equations:** 15"));
        assert!(markdown.contains("**Categories:** 3"));

        // Concrete section precedes section properties
        let concrete_at = markdown.find("## Concrete Properties").unwrap();
        let section_at = markdown.find("## Section Properties").unwrap();
        assert!(concrete_at < section_at);
    }

    #[test]
    fn test_equation_serialization() {
        let json = serde_json::to_string(&Equation::Beta1Factor).unwrap();
        assert_eq!(json, "\"Beta1Factor\"");
        let parsed: Equation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Equation::Beta1Factor);
    }
}
