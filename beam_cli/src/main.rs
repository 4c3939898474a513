//! # Beam Design CLI
//!
//! Prints material and cross-section properties for a reinforced concrete
//! beam.
//!
//! ```bash
//! beam_cli design.json   # read a DesignInput from a JSON file
//! beam_cli               # prompt for f'c, fy (or rebar grade), b and h
//! RUST_LOG=debug beam_cli design.json
//! ```

use std::io::{self, BufRead, Write};

use beam_core::materials::{Concrete, Material, RebarGrade, Steel};
use beam_core::report::DesignInput;
use beam_core::shapes::{RectangularShape, Shape};
use beam_core::{CalcError, CalcResult};

fn read_line(prompt: &str) -> CalcResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| CalcError::file_error("write", "stdout", e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;
    Ok(input)
}

/// Blank input takes the default.
fn parse_f64(field: &str, raw: &str, default: f64) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field, trimmed, "Expected a number"))
}

/// Steel from a yield strength in psi or a rebar grade such as "Gr60".
fn parse_steel(raw: &str, default_fy: f64) -> CalcResult<Steel> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Steel::new(default_fy);
    }
    match trimmed.parse::<f64>() {
        Ok(fy) => Steel::new(fy),
        Err(_) => RebarGrade::from_str_flexible(trimmed)
            .map(Steel::from_grade)
            .map_err(|_| {
                CalcError::invalid_input(
                    "fy_psi",
                    trimmed,
                    "Expected a yield strength in psi or a rebar grade (40, 60, 80, 100)",
                )
            }),
    }
}

fn prompt_f64(field: &str, prompt: &str, default: f64) -> CalcResult<f64> {
    parse_f64(field, &read_line(prompt)?, default)
}

fn load_input(path: &str) -> CalcResult<DesignInput> {
    log::info!("reading design input from {}", path);
    let json = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    DesignInput::from_json(&json)
}

fn prompt_input() -> CalcResult<DesignInput> {
    let fc = prompt_f64("fc_psi", "Enter concrete strength f'c (psi) [4000]: ", 4000.0)?;
    let steel = parse_steel(
        &read_line("Enter steel fy (psi) or rebar grade, e.g. Gr60 [60000]: ")?,
        60_000.0,
    )?;
    let b = prompt_f64("b", "Enter section width b (in) [15]: ", 15.0)?;
    let h = prompt_f64("h", "Enter section height h (in) [24]: ", 24.0)?;
    println!();

    Ok(DesignInput::new(
        Concrete::new(fc)?,
        steel,
        RectangularShape::new(b, h)?,
    ))
}

fn banner(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn print_concrete(concrete: &Concrete) {
    banner(&format!("CONCRETE: {}", concrete));
    println!("  f'c   = {:.0} psi", concrete.fc());
    println!("  Ec    = {:.0} psi", concrete.ec());
    println!("  Gc    = {:.0} psi", concrete.shear_modulus());
    println!("  ft    = {:.1} psi", concrete.tensile_strength());
    println!("  εt    = {:.6}", concrete.tensile_strain());
    println!("  fr    = {:.1} psi", concrete.modulus_of_rupture());
    println!("  β1    = {:.3}", concrete.beta1());
    println!("  εcu   = {}", concrete.ultimate_compressive_strain());
    println!("  ε0    = {}", concrete.strain_at_peak_stress());
    println!("  ν     = {}", concrete.poisson_ratio());
    println!();
}

fn print_steel(steel: &Steel) {
    banner(&format!("STEEL: {}", steel));
    println!("  fy    = {:.0} psi", steel.fy());
    println!("  Es    = {:.0} psi", steel.es());
    println!("  εy    = {:.6}", steel.epsilon_y());
    println!("  fu    = {:.0} psi", steel.ultimate_stress());
    println!("  εsu   = {}", steel.ultimate_strain());
    println!("  ν     = {}", steel.poisson_ratio());
    println!("  Stress-strain samples:");
    for strain in [0.0005, 0.001, 0.002, 0.01, -0.01] {
        println!("    ε = {:>8} → fs = {:>9.0} psi", strain, steel.stress(strain));
    }
    println!();
}

fn print_materials(input: &DesignInput) {
    let concrete = Material::from(input.concrete);
    let steel = Material::from(input.steel);

    banner("MATERIALS");
    for material in [concrete, steel] {
        println!(
            "  {:9} {:22} E = {:>10.0} psi, w = {:.4} lb/in³, α = {:e} /°F",
            material.material_type(),
            material.display_name(),
            material.modulus_of_elasticity(),
            material.unit_weight_pci(),
            material.thermal_expansion(),
        );
    }
    println!(
        "  Modular ratio n = Es/Ec = {:.2}",
        steel.modulus_of_elasticity() / concrete.modulus_of_elasticity()
    );
    println!();
}

fn print_section(section: &RectangularShape) {
    banner(&format!("SECTION: {}", section));
    print!("{}", section.summary());
    println!();
}

fn run() -> CalcResult<()> {
    let input = match std::env::args().nth(1) {
        Some(path) => load_input(&path)?,
        None => prompt_input()?,
    };

    print_concrete(&input.concrete);
    print_steel(&input.steel);
    print_materials(&input);
    print_section(&input.section);

    let report = input.evaluate();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    env_logger::init();

    println!("Beam Design - Material and Section Properties");
    println!("=============================================");
    println!();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_blank_takes_default() {
        assert_eq!(parse_f64("fc_psi", "", 4000.0).unwrap(), 4000.0);
        assert_eq!(parse_f64("fc_psi", "  \n", 4000.0).unwrap(), 4000.0);
    }

    #[test]
    fn test_parse_f64_valid() {
        assert_eq!(parse_f64("fc_psi", "5000\n", 4000.0).unwrap(), 5000.0);
        assert_eq!(parse_f64("b", " 12.5 ", 15.0).unwrap(), 12.5);
    }

    #[test]
    fn test_parse_f64_rejects_garbage() {
        for raw in ["abc", "4000psi\n", "1,000"] {
            let err = parse_f64("fc_psi", raw, 4000.0).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "input {:?}", raw);
        }

        match parse_f64("h", "24in\n", 24.0).unwrap_err() {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "h");
                assert_eq!(value, "24in");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_parse_steel() {
        let default = Steel::new(60_000.0).unwrap();
        assert_eq!(parse_steel("\n", 60_000.0).unwrap(), default);
        assert_eq!(parse_steel("60000", 60_000.0).unwrap(), default);
        assert_eq!(
            parse_steel("Gr80\n", 60_000.0).unwrap(),
            Steel::from_grade(RebarGrade::Grade80)
        );
        assert_eq!(parse_steel("grade 40", 60_000.0).unwrap().fy(), 40_000.0);
    }

    #[test]
    fn test_parse_steel_errors() {
        let err = parse_steel("sixty", 60_000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = parse_steel("-60000", 60_000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_PROPERTY");
    }
}
