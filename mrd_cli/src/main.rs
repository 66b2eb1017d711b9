//! # MRd CLI
//!
//! Command-line front-end for `mrd_core`.
//!
//! ```text
//! mrd_cli                 # demonstration section
//! mrd_cli section.json    # FlexuralInput from a JSON file
//! ```

use std::fs;
use std::process::ExitCode;

use mrd_core::materials::RebarSize;
use mrd_core::{calculate, CalcError, CalcResult, FlexuralInput, ReinforcementLayer, Section};

/// 300×600 mm beam, 35 mm nominal cover, 2Ø16 top and 4Ø16 bottom, C30/B500.
fn demo_input() -> FlexuralInput {
    let (b, h) = (300.0, 600.0);
    let cover = 35.0;
    let top = cover + RebarSize::D16.diameter_mm() / 2.0;
    let bottom = h - (cover + RebarSize::D16.diameter_mm() / 2.0);

    let section = Section::new(b, h)
        .with_layer(ReinforcementLayer::from_bars(top, &[RebarSize::D16; 2]))
        .with_layer(ReinforcementLayer::from_bars(bottom, &[RebarSize::D16; 4]));

    FlexuralInput::new("Demo 300x600", section)
}

fn load_input(path: &str) -> CalcResult<FlexuralInput> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::serialization(format!("Failed to read '{path}': {e}")))?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> ExitCode {
    let input = match std::env::args().nth(1) {
        Some(path) => match load_input(&path) {
            Ok(input) => input,
            Err(e) => return report_error(&e),
        },
        None => demo_input(),
    };

    println!("MRd - EC2 fiber method, rectangular section");
    println!("===========================================");
    println!();
    println!("Section:  {}", if input.label.is_empty() { "(unnamed)" } else { input.label.as_str() });
    println!("  b x h:  {:.0} x {:.0} mm", input.section.width_mm, input.section.depth_mm);
    for layer in &input.section.layers {
        println!("  As:     {:.1} mm² at d = {:.1} mm", layer.area_mm2, layer.depth_mm);
    }
    println!(
        "  fck = {:.0} MPa, fyk = {:.0} MPa, {} fibers",
        input.materials.fck_mpa, input.materials.fyk_mpa, input.settings.fiber_count
    );
    println!();

    match calculate(&input) {
        Ok(result) => {
            println!("{}", result.positive);
            println!("{}", result.negative);

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &CalcError) -> ExitCode {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}
