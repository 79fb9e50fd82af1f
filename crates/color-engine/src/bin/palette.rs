use std::env;

use color_engine::{convert, is_dark, PaletteGenerator};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <seed-color>", args[0]);
        eprintln!("Examples:");
        eprintln!("  {} \"#3b82f6\"", args[0]);
        eprintln!("  {} \"hsl(200, 60%, 50%)\"", args[0]);
        eprintln!("  {} rebeccapurple", args[0]);
        std::process::exit(1);
    }

    let seed = &args[1];

    let mut generator = PaletteGenerator::new();
    let palettes = match generator.generate(seed) {
        Ok(palettes) => palettes,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    println!(
        "Palettes for {} ({}, {})",
        seed,
        convert::to_hex(seed).unwrap_or_default(),
        if is_dark(seed) { "dark" } else { "light" }
    );
    println!();

    if palettes.is_empty() {
        println!("  Seed is too washed out, light, or dark for companion colors.");
        return;
    }

    for palette in &palettes {
        println!("  {}:", palette.kind);
        for color in &palette.colors {
            println!("    {} {}", color_swatch(color), color);
        }
        println!();
    }
}

fn color_swatch(color: &str) -> String {
    let rgb = match convert::parse(color) {
        Ok(rgb) => rgb,
        Err(_) => return "  ".to_string(),
    };

    // ANSI 24-bit escape with block characters.
    format!("\x1b[38;2;{};{};{}m██\x1b[0m", rgb.r, rgb.g, rgb.b)
}
