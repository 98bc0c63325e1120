//! Parses `rgb.txt` and generates a perfect-hash named-color lookup table.

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("named_colors.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let rgb_txt_path = Path::new(&manifest_dir).join("rgb.txt");

    println!("cargo:rerun-if-changed=rgb.txt");
    println!("cargo:rerun-if-changed=build.rs");

    let file = File::open(&rgb_txt_path).expect("failed to open rgb.txt");
    let reader = BufReader::new(file);

    let mut colors: HashMap<String, (u8, u8, u8)> = HashMap::new();

    for line in reader.lines() {
        let line = line.expect("failed to read rgb.txt line");
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            continue;
        }
        let (Ok(r), Ok(g), Ok(b)) = (
            parts[0].parse::<u8>(),
            parts[1].parse::<u8>(),
            parts[2].parse::<u8>(),
        ) else {
            continue;
        };
        let name = parts[3..].join(" ");
        let normalized = name.to_lowercase().replace(' ', "");
        colors.entry(normalized).or_insert((r, g, b));
    }

    let out_file = File::create(&dest_path).expect("failed to create named_colors.rs");
    let mut writer = BufWriter::new(out_file);

    writeln!(writer, "// Auto-generated from rgb.txt - do not edit.").unwrap();
    writeln!(writer).unwrap();
    writeln!(
        writer,
        "pub const NAMED_COLOR_COUNT: usize = {};",
        colors.len()
    )
    .unwrap();
    writeln!(writer).unwrap();

    let mut phf_builder = phf_codegen::Map::<&[u8]>::new();
    for (normalized, (r, g, b)) in &colors {
        phf_builder.entry(normalized.as_bytes(), &format!("({r}, {g}, {b})"));
    }

    writeln!(
        writer,
        "static NAMED_COLORS_MAP: phf::Map<&'static [u8], (u8, u8, u8)> = {};",
        phf_builder.build()
    )
    .unwrap();
    writeln!(writer).unwrap();

    writeln!(
        writer,
        "#[inline]\npub fn lookup_normalized(name: &[u8]) -> Option<(u8, u8, u8)> {{\n    NAMED_COLORS_MAP.get(name).copied()\n}}"
    )
    .unwrap();
    writeln!(writer).unwrap();

    writeln!(
        writer,
        "#[inline]\npub fn lookup_named_color(name: &str) -> Option<(u8, u8, u8)> {{\n    let normalized: Vec<u8> = name.bytes()\n        .filter(|b| !b.is_ascii_whitespace())\n        .map(|b| b.to_ascii_lowercase())\n        .collect();\n    lookup_normalized(&normalized)\n}}"
    )
    .unwrap();
}
