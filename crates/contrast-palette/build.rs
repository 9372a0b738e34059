use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// WCAG 2.x linearization (0.03928 knee, as published in the WCAG text)
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("linear_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value. `{:?}` prints the shortest
    // representation that parses back to the identical f64.
    writeln!(file, "/// Lookup table for 8-bit sRGB channel to linear light").unwrap();
    writeln!(file, "/// Index: channel byte, Value: srgb_to_linear(byte / 255.0)").unwrap();
    writeln!(file, "pub static BYTE_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256u32 {
        let srgb = f64::from(i) / 255.0;
        let linear = srgb_to_linear_exact(srgb);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
