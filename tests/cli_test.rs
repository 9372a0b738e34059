//! Tests for the termtint command line.

mod common;

use std::io::Write;

use common::{assert_exit, assert_kitty_lines, assert_palette_lines, run, run_with_env};
use pretty_assertions::assert_eq;

#[test]
fn test_default_output_format() {
    let output = run(&["#3366cc"]);

    assert_palette_lines(&output);
    let lines = output.lines();
    assert_eq!(lines[0], "palette = 0=#1a1a1a");
    assert_eq!(lines[7], "palette = 7=#abb2bf");
    assert_eq!(lines[8], "palette = 8=#5c6370");
    assert_eq!(lines[15], "palette = 15=#ffffff");
}

#[test]
fn test_base_color_without_hash() {
    let with_hash = run(&["#3366cc"]);
    let without_hash = run(&["3366cc"]);

    assert_palette_lines(&without_hash);
    assert_eq!(with_hash.stdout, without_hash.stdout);
}

#[test]
fn test_kitty_output_format() {
    let output = run(&["3366cc", "--kitty"]);

    assert_kitty_lines(&output);
    let lines = output.lines();
    assert_eq!(lines[0], "color0   #1a1a1a");
    assert_eq!(lines[15], "color15   #ffffff");
}

#[test]
fn test_light_mode() {
    let output = run(&["3366cc", "--light"]);

    assert_palette_lines(&output);
    let lines = output.lines();
    assert_eq!(lines[0], "palette = 0=#f8f8f8");
    assert_eq!(lines[7], "palette = 7=#2e2e2e");
    assert_eq!(lines[15], "palette = 15=#1a1a1a");
}

#[test]
fn test_background_override() {
    for args in [
        vec!["3366cc", "--background", "#000000"],
        vec!["3366cc", "--light", "--background", "000000"],
    ] {
        let output = run(&args);
        assert_palette_lines(&output);
        assert_eq!(output.lines()[0], "palette = 0=#000000");
    }
}

#[test]
fn test_honor_primary() {
    let output = run(&["3366cc", "--honor-primary", "ff00ff"]);

    assert_palette_lines(&output);
    let lines = output.lines();
    assert_eq!(lines[5], "palette = 5=#dd2cdd");
    assert_eq!(lines[6], "palette = 6=#ff00ff");
    assert_eq!(lines[12], "palette = 12=#ff00ff");
}

#[test]
fn test_honor_primary_light() {
    let output = run(&["3366cc", "--light", "--honor-primary", "ff00ff"]);

    assert_palette_lines(&output);
    let lines = output.lines();
    assert_eq!(lines[5], "palette = 5=#c813c8");
    assert_eq!(lines[6], "palette = 6=#c600c6");
    assert_eq!(lines[12], "palette = 12=#f900f9");
}

#[test]
fn test_missing_base_color_is_usage_error() {
    let output = run(&[]);

    assert_exit(&output, 1);
    assert!(output.stdout.is_empty());
    assert!(
        output.stderr.contains("Usage"),
        "Expected usage on stderr, got: {}",
        output.stderr
    );
}

#[test]
fn test_flag_without_value_is_error() {
    for flag in ["--background", "--honor-primary"] {
        let output = run(&["3366cc", flag]);

        assert_exit(&output, 1);
        assert!(output.stdout.is_empty());
        assert!(
            output.stderr.contains(flag),
            "Expected {flag} in error, got: {}",
            output.stderr
        );
    }
}

#[test]
fn test_malformed_color_is_error() {
    for args in [
        vec!["zzzzzz"],
        vec!["#12345"],
        vec!["3366cc", "--background", "#00000g"],
    ] {
        let output = run(&args);

        assert_exit(&output, 1);
        assert!(output.stdout.is_empty());
        assert!(
            output.stderr.contains("invalid color format"),
            "Expected typed color error, got: {}",
            output.stderr
        );
    }
}

#[test]
fn test_help_exits_successfully() {
    let output = run(&["--help"]);

    assert_exit(&output, 0);
    assert!(output.stdout.contains("--honor-primary"));
}

#[test]
fn test_config_file_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode: light\nformat: kitty\nbackground: \"#000000\"").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["3366cc", "--config", path]);
    assert_kitty_lines(&output);
    assert_eq!(output.lines()[0], "color0   #000000");

    // Flags win over the file
    let output = run(&["3366cc", "--config", path, "--background", "#101010"]);
    assert_kitty_lines(&output);
    assert_eq!(output.lines()[0], "color0   #101010");
}

#[test]
fn test_config_file_from_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format: kitty").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_with_env(&["3366cc"], &[("TERMTINT_CONFIG", path)]);
    assert_kitty_lines(&output);
}

#[test]
fn test_broken_environment_config_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let output = run_with_env(&["3366cc"], &[("TERMTINT_CONFIG", missing.to_str().unwrap())]);
    assert_palette_lines(&output);
    assert!(output.stderr.contains("Failed to load config"));
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let output = run(&["3366cc", "--config", missing.to_str().unwrap()]);
    assert_exit(&output, 1);
    assert!(output.stderr.contains("Failed to read config file"));
}

#[test]
fn test_unreachable_contrast_is_logged_not_fatal() {
    let output = run(&["3366cc", "--background", "#767676"]);

    assert_palette_lines(&output);
    assert!(
        output.stderr.contains("Contrast repair could not reach the minimum ratio"),
        "Expected warning on stderr, got: {}",
        output.stderr
    );
}
