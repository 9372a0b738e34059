//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::cli::CliOutput;

/// Assert the process exited with `expected`
pub fn assert_exit(output: &CliOutput, expected: i32) {
    assert_eq!(
        output.status,
        Some(expected),
        "Expected exit status {}, got {:?}. Stderr: {}",
        expected,
        output.status,
        output.stderr
    );
}

/// Assert success and 16 lines of `palette = N=#rrggbb`
pub fn assert_palette_lines(output: &CliOutput) {
    assert_exit(output, 0);
    let lines = output.lines();
    assert_eq!(lines.len(), 16, "Expected 16 lines, got:\n{}", output.stdout);
    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("palette = {i}=#");
        assert!(line.starts_with(&prefix), "Line {i} malformed: {line}");
        assert_hex_literal(&line[prefix.len() - 1..]);
    }
}

/// Assert success and 16 lines of `colorN   #rrggbb`
pub fn assert_kitty_lines(output: &CliOutput) {
    assert_exit(output, 0);
    let lines = output.lines();
    assert_eq!(lines.len(), 16, "Expected 16 lines, got:\n{}", output.stdout);
    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("color{i}   ");
        assert!(line.starts_with(&prefix), "Line {i} malformed: {line}");
        assert_hex_literal(&line[prefix.len()..]);
    }
}

/// Assert `s` is a lowercase `#rrggbb` literal
pub fn assert_hex_literal(s: &str) {
    assert_eq!(s.len(), 7, "Not a #rrggbb literal: {s}");
    assert!(s.starts_with('#'), "Missing '#': {s}");
    assert!(
        s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Not lowercase hex: {s}"
    );
}
