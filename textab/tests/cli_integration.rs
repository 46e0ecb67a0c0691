//! Integration tests for textab CLI

use std::process::Command;

fn run_textab(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "textab", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_textab(&["--help"]);

    assert!(success);
    assert!(stdout.contains("--rows"));
    assert!(stdout.contains("--columns"));
    assert!(stdout.contains("--border"));
    assert!(stdout.contains("--preview"));
    assert!(stdout.contains("defaults"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_textab(&["--version"]);

    assert!(success);
    assert!(stdout.contains("textab"));
}

#[test]
fn test_placeholder_table_output() {
    let (stdout, _, success) = run_textab(&[
        "--rows",
        "2",
        "--columns",
        "2",
        "--border",
        "none",
        "--font",
        "normal",
        "--header",
        "--no-number-rows",
        "--no-numeric",
    ]);

    assert!(success);
    assert!(stdout.starts_with("\\begin{tabular}{c c}\n"));
    assert!(stdout.contains("Header 1 & Header 2 \\\\\n"));
    assert_eq!(stdout.matches("Column1 & Column2 \\\\\n").count(), 2);
    assert!(stdout.trim_end().ends_with("\\end{tabular}"));
    assert!(!stdout.contains("\\hline"));
}

#[test]
fn test_full_border_layout() {
    let (stdout, _, success) = run_textab(&[
        "--rows",
        "1",
        "--columns",
        "1",
        "--border",
        "full",
        "--no-number-rows",
        "--no-numeric",
        "--no-header",
    ]);

    assert!(success);
    assert!(stdout.starts_with("\\begin{tabular}{|c|}\n\\hline\n"));
    assert_eq!(stdout.matches("\\hline").count(), 2);
}

#[test]
fn test_preview_is_bounded_array() {
    let (stdout, _, success) = run_textab(&[
        "--rows",
        "30",
        "--columns",
        "30",
        "--border",
        "none",
        "--no-header",
        "--no-number-rows",
        "--no-numeric",
        "--preview",
    ]);

    assert!(success);
    assert!(stdout.starts_with("\\begin{array}{c c c c c}\n"));
    assert_eq!(stdout.matches(" \\\\\n").count(), 5);
    assert!(stdout.trim_end().ends_with("\\end{array}"));
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_textab(&[
        "--rows",
        "2",
        "--columns",
        "2",
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let full = parsed["full"].as_str().unwrap();
    let preview = parsed["preview"].as_str().unwrap();
    assert!(full.starts_with("\\begin{tabular}"));
    assert!(preview.starts_with("\\begin{array}"));
}

#[test]
fn test_seeded_numeric_output_is_reproducible() {
    let args = [
        "--rows",
        "3",
        "--columns",
        "3",
        "--numeric",
        "--seed",
        "9",
        "--no-header",
        "--no-number-rows",
    ];
    let (first, _, success_first) = run_textab(&args);
    let (second, _, success_second) = run_textab(&args);

    assert!(success_first && success_second);
    assert_eq!(first, second);
    // Numeric cells parse as floats below one.
    let cell = first
        .lines()
        .nth(1)
        .unwrap()
        .split(" & ")
        .next()
        .unwrap();
    let value: f64 = cell.parse().unwrap();
    assert!((0.0..1.0).contains(&value));
}

#[test]
fn test_non_numeric_rows_rejected() {
    let (_, stderr, success) = run_textab(&["--rows", "abc"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("row count"));
}

#[test]
fn test_zero_columns_rejected() {
    let (stdout, stderr, success) = run_textab(&["--columns", "0"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    // No partial markup is emitted.
    assert!(!stdout.contains("\\begin"));
}

#[test]
fn test_out_forces_tex_extension() {
    let out = std::env::temp_dir().join("textab_cli_test_out.txt");
    let expected = std::env::temp_dir().join("textab_cli_test_out.tex");
    let _ = std::fs::remove_file(&expected);

    let (_, _, success) = run_textab(&[
        "--rows",
        "2",
        "--columns",
        "2",
        "--out",
        out.to_str().unwrap(),
    ]);

    assert!(success);
    let written = std::fs::read_to_string(&expected).expect("missing .tex file");
    assert!(written.starts_with("\\begin{tabular}"));
    assert!(written.ends_with("\\end{tabular}"));
    let _ = std::fs::remove_file(&expected);
}

#[test]
fn test_defaults_subcommand_prints_settings() {
    let (stdout, _, success) = run_textab(&["defaults"]);

    assert!(success);
    assert!(stdout.contains("rows"));
    assert!(stdout.contains("border"));
}
