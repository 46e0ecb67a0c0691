//! # textab
//!
//! A CLI tool for generating parameterized LaTeX table markup.
//!
//! ## Overview
//!
//! textab is built on top of textablib and provides a command-line
//! interface for producing `tabular` environments of any size, plus a
//! size-bounded math-mode preview for quick inspection in an inline
//! renderer. Flag defaults come from a persisted settings file, so the
//! tool remembers the shape of table you usually generate.
//!
//! ## Usage
//!
//! ```bash
//! # 3x3 placeholder table (or whatever your saved defaults say)
//! textab
//!
//! # 10x4, boxed, bold header row, numbered rows
//! textab --rows 10 --columns 4 --border full --font bold --header --number-rows
//!
//! # Random numeric cells, reproducible via an explicit seed
//! textab -r 6 -c 3 --numeric --seed 42
//!
//! # Print the bounded preview markup instead of the full table
//! textab -r 100 -c 20 --preview
//!
//! # Write a .tex file, or copy the markup to the clipboard
//! textab -r 4 -c 4 --out table.tex
//! textab -r 4 -c 4 --copy
//!
//! # Emit both outputs as JSON
//! textab -r 2 -c 2 --output json
//!
//! # Persist the current flags as defaults; inspect or reset them
//! textab -r 8 -c 5 --border horizontal --save
//! textab defaults
//! textab defaults --clear
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use textablib::{generate, generate_with, BorderStyle, FontStyle, TableConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clipboard;
mod settings;

use settings::Settings;

/// Flag-default string for a border style.
fn border_name(border: BorderStyle) -> &'static str {
    match border {
        BorderStyle::None => "none",
        BorderStyle::Horizontal => "horizontal",
        BorderStyle::Full => "full",
    }
}

/// Flag-default string for a font style.
fn font_name(font: FontStyle) -> &'static str {
    match font {
        FontStyle::Normal => "normal",
        FontStyle::Bold => "bold",
    }
}

/// Build the clap Command structure, seeding defaults from saved settings.
fn build_command(defaults: &Settings) -> Command {
    Command::new("textab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate LaTeX table markup with a bounded live-preview companion")
        .arg(
            Arg::new("rows")
                .short('r')
                .long("rows")
                .default_value(defaults.rows.clone().leak() as &str)
                .help("Number of data rows"),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .default_value(defaults.columns.clone().leak() as &str)
                .help("Number of data columns"),
        )
        .arg(
            Arg::new("border")
                .short('b')
                .long("border")
                .default_value(border_name(defaults.border))
                .help("Border style: none, horizontal, or full"),
        )
        .arg(
            Arg::new("font")
                .long("font")
                .default_value(font_name(defaults.font))
                .help("Font style for all cells: normal or bold"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .action(ArgAction::SetTrue)
                .help("Emit a generated header row"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .conflicts_with("header")
                .help("Suppress the header row (overrides saved defaults)"),
        )
        .arg(
            Arg::new("number-rows")
                .short('n')
                .long("number-rows")
                .action(ArgAction::SetTrue)
                .help("Prepend a column containing the row number"),
        )
        .arg(
            Arg::new("no-number-rows")
                .long("no-number-rows")
                .action(ArgAction::SetTrue)
                .conflicts_with("number-rows")
                .help("Suppress the row-number column (overrides saved defaults)"),
        )
        .arg(
            Arg::new("numeric")
                .long("numeric")
                .action(ArgAction::SetTrue)
                .help("Fill data cells with random values in [0,1) instead of placeholders"),
        )
        .arg(
            Arg::new("no-numeric")
                .long("no-numeric")
                .action(ArgAction::SetTrue)
                .conflicts_with("numeric")
                .help("Use placeholder cells (overrides saved defaults)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the random source, for reproducible numeric cells"),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .action(ArgAction::SetTrue)
                .help("Print the bounded preview markup instead of the full table"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .help("Write the full markup to a file (extension forced to .tex)"),
        )
        .arg(
            Arg::new("copy")
                .long("copy")
                .action(ArgAction::SetTrue)
                .help("Copy the full markup to the system clipboard"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .action(ArgAction::SetTrue)
                .help("Persist the effective options as defaults for later runs"),
        )
        .subcommand(
            Command::new("defaults")
                .about("Show or reset the persisted default settings")
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .action(ArgAction::SetTrue)
                        .help("Delete the saved settings file"),
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .action(ArgAction::SetTrue)
                        .help("Print the settings file location"),
                ),
        )
}

/// Coerce a raw count string into a positive integer.
fn parse_count(raw: &str, what: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("{} count must be a positive integer, got '{}'", what, raw))
}

/// Resolve a boolean toggle: explicit on/off flags win over saved defaults.
fn resolve_flag(matches: &ArgMatches, on: &str, off: &str, saved: bool) -> bool {
    if matches.get_flag(off) {
        false
    } else if matches.get_flag(on) {
        true
    } else {
        saved
    }
}

/// Build the effective table configuration from flags and saved defaults,
/// along with the raw row/column strings (kept for `--save`).
fn extract_config(matches: &ArgMatches, saved: &Settings) -> Result<(TableConfig, String, String)> {
    let rows_raw = matches
        .get_one::<String>("rows")
        .cloned()
        .unwrap_or_else(|| saved.rows.clone());
    let columns_raw = matches
        .get_one::<String>("columns")
        .cloned()
        .unwrap_or_else(|| saved.columns.clone());

    let rows = parse_count(&rows_raw, "row")?;
    let columns = parse_count(&columns_raw, "column")?;

    let border: BorderStyle = matches
        .get_one::<String>("border")
        .map(|s| s.as_str())
        .unwrap_or("none")
        .parse()?;
    let font: FontStyle = matches
        .get_one::<String>("font")
        .map(|s| s.as_str())
        .unwrap_or("normal")
        .parse()?;

    let config = TableConfig {
        rows,
        columns,
        border,
        font,
        header: resolve_flag(matches, "header", "no-header", saved.header),
        number_rows: resolve_flag(matches, "number-rows", "no-number-rows", saved.number_rows),
        numeric_cells: resolve_flag(matches, "numeric", "no-numeric", saved.numeric_cells),
    };

    // Rejected here, before the generator runs, so nothing is emitted on failure.
    config.validate()?;

    Ok((config, rows_raw, columns_raw))
}

/// Handler for the root (generate) invocation.
fn generate_handler(matches: &ArgMatches, saved: &Settings) -> Result<()> {
    let (config, rows_raw, columns_raw) = extract_config(matches, saved)?;

    let seed = matches
        .get_one::<String>("seed")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| anyhow!("seed must be an unsigned integer, got '{}'", s))
        })
        .transpose()?;

    let markup = match seed {
        Some(seed) => generate_with(&config, &mut StdRng::seed_from_u64(seed))?,
        None => generate(&config)?,
    };

    let as_json = matches
        .get_one::<String>("output")
        .map(|s| s == "json")
        .unwrap_or(false);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&markup)?);
    } else if let Some(out) = matches.get_one::<String>("out") {
        let mut path = PathBuf::from(out);
        path.set_extension("tex");
        std::fs::write(&path, &markup.full)?;
        eprintln!("{} {}", style("Wrote").green().bold(), path.display());
    } else if matches.get_flag("preview") {
        println!("{}", markup.preview);
    } else {
        println!("{}", markup.full);
    }

    if matches.get_flag("copy") {
        match clipboard::copy(&markup.full) {
            Ok(()) => eprintln!("{}", style("Copied table markup to clipboard").green()),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {}", e);
                eprintln!("{} {}", style("Warning:").yellow().bold(), e);
            }
        }
    }

    if matches.get_flag("save") {
        let settings = Settings {
            rows: rows_raw,
            columns: columns_raw,
            border: config.border,
            font: config.font,
            header: config.header,
            number_rows: config.number_rows,
            numeric_cells: config.numeric_cells,
        };
        settings.save()?;
        eprintln!("{}", style("Saved as default settings").green());
    }

    Ok(())
}

/// Handler for the `defaults` subcommand.
fn defaults_handler(matches: &ArgMatches, saved: &Settings) -> Result<()> {
    if matches.get_flag("clear") {
        if Settings::clear()? {
            eprintln!("{}", style("Cleared saved settings").green());
        } else {
            eprintln!("No saved settings");
        }
        return Ok(());
    }

    if matches.get_flag("path") {
        println!("{}", Settings::path()?.display());
        return Ok(());
    }

    print!("{}", toml::to_string_pretty(saved)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let saved = Settings::load();
    let matches = build_command(&saved).get_matches();

    let result = match matches.subcommand() {
        Some(("defaults", sub)) => defaults_handler(sub, &saved),
        _ => generate_handler(&matches, &saved),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
