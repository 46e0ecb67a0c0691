//! Table markup generation.
//!
//! This module provides the main entry points for turning a [`TableConfig`]
//! into LaTeX markup: a complete `tabular` environment at the requested
//! size, plus a size-bounded `array` companion for live preview rendering.
//!
//! Generation is pure given its inputs: the convenience [`generate`] draws
//! numeric cell values from the thread-local random source, while
//! [`generate_with`] accepts any [`Rng`] so callers (and tests) can pin the
//! output deterministically.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{BorderStyle, TableConfig};
use crate::markup::{styled, Environment, MarkupWriter};
use crate::Result;

/// Maximum number of data rows in the preview output.
pub const PREVIEW_MAX_ROWS: u32 = 5;

/// Maximum number of data columns in the preview output. The row-number
/// column, when enabled, is emitted in addition to this bound.
pub const PREVIEW_MAX_COLUMNS: u32 = 5;

/// Header label for the row-number column.
const ROW_NUMBER_LABEL: &str = "No.";

/// The two markup strings produced by one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMarkup {
    /// Complete `tabular` environment at the requested size
    pub full: String,
    /// Independently well-formed `array` environment bounded to
    /// [`PREVIEW_MAX_ROWS`] × [`PREVIEW_MAX_COLUMNS`], intended for an
    /// inline math renderer
    pub preview: String,
}

/// Generate table markup using the thread-local random source.
///
/// Numeric cell values differ between calls; use [`generate_with`] with a
/// seeded source when the output must be reproducible.
///
/// # Example
///
/// ```rust
/// use textablib::{generate, TableConfig};
///
/// let markup = generate(&TableConfig::new(2, 2).with_header()).unwrap();
/// assert!(markup.full.starts_with("\\begin{tabular}"));
/// ```
pub fn generate(config: &TableConfig) -> Result<GeneratedMarkup> {
    generate_with(config, &mut rand::rng())
}

/// Generate table markup drawing numeric cell values from `rng`.
///
/// Fails with [`crate::TextabError::InvalidRows`] or
/// [`crate::TextabError::InvalidColumns`] when either dimension is zero;
/// no partial output is produced.
pub fn generate_with<R: Rng + ?Sized>(
    config: &TableConfig,
    rng: &mut R,
) -> Result<GeneratedMarkup> {
    config.validate()?;

    let preview_columns = config.columns.min(PREVIEW_MAX_COLUMNS);
    let preview_rows = config.rows.min(PREVIEW_MAX_ROWS);

    let mut full = MarkupWriter::open(
        Environment::Tabular,
        config.border,
        config.columns,
        config.number_rows,
    );
    let mut preview = MarkupWriter::open(
        Environment::Array,
        config.border,
        preview_columns,
        config.number_rows,
    );

    if config.header {
        let cells = header_cells(config);
        full.row(&cells);
        preview.row(&cells);
        if config.border != BorderStyle::None {
            full.rule();
            preview.rule();
        }
    }

    for row in 1..=config.rows {
        // Every row's cell sequence is built once at full width; the
        // preview writer takes its own prefix of the same cells.
        let cells = data_cells(config, row, rng);
        full.row(&cells);
        if row <= preview_rows {
            preview.row(&cells);
        }
        if config.border.rules_between_rows() {
            if row < config.rows {
                full.rule();
            }
            if row < preview_rows {
                preview.rule();
            }
        }
    }

    if config.border == BorderStyle::Full {
        full.rule();
        preview.rule();
    }

    Ok(GeneratedMarkup {
        full: full.finish(),
        preview: preview.finish(),
    })
}

/// Build the header row's cell sequence at full width.
fn header_cells(config: &TableConfig) -> Vec<String> {
    let mut cells = Vec::with_capacity(config.columns as usize + 1);
    if config.number_rows {
        cells.push(styled(ROW_NUMBER_LABEL, config.font));
    }
    for column in 1..=config.columns {
        cells.push(styled(format!("Header {}", column), config.font));
    }
    cells
}

/// Build one data row's cell sequence at full width.
fn data_cells<R: Rng + ?Sized>(config: &TableConfig, row: u32, rng: &mut R) -> Vec<String> {
    let mut cells = Vec::with_capacity(config.columns as usize + 1);
    if config.number_rows {
        cells.push(styled(row.to_string(), config.font));
    }
    for column in 1..=config.columns {
        let value = if config.numeric_cells {
            random_cell(rng)
        } else {
            format!("Column{}", column)
        };
        cells.push(styled(value, config.font));
    }
    cells
}

/// Uniform value in [0,1) truncated to 4 decimal places.
///
/// Formatting relies on Rust's shortest round-trip float display, so
/// trailing zeros are dropped (0.5 renders as "0.5", not "0.5000").
fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: f64 = rng.random();
    ((value * 10_000.0).floor() / 10_000.0).to_string()
}
