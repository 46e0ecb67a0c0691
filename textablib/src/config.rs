//! Input configuration for table generation.
//!
//! This module contains the configuration types that describe the table to
//! generate: its dimensions and the style choices applied to every cell.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TextabError;
use crate::Result;

/// Border drawing style for the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No rule lines and no vertical boundaries (default)
    #[default]
    None,
    /// Rule lines between rows; the only vertical boundary is the one
    /// separating the row-number column, when that column is enabled
    Horizontal,
    /// Rule lines between rows plus vertical boundaries on every column
    /// edge, outer edges included
    Full,
}

impl BorderStyle {
    /// Whether rule lines are emitted between data rows.
    pub fn rules_between_rows(self) -> bool {
        matches!(self, BorderStyle::Horizontal | BorderStyle::Full)
    }
}

impl FromStr for BorderStyle {
    type Err = TextabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "plain" => Ok(BorderStyle::None),
            "horizontal" | "hlines" => Ok(BorderStyle::Horizontal),
            "full" | "all" => Ok(BorderStyle::Full),
            _ => Err(TextabError::UnknownBorderStyle(s.to_string())),
        }
    }
}

/// Font style applied to every header and data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Cells are emitted unwrapped (default)
    #[default]
    Normal,
    /// Cells are wrapped in a bold directive
    Bold,
}

impl FromStr for FontStyle {
    type Err = TextabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "regular" => Ok(FontStyle::Normal),
            "bold" => Ok(FontStyle::Bold),
            _ => Err(TextabError::UnknownFontStyle(s.to_string())),
        }
    }
}

/// Immutable description of one table to generate.
///
/// Constructed once per generation call; the generator never mutates it.
/// Row and column counts must be positive, which [`TableConfig::validate`]
/// enforces before any output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of data rows
    pub rows: u32,
    /// Number of data columns (excluding the row-number column)
    pub columns: u32,
    /// Border drawing style
    pub border: BorderStyle,
    /// Font style for all cells
    pub font: FontStyle,
    /// Emit a generated header row before the data rows
    pub header: bool,
    /// Prepend a column containing the 1-based row number
    pub number_rows: bool,
    /// Fill data cells with random numeric values instead of placeholders
    pub numeric_cells: bool,
}

impl TableConfig {
    /// Create a config with the given dimensions and default styling.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            border: BorderStyle::default(),
            font: FontStyle::default(),
            header: false,
            number_rows: false,
            numeric_cells: false,
        }
    }

    /// Builder: set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Builder: set the font style.
    pub fn font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    /// Builder: include a header row.
    pub fn with_header(mut self) -> Self {
        self.header = true;
        self
    }

    /// Builder: include the row-number column.
    pub fn with_row_numbers(mut self) -> Self {
        self.number_rows = true;
        self
    }

    /// Builder: fill data cells with random numeric values.
    pub fn with_numeric_cells(mut self) -> Self {
        self.numeric_cells = true;
        self
    }

    /// Check that both dimensions are positive.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(TextabError::InvalidRows);
        }
        if self.columns == 0 {
            return Err(TextabError::InvalidColumns);
        }
        Ok(())
    }
}
