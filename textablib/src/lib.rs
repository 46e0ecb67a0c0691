//! # textablib
//!
//! A LaTeX table markup generator that produces a full-size `tabular`
//! environment together with a size-bounded preview companion.
//!
//! ## Overview
//!
//! Given a [`TableConfig`] (dimensions plus a handful of style flags), the
//! generator deterministically emits two strings:
//!
//! - **Full**: a complete `tabular` environment at the requested size,
//!   ready to paste into a document or write to a `.tex` file
//! - **Preview**: the same table truncated to at most 5 rows and 5 data
//!   columns, emitted as a math-mode `array` environment so an inline
//!   math renderer can display it live
//!
//! The preview is always an independently well-formed table, and every
//! cell it shares with the full output is byte-identical to it.
//!
//! ## Features
//!
//! - **Border styles**: none, horizontal rules only, or full boxing with
//!   vertical boundaries on every column edge
//! - **Generated content**: header labels, 1-based row numbers, and either
//!   placeholder labels or random numeric cell values
//! - **Deterministic output**: the random source is injectable, so callers
//!   can seed it and reproduce a table exactly
//! - **Pure generation**: no I/O, no shared state, each call stands alone
//!
//! ## Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use textablib::{generate_with, BorderStyle, FontStyle, TableConfig};
//!
//! let config = TableConfig::new(3, 2)
//!     .border(BorderStyle::Full)
//!     .font(FontStyle::Bold)
//!     .with_header();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let markup = generate_with(&config, &mut rng).unwrap();
//!
//! assert!(markup.full.starts_with("\\begin{tabular}{|c|c|}"));
//! assert!(markup.full.contains("\\textbf{Header 1}"));
//! assert!(markup.preview.ends_with("\\end{array}"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod markup;

pub use config::{BorderStyle, FontStyle, TableConfig};
pub use error::TextabError;
pub use generator::{
    generate, generate_with, GeneratedMarkup, PREVIEW_MAX_COLUMNS, PREVIEW_MAX_ROWS,
};
pub use markup::styled;

/// Result type for textablib operations
pub type Result<T> = std::result::Result<T, TextabError>;
