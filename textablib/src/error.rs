//! Error types for textablib

use thiserror::Error;

/// Errors that can occur while validating a table configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextabError {
    /// Row count is zero
    #[error("row count must be greater than zero")]
    InvalidRows,

    /// Column count is zero
    #[error("column count must be greater than zero")]
    InvalidColumns,

    /// Unrecognized border style name
    #[error("unknown border style '{0}' (expected none, horizontal, or full)")]
    UnknownBorderStyle(String),

    /// Unrecognized font style name
    #[error("unknown font style '{0}' (expected normal or bold)")]
    UnknownFontStyle(String),
}
