//! LaTeX emission primitives.
//!
//! Low-level building blocks shared by the full and preview outputs: the
//! column-specification string, cell styling, and [`MarkupWriter`], the
//! emitter that assembles one output string.
//!
//! The full table targets a document-mode `tabular` environment while the
//! preview targets a math-mode `array` environment (it is handed to an
//! inline math renderer). Both are assembled by the same writer; only the
//! environment name differs.

use crate::config::{BorderStyle, FontStyle};

/// Alignment token used for every generated column.
const COLUMN: &str = "c";

/// Horizontal rule line.
const RULE: &str = "\\hline";

/// Separator between cells within a row.
const CELL_SEP: &str = " & ";

/// Row terminator.
const ROW_END: &str = " \\\\";

/// Target environment for one output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Document-mode `tabular`, used for the full output
    Tabular,
    /// Math-mode `array`, used for the inline preview
    Array,
}

impl Environment {
    fn name(self) -> &'static str {
        match self {
            Environment::Tabular => "tabular",
            Environment::Array => "array",
        }
    }
}

/// Build the column-specification string for `columns` data columns.
///
/// `numbered` accounts for the extra row-number column. With full borders
/// every column edge carries a vertical boundary; with horizontal borders
/// the only boundary is the one separating the row-number column.
pub fn column_spec(border: BorderStyle, columns: u32, numbered: bool) -> String {
    let total = (columns + u32::from(numbered)) as usize;
    match border {
        BorderStyle::Full => {
            let mut spec = String::from("|");
            for _ in 0..total {
                spec.push_str("c|");
            }
            spec
        }
        BorderStyle::Horizontal => {
            let data = vec![COLUMN; columns as usize].join(" ");
            if numbered {
                format!("c|{}", data)
            } else {
                data
            }
        }
        BorderStyle::None => vec![COLUMN; total].join(" "),
    }
}

/// Apply the configured font style to one cell's text.
///
/// Bold wraps the text in `\textbf{…}`; normal is the identity. The
/// generator never styles already-wrapped text, so no nesting guard is
/// needed.
pub fn styled(text: impl Into<String>, font: FontStyle) -> String {
    let text = text.into();
    match font {
        FontStyle::Normal => text,
        FontStyle::Bold => format!("\\textbf{{{}}}", text),
    }
}

/// Emitter for a single output string.
///
/// One writer is created per output (full and preview), each with its own
/// cell-count ceiling. Both are fed the same cell sequences; the writer
/// takes its leading `width` cells, which keeps every shared cell
/// byte-identical between the two outputs.
#[derive(Debug)]
pub struct MarkupWriter {
    buf: String,
    env: Environment,
    /// Cells emitted per row, row-number column included
    width: usize,
}

impl MarkupWriter {
    /// Open the environment, emitting the column spec and (for full
    /// borders) the leading rule line.
    pub fn open(env: Environment, border: BorderStyle, columns: u32, numbered: bool) -> Self {
        let mut buf = format!(
            "\\begin{{{}}}{{{}}}\n",
            env.name(),
            column_spec(border, columns, numbered)
        );
        if border == BorderStyle::Full {
            buf.push_str(RULE);
            buf.push('\n');
        }
        Self {
            buf,
            env,
            width: (columns + u32::from(numbered)) as usize,
        }
    }

    /// Emit one row built from the leading `width` cells of `cells`.
    pub fn row(&mut self, cells: &[String]) {
        let mut first = true;
        for cell in cells.iter().take(self.width) {
            if !first {
                self.buf.push_str(CELL_SEP);
            }
            self.buf.push_str(cell);
            first = false;
        }
        self.buf.push_str(ROW_END);
        self.buf.push('\n');
    }

    /// Emit a horizontal rule line.
    pub fn rule(&mut self) {
        self.buf.push_str(RULE);
        self.buf.push('\n');
    }

    /// Close the environment and return the assembled markup.
    pub fn finish(mut self) -> String {
        self.buf.push_str("\\end{");
        self.buf.push_str(self.env.name());
        self.buf.push('}');
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_spec_none() {
        assert_eq!(column_spec(BorderStyle::None, 2, false), "c c");
        assert_eq!(column_spec(BorderStyle::None, 3, true), "c c c c");
    }

    #[test]
    fn test_column_spec_full() {
        assert_eq!(column_spec(BorderStyle::Full, 1, false), "|c|");
        assert_eq!(column_spec(BorderStyle::Full, 2, false), "|c|c|");
        assert_eq!(column_spec(BorderStyle::Full, 2, true), "|c|c|c|");
    }

    #[test]
    fn test_column_spec_horizontal() {
        assert_eq!(column_spec(BorderStyle::Horizontal, 3, false), "c c c");
        assert_eq!(column_spec(BorderStyle::Horizontal, 2, true), "c|c c");
    }

    #[test]
    fn test_styled_normal_is_identity() {
        assert_eq!(styled("Header 1", FontStyle::Normal), "Header 1");
    }

    #[test]
    fn test_styled_bold_wraps() {
        assert_eq!(styled("Header 1", FontStyle::Bold), "\\textbf{Header 1}");
    }

    #[test]
    fn test_writer_full_border_layout() {
        let mut w = MarkupWriter::open(Environment::Tabular, BorderStyle::Full, 1, false);
        w.row(&["Column1".to_string()]);
        w.rule();
        let out = w.finish();
        assert_eq!(
            out,
            "\\begin{tabular}{|c|}\n\\hline\nColumn1 \\\\\n\\hline\n\\end{tabular}"
        );
    }

    #[test]
    fn test_writer_truncates_rows_to_width() {
        let cells: Vec<String> = (1..=4).map(|i| format!("Column{}", i)).collect();
        let mut w = MarkupWriter::open(Environment::Array, BorderStyle::None, 2, false);
        w.row(&cells);
        let out = w.finish();
        assert_eq!(out, "\\begin{array}{c c}\nColumn1 & Column2 \\\\\n\\end{array}");
    }

    #[test]
    fn test_writer_array_environment() {
        let w = MarkupWriter::open(Environment::Array, BorderStyle::None, 1, false);
        let out = w.finish();
        assert!(out.starts_with("\\begin{array}{c}"));
        assert!(out.ends_with("\\end{array}"));
    }
}
