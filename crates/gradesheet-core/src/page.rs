//! Per-page input handed in by the external text-layer and vector readers.

use crate::shapes::Primitive;

/// One table grid exposed by the text layer. Cells may be absent.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// Complete external input for one page of a register document.
///
/// Produced by out-of-scope readers; the core only consumes it. Coordinates
/// are typographic points with a top-left origin.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageInput {
    /// 1-based page number within the source document.
    pub number: usize,
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Text lines in reading order.
    pub lines: Vec<String>,
    /// Table grids exposed by the text layer, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tables: Vec<TableGrid>,
    /// Vector drawing primitives.
    #[cfg_attr(feature = "serde", serde(default))]
    pub primitives: Vec<Primitive>,
}

impl PageInput {
    /// Capture the page's text lines as an immutable [`PageText`].
    pub fn text(&self) -> PageText {
        PageText::new(&self.lines)
    }
}

/// Ordered, trimmed text lines for one page. Immutable once captured.
///
/// Empty lines are kept so that line indices stay meaningful for block
/// segmentation; decoders skip them where content is joined.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    lines: Vec<String>,
}

impl PageText {
    /// Trim each raw line and capture the result.
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Self {
        Self {
            lines: raw.iter().map(|l| l.as_ref().trim().to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
