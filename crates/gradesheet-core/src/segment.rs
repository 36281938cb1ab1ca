//! Segmentation of record pages into per-student line blocks.
//!
//! A student block starts at an anchor line (9-digit seat number followed
//! by an uppercase letter) and runs to the next anchor or the end of the
//! page. An enrollment continuation line immediately above an anchor
//! belongs to that anchor's block: extraction sometimes flushes the
//! `(MU...)` line before the seat line it annotates.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DecodeResult, DecodeWarning, WarningCode};
use crate::page::PageText;

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{9}\s+[A-Z]").expect("valid regex"));

static CONTINUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(MU\d+").expect("valid regex"));

/// Row markers a block must carry, in the order they must appear.
const ROW_MARKERS: [&str; 3] = ["E1", "I1", "TOT"];

/// Returns true if the line opens a student block.
pub fn is_anchor(line: &str) -> bool {
    ANCHOR_RE.is_match(line)
}

/// Returns true if the line is an enrollment continuation.
pub fn is_continuation(line: &str) -> bool {
    CONTINUATION_RE.is_match(line)
}

/// The contiguous lines belonging to one student on a page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentBlock {
    start: usize,
    lines: Vec<String>,
}

impl StudentBlock {
    /// Assemble a block from raw lines. Segmentation normally produces
    /// blocks; this exists for callers feeding pre-split input.
    pub fn new(start: usize, lines: Vec<String>) -> Self {
        Self { start, lines }
    }

    /// 0-based index of the block's first line within the page text.
    pub fn start_line(&self) -> usize {
        self.start
    }

    /// The block's lines, in page order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The seat number from the block's anchor line, if present.
    pub fn seat_hint(&self) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| is_anchor(l))
            .map(|l| &l[..9])
    }
}

/// Returns true if the line starts with `marker` as a whole token.
pub(crate) fn starts_with_marker(line: &str, marker: &str) -> bool {
    match line.strip_prefix(marker) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Index of the first line opening with `marker`, if any.
fn first_marker(lines: &[String], marker: &str) -> Option<usize> {
    lines.iter().position(|l| starts_with_marker(l, marker))
}

/// Split a record page into complete student blocks.
///
/// A block is complete when its `E1`, `I1`, and `TOT` rows all exist and
/// appear in that order; the markers must open their lines, so a stray
/// `E1` in the middle of a remark does not count. Incomplete blocks are
/// dropped with an [`IncompleteBlock`](WarningCode::IncompleteBlock)
/// warning rather than decoded into half-filled records.
pub fn segment_page(text: &PageText) -> DecodeResult<Vec<StudentBlock>> {
    let lines = text.lines();
    let mut starts: Vec<usize> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if is_anchor(line) {
            if i > 0 && is_continuation(&lines[i - 1]) {
                starts.push(i - 1);
            } else {
                starts.push(i);
            }
        }
    }

    let mut blocks = Vec::new();
    let mut warnings = Vec::new();
    for (k, &start) in starts.iter().enumerate() {
        let end = starts.get(k + 1).copied().unwrap_or(lines.len());
        let block = StudentBlock {
            start,
            lines: lines[start..end].to_vec(),
        };
        match check_markers(block.lines()) {
            MarkerCheck::Complete => blocks.push(block),
            MarkerCheck::Missing(missing) => {
                let mut warning = DecodeWarning::new(
                    WarningCode::IncompleteBlock,
                    format!("block missing row markers: {}", missing.join(", ")),
                );
                if let Some(seat) = block.seat_hint() {
                    warning = warning.for_seat(seat);
                }
                warnings.push(warning);
            }
            MarkerCheck::OutOfOrder => {
                let mut warning = DecodeWarning::new(
                    WarningCode::IncompleteBlock,
                    "row markers out of order (expected E1, I1, TOT)",
                );
                if let Some(seat) = block.seat_hint() {
                    warning = warning.for_seat(seat);
                }
                warnings.push(warning);
            }
        }
    }
    DecodeResult::with_warnings(blocks, warnings)
}

enum MarkerCheck {
    Complete,
    Missing(Vec<&'static str>),
    OutOfOrder,
}

fn check_markers(lines: &[String]) -> MarkerCheck {
    let mut indices = [0usize; 3];
    let mut missing = Vec::new();
    for (slot, marker) in ROW_MARKERS.iter().enumerate() {
        match first_marker(lines, marker) {
            Some(idx) => indices[slot] = idx,
            None => missing.push(*marker),
        }
    }
    if !missing.is_empty() {
        return MarkerCheck::Missing(missing);
    }
    if indices[0] < indices[1] && indices[1] < indices[2] {
        MarkerCheck::Complete
    } else {
        MarkerCheck::OutOfOrder
    }
}
