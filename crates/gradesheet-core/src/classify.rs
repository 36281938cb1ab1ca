//! Page classification and subject-catalog collection.
//!
//! Register documents interleave two page shapes: record pages carrying
//! per-student mark blocks, and index pages carrying the subject-code
//! listing. A page is a record page exactly when the literal column
//! header `SEAT NO` appears in its text; everything else is an index
//! page and is mined for catalog entries.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::SubjectCatalog;
use crate::page::{normalize_ws, PageInput, PageText};

/// Column-header token that marks a record page.
const SEAT_NO_MARKER: &str = "SEAT NO";

/// Matches a table cell holding exactly a 7-digit subject code.
static CODE_CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7}$").expect("valid regex"));

/// Matches a flattened catalog line: code, name, then the fixed credit
/// columns that terminate the name field.
static CATALOG_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{7})\s+(.+?)\s+2\.00\s+8\.00").expect("valid regex"));

/// The two page shapes found in a register document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PageKind {
    /// A page carrying per-student mark blocks.
    RecordPage,
    /// A page carrying the subject-code listing (or front matter).
    IndexPage,
}

/// Classify a page by the presence of the `SEAT NO` column header.
pub fn classify_page(text: &PageText) -> PageKind {
    if text.lines().iter().any(|l| l.contains(SEAT_NO_MARKER)) {
        PageKind::RecordPage
    } else {
        PageKind::IndexPage
    }
}

/// Harvest subject-code/name pairs from an index page into `catalog`.
///
/// Table rows are preferred: any row with at least two cells whose first
/// cell is exactly a 7-digit code contributes an entry. The flattened-line
/// fallback runs only when no table row on the page matched, so a page
/// with recognizable table structure never mixes in line-regex guesses.
///
/// Returns the number of newly inserted entries; codes already present
/// keep their original names.
pub fn collect_catalog(page: &PageInput, catalog: &mut SubjectCatalog) -> usize {
    let mut inserted = 0;
    let mut table_matches = 0;
    for table in &page.tables {
        for row in table {
            if row.len() < 2 {
                continue;
            }
            let Some(code_cell) = row[0].as_deref() else {
                continue;
            };
            let code = code_cell.trim();
            if !CODE_CELL_RE.is_match(code) {
                continue;
            }
            table_matches += 1;
            let Some(name_cell) = row[1].as_deref() else {
                continue;
            };
            let name = normalize_ws(name_cell);
            if name.is_empty() {
                continue;
            }
            if catalog.insert(code, name) {
                inserted += 1;
            }
        }
    }
    if table_matches == 0 {
        for line in page.text().lines() {
            if let Some(caps) = CATALOG_LINE_RE.captures(line) {
                let name = normalize_ws(&caps[2]);
                if !name.is_empty() && catalog.insert(&caps[1], name) {
                    inserted += 1;
                }
            }
        }
    }
    inserted
}
