//! Examination metadata parsed from the document's first page.

use std::sync::LazyLock;

use regex::Regex;

use crate::page::PageText;

static HELD_IN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HELD IN (\w+)\s+(\d{4})").expect("valid regex"));

static SEMESTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*Semester\s*-\s*([IVX]+)\s*\)").expect("valid regex"));

static PROGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FOR THE\s+(.+?)\s*\(").expect("valid regex"));

static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Declaration Date:\s*(\w+\s+\d+,\s+\d{4})").expect("valid regex"));

/// Substrings that mark a line as part of the result-key footer.
const FOOTER_MARKERS: [&str; 4] = ["#:", "@:", "ADC:", "AA/ABS:"];

/// Whether the sitting was a first attempt or a repeat attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ExamKind {
    Regular,
    Supplementary,
}

impl ExamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamKind::Regular => "REGULAR",
            ExamKind::Supplementary => "SUPPLEMENTARY",
        }
    }
}

impl std::fmt::Display for ExamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Examination metadata from the register's first page.
///
/// All fields are optional because front matter varies across documents.
/// Missing fields are represented as `None` rather than empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamMetadata {
    /// Register title line, e.g. "OFFICE REGISTER FOR THE ...".
    pub title: Option<String>,
    /// Examination month as printed, e.g. "MAY".
    pub exam_month: Option<String>,
    /// Examination year.
    pub exam_year: Option<u16>,
    /// Regular or supplementary sitting.
    pub kind: Option<ExamKind>,
    /// Degree program, e.g. "Bachelor of Engineering".
    pub program: Option<String>,
    /// Semester label, e.g. "Semester - III".
    pub semester: Option<String>,
    /// Result declaration date in ISO `YYYY-MM-DD` form.
    pub declaration_date: Option<String>,
    /// Result-key footer lines joined with newlines.
    pub footer: Option<String>,
}

impl ExamMetadata {
    /// Returns true if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.exam_month.is_none()
            && self.exam_year.is_none()
            && self.kind.is_none()
            && self.program.is_none()
            && self.semester.is_none()
            && self.declaration_date.is_none()
            && self.footer.is_none()
    }
}

/// Parse examination metadata from the first page's text.
///
/// Each field takes its first match; lines after a match still feed the
/// remaining fields. A page with no recognizable front matter yields an
/// [`ExamMetadata::is_empty`] value.
pub fn parse_first_page(text: &PageText) -> ExamMetadata {
    let mut meta = ExamMetadata::default();
    let mut footer_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if meta.title.is_none() && (line.contains("Bachelor") || line.contains("OFFICE REGISTER"))
        {
            meta.title = Some(line.clone());
        }
        if meta.exam_month.is_none() {
            if let Some(caps) = HELD_IN_RE.captures(line) {
                meta.exam_month = Some(caps[1].to_string());
                meta.exam_year = caps[2].parse().ok();
            }
        }
        if meta.kind.is_none() {
            if line.contains("SUPPLEMENTARY") {
                meta.kind = Some(ExamKind::Supplementary);
            } else if line.contains("REGULAR") {
                meta.kind = Some(ExamKind::Regular);
            }
        }
        if meta.program.is_none() {
            if let Some(caps) = PROGRAM_RE.captures(line) {
                meta.program = Some(caps[1].to_string());
            }
        }
        if meta.semester.is_none() {
            if let Some(caps) = SEMESTER_RE.captures(line) {
                meta.semester = Some(format!("Semester - {}", &caps[1]));
            }
        }
        if meta.declaration_date.is_none() {
            if let Some(caps) = DECLARATION_RE.captures(line) {
                meta.declaration_date = parse_declaration_date(&caps[1]);
            }
        }
        if FOOTER_MARKERS.iter().any(|m| line.contains(m)) {
            footer_lines.push(line);
        }
    }

    if !footer_lines.is_empty() {
        meta.footer = Some(footer_lines.join("\n"));
    }
    meta
}

/// Convert a printed date like "June 15, 2024" (full or 3-letter month
/// name) to ISO `YYYY-MM-DD`. Returns `None` when the month or day is
/// not recognizable.
fn parse_declaration_date(raw: &str) -> Option<String> {
    let mut parts = raw.split_whitespace();
    let month = month_number(parts.next()?)?;
    let day: u32 = parts.next()?.trim_end_matches(',').parse().ok()?;
    let year: u16 = parts.next()?.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Month number for an exact full name or exact 3-letter abbreviation,
/// case-insensitive.
fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let lower = name.to_ascii_lowercase();
    let lower = lower.as_str();
    MONTHS
        .iter()
        .position(|m| lower == *m || lower == &m[..3])
        .map(|i| i as u32 + 1)
}
