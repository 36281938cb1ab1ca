//! Error and warning types for gradesheet.
//!
//! Provides [`DecodeWarning`] for non-fatal issues that allow best-effort
//! continuation, [`DecodeResult`] for pairing a value with collected
//! warnings, and [`CropError`] for crop requests that cannot be satisfied.
//!
//! Nothing in the decoding pipeline is fatal to a document: bad blocks and
//! bad pages are skipped with a warning and processing continues. The only
//! hard errors live on the crop side, where returning a guessed rectangle
//! would silently corrupt downstream output.

use std::fmt;

/// Machine-readable warning code for categorizing decoding issues.
///
/// Each variant represents a specific category of non-fatal issue
/// encountered while reconstructing records or boundaries. Use
/// [`Other`](WarningCode::Other) for uncategorized warnings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum WarningCode {
    /// A page arrived with no extractable text lines.
    EmptyPage,
    /// A candidate student block is missing a row marker (or has them out
    /// of order) and was discarded.
    IncompleteBlock,
    /// A mandatory identity field is absent from a decoded record.
    MissingField,
    /// A decoded record carries no per-subject marks at all.
    NoMarks,
    /// The per-subject arrays of a record disagree in length.
    CardinalityMismatch,
    /// A mark row produced more values than the block's subject codes and
    /// was truncated to the code count.
    SubjectCountClipped,
    /// Neither the block, the page, nor the catalog yielded subject codes.
    NoSubjectCodes,
    /// Fewer than two separator lines survived filtering; the page has no
    /// usable student bands.
    BoundaryUndetected,
    /// The number of accepted records on a page disagrees with the number
    /// of detected geometric bands.
    StudentCountMismatch,
    /// A crop request for a detected band could not be satisfied.
    CropFailed,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            WarningCode::EmptyPage => "EMPTY_PAGE",
            WarningCode::IncompleteBlock => "INCOMPLETE_BLOCK",
            WarningCode::MissingField => "MISSING_FIELD",
            WarningCode::NoMarks => "NO_MARKS",
            WarningCode::CardinalityMismatch => "CARDINALITY_MISMATCH",
            WarningCode::SubjectCountClipped => "SUBJECT_COUNT_CLIPPED",
            WarningCode::NoSubjectCodes => "NO_SUBJECT_CODES",
            WarningCode::BoundaryUndetected => "BOUNDARY_UNDETECTED",
            WarningCode::StudentCountMismatch => "STUDENT_COUNT_MISMATCH",
            WarningCode::CropFailed => "CROP_FAILED",
            WarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning encountered while decoding a register.
///
/// Warnings carry a structured [`code`](DecodeWarning::code), a
/// human-readable description, and optional source context: the 1-based
/// page number and the seat number of the affected record when known.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// 1-based page number where the warning occurred, if known.
    pub page: Option<usize>,
    /// Seat number of the affected record, if known.
    pub seat_no: Option<String>,
}

impl DecodeWarning {
    /// Create a warning with a specific code and description.
    pub fn new(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            seat_no: None,
        }
    }

    /// Attach page context, returning the modified warning.
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach seat-number context, returning the modified warning.
    pub fn for_seat(mut self, seat_no: impl Into<String>) -> Self {
        self.seat_no = Some(seat_no.into());
        self
    }
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref seat) = self.seat_no {
            write!(f, " [seat {seat}]")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
///
/// Used when decoding can partially succeed with non-fatal issues.
#[derive(Debug, Clone)]
pub struct DecodeResult<T> {
    /// The decoded value.
    pub value: T,
    /// Warnings collected during decoding.
    pub warnings: Vec<DecodeWarning>,
}

impl<T> DecodeResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<DecodeWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DecodeResult<U> {
        DecodeResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Hard error for a crop request that cannot be satisfied.
///
/// Crop failures are deliberately not warnings: substituting a guessed
/// rectangle would silently hand downstream collaborators the wrong page
/// region. Callers wanting fixed coordinates must name the legacy layout
/// explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum CropError {
    /// Fewer than two separator lines were detected on the page; there are
    /// no bands to crop.
    BandsUndetected,
    /// The requested student index exceeds the number of detected bands.
    StudentIndexOutOfRange {
        /// Requested 0-based student index.
        index: usize,
        /// Number of bands available on the page.
        available: usize,
    },
    /// The band has zero or negative height.
    EmptyBand {
        /// Band top y.
        top: f64,
        /// Band bottom y.
        bottom: f64,
    },
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::BandsUndetected => {
                write!(f, "no student bands detected on this page")
            }
            CropError::StudentIndexOutOfRange { index, available } => write!(
                f,
                "student index {index} exceeds detected bands (available: {available})"
            ),
            CropError::EmptyBand { top, bottom } => {
                write!(f, "band has no height (top: {top}, bottom: {bottom})")
            }
        }
    }
}

impl std::error::Error for CropError {}
