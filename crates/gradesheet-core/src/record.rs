//! The reconstructed per-student record.

use crate::header::{Gender, HeaderFields, Status};
use crate::marks::{MarkRows, Outcome};

/// One student's reconstructed row from a record page.
///
/// Identity fields mirror [`HeaderFields`]; the per-subject arrays and
/// summary fields mirror [`MarkRows`]. All per-subject arrays are indexed
/// in [`subject_codes`](StudentRecord::subject_codes) order. `page` is the
/// 1-based page the record was decoded from and is the correlation key
/// against geometric crops.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentRecord {
    pub seat_no: Option<String>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub gender: Option<Gender>,
    pub enrollment: Option<String>,
    pub college_code: Option<String>,
    pub college_name: Option<String>,
    pub subject_codes: Vec<String>,
    pub external: Vec<u32>,
    pub internal: Vec<u32>,
    pub totals: Vec<u32>,
    pub grade_points: Vec<u32>,
    pub grades: Vec<String>,
    pub credits: Vec<f64>,
    pub grade_credits: Vec<Option<f64>>,
    pub total_marks: Option<u32>,
    pub outcome: Option<Outcome>,
    pub sgpa: Option<f64>,
    pub total_credits: Option<u32>,
    /// 1-based page number the record was decoded from.
    pub page: usize,
}

impl StudentRecord {
    /// Assemble a record from its decoded header and mark rows.
    pub fn from_parts(header: HeaderFields, marks: MarkRows, page: usize) -> Self {
        Self {
            seat_no: header.seat_no,
            name: header.name,
            status: header.status,
            gender: header.gender,
            enrollment: header.enrollment,
            college_code: header.college_code,
            college_name: header.college_name,
            subject_codes: marks.subject_codes,
            external: marks.external,
            internal: marks.internal,
            totals: marks.totals,
            grade_points: marks.grade_points,
            grades: marks.grades,
            credits: marks.credits,
            grade_credits: marks.grade_credits,
            total_marks: marks.total_marks,
            outcome: marks.outcome,
            sgpa: marks.sgpa,
            total_credits: marks.total_credits,
            page,
        }
    }

    /// Assemble an identity-only record: header fields plus the outcome,
    /// with every mark array left empty.
    pub fn from_identity(header: HeaderFields, outcome: Option<Outcome>, page: usize) -> Self {
        let marks = MarkRows {
            outcome,
            ..MarkRows::default()
        };
        Self::from_parts(header, marks, page)
    }

    /// Number of subjects carried by the mark arrays.
    pub fn subject_count(&self) -> usize {
        self.external.len()
    }
}
