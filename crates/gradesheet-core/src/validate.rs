//! Record acceptance checks.
//!
//! Validation never panics and never aborts a page: it reports whether a
//! record should be kept, with warnings naming what disqualified it.

use crate::error::{DecodeResult, DecodeWarning, WarningCode};
use crate::record::StudentRecord;

/// How much of a record must be present for it to be accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValidationProfile {
    /// Identity fields plus consistent mark arrays.
    #[default]
    Full,
    /// Seat number, name, and outcome only; mark arrays are ignored.
    IdentityOnly,
}

fn text_missing(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

/// Check a record against the profile's requirements.
///
/// The value is true when the record should be kept. A false value is
/// always accompanied by warnings naming the missing fields or the
/// mismatched array lengths; clean-but-false never happens.
pub fn validate_record(
    record: &StudentRecord,
    profile: ValidationProfile,
) -> DecodeResult<bool> {
    let mut warnings = Vec::new();

    let require = |name: &str, missing: bool, warnings: &mut Vec<DecodeWarning>| {
        if missing {
            let mut warning =
                DecodeWarning::new(WarningCode::MissingField, format!("missing {name}"))
                    .on_page(record.page);
            if let Some(ref seat) = record.seat_no {
                warning = warning.for_seat(seat.clone());
            }
            warnings.push(warning);
        }
    };

    require("seat_no", text_missing(&record.seat_no), &mut warnings);
    require("name", text_missing(&record.name), &mut warnings);
    if profile == ValidationProfile::Full {
        require("status", record.status.is_none(), &mut warnings);
    }
    require("outcome", record.outcome.is_none(), &mut warnings);

    if !warnings.is_empty() {
        return DecodeResult::with_warnings(false, warnings);
    }
    if profile == ValidationProfile::IdentityOnly {
        return DecodeResult::ok(true);
    }

    let num = record.external.len();
    if num == 0 {
        let mut warning = DecodeWarning::new(WarningCode::NoMarks, "no external marks decoded")
            .on_page(record.page);
        if let Some(ref seat) = record.seat_no {
            warning = warning.for_seat(seat.clone());
        }
        return DecodeResult::with_warnings(false, vec![warning]);
    }

    let consistent = record.internal.len() == num
        && record.totals.len() == num
        && record.grades.len() == num
        && record.subject_codes.len() == num;
    if !consistent {
        let mut warning = DecodeWarning::new(
            WarningCode::CardinalityMismatch,
            format!(
                "E={}, I={}, T={}, G={}, codes={}",
                record.external.len(),
                record.internal.len(),
                record.totals.len(),
                record.grades.len(),
                record.subject_codes.len()
            ),
        )
        .on_page(record.page);
        if let Some(ref seat) = record.seat_no {
            warning = warning.for_seat(seat.clone());
        }
        return DecodeResult::with_warnings(false, vec![warning]);
    }

    DecodeResult::ok(true)
}
