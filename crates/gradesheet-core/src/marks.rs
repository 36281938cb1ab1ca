//! Decoding of the three mark rows in a student block.
//!
//! Each student carries an `E1` row (external marks), an `I1` row
//! (internal marks plus the aggregate total and pass/fail outcome), and a
//! `TOT` row (per-subject totals with grades, then credit and SGPA
//! summary fields). Column boundaries are lost in extraction, so all
//! three decoders work on flattened token runs.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DecodeResult, DecodeWarning, WarningCode};
use crate::segment::{starts_with_marker, StudentBlock};

static SUBJECT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{7})\s*:").expect("valid regex"));

static E1_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^E1\s+").expect("valid regex"));

static E1_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*MARKS.*$").expect("valid regex"));

/// A passing mark (`45 P`) or the mark digits of a failing group
/// (`44 0 F 0.0`).
static EXTERNAL_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:P|0\s+F\s+\d+\.\d+)").expect("valid regex"));

static INTERNAL_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*P").expect("valid regex"));

static INTERNAL_TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)\s*(?:PASS|FAIL)").expect("valid regex"));

static TRAILING_DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+)\s*$").expect("valid regex"));

static TRAILING_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*$").expect("valid regex"));

/// Pass/fail outcome printed on the internal-marks row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything decoded from the mark rows of one block.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkRows {
    /// Subject codes governing the arrays below, in column order.
    pub subject_codes: Vec<String>,
    pub external: Vec<u32>,
    pub internal: Vec<u32>,
    pub totals: Vec<u32>,
    pub grade_points: Vec<u32>,
    pub grades: Vec<String>,
    pub credits: Vec<f64>,
    pub grade_credits: Vec<Option<f64>>,
    /// Aggregate total from the internal row's parenthesized figure.
    pub total_marks: Option<u32>,
    pub outcome: Option<Outcome>,
    pub sgpa: Option<f64>,
    pub total_credits: Option<u32>,
}

/// Fields of the internal-marks row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalRow {
    pub marks: Vec<u32>,
    pub total_marks: Option<u32>,
    pub outcome: Option<Outcome>,
}

/// Fields of one aggregate (`TOT`) row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateRow {
    pub totals: Vec<u32>,
    pub grade_points: Vec<u32>,
    pub grades: Vec<String>,
    pub credits: Vec<f64>,
    pub grade_credits: Vec<Option<f64>>,
    pub total_credits: Option<u32>,
    pub sgpa: Option<f64>,
}

/// Collect 7-digit subject codes (`1234561 :NAME`) from lines, first
/// occurrence wins, order preserved.
pub fn collect_subject_codes(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut codes = Vec::new();
    for line in lines {
        for caps in SUBJECT_CODE_RE.captures_iter(line) {
            let code = caps[1].to_string();
            if seen.insert(code.clone()) {
                codes.push(code);
            }
        }
    }
    codes
}

/// Decode external marks from an `E1` row.
///
/// The row mixes passing entries (`45 P`) and failing groups
/// (`44 0 F 0.0`); both contribute their leading mark. Everything from
/// the `MARKS` trailer onward is ignored.
pub fn decode_external_row(line: &str) -> Vec<u32> {
    let content = E1_PREFIX_RE.replace(line, "");
    let content = E1_TAIL_RE.replace(&content, "");
    EXTERNAL_MARK_RE
        .captures_iter(&content)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Decode an `I1` row: per-subject internal marks, the parenthesized
/// aggregate total, and the pass/fail outcome.
///
/// Mark scanning stops at the first `(` so the aggregate figure is not
/// mistaken for a subject mark.
pub fn decode_internal_row(line: &str) -> InternalRow {
    let marks_portion = match line.find('(') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let marks = INTERNAL_MARK_RE
        .captures_iter(marks_portion)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    let total_marks = INTERNAL_TOTAL_RE
        .captures(line)
        .and_then(|caps| caps[1].parse().ok());
    let outcome = if line.contains("PASS") {
        Some(Outcome::Pass)
    } else if line.contains("FAIL") {
        Some(Outcome::Fail)
    } else {
        None
    };
    InternalRow {
        marks,
        total_marks,
        outcome,
    }
}

/// Scanner state for the aggregate row's token walk.
enum ScanState {
    /// Try to read a 5-token subject group at the cursor.
    ExpectQuintupleStart,
    /// The cursor token cannot start a group; advance one token.
    SkipToken,
    /// Enough groups were read or the tokens ran out.
    Done,
}

/// One subject's group on the aggregate row.
struct Quintuple {
    total: u32,
    grade_point: u32,
    grade: String,
    credit: f64,
    grade_credit: Option<f64>,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Accept a subject group at `parts[i..i + 5]` if the shape fits: a
/// total in 0..=50, an all-digit grade point, and a grade that is not
/// purely numeric once `+`/`-` are stripped. Credit falls back to 2.0
/// and grade-credit to `None` when those columns fail to parse.
fn try_quintuple(parts: &[&str], i: usize) -> Option<Quintuple> {
    let t0 = parts.get(i)?;
    if !is_digits(t0) {
        return None;
    }
    let total: u32 = t0.parse().ok()?;
    if total > 50 || i + 4 >= parts.len() {
        return None;
    }
    let grade_point = parts[i + 1];
    let grade = parts[i + 2];
    if !is_digits(grade_point) {
        return None;
    }
    let stripped: String = grade.chars().filter(|c| *c != '+' && *c != '-').collect();
    if is_digits(&stripped) {
        return None;
    }
    Some(Quintuple {
        total,
        grade_point: grade_point.parse().ok()?,
        grade: grade.to_string(),
        credit: parts[i + 3].parse().unwrap_or(2.0),
        grade_credit: parts[i + 4].parse().ok(),
    })
}

/// Decode a `TOT` row into at most `max_subjects` subject groups plus
/// the summary fields.
///
/// The three summary fields are peeled off the right edge first: the
/// SGPA decimal, a discarded grade-credit sum decimal, then the total
/// credits integer. What remains is walked left to right; tokens that
/// cannot open a valid group are skipped one at a time, which rides out
/// stray column fragments between groups.
pub fn decode_aggregate_row(line: &str, max_subjects: usize) -> AggregateRow {
    let mut agg = AggregateRow::default();
    let mut rest = line.trim();

    if let Some(g) = TRAILING_DECIMAL_RE.captures(rest).and_then(|c| c.get(1)) {
        agg.sgpa = g.as_str().parse().ok();
        rest = rest[..g.start()].trim();
    }
    if let Some(g) = TRAILING_DECIMAL_RE.captures(rest).and_then(|c| c.get(1)) {
        rest = rest[..g.start()].trim();
    }
    if let Some(g) = TRAILING_INT_RE.captures(rest).and_then(|c| c.get(1)) {
        agg.total_credits = g.as_str().parse().ok();
        rest = rest[..g.start()].trim();
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    let mut i = 1; // skip the TOT marker token
    let mut state = if max_subjects == 0 {
        ScanState::Done
    } else {
        ScanState::ExpectQuintupleStart
    };
    loop {
        match state {
            ScanState::Done => break,
            ScanState::ExpectQuintupleStart => {
                if i >= parts.len() || agg.totals.len() >= max_subjects {
                    state = ScanState::Done;
                } else if let Some(q) = try_quintuple(&parts, i) {
                    agg.totals.push(q.total);
                    agg.grade_points.push(q.grade_point);
                    agg.grades.push(q.grade);
                    agg.credits.push(q.credit);
                    agg.grade_credits.push(q.grade_credit);
                    i += 5;
                } else {
                    state = ScanState::SkipToken;
                }
            }
            ScanState::SkipToken => {
                i += 1;
                state = ScanState::ExpectQuintupleStart;
            }
        }
    }
    agg
}

/// Decode all mark rows of a student block.
///
/// Subject codes come from the block itself; `fallback_codes` (page
/// header codes, or catalog order when the page has none) apply only
/// when the block carries no codes. Rows longer than the code count are
/// clipped to it with a warning; a block with no codes at all decodes
/// unclipped but is flagged, since its aggregate arrays stay empty.
pub fn decode_mark_rows(block: &StudentBlock, fallback_codes: &[String]) -> DecodeResult<MarkRows> {
    let mut codes = collect_subject_codes(block.lines());
    if codes.is_empty() {
        codes = fallback_codes.to_vec();
    }
    let num = codes.len();
    let seat = block.seat_hint().map(str::to_string);

    let mut rows = MarkRows {
        subject_codes: codes,
        ..MarkRows::default()
    };
    let mut warnings = Vec::new();
    if num == 0 {
        let mut warning = DecodeWarning::new(
            WarningCode::NoSubjectCodes,
            "no subject codes in block, page header, or catalog",
        );
        if let Some(ref s) = seat {
            warning = warning.for_seat(s.clone());
        }
        warnings.push(warning);
    }

    for line in block.lines() {
        if starts_with_marker(line, "E1") {
            let mut marks = decode_external_row(line);
            clip_row(&mut marks, num, "external", seat.as_deref(), &mut warnings);
            rows.external = marks;
        } else if starts_with_marker(line, "I1") {
            let row = decode_internal_row(line);
            let mut marks = row.marks;
            clip_row(&mut marks, num, "internal", seat.as_deref(), &mut warnings);
            rows.internal = marks;
            if row.total_marks.is_some() {
                rows.total_marks = row.total_marks;
            }
            if row.outcome.is_some() {
                rows.outcome = row.outcome;
            }
        } else if starts_with_marker(line, "TOT") {
            let remaining = num.saturating_sub(rows.totals.len());
            let agg = decode_aggregate_row(line, remaining);
            rows.totals.extend(agg.totals);
            rows.grade_points.extend(agg.grade_points);
            rows.grades.extend(agg.grades);
            rows.credits.extend(agg.credits);
            rows.grade_credits.extend(agg.grade_credits);
            if agg.total_credits.is_some() {
                rows.total_credits = agg.total_credits;
            }
            if agg.sgpa.is_some() {
                rows.sgpa = agg.sgpa;
            }
        }
    }
    DecodeResult::with_warnings(rows, warnings)
}

/// The outcome alone, from a block's internal rows.
///
/// Cheaper than [`decode_mark_rows`] when only identity fields are
/// wanted; later rows override earlier ones the same way.
pub fn decode_block_outcome(block: &StudentBlock) -> Option<Outcome> {
    let mut outcome = None;
    for line in block.lines() {
        if starts_with_marker(line, "I1") {
            let row = decode_internal_row(line);
            if row.outcome.is_some() {
                outcome = row.outcome;
            }
        }
    }
    outcome
}

fn clip_row(
    marks: &mut Vec<u32>,
    max: usize,
    row: &str,
    seat: Option<&str>,
    warnings: &mut Vec<DecodeWarning>,
) {
    if max > 0 && marks.len() > max {
        let mut warning = DecodeWarning::new(
            WarningCode::SubjectCountClipped,
            format!(
                "{row} row decoded {} values for {max} subject codes",
                marks.len()
            ),
        );
        if let Some(s) = seat {
            warning = warning.for_seat(s);
        }
        warnings.push(warning);
        marks.truncate(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_block(lines: &[&str]) -> StudentBlock {
        StudentBlock::new(0, lines.iter().map(|s| s.to_string()).collect())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // --- subject codes ---

    #[test]
    fn test_codes_deduplicate_preserving_order() {
        let lines = strings(&[
            "1234562 :PHYSICS 1234561 :MATHS",
            "1234561 :MATHS 1234563 :CHEMISTRY",
        ]);
        let codes = collect_subject_codes(&lines);
        assert_eq!(codes, &["1234562", "1234561", "1234563"]);
    }

    #[test]
    fn test_codes_allow_space_before_colon() {
        let lines = strings(&["1234561 : MATHS"]);
        assert_eq!(collect_subject_codes(&lines), &["1234561"]);
    }

    #[test]
    fn test_codes_ignore_uncoloned_digit_runs() {
        let lines = strings(&["123456789 RAHUL SHARMA Regular"]);
        assert!(collect_subject_codes(&lines).is_empty());
    }

    // --- external row ---

    #[test]
    fn test_external_all_passing() {
        assert_eq!(decode_external_row("E1 45 P 38 P 42 P MARKS"), &[45, 38, 42]);
    }

    #[test]
    fn test_external_mixed_pass_and_fail() {
        assert_eq!(decode_external_row("E1 45 P 0 0 F 5.5 MARKS"), &[45, 0]);
    }

    #[test]
    fn test_external_failing_group_keeps_leading_mark() {
        assert_eq!(decode_external_row("E1 44 0 F 0.0 38 P MARKS"), &[44, 38]);
    }

    #[test]
    fn test_external_ignores_trailer() {
        assert_eq!(decode_external_row("E1 45 P MARKS 99 P"), &[45]);
    }

    #[test]
    fn test_external_bare_marker_is_empty() {
        assert!(decode_external_row("E1").is_empty());
    }

    // --- internal row ---

    #[test]
    fn test_internal_marks_total_and_outcome() {
        let row = decode_internal_row("I1 9 P 8 P (17) PASS");
        assert_eq!(row.marks, &[9, 8]);
        assert_eq!(row.total_marks, Some(17));
        assert_eq!(row.outcome, Some(Outcome::Pass));
    }

    #[test]
    fn test_internal_failed_variant() {
        let row = decode_internal_row("I1 9 P 8 P (44) FAILED");
        assert_eq!(row.total_marks, Some(44));
        assert_eq!(row.outcome, Some(Outcome::Fail));
    }

    #[test]
    fn test_internal_stops_scanning_at_paren() {
        // 17 P after the paren must not register as a subject mark.
        let row = decode_internal_row("I1 9 P (17 P) PASS");
        assert_eq!(row.marks, &[9]);
    }

    #[test]
    fn test_internal_without_summary() {
        let row = decode_internal_row("I1 9 P 8 P");
        assert_eq!(row.marks, &[9, 8]);
        assert_eq!(row.total_marks, None);
        assert_eq!(row.outcome, None);
    }

    // --- aggregate row ---

    #[test]
    fn test_aggregate_two_subjects() {
        let agg = decode_aggregate_row(
            "TOT 45 8 B 2.00 16.00 50 9 A 2.00 18.00 4 34.00 8.50",
            2,
        );
        assert_eq!(agg.totals, &[45, 50]);
        assert_eq!(agg.grade_points, &[8, 9]);
        assert_eq!(agg.grades, &["B", "A"]);
        assert_eq!(agg.credits, &[2.0, 2.0]);
        assert_eq!(agg.grade_credits, &[Some(16.0), Some(18.0)]);
        assert_eq!(agg.total_credits, Some(4));
        assert_eq!(agg.sgpa, Some(8.50));
    }

    #[test]
    fn test_aggregate_skips_tokens_that_cannot_open_a_group() {
        let agg = decode_aggregate_row("TOT 97 45 8 B 2.00 16.00 4 16.00 8.00", 1);
        assert_eq!(agg.totals, &[45]);
        assert_eq!(agg.grades, &["B"]);
        assert_eq!(agg.total_credits, Some(4));
        assert_eq!(agg.sgpa, Some(8.00));
    }

    #[test]
    fn test_aggregate_accepts_signed_grades() {
        let agg = decode_aggregate_row("TOT 48 9 A+ 2.00 18.00 2 18.00 9.00", 1);
        assert_eq!(agg.grades, &["A+"]);
    }

    #[test]
    fn test_aggregate_accepts_bare_sign_grade() {
        // A grade column holding just "-" strips to nothing, which is not
        // a numeric token, so the group is accepted.
        let agg = decode_aggregate_row("TOT 45 8 - 2.00 16.00 2 16.00 8.00", 1);
        assert_eq!(agg.grades, &["-"]);
        assert_eq!(agg.totals, &[45]);
    }

    #[test]
    fn test_aggregate_rejects_numeric_grade_column() {
        // "10" in the grade slot means the tokens are misaligned; the
        // scanner must slide rather than swallow five tokens.
        let agg = decode_aggregate_row("TOT 45 8 10 2.00 16.00 2 16.00 8.00", 1);
        assert!(agg.totals.is_empty());
    }

    #[test]
    fn test_aggregate_requires_five_tokens() {
        let agg = decode_aggregate_row("TOT 45 8 B 2 16.00 8.00", 1);
        // After peeling 8.00, 16.00 and 2, only "45 8 B" remains.
        assert!(agg.totals.is_empty());
        assert_eq!(agg.total_credits, Some(2));
        assert_eq!(agg.sgpa, Some(8.00));
    }

    #[test]
    fn test_aggregate_stops_at_subject_cap() {
        let agg = decode_aggregate_row(
            "TOT 45 8 B 2.00 16.00 50 9 A 2.00 18.00 4 34.00 8.50",
            1,
        );
        assert_eq!(agg.totals, &[45]);
        assert_eq!(agg.grades, &["B"]);
    }

    #[test]
    fn test_aggregate_with_zero_cap_still_peels_summary() {
        let agg = decode_aggregate_row("TOT 45 8 B 2.00 16.00 2 16.00 8.50", 0);
        assert!(agg.totals.is_empty());
        assert_eq!(agg.total_credits, Some(2));
        assert_eq!(agg.sgpa, Some(8.50));
    }

    #[test]
    fn test_aggregate_without_trailing_sgpa() {
        let agg = decode_aggregate_row("TOT 45 8 B 2.00 16.00 4", 1);
        assert_eq!(agg.sgpa, None);
        assert_eq!(agg.total_credits, Some(4));
        assert_eq!(agg.totals, &[45]);
    }

    #[test]
    fn test_aggregate_credit_default_and_grade_credit_none() {
        let agg = decode_aggregate_row("TOT 45 8 B xx yy 2 16.00 8.00", 1);
        assert_eq!(agg.credits, &[2.0]);
        assert_eq!(agg.grade_credits, &[None]);
    }

    #[test]
    fn test_aggregate_total_above_fifty_is_skipped() {
        let agg = decode_aggregate_row("TOT 51 8 B 2.00 16.00 2 16.00 8.00", 1);
        assert!(agg.totals.is_empty());
    }

    // --- full block ---

    fn standard_block() -> StudentBlock {
        make_block(&[
            "123456789 RAHUL SHARMA Regular MALE",
            "(MU0098765)",
            "1234561 :APPLIED MATHEMATICS 1234562 :APPLIED PHYSICS",
            "MU-101: S K SOMAIYA COLLEGE",
            "E1 45 P 50 P MARKS",
            "I1 9 P 8 P (112) PASS",
            "TOT 45 8 B 2.00 16.00 50 9 A 2.00 18.00 4 34.00 8.50",
        ])
    }

    #[test]
    fn test_block_decodes_all_rows() {
        let result = decode_mark_rows(&standard_block(), &[]);
        assert!(result.is_clean());
        let rows = result.value;
        assert_eq!(rows.subject_codes, &["1234561", "1234562"]);
        assert_eq!(rows.external, &[45, 50]);
        assert_eq!(rows.internal, &[9, 8]);
        assert_eq!(rows.totals, &[45, 50]);
        assert_eq!(rows.grade_points, &[8, 9]);
        assert_eq!(rows.grades, &["B", "A"]);
        assert_eq!(rows.credits, &[2.0, 2.0]);
        assert_eq!(rows.grade_credits, &[Some(16.0), Some(18.0)]);
        assert_eq!(rows.total_marks, Some(112));
        assert_eq!(rows.outcome, Some(Outcome::Pass));
        assert_eq!(rows.sgpa, Some(8.50));
        assert_eq!(rows.total_credits, Some(4));
    }

    #[test]
    fn test_block_codes_override_fallback() {
        let fallback = strings(&["9999991", "9999992"]);
        let rows = decode_mark_rows(&standard_block(), &fallback).value;
        assert_eq!(rows.subject_codes, &["1234561", "1234562"]);
    }

    #[test]
    fn test_fallback_codes_used_when_block_has_none() {
        let block = make_block(&[
            "123456789 RAHUL SHARMA Regular",
            "E1 45 P 50 P MARKS",
            "I1 9 P 8 P (112) PASS",
            "TOT 45 8 B 2.00 16.00 50 9 A 2.00 18.00 4 34.00 8.50",
        ]);
        let fallback = strings(&["9999991", "9999992"]);
        let result = decode_mark_rows(&block, &fallback);
        assert!(result.is_clean());
        assert_eq!(result.value.subject_codes, &["9999991", "9999992"]);
        assert_eq!(result.value.totals, &[45, 50]);
    }

    #[test]
    fn test_no_codes_anywhere_warns_and_leaves_aggregates_empty() {
        let block = make_block(&[
            "123456789 RAHUL SHARMA Regular",
            "E1 45 P 50 P MARKS",
            "I1 9 P 8 P (112) PASS",
            "TOT 45 8 B 2.00 16.00 50 9 A 2.00 18.00 4 34.00 8.50",
        ]);
        let result = decode_mark_rows(&block, &[]);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::NoSubjectCodes);
        assert_eq!(result.warnings[0].seat_no.as_deref(), Some("123456789"));
        // External marks are not clipped without a code count, but the
        // aggregate scan caps at zero subjects so its arrays stay empty.
        assert_eq!(result.value.external, &[45, 50]);
        assert!(result.value.totals.is_empty());
        assert_eq!(result.value.sgpa, Some(8.50));
    }

    #[test]
    fn test_rows_longer_than_code_count_are_clipped_with_warning() {
        let block = make_block(&[
            "123456789 RAHUL SHARMA Regular",
            "1234561 :ONLY SUBJECT",
            "E1 45 P 50 P MARKS",
            "I1 9 P 8 P (112) PASS",
            "TOT 45 8 B 2.00 16.00 2 16.00 8.00",
        ]);
        let result = decode_mark_rows(&block, &[]);
        let clip_warnings: Vec<_> = result
            .warnings
            .iter()
            .filter(|w| w.code == WarningCode::SubjectCountClipped)
            .collect();
        assert_eq!(clip_warnings.len(), 2);
        assert!(clip_warnings[0].description.contains("external"));
        assert!(clip_warnings[1].description.contains("internal"));
        assert_eq!(result.value.external, &[45]);
        assert_eq!(result.value.internal, &[9]);
        assert_eq!(result.value.totals, &[45]);
    }

    #[test]
    fn test_block_outcome_without_full_decode() {
        assert_eq!(
            decode_block_outcome(&standard_block()),
            Some(Outcome::Pass)
        );
        let no_rows = make_block(&["123456789 RAHUL SHARMA Regular"]);
        assert_eq!(decode_block_outcome(&no_rows), None);
    }

    #[test]
    fn test_repeated_external_row_takes_last() {
        let block = make_block(&[
            "123456789 RAHUL SHARMA Regular",
            "1234561 :A 1234562 :B",
            "E1 11 P 12 P MARKS",
            "E1 45 P 50 P MARKS",
            "I1 9 P 8 P (112) PASS",
            "TOT 45 8 B 2.00 16.00 50 9 A 2.00 18.00 4 34.00 8.50",
        ]);
        let rows = decode_mark_rows(&block, &[]).value;
        assert_eq!(rows.external, &[45, 50]);
    }
}
