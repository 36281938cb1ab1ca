//! Shared register fixtures for the integration tests.
//!
//! Pages mirror the layout of scanned result registers: front matter and
//! a subject table on the first page, text-only catalog lines on the
//! second, record pages with two and one students, and ruled separators
//! arriving as duplicate strokes mixed with decoy geometry.

#![allow(dead_code)]

use gradesheet::{PageInput, Primitive, Register};

pub const PAGE_WIDTH: f64 = 841.89;
pub const PAGE_HEIGHT: f64 = 595.28;

/// Clustered separator positions produced by [`ruled_separators`].
pub const TOP_SEPARATOR: f64 = 92.0;
pub const MIDDLE_SEPARATOR: f64 = 294.5;
pub const BOTTOM_SEPARATOR: f64 = 497.0;

pub fn assert_approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "expected {b}, got {a}");
}

fn strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

pub fn page(number: usize, lines: &[&str]) -> PageInput {
    PageInput {
        number,
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        lines: strings(lines),
        tables: Vec::new(),
        primitives: Vec::new(),
    }
}

/// First page: front matter plus a two-row subject table. The text also
/// carries a catalog-format line that must stay out of the catalog,
/// because the table already matched on this page.
pub fn front_page(number: usize) -> PageInput {
    let mut p = page(
        number,
        &[
            "UNIVERSITY OF MUMBAI",
            "OFFICE REGISTER FOR THE B.Sc.(Information Technology) ( Semester - I )",
            "REGULAR EXAMINATION HELD IN APRIL 2024",
            "Declaration Date: June 10, 2024",
            "9999999 GHOST SUBJECT 2.00 8.00",
            "#: O.229 @: O.5042A",
            "ADC: ADMISSION CANCELLED AA/ABS: ABSENT",
        ],
    );
    p.tables = vec![vec![
        vec![
            Some("4016511".to_string()),
            Some("PROGRAMMING PRINCIPLES WITH C".to_string()),
        ],
        vec![
            Some("4016512".to_string()),
            Some("DIGITAL LOGIC".to_string()),
        ],
    ]];
    p
}

/// Table-free index page whose catalog lines feed the line fallback. The
/// repeated 4016511 entry must lose to the first page's name.
pub fn catalog_page(number: usize) -> PageInput {
    page(
        number,
        &[
            "OFFICE REGISTER FOR THE B.Sc.(Information Technology) ( Semester - I )",
            "4016513 COMPUTER ORGANIZATION 2.00 8.00",
            "4016514 STATISTICS FOR IT 2.00 8.00",
            "4016511 DUPLICATE ENTRY 2.00 8.00",
        ],
    )
}

/// Dashed separators around y 92, 294.5, and 497 as duplicate strokes,
/// shuffled and mixed with geometry that must not qualify.
pub fn ruled_separators() -> Vec<Primitive> {
    vec![
        Primitive::line(30.0, 294.0, 800.0, 294.0),
        Primitive::line(100.0, 150.0, 160.0, 150.0), // too short
        Primitive::line(385.0, 60.0, 385.0, 540.0),  // vertical rule
        Primitive::line(30.0, 91.0, 800.0, 91.0),
        Primitive::line(30.0, 497.0, 800.0, 497.0),
        Primitive::line(30.0, 93.0, 800.0, 93.0),
        Primitive::line(30.0, 100.0, 700.0, 380.0), // diagonal stroke
        Primitive::rect(30.0, 520.0, 110.0, 521.0), // too narrow
        Primitive::rect(30.0, 60.0, 800.0, 560.0),  // page frame
        Primitive::line(30.0, 295.0, 800.0, 295.0),
        Primitive::line(30.0, 92.0, 800.0, 92.0),
    ]
}

/// Record page with two students and page-level subject-code captions.
/// The second student's enrollment line is flushed above their seat
/// line, the shape the segmentation lookback handles.
pub fn two_student_page(number: usize) -> PageInput {
    let mut p = page(
        number,
        &[
            "OFFICE REGISTER FOR THE B.Sc.(Information Technology) ( Semester - I )",
            "SEAT NO NAME OF CANDIDATE",
            "4016511 : 4016512 : 4016513 : 4016514 :",
            "123456789 SHARMA RAHUL DINESH Regular MALE",
            "(MU066952) MU-5: SHREE INSTITUTE OF TECHNOLOGY",
            "E1 32 P 35 P 28 P 30 P MARKS OBT.",
            "I1 15 P 13 P 17 P 16 P (186) PASS",
            "TOT 47 9 A 2.00 18.00 48 9 A 2.00 18.00 45 8 B+ 2.00 16.00 46 8 B+ 2.00 16.00 8 68.00 8.50",
            "(MU067001)",
            "987654321 PATEL PRIYA SURESH ATKT FEMALE",
            "MU-5: SHREE INSTITUTE OF TECHNOLOGY",
            "E1 22 P 28 P 0 0 F 4.5 25 P MARKS OBT.",
            "I1 15 P 14 P 13 P 12 P (129) FAIL",
            "TOT 37 7 B 2.00 14.00 42 8 B+ 2.00 16.00 13 0 F 2.00 0.00 37 7 B 2.00 14.00 8 44.00 5.50",
            "#: O.229 @: O.5042A",
        ],
    );
    p.primitives = ruled_separators();
    p
}

/// Record page with one student whose subject-code captions sit inside
/// the block. The separators still rule two slots, so the text and
/// geometry pipelines disagree about this page's population.
pub fn single_student_page(number: usize) -> PageInput {
    let mut p = page(
        number,
        &[
            "SEAT NO NAME OF CANDIDATE",
            "555000111 DESAI AMIT KUMAR Regular MALE",
            "4016511 : 4016512 :",
            "(MU070002) MU-9: KARMAVEER COLLEGE OF SCIENCE",
            "E1 28 P 26 P MARKS OBT.",
            "I1 14 P 15 P (83) PASS",
            "TOT 42 8 B+ 2.00 16.00 41 8 B+ 2.00 16.00 4 32.00 8.00",
        ],
    );
    p.primitives = ruled_separators();
    p
}

pub fn empty_page(number: usize) -> PageInput {
    page(number, &[])
}

/// Minimal complete block for two subjects.
pub fn simple_block(seat: &str, name: &str) -> Vec<String> {
    vec![
        format!("{seat} {name} Regular MALE"),
        "(MU068000) MU-9: KARMAVEER COLLEGE OF SCIENCE".to_string(),
        "E1 28 P 26 P MARKS OBT.".to_string(),
        "I1 14 P 15 P (83) PASS".to_string(),
        "TOT 42 8 B+ 2.00 16.00 41 8 B+ 2.00 16.00 4 32.00 8.00".to_string(),
    ]
}

/// Record page with two students but only one qualifying separator, so
/// band detection must report failure.
pub fn undetected_page(number: usize) -> PageInput {
    let mut lines = strings(&["SEAT NO NAME OF CANDIDATE", "4016511 : 4016512 :"]);
    lines.extend(simple_block("111222333", "JOSHI SNEHA MOHAN"));
    lines.extend(simple_block("444555666", "KHAN ARIF SALIM"));
    PageInput {
        number,
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        lines,
        tables: Vec::new(),
        primitives: vec![
            Primitive::line(30.0, 91.0, 800.0, 91.0),
            Primitive::line(100.0, 150.0, 160.0, 150.0),
            Primitive::line(385.0, 60.0, 385.0, 540.0),
        ],
    }
}

/// Record page with one student and exactly two separators: one band.
pub fn single_band_page(number: usize) -> PageInput {
    let mut lines = strings(&["SEAT NO NAME OF CANDIDATE", "4016511 : 4016512 :"]);
    lines.extend(simple_block("777888999", "MEHTA KIRAN VIJAY"));
    PageInput {
        number,
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        lines,
        tables: Vec::new(),
        primitives: vec![
            Primitive::line(30.0, 91.0, 800.0, 91.0),
            Primitive::line(30.0, 326.0, 800.0, 326.0),
        ],
    }
}

/// The five-page register most integration tests share: two index pages,
/// a two-student record page, a one-student record page, and an empty
/// page.
pub fn sample_register() -> Register {
    Register::new(vec![
        front_page(1),
        catalog_page(2),
        two_student_page(3),
        single_student_page(4),
        empty_page(5),
    ])
}
