//! Identity fields from the header portion of a student block.
//!
//! The header is everything in the block before the first `E1` row.
//! Seat number, name, status, and gender come from the seat line alone;
//! enrollment and college come from the whole header joined into one
//! normalized string, because extraction sometimes splits them across
//! lines or flushes them out of order.

use std::sync::LazyLock;

use regex::Regex;

use crate::page::normalize_ws;
use crate::segment::{is_anchor, starts_with_marker, StudentBlock};

static ENROLLMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(MU(\d+)").expect("valid regex"));

static COLLEGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(MU-\d+):\s*(.+?)\s*$").expect("valid regex"));

/// Enrollment status printed after the student's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Regular,
    Atkt,
    ExStudent,
    Repeater,
}

impl Status {
    /// The token as printed in the register.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Regular => "Regular",
            Status::Atkt => "ATKT",
            Status::ExStudent => "Ex-Student",
            Status::Repeater => "Repeater",
        }
    }

    /// Recognize an exact status token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Regular" => Some(Status::Regular),
            "ATKT" => Some(Status::Atkt),
            "Ex-Student" => Some(Status::ExStudent),
            "Repeater" => Some(Status::Repeater),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as printed after the status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields decoded from a block header. Every field is optional;
/// decoding itself never fails, validation decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderFields {
    pub seat_no: Option<String>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub gender: Option<Gender>,
    /// Enrollment number, e.g. "MU0098765".
    pub enrollment: Option<String>,
    /// College code, e.g. "MU-101".
    pub college_code: Option<String>,
    pub college_name: Option<String>,
}

/// Decode identity fields from a student block.
///
/// The seat line is located by its anchor shape, so a pulled-back
/// enrollment line at the top of the block does not shift the token
/// positions. Name tokens sit between the seat number and the status
/// keyword; the token after the status is the gender when it is one of
/// the known gender words.
pub fn decode_header(block: &StudentBlock) -> HeaderFields {
    let header_lines: Vec<&str> = block
        .lines()
        .iter()
        .map(String::as_str)
        .take_while(|l| !starts_with_marker(l, "E1"))
        .filter(|l| !l.is_empty())
        .collect();
    let header = normalize_ws(&header_lines.join(" "));

    let mut fields = HeaderFields::default();

    if let Some(seat_line) = header_lines.iter().find(|l| is_anchor(l)) {
        let tokens: Vec<&str> = seat_line.split_whitespace().collect();
        if tokens
            .first()
            .is_some_and(|t| t.len() == 9 && t.bytes().all(|b| b.is_ascii_digit()))
        {
            fields.seat_no = Some(tokens[0].to_string());
            let status_idx = tokens
                .iter()
                .position(|t| Status::from_token(t).is_some());
            if let Some(idx) = status_idx {
                fields.status = Status::from_token(tokens[idx]);
                if idx > 1 {
                    fields.name = Some(tokens[1..idx].join(" "));
                }
                if let Some(next) = tokens.get(idx + 1) {
                    fields.gender = Gender::from_token(next);
                }
            }
        }
    }

    if let Some(caps) = ENROLLMENT_RE.captures(&header) {
        fields.enrollment = Some(format!("MU{}", &caps[1]));
    }
    if let Some(caps) = COLLEGE_RE.captures(&header) {
        fields.college_code = Some(caps[1].to_string());
        fields.college_name = Some(caps[2].to_string());
    }

    fields
}
