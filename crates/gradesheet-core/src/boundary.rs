//! Detection of horizontal separator lines and student bands.
//!
//! Record pages rule a dashed horizontal separator above and below each
//! student. The strokes arrive as many short vector pieces plus decorative
//! verticals, so detection filters to near-horizontal primitives of
//! sufficient span, clusters their y positions, and reads the surviving
//! separators as band edges.
//!
//! Detection is purely page-local: it takes the page's primitives and
//! returns what it found, never guessing positions. Pages can therefore
//! be processed independently and in parallel.

use crate::shapes::{Orientation, Primitive};

/// Tuning for separator detection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryOptions {
    /// Minimum horizontal span for a stroke to count as a separator.
    /// Default: 200.0.
    pub min_line_length: f64,
    /// Maximum rise (or rectangle height) for a stroke to count as
    /// horizontal. Default: 3.0.
    pub axis_tolerance: f64,
    /// Maximum gap between consecutive y positions merged into one
    /// separator. Default: 5.0.
    pub cluster_threshold: f64,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            min_line_length: 200.0,
            axis_tolerance: 3.0,
            cluster_threshold: 5.0,
        }
    }
}

/// The vertical extent of one student's region on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Band {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Outcome of band detection on one page.
///
/// Fewer than two separators means the page's geometry is unusable;
/// that is reported as [`Undetected`](BandDetection::Undetected) rather
/// than papered over with guessed coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", content = "bands", rename_all = "snake_case")
)]
pub enum BandDetection {
    /// One band per student, top to bottom.
    Detected(Vec<Band>),
    /// Not enough separator lines survived filtering.
    Undetected,
}

impl BandDetection {
    /// Number of students the page geometry accounts for.
    pub fn num_students(&self) -> usize {
        match self {
            BandDetection::Detected(bands) => bands.len(),
            BandDetection::Undetected => 0,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, BandDetection::Detected(_))
    }

    /// The detected bands, empty when undetected.
    pub fn bands(&self) -> &[Band] {
        match self {
            BandDetection::Detected(bands) => bands,
            BandDetection::Undetected => &[],
        }
    }
}

/// Separator lines and the bands read from them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    /// Clustered separator y positions, top to bottom.
    pub separators: Vec<f64>,
    pub detection: BandDetection,
}

/// Midpoint y positions of primitives that qualify as separator strokes,
/// in encounter order.
fn separator_candidates(primitives: &[Primitive], options: &BoundaryOptions) -> Vec<f64> {
    let mut ys = Vec::new();
    for primitive in primitives {
        match primitive {
            Primitive::Line(line) => {
                if line.orientation(options.axis_tolerance) == Orientation::Horizontal
                    && line.span() >= options.min_line_length
                {
                    ys.push(line.mid_y());
                }
            }
            Primitive::Rect(rect) => {
                if rect.height() < options.axis_tolerance && rect.width() >= options.min_line_length
                {
                    ys.push(rect.mid_y());
                }
            }
        }
    }
    ys
}

/// Sort positions and merge runs of consecutive values at most
/// `threshold` apart into their mean.
///
/// Merged outputs are always more than `threshold` apart, so running the
/// merge again changes nothing.
pub fn cluster_positions(positions: &[f64], threshold: f64) -> Vec<f64> {
    if positions.is_empty() {
        return Vec::new();
    }
    let mut sorted = positions.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut merged = Vec::new();
    let mut group_sum = sorted[0];
    let mut group_len = 1usize;
    let mut prev = sorted[0];
    for &y in &sorted[1..] {
        if y - prev <= threshold {
            group_sum += y;
            group_len += 1;
        } else {
            merged.push(group_sum / group_len as f64);
            group_sum = y;
            group_len = 1;
        }
        prev = y;
    }
    merged.push(group_sum / group_len as f64);
    merged
}

/// Detect student bands from a page's vector primitives.
///
/// Three or more separators give two bands from the first three lines;
/// exactly two give a single band; anything less is
/// [`BandDetection::Undetected`]. All clustered separators are kept on
/// the result even when only the first three define bands.
pub fn detect_boundaries(primitives: &[Primitive], options: &BoundaryOptions) -> Boundary {
    let candidates = separator_candidates(primitives, options);
    let separators = cluster_positions(&candidates, options.cluster_threshold);

    let detection = if separators.len() >= 3 {
        BandDetection::Detected(vec![
            Band {
                top: separators[0],
                bottom: separators[1],
            },
            Band {
                top: separators[1],
                bottom: separators[2],
            },
        ])
    } else if separators.len() == 2 {
        BandDetection::Detected(vec![Band {
            top: separators[0],
            bottom: separators[1],
        }])
    } else {
        BandDetection::Undetected
    };

    Boundary {
        separators,
        detection,
    }
}
