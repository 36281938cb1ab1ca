//! Drawing primitives handed in by the external vector-graphics reader.
//!
//! Coordinates use a top-left origin in typographic points, the same page
//! coordinate space the text layer reports. Nothing here touches a source
//! document; primitives arrive already materialized.

/// A 2D point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Orientation of a drawn segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Classify orientation from coordinate deltas.
///
/// `tolerance` is the maximum deviation along one axis for the segment to
/// still count as aligned with the other. Separator detection passes a loose
/// tolerance here because ruled lines in these documents are rarely drawn
/// perfectly flat.
pub fn classify_orientation(dx: f64, dy: f64, tolerance: f64) -> Orientation {
    if dy.abs() < tolerance {
        Orientation::Horizontal
    } else if dx.abs() < tolerance {
        Orientation::Vertical
    } else {
        Orientation::Diagonal
    }
}

/// An explicit line primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawnLine {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl DrawnLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Horizontal extent of the line.
    pub fn span(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    /// Vertical deviation between the endpoints.
    pub fn rise(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }

    /// Midpoint of the two endpoint y values.
    pub fn mid_y(&self) -> f64 {
        (self.start.y + self.end.y) / 2.0
    }

    pub fn orientation(&self, tolerance: f64) -> Orientation {
        classify_orientation(
            self.end.x - self.start.x,
            self.end.y - self.start.y,
            tolerance,
        )
    }
}

/// A rectangle primitive.
///
/// Thin filled rectangles frequently stand in for ruled separator lines in
/// these documents, so the boundary detector treats them as line candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawnRect {
    /// Left x coordinate.
    pub x0: f64,
    /// Top y coordinate.
    pub y0: f64,
    /// Right x coordinate.
    pub x1: f64,
    /// Bottom y coordinate.
    pub y1: f64,
}

impl DrawnRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }

    /// Midpoint of the top and bottom edges.
    pub fn mid_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }
}

/// One entry in a page's vector drawing list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Primitive {
    Line(DrawnLine),
    Rect(DrawnRect),
}

impl Primitive {
    /// Convenience constructor for a line primitive.
    pub fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Primitive::Line(DrawnLine::new(Point::new(x0, y0), Point::new(x1, y1)))
    }

    /// Convenience constructor for a rect primitive.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Primitive::Rect(DrawnRect::new(x0, y0, x1, y1))
    }
}
