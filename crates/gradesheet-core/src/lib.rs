//! gradesheet-core: Reader-independent data types and algorithms.
//!
//! This crate provides the foundational types (PageInput, StudentRecord,
//! CropRegion, etc.) and algorithms (page classification, block
//! segmentation, mark-row decoding, separator detection) used by
//! gradesheet. It knows nothing about documents on disk: callers feed it
//! extracted text lines and vector primitives per page.

pub mod boundary;
pub mod catalog;
pub mod classify;
pub mod crop;
pub mod error;
pub mod header;
pub mod marks;
pub mod metadata;
pub mod page;
pub mod record;
pub mod segment;
pub mod shapes;
pub mod validate;

pub use boundary::{
    cluster_positions, detect_boundaries, Band, BandDetection, Boundary, BoundaryOptions,
};
pub use catalog::SubjectCatalog;
pub use classify::{classify_page, collect_catalog, PageKind};
pub use crop::{region_for_band, region_for_student, CropRegion, LegacyFixedLayout};
pub use error::{CropError, DecodeResult, DecodeWarning, WarningCode};
pub use header::{decode_header, Gender, HeaderFields, Status};
pub use marks::{
    collect_subject_codes, decode_aggregate_row, decode_block_outcome, decode_external_row,
    decode_internal_row, decode_mark_rows, AggregateRow, InternalRow, MarkRows, Outcome,
};
pub use metadata::{parse_first_page, ExamKind, ExamMetadata};
pub use page::{normalize_ws, PageInput, PageText, TableGrid};
pub use record::StudentRecord;
pub use segment::{is_anchor, is_continuation, segment_page, StudentBlock};
pub use shapes::{classify_orientation, DrawnLine, DrawnRect, Orientation, Point, Primitive};
pub use validate::{validate_record, ValidationProfile};
