//! gradesheet: Reconstruct student records and crop regions from
//! machine-extracted grade-sheet pages.
//!
//! Input is text lines and vector primitives already pulled out of a
//! tabular results register. This crate classifies pages, segments and
//! decodes per-student blocks, validates the results, and maps detected
//! separator geometry to per-student crop regions.
//!
//! # Architecture
//!
//! - [`gradesheet_core`]: reader-independent data types and algorithms
//!   (classification, segmentation, decoding, validation, geometry).
//! - `gradesheet` (this crate): the register-level surface that runs
//!   both pipelines over a page sequence and correlates their output.
//!
//! # Example
//!
//! ```
//! use gradesheet::{ExtractOptions, PageInput, Register};
//!
//! let pages = vec![PageInput {
//!     number: 1,
//!     width: 770.0,
//!     height: 595.0,
//!     lines: vec!["OFFICE REGISTER FOR THE B.Sc. (Semester - I) EXAMINATION".into()],
//!     tables: Vec::new(),
//!     primitives: Vec::new(),
//! }];
//! let register = Register::new(pages);
//! let result = register.extract(&ExtractOptions::default());
//! assert!(result.value.records.is_empty());
//! ```

pub use gradesheet_core;

pub mod error;
pub mod register;

pub use error::RegisterError;
pub use register::{ExtractOptions, PageReport, Register, RegisterExtract, StudentCrop};

pub use gradesheet_core::{
    Band, BandDetection, Boundary, BoundaryOptions, CropError, CropRegion, DecodeResult,
    DecodeWarning, ExamKind, ExamMetadata, Gender, HeaderFields, LegacyFixedLayout, MarkRows,
    Outcome, PageInput, PageKind, Primitive, Status, StudentRecord, SubjectCatalog,
    ValidationProfile, WarningCode,
};
