//! Facade-level error type.

use gradesheet_core::CropError;
use thiserror::Error;

/// Errors from register-level operations.
///
/// Decoding itself never produces these; bad pages and bad blocks are
/// reported as warnings on the extraction result. Errors cover input
/// loading and crop requests that cannot be satisfied.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Reading input from disk failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing page input JSON failed.
    #[cfg(feature = "serde")]
    #[error("failed to parse page input JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested page number does not exist in this register.
    #[error("page {page} does not exist (register has {pages} page(s))")]
    PageOutOfRange { page: usize, pages: usize },

    /// A crop request could not be satisfied.
    #[error(transparent)]
    Crop(#[from] CropError),
}
