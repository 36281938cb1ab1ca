//! Mapping of detected bands to crop regions.
//!
//! A crop region spans the full page width; only the vertical extent
//! comes from detection. Requests that cannot be satisfied are hard
//! errors: handing back a guessed rectangle would silently feed wrong
//! page regions to downstream consumers. Callers that want the historic
//! fixed coordinates must opt into [`LegacyFixedLayout`] by name.

use crate::boundary::{Band, BandDetection, Boundary};
use crate::error::CropError;

/// A rectangular page region in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRegion {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl CropRegion {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Map one band to a full-width crop region with no padding.
pub fn region_for_band(band: &Band, page_width: f64) -> Result<CropRegion, CropError> {
    if band.bottom <= band.top {
        return Err(CropError::EmptyBand {
            top: band.top,
            bottom: band.bottom,
        });
    }
    Ok(CropRegion {
        x0: 0.0,
        top: band.top,
        x1: page_width,
        bottom: band.bottom,
    })
}

/// Crop region for the student at `index` on a page with detected
/// boundaries.
pub fn region_for_student(
    boundary: &Boundary,
    index: usize,
    page_width: f64,
) -> Result<CropRegion, CropError> {
    match &boundary.detection {
        BandDetection::Undetected => Err(CropError::BandsUndetected),
        BandDetection::Detected(bands) => {
            let band = bands
                .get(index)
                .ok_or(CropError::StudentIndexOutOfRange {
                    index,
                    available: bands.len(),
                })?;
            region_for_band(band, page_width)
        }
    }
}

/// The historic fixed layout used before separator detection existed.
///
/// Never consulted implicitly: detection failures surface as errors, and
/// this layout applies only where a caller names it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyFixedLayout {
    /// Fixed band per student slot, top slot first.
    pub bands: [Band; 2],
    /// Replacement bottom for the top slot when the page holds a single
    /// student, whose record runs longer.
    pub single_student_bottom: f64,
}

impl Default for LegacyFixedLayout {
    fn default() -> Self {
        Self {
            bands: [
                Band {
                    top: 91.0,
                    bottom: 294.0,
                },
                Band {
                    top: 294.0,
                    bottom: 497.0,
                },
            ],
            single_student_bottom: 326.0,
        }
    }
}

impl LegacyFixedLayout {
    /// Crop region for a student slot under the fixed layout.
    ///
    /// A page population other than 1 or 2 is treated as 2.
    pub fn region(
        &self,
        index: usize,
        students_on_page: usize,
        page_width: f64,
    ) -> Result<CropRegion, CropError> {
        if index >= self.bands.len() {
            return Err(CropError::StudentIndexOutOfRange {
                index,
                available: self.bands.len(),
            });
        }
        let mut band = self.bands[index];
        let students = if matches!(students_on_page, 1 | 2) {
            students_on_page
        } else {
            2
        };
        if students == 1 && index == 0 {
            band.bottom = self.single_student_bottom;
        }
        region_for_band(&band, page_width)
    }
}
