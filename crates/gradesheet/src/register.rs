//! Whole-register extraction: text and geometry pipelines over a page
//! sequence, correlated per page.
//!
//! The text pipeline classifies each page, mines catalog entries from
//! index pages, and decodes student records from record pages. The
//! geometry pipeline detects separator bands and maps them to crop
//! regions. The two run independently per page and meet only through
//! their shared keys: page number and on-page student index. A count
//! disagreement between them is reported, never reconciled by guessing.

use gradesheet_core::{
    classify_page, collect_catalog, collect_subject_codes, decode_block_outcome, decode_header,
    decode_mark_rows, detect_boundaries, parse_first_page, region_for_band, region_for_student,
    segment_page, validate_record, BoundaryOptions, CropRegion, DecodeResult, DecodeWarning,
    ExamMetadata, LegacyFixedLayout, PageInput, PageKind, StudentRecord, SubjectCatalog,
    ValidationProfile, WarningCode,
};

use crate::error::RegisterError;

/// Tuning for a register extraction run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractOptions {
    /// How much of each record must be present. Default:
    /// [`ValidationProfile::Full`].
    pub profile: ValidationProfile,
    /// Number of leading pages scanned for catalog entries and front
    /// matter. Default: 20.
    pub catalog_page_limit: usize,
    /// Separator-detection tuning for the geometry pipeline.
    pub boundary: BoundaryOptions,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            profile: ValidationProfile::default(),
            catalog_page_limit: 20,
            boundary: BoundaryOptions::default(),
        }
    }
}

/// One crop region keyed by page and on-page student index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentCrop {
    /// 1-based page number.
    pub page: usize,
    /// 0-based position of the student on the page, top to bottom.
    pub student_index: usize,
    pub region: CropRegion,
}

/// Per-page summary of what both pipelines produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageReport {
    /// 1-based page number.
    pub page: usize,
    pub kind: PageKind,
    /// Records that passed validation.
    pub accepted: usize,
    /// Records that were decoded but failed validation.
    pub rejected: usize,
    /// Bands the geometry pipeline found, `None` when the page carries
    /// no usable geometry (index pages, or detection failure).
    pub detected_bands: Option<usize>,
}

/// Everything extracted from a register.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterExtract {
    pub metadata: ExamMetadata,
    pub catalog: SubjectCatalog,
    /// Accepted records across all pages, in page order.
    pub records: Vec<StudentRecord>,
    /// Crop regions across all pages, in page order.
    pub crops: Vec<StudentCrop>,
    /// One report per input page, in input order.
    pub pages: Vec<PageReport>,
}

impl RegisterExtract {
    /// Accepted records decoded from the given page.
    pub fn records_on_page(&self, page: usize) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter().filter(move |r| r.page == page)
    }

    /// The crop region correlated with a record by its page and on-page
    /// student index.
    pub fn crop_for(&self, page: usize, student_index: usize) -> Option<&CropRegion> {
        self.crops
            .iter()
            .find(|c| c.page == page && c.student_index == student_index)
            .map(|c| &c.region)
    }
}

/// A register document: extracted pages ready for decoding.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    pages: Vec<PageInput>,
}

impl Register {
    pub fn new(pages: Vec<PageInput>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageInput] {
        &self.pages
    }

    /// Build a register from a JSON array of page inputs.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, RegisterError> {
        let pages: Vec<PageInput> = serde_json::from_str(json)?;
        Ok(Self::new(pages))
    }

    /// Build a register from a JSON file of page inputs.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, RegisterError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Run both pipelines over every page.
    ///
    /// Never fails: pages and blocks that cannot be decoded are skipped
    /// and described by warnings on the result.
    pub fn extract(&self, options: &ExtractOptions) -> DecodeResult<RegisterExtract> {
        #[cfg(feature = "tracing")]
        tracing::info!(pages = self.pages.len(), "extracting register");

        let (metadata, catalog) = self.scan_front_matter(options);
        let outcomes: Vec<PageOutcome> = self
            .pages
            .iter()
            .map(|page| process_page(page, &catalog, options))
            .collect();
        assemble(metadata, catalog, outcomes)
    }

    /// [`extract`](Register::extract) with pages processed in parallel.
    ///
    /// Page processing is purely page-local, so results are identical to
    /// the sequential run, in the same order.
    #[cfg(feature = "parallel")]
    pub fn extract_parallel(&self, options: &ExtractOptions) -> DecodeResult<RegisterExtract> {
        use rayon::prelude::*;

        #[cfg(feature = "tracing")]
        tracing::info!(pages = self.pages.len(), "extracting register in parallel");

        let (metadata, catalog) = self.scan_front_matter(options);
        let outcomes: Vec<PageOutcome> = self
            .pages
            .par_iter()
            .map(|page| process_page(page, &catalog, options))
            .collect();
        assemble(metadata, catalog, outcomes)
    }

    /// Crop region for one student on one page, using fresh separator
    /// detection on that page.
    pub fn crop_student(
        &self,
        page_number: usize,
        student_index: usize,
        options: &BoundaryOptions,
    ) -> Result<CropRegion, RegisterError> {
        let page = self.page(page_number)?;
        let boundary = detect_boundaries(&page.primitives, options);
        Ok(region_for_student(&boundary, student_index, page.width)?)
    }

    /// Crop region for one student under the historic fixed layout.
    pub fn crop_student_fixed(
        &self,
        page_number: usize,
        student_index: usize,
        students_on_page: usize,
    ) -> Result<CropRegion, RegisterError> {
        let page = self.page(page_number)?;
        Ok(LegacyFixedLayout::default().region(student_index, students_on_page, page.width)?)
    }

    fn page(&self, page_number: usize) -> Result<&PageInput, RegisterError> {
        self.pages
            .iter()
            .find(|p| p.number == page_number)
            .ok_or(RegisterError::PageOutOfRange {
                page: page_number,
                pages: self.pages.len(),
            })
    }

    /// Metadata from the first page and catalog entries from index pages
    /// within the scan window.
    fn scan_front_matter(&self, options: &ExtractOptions) -> (ExamMetadata, SubjectCatalog) {
        let metadata = self
            .pages
            .first()
            .map(|page| parse_first_page(&page.text()))
            .unwrap_or_default();

        let mut catalog = SubjectCatalog::new();
        for page in self.pages.iter().take(options.catalog_page_limit) {
            if classify_page(&page.text()) == PageKind::IndexPage {
                collect_catalog(page, &mut catalog);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(subjects = catalog.len(), "subject catalog collected");

        (metadata, catalog)
    }
}

struct PageOutcome {
    records: Vec<StudentRecord>,
    crops: Vec<StudentCrop>,
    report: PageReport,
    warnings: Vec<DecodeWarning>,
}

impl PageOutcome {
    fn barren(report: PageReport, warnings: Vec<DecodeWarning>) -> Self {
        Self {
            records: Vec::new(),
            crops: Vec::new(),
            report,
            warnings,
        }
    }
}

/// Run both pipelines over one page. Page-local: reads nothing but the
/// page and the shared catalog.
fn process_page(
    page: &PageInput,
    catalog: &SubjectCatalog,
    options: &ExtractOptions,
) -> PageOutcome {
    let number = page.number;
    let mut warnings = Vec::new();
    let text = page.text();

    if text.is_empty() {
        warnings
            .push(DecodeWarning::new(WarningCode::EmptyPage, "no extractable text").on_page(number));
        return PageOutcome::barren(
            PageReport {
                page: number,
                kind: PageKind::IndexPage,
                accepted: 0,
                rejected: 0,
                detected_bands: None,
            },
            warnings,
        );
    }

    let kind = classify_page(&text);
    if kind == PageKind::IndexPage {
        return PageOutcome::barren(
            PageReport {
                page: number,
                kind,
                accepted: 0,
                rejected: 0,
                detected_bands: None,
            },
            warnings,
        );
    }

    // Text pipeline: codes, blocks, records.
    let page_codes = collect_subject_codes(text.lines());
    let fallback: Vec<String> = if page_codes.is_empty() {
        catalog.codes().to_vec()
    } else {
        page_codes
    };

    let segmented = segment_page(&text);
    for mut warning in segmented.warnings {
        warning.page.get_or_insert(number);
        warnings.push(warning);
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        page = number,
        blocks = segmented.value.len(),
        "segmented record page"
    );

    let mut records = Vec::new();
    let mut accepted = 0usize;
    let mut rejected = 0usize;
    for block in &segmented.value {
        let header = decode_header(block);
        let record = match options.profile {
            ValidationProfile::Full => {
                let decoded = decode_mark_rows(block, &fallback);
                for mut warning in decoded.warnings {
                    warning.page.get_or_insert(number);
                    warnings.push(warning);
                }
                StudentRecord::from_parts(header, decoded.value, number)
            }
            ValidationProfile::IdentityOnly => {
                StudentRecord::from_identity(header, decode_block_outcome(block), number)
            }
        };
        let verdict = validate_record(&record, options.profile);
        warnings.extend(verdict.warnings);
        if verdict.value {
            accepted += 1;
            records.push(record);
        } else {
            rejected += 1;
            #[cfg(feature = "tracing")]
            tracing::warn!(
                page = number,
                seat = record.seat_no.as_deref().unwrap_or("unknown"),
                "record rejected"
            );
        }
    }

    // Geometry pipeline: bands to crop regions.
    let boundary = detect_boundaries(&page.primitives, &options.boundary);
    let mut crops = Vec::new();
    let detected_bands = if boundary.detection.is_detected() {
        let bands = boundary.detection.bands();
        for (student_index, band) in bands.iter().enumerate() {
            match region_for_band(band, page.width) {
                Ok(region) => crops.push(StudentCrop {
                    page: number,
                    student_index,
                    region,
                }),
                Err(err) => warnings.push(
                    DecodeWarning::new(WarningCode::CropFailed, err.to_string()).on_page(number),
                ),
            }
        }
        if bands.len() != accepted {
            warnings.push(
                DecodeWarning::new(
                    WarningCode::StudentCountMismatch,
                    format!(
                        "{accepted} accepted record(s) but {} detected band(s)",
                        bands.len()
                    ),
                )
                .on_page(number),
            );
        }
        Some(bands.len())
    } else {
        warnings.push(
            DecodeWarning::new(
                WarningCode::BoundaryUndetected,
                format!(
                    "{} separator line(s) found, need at least 2",
                    boundary.separators.len()
                ),
            )
            .on_page(number),
        );
        None
    };

    PageOutcome {
        records,
        crops,
        report: PageReport {
            page: number,
            kind,
            accepted,
            rejected,
            detected_bands,
        },
        warnings,
    }
}

fn assemble(
    metadata: ExamMetadata,
    catalog: SubjectCatalog,
    outcomes: Vec<PageOutcome>,
) -> DecodeResult<RegisterExtract> {
    let mut records = Vec::new();
    let mut crops = Vec::new();
    let mut pages = Vec::new();
    let mut warnings = Vec::new();
    for outcome in outcomes {
        records.extend(outcome.records);
        crops.extend(outcome.crops);
        pages.push(outcome.report);
        warnings.extend(outcome.warnings);
    }
    #[cfg(feature = "tracing")]
    tracing::info!(
        records = records.len(),
        crops = crops.len(),
        "register extraction complete"
    );
    DecodeResult::with_warnings(
        RegisterExtract {
            metadata,
            catalog,
            records,
            crops,
            pages,
        },
        warnings,
    )
}
