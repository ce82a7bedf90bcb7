pub mod fixtures;
pub mod pdf_assertions;

use cnol_badge::{BadgeError, BadgeGenerator, BadgeRequest};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Generate a badge with the in-memory fixture assets
pub fn generate_badge(request: BadgeRequest) -> Result<GeneratedPdf, BadgeError> {
    let generator = BadgeGenerator::builder()
        .with_asset_provider(fixtures::asset_provider())
        .build()?;
    let badge = generator.generate(request)?;
    Ok(GeneratedPdf::from_bytes(badge.bytes).expect("generated bytes should parse as PDF"))
}
