//! Resume text extraction.
//!
//! Takes the uploaded PDF as an in-memory byte buffer and yields one string:
//! the concatenation of every page's text, in ascending page order.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// Extracts the full textual content of a PDF resume.
/// Fails when the input is not a readable PDF; no size or page-count limit.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}
