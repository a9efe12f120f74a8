//! PDF text extraction via `pdf-extract`.

use super::{DocumentFormat, ExtractError, Extractor};

pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn extract(&self, data: Vec<u8>) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed inputs instead of erroring.
        let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&data))
            .map_err(|_| ExtractError::Parse { format: DocumentFormat::Pdf, message: "parser panicked".into() })?;
        let text =
            result.map_err(|e| ExtractError::Parse { format: DocumentFormat::Pdf, message: e.to_string() })?;

        if text.trim().is_empty() {
            return Err(ExtractError::Empty { format: DocumentFormat::Pdf });
        }
        Ok(text)
    }
}

#[cfg(test)]
#[path = "pdf_test.rs"]
mod tests;
