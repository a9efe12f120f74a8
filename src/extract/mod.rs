//! Document extraction: uploaded bytes to plain text.
//!
//! DESIGN
//! ======
//! The format is resolved once from the filename extension into a
//! [`DocumentKind`]. Each supported [`DocumentFormat`] has an [`Extractor`]
//! returned by [`extractor_for`]. Extractors are synchronous and CPU-bound;
//! callers run them on the blocking pool.

pub mod epub;
pub mod pdf;

use std::path::Path;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("{format} document is not valid UTF-8: {message}")]
    Encoding { format: DocumentFormat, message: String },
    #[error("failed to parse {format} document: {message}")]
    Parse { format: DocumentFormat, message: String },
    #[error("no text could be extracted from {format} document")]
    Empty { format: DocumentFormat },
}

impl crate::error::ErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encoding { .. } => "E_EXTRACT_ENCODING",
            Self::Parse { .. } => "E_EXTRACT_PARSE",
            Self::Empty { .. } => "E_EXTRACT_EMPTY",
        }
    }
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Epub,
}

impl DocumentFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Pdf => "pdf",
            Self::Epub => "epub",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of extension sniffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Supported(DocumentFormat),
    /// Lowercased extension, empty when the filename has none.
    Unsupported(String),
}

impl DocumentKind {
    /// Classify a filename by its extension (case-insensitive).
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "txt" | "text" | "md" => Self::Supported(DocumentFormat::PlainText),
            "pdf" => Self::Supported(DocumentFormat::Pdf),
            "epub" => Self::Supported(DocumentFormat::Epub),
            _ => Self::Unsupported(ext),
        }
    }
}

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Format-specific bytes-to-text conversion.
pub trait Extractor: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ExtractError`] when the bytes are not a readable document
    /// of this format.
    fn extract(&self, data: Vec<u8>) -> Result<String, ExtractError>;
}

/// Get the extractor for a supported format.
#[must_use]
pub fn extractor_for(format: DocumentFormat) -> &'static dyn Extractor {
    match format {
        DocumentFormat::PlainText => &PlainTextExtractor,
        DocumentFormat::Pdf => &pdf::PdfExtractor,
        DocumentFormat::Epub => &epub::EpubExtractor,
    }
}

/// Strict UTF-8 decode. Content is kept byte-exact.
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, data: Vec<u8>) -> Result<String, ExtractError> {
        String::from_utf8(data)
            .map_err(|e| ExtractError::Encoding { format: DocumentFormat::PlainText, message: e.to_string() })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
