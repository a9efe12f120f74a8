//! Book library: upload, extraction, and in-memory storage of books.
//!
//! DESIGN
//! ======
//! An upload moves through `received -> extracting -> stored | rejected`.
//! The raw bytes are staged to a temp artifact in the upload directory, read
//! back, and extracted on the blocking pool under a timeout. Only a
//! successful extraction creates a `Book`; nothing is kept on rejection.
//!
//! ERROR HANDLING
//! ==============
//! The temp artifact is owned by the upload call as a `NamedTempFile`, so it
//! is removed on every exit path: rejection, extractor error, blocking-task
//! panic, timeout, and cancellation of the request future.
//!
//! Ids are millisecond timestamps made strictly increasing under the store
//! lock, so two uploads in the same millisecond still get distinct ids.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::extract::{DocumentFormat, DocumentKind, ExtractError, extractor_for};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("unsupported file format: '.{extension}'")]
    UnsupportedFormat { extension: String },
    #[error("book not found: {0}")]
    NotFound(String),
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
    #[error("extraction timed out after {secs}s")]
    ExtractTimeout { secs: u64 },
    #[error("upload I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("extraction task failed: {0}")]
    Task(String),
}

impl ErrorCode for LibraryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "E_UNSUPPORTED_FORMAT",
            Self::NotFound(_) => "E_BOOK_NOT_FOUND",
            Self::Extract(e) => e.error_code(),
            Self::ExtractTimeout { .. } => "E_EXTRACT_TIMEOUT",
            Self::Io(_) => "E_IO",
            Self::Task(_) => "E_TASK",
        }
    }
}

/// A stored book. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub content: String,
}

/// List projection of a [`Book`], content omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self { id: book.id.clone(), name: book.name.clone() }
    }
}

// =============================================================================
// LIBRARY
// =============================================================================

struct LibraryInner {
    books: Vec<Book>,
    last_id: u64,
}

#[derive(Clone)]
pub struct BookLibrary {
    inner: Arc<RwLock<LibraryInner>>,
    upload_dir: PathBuf,
    extract_timeout: Duration,
}

impl BookLibrary {
    #[must_use]
    pub fn new(upload_dir: PathBuf, extract_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LibraryInner { books: Vec::new(), last_id: 0 })),
            upload_dir,
            extract_timeout,
        }
    }

    #[cfg(test)]
    pub fn upload_dir(&self) -> &std::path::Path {
        &self.upload_dir
    }

    /// Stage, extract, and store one uploaded file.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UnsupportedFormat`] for an unknown extension,
    /// an extraction error or timeout when the document cannot be read, and
    /// [`LibraryError::Io`] when staging fails.
    pub async fn upload(&self, filename: &str, data: Vec<u8>) -> Result<BookSummary, LibraryError> {
        let artifact = self.stage(data).await?;
        self.ingest(filename, artifact).await
    }

    /// `received`: write the upload to a temp artifact.
    pub(crate) async fn stage(&self, data: Vec<u8>) -> Result<NamedTempFile, LibraryError> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let dir = self.upload_dir.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
            let mut file = tempfile::Builder::new().prefix("upload-").tempfile_in(dir)?;
            file.write_all(&data)?;
            file.flush()?;
            Ok(file)
        })
        .await
        .map_err(|e| LibraryError::Task(e.to_string()))?
        .map_err(LibraryError::from)
    }

    /// `extracting` through to `stored` or `rejected`. Consumes the artifact.
    pub(crate) async fn ingest(&self, filename: &str, artifact: NamedTempFile) -> Result<BookSummary, LibraryError> {
        let format = match DocumentKind::from_filename(filename) {
            DocumentKind::Supported(format) => format,
            DocumentKind::Unsupported(extension) => {
                discard(artifact);
                info!(name = filename, %extension, "upload rejected: unsupported format");
                return Err(LibraryError::UnsupportedFormat { extension });
            }
        };

        let result = self.extract(format, &artifact).await;
        discard(artifact);

        let content = match result {
            Ok(content) => content,
            Err(e) => {
                warn!(name = filename, %format, error = %e, "upload rejected: extraction failed");
                return Err(e);
            }
        };

        let summary = self.store(filename, content).await;
        info!(book_id = %summary.id, name = %summary.name, %format, "book stored");
        Ok(summary)
    }

    async fn extract(&self, format: DocumentFormat, artifact: &NamedTempFile) -> Result<String, LibraryError> {
        let data = tokio::fs::read(artifact.path()).await?;
        let task = tokio::task::spawn_blocking(move || extractor_for(format).extract(data));

        match tokio::time::timeout(self.extract_timeout, task).await {
            Err(_) => Err(LibraryError::ExtractTimeout { secs: self.extract_timeout.as_secs() }),
            Ok(Err(join)) => Err(LibraryError::Task(join.to_string())),
            Ok(Ok(extracted)) => Ok(extracted?),
        }
    }

    async fn store(&self, filename: &str, content: String) -> BookSummary {
        let mut inner = self.inner.write().await;
        let id = now_ms().max(inner.last_id.saturating_add(1));
        inner.last_id = id;

        let book = Book { id: id.to_string(), name: filename.to_string(), content };
        let summary = BookSummary::from(&book);
        inner.books.push(book);
        summary
    }

    /// Every stored book in upload order, content omitted.
    pub async fn list(&self) -> Vec<BookSummary> {
        self.inner.read().await.books.iter().map(BookSummary::from).collect()
    }

    /// # Errors
    ///
    /// Returns [`LibraryError::NotFound`] if no book has this id.
    pub async fn get(&self, id: &str) -> Result<Book, LibraryError> {
        self.inner
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.books.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.books.is_empty()
    }
}

/// Delete a temp artifact now, logging instead of failing on error.
fn discard(artifact: NamedTempFile) {
    let path = artifact.path().to_path_buf();
    if let Err(e) = artifact.close() {
        warn!(path = %path.display(), error = %e, "failed to remove temp artifact");
    }
}

fn now_ms() -> u64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    u64::try_from(dur.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "library_test.rs"]
mod tests;
