//! Extraction stage — turns an uploaded file into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; production uses
//! [`PdfTextExtractor`], tests swap in a fake.

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::Upload;

const PDF_MAGIC: &[u8] = b"%PDF-";
/// PDF readers accept the header anywhere in the first KiB.
const HEADER_SEARCH_WINDOW: usize = 1024;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("file is empty")]
    Empty,

    #[error("file is not a PDF document")]
    NotPdf,

    #[error("could not read PDF text: {0}")]
    Parse(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, upload: &Upload) -> Result<String, ExtractionError>;
}

/// Reads every page with `pdf-extract`, concatenated in page order.
/// Each page ends with a newline so words on adjacent pages never merge.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, upload: &Upload) -> Result<String, ExtractionError> {
        check_pdf_header(&upload.data)?;

        let data = upload.data.clone();
        // pdf-extract is CPU-bound and panics on some malformed inputs; a panic
        // surfaces here as a JoinError and only fails this one document.
        let pages =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&data))
                .await
                .map_err(|e| ExtractionError::Parse(format!("extractor aborted: {e}")))?
                .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        Ok(join_pages(&pages))
    }
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

fn check_pdf_header(data: &[u8]) -> Result<(), ExtractionError> {
    if data.is_empty() {
        return Err(ExtractionError::Empty);
    }
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    if window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
        Ok(())
    } else {
        Err(ExtractionError::NotPdf)
    }
}
