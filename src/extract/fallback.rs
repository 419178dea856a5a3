use lopdf::Document;

use super::TextExtractor;
use super::guard::run_guarded;
use crate::error::ExtractError;

/// Fallback backend: `lopdf`'s own content-stream text extraction.
///
/// Handles some font encodings that `pdf-extract` rejects, at the cost of
/// coarser spacing.
pub struct LopdfBackend;

impl LopdfBackend {
    fn extract_all_pages(data: &[u8]) -> Result<String, lopdf::Error> {
        let doc = Document::load_mem(data)?;
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Ok(String::new());
        }
        doc.extract_text(&pages)
    }
}

impl TextExtractor for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        run_guarded(self.name(), || Self::extract_all_pages(data))
    }
}
