use super::TextExtractor;
use super::guard::run_guarded;
use crate::error::ExtractError;

/// Primary backend: the `pdf-extract` crate.
///
/// `pdf_extract` can panic on malformed input instead of returning an error
/// and prints font diagnostics to stdout, so every call goes through
/// [`run_guarded`].
pub struct PdfExtractBackend;

impl TextExtractor for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        run_guarded(self.name(), || pdf_extract::extract_text_from_mem(data))
    }
}
