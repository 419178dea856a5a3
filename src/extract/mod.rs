mod fallback;
mod ghostscript;
mod guard;
mod pdf;

use std::path::Path;

use crate::config::Config;
use crate::error::ExtractError;
use crate::normalize::normalize;

pub use fallback::LopdfBackend;
pub use ghostscript::Ghostscript;
pub use pdf::PdfExtractBackend;

/// An opaque PDF-to-text collaborator.
pub trait TextExtractor {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Extract raw, unnormalized text from an in-memory PDF document
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError>;
}

/// Ordered chain of extraction backends with optional preprocessing.
pub struct Pipeline {
    backends: Vec<Box<dyn TextExtractor>>,
    preprocess: Option<Ghostscript>,
}

impl Pipeline {
    pub fn new(backends: Vec<Box<dyn TextExtractor>>) -> Self {
        Self {
            backends,
            preprocess: None,
        }
    }

    pub fn with_preprocess(mut self, ghostscript: Ghostscript) -> Self {
        self.preprocess = Some(ghostscript);
        self
    }

    /// Build the pipeline described by the configuration
    pub fn from_config(config: &Config) -> Self {
        let mut backends: Vec<Box<dyn TextExtractor>> = vec![Box::new(PdfExtractBackend)];
        if config.fallback {
            backends.push(Box::new(LopdfBackend));
        }

        let pipeline = Self::new(backends);
        if config.preprocess.enabled {
            pipeline.with_preprocess(Ghostscript::new(config.preprocess.ghostscript.clone()))
        } else {
            pipeline
        }
    }

    /// Run the backends in order over `data` and normalize the first success
    pub fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        let mut failures = Vec::new();

        for backend in &self.backends {
            tracing::debug!("Trying {} ({} bytes)", backend.name(), data.len());
            match backend.extract(data) {
                Ok(text) => {
                    if !failures.is_empty() {
                        tracing::warn!("Recovered text with fallback backend {}", backend.name());
                    }
                    return Ok(normalize(&text));
                }
                Err(e) => {
                    tracing::debug!("{}", e);
                    failures.push(e);
                }
            }
        }

        Err(ExtractError::Exhausted(failures))
    }

    /// Read the document at `path`, preprocess it if configured, then extract
    pub fn extract_file(&self, path: &Path) -> Result<String, ExtractError> {
        let data = match &self.preprocess {
            Some(gs) => match gs.convert(path) {
                Ok(converted) => converted,
                Err(e) => {
                    tracing::warn!("{}; using original file", e);
                    read_file(path)?
                }
            },
            None => read_file(path)?,
        };

        self.extract_bytes(&data)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ExtractError> {
    std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Best-effort extraction: report a failure on stderr and degrade to `""`.
///
/// An empty result therefore means either "extraction failed" or "the
/// document has no text"; callers cannot tell the two apart.
pub fn extract_or_empty(pipeline: &Pipeline, path: &Path) -> String {
    match pipeline.extract_file(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error extracting text from {}: {}", path.display(), e);
            String::new()
        }
    }
}
