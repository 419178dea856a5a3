//! Optional Ghostscript rewrite of the input before extraction.
//!
//! Re-distilling a PDF through `pdfwrite` at compatibility level 1.4 fixes a
//! fair share of documents that the extractors otherwise choke on (odd xref
//! layouts, newer object streams).

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use uuid::Uuid;

use crate::error::ExtractError;

pub struct Ghostscript {
    program: String,
}

impl Ghostscript {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-sDEVICE=pdfwrite".to_string(),
            "-dCompatibilityLevel=1.4".to_string(),
            "-dPDFSETTINGS=/default".to_string(),
            "-dNOPAUSE".to_string(),
            "-dQUIET".to_string(),
            "-dBATCH".to_string(),
            format!("-sOutputFile={}", output.display()),
            input.display().to_string(),
        ]
    }

    /// Rewrite `input` and return the bytes of the converted document.
    ///
    /// The intermediate file lives in the system temp directory and is
    /// removed before returning, whatever the outcome.
    pub fn convert(&self, input: &Path) -> Result<Vec<u8>, ExtractError> {
        let output = temp_output_path();
        let result = self.run(input, &output);
        let _ = std::fs::remove_file(&output);
        result
    }

    fn run(&self, input: &Path, output: &Path) -> Result<Vec<u8>, ExtractError> {
        tracing::debug!("Running {} on {}", self.program, input.display());

        let result = Command::new(&self.program)
            .args(Self::args(input, output))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ExtractError::Preprocess(format!("failed to run {}: {}", self.program, e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExtractError::Preprocess(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }

        std::fs::read(output).map_err(|e| {
            ExtractError::Preprocess(format!("no output at {}: {}", output.display(), e))
        })
    }
}

fn temp_output_path() -> PathBuf {
    std::env::temp_dir().join(format!("pdftext_{}.pdf", Uuid::new_v4()))
}
