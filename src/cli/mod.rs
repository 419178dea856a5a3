pub mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pdftext")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract whitespace-normalized plain text from a PDF document")]
#[command(long_about = "Extract whitespace-normalized plain text from a PDF document.\n\n\
    Every line of the extracted text is trimmed, internal whitespace runs are\n\
    collapsed to a single space and blank lines are dropped.\n\n\
    If the PDF cannot be parsed the error is reported on stderr and an empty\n\
    output file is still written.\n\n\
    Optional settings are read from ~/.config/pdftext/config.toml\n\
    (override the location with PDFTEXT_CONFIG).")]
pub struct Cli {
    /// PDF document to extract text from
    pub pdf_path: PathBuf,

    /// Text file to write (created or overwritten, UTF-8)
    pub output_path: PathBuf,
}
