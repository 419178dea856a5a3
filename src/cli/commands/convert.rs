use anyhow::{Context, Result};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::error::CliError;
use crate::extract::{self, Pipeline};

static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");

pub fn run(pdf_path: &Path, output_path: &Path) -> Result<()> {
    if !pdf_path.exists() {
        return Err(CliError::FileNotFound(pdf_path.to_path_buf()).into());
    }

    let config = Config::load()?;
    let pipeline = Pipeline::from_config(&config);

    // Drawn on stderr, and only when it is a terminal
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) =
        ProgressStyle::with_template(&format!("{}{{spinner:.green}} {{msg}}", PAPER))
    {
        spinner.set_style(spinner_style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Extracting {}...", pdf_path.display()));

    let text = extract::extract_or_empty(&pipeline, pdf_path);

    spinner.finish_and_clear();
    tracing::info!(
        "Extracted {} lines from {}",
        text.lines().count(),
        pdf_path.display()
    );

    fs::write(output_path, text.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Text extracted and saved to {}", output_path.display());

    Ok(())
}
