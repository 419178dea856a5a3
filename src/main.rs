mod cli;
mod config;
mod error;
mod extract;
mod normalize;

use clap::Parser;
use console::style;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() {
    // Initialize tracing - only show warnings by default, use RUST_LOG=info for more detail.
    // Logs go to stderr; stdout only carries the result line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::commands::convert::run(&cli.pdf_path, &cli.output_path) {
        eprintln!("{}", style(format!("{:#}", e)).red().for_stderr());
        std::process::exit(1);
    }
}
