//! Command-line interface for the history splitter.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::{SplitConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use crate::error::Result;
use crate::splitter::{split_with_config, SplitReport};

/// Split a chronological markdown output log into per-day archive files.
#[derive(Parser, Debug)]
#[command(name = "history-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source markdown log
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Directory receiving the YYYYMMDD_history.md files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Collect the parsed options into a `SplitConfig`.
    pub fn to_config(&self) -> SplitConfig {
        SplitConfig::new(&self.input).with_output_dir(&self.output_dir)
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let config = Cli::parse().to_config();
    let report = split_with_config(&config)?;
    print_report(&config, &report);
    Ok(())
}

fn print_report(config: &SplitConfig, report: &SplitReport) {
    if report.created_output_dir {
        println!(
            "{} {}",
            style("Created directory:").bold(),
            config.output_dir.display()
        );
    }

    for path in &report.appended {
        println!("{} {}", style("Appended to").green(), path.display());
    }

    println!(
        "{} {} section(s) into {} file(s)",
        style("Done:").green().bold(),
        report.section_count(),
        report.files().len()
    );
}
