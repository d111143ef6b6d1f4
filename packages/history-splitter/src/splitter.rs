//! Main splitter service that ties parsing and archiving together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::append_section;
use crate::config::SplitConfig;
use crate::error::{Result, SplitterError};
use crate::parser::parse_sections;

/// Outcome of a successful split run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Whether the output directory had to be created.
    pub created_output_dir: bool,
    /// Archive file appended to for each section, in document order.
    pub appended: Vec<PathBuf>,
}

impl SplitReport {
    /// Number of sections archived.
    pub fn section_count(&self) -> usize {
        self.appended.len()
    }

    /// Distinct archive files touched, in order of first append.
    pub fn files(&self) -> Vec<&Path> {
        let mut files: Vec<&Path> = Vec::new();
        for path in &self.appended {
            if !files.contains(&path.as_path()) {
                files.push(path);
            }
        }
        files
    }
}

/// Split `input` into per-day archive files under `output_dir`.
///
/// The input is read before anything is written, so a missing input leaves
/// the filesystem untouched. Any write failure aborts the run.
///
/// # Arguments
/// * `input` - Path to the chronological markdown log
/// * `output_dir` - Directory receiving `YYYYMMDD_history.md` files (created if absent)
///
/// # Returns
/// A `SplitReport` listing every file appended to
pub fn split(input: &Path, output_dir: &Path) -> Result<SplitReport> {
    let document = fs::read_to_string(input).map_err(|source| SplitterError::InputNotFound {
        path: input.to_path_buf(),
        source,
    })?;

    let created_output_dir = ensure_output_dir(output_dir)?;

    let sections = parse_sections(&document);
    tracing::info!(
        input = %input.display(),
        sections = sections.len(),
        "parsed history log"
    );

    let mut appended = Vec::with_capacity(sections.len());
    for section in &sections {
        tracing::debug!(timestamp = section.timestamp(), date = %section.date, "archiving section");
        let path = append_section(output_dir, section)?;
        tracing::info!(path = %path.display(), "appended section");
        appended.push(path);
    }

    Ok(SplitReport {
        created_output_dir,
        appended,
    })
}

/// Split using the paths of a `SplitConfig`.
pub fn split_with_config(config: &SplitConfig) -> Result<SplitReport> {
    split(&config.input, &config.output_dir)
}

/// Create the output directory and its parents if missing.
///
/// Returns `true` when the directory did not exist before.
fn ensure_output_dir(output_dir: &Path) -> Result<bool> {
    if output_dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(output_dir).map_err(|source| SplitterError::OutputDirCreateFailed {
        path: output_dir.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %output_dir.display(), "created output directory");
    Ok(true)
}
