//! Append-only per-day archive files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};
use crate::types::Section;

/// Path of the archive file a section belongs to.
pub fn archive_path(output_dir: &Path, section: &Section<'_>) -> PathBuf {
    output_dir.join(section.date.archive_file_name())
}

/// Append one section to its archive file in `output_dir`.
///
/// The file is opened, written and closed within this call. When the file is
/// empty at the moment it is opened, the date title is written first. Title
/// and block go out in a single write on an append handle.
///
/// # Returns
/// Path of the archive file that was appended to
pub fn append_section(output_dir: &Path, section: &Section<'_>) -> Result<PathBuf> {
    let path = archive_path(output_dir, section);
    let write_err = |source| SplitterError::OutputWriteFailed {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(write_err)?;

    let is_fresh = file.metadata().map_err(write_err)?.len() == 0;

    let mut content = String::new();
    if is_fresh {
        tracing::debug!(path = %path.display(), date = %section.date.iso(), "starting new archive file");
        content.push_str(&section.date.title_line());
    }
    content.push_str(&section.to_block());

    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(path)
}
