//! Configuration constants and header patterns for the history splitter.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Default source log, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = ".github/history.md";

/// Default directory receiving the per-day archive files.
pub const DEFAULT_OUTPUT_DIR: &str = ".github/archives";

/// Suffix appended to the `YYYYMMDD` date key to form an archive file name.
pub const ARCHIVE_FILE_SUFFIX: &str = "_history.md";

/// Trailing text of every section header.
pub const HEADER_SUFFIX: &str = " の出力";

/// Trailing text of the title line written at the top of each archive file.
pub const TITLE_SUFFIX: &str = " の出力履歴";

/// Section header: `## YYYY-MM-DD HH:MM:SS の出力` at the start of a line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## [0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} の出力")
        .expect("valid regex")
});

/// Date component inside a header: captures year, month and day.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("valid regex")
});

/// Paths used by a single split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl SplitConfig {
    /// Create a config reading `input` and writing to the default output directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.input.as_path(), Path::new(".github/history.md"));
        assert_eq!(config.output_dir.as_path(), Path::new(".github/archives"));
    }

    #[test]
    fn test_with_output_dir() {
        let config = SplitConfig::new("log.md").with_output_dir("out");
        assert_eq!(config.input.as_path(), Path::new("log.md"));
        assert_eq!(config.output_dir.as_path(), Path::new("out"));
    }

    #[test]
    fn test_header_pattern_requires_line_start() {
        let text = "intro ## 2024-01-01 09:00:00 の出力\n## 2024-01-02 10:00:00 の出力";
        let starts: Vec<usize> = HEADER_PATTERN.find_iter(text).map(|m| m.start()).collect();
        assert_eq!(starts.len(), 1);
        assert_eq!(&text[starts[0]..starts[0] + 3], "## ");
    }

    #[test]
    fn test_header_pattern_rejects_full_width_digits() {
        assert!(!HEADER_PATTERN.is_match("## ２０２４-０１-０１ ０９:００:００ の出力"));
        assert!(!DATE_PATTERN.is_match("２０２４-０１-０１"));
    }

    #[test]
    fn test_header_pattern_rejects_deeper_headings() {
        assert!(!HEADER_PATTERN.is_match("### 2024-01-01 09:00:00 の出力"));
    }

    #[test]
    fn test_date_pattern_captures_components() {
        let caps = DATE_PATTERN
            .captures("## 2024-03-09 23:59:59 の出力")
            .unwrap();
        assert_eq!(&caps[1], "2024");
        assert_eq!(&caps[2], "03");
        assert_eq!(&caps[3], "09");
    }
}
