//! Core data types: sections of the source log and the date key they file under.

use std::fmt;

use crate::config::{ARCHIVE_FILE_SUFFIX, DATE_PATTERN, HEADER_SUFFIX, TITLE_SUFFIX};

/// Calendar date of a section, kept exactly as captured from its header.
///
/// Components are not validated as a real calendar date; the header pattern
/// only guarantees the digit layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    year: String,
    month: String,
    day: String,
}

impl DateKey {
    /// Extract the first `YYYY-MM-DD` occurring in a header.
    ///
    /// # Examples
    /// ```
    /// use history_splitter::types::DateKey;
    ///
    /// let key = DateKey::from_header("## 2024-01-02 10:00:00 の出力").unwrap();
    /// assert_eq!(key.to_string(), "20240102");
    /// assert!(DateKey::from_header("## no date here").is_none());
    /// ```
    pub fn from_header(header: &str) -> Option<Self> {
        let caps = DATE_PATTERN.captures(header)?;
        Some(Self {
            year: caps[1].to_string(),
            month: caps[2].to_string(),
            day: caps[3].to_string(),
        })
    }

    /// Dashed form used in titles, e.g. `2024-01-02`.
    #[must_use]
    pub fn iso(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// Archive file name for this date, e.g. `20240102_history.md`.
    #[must_use]
    pub fn archive_file_name(&self) -> String {
        format!("{self}{ARCHIVE_FILE_SUFFIX}")
    }

    /// Title block written once at the top of a fresh archive file.
    #[must_use]
    pub fn title_line(&self) -> String {
        format!("# {}{TITLE_SUFFIX}\n\n", self.iso())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.year, self.month, self.day)
    }
}

/// One header and the trimmed body that follows it in the source log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub header: &'a str,
    pub body: &'a str,
    pub date: DateKey,
}

impl<'a> Section<'a> {
    /// Timestamp portion of the header, e.g. `2024-01-02 10:00:00`.
    pub fn timestamp(&self) -> &'a str {
        let inner = self.header.strip_prefix("## ").unwrap_or(self.header);
        inner.strip_suffix(HEADER_SUFFIX).unwrap_or(inner)
    }

    /// Text appended to the archive file for this section.
    #[must_use]
    pub fn to_block(&self) -> String {
        format!("{}\n{}\n\n", self.header, self.body)
    }
}
