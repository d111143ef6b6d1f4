//! History splitter - archive a chronological markdown output log by day.
//!
//! The source log is a single markdown file made of sections, each opened by
//! a header of the form `## YYYY-MM-DD HH:MM:SS の出力`. Every section is
//! appended to `YYYYMMDD_history.md` in the output directory; a file gets a
//! `# YYYY-MM-DD の出力履歴` title the first time it is written.
//!
//! # Example
//!
//! ```
//! use history_splitter::parser::parse_sections;
//!
//! let doc = "## 2024-01-01 09:00:00 の出力\nResult A\n\n## 2024-01-02 10:00:00 の出力\nResult C\n";
//! let sections = parse_sections(doc);
//! assert_eq!(sections[1].date.archive_file_name(), "20240102_history.md");
//! ```
//!
//! Running the splitter twice on the same input appends every section again;
//! the archive files are never cleared or deduplicated.
//!
//! # Architecture
//!
//! - [`config`]: Default paths, file naming constants and header patterns
//! - [`types`]: `Section` and `DateKey`
//! - [`error`]: Error types and Result alias
//! - [`parser`]: Splitting the log at headers
//! - [`archive`]: Appending sections to per-day files
//! - [`splitter`]: Main split service
//! - [`cli`]: Command-line interface

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod splitter;
pub mod types;

// Re-export main functions
pub use splitter::{split, split_with_config, SplitReport};

// Re-export commonly used items
pub use config::SplitConfig;
pub use error::{Result, SplitterError};
pub use types::{DateKey, Section};
