//! Splitting the source log into sections at timestamp headers.

use crate::config::HEADER_PATTERN;
use crate::types::{DateKey, Section};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split a document into sections, in document order.
///
/// Each header's body runs up to the next header or the end of the text and
/// is trimmed of surrounding whitespace. Text before the first header is
/// dropped. A leading UTF-8 byte order mark is ignored so that a header on
/// the first line still counts as starting a line.
///
/// # Examples
/// ```
/// use history_splitter::parser::parse_sections;
///
/// let doc = "# Log\n\n## 2024-01-01 09:00:00 の出力\nResult A\n";
/// let sections = parse_sections(doc);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].body, "Result A");
/// ```
pub fn parse_sections(document: &str) -> Vec<Section<'_>> {
    let document = document.strip_prefix(BYTE_ORDER_MARK).unwrap_or(document);
    let headers: Vec<_> = HEADER_PATTERN.find_iter(document).collect();
    let mut sections = Vec::with_capacity(headers.len());

    for (i, m) in headers.iter().enumerate() {
        let body_end = headers
            .get(i + 1)
            .map_or(document.len(), |next| next.start());
        let header = m.as_str();
        let body = document[m.end()..body_end].trim();

        let Some(date) = DateKey::from_header(header) else {
            // The header pattern embeds the date pattern, so this cannot happen.
            tracing::error!(header, "matched header carries no date, skipping");
            continue;
        };

        sections.push(Section { header, body, date });
    }

    sections
}
