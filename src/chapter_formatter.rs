/*!
 * Rendering of normalized chapters as a plain timestamp listing.
 */

use std::fmt;

use crate::metadata::Chapter;

/// A rendered chapter line: truncated `HH:MM:SS` timestamp plus title
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedLine {
    /// Zero-padded `HH:MM:SS`, whole seconds truncated (never rounded)
    pub timestamp: String,
    /// Chapter title, written verbatim
    pub title: String,
}

impl fmt::Display for TimestampedLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.timestamp, self.title)
    }
}

/// Renders chapter lists as `HH:MM:SS title` lines
pub struct ChapterFormatter;

impl ChapterFormatter {
    /// Format milliseconds as a truncated `HH:MM:SS` timestamp.
    ///
    /// Fractional seconds are dropped, never rounded up: 3_661_500 ms
    /// renders as `01:01:01`, not `01:01:02`.
    pub fn format_timestamp(ms: u64) -> String {
        let total_seconds = ms / 1000;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }

    /// Render one line per chapter, in input order.
    ///
    /// Callers are expected to supply chronological order; nothing is
    /// re-sorted here.
    pub fn lines(chapters: &[Chapter]) -> Vec<TimestampedLine> {
        chapters
            .iter()
            .map(|chapter| TimestampedLine {
                timestamp: Self::format_timestamp(chapter.start_time),
                title: chapter.title.clone(),
            })
            .collect()
    }

    /// Serialize the listing to a single text block, one line per chapter,
    /// each terminated by a newline.
    pub fn format(chapters: &[Chapter]) -> String {
        let mut out = String::new();
        for line in Self::lines(chapters) {
            out.push_str(&format!("{}\n", line));
        }
        out
    }
}
