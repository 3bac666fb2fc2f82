/*!
 * Conversion of a plain timestamp listing into ffmpeg chapter metadata.
 *
 * Input lines come from the `chapters.txt` listing produced by
 * [`ChapterFormatter`](crate::chapter_formatter::ChapterFormatter). Each
 * line is matched against a strict `HH:MM:SS title` pattern; anything else
 * (blank lines, stray text) is skipped without comment. The surviving
 * chapters are turned into `[CHAPTER]` blocks in the FFMETADATA1 format
 * ffmpeg consumes when muxing chapter marks into a container.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ChapterError;

// @const: Chapter listing line regex (zero-padded HH:MM:SS, then title)
static CHAPTER_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})\s+(.+)$").unwrap()
});

/// Trailing pad given to the final chapter, in seconds.
///
/// The true media length is unknown to this tool, so the last chapter is
/// closed a fixed 30 seconds after it starts.
pub const LAST_CHAPTER_PAD_SECS: u64 = 30;

/// One chapter record of the FFMETADATA1 block
#[derive(Debug, Clone, PartialEq)]
pub struct FfmpegChapter {
    /// Chapter start, whole seconds
    pub start_seconds: u64,
    /// Chapter end, whole seconds; the next chapter's start, or padded
    pub end_seconds: u64,
    /// Chapter title, written verbatim
    pub title: String,
}

/// Builds FFMETADATA1 chapter blocks from (seconds, title) pairs
pub struct FfmpegChapterBuilder;

impl FfmpegChapterBuilder {
    /// Tokenize one listing line.
    ///
    /// Returns the absolute start in seconds and the title, or `None` when
    /// the line is not a chapter line. This never fails: tolerating blank
    /// lines and stray text is part of the contract.
    pub fn parse_line(line: &str) -> Option<(u64, String)> {
        let caps = CHAPTER_LINE_REGEX.captures(line.trim())?;
        let hours: u64 = caps[1].parse().ok()?;
        let minutes: u64 = caps[2].parse().ok()?;
        let seconds: u64 = caps[3].parse().ok()?;
        Some((hours * 3600 + minutes * 60 + seconds, caps[4].to_string()))
    }

    /// Tokenize a whole listing, keeping only the lines that match.
    pub fn parse_listing(content: &str) -> Vec<(u64, String)> {
        content.lines().filter_map(Self::parse_line).collect()
    }

    /// Derive chapter records with end times.
    ///
    /// Each chapter ends where the next one starts; the last is padded by
    /// [`LAST_CHAPTER_PAD_SECS`]. Chapters pass through in input order —
    /// duplicate or out-of-order start times are not repaired.
    pub fn build(parsed: &[(u64, String)]) -> Result<Vec<FfmpegChapter>, ChapterError> {
        if parsed.is_empty() {
            return Err(ChapterError::NoChapters);
        }

        let records = parsed
            .iter()
            .enumerate()
            .map(|(i, (start, title))| {
                let end = match parsed.get(i + 1) {
                    Some((next_start, _)) => *next_start,
                    None => start + LAST_CHAPTER_PAD_SECS,
                };
                FfmpegChapter {
                    start_seconds: *start,
                    end_seconds: end,
                    title: title.clone(),
                }
            })
            .collect();

        Ok(records)
    }

    /// Render the FFMETADATA1 text block.
    ///
    /// Field order is fixed for compatibility with ffmpeg: header, then per
    /// chapter a `[CHAPTER]` marker, `TIMEBASE=1/1`, `START`, `END`,
    /// `title`, and a blank separator line.
    pub fn render(records: &[FfmpegChapter]) -> String {
        let mut out = String::from(";FFMETADATA1\n\n");
        for record in records {
            out.push_str("[CHAPTER]\n");
            out.push_str("TIMEBASE=1/1\n");
            out.push_str(&format!("START={}\n", record.start_seconds));
            out.push_str(&format!("END={}\n", record.end_seconds));
            out.push_str(&format!("title={}\n\n", record.title));
        }
        out
    }
}
