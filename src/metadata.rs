/*!
 * Document model for audiobook chapter metadata.
 *
 * Two document forms are accepted on load. The source form carries a spine
 * (ordered audio segments with durations) plus chapter markers expressed as
 * a segment index and an offset into that segment. The normalized form
 * carries absolute start times in milliseconds. A top-level `spine` key is
 * what tells the two apart, mirroring the files the tool actually meets in
 * the wild (`metadata/metadata.json` vs `chapters.json`).
 *
 * Source records deserialize with optional fields and are validated
 * explicitly so that an absent field surfaces as a
 * [`ChapterError::MissingField`](crate::errors::ChapterError) naming the
 * field and record index, rather than as a raw serde message.
 *
 * An already-normalized document is echoed back out as parsed, so fields
 * this model does not know about survive a rewrite.
 */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ChapterError;

/// One audio segment of the spine
#[derive(Debug, Clone, Deserialize)]
pub struct SpineItem {
    /// Playback duration in seconds
    pub duration: Option<f64>,
}

/// A chapter marker in the source form: a point in the spine timeline
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterMarker {
    // @field: Index of the spine segment the chapter starts in
    pub spine: Option<usize>,

    // @field: Offset into that segment, in seconds (absent means 0)
    pub offset: Option<f64>,

    // @field: Chapter title, possibly carrying an encoded apostrophe
    pub title: Option<String>,
}

/// The source-form document: spine plus chapter markers
#[derive(Debug, Clone, Deserialize)]
pub struct BookMetadata {
    /// Ordered audio segments; insertion order is playback order
    #[serde(default)]
    pub spine: Vec<SpineItem>,

    /// Chapter markers, in playback order
    #[serde(default)]
    pub chapters: Vec<ChapterMarker>,
}

/// A normalized chapter: absolute start time plus title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Absolute start time in whole milliseconds
    pub start_time: u64,

    /// Chapter title
    pub title: String,
}

/// The normalized-form document as written to `chapters.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterList {
    /// Chapters in playback order; the order is never re-sorted
    pub chapters: Vec<Chapter>,
}

/// A normalized chapter as read back in, before field validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawChapter {
    pub start_time: Option<u64>,
    pub title: Option<String>,
}

/// The normalized-form document as read in, before field validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawChapterList {
    #[serde(default)]
    pub chapters: Vec<RawChapter>,
}

impl RawChapterList {
    /// Validate that every chapter carries both required fields.
    ///
    /// Runs before any output file is opened, so a malformed record can
    /// never leave a partially written artifact behind.
    pub fn validate(self) -> std::result::Result<ChapterList, ChapterError> {
        let mut chapters = Vec::with_capacity(self.chapters.len());
        for (index, raw) in self.chapters.into_iter().enumerate() {
            let start_time = raw.start_time.ok_or(ChapterError::MissingField {
                field: "start_time",
                record: "chapter",
                index,
            })?;
            let title = raw.title.ok_or(ChapterError::MissingField {
                field: "title",
                record: "chapter",
                index,
            })?;
            chapters.push(Chapter { start_time, title });
        }
        Ok(ChapterList { chapters })
    }
}

/// A loaded chapter document in either accepted form
#[derive(Debug, Clone)]
pub enum ChapterDocument {
    /// Source metadata: spine durations plus markers, still to be resolved
    Source(BookMetadata),
    /// Already-normalized chapters, still to be field-validated. The parsed
    /// JSON value rides along so the rewrite can echo the document as read.
    Normalized {
        raw: RawChapterList,
        document: Value,
    },
}

impl ChapterDocument {
    /// Parse a JSON document and classify its form.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).context("document is not valid JSON")?;
        Self::from_value(value)
    }

    /// Classify an already-parsed JSON value by the presence of a
    /// top-level `spine` key.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("spine").is_some() {
            let metadata: BookMetadata = serde_json::from_value(value)
                .context("malformed source metadata document")?;
            Ok(ChapterDocument::Source(metadata))
        } else {
            let raw: RawChapterList = serde_json::from_value(value.clone())
                .context("malformed normalized chapters document")?;
            Ok(ChapterDocument::Normalized {
                raw,
                document: value,
            })
        }
    }
}
