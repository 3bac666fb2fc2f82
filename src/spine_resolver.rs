/*!
 * Resolution of spine-relative chapter markers to absolute start times.
 */

use crate::errors::ChapterError;
use crate::metadata::{Chapter, ChapterMarker, SpineItem};

/// Encoded form of the apostrophe entity carried by some source titles
const APOS_ENTITY: &str = "&apos;";

/// Converts (segment index, offset) markers into absolute milliseconds
pub struct SpineResolver;

impl SpineResolver {
    /// Resolve every marker against the spine durations.
    ///
    /// A marker's absolute start is the summed duration of all segments
    /// before its own, plus its offset into that segment. Seconds are
    /// converted to whole milliseconds with ties-to-even rounding. Any
    /// fault aborts the whole conversion; no partial chapter list is ever
    /// returned.
    pub fn resolve(
        spine: &[SpineItem],
        markers: &[ChapterMarker],
    ) -> Result<Vec<Chapter>, ChapterError> {
        let durations = Self::spine_durations(spine)?;

        // Seconds of playback preceding each segment. Accumulation order
        // matters: every marker must see the exact same prefix sums.
        let mut segment_starts = Vec::with_capacity(durations.len());
        let mut elapsed = 0.0f64;
        for duration in &durations {
            segment_starts.push(elapsed);
            elapsed += duration;
        }

        let mut chapters = Vec::with_capacity(markers.len());
        for (index, marker) in markers.iter().enumerate() {
            let segment = marker.spine.ok_or(ChapterError::MissingField {
                field: "spine",
                record: "chapter",
                index,
            })?;
            let title = marker.title.as_deref().ok_or(ChapterError::MissingField {
                field: "title",
                record: "chapter",
                index,
            })?;
            if segment >= segment_starts.len() {
                return Err(ChapterError::SpineIndexOutOfRange {
                    chapter: index,
                    index: segment,
                    spine_len: segment_starts.len(),
                });
            }

            // The offset may run past the segment's own duration in
            // malformed input; that is passed through, not guarded.
            let offset = marker.offset.unwrap_or(0.0);
            let start_seconds = segment_starts[segment] + offset;

            chapters.push(Chapter {
                start_time: Self::to_millis(start_seconds),
                title: Self::decode_entities(title),
            });
        }

        Ok(chapters)
    }

    /// Extract the duration of every spine segment, in order.
    ///
    /// A segment without a `duration` field is a missing-field fault.
    pub fn spine_durations(spine: &[SpineItem]) -> Result<Vec<f64>, ChapterError> {
        spine
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.duration.ok_or(ChapterError::MissingField {
                    field: "duration",
                    record: "spine item",
                    index,
                })
            })
            .collect()
    }

    /// Whole milliseconds from fractional seconds, ties rounded to even.
    pub fn to_millis(seconds: f64) -> u64 {
        (seconds * 1000.0).round_ties_even() as u64
    }

    /// Replace the apostrophe entity with a literal apostrophe.
    ///
    /// No other entity is decoded; source titles only ever carry this one.
    pub fn decode_entities(title: &str) -> String {
        title.replace(APOS_ENTITY, "'")
    }
}
