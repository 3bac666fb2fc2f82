/*!
 * Error types for the chaptertool application.
 *
 * This module contains the fault taxonomy shared by both conversion tools,
 * using the thiserror crate for ergonomic error definitions. Every variant
 * is unrecoverable for the current run: the binaries log one message and
 * exit non-zero.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting chapter metadata
#[derive(Error, Debug)]
pub enum ChapterError {
    /// No candidate document was located under the input path
    #[error("no chapter document found under {path:?} (tried the path itself, metadata/metadata.json and chapters.json)")]
    NotFound {
        /// The input path the candidate chain was evaluated against
        path: PathBuf,
    },

    /// A chapter marker references a spine segment that does not exist
    #[error("chapter {chapter} references spine segment {index}, but the spine has {spine_len} segments")]
    SpineIndexOutOfRange {
        /// Position of the offending marker in the chapters sequence
        chapter: usize,
        /// The out-of-range spine index the marker carried
        index: usize,
        /// Number of segments actually present in the spine
        spine_len: usize,
    },

    /// A required field is absent on a record
    #[error("missing field '{field}' on {record} {index}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
        /// Kind of record the field was expected on
        record: &'static str,
        /// Position of the record in its sequence
        index: usize,
    },

    /// No chapter lines survived parsing the timestamp listing
    #[error("no valid chapters found in the timestamp listing")]
    NoChapters,
}
