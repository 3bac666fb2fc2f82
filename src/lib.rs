/*!
 * # chaptertool — audiobook chapter metadata conversion
 *
 * A Rust library for converting audiobook chapter metadata between a
 * spine-relative source form, a normalized millisecond chapter list, and
 * two text outputs consumed by humans and by ffmpeg.
 *
 * ## Features
 *
 * - Resolve spine-relative chapter markers (segment index + offset) into
 *   absolute start times in milliseconds
 * - Render a plain `HH:MM:SS title` chapter listing
 * - Re-parse such a listing and build ffmpeg FFMETADATA1 chapter blocks,
 *   deriving each chapter's end from the next chapter's start
 * - Locate the chapter document inside a book directory by a fixed
 *   candidate chain
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `metadata`: document model for both accepted JSON forms
 * - `spine_resolver`: marker-to-milliseconds resolution
 * - `chapter_formatter`: timestamp listing rendering
 * - `ffmpeg_builder`: listing re-parsing and FFMETADATA1 rendering
 * - `file_utils`: document discovery and file I/O
 * - `app_controller`: the two tool workflows
 * - `logging`: console logger shared by the binaries
 * - `errors`: the fault taxonomy for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod chapter_formatter;
pub mod errors;
pub mod ffmpeg_builder;
pub mod file_utils;
pub mod logging;
pub mod metadata;
pub mod spine_resolver;

// Re-export main types for easier usage
pub use app_controller::{Controller, ConvertOutcome};
pub use chapter_formatter::{ChapterFormatter, TimestampedLine};
pub use errors::ChapterError;
pub use ffmpeg_builder::{FfmpegChapter, FfmpegChapterBuilder, LAST_CHAPTER_PAD_SECS};
pub use metadata::{BookMetadata, Chapter, ChapterDocument, ChapterList, ChapterMarker, SpineItem};
pub use spine_resolver::SpineResolver;
