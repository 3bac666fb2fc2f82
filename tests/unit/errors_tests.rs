/*!
 * Tests for the error taxonomy display messages
 */

use chaptertool::errors::ChapterError;
use std::path::PathBuf;

/// Test that the not-found message names every candidate location
#[test]
fn test_not_found_display_shouldNameCandidates() {
    let err = ChapterError::NotFound {
        path: PathBuf::from("/audiobooks/book"),
    };

    let message = err.to_string();

    assert!(message.contains("/audiobooks/book"));
    assert!(message.contains("metadata/metadata.json"));
    assert!(message.contains("chapters.json"));
}

/// Test that the out-of-range message carries chapter position and bounds
#[test]
fn test_spine_index_display_shouldNameChapterAndBounds() {
    let err = ChapterError::SpineIndexOutOfRange {
        chapter: 3,
        index: 7,
        spine_len: 2,
    };

    assert_eq!(
        err.to_string(),
        "chapter 3 references spine segment 7, but the spine has 2 segments"
    );
}

/// Test that the missing-field message names the field and record position
#[test]
fn test_missing_field_display_shouldNameFieldAndRecord() {
    let err = ChapterError::MissingField {
        field: "title",
        record: "chapter",
        index: 4,
    };

    assert_eq!(err.to_string(), "missing field 'title' on chapter 4");
}

/// Test that the empty-listing message describes the input
#[test]
fn test_no_chapters_display_shouldDescribeEmptyListing() {
    assert_eq!(
        ChapterError::NoChapters.to_string(),
        "no valid chapters found in the timestamp listing"
    );
}

/// Test that the taxonomy converts into anyhow errors with the message intact
#[test]
fn test_chapter_error_intoAnyhow_shouldKeepMessage() {
    let err = anyhow::Error::from(ChapterError::NoChapters);

    assert_eq!(
        err.to_string(),
        "no valid chapters found in the timestamp listing"
    );
    assert!(err.downcast_ref::<ChapterError>().is_some());
}
