/*!
 * Integration tests for the end-to-end conversion workflows
 */

use anyhow::Result;
use std::fs;

use chaptertool::app_controller::Controller;
use chaptertool::errors::ChapterError;
use chaptertool::metadata::{Chapter, ChapterList};
use crate::common;

/// Test the full convert workflow over a book directory with source metadata
#[test]
fn test_convert_workflow_withSourceMetadata_shouldWriteBothArtifacts() -> Result<()> {
    common::init_test_logging();

    // 1. Lay out a book directory with metadata/metadata.json
    let temp_dir = common::create_temp_dir()?;
    let book_dir = common::create_book_with_metadata(
        &temp_dir.path().to_path_buf(),
        "book",
        common::sample_source_metadata(),
    )?;

    // 2. Run the convert workflow on the directory
    let outcome = Controller::run_convert(&book_dir)?;

    // 3. Both artifacts land beside the book, not inside metadata/
    assert_eq!(outcome.json_path, book_dir.join("chapters.json"));
    assert_eq!(outcome.text_path, book_dir.join("chapters.txt"));
    assert_eq!(outcome.chapter_count, 2);
    assert!(!book_dir.join("metadata").join("chapters.json").exists());

    // 4. The JSON artifact holds the resolved, decoded chapters
    let json = fs::read_to_string(&outcome.json_path)?;
    let list: ChapterList = serde_json::from_str(&json)?;
    assert_eq!(
        list,
        ChapterList {
            chapters: vec![
                Chapter {
                    start_time: 10_000,
                    title: "Opening Credits".to_string()
                },
                Chapter {
                    start_time: 105_000,
                    title: "Mother's Day".to_string()
                },
            ]
        }
    );

    // 5. The listing renders one truncated timestamp per chapter
    let listing = fs::read_to_string(&outcome.text_path)?;
    assert_eq!(listing, "00:00:10 Opening Credits\n00:01:45 Mother's Day\n");

    Ok(())
}

/// Test that an already-normalized document is validated and rewritten
#[test]
fn test_convert_workflow_withNormalizedInput_shouldRewriteArtifacts() -> Result<()> {
    common::init_test_logging();

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "chapters.json",
        r#"{"chapters":[{"start_time":1500,"title":"One"}]}"#,
    )?;

    let outcome = Controller::run_convert(&input)?;

    assert_eq!(outcome.chapter_count, 1);

    // The JSON document is rewritten pretty-printed
    let json = fs::read_to_string(&outcome.json_path)?;
    assert!(json.contains("  \"chapters\""));
    let list: ChapterList = serde_json::from_str(&json)?;
    assert_eq!(list.chapters[0].start_time, 1500);

    // 1500 ms truncates to one whole second
    let listing = fs::read_to_string(&outcome.text_path)?;
    assert_eq!(listing, "00:00:01 One\n");

    Ok(())
}

/// Test that a normalized rewrite keeps fields the model does not know about
#[test]
fn test_convert_workflow_withNormalizedExtraFields_shouldEchoThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "chapters.json",
        r#"{"edition":"unabridged","chapters":[{"start_time":1500,"title":"One","narrator":"J. Doe"}]}"#,
    )?;

    let outcome = Controller::run_convert(&input)?;

    // The rewrite echoes the loaded document, extra fields included
    let json = fs::read_to_string(&outcome.json_path)?;
    assert!(json.contains("\"edition\": \"unabridged\""));
    assert!(json.contains("\"narrator\": \"J. Doe\""));

    // The extra fields change nothing about the listing
    assert_eq!(fs::read_to_string(&outcome.text_path)?, "00:00:01 One\n");

    Ok(())
}

/// Test that a directory without any candidate document is the not-found fault
#[test]
fn test_convert_workflow_withEmptyDirectory_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let err = Controller::run_convert(temp_dir.path()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ChapterError>(),
        Some(ChapterError::NotFound { .. })
    ));

    Ok(())
}

/// Test that a marker fault aborts the run before anything is written
#[test]
fn test_convert_workflow_withOutOfRangeMarker_shouldWriteNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book_dir = common::create_book_with_metadata(
        &temp_dir.path().to_path_buf(),
        "book",
        r#"{
            "spine": [{"duration": 100.0}],
            "chapters": [
                {"spine": 0, "offset": 0.0, "title": "A"},
                {"spine": 3, "offset": 0.0, "title": "B"}
            ]
        }"#,
    )?;

    let err = Controller::run_convert(&book_dir).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ChapterError>(),
        Some(ChapterError::SpineIndexOutOfRange { .. })
    ));
    assert!(!book_dir.join("chapters.json").exists());
    assert!(!book_dir.join("chapters.txt").exists());

    Ok(())
}

/// Test that a missing title aborts the run naming the field
#[test]
fn test_convert_workflow_withMissingTitle_shouldWriteNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book_dir = common::create_book_with_metadata(
        &temp_dir.path().to_path_buf(),
        "book",
        r#"{
            "spine": [{"duration": 100.0}],
            "chapters": [{"spine": 0, "offset": 0.0}]
        }"#,
    )?;

    let err = Controller::run_convert(&book_dir).unwrap_err();

    assert!(err.to_string().contains("missing field 'title'"));
    assert!(!book_dir.join("chapters.json").exists());
    assert!(!book_dir.join("chapters.txt").exists());

    Ok(())
}

/// Test the ffmpeg workflow over a plain timestamp listing
#[test]
fn test_ffmpeg_workflow_withListing_shouldWriteSiblingFile() -> Result<()> {
    common::init_test_logging();

    let temp_dir = common::create_temp_dir()?;
    let listing = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "chapters.txt",
        "00:00:10 Opening Credits\n00:01:45 Mother's Day\n",
    )?;

    let output = Controller::run_ffmpeg(&listing)?;

    assert_eq!(output, temp_dir.path().join("ffmpeg_chapters.txt"));
    assert_eq!(
        fs::read_to_string(&output)?,
        ";FFMETADATA1\n\n\
         [CHAPTER]\nTIMEBASE=1/1\nSTART=10\nEND=105\ntitle=Opening Credits\n\n\
         [CHAPTER]\nTIMEBASE=1/1\nSTART=105\nEND=135\ntitle=Mother's Day\n\n"
    );

    Ok(())
}

/// Test that a missing listing file fails without creating anything
#[test]
fn test_ffmpeg_workflow_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("chapters.txt");

    let err = Controller::run_ffmpeg(&missing).unwrap_err();

    assert!(err.to_string().contains("not found"));
    assert!(!temp_dir.path().join("ffmpeg_chapters.txt").exists());

    Ok(())
}

/// Test that a listing with no chapter lines fails and writes no output
#[test]
fn test_ffmpeg_workflow_withNoChapterLines_shouldNotWriteOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let listing = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "chapters.txt",
        "just some notes\n\nnothing timestamped here\n",
    )?;

    let err = Controller::run_ffmpeg(&listing).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ChapterError>(),
        Some(ChapterError::NoChapters)
    ));
    assert!(!temp_dir.path().join("ffmpeg_chapters.txt").exists());

    Ok(())
}

/// Test the two workflows chained: source metadata through to ffmpeg blocks
#[test]
fn test_full_pipeline_withSourceMetadata_shouldProduceFfmpegChapters() -> Result<()> {
    common::init_test_logging();

    let temp_dir = common::create_temp_dir()?;
    let book_dir = common::create_book_with_metadata(
        &temp_dir.path().to_path_buf(),
        "book",
        common::sample_source_metadata(),
    )?;

    // 1. Normalize the source metadata
    let outcome = Controller::run_convert(&book_dir)?;

    // 2. Feed the produced listing into the ffmpeg workflow
    let ffmpeg_file = Controller::run_ffmpeg(&outcome.text_path)?;

    // 3. The ffmpeg metadata lands beside the listing, in the book directory
    assert_eq!(ffmpeg_file, book_dir.join("ffmpeg_chapters.txt"));

    let rendered = fs::read_to_string(&ffmpeg_file)?;
    assert!(rendered.starts_with(";FFMETADATA1\n\n"));
    assert!(rendered.contains("START=10\nEND=105\ntitle=Opening Credits\n"));
    assert!(rendered.contains("START=105\nEND=135\ntitle=Mother's Day\n"));

    Ok(())
}
