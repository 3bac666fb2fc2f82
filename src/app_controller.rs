use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::chapter_formatter::ChapterFormatter;
use crate::ffmpeg_builder::FfmpegChapterBuilder;
use crate::file_utils::FileManager;
use crate::metadata::{ChapterDocument, ChapterList};
use crate::spine_resolver::SpineResolver;

// @module: Conversion workflows for the two command-line tools

/// How many chapters the convert run previews on the console
const PREVIEW_CHAPTERS: usize = 5;

/// Artifacts written by a convert run
#[derive(Debug)]
pub struct ConvertOutcome {
    /// Normalized chapter document, pretty-printed JSON
    pub json_path: PathBuf,
    /// Plain `HH:MM:SS title` listing
    pub text_path: PathBuf,
    /// Number of chapters that went into both artifacts
    pub chapter_count: usize,
}

/// Orchestrates full conversion runs over loaded documents
pub struct Controller;

impl Controller {
    /// Convert tool workflow: locate the chapter document under the input
    /// path, normalize it, and write `chapters.json` plus `chapters.txt`.
    ///
    /// Output files are only opened once the whole document has parsed and
    /// resolved, so a fault never leaves a truncated artifact behind.
    pub fn run_convert<P: AsRef<Path>>(input_path: P) -> Result<ConvertOutcome> {
        let input_path = input_path.as_ref();
        info!("Processing input path: {:?}", input_path);

        debug!("Searching for JSON file in: {:?}", input_path);
        let document_path = FileManager::locate_document(input_path)?;
        info!("Found JSON file: {:?}", document_path);

        let content = FileManager::read_to_string(&document_path)?;
        let document = ChapterDocument::parse(&content)
            .with_context(|| format!("Failed to parse chapter document: {:?}", document_path))?;

        let (chapter_list, json) = match document {
            ChapterDocument::Source(metadata) => {
                info!("Processing source metadata format");
                debug!(
                    "Resolving {} chapter markers against {} spine segments",
                    metadata.chapters.len(),
                    metadata.spine.len()
                );
                let list = ChapterList {
                    chapters: SpineResolver::resolve(&metadata.spine, &metadata.chapters)?,
                };
                let json = serde_json::to_string_pretty(&list)
                    .context("Failed to serialize chapter list")?;
                (list, json)
            }
            ChapterDocument::Normalized { raw, document } => {
                info!("Processing normalized chapters format");
                let list = raw.validate()?;
                // Echo the document as loaded; keys outside the model survive.
                let json = serde_json::to_string_pretty(&document)
                    .context("Failed to serialize chapter document")?;
                (list, json)
            }
        };

        let output_dir = FileManager::output_dir_for(&document_path);
        let json_path = output_dir.join("chapters.json");
        let text_path = output_dir.join("chapters.txt");

        FileManager::write_to_file(&json_path, &json)?;
        info!("Chapter data saved to {:?}", json_path);

        let listing = ChapterFormatter::format(&chapter_list.chapters);
        FileManager::write_to_file(&text_path, &listing)?;
        info!("Chapter timestamps saved to {:?}", text_path);

        let chapter_count = chapter_list.chapters.len();
        info!("Found {} chapters", chapter_count);
        for chapter in chapter_list.chapters.iter().take(PREVIEW_CHAPTERS) {
            info!(
                "{} {}",
                ChapterFormatter::format_timestamp(chapter.start_time),
                chapter.title
            );
        }

        Ok(ConvertOutcome {
            json_path,
            text_path,
            chapter_count,
        })
    }

    /// Ffmpeg tool workflow: re-parse the timestamp listing and write the
    /// FFMETADATA1 block as `ffmpeg_chapters.txt` beside it.
    pub fn run_ffmpeg<P: AsRef<Path>>(input_file: P) -> Result<PathBuf> {
        let input_file = input_file.as_ref();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("File {:?} not found", input_file));
        }

        let content = FileManager::read_to_string(input_file)?;
        let parsed = FfmpegChapterBuilder::parse_listing(&content);
        debug!("Recovered {} chapters from {:?}", parsed.len(), input_file);

        let records = FfmpegChapterBuilder::build(&parsed)?;

        let output_file = input_file
            .parent()
            .unwrap_or(Path::new(""))
            .join("ffmpeg_chapters.txt");
        FileManager::write_to_file(&output_file, &FfmpegChapterBuilder::render(&records))?;
        info!("Created {:?}", output_file);

        Ok(output_file)
    }
}
