//! Run orchestration.
//!
//! ```text
//! fetch_comments  →  collect_entries  →  render_document → save_document
//!                                     ↘  build_poster    → write_poster
//! ```
//!
//! Every function here either returns its stage's output or a [`RunError`],
//! which ends the run with exit code 1. Per-entry problems (no submission
//! link, blocklisted author, missing moderator vote, unloadable image) are
//! absorbed by the stages themselves and only show up in the reports.

use crate::acquire::{AcquireEvent, AcquireReport, acquire_thumbnails};
use crate::config::{ConfigError, ContestConfig, PosterConfig};
use crate::document::{self, DocumentError, DocumentFormat};
use crate::extract::Extractor;
use crate::feed::{FeedClient, FeedError};
use crate::filter::{EntryFilter, FilterReport};
use crate::imaging::{
    self, CaptionColors, CaptionStyle, ImageError, ImageSource, LayoutParams, PosterTile,
};
use crate::types::{PostLocator, RawComment, ValidatedEntry};
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

/// Errors that end the run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Couldn't load post {post}: {source}")]
    FeedUnavailable {
        post: String,
        #[source]
        source: FeedError,
    },
    #[error("Couldn't load post {0}: it has no replies")]
    NoComments(String),
    #[error("Couldn't parse comments: no valid entries among {0} replies")]
    NoValidEntries(usize),
    #[error("Couldn't create document. Insufficient data: {0}")]
    Document(#[source] DocumentError),
    #[error("Couldn't save document: {0}")]
    DocumentSave(#[source] DocumentError),
    #[error("Couldn't create thumbnail image poster: {0}")]
    PosterWrite(#[source] ImageError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Setup(String),
}

/// Entries pulled from the replies, before and after filtering.
#[derive(Debug)]
pub struct Collected {
    /// Replies that linked a submission.
    pub extracted: usize,
    pub report: FilterReport,
}

/// A painted poster and how its thumbnails were gathered.
pub struct Poster {
    pub canvas: RgbaImage,
    pub acquired: AcquireReport,
    /// Whether author captions were drawn.
    pub captioned: bool,
}

/// All replies under `post`; none at all is an error.
pub fn fetch_comments(
    feed: &impl FeedClient,
    post: &PostLocator,
) -> Result<Vec<RawComment>, RunError> {
    let comments = feed
        .fetch_replies(post)
        .map_err(|source| RunError::FeedUnavailable {
            post: post.to_string(),
            source,
        })?;
    if comments.is_empty() {
        return Err(RunError::NoComments(post.to_string()));
    }
    Ok(comments)
}

/// Extract and filter entries; at least one must be accepted.
pub fn collect_entries(
    feed: &impl FeedClient,
    config: &ContestConfig,
    comments: &[RawComment],
) -> Result<Collected, RunError> {
    let extractor = Extractor::new(&config.entries)
        .map_err(|e| RunError::Setup(format!("invalid entry host pattern: {e}")))?;
    let entries = extractor.extract_all(comments);
    let extracted = entries.len();
    tracing::info!(comments = comments.len(), extracted, "entries extracted");

    let report = EntryFilter::from_config(config).filter(feed, entries);
    if report.accepted.is_empty() {
        return Err(RunError::NoValidEntries(comments.len()));
    }
    Ok(Collected { extracted, report })
}

/// Render the document from the templates in `templates_dir`.
pub fn render_document(
    templates_dir: &Path,
    entries: &[ValidatedEntry],
    format: DocumentFormat,
) -> Result<String, RunError> {
    document::render(templates_dir, entries, format).map_err(RunError::Document)
}

pub fn save_document(content: &str, path: &Path) -> Result<(), RunError> {
    document::save_document(content, path).map_err(RunError::DocumentSave)
}

/// Fetch thumbnails and paint the poster.
///
/// A caption font that cannot be loaded is not fatal: the poster is painted
/// without captions.
pub fn build_poster(
    source: &impl ImageSource,
    entries: &[ValidatedEntry],
    config: &PosterConfig,
    on_event: impl FnMut(&AcquireEvent),
) -> Poster {
    let params = LayoutParams::from_config(config);
    let acquired = acquire_thumbnails(
        source,
        entries,
        params.thumbnail_width,
        config.skip_default_images,
        on_event,
    );

    let captions = match CaptionStyle::load(
        &config.font,
        config.font_size,
        CaptionColors::from_config(config),
    ) {
        Ok(style) => Some(style),
        Err(e) => {
            tracing::warn!("captions disabled: {e}");
            None
        }
    };

    let tiles: Vec<PosterTile> = acquired.thumbnails.iter().map(|t| t.tile()).collect();
    let canvas = imaging::render_poster(
        &tiles,
        &params,
        imaging::background_from_config(config),
        captions.as_ref(),
    );

    Poster {
        canvas,
        acquired,
        captioned: captions.is_some(),
    }
}

pub fn write_poster(poster: &Poster, path: &Path) -> Result<(), RunError> {
    imaging::write_poster(&poster.canvas, path).map_err(RunError::PosterWrite)
}
