//! Image acquisition for the poster.
//!
//! Walks the validated entries in order and binds each one to a decoded
//! thumbnail. Entries that only carry the fallback placeholder can be skipped
//! up front; entries whose image cannot be fetched or decoded are counted as
//! unprocessed and left off the poster. Neither ever stops the walk.
//!
//! Progress is reported through a callback as [`AcquireEvent`]s so the CLI
//! can print as it goes while this module stays free of output.

use crate::imaging::{ImageSource, PosterTile};
use crate::types::ValidatedEntry;
use image::DynamicImage;

/// A validated entry with its decoded thumbnail.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub entry: ValidatedEntry,
    pub image: DynamicImage,
}

impl Thumbnail {
    /// Text drawn on the thumbnail.
    pub fn caption(&self) -> &str {
        &self.entry.author
    }

    pub fn tile(&self) -> PosterTile<'_> {
        PosterTile {
            image: &self.image,
            caption: self.caption(),
        }
    }
}

/// Per-entry progress. `index` is 1-based, in entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireEvent {
    Loaded {
        index: usize,
        author: String,
        width: u32,
        height: u32,
    },
    SkippedDefault {
        index: usize,
        author: String,
    },
    Failed {
        index: usize,
        author: String,
        reason: String,
    },
}

#[derive(Debug, Default)]
pub struct AcquireReport {
    pub thumbnails: Vec<Thumbnail>,
    /// Entries left out because they only had the fallback image.
    pub skipped_default: usize,
    /// Entries whose image could not be fetched or decoded.
    pub unprocessed: usize,
}

/// Fetch a `target_width`-wide thumbnail for every entry.
pub fn acquire_thumbnails(
    source: &impl ImageSource,
    entries: &[ValidatedEntry],
    target_width: u32,
    skip_default_images: bool,
    mut on_event: impl FnMut(&AcquireEvent),
) -> AcquireReport {
    let mut report = AcquireReport::default();

    for (i, entry) in entries.iter().enumerate() {
        let index = i + 1;
        if skip_default_images && entry.uses_default_image {
            report.skipped_default += 1;
            on_event(&AcquireEvent::SkippedDefault {
                index,
                author: entry.author.clone(),
            });
            continue;
        }

        match source.acquire(&entry.image_url, target_width) {
            Ok(image) => {
                on_event(&AcquireEvent::Loaded {
                    index,
                    author: entry.author.clone(),
                    width: image.width(),
                    height: image.height(),
                });
                report.thumbnails.push(Thumbnail {
                    entry: entry.clone(),
                    image,
                });
            }
            Err(e) => {
                tracing::warn!(author = %entry.author, url = %entry.image_url, "image not loadable: {e}");
                report.unprocessed += 1;
                on_event(&AcquireEvent::Failed {
                    index,
                    author: entry.author.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
