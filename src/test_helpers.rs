//! Shared fixture builders for the unit tests.
//!
//! Entries built here use the stock community prefix, so they resolve to
//! `@author/entry` (or whatever the URL says) under the default filter.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let raw = entry("artist", "https://peakd.com/hive-174695/@artist/c", None);
//! let ok = validated("artist", "https://x.org/a.png", false);
//! ```

use crate::types::{Entry, ValidatedEntry};

/// An extracted entry with the given submission link and optional image.
pub fn entry(author: &str, submission_url: &str, image_url: Option<&str>) -> Entry {
    Entry {
        submission_url: submission_url.to_string(),
        image_url: image_url.map(str::to_string),
        author: author.to_string(),
        uses_default_image: false,
    }
}

/// A validated entry linking `https://peakd.com/hive-174695/@<author>/entry`.
pub fn validated(author: &str, image_url: &str, uses_default_image: bool) -> ValidatedEntry {
    ValidatedEntry {
        submission_url: format!("https://peakd.com/hive-174695/@{author}/entry"),
        image_url: image_url.to_string(),
        author: author.to_string(),
        uses_default_image,
    }
}
