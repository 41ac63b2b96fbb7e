//! CLI output formatting for every run stage.
//!
//! # Entry Display Contract
//!
//! Every entry is shown the same way in every stage:
//!
//! 1. **Header line**: positional index + `@author`
//! 2. **Context lines**: indented `Post:` and `Image:` links, or a status
//!
//! # Output Format
//!
//! ## Collect
//!
//! ```text
//! Found 12 comments.
//! Found and parsed 2 relevant comments.
//! 001 @artist
//!     Post: https://peakd.com/hive-174695/@artist/collage
//!     Image: https://files.peakd.com/.../collage.png
//! 002 @painter
//!     Post: https://peakd.com/hive-174695/@painter/entry
//!     Image: https://files.peakd.com/.../fallback.png (default)
//! Rejected 1
//!     @someone: author @someone is blocklisted
//! ```
//!
//! ## Poster
//!
//! ```text
//! 001 @artist (160x212)
//! 002 @painter: skipped, default image
//! 003 @drawer: not loadable
//! Images not loadable (skipped): 1
//! Poster 3410x242 with 1 thumbnails → GeneratedThumbnailPoster.png
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::acquire::AcquireEvent;
use crate::filter::FilterReport;
use crate::pipeline::Poster;
use crate::types::ValidatedEntry;
use std::path::Path;

// ============================================================================
// Shared entry display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn entry_header(index: usize, author: &str) -> String {
    format!("{} @{}", format_index(index), author)
}

// ============================================================================
// Collect
// ============================================================================

pub fn format_comments_found(count: usize) -> Vec<String> {
    vec![format!("Found {} comments.", count)]
}

pub fn print_comments_found(count: usize) {
    for line in format_comments_found(count) {
        println!("{}", line);
    }
}

/// Accepted entries with their links.
pub fn format_entries(entries: &[ValidatedEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        lines.push(entry_header(i + 1, &entry.author));
        lines.push(format!("{}Post: {}", indent(1), entry.submission_url));
        if entry.uses_default_image {
            lines.push(format!("{}Image: {} (default)", indent(1), entry.image_url));
        } else {
            lines.push(format!("{}Image: {}", indent(1), entry.image_url));
        }
    }
    lines
}

/// Summary of the filter stage, with the list of accepted entries when
/// `list_entries` is set.
pub fn format_filter_report(report: &FilterReport, list_entries: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Found and parsed {} relevant comments.",
        report.accepted.len()
    )];
    if list_entries {
        lines.extend(format_entries(&report.accepted));
    }
    if !report.rejected.is_empty() {
        lines.push(format!("Rejected {}", report.rejected.len()));
        for rejected in &report.rejected {
            lines.push(format!(
                "{}@{}: {}",
                indent(1),
                rejected.entry.author,
                rejected.reason
            ));
        }
    }
    lines
}

pub fn print_filter_report(report: &FilterReport, list_entries: bool) {
    for line in format_filter_report(report, list_entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Poster
// ============================================================================

/// One line per thumbnail as it is fetched.
pub fn format_acquire_event(event: &AcquireEvent) -> Vec<String> {
    match event {
        AcquireEvent::Loaded {
            index,
            author,
            width,
            height,
        } => vec![format!("{} ({}x{})", entry_header(*index, author), width, height)],
        AcquireEvent::SkippedDefault { index, author } => {
            vec![format!("{}: skipped, default image", entry_header(*index, author))]
        }
        AcquireEvent::Failed { index, author, .. } => {
            vec![format!("{}: not loadable", entry_header(*index, author))]
        }
    }
}

pub fn format_poster_output(poster: &Poster, path: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Images not loadable (skipped): {}",
        poster.acquired.unprocessed
    )];
    if !poster.captioned {
        lines.push("Captions disabled: font could not be loaded".to_string());
    }
    lines.push(format!(
        "Poster {}x{} with {} thumbnails \u{2192} {}",
        poster.canvas.width(),
        poster.canvas.height(),
        poster.acquired.thumbnails.len(),
        path.display()
    ));
    lines
}

pub fn print_poster_output(poster: &Poster, path: &Path) {
    for line in format_poster_output(poster, path) {
        println!("{}", line);
    }
}

// ============================================================================
// Document
// ============================================================================

pub fn format_document_output(entry_count: usize, path: &Path) -> Vec<String> {
    vec![format!(
        "Document with {} entries \u{2192} {}",
        entry_count,
        path.display()
    )]
}

pub fn print_document_output(entry_count: usize, path: &Path) {
    for line in format_document_output(entry_count, path) {
        println!("{}", line);
    }
}

/// Lines for `gen-templates`.
pub fn format_templates_written(dir: &Path, written: &[std::path::PathBuf]) -> Vec<String> {
    if written.is_empty() {
        return vec![format!("All templates already present in {}", dir.display())];
    }
    written
        .iter()
        .map(|path| format!("Wrote {}", path.display()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::{AcquireReport, Thumbnail};
    use crate::filter::{Rejected, Rejection};
    use crate::test_helpers::{entry, validated};
    use image::{DynamicImage, RgbaImage};
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn comments_found_line() {
        assert_eq!(format_comments_found(12), vec!["Found 12 comments."]);
    }

    #[test]
    fn entries_show_post_and_image() {
        let lines = format_entries(&[
            validated("artist", "https://x.org/a.png", false),
            validated("painter", "https://x.org/fallback.png", true),
        ]);
        assert_eq!(
            lines,
            vec![
                "001 @artist",
                "    Post: https://peakd.com/hive-174695/@artist/entry",
                "    Image: https://x.org/a.png",
                "002 @painter",
                "    Post: https://peakd.com/hive-174695/@painter/entry",
                "    Image: https://x.org/fallback.png (default)",
            ]
        );
    }

    #[test]
    fn filter_report_lists_rejections() {
        let report = FilterReport {
            accepted: vec![validated("artist", "https://x.org/a.png", false)],
            rejected: vec![Rejected {
                entry: entry("someone", "https://peakd.com/@someone/x", None),
                reason: Rejection::Blocklisted("someone".to_string()),
            }],
        };
        let lines = format_filter_report(&report, false);
        assert_eq!(
            lines,
            vec![
                "Found and parsed 1 relevant comments.",
                "Rejected 1",
                "    @someone: author @someone is blocklisted",
            ]
        );
    }

    #[test]
    fn filter_report_without_rejections_has_no_section() {
        let report = FilterReport {
            accepted: vec![validated("artist", "https://x.org/a.png", false)],
            rejected: vec![],
        };
        let lines = format_filter_report(&report, true);
        assert_eq!(lines.len(), 4);
        assert!(!lines.iter().any(|l| l.starts_with("Rejected")));
    }

    #[test]
    fn acquire_event_lines() {
        assert_eq!(
            format_acquire_event(&AcquireEvent::Loaded {
                index: 1,
                author: "artist".to_string(),
                width: 160,
                height: 212
            }),
            vec!["001 @artist (160x212)"]
        );
        assert_eq!(
            format_acquire_event(&AcquireEvent::SkippedDefault {
                index: 2,
                author: "painter".to_string()
            }),
            vec!["002 @painter: skipped, default image"]
        );
        assert_eq!(
            format_acquire_event(&AcquireEvent::Failed {
                index: 3,
                author: "drawer".to_string(),
                reason: "status 404".to_string()
            }),
            vec!["003 @drawer: not loadable"]
        );
    }

    #[test]
    fn poster_summary() {
        let poster = Poster {
            canvas: RgbaImage::new(350, 80),
            acquired: AcquireReport {
                thumbnails: vec![Thumbnail {
                    entry: validated("artist", "https://x.org/a.png", false),
                    image: DynamicImage::new_rgba8(160, 50),
                }],
                skipped_default: 0,
                unprocessed: 2,
            },
            captioned: true,
        };
        assert_eq!(
            format_poster_output(&poster, Path::new("poster.png")),
            vec![
                "Images not loadable (skipped): 2",
                "Poster 350x80 with 1 thumbnails \u{2192} poster.png",
            ]
        );
    }

    #[test]
    fn uncaptioned_poster_says_so() {
        let poster = Poster {
            canvas: RgbaImage::new(30, 20),
            acquired: AcquireReport::default(),
            captioned: false,
        };
        let lines = format_poster_output(&poster, Path::new("p.png"));
        assert_eq!(lines[1], "Captions disabled: font could not be loaded");
    }

    #[test]
    fn document_line() {
        assert_eq!(
            format_document_output(3, Path::new("sheet.md")),
            vec!["Document with 3 entries \u{2192} sheet.md"]
        );
    }

    #[test]
    fn templates_written_lines() {
        let dir = Path::new("templates");
        assert_eq!(
            format_templates_written(dir, &[]),
            vec!["All templates already present in templates"]
        );
        assert_eq!(
            format_templates_written(dir, &[PathBuf::from("templates/template_md_body.tpl")]),
            vec!["Wrote templates/template_md_body.tpl"]
        );
    }
}
