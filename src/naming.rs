//! Output file naming.
//!
//! Documents are named after the minute they were generated:
//! `MM-DD-YYYY-HH-MM-GeneratedImageSheet.<ext>`, e.g.
//! `01-14-2022-10-05-GeneratedImageSheet.html`. A name given on the command
//! line always wins, used exactly as given.

use crate::document::DocumentFormat;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

const DOCUMENT_SUFFIX: &str = "GeneratedImageSheet";

/// Timestamped document file name.
pub fn document_file_name(at: NaiveDateTime, format: DocumentFormat) -> String {
    format!(
        "{}-{}.{}",
        at.format("%m-%d-%Y-%H-%M"),
        DOCUMENT_SUFFIX,
        format.extension()
    )
}

/// Where to save a document: the explicit name if given, else a timestamped one.
pub fn document_path(
    explicit: Option<&Path>,
    at: NaiveDateTime,
    format: DocumentFormat,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(document_file_name(at, format)),
    }
}

/// Where to save the poster: the explicit name if given, else the configured one.
pub fn poster_path(explicit: Option<&Path>, configured: &Path) -> PathBuf {
    explicit.unwrap_or(configured).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, 4)
            .unwrap()
            .and_hms_opt(9, 5, 59)
            .unwrap()
    }

    #[test]
    fn html_name_is_zero_padded() {
        assert_eq!(
            document_file_name(at(), DocumentFormat::Html),
            "01-04-2022-09-05-GeneratedImageSheet.html"
        );
    }

    #[test]
    fn markdown_name_has_dotted_extension() {
        assert_eq!(
            document_file_name(at(), DocumentFormat::Markdown),
            "01-04-2022-09-05-GeneratedImageSheet.md"
        );
    }

    #[test]
    fn explicit_document_name_wins() {
        assert_eq!(
            document_path(Some(Path::new("round-107.txt")), at(), DocumentFormat::Html),
            PathBuf::from("round-107.txt")
        );
    }

    #[test]
    fn default_document_path_is_timestamped() {
        assert_eq!(
            document_path(None, at(), DocumentFormat::Markdown),
            PathBuf::from("01-04-2022-09-05-GeneratedImageSheet.md")
        );
    }

    #[test]
    fn poster_path_prefers_explicit() {
        let configured = Path::new("GeneratedThumbnailPoster.png");
        assert_eq!(poster_path(None, configured), configured);
        assert_eq!(
            poster_path(Some(Path::new("out/round.png")), configured),
            PathBuf::from("out/round.png")
        );
    }
}
