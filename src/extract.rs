//! Entry extraction: one reply comment in, at most one contest entry out.
//!
//! A comment is an entry when its body links to a post on one of the allowed
//! front-end hosts. The first such link becomes the submission URL, with
//! mirror hosts rewritten to the canonical host so the same post always gets
//! the same URL. The first image link in the body, if any, becomes the
//! thumbnail source.
//!
//! Recognized image link shapes:
//!
//! | Shape | Example |
//! |---|---|
//! | Direct file | `https://files.peakd.com/.../collage.png` |
//! | Hive proxy path | `https://images.hive.blog/p/2bP4pJr4...` |
//! | Ecency proxy path | `https://images.ecency.com/p/3W72119s5B...` |
//!
//! A direct file link runs up to the last image extension before whitespace,
//! a quote, or a markdown/HTML delimiter, so two links on one line stay apart.
//!
//! Proxy links that request the original size (`<proxy>/0x0/<url>`) are
//! unwrapped to `<url>`, since the poster asks the proxy for its own width.
//!
//! Extraction never fails loudly. A body without a submission link yields
//! `None`; a body without an image link yields an entry whose `image_url` is
//! `None`.

use crate::config::EntriesConfig;
use crate::types::{Entry, RawComment};
use regex::Regex;

const IMAGE_PATTERN: &str = r#"((?:https://[^\s"'<>()\[\]]*\.(?:gif|jpg|png|jpeg))|(?:https://images\.hive\.blog/p/[A-Za-z0-9_\-@/]*)|(?:https://images\.ecency\.com/p/[A-Za-z0-9_\-@/]*))"#;

/// Path segment a resize proxy uses for "original size".
const ORIGINAL_SIZE_SEGMENT: &str = "/0x0/";

/// Compiled extraction patterns for one host configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    submission: Regex,
    image: Regex,
    canonical_origin: String,
    mirror_origins: Vec<String>,
}

impl Extractor {
    /// Build the patterns from the configured host allow-list.
    pub fn new(config: &EntriesConfig) -> Result<Self, regex::Error> {
        let hosts = std::iter::once(&config.canonical_host)
            .chain(&config.mirror_hosts)
            .map(|host| regex::escape(host))
            .collect::<Vec<_>>()
            .join("|");
        let submission = Regex::new(&format!(r"(https://(?:{hosts})/[a-z0-9_\-@/.]*)"))?;
        let image = Regex::new(IMAGE_PATTERN)?;

        Ok(Self {
            submission,
            image,
            canonical_origin: format!("https://{}/", config.canonical_host),
            mirror_origins: config
                .mirror_hosts
                .iter()
                .map(|host| format!("https://{host}/"))
                .collect(),
        })
    }

    /// Turn a comment into an entry, or `None` when it links no submission.
    pub fn extract(&self, comment: &RawComment) -> Option<Entry> {
        // Permlinks never end in a dot; a trailing one closes the sentence.
        let submission = first_group(&self.submission, &comment.body)?.trim_end_matches('.');
        let image_url = first_group(&self.image, &comment.body).map(unwrap_original_size);

        Some(Entry {
            submission_url: self.normalize_host(submission),
            image_url,
            author: comment.author.clone(),
            uses_default_image: false,
        })
    }

    /// Extract every entry from a batch of comments, preserving order.
    pub fn extract_all(&self, comments: &[RawComment]) -> Vec<Entry> {
        comments.iter().filter_map(|c| self.extract(c)).collect()
    }

    /// Rewrite a mirror-host link to the canonical host.
    fn normalize_host(&self, url: &str) -> String {
        for mirror in &self.mirror_origins {
            if let Some(path) = url.strip_prefix(mirror.as_str()) {
                return format!("{}{}", self.canonical_origin, path);
            }
        }
        url.to_string()
    }
}

/// First capture group of the leftmost match, if it is non-empty.
fn first_group<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// `https://images.hive.blog/0x0/https://host/a.png` → `https://host/a.png`.
fn unwrap_original_size(url: &str) -> String {
    if let Some(idx) = url.find(ORIGINAL_SIZE_SEGMENT) {
        let inner = &url[idx + ORIGINAL_SIZE_SEGMENT.len()..];
        if inner.starts_with("https://") || inner.starts_with("http://") {
            return inner.to_string();
        }
    }
    url.to_string()
}
