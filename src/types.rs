//! Shared types passed between the pipeline stages.
//!
//! Comments come in from the feed as [`RawComment`]s, the extractor turns the
//! interesting ones into [`Entry`]s, and the filter promotes accepted entries
//! to [`ValidatedEntry`]s. Renderers only ever see validated entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One reply from the comment feed, as delivered by the feed client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    pub author: String,
    pub body: String,
}

impl RawComment {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}

/// Address of a post on the chain: `@author/permlink`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostLocator {
    pub author: String,
    pub permlink: String,
}

impl PostLocator {
    /// Parse a locator out of any of the shapes users paste:
    ///
    /// - `"@author/permlink"`
    /// - `"hive-174695/@author/permlink"` (category prefix)
    /// - `"https://peakd.com/hive-174695/@author/permlink"`
    ///
    /// The last `@`-prefixed path segment names the author; the segment after
    /// it is the permlink. Trailing slashes are ignored. Returns `None` when
    /// either part is missing.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();
        let at = segments.iter().rposition(|s| s.starts_with('@'))?;
        let author = segments[at].trim_start_matches('@');
        let permlink = *segments.get(at + 1)?;
        if author.is_empty() || permlink.is_empty() || segments.len() > at + 2 {
            return None;
        }
        Some(Self {
            author: author.to_string(),
            permlink: permlink.to_string(),
        })
    }
}

impl fmt::Display for PostLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}/{}", self.author, self.permlink)
    }
}

/// A contest submission pulled out of one comment.
///
/// `image_url` is `None` when the comment carried no recognizable image link;
/// the filter substitutes the fallback image for those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Link to the submitted post, normalized to the canonical host.
    pub submission_url: String,
    pub image_url: Option<String>,
    pub author: String,
    pub uses_default_image: bool,
}

/// An entry that passed the blocklist and the moderator endorsement check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedEntry {
    pub submission_url: String,
    /// Real image link, or the fallback placeholder when `uses_default_image`.
    pub image_url: String,
    pub author: String,
    pub uses_default_image: bool,
}

/// One vote on a post. The only endorsement signal the filter looks at is
/// who cast it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endorsement {
    pub voter: String,
    #[serde(default)]
    pub percent: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_locator() {
        let loc = PostLocator::parse("@shaka/lets-make-a-collage-round-107").unwrap();
        assert_eq!(loc.author, "shaka");
        assert_eq!(loc.permlink, "lets-make-a-collage-round-107");
    }

    #[test]
    fn parse_locator_with_category() {
        let loc = PostLocator::parse("hive-174695/@artist/my-collage").unwrap();
        assert_eq!(loc.author, "artist");
        assert_eq!(loc.permlink, "my-collage");
    }

    #[test]
    fn parse_full_url() {
        let loc = PostLocator::parse("https://peakd.com/hive-174695/@artist/my-collage/").unwrap();
        assert_eq!(loc.to_string(), "@artist/my-collage");
    }

    #[test]
    fn parse_rejects_missing_permlink() {
        assert_eq!(PostLocator::parse("@artist"), None);
        assert_eq!(PostLocator::parse("@artist/"), None);
    }

    #[test]
    fn parse_rejects_missing_author() {
        assert_eq!(PostLocator::parse("hive-174695/my-collage"), None);
        assert_eq!(PostLocator::parse("@/my-collage"), None);
        assert_eq!(PostLocator::parse(""), None);
    }

    #[test]
    fn parse_rejects_extra_segments() {
        assert_eq!(PostLocator::parse("@artist/my-collage/comments"), None);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let loc = PostLocator {
            author: "a.b-c".to_string(),
            permlink: "re-post-20220114t101010z".to_string(),
        };
        assert_eq!(PostLocator::parse(&loc.to_string()), Some(loc));
    }

    #[test]
    fn endorsement_deserializes_condenser_vote() {
        let json = r#"{"voter":"lmac","weight":123,"rshares":"456","percent":5000,"reputation":0,"time":"2022-01-14T10:10:10"}"#;
        let vote: Endorsement = serde_json::from_str(json).unwrap();
        assert_eq!(vote.voter, "lmac");
        assert_eq!(vote.percent, 5000);
    }

    #[test]
    fn endorsement_percent_defaults_to_zero() {
        let vote: Endorsement = serde_json::from_str(r#"{"voter":"x"}"#).unwrap();
        assert_eq!(vote.percent, 0);
    }
}
