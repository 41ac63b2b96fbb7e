//! Entry filter: decides which extracted entries count for the contest.
//!
//! Each entry goes through the checks below in order; the first one that fails
//! drops it, and the next entry is checked as normal:
//!
//! 1. Author is not on the blocklist (exact, case-sensitive match).
//! 2. The submission URL is not empty.
//! 3. The submission URL, minus the community prefix, parses as a post locator.
//! 4. The vote lookup for that post succeeds and at least one voter is a
//!    moderator.
//!
//! Survivors without an image of their own get the fallback placeholder and
//! are flagged with `uses_default_image`.
//!
//! A failed vote lookup only drops the one entry. Nothing in this module
//! aborts the batch, and the output keeps the input order.

use crate::config::ContestConfig;
use crate::feed::FeedClient;
use crate::types::{Entry, PostLocator, ValidatedEntry};
use std::collections::HashSet;
use thiserror::Error;

/// Why an entry was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("author @{0} is blocklisted")]
    Blocklisted(String),
    #[error("entry from @{0} has no submission link")]
    MissingSubmission(String),
    #[error("cannot derive a post locator from {0}")]
    InvalidLocator(String),
    #[error("vote lookup for {post} failed: {reason}")]
    LookupFailed { post: String, reason: String },
    #[error("{0} has no moderator vote")]
    NotEndorsed(String),
}

/// A dropped entry together with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub entry: Entry,
    pub reason: Rejection,
}

/// Outcome of filtering one batch.
#[derive(Debug, Default)]
pub struct FilterReport {
    /// Accepted entries in input order.
    pub accepted: Vec<ValidatedEntry>,
    pub rejected: Vec<Rejected>,
}

/// Blocklist and endorsement gate.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    blocklist: HashSet<String>,
    moderators: HashSet<String>,
    community_prefix: String,
    fallback_image_url: String,
}

impl EntryFilter {
    pub fn new(
        blocklist: HashSet<String>,
        moderators: HashSet<String>,
        community_prefix: impl Into<String>,
        fallback_image_url: impl Into<String>,
    ) -> Self {
        Self {
            blocklist,
            moderators,
            community_prefix: community_prefix.into(),
            fallback_image_url: fallback_image_url.into(),
        }
    }

    pub fn from_config(config: &ContestConfig) -> Self {
        Self::new(
            config.moderation.blocklist_set(),
            config.moderation.moderator_set(),
            config.entries.community_prefix(),
            config.entries.fallback_image_url.clone(),
        )
    }

    /// Run every check on one entry.
    pub fn check(
        &self,
        feed: &impl FeedClient,
        entry: &Entry,
    ) -> Result<ValidatedEntry, Rejection> {
        if self.blocklist.contains(&entry.author) {
            return Err(Rejection::Blocklisted(entry.author.clone()));
        }
        if entry.submission_url.is_empty() {
            return Err(Rejection::MissingSubmission(entry.author.clone()));
        }

        let post = self.locator_for(&entry.submission_url)?;
        let votes = feed
            .fetch_endorsements(&post)
            .map_err(|e| Rejection::LookupFailed {
                post: post.to_string(),
                reason: e.to_string(),
            })?;
        if !votes.iter().any(|v| self.moderators.contains(&v.voter)) {
            return Err(Rejection::NotEndorsed(post.to_string()));
        }

        let (image_url, uses_default_image) = match &entry.image_url {
            Some(url) if !url.is_empty() => (url.clone(), false),
            _ => (self.fallback_image_url.clone(), true),
        };

        Ok(ValidatedEntry {
            submission_url: entry.submission_url.clone(),
            image_url,
            author: entry.author.clone(),
            uses_default_image,
        })
    }

    /// Filter a batch, keeping order.
    pub fn filter(&self, feed: &impl FeedClient, entries: Vec<Entry>) -> FilterReport {
        let mut report = FilterReport::default();
        for entry in entries {
            match self.check(feed, &entry) {
                Ok(valid) => {
                    tracing::debug!(author = %valid.author, url = %valid.submission_url, "entry accepted");
                    report.accepted.push(valid);
                }
                Err(reason) => {
                    match &reason {
                        Rejection::LookupFailed { .. } => tracing::warn!("{reason}"),
                        _ => tracing::info!("{reason}"),
                    }
                    report.rejected.push(Rejected { entry, reason });
                }
            }
        }
        report
    }

    /// Strip the community prefix and parse what is left as `@author/permlink`.
    fn locator_for(&self, submission_url: &str) -> Result<PostLocator, Rejection> {
        let key = submission_url
            .strip_prefix(&self.community_prefix)
            .unwrap_or(submission_url);
        PostLocator::parse(key).ok_or_else(|| Rejection::InvalidLocator(submission_url.to_string()))
    }
}
