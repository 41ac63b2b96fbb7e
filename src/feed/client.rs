//! Feed client trait and shared error type.
//!
//! The pipeline only needs two things from the chain: every reply under the
//! contest announcement, and the votes on a submitted post. [`FeedClient`]
//! names exactly those two calls so the extractor and filter can run against
//! an in-memory feed in tests.

use crate::types::{Endorsement, PostLocator, RawComment};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("Empty result from {0}")]
    EmptyResult(String),
}

/// Read access to a threaded comment feed.
pub trait FeedClient {
    /// All replies beneath `post`, at any depth, in thread order.
    fn fetch_replies(&self, post: &PostLocator) -> Result<Vec<RawComment>, FeedError>;

    /// Every vote cast on `post`.
    fn fetch_endorsements(&self, post: &PostLocator) -> Result<Vec<Endorsement>, FeedError>;
}
