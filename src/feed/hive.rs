//! Hive JSON-RPC feed client.
//!
//! Calls are plain JSON-RPC 2.0 POSTs to one API node, made one at a time on
//! a blocking client. There is no retry and no timeout beyond the transport
//! default; a failed call is reported to the caller, which decides whether
//! it is fatal (reply fetch) or only costs one entry (vote lookup).

use super::client::{FeedClient, FeedError};
use crate::types::{Endorsement, PostLocator, RawComment};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const GET_CONTENT_REPLIES: &str = "condenser_api.get_content_replies";
const GET_ACTIVE_VOTES: &str = "condenser_api.get_active_votes";

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: [&'a str; 2],
    id: u64,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// The subset of a condenser comment object the feed needs.
#[derive(Debug, Deserialize)]
struct HiveComment {
    author: String,
    permlink: String,
    #[serde(default)]
    body: String,
    /// Number of direct and indirect replies below this comment.
    #[serde(default)]
    children: u32,
}

/// Feed client backed by a Hive API node.
pub struct HiveClient {
    http: Client,
    node: String,
}

impl HiveClient {
    pub fn new(node: impl Into<String>) -> Result<Self, FeedError> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            http,
            node: node.into(),
        })
    }

    fn call<T: DeserializeOwned>(&self, method: &str, post: &PostLocator) -> Result<T, FeedError> {
        tracing::debug!(method, %post, node = %self.node, "rpc call");
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params: [post.author.as_str(), post.permlink.as_str()],
            id: 1,
        };
        let response: RpcResponse<T> = self
            .http
            .post(&self.node)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        if let Some(err) = response.error {
            return Err(FeedError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response
            .result
            .ok_or_else(|| FeedError::EmptyResult(method.to_string()))
    }
}

/// Depth-first walk of a reply thread: each reply is followed by its own
/// replies. `fetch` returns the direct replies to one post; it is only called
/// again for replies that report children.
fn walk_replies<F>(
    fetch: &F,
    post: &PostLocator,
    out: &mut Vec<RawComment>,
) -> Result<(), FeedError>
where
    F: Fn(&PostLocator) -> Result<Vec<HiveComment>, FeedError>,
{
    for reply in fetch(post)? {
        let nested = (reply.children > 0).then(|| PostLocator {
            author: reply.author.clone(),
            permlink: reply.permlink.clone(),
        });
        out.push(RawComment {
            author: reply.author,
            body: reply.body,
        });
        if let Some(locator) = nested {
            walk_replies(fetch, &locator, out)?;
        }
    }
    Ok(())
}

impl FeedClient for HiveClient {
    fn fetch_replies(&self, post: &PostLocator) -> Result<Vec<RawComment>, FeedError> {
        let mut replies = Vec::new();
        let fetch = |p: &PostLocator| self.call(GET_CONTENT_REPLIES, p);
        walk_replies(&fetch, post, &mut replies)?;
        Ok(replies)
    }

    fn fetch_endorsements(&self, post: &PostLocator) -> Result<Vec<Endorsement>, FeedError> {
        self.call(GET_ACTIVE_VOTES, post)
    }
}
