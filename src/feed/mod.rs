//! Comment feed access.
//!
//! | Operation | Hive API call |
//! |---|---|
//! | **Replies** | `condenser_api.get_content_replies`, walked depth-first for the whole thread |
//! | **Endorsements** | `condenser_api.get_active_votes` |
//!
//! The module is split into:
//! - **Client**: [`FeedClient`] trait + [`FeedError`]
//! - **Hive**: [`HiveClient`], JSON-RPC over a blocking HTTP client

pub mod client;
pub mod hive;

pub use client::{FeedClient, FeedError};
pub use hive::HiveClient;
