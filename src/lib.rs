//! # Contest Thumbnailer
//!
//! Collects the entries of a Hive art contest from the replies to its
//! announcement post, keeps the ones a moderator has voted on, and renders
//! them as a thumbnail poster or as an HTML/Markdown sheet.
//!
//! # Architecture: One Pipeline, Two Outputs
//!
//! ```text
//! 1. Fetch     post      →  Vec<RawComment>      (whole reply thread)
//! 2. Extract   comments  →  Vec<Entry>           (submission + image links)
//! 3. Filter    entries   →  Vec<ValidatedEntry>  (blocklist + moderator vote)
//! 4a. Poster   entries   →  PNG                  (fetch thumbnails, grid layout)
//! 4b. Document entries   →  .html / .md          (template substitution)
//! ```
//!
//! Remote access sits behind two traits, [`feed::FeedClient`] and
//! [`imaging::ImageSource`], so every stage can be exercised against
//! in-memory collaborators. Everything runs sequentially: one request at a
//! time, in comment order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Records passed between stages (`RawComment`, `Entry`, `ValidatedEntry`, ...) |
//! | [`extract`] | Stage 2: submission and image link extraction, host normalization |
//! | [`filter`] | Stage 3: blocklist and moderator-vote gate, typed rejections |
//! | [`feed`] | `FeedClient` trait and the Hive JSON-RPC client |
//! | [`imaging`] | `ImageSource` trait, HTTP proxy source, grid arithmetic, poster painting |
//! | [`acquire`] | Stage 4a: binds entries to thumbnails, counts skips |
//! | [`document`] | Stage 4b: template loading and substitution |
//! | [`naming`] | Output file names |
//! | [`config`] | `contest.toml` loading, merging, validation, stock config |
//! | [`pipeline`] | Stage glue and the run-ending error taxonomy |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Soft Failure Per Entry, Hard Failure Per Run
//!
//! A reply without a submission link, a blocklisted author, a failed vote
//! lookup or an unreachable image drops one entry and nothing else. Only
//! conditions that leave nothing to render (feed unreachable, no accepted
//! entries, missing templates, unwritable output) end the run, as a
//! [`pipeline::RunError`].
//!
//! ## Structural Endorsement Check
//!
//! An entry counts when one of the votes on its post was cast by an account
//! in the configured moderator set. The check compares voter names; it never
//! looks at the serialized vote list.
//!
//! ## One Column Count
//!
//! Row height precomputation and placement both wrap at the configured
//! `columns`, so the canvas is always exactly as tall as the rows painted
//! into it.

pub mod acquire;
pub mod config;
pub mod document;
pub mod extract;
pub mod feed;
pub mod filter;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
