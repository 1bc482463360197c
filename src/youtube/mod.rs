//! YouTube Data API v3 access.
//!
//! Handlers talk to the upstream through the [`YouTubeApi`] trait so tests can
//! substitute a recording mock for the real HTTP client.

pub mod client;
pub mod request;

pub use client::{UpstreamError, YouTubeApi, YouTubeClient};
pub use request::{ContentType, UpstreamRequest};
