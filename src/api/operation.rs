//! The validate, delegate and relay path shared by every endpoint.
//!
//! Each endpoint is one [`Operation`] variant. The variant decides which query
//! parameter it reads, how that value is normalized and which upstream list
//! call it turns into; [`execute`] does the rest the same way for all of them.

use crate::api::models::AppError;
use crate::youtube::{ContentType, UpstreamRequest, YouTubeApi};
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Videos,
    Channels,
    Comments,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Videos => "videos",
            Operation::Channels => "channels",
            Operation::Comments => "comments",
        }
    }

    /// Query string parameter the endpoint reads
    pub fn param_name(&self) -> &'static str {
        match self {
            Operation::Videos => "search_query",
            Operation::Channels => "channel",
            Operation::Comments => "videoId",
        }
    }

    /// Video ids are case sensitive, search terms are not.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self {
            Operation::Videos | Operation::Channels => trimmed.to_lowercase(),
            Operation::Comments => trimmed.to_string(),
        }
    }

    pub fn upstream_request(&self, value: String) -> UpstreamRequest {
        match self {
            Operation::Videos => UpstreamRequest::Search {
                part: "snippet",
                q: value,
                content_type: ContentType::Video,
                max_results: 2,
            },
            Operation::Channels => UpstreamRequest::Search {
                part: "snippet",
                q: value,
                content_type: ContentType::Channel,
                max_results: 4,
            },
            Operation::Comments => UpstreamRequest::CommentThreads {
                part: "snippet,replies",
                video_id: value,
                max_results: 5,
            },
        }
    }
}

/// Validate the operation's parameter and forward it upstream.
///
/// Nothing is sent upstream unless the normalized value is non-empty. Upstream
/// failures come back unchanged inside [`AppError::Upstream`].
pub async fn execute(
    api: &dyn YouTubeApi,
    operation: Operation,
    params: &HashMap<String, String>,
) -> Result<Value, AppError> {
    let param = operation.param_name();
    let value = params
        .get(param)
        .map(|raw| operation.normalize(raw))
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required and cannot be empty", param)))?;

    let request = operation.upstream_request(value);
    info!(operation = operation.name(), ?request, "Forwarding to YouTube API");

    let payload = api.list(&request).await?;

    info!(operation = operation.name(), "Upstream call complete");
    Ok(payload)
}
