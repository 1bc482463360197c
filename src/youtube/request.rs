use serde::Serialize;

/// Result kind filter for `search.list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Channel,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Channel => "channel",
        }
    }
}

/// Parameters of a single upstream list call.
///
/// Serializes to the same field names the Data API uses, which keeps log
/// lines and test assertions readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UpstreamRequest {
    Search {
        part: &'static str,
        q: String,
        #[serde(rename = "type")]
        content_type: ContentType,
        #[serde(rename = "maxResults")]
        max_results: u32,
    },
    CommentThreads {
        part: &'static str,
        #[serde(rename = "videoId")]
        video_id: String,
        #[serde(rename = "maxResults")]
        max_results: u32,
    },
}

impl UpstreamRequest {
    /// Resource path below the versioned API root
    pub fn resource(&self) -> &'static str {
        match self {
            UpstreamRequest::Search { .. } => "search",
            UpstreamRequest::CommentThreads { .. } => "commentThreads",
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            UpstreamRequest::Search {
                part,
                q,
                content_type,
                max_results,
            } => vec![
                ("part", part.to_string()),
                ("q", q.clone()),
                ("type", content_type.as_str().to_string()),
                ("maxResults", max_results.to_string()),
            ],
            UpstreamRequest::CommentThreads {
                part,
                video_id,
                max_results,
            } => vec![
                ("part", part.to_string()),
                ("videoId", video_id.clone()),
                ("maxResults", max_results.to_string()),
            ],
        }
    }
}
