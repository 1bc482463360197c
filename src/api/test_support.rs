use crate::youtube::{UpstreamError, UpstreamRequest, YouTubeApi};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

enum Reply {
    Payload(Value),
    Fail(String),
}

/// Stand-in for the YouTube client that records every request it receives
pub struct MockYouTube {
    reply: Reply,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl MockYouTube {
    pub fn replying(payload: Value) -> Self {
        Self {
            reply: Reply::Payload(payload),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl YouTubeApi for MockYouTube {
    async fn list(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Payload(payload) => Ok(payload.clone()),
            Reply::Fail(message) => Err(UpstreamError::Api {
                status: 400,
                message: message.clone(),
            }),
        }
    }
}
