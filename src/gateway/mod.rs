pub mod http_client;

use async_trait::async_trait;

use crate::{error::Result, models::ChatCompletionRequest};

pub use http_client::HttpGateway;

/// Raw answer from the image gateway. Status translation is the proxy's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub status: u16,
    pub body: String,
}

impl GatewayReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The hosted model that turns a prompt into an image.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatCompletionRequest)
        -> Result<GatewayReply>;
}
