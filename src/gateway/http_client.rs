use crate::{
    config::GatewayConfig,
    error::{DesignError, Result},
    gateway::{GatewayReply, ImageGateway},
    models::ChatCompletionRequest,
};
use async_trait::async_trait;
use reqwest::{header, Client};

/// reqwest-backed gateway. Uses the transport's default timeouts.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    url: String,
}

impl HttpGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ImageGateway for HttpGateway {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<GatewayReply> {
        log::info!("Generating image with model: {}", request.model);

        let response = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Image gateway unreachable: {}", e);
                DesignError::Upstream(format!("AI gateway request failed: {}", e))
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DesignError::Upstream(format!("Failed to read gateway response: {}", e)))?;

        Ok(GatewayReply { status, body })
    }
}
