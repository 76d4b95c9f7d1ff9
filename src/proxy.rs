//! The design proxy: one inbound request, one gateway call, one normalized answer.

use std::sync::Arc;

use crate::{
    config::{Config, GatewayConfig},
    error::{DesignError, Result},
    gateway::{GatewayReply, HttpGateway, ImageGateway},
    logger,
    models::{
        ChatCompletionRequest, ChatCompletionResponse, DesignParameters, DesignRequest,
        ErrorBody, GeneratedDesign, ImageReference, ProxyBody,
    },
    prompt::PromptTemplate,
};

/// Status plus JSON envelope, ready to be written by any HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: ProxyBody,
}

impl ProxyResponse {
    pub fn success(design: GeneratedDesign) -> Self {
        Self {
            status: 200,
            body: ProxyBody::Design(design),
        }
    }

    pub fn failure(error: &DesignError) -> Self {
        Self {
            status: error.status_code(),
            body: ProxyBody::Error(ErrorBody {
                error: error.to_string(),
            }),
        }
    }
}

impl From<Result<GeneratedDesign>> for ProxyResponse {
    fn from(result: Result<GeneratedDesign>) -> Self {
        match result {
            Ok(design) => ProxyResponse::success(design),
            Err(e) => ProxyResponse::failure(&e),
        }
    }
}

#[derive(Clone)]
pub struct DesignProxy {
    gateway: Arc<dyn ImageGateway>,
    config: GatewayConfig,
    template: PromptTemplate,
}

impl DesignProxy {
    pub fn new(gateway: Arc<dyn ImageGateway>, config: GatewayConfig) -> Self {
        Self {
            gateway,
            config,
            template: PromptTemplate::default(),
        }
    }

    /// Proxy talking to the configured gateway over HTTP.
    pub fn from_config(config: &Config) -> Self {
        let gateway = Arc::new(HttpGateway::from_config(&config.gateway));
        Self::new(gateway, config.gateway.clone()).with_template(config.prompt_template)
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> PromptTemplate {
        self.template
    }

    /// Entry point for a raw POST body. An unreadable body is answered like
    /// any other internal failure.
    pub async fn handle_json(&self, payload: &[u8]) -> ProxyResponse {
        let result = match self.api_key() {
            Ok(_) => match serde_json::from_slice::<DesignRequest>(payload) {
                Ok(request) => self.generate(request).await,
                Err(e) => Err(e.into()),
            },
            Err(e) => Err(e),
        };
        Self::respond(result)
    }

    pub async fn handle(&self, request: DesignRequest) -> ProxyResponse {
        Self::respond(self.generate(request).await)
    }

    fn respond(result: Result<GeneratedDesign>) -> ProxyResponse {
        let response: ProxyResponse = result.into();
        if let ProxyBody::Error(body) = &response.body {
            log::error!(
                "❌ Error generating T-shirt design ({}): {}",
                response.status,
                body.error
            );
        }
        response
    }

    fn api_key(&self) -> Result<&str> {
        self.config.api_key.as_deref().ok_or_else(|| {
            log::error!("❌ GATEWAY_API_KEY is not configured");
            DesignError::Configuration("GATEWAY_API_KEY is not configured".into())
        })
    }

    pub async fn generate(&self, request: DesignRequest) -> Result<GeneratedDesign> {
        let api_key = self.api_key()?;

        let params = DesignParameters::try_from(request)?;
        let prompt = self.template.render(&params);
        log::debug!(
            "Generating T-shirt design ({}) with prompt:\n{}",
            self.template.as_str(),
            prompt
        );

        let _timer = logger::timer("design generation");
        let request = ChatCompletionRequest::image_and_text(&self.config.model, prompt);
        let reply = self.gateway.complete(api_key, &request).await?;

        translate_reply(&reply)
    }
}

/// Map a gateway answer onto the proxy's result.
pub fn translate_reply(reply: &GatewayReply) -> Result<GeneratedDesign> {
    if !reply.is_success() {
        log::error!("❌ AI gateway error: {} {}", reply.status, reply.body);
        return Err(match reply.status {
            429 => DesignError::rate_limited(),
            402 => DesignError::quota_exceeded(),
            status => DesignError::Upstream(format!("AI gateway error: {}", status)),
        });
    }

    let data = match ChatCompletionResponse::from_body(&reply.body) {
        Ok(data) => data,
        Err(e) => {
            log::error!("❌ Unreadable gateway response ({}): {}", e, reply.body);
            return Err(DesignError::no_image());
        }
    };
    log::info!("AI response received successfully");

    let Some(url) = data.first_image_url() else {
        log::error!("❌ No image generated in response: {}", reply.body);
        return Err(DesignError::no_image());
    };

    Ok(GeneratedDesign::new(
        ImageReference::new(url),
        data.text().map(str::to_string),
    ))
}
