use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::{
    error::{DesignError, Result},
    models::{DesignParameters, DesignRequest, GeneratedDesign, ProxyBody},
    session::{DesignSession, Notice},
};

/// Caller of the design proxy endpoint.
#[derive(Clone)]
pub struct DesignClient {
    client: Client,
    endpoint: String,
}

impl DesignClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, params: &DesignParameters) -> Result<GeneratedDesign> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&DesignRequest::from(params))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_response(status, &body)
    }

    /// Run one generation for `session`: gate, call, record.
    pub async fn generate_for(&self, session: &mut DesignSession) -> Notice {
        let params = match session.start_generation() {
            Ok(params) => params,
            Err(notice) => return notice,
        };
        let result = self.generate(&params).await;
        session.receive_result(result)
    }

    /// Save a design to `dir`, fetching it first when it is a remote URL.
    pub async fn download(&self, design: &GeneratedDesign, dir: impl AsRef<Path>) -> Result<PathBuf> {
        if design.image.is_data_uri() {
            return design.save_to(dir);
        }

        let response = self.client.get(design.image.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(DesignError::Upstream(format!(
                "Image download failed: {}",
                response.status()
            )));
        }
        let bytes = response.bytes().await?;
        let path = dir.as_ref().join(format!(
            "tshirt_design_{}.png",
            chrono::Utc::now().timestamp()
        ));
        tokio::fs::write(&path, &bytes).await?;
        log::info!("💾 Design saved to: {}", path.display());
        Ok(path)
    }
}

/// Turn a proxy status and envelope back into a typed result.
pub fn interpret_response(status: u16, body: &str) -> Result<GeneratedDesign> {
    let parsed: Option<ProxyBody> = serde_json::from_str(body).ok();
    match (status, parsed) {
        (200..=299, Some(ProxyBody::Design(design))) => Ok(design),
        (200..=299, _) => Err(DesignError::no_image()),
        (status, parsed) => {
            let message = match parsed {
                Some(ProxyBody::Error(envelope)) => envelope.error,
                _ => format!("Design service error: {}", status),
            };
            Err(match status {
                429 => DesignError::RateLimited(message),
                402 => DesignError::QuotaExceeded(message),
                400 => DesignError::Validation(message),
                _ => DesignError::Upstream(message),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QUOTA_MESSAGE, RATE_LIMIT_MESSAGE};
    use crate::models::ImageReference;

    #[test]
    fn test_interpret_success() {
        let design = interpret_response(200, r#"{"image":"u","description":"d"}"#).unwrap();
        assert_eq!(design.image, ImageReference::new("u"));
        assert_eq!(design.description, "d");
    }

    #[test]
    fn test_interpret_errors() {
        let body = format!(r#"{{"error":"{}"}}"#, RATE_LIMIT_MESSAGE);
        assert_eq!(
            interpret_response(429, &body),
            Err(DesignError::rate_limited())
        );

        let body = format!(r#"{{"error":"{}"}}"#, QUOTA_MESSAGE);
        assert_eq!(
            interpret_response(402, &body),
            Err(DesignError::quota_exceeded())
        );

        assert_eq!(
            interpret_response(500, "gateway exploded"),
            Err(DesignError::Upstream("Design service error: 500".into()))
        );
    }

    #[test]
    fn test_interpret_success_without_image() {
        assert_eq!(
            interpret_response(200, r#"{"error":"odd"}"#),
            Err(DesignError::no_image())
        );
    }

    #[tokio::test]
    async fn test_generate_for_skips_request_when_idea_missing() {
        // Unroutable endpoint: the validation gate must stop us before any I/O.
        let client = DesignClient::new("http://127.0.0.1:9/generate-tshirt-design");
        let mut session = DesignSession::new();
        let notice = client.generate_for(&mut session).await;
        assert_eq!(notice.title, "Missing quote");
        assert!(!session.is_generating());
    }
}
