use std::env;

use crate::{logger::LogLevel, prompt::PromptTemplate};

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: None,
            url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = var("GATEWAY_API_KEY").filter(|key| !key.trim().is_empty());
        let url = var("GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        let model = var("GATEWAY_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());

        GatewayConfig {
            api_key,
            url,
            model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gateway: GatewayConfig,
    pub prompt_template: PromptTemplate,
    pub log_level: Option<String>,
    pub log_json: bool,
    /// Values from the environment that were ignored. Logged by the caller
    /// once a logger is installed.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            gateway: GatewayConfig::default(),
            prompt_template: PromptTemplate::default(),
            log_level: None,
            log_json: false,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the process environment. A missing gateway key is not an error
    /// here; every generation request reports it instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let mut warnings = Vec::new();

        let host = var("HOST").unwrap_or(defaults.host);
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warnings.push(format!("Invalid PORT '{}', using {}", raw, defaults.port));
                defaults.port
            }),
            None => defaults.port,
        };
        let prompt_template = match var("PROMPT_TEMPLATE") {
            Some(name) => name.parse().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Unknown PROMPT_TEMPLATE '{}', using {}",
                    name,
                    PromptTemplate::default().as_str()
                ));
                PromptTemplate::default()
            }),
            None => PromptTemplate::default(),
        };
        let log_level = var("LOG_LEVEL").filter(|level| {
            let known = level.parse::<LogLevel>().is_ok();
            if !known {
                warnings.push(format!("Unknown LOG_LEVEL '{}', ignoring it", level));
            }
            known
        });
        let log_json = var("LOG_JSON").map_or(false, |val| val == "true");

        Config {
            host,
            port,
            gateway: GatewayConfig::from_lookup(&var),
            prompt_template,
            log_level,
            log_json,
            warnings,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_gateway(mut self, gateway: GatewayConfig) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn with_prompt_template(mut self, template: PromptTemplate) -> Self {
        self.prompt_template = template;
        self
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.gateway.url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.gateway.model, DEFAULT_IMAGE_MODEL);
        assert!(config.gateway.api_key.is_none());
        assert_eq!(config.prompt_template, PromptTemplate::Embossed3d);
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_port(9000)
            .with_gateway(GatewayConfig::new().with_api_key("secret").with_url("http://x"))
            .with_prompt_template(PromptTemplate::ProductShot);
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 9000));
        assert_eq!(config.gateway.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gateway.url, "http://x");
        assert_eq!(config.prompt_template, PromptTemplate::ProductShot);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_environment_values() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("PROMPT_TEMPLATE", "product_shot"),
            ("LOG_LEVEL", "debug"),
            ("GATEWAY_API_KEY", "secret"),
        ]));
        assert_eq!(config.port, 9100);
        assert_eq!(config.prompt_template, PromptTemplate::ProductShot);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.gateway.api_key.as_deref(), Some("secret"));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_bad_values_are_reported() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("PROMPT_TEMPLATE", "watercolor"),
            ("LOG_LEVEL", "loud"),
            ("GATEWAY_API_KEY", "  "),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.prompt_template, PromptTemplate::Embossed3d);
        assert!(config.log_level.is_none());
        assert!(config.gateway.api_key.is_none());
        assert_eq!(config.warnings.len(), 3);
        assert!(config.warnings[1].contains("watercolor"));
        assert!(config.warnings[2].contains("loud"));
    }
}
