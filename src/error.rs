use thiserror::Error;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const QUOTA_MESSAGE: &str = "Usage limit reached. Please add credits to continue.";
pub const NO_IMAGE_MESSAGE: &str = "No image was generated. Please try again.";
pub const MISSING_QUOTE_MESSAGE: &str = "Please enter a main quote or idea for your design.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    RateLimited(String),
    #[error("{0}")]
    QuotaExceeded(String),
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    NoImage(String),
    #[error("A design is already being generated")]
    Busy,
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl DesignError {
    pub fn rate_limited() -> Self {
        DesignError::RateLimited(RATE_LIMIT_MESSAGE.to_string())
    }

    pub fn quota_exceeded() -> Self {
        DesignError::QuotaExceeded(QUOTA_MESSAGE.to_string())
    }

    pub fn no_image() -> Self {
        DesignError::NoImage(NO_IMAGE_MESSAGE.to_string())
    }

    pub fn missing_quote() -> Self {
        DesignError::Validation(MISSING_QUOTE_MESSAGE.to_string())
    }

    /// HTTP status the proxy answers with for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            DesignError::Validation(_) => 400,
            DesignError::RateLimited(_) => 429,
            DesignError::QuotaExceeded(_) => 402,
            DesignError::Busy => 409,
            DesignError::Configuration(_)
            | DesignError::Upstream(_)
            | DesignError::NoImage(_)
            | DesignError::Serialization(_)
            | DesignError::Io(_) => 500,
        }
    }

    /// Only a rate limit is worth retrying without operator or account action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DesignError::RateLimited(_))
    }

    /// Short headline used when the failure is shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            DesignError::Validation(_) => "Missing quote",
            DesignError::RateLimited(_) => "Slow down",
            DesignError::QuotaExceeded(_) => "Out of credits",
            DesignError::Busy => "Still working",
            _ => "Generation failed",
        }
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(e: serde_json::Error) -> Self {
        DesignError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for DesignError {
    fn from(e: std::io::Error) -> Self {
        DesignError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for DesignError {
    fn from(e: reqwest::Error) -> Self {
        DesignError::Upstream(format!("Request failed: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, DesignError>;
