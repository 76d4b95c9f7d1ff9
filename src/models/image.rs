use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{DesignError, Result};

pub const DEFAULT_DESCRIPTION: &str = "T-shirt design generated successfully";

/// Where a generated image lives: a remote URL or an inline `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(reference: impl Into<String>) -> Self {
        ImageReference(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// MIME type of an inline image, e.g. `image/png`.
    pub fn media_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let header = rest.split(',').next()?;
        let media = header.split(';').next()?;
        (!media.is_empty()).then_some(media)
    }

    /// Decode an inline base64 image into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let rest = self.0.strip_prefix("data:").ok_or_else(|| {
            DesignError::Validation("Image is not an inline data URI".into())
        })?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| DesignError::Validation("Malformed data URI".into()))?;
        if !header.ends_with(";base64") {
            return Err(DesignError::Validation(
                "Only base64 data URIs can be decoded".into(),
            ));
        }
        STANDARD
            .decode(payload.trim())
            .map_err(|e| DesignError::Serialization(e.to_string()))
    }

    /// File extension matching the inline media type, `png` otherwise.
    pub fn extension(&self) -> &str {
        match self.media_type() {
            Some("image/jpeg") => "jpg",
            Some("image/webp") => "webp",
            Some("image/svg+xml") => "svg",
            _ => "png",
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A successfully generated design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDesign {
    pub image: ImageReference,
    pub description: String,
}

impl GeneratedDesign {
    pub fn new(image: ImageReference, description: Option<String>) -> Self {
        let description = description
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        Self { image, description }
    }

    /// Write an inline image to `dir`, named after the current timestamp.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<std::path::PathBuf> {
        let bytes = self.image.decode()?;
        let filename = format!(
            "tshirt_design_{}.{}",
            chrono::Utc::now().timestamp(),
            self.image.extension()
        );
        let path = dir.as_ref().join(filename);
        std::fs::write(&path, bytes)?;
        log::info!("💾 Design saved to: {}", path.display());
        Ok(path)
    }
}

/// Error envelope shared by every failing proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a proxy response: `{image, description}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProxyBody {
    Design(GeneratedDesign),
    Error(ErrorBody),
}
