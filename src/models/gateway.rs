use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat-completions request understood by the image gateway.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub modalities: Vec<String>,
}

impl ChatCompletionRequest {
    pub fn image_and_text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.into(),
            }],
            modalities: vec!["image".to_string(), "text".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

const IMAGE_URL_POINTER: &str = "/choices/0/message/images/0/image_url/url";
const CONTENT_POINTER: &str = "/choices/0/message/content";

/// A successful gateway answer, read by path. Only the two fields used are
/// looked at, so unexpected shapes anywhere else are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ChatCompletionResponse(Value);

impl ChatCompletionResponse {
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// `choices[0].message.images[0].image_url.url`
    pub fn first_image_url(&self) -> Option<&str> {
        self.0
            .pointer(IMAGE_URL_POINTER)
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// `choices[0].message.content`, when it is plain text.
    pub fn text(&self) -> Option<&str> {
        self.0
            .pointer(CONTENT_POINTER)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(ChatCompletionRequest::image_and_text(
            "google/gemini-2.5-flash-image",
            "draw",
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({
                "model": "google/gemini-2.5-flash-image",
                "messages": [{"role": "user", "content": "draw"}],
                "modalities": ["image", "text"]
            })
        );
    }

    #[test]
    fn test_extracts_first_image() {
        let response = ChatCompletionResponse::from_body(&json!({
            "choices": [{
                "message": {
                    "content": "A bold lion",
                    "images": [
                        {"type": "image_url", "image_url": {"url": "data:image/png;base64,AAA"}},
                        {"type": "image_url", "image_url": {"url": "second"}}
                    ]
                }
            }]
        })
        .to_string())
        .unwrap();
        assert_eq!(response.first_image_url(), Some("data:image/png;base64,AAA"));
        assert_eq!(response.text(), Some("A bold lion"));
    }

    #[test]
    fn test_missing_image_is_none() {
        for body in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{"message": {"content": "sorry"}}]}),
            json!({"choices": [{"message": {"images": [{}]}}]}),
            json!({"choices": [{"message": {"images": [{"image_url": {"url": 7}}]}}]}),
            json!([1, 2, 3]),
        ] {
            let response = ChatCompletionResponse::from_body(&body.to_string()).unwrap();
            assert!(response.first_image_url().is_none());
        }
    }

    #[test]
    fn test_odd_sibling_fields_keep_the_image() {
        let response = ChatCompletionResponse::from_body(
            &json!({
                "choices": [{
                    "message": {
                        "content": [{"type": "text", "text": "A fox"}],
                        "images": [{"image_url": {"url": "data:image/png;base64,AAA"}}],
                        "refusal": {"unexpected": true}
                    },
                    "finish_reason": 3
                }],
                "usage": "n/a"
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(response.first_image_url(), Some("data:image/png;base64,AAA"));
        assert_eq!(response.text(), None);
    }
}
