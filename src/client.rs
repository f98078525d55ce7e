//! Remote generation and edit calls against the Gemini `generateContent` API.

use log::{error, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::aspect::AspectRatio;
use crate::config::Config;
use crate::error::{GenGraphicError, Result};
use crate::params::DesignParameters;
use crate::prompt;

/// Quality tier requested for every generated image.
pub const IMAGE_SIZE: &str = "1K";

/// Provider message signalling an unusable credential.
pub const ENTITY_NOT_FOUND: &str = "Requested entity was not found";

/// A single text-to-image request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub image_size: &'static str,
}

impl GenerationRequest {
    pub fn from_params(params: &DesignParameters) -> Self {
        Self {
            prompt: prompt::build_generation_prompt(params),
            aspect_ratio: AspectRatio::classify(params.width, params.height)
                .unwrap_or(AspectRatio::Square),
            image_size: IMAGE_SIZE,
        }
    }
}

/// The external image model. Both calls return the raw base64 image payload.
pub trait ImageModel {
    fn generate(&self, api_key: &str, request: &GenerationRequest) -> Result<String>;
    fn edit(&self, api_key: &str, image_base64: &str, instruction: &str) -> Result<String>;
}

// --- Wire types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<RequestInlineData<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestInlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    image_config: ImageConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
    image_size: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// First image payload among the parts of the first candidate.
pub fn extract_image_data(response: &GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.inline_data.as_ref())
                .filter_map(|d| d.data.as_deref())
                .find(|data| !data.is_empty())
        })
        .map(str::to_string)
        .ok_or(GenGraphicError::NoImageData)
}

/// Map a non-success response onto the error taxonomy.
pub fn classify_failure(status: u16, body: &str) -> GenGraphicError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if message.contains(ENTITY_NOT_FOUND) || status == 401 || status == 403 {
        GenGraphicError::CredentialRejected(message)
    } else {
        GenGraphicError::Remote { status, message }
    }
}

/// Blocking HTTP client for the Gemini image model.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone(), config.model.clone())
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn send(&self, api_key: &str, body: &GenerateContentRequest<'_>) -> Result<String> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            error!("[gemini] API error: {} - {}", status, text);
            return Err(classify_failure(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        extract_image_data(&parsed)
    }
}

impl ImageModel for GeminiClient {
    fn generate(&self, api_key: &str, request: &GenerationRequest) -> Result<String> {
        info!(
            "[gemini] Generating image with {} at {}",
            self.model,
            request.aspect_ratio.token()
        );
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: Some(request.prompt.as_str()),
                    inline_data: None,
                }],
            }],
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: request.aspect_ratio.token(),
                    image_size: request.image_size,
                },
            }),
        };
        let data = self.send(api_key, &body)?;
        info!("[gemini] Generation complete: {} base64 chars", data.len());
        Ok(data)
    }

    fn edit(&self, api_key: &str, image_base64: &str, instruction: &str) -> Result<String> {
        info!("[gemini] Editing image with {}", self.model);
        let text = prompt::build_edit_prompt(instruction);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        text: None,
                        inline_data: Some(RequestInlineData {
                            mime_type: "image/png",
                            data: image_base64,
                        }),
                    },
                    RequestPart {
                        text: Some(text.as_str()),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: None,
        };
        let data = self.send(api_key, &body)?;
        info!("[gemini] Edit complete: {} base64 chars", data.len());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_skips_text_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[
                {"text":"Here is your logo"},
                {"inlineData":{"mimeType":"image/png","data":"QUJD"}},
                {"inlineData":{"mimeType":"image/png","data":"REVG"}}
            ]}}]}"#,
        );
        assert_eq!(extract_image_data(&response).unwrap(), "QUJD");
    }

    #[test]
    fn test_extract_only_reads_first_candidate() {
        let response = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"no image"}]}},
                {"content":{"parts":[{"inlineData":{"data":"QUJD"}}]}}
            ]}"#,
        );
        assert_eq!(
            extract_image_data(&response).unwrap_err(),
            GenGraphicError::NoImageData
        );
    }

    #[test]
    fn test_extract_empty_response() {
        assert_eq!(
            extract_image_data(&parse("{}")).unwrap_err(),
            GenGraphicError::NoImageData
        );
        assert_eq!(
            extract_image_data(&parse(r#"{"candidates":[{}]}"#)).unwrap_err(),
            GenGraphicError::NoImageData
        );
    }

    #[test]
    fn test_classify_failure() {
        let not_found = r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#;
        assert_eq!(
            classify_failure(404, not_found),
            GenGraphicError::CredentialRejected("Requested entity was not found.".into())
        );
        assert_eq!(
            classify_failure(500, "upstream exploded"),
            GenGraphicError::Remote {
                status: 500,
                message: "upstream exploded".into()
            }
        );
        assert!(classify_failure(403, "").is_credential_error());
    }

    #[test]
    fn test_request_from_params_uses_canonical_ratio() {
        let params = DesignParameters {
            name: "Aether".into(),
            width: 1920,
            height: 1080,
            ..Default::default()
        };
        let request = GenerationRequest::from_params(&params);
        assert_eq!(request.aspect_ratio, AspectRatio::Wide);
        assert_eq!(request.image_size, "1K");
        assert!(request.prompt.contains("\"Aether\""));
    }

    #[test]
    fn test_generation_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: Some("hello"),
                    inline_data: None,
                }],
            }],
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: "4:3",
                    image_size: IMAGE_SIZE,
                },
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
        assert_eq!(json["generationConfig"]["imageConfig"]["aspectRatio"], "4:3");
        assert_eq!(json["generationConfig"]["imageConfig"]["imageSize"], "1K");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("http://localhost:9/", "image-model");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/image-model:generateContent"
        );
    }
}
