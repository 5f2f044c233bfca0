use crate::core::error::{ApiFailure, ChatError};
use crate::providers::base_client::HttpClient;
use crate::providers::{GenerationParams, TextGenProvider};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: RequestParameters,
}

#[derive(Serialize)]
struct RequestParameters {
    max_length: u32,
    temperature: f64,
    do_sample: bool,
    top_p: f64,
    return_full_text: bool,
}

impl From<&GenerationParams> for RequestParameters {
    fn from(params: &GenerationParams) -> Self {
        Self {
            max_length: params.max_length,
            temperature: params.temperature,
            do_sample: true,
            top_p: 0.95,
            return_full_text: false,
        }
    }
}

#[derive(Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}

/// Thin client for the hosted Inference API. Issues `POST
/// {endpoint}/{model_id}` with a bearer token, classifies the outcome, and
/// retries nothing.
pub struct HuggingFaceProvider {
    client: HttpClient,
}

impl HuggingFaceProvider {
    pub fn new(endpoint: Option<String>) -> Result<Self, ChatError> {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self {
            client: HttpClient::new(endpoint)?,
        })
    }
}

/// Map a non-200 status to its failure variant.
fn classify_status(status: u16) -> ApiFailure {
    match status {
        503 => ApiFailure::ModelLoading,
        401 => ApiFailure::InvalidToken,
        other => ApiFailure::Status(other),
    }
}

/// Map a transport-level reqwest error to its failure variant.
fn classify_transport(err: reqwest::Error) -> ApiFailure {
    if err.is_timeout() {
        ApiFailure::TimedOut
    } else {
        ApiFailure::Connection(err.to_string())
    }
}

/// Extract the generated text from a 200 body. The API answers with an array
/// of objects carrying a `generated_text` field; anything else is an
/// unexpected shape.
fn parse_generation(body: &str) -> Result<String, ApiFailure> {
    let generations: Vec<Generation> =
        serde_json::from_str(body).map_err(|_| ApiFailure::UnexpectedResponse)?;

    match generations.first() {
        Some(generation) => Ok(generation.generated_text.trim().to_string()),
        None => Err(ApiFailure::UnexpectedResponse),
    }
}

#[async_trait]
impl TextGenProvider for HuggingFaceProvider {
    async fn generate(
        &self,
        model_id: &str,
        token: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ApiFailure> {
        let payload = GenerationRequest {
            inputs: prompt,
            parameters: params.into(),
        };

        let response = self
            .client
            .post(model_id, token, &payload)
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(classify_status(status.as_u16()));
        }

        let body = response.text().await.map_err(classify_transport)?;
        parse_generation(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_503_means_model_loading() {
        assert_eq!(classify_status(503), ApiFailure::ModelLoading);
    }

    #[test]
    fn status_401_means_invalid_token() {
        assert_eq!(classify_status(401), ApiFailure::InvalidToken);
    }

    #[test]
    fn other_statuses_carry_the_code() {
        assert_eq!(classify_status(429), ApiFailure::Status(429));
        assert_eq!(classify_status(500), ApiFailure::Status(500));
    }

    #[test]
    fn well_formed_body_yields_trimmed_text() {
        let body = r#"[{"generated_text": " hi there "}]"#;
        assert_eq!(parse_generation(body).unwrap(), "hi there");
    }

    #[test]
    fn missing_field_defaults_to_empty_text() {
        // Mirrors the lenient read of the field: an object without
        // generated_text is still a well-formed entry.
        assert_eq!(parse_generation(r#"[{}]"#).unwrap(), "");
    }

    #[test]
    fn malformed_bodies_are_unexpected_shapes() {
        assert_eq!(
            parse_generation(r#"{"error": "boom"}"#),
            Err(ApiFailure::UnexpectedResponse)
        );
        assert_eq!(parse_generation("[]"), Err(ApiFailure::UnexpectedResponse));
        assert_eq!(
            parse_generation("not json"),
            Err(ApiFailure::UnexpectedResponse)
        );
    }

    #[test]
    fn request_parameters_fix_sampling_fields() {
        let params = GenerationParams::default();
        let req = RequestParameters::from(&params);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["max_length"], 200);
        assert_eq!(json["do_sample"], true);
        assert_eq!(json["top_p"], 0.95);
        assert_eq!(json["return_full_text"], false);
    }
}
