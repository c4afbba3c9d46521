// ==================== GEMINI CLIENT ====================
// Thin client for the Google generative-language API. Builds the
// generateContent payload, sends it, and pulls the first candidate's text.
// All reasoning happens on the other side of the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

fn get_api_key() -> Result<String, String> {
    std::env::var("GEMINI_API_KEY").map_err(|_| "GEMINI_API_KEY not configured".to_string())
}

fn get_model() -> String {
    std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".to_string())
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Text of the first candidate, or an error when the API returned none
pub(crate) fn extract_text(response: GenerateResponse) -> Result<String, String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| "Invalid response from Gemini API".to_string())
}

async fn generate(request: &GenerateRequest) -> Result<String, String> {
    let api_key = get_api_key()?;
    let url = format!(
        "{}/{}:generateContent?key={}",
        GEMINI_API_BASE,
        get_model(),
        api_key
    );

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| format!("Failed to call Gemini API: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("Gemini API error: {}", response.status()));
    }

    let body: GenerateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse Gemini response: {}", e))?;

    extract_text(body)
}

/// Sends a plain-text prompt and returns the generated text
pub async fn generate_text(prompt: &str) -> Result<String, String> {
    log::info!("Sending text prompt to Gemini ({} chars)", prompt.len());

    let request = GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: prompt.to_string(),
            }],
        }],
        generation_config: None,
    };

    generate(&request).await
}

/// Sends a prompt with a requested JSON output schema and parses the reply
pub async fn generate_structured(prompt: &str, schema: Value) -> Result<Value, String> {
    log::info!("Sending structured prompt to Gemini ({} chars)", prompt.len());

    let request = GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: prompt.to_string(),
            }],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }),
    };

    let text = generate(&request).await?;

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse Gemini JSON output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first" } ] } },
                { "content": { "parts": [ { "text": "second" } ] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let response: GenerateResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert!(extract_text(response).is_err());
    }

    #[test]
    fn missing_parts_is_an_error() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [ { "content": { "parts": [] } } ]
        }))
        .unwrap();
        assert!(extract_text(response).is_err());
    }

    #[test]
    fn structured_request_carries_schema() {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: "prompt".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({ "type": "ARRAY" }),
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }
}
