use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use super::ModelProfile;

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;
const TOP_K: u32 = 50;
const MAX_TOKENS_TO_SAMPLE: u32 = 200;

#[derive(Debug, Serialize)]
struct ClaudeRequest<'a> {
    prompt: String,
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_tokens_to_sample: u32,
    stop_sequences: &'a [String],
}

/// Anthropic Claude text-completion models. The prompt must be wrapped in
/// the Human/Assistant turn template.
pub struct Claude;

impl ModelProfile for Claude {
    fn provider(&self) -> &'static str {
        "anthropic"
    }

    fn prefixes(&self) -> &'static [&'static str] {
        &["anthropic"]
    }

    fn build_request(&self, prompt: &str, stop_sequences: &[String]) -> Result<Vec<u8>> {
        let body = ClaudeRequest {
            prompt: format!("\n\nHuman:{prompt}\n\nAssistant:"),
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            stop_sequences,
        };
        serde_json::to_vec(&body).context("Failed to serialize anthropic request body")
    }

    fn extract_text(&self, body: &Value) -> Option<String> {
        body.get("completion")?
            .as_str()
            .map(|text| text.trim().to_owned())
    }
}
