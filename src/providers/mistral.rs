use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use super::ModelProfile;

const MAX_TOKENS: u32 = 256;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const TOP_K: u32 = 40;

#[derive(Debug, Serialize)]
struct MistralRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    stop: &'a [String],
    temperature: f64,
    top_p: f64,
    top_k: u32,
}

pub struct Mistral;

impl ModelProfile for Mistral {
    fn provider(&self) -> &'static str {
        "mistral"
    }

    fn prefixes(&self) -> &'static [&'static str] {
        &["mistral"]
    }

    fn build_request(&self, prompt: &str, stop_sequences: &[String]) -> Result<Vec<u8>> {
        let body = MistralRequest {
            prompt,
            max_tokens: MAX_TOKENS,
            stop: stop_sequences,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
        };
        serde_json::to_vec(&body).context("Failed to serialize mistral request body")
    }

    fn extract_text(&self, body: &Value) -> Option<String> {
        body.get("outputs")?
            .get(0)?
            .get("text")?
            .as_str()
            .map(str::to_owned)
    }
}
