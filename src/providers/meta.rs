use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use super::ModelProfile;

const MAX_GEN_LEN: u32 = 512;
const TEMPERATURE: f64 = 0.4;
const TOP_P: f64 = 0.9;

#[derive(Debug, Serialize)]
struct LlamaRequest<'a> {
    prompt: &'a str,
    max_gen_len: u32,
    temperature: f64,
    top_p: f64,
}

/// Meta Llama text models. The request shape has no stop-sequence field.
pub struct Llama;

impl ModelProfile for Llama {
    fn provider(&self) -> &'static str {
        "meta"
    }

    fn prefixes(&self) -> &'static [&'static str] {
        &["meta"]
    }

    fn build_request(&self, prompt: &str, _stop_sequences: &[String]) -> Result<Vec<u8>> {
        let body = LlamaRequest {
            prompt,
            max_gen_len: MAX_GEN_LEN,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };
        serde_json::to_vec(&body).context("Failed to serialize meta request body")
    }

    fn extract_text(&self, body: &Value) -> Option<String> {
        body.get("generation")?.as_str().map(str::to_owned)
    }
}
