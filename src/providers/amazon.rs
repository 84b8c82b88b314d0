use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use super::ModelProfile;

const TEMPERATURE: f64 = 0.6;
const TOP_P: f64 = 0.95;
const MAX_TOKEN_COUNT: u32 = 150;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest<'a> {
    input_text: &'a str,
    text_generation_config: TextGenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextGenerationConfig<'a> {
    temperature: f64,
    top_p: f64,
    max_token_count: u32,
    stop_sequences: &'a [String],
}

/// Amazon Titan text models. Generation parameters nest under
/// `textGenerationConfig` rather than sitting at the top level.
pub struct Titan;

impl ModelProfile for Titan {
    fn provider(&self) -> &'static str {
        "amazon"
    }

    fn prefixes(&self) -> &'static [&'static str] {
        &["amazon"]
    }

    fn build_request(&self, prompt: &str, stop_sequences: &[String]) -> Result<Vec<u8>> {
        let body = TitanRequest {
            input_text: prompt,
            text_generation_config: TextGenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                max_token_count: MAX_TOKEN_COUNT,
                stop_sequences,
            },
        };
        serde_json::to_vec(&body).context("Failed to serialize amazon request body")
    }

    fn extract_text(&self, body: &Value) -> Option<String> {
        body.get("results")?
            .get(0)?
            .get("outputText")?
            .as_str()
            .map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::Titan;
    use crate::providers::ModelProfile;

    #[test]
    fn generation_parameters_nest_under_text_generation_config() {
        let stops = vec!["User:".to_string()];
        let raw = Titan
            .build_request("Hello", &stops)
            .expect("request should serialize");
        let body: Value = serde_json::from_slice(&raw).expect("request should be JSON");

        assert_eq!(body["inputText"], "Hello");
        let config = &body["textGenerationConfig"];
        assert_eq!(config["temperature"], 0.6);
        assert_eq!(config["topP"], 0.95);
        assert_eq!(config["maxTokenCount"], 150);
        assert_eq!(config["stopSequences"], json!(["User:"]));
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn extracts_output_text_of_first_result() {
        let body = json!({"results": [{"outputText": "Hi there", "tokenCount": 3}]});
        assert_eq!(Titan.extract_text(&body).as_deref(), Some("Hi there"));
    }

    #[test]
    fn missing_results_yield_none() {
        assert!(Titan.extract_text(&json!({})).is_none());
        assert!(Titan.extract_text(&json!({"results": []})).is_none());
    }
}
