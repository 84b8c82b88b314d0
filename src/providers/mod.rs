//! Provider profiles for the Bedrock `InvokeModel` request/response shapes.
//!
//! Each supported model family brings its own JSON body layout and puts the
//! generated text in a different response field. A [`ModelProfile`] pairs the
//! request builder with the response extractor; [`resolve_profile`] picks one
//! by model-id prefix, first match wins.

pub mod amazon;
pub mod anthropic;
pub mod meta;
pub mod mistral;
pub(crate) mod sdk_errors;

use anyhow::Result;
use serde_json::Value;

pub trait ModelProfile: Sync {
    /// Provider name as it appears in model identifiers.
    fn provider(&self) -> &'static str;

    /// Model-id prefixes handled by this profile.
    fn prefixes(&self) -> &'static [&'static str];

    /// Serializes the provider-specific JSON request body.
    fn build_request(&self, prompt: &str, stop_sequences: &[String]) -> Result<Vec<u8>>;

    /// Pulls the generated text out of the decoded response payload.
    /// Returns `None` when the expected field is absent.
    fn extract_text(&self, body: &Value) -> Option<String>;
}

// Table order matters: resolution is first-match-wins.
static PROFILES: [&dyn ModelProfile; 4] = [
    &mistral::Mistral,
    &amazon::Titan,
    &meta::Llama,
    &anthropic::Claude,
];

pub fn resolve_profile(model_id: &str) -> Option<&'static dyn ModelProfile> {
    PROFILES
        .iter()
        .find(|profile| {
            profile
                .prefixes()
                .iter()
                .any(|prefix| model_id.starts_with(prefix))
        })
        .copied()
}

pub fn supported_providers() -> Vec<&'static str> {
    PROFILES.iter().map(|profile| profile.provider()).collect()
}

#[cfg(test)]
mod tests {
    use super::{resolve_profile, supported_providers};

    #[test]
    fn every_supported_prefix_resolves_to_its_provider() {
        let cases = [
            ("mistral.mistral-7b-instruct-v0:2", "mistral"),
            ("mistral.mixtral-8x7b-instruct-v0:1", "mistral"),
            ("amazon.titan-text-express-v1", "amazon"),
            ("meta.llama3-70b-instruct-v1:0", "meta"),
            ("anthropic.claude-v2:1", "anthropic"),
        ];
        for (model_id, provider) in cases {
            let profile = resolve_profile(model_id)
                .unwrap_or_else(|| panic!("'{model_id}' should resolve"));
            assert_eq!(profile.provider(), provider, "model id '{model_id}'");
        }
    }

    #[test]
    fn unknown_model_ids_do_not_resolve() {
        assert!(resolve_profile("cohere.command-r-v1:0").is_none());
        assert!(resolve_profile("").is_none());
        assert!(resolve_profile("ai21.j2-ultra-v1").is_none());
    }

    #[test]
    fn prefix_match_is_anchored_at_the_start() {
        assert!(resolve_profile("eu.meta.llama3-8b-instruct-v1:0").is_none());
    }

    #[test]
    fn supported_providers_lists_table_order() {
        assert_eq!(
            supported_providers(),
            vec!["mistral", "amazon", "meta", "anthropic"]
        );
    }
}
