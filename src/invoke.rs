use anyhow::{Context, Result, anyhow};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

use crate::config::Config;
use crate::providers::ModelProfile;
use crate::providers::sdk_errors::invoke_request_error;

pub type InvokeFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;

/// The one remote operation this tool performs: a synchronous `InvokeModel`
/// call returning the raw response body bytes.
pub trait InvokeModelApi {
    fn invoke_model<'a>(&'a self, model_id: &'a str, body: Vec<u8>) -> InvokeFuture<'a>;
}

pub struct BedrockRuntime {
    client: Client,
}

impl BedrockRuntime {
    /// Builds a Bedrock runtime client for the given region. Credentials
    /// come from the SDK's default provider chain.
    pub async fn connect(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

impl InvokeModelApi for BedrockRuntime {
    fn invoke_model<'a>(&'a self, model_id: &'a str, body: Vec<u8>) -> InvokeFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .invoke_model()
                .model_id(model_id)
                .content_type("application/json")
                .accept("application/json")
                .body(Blob::new(body))
                .send()
                .await
                .map_err(|err| {
                    warn!(model_id, "bedrock invoke-model request failed");
                    invoke_request_error(err, model_id)
                })?;
            Ok(response.body().as_ref().to_vec())
        })
    }
}

/// Builds the provider-specific request, invokes the model, and extracts the
/// generated text from the response payload.
pub async fn generate(
    api: &impl InvokeModelApi,
    profile: &dyn ModelProfile,
    cfg: &Config,
    prompt: &str,
) -> Result<String> {
    let body = profile.build_request(prompt, &cfg.stop_sequences)?;
    debug!(
        provider = profile.provider(),
        model_id = %cfg.model_id,
        body_len = body.len(),
        "sending invoke-model request"
    );

    let raw = api.invoke_model(&cfg.model_id, body).await?;
    let payload: Value =
        serde_json::from_slice(&raw).context("Failed to decode the response body as JSON.")?;

    let text = profile
        .extract_text(&payload)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            warn!(
                provider = profile.provider(),
                model_id = %cfg.model_id,
                "response payload carried no generation"
            );
            anyhow!("No generation found in the response.")
        })?;

    debug!(
        provider = profile.provider(),
        model_id = %cfg.model_id,
        response_len = text.len(),
        "received model generation"
    );
    Ok(text)
}
