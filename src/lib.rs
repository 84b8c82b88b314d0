pub mod cli;
pub mod config;
pub mod invoke;
pub mod logging;
pub mod providers;

use anyhow::{Result, anyhow, bail};
use std::env;
use std::path::PathBuf;
use tracing::info;

use cli::Cli;
use config::Config;
use invoke::BedrockRuntime;

/// Runs one prompt → completion round trip. Every failure is terminal and
/// surfaces as a non-zero exit from `main`.
pub async fn run(args: Cli) -> Result<()> {
    let execution_dir = args
        .execution_dir
        .clone()
        .or_else(|| env::var("EXECUTION_DIR").ok().map(PathBuf::from));
    config::load_env(execution_dir.as_deref())?;

    let cfg = Config::from_env()?;

    let prompt = args.prompt.trim();
    if prompt.is_empty() {
        bail!("Prompt is empty. Please provide a valid prompt.");
    }

    // Resolve before touching AWS so an unknown model id never reaches the
    // credential chain or the network.
    let profile = providers::resolve_profile(&cfg.model_id).ok_or_else(|| {
        anyhow!(
            "Unsupported MODEL_ID '{}'. Supported providers: {}.",
            cfg.model_id,
            providers::supported_providers().join(", ")
        )
    })?;
    info!(
        provider = profile.provider(),
        model_id = %cfg.model_id,
        region = %cfg.region,
        "resolved model profile"
    );

    let runtime = BedrockRuntime::connect(&cfg.region).await;
    let text = invoke::generate(&runtime, profile, &cfg, prompt).await?;

    println!("Model ID: {}", cfg.model_id);
    println!("Prompt: {prompt}");
    println!("Response: {text}");
    info!(model_id = %cfg.model_id, prompt, response = %text, "model invocation succeeded");

    Ok(())
}
