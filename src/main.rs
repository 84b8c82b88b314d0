use anyhow::Result;
use bedrock_prompt::{cli::Cli, logging, run};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.log.as_deref());

    if let Err(err) = run(args).await {
        error!("invocation failed: {err:#}");
        return Err(err);
    }
    Ok(())
}
