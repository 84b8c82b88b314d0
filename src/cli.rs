use clap::Parser;
use std::path::PathBuf;

/// Send one prompt to an Amazon Bedrock text model and print the completion.
#[derive(Debug, Parser)]
#[command(name = "bedrock-prompt", version)]
pub struct Cli {
    /// Prompt text to send to the model
    #[arg(long, default_value = "Siapa presiden ke-4 Indonesia?")]
    pub prompt: String,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Directory containing the .env file
    #[arg(long = "execution_dir", value_name = "DIR")]
    pub execution_dir: Option<PathBuf>,
}
