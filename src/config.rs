use anyhow::{Context, Result, bail};
use std::env;
use std::path::Path;
use tracing::info;

/// Runtime configuration resolved from environment variables.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub model_id: String,
    pub stop_sequences: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Result<Self> {
        let region = require_var(get_var("AWS_REGION"), "AWS_REGION")?;
        let model_id = require_var(get_var("MODEL_ID"), "MODEL_ID")?;
        let stop_sequences = parse_stop_sequences(get_var("STOP_SEQUENCES").as_deref())?;

        Ok(Self {
            region,
            model_id,
            stop_sequences,
        })
    }
}

fn require_var(value: Option<String>, key: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => bail!("{} not found in the environment variables.", key),
    }
}

fn parse_stop_sequences(raw: Option<&str>) -> Result<Vec<String>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(Vec::new()),
        Some(raw) => raw,
    };
    serde_json::from_str::<Vec<String>>(raw)
        .context("STOP_SEQUENCES must be a valid JSON array of strings.")
}

/// Loads environment variables from a `.env` file.
///
/// With an explicit execution directory the file must exist there; without
/// one, a `.env` in the current directory is picked up when present and
/// silently skipped otherwise.
pub fn load_env(execution_dir: Option<&Path>) -> Result<()> {
    match execution_dir {
        Some(dir) => {
            let dotenv_path = dir.join(".env");
            if !dotenv_path.is_file() {
                bail!(".env file not found at '{}'.", dotenv_path.display());
            }
            dotenvy::from_path(&dotenv_path)
                .with_context(|| format!("Failed to load '{}'", dotenv_path.display()))?;
            info!(path = %dotenv_path.display(), "loaded environment file");
        }
        None => {
            if let Ok(dotenv_path) = dotenvy::dotenv() {
                info!(path = %dotenv_path.display(), "loaded environment file");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Config, load_env, parse_stop_sequences};

    fn config_from_pairs(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Config::from_env_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn from_env_reads_all_configured_values() {
        let cfg = config_from_pairs(&[
            ("AWS_REGION", "us-east-1"),
            ("MODEL_ID", "meta.llama3-8b-instruct-v1:0"),
            ("STOP_SEQUENCES", r####"["User:", "###"]"####),
        ])
        .expect("config should load");

        assert_eq!(cfg.region, "us-east-1");
        assert_eq!(cfg.model_id, "meta.llama3-8b-instruct-v1:0");
        assert_eq!(cfg.stop_sequences, vec!["User:", "###"]);
    }

    #[test]
    fn missing_region_is_an_error() {
        let err = config_from_pairs(&[("MODEL_ID", "amazon.titan-text-express-v1")])
            .expect_err("config should fail");
        assert!(format!("{err:#}").contains("AWS_REGION"));
    }

    #[test]
    fn missing_model_id_is_an_error() {
        let err =
            config_from_pairs(&[("AWS_REGION", "us-east-1")]).expect_err("config should fail");
        assert!(format!("{err:#}").contains("MODEL_ID"));
    }

    #[test]
    fn blank_required_vars_are_treated_as_missing() {
        let err = config_from_pairs(&[("AWS_REGION", "  "), ("MODEL_ID", "meta.llama3")])
            .expect_err("config should fail");
        assert!(format!("{err:#}").contains("AWS_REGION"));
    }

    #[test]
    fn stop_sequences_default_to_empty() {
        let cfg = config_from_pairs(&[("AWS_REGION", "us-east-1"), ("MODEL_ID", "meta.llama3")])
            .expect("config should load");
        assert!(cfg.stop_sequences.is_empty());
    }

    #[test]
    fn malformed_stop_sequences_are_rejected() {
        let err = config_from_pairs(&[
            ("AWS_REGION", "us-east-1"),
            ("MODEL_ID", "meta.llama3"),
            ("STOP_SEQUENCES", "not-json"),
        ])
        .expect_err("config should fail");
        assert!(format!("{err:#}").contains("STOP_SEQUENCES"));
    }

    #[test]
    fn non_array_stop_sequences_are_rejected() {
        assert!(parse_stop_sequences(Some(r#"{"stop": true}"#)).is_err());
        assert!(parse_stop_sequences(Some(r#""User:""#)).is_err());
    }

    #[test]
    fn parse_stop_sequences_accepts_empty_array_and_blank_input() {
        assert!(parse_stop_sequences(Some("[]")).unwrap().is_empty());
        assert!(parse_stop_sequences(Some("   ")).unwrap().is_empty());
        assert!(parse_stop_sequences(None).unwrap().is_empty());
    }

    #[test]
    fn load_env_fails_when_execution_dir_has_no_dotenv() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let err = load_env(Some(dir.path())).expect_err("load_env should fail");
        assert!(format!("{err:#}").contains(".env file not found"));
    }
}
