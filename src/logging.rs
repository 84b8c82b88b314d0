use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

const DEFAULT_LOG_FILTER: &str = "warn,bedrock_prompt=info";
const DEFAULT_LOG_FILE_PATH: &str = "logs/bedrock-prompt.log";

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Both(PathBuf),
}

fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match raw.unwrap_or("pretty").trim().to_ascii_lowercase().as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

/// Picks the log destination. A `--log` flag wins over the `LOG_OUTPUT` /
/// `LOG_FILE_PATH` environment variables and always means file output.
fn resolve_target(
    log_flag: Option<&Path>,
    output: Option<&str>,
    file_path: Option<&str>,
) -> LogTarget {
    if let Some(path) = log_flag {
        return LogTarget::File(path.to_path_buf());
    }

    let file_path = file_path
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_PATH));

    match output.unwrap_or("stderr").trim().to_ascii_lowercase().as_str() {
        "file" => LogTarget::File(file_path),
        "both" => LogTarget::Both(file_path),
        _ => LogTarget::Stderr,
    }
}

fn file_appender(path: &Path) -> std::io::Result<RollingFileAppender> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| std::ffi::OsStr::new("bedrock-prompt.log"));

    fs::create_dir_all(dir)?;
    Ok(tracing_appender::rolling::daily(dir, file_name))
}

fn build_writer(target: &LogTarget) -> std::io::Result<BoxMakeWriter> {
    match target {
        LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        LogTarget::File(path) => Ok(BoxMakeWriter::new(file_appender(path)?)),
        LogTarget::Both(path) => Ok(BoxMakeWriter::new(std::io::stderr.and(file_appender(path)?))),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn try_init(format: LogFormat, writer: BoxMakeWriter) -> InitResult {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(writer)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .with_writer(writer)
            .try_init(),
    }
}

/// Initializes the global tracing subscriber.
///
/// Logging setup problems never abort the run; a broken log file target
/// falls back to stderr with a note on stderr.
pub fn init(log_flag: Option<&Path>) {
    let format = parse_log_format(env::var("LOG_FORMAT").ok().as_deref());
    let target = resolve_target(
        log_flag,
        env::var("LOG_OUTPUT").ok().as_deref(),
        env::var("LOG_FILE_PATH").ok().as_deref(),
    );

    let writer = match build_writer(&target) {
        Ok(writer) => writer,
        Err(err) => {
            if let LogTarget::File(path) | LogTarget::Both(path) = &target {
                eprintln!(
                    "bedrock-prompt: failed to open log file '{}': {}; using stderr instead",
                    path.display(),
                    err
                );
            }
            BoxMakeWriter::new(std::io::stderr)
        }
    };

    let _ = try_init(format, writer);
}
