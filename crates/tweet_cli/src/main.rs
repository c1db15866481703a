//! CLI probe over `tweet_core`.
//!
//! # Responsibility
//! - Load a JSON array of tweets and print their timespan and mentions.
//! - Keep output line-oriented and deterministic for quick sanity checks.

use clap::Parser;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use tweet_core::{get_mentioned_users, get_timespan, init_logging, Tweet};

/// Prints the timespan and mentioned users of a tweet file
#[derive(Parser, Debug)]
#[command(name = "tweet-extract", version)]
struct Cli {
    /// JSON file holding an array of tweets
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long = "log-level", env = "TWEET_LOG_LEVEL", default_value = tweet_core::default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files; logging stays off when unset
    #[arg(long = "log-dir", env = "TWEET_LOG_DIR")]
    log_dir: Option<String>,
}

#[derive(Debug)]
enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read `{}`: {source}", path.display()),
            Self::Json(err) => write!(f, "invalid tweet file: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let tweets = match load_tweets(&cli.input) {
        Ok(tweets) => tweets,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    info!("event=cli_load module=cli status=ok tweets={}", tweets.len());

    for line in report_lines(&tweets) {
        println!("{line}");
    }
}

fn load_tweets(path: &Path) -> Result<Vec<Tweet>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn report_lines(tweets: &[Tweet]) -> Vec<String> {
    let mut lines = Vec::new();
    match get_timespan(tweets) {
        Ok(span) => lines.push(format!(
            "timespan start={} end={}",
            span.start().to_rfc3339(),
            span.end().to_rfc3339()
        )),
        Err(err) => lines.push(format!("timespan error={err}")),
    }
    lines.extend(
        get_mentioned_users(tweets)
            .into_iter()
            .map(|username| format!("mention={username}")),
    );
    lines
}
