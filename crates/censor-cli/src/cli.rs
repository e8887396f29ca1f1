use censor_core::RedactionOptions;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "censor")]
#[command(
    about = "Sensitive data redactor - redacts names, dates, phone numbers, concepts and addresses",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Input files or glob patterns
    #[arg(long, required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Directory for censored files
    #[arg(long)]
    pub output: PathBuf,

    /// Redact names
    #[arg(long)]
    pub names: bool,

    /// Redact dates
    #[arg(long)]
    pub dates: bool,

    /// Redact phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Concept whose related terms mark sentences for redaction
    #[arg(long)]
    pub concept: Option<String>,

    /// Redact addresses
    #[arg(long)]
    pub address: bool,

    /// Where to write statistics: stdout, stderr or a file path
    #[arg(long)]
    pub stats: Option<String>,

    /// Statistics format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Config file (default: user config directory)
    #[arg(long, env = "CENSOR_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    Text,
    Json,
}

impl Cli {
    pub fn options(&self) -> RedactionOptions {
        RedactionOptions {
            names: self.names,
            dates: self.dates,
            phones: self.phones,
            address: self.address,
            concept: self.concept.clone(),
        }
    }
}
