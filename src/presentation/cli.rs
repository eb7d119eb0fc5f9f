use crate::application::report::{ReportFormatter, ReportStyle};
use crate::application::services::RedirectTracer;
use crate::infrastructure::config::{self, Config, DEFAULT_MAX_REDIRECTS};
use crate::infrastructure::output::write_report;
use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

const EXAMPLES: &str = "\
Examples:
  followme https://example.com
  followme https://bit.ly/example -o report.txt
  followme https://example.com --no-color";

/// CLI configuration for followme
#[derive(Parser, Debug)]
#[command(name = "followme", version, disable_version_flag = true)]
#[command(about = "Log and report redirects from a URL.", long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// The URL to check redirects for
    pub url: String,

    /// Output file to save the report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colorized output
    #[arg(long)]
    pub no_color: bool,

    /// Report layout: table, arrow or json
    #[arg(long, default_value = "table")]
    pub style: ReportStyle,

    /// Give up after this many redirects (0 for no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Log every hop to stderr as it is requested
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            url: self.url.clone(),
            output: self.output.clone(),
            colorize: !self.no_color && config::supports_color(),
            style: self.style,
            max_redirects: config::redirect_limit(self.max_redirects),
        }
    }
}

/// Traces the configured URL and writes the report
///
/// A failed trace still produces a report, but exits non-zero.
pub async fn run(config: &Config, tracer: &RedirectTracer) -> Result<ExitCode> {
    let result = tracer.trace(&config.url).await;

    if let Err(err) = &result {
        eprintln!("{}", err.to_string().red());
    }

    let report = ReportFormatter::new(config.report_options()).format(&config.url, &result);
    write_report(&report, config.output.as_deref())?;

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
