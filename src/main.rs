use clap::Parser;
use colored::Colorize;
use followme::infrastructure::http_client::HyperHttpClient;
use followme::infrastructure::logger::init_logger;
use followme::presentation::cli::{self, Cli};
use std::process::ExitCode;

/// followme: log and report the redirects behind a URL
///
/// Requests the URL without following redirects, records each hop until
/// a non-redirect response, and prints the chain as a table (or arrow
/// chain, or JSON), to stdout or to a file.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = cli.config();

    let tracer = match HyperHttpClient::new() {
        Ok(client) => client.create_tracer().with_max_redirects(config.max_redirects),
        Err(err) => {
            eprintln!("{}", format!("{err:#}").red());
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&config, &tracer).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format!("{err:#}").red());
            ExitCode::FAILURE
        }
    }
}
