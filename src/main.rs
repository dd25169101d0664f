//! hookres CLI entry point.

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use hookres::config::HeadlessEnvironment;
use hookres::{resolve, HookObservation, ResolveError};

use hookres::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli.log_level);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::from(1);
        }
    };

    match runtime.block_on(run(&cli)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

async fn run(cli: &Cli) -> hookres::Result<String> {
    let hook_log = read_hook_log(cli.input.as_deref())?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.fetch_timeout_secs))
        .build()
        .map_err(|e| ResolveError::InvalidInput(format!("failed to build HTTP client: {e}")))?;

    let env = HeadlessEnvironment;
    let config = cli.to_config();
    let cancel = CancellationToken::new();

    let named = resolve(&hook_log, &client, &env, &config, &cancel).await;

    if cli.pretty {
        serde_json::to_string_pretty(&named).map_err(ResolveError::from)
    } else {
        serde_json::to_string(&named).map_err(ResolveError::from)
    }
}

fn read_hook_log(path: Option<&Path>) -> hookres::Result<Vec<HookObservation>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&text).map_err(ResolveError::from)
}
