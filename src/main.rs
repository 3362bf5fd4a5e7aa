//! docstore-cp: periodically copy a document out of a remote document
//! store.
//!
//! The binary is a thin shell: it turns flags and environment variables
//! into an immutable [`Config`], then hands control to the library's
//! polling loop until the process is terminated or interrupted.

use clap::Parser;
use docstore_cp::config::{self, Config, DEFAULT_POLL_INTERVAL};
use docstore_cp::error::Result;
use docstore_cp::input;
use docstore_cp::poller::Poller;
use docstore_cp::sink::OutputTarget;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Environment variable overriding the default base address
const ENV_BASE_URL: &str = "DOCSTORE_URL";

/// Environment variable supplying the Authorization header value
const ENV_AUTH: &str = "DOCSTORE_AUTH";

#[derive(Debug, Parser)]
#[command(
    name = "docstore-cp",
    version,
    about = "Copy documents out of a remote document store",
    long_about = "Copy documents out of a remote document store.

Copy /example/path to stdout using input.json as the input document:

    $ docstore-cp /example/path --input @input.json

Copy /example/path to ./local/directory/file.json:

    $ docstore-cp /example/path ./local/directory/file.json

Copy /example/path to stdout with an Authorization header on each request:

    $ DOCSTORE_AUTH=\"Bearer secret-token\" docstore-cp /example/path"
)]
struct Cli {
    /// Document path to copy, e.g. /example/path
    path: String,

    /// Output file; stdout when omitted
    output: Option<PathBuf>,

    /// Document store root URL (overrides DOCSTORE_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Polling delay in seconds
    #[arg(short, long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    delay: u64,

    /// Input document: a JSON literal or @filename
    #[arg(short, long)]
    input: Option<String>,
}

/// Resolve flags and environment into the runtime configuration.
///
/// The `--url` flag wins over `DOCSTORE_URL`, which wins over the built-in
/// default. Any failure here is fatal: the polling loop never starts.
fn build_config(cli: Cli) -> Result<Config> {
    let base_url = cli
        .url
        .or_else(|| std::env::var(ENV_BASE_URL).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
    config::validate_base_url(&base_url)?;

    let input = match &cli.input {
        Some(raw) => input::parse_document_arg(raw)?,
        None => None,
    };

    let mut headers = HashMap::new();
    headers.insert(
        "Authorization".to_string(),
        std::env::var(ENV_AUTH).unwrap_or_default(),
    );

    Ok(Config {
        url: config::resolve_data_url(&base_url, &cli.path),
        headers,
        output: cli
            .output
            .map(OutputTarget::File)
            .unwrap_or(OutputTarget::Stdout),
        input,
        poll_interval: Duration::from_secs(cli.delay),
    })
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(cli)?;
    let poller = Poller::new(config)?;

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    poller.run(cancel_token).await;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Logs go to stderr: stdout is the data sink
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
