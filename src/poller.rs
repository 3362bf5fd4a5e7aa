//! Fixed-rate polling scheduler
//!
//! The poller drives the document client for the life of the process: one
//! fetch per cycle, the result routed to the output sink, then a fixed
//! sleep. Every error is reported and swallowed so the loop only ends when
//! the cancellation token fires.
//!
//! # Example
//!
//! ```no_run
//! use docstore_cp::{Config, OutputTarget, Poller, resolve_data_url};
//! use std::collections::HashMap;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> docstore_cp::Result<()> {
//! let config = Config {
//!     url: resolve_data_url("http://localhost:8181", "/example/path"),
//!     headers: HashMap::new(),
//!     output: OutputTarget::Stdout,
//!     input: None,
//!     poll_interval: Duration::from_secs(60),
//! };
//!
//! let cancel_token = CancellationToken::new();
//! Poller::new(config)?.run(cancel_token).await;
//! # Ok(())
//! # }
//! ```

use crate::client::DocumentClient;
use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Polling scheduler owning the configuration and the document client
pub struct Poller {
    client: DocumentClient,
    config: Config,
}

impl Poller {
    /// Create a poller for the given configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: DocumentClient::new()?,
            config,
        })
    }

    /// Run the polling loop until the token is cancelled.
    ///
    /// Each cycle fetches once, routes the result, and sleeps for the fixed
    /// interval. The sleep is not adjusted for the time the cycle took.
    /// Errors of every kind are logged with their stage and swallowed;
    /// there is no backoff and no jitter.
    pub async fn run(self, cancel_token: CancellationToken) {
        info!(
            url = %self.config.url,
            interval = ?self.config.poll_interval,
            "poller started"
        );

        loop {
            if let Err(err) = self.poll_once().await {
                error!(
                    url = %self.config.url,
                    stage = err.code(),
                    error = %err,
                    "poll cycle failed"
                );
            }

            tokio::select! {
                _ = sleep(self.config.poll_interval) => {}
                _ = cancel_token.cancelled() => {
                    info!("poller shutting down");
                    break;
                }
            }
        }

        info!("poller stopped");
    }

    /// Execute one polling cycle: fetch, then route the result to the sink.
    ///
    /// A missing result writes nothing. A present result must be a string;
    /// anything else is a type error and the sink is not touched.
    async fn poll_once(&self) -> Result<()> {
        let Some(value) = self.client.fetch(&self.config).await? else {
            return Ok(());
        };

        let text = match value {
            Value::String(text) => text,
            other => {
                return Err(Error::UnexpectedType {
                    found: json_type_name(&other),
                });
            }
        };

        self.config.output.write(text.as_bytes()).await
    }
}

/// JSON type name of a value, for type-error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
