//! # docstore-cp
//!
//! Polling copy tool for remote JSON document stores.
//!
//! Given a path in a remote document tree, docstore-cp repeatedly fetches
//! the document at `{base}/v1/data{path}` and writes the latest string
//! result to a local sink (a file or standard output), overwriting whatever
//! the previous cycle wrote. An optional input document is sent with each
//! request, turning the fetch into a one-round-trip evaluation.
//!
//! The crate is library-first: the protocol client, the output sink, and the
//! polling loop are all usable (and testable) without the CLI shell in
//! `main.rs`.
//!
//! ## Quick Start
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
//! // Runs until the token is cancelled.
//! Poller::new(config)?.run(CancellationToken::new()).await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Document store protocol client
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Input document argument parsing
pub mod input;
/// Polling scheduler
pub mod poller;
/// Output sink
pub mod sink;

// Re-export commonly used types
pub use client::DocumentClient;
pub use config::{Config, DEFAULT_BASE_URL, resolve_data_url};
pub use error::{Error, Result};
pub use poller::Poller;
pub use sink::OutputTarget;
