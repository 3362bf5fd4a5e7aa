//! Configuration types for docstore-cp
//!
//! [`Config`] is built once at startup by the CLI layer and never mutated
//! afterwards: the poller owns it and hands a reference to the document
//! client on every cycle. URL resolution from the base address and the
//! document path lives here as pure functions so the CLI stays a thin shell.

use crate::error::{Error, Result};
use crate::sink::OutputTarget;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Default base address of the remote document store
pub const DEFAULT_BASE_URL: &str = "http://localhost:8181";

/// Default delay between polling cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Collection prefix every document path is joined onto
const DATA_PREFIX: &str = "/v1/data";

/// Immutable runtime configuration, owned by the poller
#[derive(Clone, Debug)]
pub struct Config {
    /// Full request URL, already resolved via [`resolve_data_url`]
    pub url: String,

    /// Extra headers attached to every request.
    /// Empty values are legal and forwarded as-is.
    pub headers: HashMap<String, String>,

    /// Destination for successful string results
    pub output: OutputTarget,

    /// Optional input document sent with each request
    pub input: Option<Value>,

    /// Fixed delay between polling cycles
    pub poll_interval: Duration,
}

/// Resolve the full request URL for a document path.
///
/// Trailing slashes are trimmed off the base address. The path is trimmed of
/// surrounding slashes and, when non-empty, re-prefixed with a single
/// leading slash before being joined onto the fixed collection prefix.
///
/// # Examples
///
/// ```
/// use docstore_cp::resolve_data_url;
///
/// assert_eq!(
///     resolve_data_url("http://x", "/foo/bar"),
///     "http://x/v1/data/foo/bar"
/// );
/// assert_eq!(resolve_data_url("http://x/", ""), "http://x/v1/data");
/// ```
pub fn resolve_data_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("{base}{DATA_PREFIX}")
    } else {
        format!("{base}{DATA_PREFIX}/{path}")
    }
}

/// Check that a base address parses as an absolute URL.
///
/// Called once at startup so a malformed base address fails before the
/// polling loop begins instead of on every cycle.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    url::Url::parse(base_url).map_err(|e| Error::Config {
        message: format!("invalid base URL {base_url:?}: {e}"),
        key: Some("url".to_string()),
    })?;
    Ok(())
}
