//! Input document argument parsing
//!
//! The `--input` flag accepts either a JSON literal or, when prefixed with
//! `@`, the name of a file whose contents are decoded as JSON. An empty
//! argument means no input document. Failures here are configuration
//! errors: the caller aborts startup on them.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;

/// Parse an input document argument.
///
/// Returns `Ok(None)` when the trimmed argument is empty. A leading `@`
/// names a file to read; anything else is decoded as a JSON literal.
///
/// # Errors
/// Returns [`Error::Config`] for an unreadable file or malformed JSON in
/// either form.
pub fn parse_document_arg(raw: &str) -> Result<Option<Value>> {
    let arg = raw.trim();
    if arg.is_empty() {
        return Ok(None);
    }

    let text = if let Some(file_path) = arg.strip_prefix('@') {
        fs::read_to_string(file_path).map_err(|e| Error::Config {
            message: format!("failed to read input file {file_path}: {e}"),
            key: Some("input".to_string()),
        })?
    } else {
        arg.to_string()
    };

    let value = serde_json::from_str(&text).map_err(|e| Error::Config {
        message: format!("invalid JSON input: {e}"),
        key: Some("input".to_string()),
    })?;
    Ok(Some(value))
}
