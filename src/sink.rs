//! Output sink for fetched documents
//!
//! Successful polls land either on standard output or in a file whose
//! parent directories are created on demand. File writes truncate: the sink
//! always holds the latest fetched value and nothing else.

use crate::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Destination for the bytes of a successful poll
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write the bytes and a trailing newline to standard output
    Stdout,
    /// Overwrite the file at this path, creating parent directories as
    /// needed
    File(PathBuf),
}

impl OutputTarget {
    /// Write one result to the sink.
    ///
    /// File targets are truncated and fully overwritten. A failed write
    /// leaves no guarantee about the previous contents; the next successful
    /// poll overwrites the file again.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] when directory creation or the write
    /// fails.
    pub async fn write(&self, bytes: &[u8]) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(bytes).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
                Ok(())
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, bytes).await?;
                Ok(())
            }
        }
    }
}
