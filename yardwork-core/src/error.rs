use std::path::PathBuf;
use thiserror::Error;

/// Failures touching the on-disk mulch record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store must exist before a run; it is never created on the fly.
    #[error("'{}' does not exist.", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read mulch store '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("mulch store '{}' holds malformed records", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode mulch records for '{}'", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write mulch store '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
