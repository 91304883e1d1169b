//! Error type for the persistence boundary.
//!
//! The tree algorithms themselves are total over well-formed trees and never
//! fail; everything fallible lives in loading, validating, and writing files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("root of {} must be a JSON object", path.display())]
    RootNotObject { path: PathBuf },

    #[error("key {key:?} in {} contains the path separator {separator:?}", path.display())]
    SeparatorInKey {
        path: PathBuf,
        key: String,
        separator: String,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}
