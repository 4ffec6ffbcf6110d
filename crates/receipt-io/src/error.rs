//! # File Layer Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error          receipt_core::ParseError                      │
//! │       │                          │                                      │
//! │       ▼                          ▼                                      │
//! │  LoadError / StoreError (this module) ← adds path + categorization     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI prints "ERROR: ..." and re-prompts or exits                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipt_core::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reading a receipt file failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("{} is not found.", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents failed validation; the whole receipt is rejected.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    /// Maps an io error for `path`, singling out a missing file.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::Read { path, source },
        }
    }
}

/// Writing a receipt file failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The filename contains characters outside `[\w\-. ]`.
    #[error(r#"Invalid filename. Ensure that no illegal characters are used (i.e., \ / : * ? " < > |)"#)]
    IllegalFilename { name: String },

    /// A file with that name already exists; receipts are never overwritten.
    #[error("File \"{name}\" already exist. Please use a different filename.")]
    FileAlreadyExists { name: String, path: PathBuf },

    /// Creating or writing the file failed.
    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Maps an io error from creating `path` (named `name` by the user).
    pub fn from_io(name: &str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::AlreadyExists => StoreError::FileAlreadyExists {
                name: name.to_string(),
                path,
            },
            _ => StoreError::Write { path, source },
        }
    }
}

/// Result type for loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for writing.
pub type StoreResult<T> = Result<T, StoreError>;
