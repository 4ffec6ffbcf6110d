//! # Receipt Store
//!
//! Reads receipt files for the core and writes rendered receipts back out.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Receipt Store                                  │
//! │                                                                         │
//! │  load(path, now)                                                       │
//! │    read_to_string ──► parse_document (core) ──► Receipt                │
//! │                                                                         │
//! │  write(name, receipt)                                                  │
//! │    validate_output_filename ──► create_new(dir/name) ──► render (core) │
//! │                                                                         │
//! │  Files are created with create-new semantics, so an existing file is   │
//! │  never truncated even if it appears between the check and the write.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use receipt_core::{format, parser, Receipt};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{LoadError, LoadResult, StoreError, StoreResult};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use receipt_io::StoreConfig;
///
/// let config = StoreConfig::new("./out");
/// assert_eq!(config.output_dir, std::path::PathBuf::from("./out"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory new receipt files are written to.
    /// Default: current directory
    pub output_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            output_dir: output_dir.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(".")
    }
}

// =============================================================================
// Filename Rules
// =============================================================================

/// Checks an output filename against `[\w\-. ]+`.
///
/// Path separators and the other characters reserved on common file
/// systems (`\ / : * ? " < > |`) are all outside the allowed set.
pub fn validate_output_filename(name: &str) -> StoreResult<()> {
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ' ');

    if name.is_empty() || !name.chars().all(allowed) {
        return Err(StoreError::IllegalFilename {
            name: name.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Receipt Store
// =============================================================================

/// File access for receipts.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    config: StoreConfig,
}

impl ReceiptStore {
    pub fn new(config: StoreConfig) -> Self {
        ReceiptStore { config }
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Reads and validates a receipt file.
    ///
    /// Any invalid line rejects the whole file.
    pub fn load(&self, path: impl AsRef<Path>, now: NaiveDateTime) -> LoadResult<Receipt> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading receipt file");

        let text = fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
        let receipt = parser::parse_document(&text, now)?;

        info!(path = %path.display(), entries = receipt.len(), "receipt loaded");
        Ok(receipt)
    }

    /// Resolves `name` in the output directory if it is legal and free.
    ///
    /// The prompt loop calls this to re-ask for a name before writing.
    pub fn check_target(&self, name: &str) -> StoreResult<PathBuf> {
        validate_output_filename(name)?;

        let path = self.config.output_dir.join(name);
        if path.exists() {
            return Err(StoreError::FileAlreadyExists {
                name: name.to_string(),
                path,
            });
        }

        Ok(path)
    }

    /// Writes the canonical render of `receipt` to a new file.
    ///
    /// A file that fails part-way is removed so the name stays free.
    ///
    /// ## Returns
    /// The path written.
    pub fn write(&self, name: &str, receipt: &Receipt) -> StoreResult<PathBuf> {
        let path = self.check_target(name)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StoreError::from_io(name, &path, e))?;

        if let Err(e) = file.write_all(format::render(receipt).as_bytes()) {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path) {
                warn!(path = %path.display(), error = %cleanup, "could not remove partial file");
            }
            return Err(StoreError::Write { path, source: e });
        }

        info!(path = %path.display(), entries = receipt.len(), "receipt written");
        Ok(path)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use receipt_core::ErrorKind;

    const SAMPLE: &str = "1-23-4567-89 01/15/2024 14:30:00\napple 2 P10.00\nrice_5kg 1kg P50.00\n";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 20)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn store_in(dir: &Path) -> ReceiptStore {
        ReceiptStore::new(StoreConfig::new(dir))
    }

    #[test]
    fn test_validate_output_filename() {
        assert!(validate_output_filename("receipt.txt").is_ok());
        assert!(validate_output_filename("my receipt-01.txt").is_ok());
        assert!(validate_output_filename("résumé.txt").is_ok());

        for bad in ["", "a/b.txt", "a\\b.txt", "c:.txt", "what?.txt", "x*.txt", "<x>.txt", "a|b", "\"q\""] {
            assert!(
                matches!(validate_output_filename(bad), Err(StoreError::IllegalFilename { .. })),
                "{bad} should be illegal"
            );
        }
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, SAMPLE).unwrap();

        let receipt = store_in(dir.path()).load(&path, now()).unwrap();
        assert_eq!(receipt.len(), 2);
        assert!(format::render(&receipt).ends_with("P70.00 3_items"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_in(dir.path())
            .load(dir.path().join("nope.txt"), now())
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_file_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "1-23-4567-89 01/15/2024 14:30:00\napple 2 P10.00\nbanana 3\n").unwrap();

        match store_in(dir.path()).load(&path, now()).unwrap_err() {
            LoadError::Parse(err) => {
                assert_eq!(err.kind(), ErrorKind::MissingFields);
                assert_eq!(err.line(), 3);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_then_refuse_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let input = dir.path().join("input.txt");
        fs::write(&input, SAMPLE).unwrap();
        let receipt = store.load(&input, now()).unwrap();

        let written = store.write("out.txt", &receipt).unwrap();
        assert_eq!(fs::read_to_string(&written).unwrap(), format::render(&receipt));

        let err = store.write("out.txt", &receipt).unwrap_err();
        assert!(matches!(err, StoreError::FileAlreadyExists { .. }));
        assert!(matches!(
            store.check_target("out.txt"),
            Err(StoreError::FileAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir.path().join("no_such_dir"));

        let err = store.write("out.txt", &Receipt::new()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_rejects_illegal_name_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_in(dir.path())
            .write("../escape.txt", &Receipt::new())
            .unwrap_err();
        assert!(matches!(err, StoreError::IllegalFilename { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
