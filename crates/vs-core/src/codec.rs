//! JSON (de)serialization of asset records.
//!
//! Writes are pretty-printed with fields in declaration order. Reads are
//! lenient: missing fields take their defaults, unknown fields are ignored,
//! and a malformed or missing file becomes the default record at the call
//! site rather than an error.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ParseError, VsError, VsResult};

/// Serialize a record as indented JSON.
pub fn to_json<T: Serialize>(record: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Parse a record from JSON text.
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Read a record from `path`, or `None` when the file does not exist.
///
/// An unreadable or malformed file yields the default record.
pub fn read_existing<T: DeserializeOwned + Default>(path: &Path) -> Option<T> {
    if !path.is_file() {
        return None;
    }
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable record, using defaults");
            return Some(T::default());
        }
    };
    if text.trim().is_empty() {
        return Some(T::default());
    }
    let record = parse(&text).unwrap_or_else(|e: ParseError| {
        debug!(path = %path.display(), error = %e, "malformed record, using defaults");
        T::default()
    });
    Some(record)
}

/// Read a record from `path`, falling back to the default for any failure.
pub fn read_lenient<T: DeserializeOwned + Default>(path: &Path) -> T {
    read_existing(path).unwrap_or_default()
}

/// Write a record to `path`, creating parent directories as needed.
///
/// The file is overwritten in place.
pub fn write_json<T: Serialize>(path: &Path, record: &T) -> VsResult<()> {
    let text = to_json(record).map_err(|source| VsError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| VsError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| VsError::io(path, e))?;
    info!(path = %path.display(), "wrote record");
    Ok(())
}
