pub mod describe;
pub mod validate;

use lineage_core::errors::{ExError, LineageError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON document from disk
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        ExError::from(LineageError::Serialization {
            message: format!("{}: {}", path.display(), e),
        })
        .with_op("read_json")
    })
}

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::from(LineageError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .with_op("read_file")
    })
}
