pub mod convert;
pub mod rows;

use std::path::Path;

use feegrid_core::error::FeegridError;

/// Lowercased extension of the input path, for format dispatch.
pub(crate) fn extension(path: &Path) -> Result<String, FeegridError> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| FeegridError::UnsupportedExtension(path.display().to_string()))
}
