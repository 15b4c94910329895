use std::path::Path;
use thiserror::Error;

/// Error type for upload filename validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    #[error("Filename cannot be empty")]
    Empty,
    #[error("Filename cannot contain null bytes")]
    NullByte,
    #[error("Filename cannot contain path separators (/ or \\)")]
    PathSeparator,
    #[error("Filename cannot be '.' or '..'")]
    SpecialDirectory,
    #[error("Invalid filename: must be a plain file name")]
    NotAFileName,
}

/// Validate a client-supplied filename to prevent path traversal.
/// The name must be a plain file name: no separators, no '.' or '..',
/// no null bytes, and `Path::file_name` must round-trip it unchanged.
pub fn validate_filename(filename: &str) -> Result<(), FilenameError> {
    if filename.is_empty() {
        return Err(FilenameError::Empty);
    }

    if filename.contains('\0') {
        return Err(FilenameError::NullByte);
    }

    if filename.contains('/') || filename.contains('\\') {
        return Err(FilenameError::PathSeparator);
    }

    if filename == "." || filename == ".." {
        return Err(FilenameError::SpecialDirectory);
    }

    // Reject anything Path would normalize to a different name
    if Path::new(filename).file_name().and_then(|n| n.to_str()) != Some(filename) {
        return Err(FilenameError::NotAFileName);
    }

    Ok(())
}
