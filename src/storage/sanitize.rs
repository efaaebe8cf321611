use once_cell::sync::Lazy;
use regex::Regex;

use super::StorageError;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("filename pattern is valid"));

/// Reduce an untrusted file name to a bare name in the storage directory
///
/// Anything outside `[A-Za-z0-9._-]` is dropped, which removes path
/// separators outright, then every `..` is stripped. Names that end up
/// empty or made only of dots are rejected.
pub fn sanitize_filename(name: &str) -> Result<String, StorageError> {
    if name.trim().is_empty() {
        return Err(StorageError::InvalidName {
            reason: "file name must not be empty",
        });
    }

    let cleaned = DISALLOWED.replace_all(name, "").replace("..", "");
    let cleaned = cleaned.trim();

    if cleaned.chars().all(|c| c == '.') {
        return Err(StorageError::InvalidName {
            reason: "file name has no usable characters",
        });
    }

    Ok(cleaned.to_string())
}
