//! Temporary file helpers for config loading tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Writes `contents` to a new temporary `.yaml` file.
///
/// The file is deleted when the returned handle is dropped, so keep it alive
/// for as long as the path is in use.
///
/// # Example
///
/// ```
/// use test_utils::write_temp_yaml;
///
/// let file = write_temp_yaml("lat_dim: lat\n");
/// let text = std::fs::read_to_string(file.path()).unwrap();
/// assert_eq!(text, "lat_dim: lat\n");
/// ```
pub fn write_temp_yaml(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
