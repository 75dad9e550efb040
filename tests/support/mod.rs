//! Shared test utilities.

use camino::Utf8PathBuf;
use gh_createpr::config::CONFIG_FILE_NAME;
use tempfile::TempDir;

/// Creates a temporary directory for configuration tests.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Returns the configuration file path inside `temp_dir`.
///
/// # Panics
///
/// Panics if the temporary directory path is not valid UTF-8.
pub fn config_path_in(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()))
        .join(CONFIG_FILE_NAME)
}
