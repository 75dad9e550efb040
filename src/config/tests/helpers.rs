//! Shared test helpers for configuration tests.

use camino::Utf8PathBuf;
use rstest::fixture;
use tempfile::TempDir;

use crate::config::{CONFIG_FILE_NAME, ConfigStore};

/// A store rooted in a temporary directory that lives as long as the value.
pub struct TempStore {
    /// Keeps the directory alive for the duration of the test.
    _dir: TempDir,
    pub store: ConfigStore,
}

impl TempStore {
    /// Reads the raw file content, or `None` when the file is absent.
    pub fn raw(&self) -> Option<String> {
        std::fs::read_to_string(self.store.path()).ok()
    }

    /// Writes raw content to the configuration path.
    pub fn write_raw(&self, content: &str) {
        std::fs::write(self.store.path(), content).expect("raw config should be written");
    }
}

/// Creates a store whose file does not exist yet.
#[fixture]
pub fn temp_store() -> TempStore {
    let dir = TempDir::new().expect("temp dir should be created");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .expect("temp dir path should be UTF-8");
    let store = ConfigStore::new(root.join(CONFIG_FILE_NAME));

    TempStore { _dir: dir, store }
}
