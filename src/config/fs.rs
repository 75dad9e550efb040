//! Capability-scoped file access for the configuration file.
//!
//! Every operation opens the parent directory of the configuration file as a
//! [`Dir`] and works relative to it, so the temporary file used for saving
//! always lands beside the target and the final rename stays within one
//! directory.

use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::error::ConfigError;

/// Parent directory and file name of a configuration path.
pub(super) struct SplitPath<'a> {
    pub(super) parent: &'a Utf8Path,
    pub(super) file_name: &'a str,
}

pub(super) fn split(path: &Utf8Path) -> Result<SplitPath<'_>, ConfigError> {
    let file_name = path.file_name().ok_or_else(|| ConfigError::Io {
        path: path.to_path_buf(),
        message: "path has no file name".to_owned(),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    Ok(SplitPath { parent, file_name })
}

/// Reads the file, returning `Ok(None)` when it (or its directory) is absent.
pub(super) fn read_if_present(path: &Utf8Path) -> Result<Option<String>, ConfigError> {
    let split_path = split(path)?;

    let dir = match Dir::open_ambient_dir(split_path.parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(io_error(path, "failed to open directory", &error)),
    };

    match dir.read_to_string(split_path.file_name) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(io_error(path, "failed to read", &error)),
    }
}

/// Replaces the file with `content` by writing a sibling temporary file and
/// renaming it over the target.
///
/// Parent directories are created when needed.
pub(super) fn write_replacing(path: &Utf8Path, content: &str) -> Result<(), ConfigError> {
    let split_path = split(path)?;
    let dir = open_or_create_dir(path, split_path.parent)?;
    let temp_name = format!(".{}.tmp", split_path.file_name);

    dir.write(&temp_name, content)
        .map_err(|error| io_error(path, "failed to write temporary file", &error))?;

    dir.rename(&temp_name, &dir, split_path.file_name)
        .map_err(|error| {
            if let Err(cleanup_error) = dir.remove_file(&temp_name) {
                tracing::debug!("failed to remove temporary file '{temp_name}': {cleanup_error}");
            }
            io_error(path, "failed to replace", &error)
        })
}

fn open_or_create_dir(path: &Utf8Path, parent: &Utf8Path) -> Result<Dir, ConfigError> {
    Dir::create_ambient_dir_all(parent, ambient_authority())
        .map_err(|error| io_error(path, "failed to create directory", &error))?;
    Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| io_error(path, "failed to open directory", &error))
}

fn io_error(path: &Utf8Path, action: &str, error: &io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        message: format!("{action}: {error}"),
    }
}
