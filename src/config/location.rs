//! Default location of the configuration file.

use camino::Utf8PathBuf;

use super::error::ConfigError;

/// File name of the YAML configuration record.
pub const CONFIG_FILE_NAME: &str = "gh-createpr-configuration.yml";

const APP_DIR_NAME: &str = "gh-createpr";

/// Resolves the default configuration file path.
///
/// Defaults to `${XDG_CONFIG_HOME}/gh-createpr/gh-createpr-configuration.yml`
/// when `XDG_CONFIG_HOME` is set, else to
/// `${HOME}/.config/gh-createpr/gh-createpr-configuration.yml`.
///
/// # Errors
///
/// Returns [`ConfigError::UnresolvedLocation`] when neither `XDG_CONFIG_HOME`
/// nor `HOME` is available.
pub fn default_config_path() -> Result<Utf8PathBuf, ConfigError> {
    let xdg = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|value| !value.is_empty());
    let home = std::env::var("HOME").ok().filter(|value| !value.is_empty());

    resolve_config_path(xdg.as_deref(), home.as_deref())
}

/// Resolves the configuration path from optional environment values.
pub(crate) fn resolve_config_path(
    xdg_config_home: Option<&str>,
    home: Option<&str>,
) -> Result<Utf8PathBuf, ConfigError> {
    if let Some(config_home) = xdg_config_home {
        return Ok(Utf8PathBuf::from(config_home)
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME));
    }

    if let Some(home_dir) = home {
        return Ok(Utf8PathBuf::from(home_dir)
            .join(".config")
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME));
    }

    Err(ConfigError::UnresolvedLocation)
}
