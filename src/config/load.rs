use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `VIDTREE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path() {
            log::debug!("Reading config from \"{}\"", path.display());
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("VIDTREE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("library.roots")
                .with_list_parse_key("library.skip")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.playlist.title.trim().is_empty() {
            return Err("playlist.title must not be empty".to_string());
        }
        Ok(())
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// `VIDTREE_CONFIG_PATH`, else `vidtree/config.toml` under
/// `$XDG_CONFIG_HOME` or `~/.config`.
pub(super) fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("VIDTREE_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("vidtree").join("config.toml"))
}
