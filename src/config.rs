use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::generator::{GenerationSettings, DEFAULT_LENGTH};

/// Shortest password length that may be configured.
pub const MIN_LENGTH: usize = 6;
/// Longest password length that may be configured.
pub const MAX_LENGTH: usize = 32;
/// Seconds a copied password stays on the clipboard by default.
pub const DEFAULT_CLEAR_CLIPBOARD_AFTER: u64 = 40;

const ENV_PREFIX: &str = "PASSFORGE";

/// Defaults for the front end, read from `settings.toml` and the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSettings {
    pub generation: GenerationSettings,
    /// 0 means the clipboard is never cleared.
    pub clear_clipboard_after: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            generation: GenerationSettings::default(),
            clear_clipboard_after: DEFAULT_CLEAR_CLIPBOARD_AFTER,
        }
    }
}

impl UserSettings {
    pub fn from_config(settings: &config::Config) -> Result<Self> {
        let length = settings.get_int("length")?;
        let length = validate_length(length)?;

        let clear_clipboard_after = settings.get_int("clear_clipboard_after")?;
        if clear_clipboard_after < 0 {
            return Err(Error::Generic("clear_clipboard_after can't be negative"));
        }

        Ok(Self {
            generation: GenerationSettings {
                length,
                include_lowercase: settings.get_bool("include_lowercase")?,
                include_uppercase: settings.get_bool("include_uppercase")?,
                include_numbers: settings.get_bool("include_numbers")?,
                include_symbols: settings.get_bool("include_symbols")?,
            },
            clear_clipboard_after: clear_clipboard_after as u64,
        })
    }
}

pub fn validate_length(length: i64) -> Result<usize> {
    if length < MIN_LENGTH as i64 || length > MAX_LENGTH as i64 {
        return Err(Error::GenericDyn(format!(
            "length must be between {MIN_LENGTH} and {MAX_LENGTH}, was {length}"
        )));
    }
    Ok(length as usize)
}

/// The location of the settings file, `$XDG_CONFIG_HOME/passforge/settings.toml` or
/// `$HOME/.config/passforge/settings.toml` if XDG_CONFIG_HOME isn't set.
pub fn settings_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Option<PathBuf> {
    let config_dir = match xdg_config_home {
        Some(dir) => dir.clone(),
        None => home.as_ref()?.join(".config"),
    };

    Some(config_dir.join("passforge").join("settings.toml"))
}

fn default_settings() -> Result<config::Config> {
    let defaults = UserSettings::default();
    let mut settings = config::Config::default();

    settings.set_default("length", DEFAULT_LENGTH as i64)?;
    settings.set_default("include_lowercase", defaults.generation.include_lowercase)?;
    settings.set_default("include_uppercase", defaults.generation.include_uppercase)?;
    settings.set_default("include_numbers", defaults.generation.include_numbers)?;
    settings.set_default("include_symbols", defaults.generation.include_symbols)?;
    settings.set_default(
        "clear_clipboard_after",
        defaults.clear_clipboard_after as i64,
    )?;

    Ok(settings)
}

/// Reads the settings.
///
/// An explicitly supplied `config_file` must exist, the file in the default
/// location is optional. Variables prefixed with `PASSFORGE_` override both.
pub fn read_config(
    config_file: Option<&Path>,
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<config::Config> {
    let mut settings = default_settings()?;

    match config_file {
        Some(path) => {
            debug!("reading settings from {}", path.display());
            settings.merge(config::File::from(path).required(true))?;
        }
        None => {
            if let Some(path) = settings_file_location(home, xdg_config_home) {
                trace!("looking for settings in {}", path.display());
                settings.merge(config::File::from(path).required(false))?;
            }
        }
    }

    settings.merge(config::Environment::with_prefix(ENV_PREFIX))?;

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod config_tests;
