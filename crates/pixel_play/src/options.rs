use std::{fs, path::Path, path::PathBuf};

use anyhow::Context;
use pixel_engine_edit::SessionSettings;
use serde::{Deserialize, Serialize};

/// How the grid is printed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `#rrggbb` per cell
    #[default]
    Hex,
    /// One character per cell: the palette index in base 36
    Palette,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Options {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub session: SessionSettings,
}

impl Options {
    pub const FILE_NAME: &'static str = "options.toml";

    /// Loads `options.toml` from the config directory, falling back to
    /// defaults if it is missing or broken.
    pub fn load_options() -> Self {
        if let Some(dir) = Self::config_dir() {
            if !dir.exists() && fs::create_dir_all(&dir).is_err() {
                log::error!("Can't create configuration directory {:?}", dir);
                return Self::default();
            }
            let options_file = dir.join(Self::FILE_NAME);
            if options_file.exists() {
                match fs::read_to_string(&options_file) {
                    Ok(txt) => match toml::from_str(&txt) {
                        Ok(result) => return result,
                        Err(err) => log::error!("Error parsing options file {:?}: {}", options_file, err),
                    },
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    /// Loads options from an explicit path. Unlike `load_options` a broken
    /// file is an error, since the user asked for it.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let txt = fs::read_to_string(path).with_context(|| format!("reading options file {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing options file {}", path.display()))
    }

    pub fn store_options(&self) {
        if let Some(file_name) = Self::config_file() {
            match toml::to_string(self) {
                Ok(text) => {
                    if let Err(err) = fs::write(file_name, text) {
                        log::error!("Error writing options file: {}", err);
                    }
                }
                Err(err) => log::error!("Error writing options file: {}", err),
            }
        }
    }

    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pixel_play").map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }

    pub fn log_dir() -> Option<PathBuf> {
        let dir = Self::config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        Some(dir)
    }
}
