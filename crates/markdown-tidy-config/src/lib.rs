use markdown_tidy_engine::{BlankDocument, FormatOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unsupported setting in {}: {option} ({reason})", .path.display())]
    Unsupported {
        path: PathBuf,
        option: &'static str,
        reason: &'static str,
    },
}

/// Largest accepted `blank_lines_around_headings`.
pub const MAX_BLANK_LINES_AROUND_HEADINGS: usize = 16;

/// Driver settings, read from `~/.config/markdown-tidy/config.toml`.
///
/// Every key is optional; a missing key takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Indented code blocks are always left untouched; `false` is rejected.
    pub preserve_indented_code: bool,
    pub blank_lines_around_headings: usize,
    pub blank_document: BlankDocument,
}

impl Default for Config {
    fn default() -> Self {
        let options = FormatOptions::default();
        Self {
            preserve_indented_code: true,
            blank_lines_around_headings: options.blank_lines_around_headings,
            blank_document: options.blank_document,
        }
    }
}

impl Config {
    /// Reads and validates a config file; a missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate(path)?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Writes pretty TOML, creating parent directories as needed.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-tidy");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Engine options for a formatting run.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            blank_lines_around_headings: self.blank_lines_around_headings,
            blank_document: self.blank_document,
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if !self.preserve_indented_code {
            return Err(ConfigError::Unsupported {
                path: path.to_path_buf(),
                option: "preserve_indented_code = false",
                reason: "indented code blocks are never reformatted",
            });
        }
        if self.blank_lines_around_headings > MAX_BLANK_LINES_AROUND_HEADINGS {
            return Err(ConfigError::Unsupported {
                path: path.to_path_buf(),
                option: "blank_lines_around_headings",
                reason: "must be at most 16",
            });
        }
        Ok(())
    }
}
