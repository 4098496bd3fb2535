use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::cipher::gpg_backend::DEFAULT_GPG;
use crate::adapters::git::git_identity::DEFAULT_GIT;
use crate::core::errors::{CryptoEditError, Result};
use crate::core::models::recipients::EncryptionMode;
use crate::core::services::editor_service::{DEFAULT_EDITOR, EditorCommand};

/// Optional user defaults read from `~/.config/cryptoedit/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub gpg: Option<String>,
    pub editor: Option<String>,
    pub git: Option<String>,
    pub temp_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Default config file location for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cryptoedit").join("config.toml"))
    }

    /// Load `explicit` if given (it must exist), otherwise the default
    /// location if present, otherwise empty defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CryptoEditError::InvalidConfig {
                        detail: format!("config file {} not found", path.display()),
                    });
                }
                Self::read(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CryptoEditError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }
}

/// Values given on the command line (or through their env vars).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub gpg: Option<String>,
    pub editor: Option<String>,
}

/// Fully resolved settings for one run. Built once at startup and passed
/// down; components never read the environment themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub gpg: PathBuf,
    pub editor: EditorCommand,
    pub git: PathBuf,
    pub temp_dir: PathBuf,
    pub mode: EncryptionMode,
}

impl AppConfig {
    /// Merge sources: command line, then config file, then defaults.
    pub fn resolve(overrides: Overrides, file: FileConfig, mode: EncryptionMode) -> Self {
        let gpg = overrides
            .gpg
            .filter(|s| !s.trim().is_empty())
            .or(file.gpg)
            .unwrap_or_else(|| DEFAULT_GPG.to_string());
        let editor = overrides
            .editor
            .filter(|s| !s.trim().is_empty())
            .or(file.editor)
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Self {
            gpg: PathBuf::from(gpg),
            editor: EditorCommand::parse(&editor),
            git: PathBuf::from(file.git.unwrap_or_else(|| DEFAULT_GIT.to_string())),
            temp_dir: file.temp_dir.unwrap_or_else(std::env::temp_dir),
            mode,
        }
    }
}
