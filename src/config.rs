//! Librarian configuration.
//!
//! The names shown beside the input and output jacks. They are shared by every
//! patch. The built-in names describe the rig the librarian was first set up
//! for; a user file at `<config_dir>/kmx8-librarian/config.toml` can replace
//! either list:
//!
//! ```toml
//! inputs = ["PC", "SQ-1+32", "NordLead", "Unused", "ESI-32", "DR-660", "KeyStep", "Wally"]
//! outputs = ["PC", "SQ-1+32", "NordLead", "MicroBrute", "ESI-32", "DR-660", "KeyStep", "Wally"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::PORT_COUNT;

pub const DEFAULT_INPUTS: [&str; PORT_COUNT] = [
    "PC", "SQ-1+32", "NordLead", "Unused", "ESI-32", "DR-660", "KeyStep", "Wally",
];

pub const DEFAULT_OUTPUTS: [&str; PORT_COUNT] = [
    "PC", "SQ-1+32", "NordLead", "MicroBrute", "ESI-32", "DR-660", "KeyStep", "Wally",
];

/// Device names for the eight inputs and eight outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub inputs: [String; PORT_COUNT],
    pub outputs: [String; PORT_COUNT],
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS.map(String::from),
            outputs: DEFAULT_OUTPUTS.map(String::from),
        }
    }
}

/// On-disk form. Either list may be left out.
#[derive(Deserialize, Default)]
struct ConfigFile {
    inputs: Option<Vec<String>>,
    outputs: Option<Vec<String>>,
}

impl Configuration {
    /// Built-in names, overridden by the user's config file if there is a
    /// usable one. Problems with the file are logged and otherwise ignored.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) if path.exists() => match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!(target: "config", "loaded {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!(target: "config", "ignoring config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Read a config file and merge it over the built-in names.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML and merge it over the built-in names.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(inputs) = file.inputs {
            config.inputs = port_names("inputs", inputs)?;
        }
        if let Some(outputs) = file.outputs {
            config.outputs = port_names("outputs", outputs)?;
        }

        Ok(config)
    }

    pub fn input_name(&self, index: usize) -> Option<&str> {
        self.inputs.get(index).map(String::as_str)
    }

    pub fn output_name(&self, index: usize) -> Option<&str> {
        self.outputs.get(index).map(String::as_str)
    }
}

fn port_names(list: &'static str, names: Vec<String>) -> Result<[String; PORT_COUNT], ConfigError> {
    let found = names.len();
    names
        .try_into()
        .map_err(|_| ConfigError::PortCount { list, found })
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kmx8-librarian").join("config.toml"))
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O error.
    IoError(std::io::Error),
    /// Malformed TOML.
    ParseError(toml::de::Error),
    /// A name list does not have exactly eight entries.
    PortCount { list: &'static str, found: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "File error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::PortCount { list, found } => {
                write!(f, "Expected {} {}, found {}", PORT_COUNT, list, found)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::ParseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseError(err)
    }
}
