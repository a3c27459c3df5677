//! Debug dump of librarian state.
//!
//! Two self-describing JSON records: the full patch list and the
//! configuration. There is no version field and no partial dump; a patch dump
//! always carries every patch.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::model::{Patch, PATCH_COUNT};

/// The patch record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchDump {
    pub patches: Vec<Patch>,
}

/// Render the patch list. Anything but a full patch set is rejected.
pub fn dump_patches(patches: &[Patch]) -> Result<String, DumpError> {
    check_patch_count(patches.len())?;

    #[derive(Serialize)]
    struct Borrowed<'a> {
        patches: &'a [Patch],
    }

    Ok(serde_json::to_string_pretty(&Borrowed { patches })?)
}

/// Render the configuration.
pub fn dump_config(config: &Configuration) -> Result<String, DumpError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Read a patch list back from its dump. Routing values above 9, routings
/// without exactly eight entries and partial patch sets are rejected.
pub fn parse_patches(json: &str) -> Result<Vec<Patch>, DumpError> {
    let dump: PatchDump = serde_json::from_str(json)?;
    check_patch_count(dump.patches.len())?;
    Ok(dump.patches)
}

fn check_patch_count(found: usize) -> Result<(), DumpError> {
    if found == PATCH_COUNT {
        Ok(())
    } else {
        Err(DumpError::PatchCount { found })
    }
}

/// Write the patch record followed by the configuration record.
pub fn write_dump<W: Write>(
    mut writer: W,
    patches: &[Patch],
    config: &Configuration,
) -> Result<(), DumpError> {
    writeln!(writer, "{}", dump_patches(patches)?)?;
    writeln!(writer, "{}", dump_config(config)?)?;
    writer.flush()?;
    Ok(())
}

/// Error type for dump operations.
#[derive(Debug)]
pub enum DumpError {
    /// Output error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    SerializationError(serde_json::Error),
    /// Patch list is not a full patch set.
    PatchCount { found: usize },
}

impl std::fmt::Display for DumpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Output error: {}", e),
            Self::SerializationError(e) => write!(f, "Serialization error: {}", e),
            Self::PatchCount { found } => {
                write!(f, "Expected {} patches, found {}", PATCH_COUNT, found)
            }
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::SerializationError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DumpError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<serde_json::Error> for DumpError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err)
    }
}
