//! Librarian session
//!
//! Ties the configuration and the patch store together and exposes the
//! operations behind the librarian's front panel. Device transfer, disk files
//! and the clipboard have no protocol or format yet; those operations report
//! [`LibrarianError::Unsupported`] and leave the session untouched.

use std::path::Path;

use crate::config::Configuration;
use crate::model::{Patch, RoutingValue};
use crate::persistence::{self, DumpError};
use crate::store::{PatchStore, StoreError, StoreEvent};

/// Front panel operations with no implementation behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    GetPatches,
    SendPatches,
    CopyPatch,
    PastePatch,
    LoadPatches,
    SavePatches,
    SaveConfig,
}

impl Operation {
    /// Label of the front panel button.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::GetPatches => "Get Patches",
            Operation::SendPatches => "Send Patches",
            Operation::CopyPatch => "Copy",
            Operation::PastePatch => "Paste",
            Operation::LoadPatches => "Load",
            Operation::SavePatches => "Save",
            Operation::SaveConfig => "Save CNFG",
        }
    }
}

/// Error type for session operations.
#[derive(Debug)]
pub enum LibrarianError {
    /// The operation has no implementation.
    Unsupported(Operation),
    /// Rejected by the patch store.
    Store(StoreError),
    /// Dump failed.
    Dump(DumpError),
}

impl std::fmt::Display for LibrarianError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(op) => write!(f, "Unsupported operation: {}", op.label()),
            Self::Store(e) => write!(f, "{}", e),
            Self::Dump(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LibrarianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Dump(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for LibrarianError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<DumpError> for LibrarianError {
    fn from(err: DumpError) -> Self {
        Self::Dump(err)
    }
}

/// One interactive librarian session.
pub struct Librarian {
    /// Input and output names.
    config: Configuration,

    /// Patches and edit buffer.
    store: PatchStore,
}

impl Librarian {
    /// Create a session with factory patches.
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            store: PatchStore::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn store(&self) -> &PatchStore {
        &self.store
    }

    /// Patch spinbox changed.
    pub fn select_patch(&mut self, external_number: u8) -> Result<&str, LibrarianError> {
        log::info!("Patch #{}", external_number);
        Ok(self.store.select_patch(external_number)?)
    }

    /// Output button pressed with `input_index` chosen in the input selector.
    pub fn toggle_route(
        &mut self,
        output_index: usize,
        input_index: usize,
    ) -> Result<RoutingValue, LibrarianError> {
        let value = self.store.toggle_route(output_index, input_index)?;
        log::debug!(
            "{} <- {}: {}",
            self.config.output_name(output_index).unwrap_or("?"),
            self.config.input_name(input_index).unwrap_or("?"),
            value
        );
        Ok(value)
    }

    /// Notifications for the presentation layer.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.store.drain_events()
    }

    /// Fetch every patch from the KMX-8.
    pub fn get_patches(&mut self) -> Result<(), LibrarianError> {
        unsupported(Operation::GetPatches)
    }

    /// Send every patch to the KMX-8.
    pub fn send_patches(&self) -> Result<(), LibrarianError> {
        unsupported(Operation::SendPatches)
    }

    /// Copy the active patch to the clipboard.
    pub fn copy_patch(&self) -> Result<Patch, LibrarianError> {
        unsupported(Operation::CopyPatch)
    }

    /// Paste a patch over the active one.
    pub fn paste_patch(&mut self, _patch: Patch) -> Result<(), LibrarianError> {
        unsupported(Operation::PastePatch)
    }

    /// Replace every patch from a file.
    pub fn load_patches(&mut self, _path: &Path) -> Result<(), LibrarianError> {
        unsupported(Operation::LoadPatches)
    }

    /// Write every patch to a file.
    pub fn save_patches(&self, _path: &Path) -> Result<(), LibrarianError> {
        unsupported(Operation::SavePatches)
    }

    /// Write the input and output names to a file.
    pub fn save_config(&self, _path: &Path) -> Result<(), LibrarianError> {
        unsupported(Operation::SaveConfig)
    }

    /// Patch record followed by configuration record. Pending edits to the
    /// active patch are included.
    pub fn dump(&self) -> Result<String, LibrarianError> {
        let mut out = Vec::new();
        persistence::write_dump(&mut out, &self.store.snapshot(), &self.config)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn unsupported<T>(op: Operation) -> Result<T, LibrarianError> {
    log::warn!("{}: not implemented", op.label());
    Err(LibrarianError::Unsupported(op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PORT_COUNT;

    #[test]
    fn test_session_creation() {
        let librarian = Librarian::new(Configuration::default());
        assert_eq!(librarian.store().active_name(), "Patch #1");
        assert_eq!(librarian.config().input_name(0), Some("PC"));
    }

    #[test]
    fn test_edit_and_switch() {
        let mut librarian = Librarian::new(Configuration::default());
        librarian.select_patch(10).unwrap();
        assert_eq!(librarian.toggle_route(0, 2).unwrap().get(), 3);

        assert_eq!(librarian.select_patch(1).unwrap(), "Patch #1");
        assert_eq!(librarian.store().patches()[8].routing[0].get(), 3);
    }

    #[test]
    fn test_store_errors_pass_through() {
        let mut librarian = Librarian::new(Configuration::default());
        assert!(matches!(
            librarian.select_patch(9),
            Err(LibrarianError::Store(StoreError::InvalidPatchNumber(9)))
        ));
        assert!(matches!(
            librarian.toggle_route(PORT_COUNT, 0),
            Err(LibrarianError::Store(StoreError::IndexOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_unsupported_operations_change_nothing() {
        let mut librarian = Librarian::new(Configuration::default());
        librarian.toggle_route(1, 1).unwrap();
        librarian.drain_events();
        let before = librarian.store().snapshot();
        let path = Path::new("patches.json");

        let results = [
            (Operation::GetPatches, librarian.get_patches()),
            (Operation::SendPatches, librarian.send_patches()),
            (Operation::PastePatch, librarian.paste_patch(Patch::new("X"))),
            (Operation::LoadPatches, librarian.load_patches(path)),
            (Operation::SavePatches, librarian.save_patches(path)),
            (Operation::SaveConfig, librarian.save_config(path)),
        ];
        for (op, result) in results {
            match result {
                Err(LibrarianError::Unsupported(got)) => assert_eq!(got, op),
                other => panic!("{:?} returned {:?}", op, other),
            }
        }
        assert!(matches!(
            librarian.copy_patch(),
            Err(LibrarianError::Unsupported(Operation::CopyPatch))
        ));

        assert_eq!(librarian.store().snapshot(), before);
        assert!(librarian.drain_events().is_empty());
    }

    #[test]
    fn test_dump_includes_pending_edits() {
        let mut librarian = Librarian::new(Configuration::default());
        librarian.toggle_route(0, 7).unwrap();

        let dump = librarian.dump().unwrap();
        let records: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&dump)
            .into_iter::<serde_json::Value>()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["patches"][0]["routing"][0], 8);
        assert_eq!(records[1]["outputs"][3], "MicroBrute");
    }

    #[test]
    fn test_unsupported_message() {
        let err = LibrarianError::Unsupported(Operation::SaveConfig);
        assert_eq!(err.to_string(), "Unsupported operation: Save CNFG");
    }
}
