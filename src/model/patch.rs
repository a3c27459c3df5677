//! Patches.
//!
//! A patch is the unit the KMX-8 stores and recalls: a display name plus one
//! routing value per output.

use serde::{Deserialize, Serialize};

use super::port::PORT_COUNT;
use super::routing::RoutingValue;

/// Number of patch slots held by the librarian.
pub const PATCH_COUNT: usize = 30;

/// One routing value per output, indexed by output.
pub type Routing = [RoutingValue; PORT_COUNT];

/// A named routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    /// Human-readable name for the patch.
    pub name: String,
    /// Source for each output slot.
    pub routing: Routing,
}

impl Patch {
    /// Create a patch with nothing connected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routing: [RoutingValue::DISCONNECTED; PORT_COUNT],
        }
    }

    /// The factory patch for a store slot: "Patch #1" for index 0 and so on.
    pub fn default_for(index: usize) -> Self {
        Self::new(format!("Patch #{}", index + 1))
    }

    /// Number of outputs with a source.
    pub fn connection_count(&self) -> usize {
        self.routing.iter().filter(|v| v.is_connected()).count()
    }
}

/// The full factory patch set.
pub fn default_patches() -> Vec<Patch> {
    (0..PATCH_COUNT).map(Patch::default_for).collect()
}
