//! The patch store.
//!
//! Holds the librarian's 30 patches and the single edit buffer shown in the
//! patch bay. The edit buffer is a working copy of exactly one patch's
//! routing, identified by `edit_index`. It is copied in when that patch is
//! selected and copied back out when another patch is selected; the two are
//! never aliased.
//!
//! The edit buffer starts out all-zero rather than as a copy of patch 0. With
//! factory patches the two agree because every factory routing is zero, but a
//! non-zero patch 0 would not be shown until another patch is selected and
//! then patch 1 again. Selecting the already-active patch only refreshes the
//! name, so it does not load patch 0 either.

use crate::model::{
    default_patches, Connection, Patch, PatchNumber, PortDirection, Routing, RoutingValue,
    PORT_COUNT,
};

use super::events::StoreEvent;
use super::validation::{validate_patch_count, validate_patch_number, validate_port, StoreError};

/// Patch collection plus edit buffer.
#[derive(Debug, Clone)]
pub struct PatchStore {
    /// Backing patches, indexed by store index.
    patches: Vec<Patch>,
    /// Index of the patch the edit buffer belongs to.
    edit_index: usize,
    /// Routing currently being edited.
    edit_buffer: Routing,
    /// Notifications not yet picked up by the presentation layer.
    events: Vec<StoreEvent>,
}

impl PatchStore {
    /// Create a store holding the factory patches, editing patch 1.
    pub fn new() -> Self {
        Self {
            patches: default_patches(),
            edit_index: 0,
            edit_buffer: [RoutingValue::DISCONNECTED; PORT_COUNT],
            events: Vec::new(),
        }
    }

    /// Make the patch with the given front panel number the active one.
    ///
    /// When switching away from another patch, the edit buffer is committed to
    /// that patch first and then overwritten with the new patch's routing.
    /// Selecting the already-active patch changes nothing but still notifies the
    /// presentation layer. Returns the active patch's name.
    pub fn select_patch(&mut self, external_number: u8) -> Result<&str, StoreError> {
        let target = validate_patch_number(external_number)?.index();

        if target != self.edit_index {
            self.patches[self.edit_index].routing = self.edit_buffer;
            self.edit_buffer = self.patches[target].routing;
            self.edit_index = target;
        }

        self.events.push(StoreEvent::PatchSelected {
            index: self.edit_index,
            name: self.patches[self.edit_index].name.clone(),
        });

        Ok(self.active_name())
    }

    /// Toggle the cable between an input and an output in the edit buffer.
    ///
    /// If the output is already fed by that input it is disconnected, otherwise
    /// the input replaces whatever fed it before. Returns the new value.
    pub fn toggle_route(
        &mut self,
        output_index: usize,
        input_index: usize,
    ) -> Result<RoutingValue, StoreError> {
        let output = validate_port(PortDirection::Output, output_index)?;
        let candidate =
            RoutingValue::from_input(input_index).ok_or(StoreError::IndexOutOfRange {
                direction: PortDirection::Input,
                index: input_index,
            })?;

        let value = if self.edit_buffer[output] == candidate {
            RoutingValue::DISCONNECTED
        } else {
            candidate
        };
        self.edit_buffer[output] = value;

        self.events.push(StoreEvent::RouteChanged { output, value });
        Ok(value)
    }

    /// Store index of the active patch.
    pub fn edit_index(&self) -> usize {
        self.edit_index
    }

    /// Front panel number of the active patch, if it has one.
    pub fn active_number(&self) -> Option<PatchNumber> {
        PatchNumber::from_index(self.edit_index)
    }

    /// Display name of the active patch.
    pub fn active_name(&self) -> &str {
        &self.patches[self.edit_index].name
    }

    /// Routing currently being edited.
    pub fn edit_buffer(&self) -> &Routing {
        &self.edit_buffer
    }

    /// Connection state of one output in the edit buffer.
    pub fn connection(&self, output_index: usize) -> Result<Connection, StoreError> {
        let output = validate_port(PortDirection::Output, output_index)?;
        Ok(self.edit_buffer[output].connection())
    }

    /// Connection state of every output, in output order.
    pub fn connections(&self) -> [Connection; PORT_COUNT] {
        self.edit_buffer.map(RoutingValue::connection)
    }

    /// Backing patches as last committed. The active patch's entry does not
    /// include uncommitted edits; see [`PatchStore::snapshot`].
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// The active patch with the edit buffer as its routing.
    pub fn active_patch(&self) -> Patch {
        Patch {
            name: self.active_name().to_string(),
            routing: self.edit_buffer,
        }
    }

    /// Copy of the whole collection with pending edits folded in. The store
    /// itself is not modified.
    pub fn snapshot(&self) -> Vec<Patch> {
        let mut patches = self.patches.clone();
        patches[self.edit_index].routing = self.edit_buffer;
        patches
    }

    /// Replace every patch at once, e.g. after a device fetch or disk load.
    ///
    /// The active index is kept and the edit buffer is reloaded from the new
    /// patch at that index. Uncommitted edits are discarded, and so are pending
    /// events, since the ones queued here redraw everything.
    pub fn replace_patches(&mut self, patches: Vec<Patch>) -> Result<(), StoreError> {
        validate_patch_count(patches.len())?;

        self.patches = patches;
        self.edit_buffer = self.patches[self.edit_index].routing;
        self.events.clear();

        self.events.push(StoreEvent::PatchSelected {
            index: self.edit_index,
            name: self.patches[self.edit_index].name.clone(),
        });
        for (output, &value) in self.edit_buffer.iter().enumerate() {
            self.events.push(StoreEvent::RouteChanged { output, value });
        }
        Ok(())
    }

    /// Take all pending notifications, oldest first.
    ///
    /// Every successful `select_patch` and `toggle_route` queues one event, so
    /// the presentation layer must drain after each call or the queue keeps
    /// growing.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for PatchStore {
    fn default() -> Self {
        Self::new()
    }
}
