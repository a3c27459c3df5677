//! Store events
//!
//! Notifications queued by the patch store for the presentation layer. The
//! presentation layer drains them after each call and redraws what changed.

use crate::model::RoutingValue;

/// Something the presentation layer needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A patch became (or stayed) the active one. Refresh the name label and
    /// every connection line.
    PatchSelected {
        /// Store index of the active patch.
        index: usize,
        /// Its display name.
        name: String,
    },

    /// One output's source changed in the edit buffer.
    RouteChanged {
        /// Zero-based output.
        output: usize,
        /// New routing value for that output.
        value: RoutingValue,
    },
}
