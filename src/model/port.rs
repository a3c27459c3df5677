//! Patch bay ports.
//!
//! The KMX-8 has eight MIDI inputs and eight MIDI outputs. Ports are addressed
//! by zero-based index.

/// Number of inputs and of outputs on the patch bay.
pub const PORT_COUNT: usize = 8;

/// Side of the patch bay a port sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortDirection {
    /// A MIDI input jack (a routing source).
    Input,
    /// A MIDI output jack (a routing destination).
    Output,
}

impl PortDirection {
    /// Returns a human-readable name for the port direction.
    pub fn name(&self) -> &'static str {
        match self {
            PortDirection::Input => "Input",
            PortDirection::Output => "Output",
        }
    }
}

/// Returns true if `index` addresses a port. Both sides have the same count.
pub fn port_in_range(index: usize) -> bool {
    index < PORT_COUNT
}
