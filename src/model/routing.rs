//! Routing values.
//!
//! Every output slot of a patch stores a single small integer describing what
//! feeds it:
//!
//! | Value | Meaning                          |
//! |-------|----------------------------------|
//! | 0     | output not connected             |
//! | 1-8   | connected to input `value - 1`   |
//! | 9     | merged connection                |
//!
//! Nothing in the editor produces a merged value. It only arrives through a
//! full patch load and must survive a dump and reload unchanged.

use serde::{Deserialize, Serialize};

use super::port::port_in_range;

/// Largest valid routing value.
pub const MAX_ROUTING_VALUE: u8 = 9;

/// The source feeding one output slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoutingValue(u8);

impl RoutingValue {
    /// Output not connected to anything.
    pub const DISCONNECTED: RoutingValue = RoutingValue(0);

    /// Reserved "merged connection" marker.
    pub const MERGED: RoutingValue = RoutingValue(MAX_ROUTING_VALUE);

    /// Create a routing value, rejecting anything above 9.
    pub fn new(value: u8) -> Result<Self, RoutingError> {
        if value > MAX_ROUTING_VALUE {
            return Err(RoutingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The value that connects an output to the given zero-based input.
    ///
    /// Returns `None` if `input_index` is not a port on the patch bay.
    pub fn from_input(input_index: usize) -> Option<Self> {
        if port_in_range(input_index) {
            Some(Self(input_index as u8 + 1))
        } else {
            None
        }
    }

    /// Raw stored value.
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_connected(self) -> bool {
        self.0 != 0
    }

    pub fn is_merged(self) -> bool {
        self == Self::MERGED
    }

    /// Zero-based input feeding the output, if it is a plain connection.
    pub fn source_input(self) -> Option<usize> {
        match self.0 {
            1..=8 => Some(self.0 as usize - 1),
            _ => None,
        }
    }

    /// How the presentation layer should draw this slot.
    pub fn connection(self) -> Connection {
        match self.0 {
            0 => Connection::Open,
            MAX_ROUTING_VALUE => Connection::Merged,
            v => Connection::Input(v as usize - 1),
        }
    }
}

impl TryFrom<u8> for RoutingValue {
    type Error = RoutingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoutingValue> for u8 {
    fn from(value: RoutingValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for RoutingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection state of one output, as seen by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    /// No line is drawn.
    Open,
    /// A line runs from the given zero-based input.
    Input(usize),
    /// Merged connection.
    Merged,
}

/// Error for routing values outside 0-9.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutingError {
    OutOfRange(u8),
}

impl std::fmt::Display for RoutingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(v) => {
                write!(f, "Routing value {} out of range (0-{})", v, MAX_ROUTING_VALUE)
            }
        }
    }
}

impl std::error::Error for RoutingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for v in 0..=9 {
            assert_eq!(RoutingValue::new(v).unwrap().get(), v);
        }
        assert_eq!(RoutingValue::new(10), Err(RoutingError::OutOfRange(10)));
        assert!(RoutingValue::new(255).is_err());
    }

    #[test]
    fn test_from_input() {
        assert_eq!(RoutingValue::from_input(0).unwrap().get(), 1);
        assert_eq!(RoutingValue::from_input(7).unwrap().get(), 8);
        assert!(RoutingValue::from_input(8).is_none());
    }

    #[test]
    fn test_connection_view() {
        assert_eq!(RoutingValue::DISCONNECTED.connection(), Connection::Open);
        assert_eq!(RoutingValue::new(3).unwrap().connection(), Connection::Input(2));
        assert_eq!(RoutingValue::MERGED.connection(), Connection::Merged);
    }

    #[test]
    fn test_source_input_skips_merged() {
        assert_eq!(RoutingValue::new(1).unwrap().source_input(), Some(0));
        assert_eq!(RoutingValue::MERGED.source_input(), None);
        assert_eq!(RoutingValue::DISCONNECTED.source_input(), None);
        assert!(RoutingValue::MERGED.is_connected());
        assert!(RoutingValue::MERGED.is_merged());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&RoutingValue::MERGED).unwrap();
        assert_eq!(json, "9");

        let parsed: RoutingValue = serde_json::from_str("4").unwrap();
        assert_eq!(parsed.get(), 4);

        assert!(serde_json::from_str::<RoutingValue>("10").is_err());
    }
}
