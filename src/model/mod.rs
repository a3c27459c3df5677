//! Patch data model
//!
//! Routing values, patches, ports and the front panel's patch numbering.

pub mod numbering;
pub mod patch;
pub mod port;
pub mod routing;

pub use numbering::{PatchNumber, VALID_PATCH_NUMBERS};
pub use patch::{default_patches, Patch, Routing, PATCH_COUNT};
pub use port::{port_in_range, PortDirection, PORT_COUNT};
pub use routing::{Connection, RoutingError, RoutingValue, MAX_ROUTING_VALUE};
