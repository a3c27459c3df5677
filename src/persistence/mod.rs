//! Persistence module
//!
//! Structural dump of patches and configuration using serde and JSON.

pub mod dump;

pub use dump::{dump_config, dump_patches, parse_patches, write_dump, DumpError, PatchDump};
