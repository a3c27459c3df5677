//! Store module
//!
//! The patch store, its notifications to the presentation layer, and argument
//! validation.

pub mod events;
pub mod patch_store;
pub mod validation;

pub use events::StoreEvent;
pub use patch_store::PatchStore;
pub use validation::StoreError;
