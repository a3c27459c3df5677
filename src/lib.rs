//! KMX-8 Librarian Library
//!
//! Patch data model and edit session for the Ensoniq KMX-8 MIDI patch bay.

pub mod app;
pub mod config;
pub mod model;
pub mod persistence;
pub mod store;
