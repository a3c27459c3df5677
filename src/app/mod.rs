//! Application module
//!
//! The librarian session used by the front end.

pub mod librarian;

pub use librarian::{Librarian, LibrarianError, Operation};
