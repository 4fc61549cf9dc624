//! Notes persistence — the whole collection lives in one JSON file.
//!
//! Every mutation reads the full collection, edits it in memory and writes it
//! back. `NoteStore` serializes those read-modify-write cycles.

pub mod error;
pub mod file_ops;
pub mod store;

pub use error::NoteStoreError;
pub use store::{Change, NoteStore};
