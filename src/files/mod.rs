//! File-system side of the server
//!
//! `DocumentRoot` maps request targets onto paths under the served directory,
//! and `FileStore` is the small read-only interface the response handler uses
//! to look those paths up.

pub mod root;
pub mod store;

pub use root::{DocumentRoot, ReadMode};
pub use store::{DiskStore, FileStore};
