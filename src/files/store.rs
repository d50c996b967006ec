//! Read access to served files

use std::io;
use std::path::Path;

/// Lookup and read operations the response handler needs.
///
/// Implementations must be shareable across connection tasks.
pub trait FileStore: Send + Sync {
    /// Whether `path` names a regular file that can be served.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the file untouched.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Reads the file as UTF-8 text.
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// `FileStore` backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
