//! Document root and target resolution
//!
//! This module decides which local path a request target refers to, whether
//! that path is the reserved redirect name, and how its contents are read.

use std::path::{Path, PathBuf};

use crate::config::StaticFilesConfig;

/// How a served file's contents are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Bytes are sent exactly as stored.
    Binary,
    /// Contents are decoded as text and re-encoded as UTF-8.
    Text,
}

/// The directory requests are served from, plus its naming conventions.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    index: String,
    redirect: PathBuf,
    redirect_location: String,
    binary_extensions: Vec<String>,
    confine_to_root: bool,
}

impl DocumentRoot {
    pub fn new(config: &StaticFilesConfig) -> Self {
        Self {
            root: config.root.clone(),
            index: config.index.clone(),
            redirect: config.root.join(&config.redirect_path),
            redirect_location: config.redirect_location.clone(),
            binary_extensions: config.binary_extensions.clone(),
            confine_to_root: config.confine_to_root,
        }
    }

    /// Where the redirect pseudo-path points clients.
    pub fn redirect_location(&self) -> &str {
        &self.redirect_location
    }

    /// Maps a request target onto a path under the document root.
    ///
    /// `/` maps to the index document. Any other target drops its query and
    /// fragment and is joined to the root without its leading slash. When
    /// confinement is on, `.` segments are skipped and `..` never climbs
    /// above the root. This is lexical only; symlinks are checked by
    /// [`DocumentRoot::confines`].
    pub fn resolve(&self, target: &str) -> PathBuf {
        let path = target.split(['?', '#']).next().unwrap_or_default();

        if path == "/" {
            return self.root.join(&self.index);
        }

        let relative = path.trim_start_matches('/');
        if !self.confine_to_root {
            return self.root.join(relative);
        }

        let mut clean = PathBuf::new();
        for segment in relative.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    clean.pop();
                }
                segment => clean.push(segment),
            }
        }

        self.root.join(clean)
    }

    /// Whether `path`, with symlinks followed, still lies under the root.
    ///
    /// Always true when confinement is off. A path that cannot be
    /// canonicalized does not exist, so there is nothing to escape with.
    pub fn confines(&self, path: &Path) -> bool {
        if !self.confine_to_root {
            return true;
        }

        let Ok(resolved) = path.canonicalize() else {
            return true;
        };

        match self.root.canonicalize() {
            Ok(root) => resolved.starts_with(root),
            Err(_) => false,
        }
    }

    /// Whether `path` is the reserved redirect pseudo-path.
    pub fn is_redirect(&self, path: &Path) -> bool {
        path == self.redirect
    }

    /// Binary for the configured extensions, text for everything else,
    /// including files with no extension at all.
    pub fn read_mode(&self, path: &Path) -> ReadMode {
        let binary = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.binary_extensions
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false);

        if binary { ReadMode::Binary } else { ReadMode::Text }
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new(&StaticFilesConfig::default())
    }
}
