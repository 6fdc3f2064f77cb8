//! Document text sources: open editor buffers with a storage fallback.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::project::{self, LoadError};

/// Where the analysis gets file text from.
///
/// An open buffer is authoritative because it reflects unsaved edits.
/// Everything else comes from storage.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// The live text of `path` if it is open in the editor.
    fn open_text(&self, path: &Path) -> Option<Arc<str>>;

    /// The text of `path`, preferring an open buffer over storage.
    async fn read_text(&self, path: &Path) -> Result<Arc<str>, LoadError> {
        match self.open_text(path) {
            Some(text) => Ok(text),
            None => project::load_file(path).await,
        }
    }
}

/// The set of buffers currently open in the editor.
///
/// Owned and mutated by the host; the analysis only reads it.
/// Paths are normalized on the way in and out.
#[derive(Debug, Default)]
pub struct OpenDocuments {
    inner: RwLock<IndexMap<PathBuf, Arc<str>>>,
}

impl OpenDocuments {
    /// Create a new empty document set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as open with the given text.
    pub fn open(&self, path: impl AsRef<Path>, text: impl Into<Arc<str>>) {
        let path = project::normalize_path(path.as_ref());
        self.inner.write().insert(path, text.into());
    }

    /// Replace the text of an open buffer (opens it if needed).
    pub fn update(&self, path: impl AsRef<Path>, text: impl Into<Arc<str>>) {
        self.open(path, text);
    }

    /// Forget a buffer. Returns its last text, if it was open.
    pub fn close(&self, path: impl AsRef<Path>) -> Option<Arc<str>> {
        let path = project::normalize_path(path.as_ref());
        self.inner.write().shift_remove(&path)
    }

    /// Get the text of an open buffer.
    pub fn text(&self, path: impl AsRef<Path>) -> Option<Arc<str>> {
        let path = project::normalize_path(path.as_ref());
        self.inner.read().get(&path).cloned()
    }

    /// Paths of all open buffers, in opening order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inner.read().keys().cloned().collect()
    }

    /// Get the number of open buffers.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if no buffers are open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentSource for OpenDocuments {
    fn open_text(&self, path: &Path) -> Option<Arc<str>> {
        self.text(path)
    }
}
