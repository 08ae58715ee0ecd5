//! EntryBuilder - scans a directory into a complete in-memory tree

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::entry::{Entry, entry_name};
use super::fs::{DiskFs, FileSystem, NodeKind};

/// Builds an `Entry` tree by scanning a filesystem once, depth first.
///
/// The whole tree is materialized before `build` returns. The first problem
/// aborts the scan; there is no partial tree.
pub struct EntryBuilder<F = DiskFs> {
    fs: F,
}

impl EntryBuilder<DiskFs> {
    pub fn new() -> Self {
        Self { fs: DiskFs }
    }
}

impl Default for EntryBuilder<DiskFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> EntryBuilder<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    pub fn build(&self, root: &Path) -> Result<Entry> {
        let entry = match self.fs.kind(root) {
            Some(NodeKind::File) => self.build_file(root),
            Some(NodeKind::Directory) => self.build_dir(root)?,
            Some(NodeKind::Other) | None => {
                return Err(Error::InvalidPath {
                    path: root.to_path_buf(),
                });
            }
        };
        debug!(
            root = %root.display(),
            entries = entry.entry_count(),
            "built tree"
        );
        Ok(entry)
    }

    fn build_file(&self, path: &Path) -> Entry {
        trace!(path = %path.display(), "file");
        Entry::File {
            name: entry_name(path),
            path: path.to_path_buf(),
        }
    }

    fn build_dir(&self, path: &Path) -> Result<Entry> {
        let listed = self.fs.list(path).map_err(|source| Error::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), children = listed.len(), "listed directory");

        let mut children = Vec::with_capacity(listed.len());
        for child in &listed {
            let entry = match self.fs.kind(child) {
                Some(NodeKind::File) => self.build_file(child),
                Some(NodeKind::Directory) => self.build_dir(child)?,
                Some(NodeKind::Other) => {
                    return Err(Error::UnsupportedEntry {
                        path: child.clone(),
                    });
                }
                // Listed a moment ago, gone now
                None => {
                    return Err(Error::InvalidPath {
                        path: child.clone(),
                    });
                }
            };
            children.push(entry);
        }

        Ok(Entry::Directory {
            name: entry_name(path),
            path: path.to_path_buf(),
            children,
        })
    }
}

/// Scan `path` from disk into a complete tree.
pub fn build(path: impl AsRef<Path>) -> Result<Entry> {
    EntryBuilder::new().build(path.as_ref())
}
