//! In-memory entry model: one node per file or directory

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of a filesystem node the tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("File"),
            EntryKind::Directory => f.write_str("Directory"),
        }
    }
}

/// A file or a directory, with a directory's children fully materialized.
///
/// Children keep the order the filesystem listed them in; they are never sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File {
        name: String,
        path: PathBuf,
    },
    Directory {
        name: String,
        path: PathBuf,
        children: Vec<Entry>,
    },
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Entry::File {
            name: entry_name(&path),
            path,
        }
    }

    pub fn directory(path: impl Into<PathBuf>, children: Vec<Entry>) -> Self {
        let path = path.into();
        Entry::Directory {
            name: entry_name(&path),
            path,
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } => name,
            Entry::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } => path,
            Entry::Directory { path, .. } => path,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File { .. } => EntryKind::File,
            Entry::Directory { .. } => EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }

    /// Children of a directory; always empty for a file.
    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::File { .. } => &[],
            Entry::Directory { children, .. } => children.as_slice(),
        }
    }

    /// Number of entries in this subtree, counting `self`.
    pub fn entry_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Entry::entry_count)
            .sum::<usize>()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base name of `path`, or the path text itself when it has no final
/// component (`.`, `..`, `/`).
pub(crate) fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
