//! Filesystem access used while scanning

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a path resolves to on the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
    /// Exists, but is neither a regular file nor a directory.
    Other,
}

/// The two questions the scan asks of a filesystem.
pub trait FileSystem {
    /// Kind of the object at `path`, or `None` if nothing is there.
    fn kind(&self, path: &Path) -> Option<NodeKind>;

    /// Immediate children of the directory at `path`, in listing order.
    fn list(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// `FileSystem` backed by `std::fs`. Symlinks are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn kind(&self, path: &Path) -> Option<NodeKind> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Some(NodeKind::File),
            Ok(meta) if meta.is_dir() => Some(NodeKind::Directory),
            Ok(_) => Some(NodeKind::Other),
            // A dangling symlink still occupies its name in the listing
            Err(_) if fs::symlink_metadata(path).is_ok() => Some(NodeKind::Other),
            Err(_) => None,
        }
    }

    fn list(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_disk_kinds() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert_eq!(DiskFs.kind(&file), Some(NodeKind::File));
        assert_eq!(DiskFs.kind(&sub), Some(NodeKind::Directory));
        assert_eq!(DiskFs.kind(&dir.path().join("missing")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_disk_broken_symlink_is_other() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        assert_eq!(DiskFs.kind(&link), Some(NodeKind::Other));
    }

    #[test]
    fn test_disk_list_joins_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("only.txt"), "").unwrap();

        let listed = DiskFs.list(dir.path()).unwrap();
        assert_eq!(listed, vec![dir.path().join("only.txt")]);
    }

    #[test]
    fn test_disk_list_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        assert!(DiskFs.list(&dir.path().join("missing")).is_err());
    }
}
