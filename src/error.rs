//! Error types for tree construction and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The path does not exist, or is neither a regular file nor a directory.
    #[error("invalid path '{}': not an existing file or directory", .path.display())]
    InvalidPath { path: PathBuf },

    /// A directory listing yielded something other than a file or directory
    /// (device node, socket, fifo, broken symlink).
    #[error("unsupported entry '{}': not a regular file or directory", .path.display())]
    UnsupportedEntry { path: PathBuf },

    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}
