//! ppp - draw a directory as a tree of connector glyphs

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::Path;

pub use error::{Error, Result};
pub use output::TreeFormatter;
pub use tree::{DiskFs, Entry, EntryBuilder, EntryKind, FileSystem, NodeKind, build};

/// Scan `path` and print its tree to stdout.
///
/// Nothing is printed unless the whole scan succeeds.
pub fn print_folder(path: impl AsRef<Path>) -> Result<()> {
    let tree = build(path)?;
    TreeFormatter::new().print(&tree)?;
    Ok(())
}
