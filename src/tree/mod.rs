//! Entry model and filesystem scan
//!
//! A directory is scanned once into a complete, read-only `Entry` tree before
//! anything is rendered, so a failed scan never produces partial output.
//!
//! - `entry` - the `Entry` node type
//! - `fs` - the `FileSystem` seam and its `std::fs` implementation
//! - `builder` - `EntryBuilder`, the recursive scan

mod builder;
mod entry;
mod fs;

pub use builder::{EntryBuilder, build};
pub use entry::{Entry, EntryKind};
pub use fs::{DiskFs, FileSystem, NodeKind};
