//! Tree formatter for plain-text output
//!
//! `TreeFormatter` walks a fully built `Entry` tree in pre-order and writes
//! one line per entry. Each line is the concatenated ancestor segments, the
//! entry's connector, a kind marker and the name. The root is just its name.

use std::io::{self, Write};

use crate::tree::Entry;

use super::utils::{DIR_MARK, FILE_MARK, child_prefix, connector};

/// Formatter for the connector-drawn tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole tree into a string.
    pub fn format(&self, entry: &Entry) -> String {
        let mut output = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write(entry, &mut output);
        String::from_utf8_lossy(&output).into_owned()
    }

    pub fn print(&self, entry: &Entry) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.write(entry, &mut out)?;
        out.flush()
    }

    pub fn write<W: Write>(&self, entry: &Entry, out: &mut W) -> io::Result<()> {
        self.write_node(entry, out, &[], "", true, true)
    }

    fn write_node<W: Write>(
        &self,
        entry: &Entry,
        out: &mut W,
        ancestors: &[&'static str],
        branch: &str,
        is_last_of_parent: bool,
        is_root: bool,
    ) -> io::Result<()> {
        if is_root {
            writeln!(out, "{}", entry.name())?;
        } else {
            for segment in ancestors {
                out.write_all(segment.as_bytes())?;
            }
            let mark = if entry.is_dir() { DIR_MARK } else { FILE_MARK };
            writeln!(out, "{}{}{}", branch, mark, entry.name())?;
        }

        let children = entry.children();
        if children.is_empty() {
            return Ok(());
        }

        let prefix = child_prefix(ancestors, is_last_of_parent, is_root);
        for (i, child) in children.iter().enumerate() {
            let glyph = connector(i, children.len());
            let child_is_last = i + 1 == children.len();
            self.write_node(child, out, &prefix, glyph, child_is_last, false)?;
        }
        Ok(())
    }
}
