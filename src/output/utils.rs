//! Connector glyphs and prefix bookkeeping

/// Ancestor segment when that ancestor still has siblings below it.
pub const VERTICAL: &str = "│  ";
/// Connector for every child except the last.
pub const BRANCH: &str = "├──";
/// Connector for the last child.
pub const LAST: &str = "└──";
/// Ancestor segment when that ancestor was the last of its siblings.
pub const SPACE: &str = "   ";

/// Marker between connector and name on a file line.
pub const FILE_MARK: &str = "─";
/// Marker between connector and name on a directory line.
pub const DIR_MARK: &str = "●";

/// Connector drawn before a child at `index` among `len` siblings.
pub fn connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len { LAST } else { BRANCH }
}

/// Prefix list handed to the children of an entry.
///
/// Returns a fresh copy: siblings never see each other's segments. The root
/// owns no incoming connector and adds no segment.
pub fn child_prefix(
    ancestors: &[&'static str],
    is_last_of_parent: bool,
    is_root: bool,
) -> Vec<&'static str> {
    let mut local = ancestors.to_vec();
    if !is_last_of_parent {
        local.push(VERTICAL);
    } else if !is_root {
        local.push(SPACE);
    }
    local
}
