//! Tree formatting and display
//!
//! - `utils` - connector glyphs and prefix bookkeeping
//! - `tree` - `TreeFormatter`, the recursive renderer

mod tree;
mod utils;

pub use tree::TreeFormatter;
pub use utils::{BRANCH, DIR_MARK, FILE_MARK, LAST, SPACE, VERTICAL, child_prefix, connector};
