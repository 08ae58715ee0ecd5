//! Diagnostic logging to stderr

use tracing::Level;
use tracing_subscriber::fmt;

/// Install the global subscriber. Debug output only with `verbose`.
///
/// Stdout carries the tree, so diagnostics always go to stderr.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
