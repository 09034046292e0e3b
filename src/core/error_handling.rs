//! Generic error formatting utilities
//!
//! Plugin import failures must be surfaced with their full cause chain so
//! that a log entry is enough to diagnose a broken plugin without rerunning
//! the scan under a debugger.

/// Render an error and its complete `source()` chain as a multi-line string.
///
/// The first line is the error itself; each cause follows on its own line.
/// Used wherever the logging contract calls for the equivalent of a full
/// traceback at ERROR level.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str("\ncaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
