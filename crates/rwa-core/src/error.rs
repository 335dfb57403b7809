//! Error types for the shell's process boundary.
//!
//! Navigation itself never fails. These errors only come out of parsing
//! user-supplied text (page ids, scripted steps, viewport widths).

/// Error type for the RWA shell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// A string did not name any known page.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// A scripted navigation step could not be parsed.
    #[error("invalid step `{step}`: {reason}")]
    InvalidStep { step: String, reason: String },

    /// A viewport width was not a usable number of pixels.
    #[error("invalid viewport width: {0}")]
    InvalidViewport(String),
}
