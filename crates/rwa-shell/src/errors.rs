//! Error handling and exit codes.

use rwa_core::constants::exit_codes;
use rwa_core::ShellError;

/// Exit code for an error that reached `main`.
///
/// Errors from user-supplied flags or scripts are configuration errors,
/// anything else is generic.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ShellError>() {
        Some(
            ShellError::UnknownPage(_)
            | ShellError::InvalidStep { .. }
            | ShellError::InvalidViewport(_),
        ) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
