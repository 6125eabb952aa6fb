use opal_handle::UnknownHandle;
use thiserror::Error;

use crate::types::ErrorCode;

/// Error union for every call on the GL surface.
///
/// The native API reports failures through a sticky error flag that callers
/// poll after the fact; here every operation returns a `Result` instead, so
/// nothing can be lost by forgetting to poll.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlesError {
    /// A handle did not resolve: never allocated, already deleted, or 0.
    #[error(transparent)]
    UnknownHandle(#[from] UnknownHandle),
    /// A uniform operation was issued while no program is in use.
    #[error("no program is in use")]
    NoCurrentProgram,
    /// The operation does not exist on this context's profile, or the
    /// platform can never serve it.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    /// The native error flag was set after a delegated call. Only reported
    /// by the checking wrapper; the plain context never polls the flag.
    #[error("driver reported {code} after {call}")]
    Driver { call: &'static str, code: ErrorCode },
}
