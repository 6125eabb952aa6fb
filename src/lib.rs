//! Umbrella crate for the handle-table GL ES surface.
//!
//! - [`gles`]: the call surface, the context and its wrappers.
//! - [`handle`]: the per-category handle tables underneath it.
//! - [`trace`]: a recording backend for tests and debugging.
//!
//! The commonly used names are re-exported at the top level.

pub use opal_gles as gles;
pub use opal_handle as handle;
pub use opal_trace as trace;

pub use opal_gles::{
    Checked, Context, GlBackend, Gles, GlesError, GlStats, ObjectKind, Profiler, SampleStats,
    UnknownHandle,
};
