//! `opal-gles` adapts a native GL binding that trades in opaque objects to
//! the integer-handle GL ES call surface.
//!
//! The pieces:
//! - [`GlBackend`], the native side: infallible creation of opaque objects,
//!   bind points taking `Option<&T>`, and a sticky error flag.
//! - [`Gles`], the handle-based surface: `u32` handles minted per category,
//!   `Result` returns in place of the error flag, and a profile selected at
//!   construction ([`types::Api`]).
//! - [`Context`], the direct implementation over a backend.
//! - [`Checked`], a wrapper that polls the error flag after every call.
//! - [`Profiler`], a wrapper that tallies calls for a HUD or telemetry.
//!
//! Handles are minted from 1 per category and never reused within a context;
//! 0 is the "no object" value and never resolves. A released handle fails
//! every later lookup with [`UnknownHandle`].

mod backend;
mod checked;
mod context;
mod error;
mod gles;
mod profile;
mod registry;

pub mod types;

#[cfg(test)]
mod tests;

pub use backend::GlBackend;
pub use checked::Checked;
pub use context::Context;
pub use error::GlesError;
pub use gles::Gles;
pub use profile::{GlStats, Profiler, SampleStats};

pub use opal_handle::{ObjectKind, UnknownHandle};
