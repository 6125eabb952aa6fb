#![allow(dead_code)]

use opal::trace::TraceBackend;
use opal::{Checked, Context, Profiler};

/// Installs the test log subscriber; safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn es2() -> Context<TraceBackend> {
    init_logging();
    Context::es2(TraceBackend::new())
}

pub fn es3() -> Context<TraceBackend> {
    init_logging();
    Context::es3(TraceBackend::new())
}

pub fn checked_es2() -> Checked<TraceBackend> {
    Checked::new(es2())
}

pub fn checked_es3() -> Checked<TraceBackend> {
    Checked::new(es3())
}

pub fn profiled_es3() -> Profiler<Checked<TraceBackend>> {
    Profiler::new(checked_es3())
}
