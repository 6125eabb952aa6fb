mod harness;

use opal::gles::types::{
    BufferTarget, BufferUsage, ClearMask, DrawMode, ErrorCode, VertexAttribType,
};
use opal::trace::TraceEvent;
use opal::{Checked, Gles, GlesError, Profiler};
use pretty_assertions::assert_eq;

#[test]
fn the_plain_context_never_polls_the_flag() {
    let mut gl = harness::es2();
    gl.backend_mut().inject_error(ErrorCode::InvalidOperation);
    gl.clear(ClearMask::COLOR).unwrap();

    // Rewrap the same session; the first checked call drains the pending
    // flag.
    let mut gl = Checked::new(gl);
    let err = gl.clear(ClearMask::COLOR).expect_err("flag was pending");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "clear",
            code: ErrorCode::InvalidOperation,
        }
    );
}

#[test]
fn checked_calls_drain_one_fault_per_poll() {
    let mut gl = harness::checked_es2();
    gl.backend_mut().inject_error(ErrorCode::OutOfMemory);
    gl.backend_mut().inject_error(ErrorCode::InvalidValue);

    let err = gl.flush().expect_err("first fault");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "flush",
            code: ErrorCode::OutOfMemory,
        }
    );
    let err = gl.finish().expect_err("second fault");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "finish",
            code: ErrorCode::InvalidValue,
        }
    );
    gl.flush().unwrap();
}

#[test]
fn profile_gating_composes_with_the_wrappers() {
    let mut gl = Profiler::new(harness::checked_es2());
    let err = gl.gen_vertex_arrays(1).expect_err("vertex arrays are 3.0");
    assert_eq!(err, GlesError::Unsupported("es3.gen_vertex_arrays"));
    assert_eq!(gl.stats().calls, 1);
}

#[test]
fn a_scripted_frame_is_tallied_and_recorded() {
    let mut gl = harness::profiled_es3();

    let buffers = gl.gen_buffers(1).unwrap();
    gl.bind_buffer(BufferTarget::Array, buffers[0]).unwrap();
    gl.buffer_data(BufferTarget::Array, &[0u8; 32], BufferUsage::StaticDraw).unwrap();
    gl.vertex_attrib_pointer(0, 2, VertexAttribType::F32, false, 8, 0).unwrap();
    gl.enable_vertex_attrib_array(0).unwrap();
    gl.clear(ClearMask::COLOR | ClearMask::DEPTH).unwrap();
    gl.draw_arrays(DrawMode::TriangleStrip, 0, 4).unwrap();
    gl.draw_arrays(DrawMode::TriangleStrip, 0, 4).unwrap();

    let stats = gl.stats();
    assert_eq!(stats.draw_calls, 2);
    assert_eq!(stats.vertex_count.total, 8);
    assert_eq!(stats.calls, 8);

    let events = gl.inner().backend().events();
    let draws = events
        .iter()
        .filter(|event| matches!(event, TraceEvent::DrawArrays { .. }))
        .count();
    assert_eq!(draws, 2);
    assert!(events.contains(&TraceEvent::Clear {
        mask: ClearMask::COLOR | ClearMask::DEPTH,
    }));
}
