use crate::tests::fake::FakeBackend;
use crate::types::{ClearMask, DrawMode, ErrorCode, TextureTarget};
use crate::{Checked, Context, Gles, GlesError, GlStats, Profiler};

#[test]
fn draw_calls_and_vertices_are_tallied() {
    let mut gl = Profiler::new(Context::es2(FakeBackend::new()));
    gl.clear(ClearMask::COLOR).unwrap();
    gl.draw_arrays(DrawMode::Triangles, 0, 3).unwrap();
    gl.draw_arrays(DrawMode::Triangles, 0, 9).unwrap();

    let stats = gl.stats();
    assert_eq!(stats.calls, 3);
    assert_eq!(stats.draw_calls, 2);
    assert_eq!(stats.vertex_count.total, 12);
    assert_eq!(stats.vertex_count.min, 3);
    assert_eq!(stats.vertex_count.max, 9);
    assert_eq!(stats.vertex_count.mean(), 6.0);
}

#[test]
fn shader_switches_and_texture_binds_are_tallied() {
    let mut gl = Profiler::new(Context::es2(FakeBackend::new()));
    let program = gl.create_program().unwrap();
    gl.use_program(program).unwrap();
    gl.use_program(0).unwrap();
    let texture = gl.gen_textures(1).unwrap()[0];
    gl.bind_texture(TextureTarget::Texture2d, texture).unwrap();

    assert_eq!(gl.stats().shader_switches, 2);
    assert_eq!(gl.stats().texture_binds, 1);
}

#[test]
fn failed_calls_still_count() {
    let mut gl = Profiler::new(Context::es2(FakeBackend::new()));
    gl.gen_vertex_arrays(1).expect_err("vertex arrays are 3.0");
    gl.bind_texture(TextureTarget::Texture2d, 9)
        .expect_err("never allocated");

    assert_eq!(gl.stats().calls, 2);
    assert_eq!(gl.stats().texture_binds, 1);
}

#[test]
fn read_only_accessors_are_not_tallied() {
    let mut gl = Profiler::new(Context::es2(FakeBackend::new()));
    let texture = gl.gen_textures(1).unwrap()[0];
    assert!(gl.is_texture(texture));
    assert_eq!(gl.current_program(), 0);

    assert_eq!(gl.stats().calls, 1);
}

#[test]
fn reset_zeroes_the_tally() {
    let mut gl = Profiler::new(Context::es2(FakeBackend::new()));
    gl.draw_arrays(DrawMode::Points, 0, 1).unwrap();
    gl.reset_stats();

    assert_eq!(*gl.stats(), GlStats::default());
}

#[test]
fn profiler_stacks_over_the_checking_wrapper() {
    let mut gl = Profiler::new(Checked::new(Context::es2(FakeBackend::new())));
    gl.inner_mut().backend_mut().error = Some(ErrorCode::InvalidOperation);

    let err = gl
        .draw_arrays(DrawMode::Triangles, 0, 3)
        .expect_err("flag was set");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "draw_arrays",
            code: ErrorCode::InvalidOperation,
        }
    );
    assert_eq!(gl.stats().draw_calls, 1);
}
