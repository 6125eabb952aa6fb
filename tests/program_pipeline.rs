mod harness;

use opal::gles::types::{DrawMode, ShaderKind};
use opal::trace::TraceEvent;
use opal::{Gles, GlesError, ObjectKind};
use pretty_assertions::assert_eq;

const QUAD_VS: &str = "attribute vec2 a_pos;\nvoid main() { gl_Position = vec4(a_pos, 0.0, 1.0); }";
const TINT_FS: &str = "uniform vec4 u_tint;\nvoid main() { gl_FragColor = u_tint; }";

fn build_program(gl: &mut impl Gles) -> u32 {
    let vs = gl.create_shader(ShaderKind::Vertex).unwrap();
    gl.shader_source(vs, QUAD_VS).unwrap();
    gl.compile_shader(vs).unwrap();
    assert!(gl.shader_compile_status(vs).unwrap());

    let fs = gl.create_shader(ShaderKind::Fragment).unwrap();
    gl.shader_source(fs, TINT_FS).unwrap();
    gl.compile_shader(fs).unwrap();
    assert!(gl.shader_compile_status(fs).unwrap());

    let program = gl.create_program().unwrap();
    gl.attach_shader(program, vs).unwrap();
    gl.attach_shader(program, fs).unwrap();
    gl.link_program(program).unwrap();
    assert!(gl.link_status(program).unwrap());
    program
}

#[test]
fn a_program_links_and_feeds_uniforms() {
    let mut gl = harness::es2();
    let program = build_program(&mut gl);
    let tint = gl
        .uniform_location(program, "u_tint")
        .unwrap()
        .expect("u_tint is active");

    gl.use_program(program).unwrap();
    gl.uniform_4f(tint, 1.0, 0.5, 0.25, 1.0).unwrap();
    gl.draw_arrays(DrawMode::TriangleFan, 0, 4).unwrap();

    assert!(gl.backend().events().contains(&TraceEvent::DrawArrays {
        mode: DrawMode::TriangleFan,
        first: 0,
        count: 4,
    }));
}

#[test]
fn compile_failure_reports_status_and_log() {
    let mut gl = harness::es2();
    let shader = gl.create_shader(ShaderKind::Fragment).unwrap();
    gl.shader_source(shader, "void main() {\n#error not today\n}").unwrap();
    gl.compile_shader(shader).unwrap();

    assert!(!gl.shader_compile_status(shader).unwrap());
    assert!(gl.shader_info_log(shader).unwrap().contains("#error"));
}

#[test]
fn deleting_the_program_in_use_surfaces_on_the_next_uniform() {
    let mut gl = harness::es2();
    let program = build_program(&mut gl);
    let tint = gl.uniform_location(program, "u_tint").unwrap().unwrap();
    gl.use_program(program).unwrap();
    gl.uniform_4f(tint, 0.0, 0.0, 0.0, 1.0).unwrap();

    gl.delete_program(program).unwrap();
    assert_eq!(gl.current_program(), program);
    assert_eq!(gl.live_objects(ObjectKind::UniformLocation), 0);

    let err = gl
        .uniform_4f(tint, 0.0, 0.0, 0.0, 1.0)
        .expect_err("program was deleted out from under the location");
    let GlesError::UnknownHandle(unknown) = err else {
        panic!("expected unknown handle, got {err:?}");
    };
    assert_eq!(unknown.kind, ObjectKind::Program);
    assert_eq!(unknown.handle, program);
}

#[test]
fn clearing_the_program_stops_uniform_traffic() {
    let mut gl = harness::es2();
    let program = build_program(&mut gl);
    let tint = gl.uniform_location(program, "u_tint").unwrap().unwrap();
    gl.use_program(program).unwrap();
    gl.uniform_4f(tint, 0.0, 0.0, 0.0, 1.0).unwrap();

    gl.use_program(0).unwrap();
    let err = gl
        .uniform_4f(tint, 0.0, 0.0, 0.0, 1.0)
        .expect_err("nothing in use");
    assert_eq!(err, GlesError::NoCurrentProgram);
}

#[test]
fn program_use_is_recorded_in_order() {
    let mut gl = harness::es2();
    let program = build_program(&mut gl);
    gl.use_program(program).unwrap();
    gl.use_program(0).unwrap();

    let uses: Vec<_> = gl
        .backend()
        .events()
        .iter()
        .filter_map(|event| match event {
            TraceEvent::UseProgram { serial } => Some(*serial),
            _ => None,
        })
        .collect();
    assert_eq!(uses.len(), 2);
    assert!(uses[0].is_some());
    assert_eq!(uses[1], None);
}
