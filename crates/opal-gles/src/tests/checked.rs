use crate::tests::fake::FakeBackend;
use crate::types::{ClearMask, ErrorCode, TextureTarget};
use crate::{Checked, Context, Gles, GlesError};

fn checked_es2() -> Checked<FakeBackend> {
    Checked::new(Context::es2(FakeBackend::new()))
}

#[test]
fn clean_calls_pass_through() {
    let mut gl = checked_es2();
    assert_eq!(gl.gen_textures(2).unwrap(), vec![1, 2]);
    gl.clear(ClearMask::COLOR | ClearMask::DEPTH).unwrap();
}

#[test]
fn planted_error_surfaces_as_a_driver_error() {
    let mut gl = checked_es2();
    gl.backend_mut().error = Some(ErrorCode::InvalidOperation);

    let err = gl.clear(ClearMask::COLOR).expect_err("flag was set");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "clear",
            code: ErrorCode::InvalidOperation,
        }
    );
}

#[test]
fn the_poll_clears_the_flag() {
    let mut gl = checked_es2();
    gl.backend_mut().error = Some(ErrorCode::OutOfMemory);

    gl.flush().expect_err("flag was set");
    gl.flush().unwrap();
}

#[test]
fn handle_errors_short_circuit_before_the_poll() {
    let mut gl = checked_es2();
    gl.backend_mut().error = Some(ErrorCode::InvalidValue);

    let err = gl
        .bind_texture(TextureTarget::Texture2d, 42)
        .expect_err("never allocated");
    let GlesError::UnknownHandle(_) = err else {
        panic!("expected unknown handle, got {err:?}");
    };

    // The failed call never reached the native side, so the flag is still
    // pending for the next delegated call.
    let err = gl.finish().expect_err("flag survived the failed call");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "finish",
            code: ErrorCode::InvalidValue,
        }
    );
}

#[test]
fn read_only_accessors_skip_the_poll() {
    let mut gl = checked_es2();
    let texture = gl.gen_textures(1).unwrap()[0];
    gl.backend_mut().error = Some(ErrorCode::InvalidEnum);

    assert!(gl.is_texture(texture));
    assert_eq!(gl.current_program(), 0);

    let err = gl.flush().expect_err("flag only drains through delegated calls");
    assert_eq!(
        err,
        GlesError::Driver {
            call: "flush",
            code: ErrorCode::InvalidEnum,
        }
    );
}
