mod harness;

use opal::gles::types::BufferTarget;
use opal::{Gles, GlesError, ObjectKind};
use pretty_assertions::assert_eq;

#[test]
fn handles_stay_unique_for_the_life_of_a_context() {
    let mut gl = harness::es2();
    let first = gl.gen_textures(3).unwrap();
    assert_eq!(first, vec![1, 2, 3]);

    gl.delete_textures(&[first[1]]).unwrap();
    let second = gl.gen_textures(2).unwrap();
    assert_eq!(second, vec![4, 5]);

    assert!(!gl.is_texture(2));
    assert!(gl.is_texture(3));
}

#[test]
fn categories_count_independently() {
    let mut gl = harness::es3();
    gl.gen_textures(2).unwrap();
    gl.gen_buffers(1).unwrap();
    let samplers = gl.gen_samplers(2).unwrap();
    assert_eq!(samplers, vec![1, 2]);

    assert_eq!(gl.live_objects(ObjectKind::Texture), 2);
    assert_eq!(gl.live_objects(ObjectKind::Buffer), 1);
    assert_eq!(gl.live_objects(ObjectKind::Sampler), 2);
    assert_eq!(gl.live_objects(ObjectKind::Framebuffer), 0);
}

#[test]
fn native_objects_are_retired_with_their_handles() {
    let mut gl = harness::es2();
    let textures = gl.gen_textures(2).unwrap();
    let renderbuffers = gl.gen_renderbuffers(1).unwrap();
    gl.delete_textures(&textures).unwrap();
    gl.delete_renderbuffers(&renderbuffers).unwrap();

    let backend = gl.backend();
    assert_eq!(backend.live(ObjectKind::Texture), 0);
    assert_eq!(backend.live(ObjectKind::Renderbuffer), 0);
}

#[test]
fn two_contexts_do_not_share_handle_space() {
    let mut left = harness::es2();
    let mut right = harness::es2();

    let in_left = left.gen_buffers(2).unwrap();
    let in_right = right.gen_buffers(1).unwrap();
    assert_eq!(in_left, vec![1, 2]);
    assert_eq!(in_right, vec![1]);

    // A handle minted by one context means nothing to the other.
    let err = right
        .bind_buffer(BufferTarget::Array, in_left[1])
        .expect_err("handle from another context");
    let GlesError::UnknownHandle(unknown) = err else {
        panic!("expected unknown handle, got {err:?}");
    };
    assert_eq!(unknown.kind, ObjectKind::Buffer);
    assert_eq!(unknown.handle, in_left[1]);
}
