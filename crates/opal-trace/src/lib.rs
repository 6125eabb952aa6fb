//! `opal-trace` is a recording [`GlBackend`] for tests and debugging.
//!
//! Objects are newtypes over a backend-wide serial, so a value from one
//! category cannot be passed where another is expected. The backend records
//! lifecycle, program and draw events, answers live-object queries from that
//! record, and can have native error codes queued up to exercise the
//! checking wrapper's flag-polling path.

use std::collections::VecDeque;

use hashbrown::HashMap;
use opal_gles::types::{
    Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, ErrorCode, FramebufferStatus, FramebufferTarget, FrontFace,
    IndexedBufferTarget, IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};
use opal_gles::{GlBackend, ObjectKind};

/// Macro to define an opaque traced object type.
macro_rules! define_object {
    ($name:ident) => {
        /// Opaque object minted by [`TraceBackend`]; identity is the serial.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(u64);

        impl $name {
            /// Backend-wide serial this object was minted with.
            pub fn serial(&self) -> u64 {
                self.0
            }
        }
    };
}

define_object!(TraceTexture);
define_object!(TraceBuffer);
define_object!(TraceFramebuffer);
define_object!(TraceRenderbuffer);
define_object!(TraceShader);
define_object!(TraceProgram);
define_object!(TraceQuery);
define_object!(TraceSampler);
define_object!(TraceTransformFeedback);
define_object!(TraceVertexArray);
define_object!(TraceUniform);

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Create { kind: ObjectKind, serial: u64 },
    Delete { kind: ObjectKind, serial: u64 },
    UseProgram { serial: Option<u64> },
    UniformLookup { program: u64, name: String, found: bool },
    Clear { mask: ClearMask },
    DrawArrays { mode: DrawMode, first: i32, count: i32 },
    DrawElements { mode: DrawMode, count: i32, ty: IndexType },
}

/// Recording backend. Shader sources are kept verbatim; a source containing
/// an `#error` directive reports compilation failure, everything else
/// compiles and links clean.
pub struct TraceBackend {
    next_serial: u64,
    events: Vec<TraceEvent>,
    injected_errors: VecDeque<ErrorCode>,
    inactive_uniforms: Vec<String>,
    shader_sources: HashMap<u64, String>,
    framebuffer_status: FramebufferStatus,
}

impl TraceBackend {
    pub fn new() -> Self {
        Self {
            next_serial: 0,
            events: Vec::new(),
            injected_errors: VecDeque::new(),
            inactive_uniforms: Vec::new(),
            shader_sources: HashMap::new(),
            framebuffer_status: FramebufferStatus::Complete,
        }
    }

    /// Everything recorded so far, in call order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Drains the record, e.g. between frames of a scripted scene.
    pub fn take_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Creations minus deletions for one category, from the event record.
    pub fn live(&self, kind: ObjectKind) -> i64 {
        self.events
            .iter()
            .map(|event| match event {
                TraceEvent::Create { kind: k, .. } if *k == kind => 1,
                TraceEvent::Delete { kind: k, .. } if *k == kind => -1,
                _ => 0,
            })
            .sum()
    }

    /// Queues a native error code; each queued code satisfies exactly one
    /// [`GlBackend::take_error`] poll, in queue order.
    pub fn inject_error(&mut self, code: ErrorCode) {
        self.injected_errors.push_back(code);
    }

    /// Marks a uniform name as not active: lookups for it resolve to `None`.
    pub fn mark_inactive_uniform(&mut self, name: &str) {
        self.inactive_uniforms.push(name.to_owned());
    }

    /// Status reported by every completeness check until changed.
    pub fn set_framebuffer_status(&mut self, status: FramebufferStatus) {
        self.framebuffer_status = status;
    }

    fn mint(&mut self, kind: ObjectKind) -> u64 {
        self.next_serial += 1;
        self.events.push(TraceEvent::Create {
            kind,
            serial: self.next_serial,
        });
        self.next_serial
    }

    fn retire(&mut self, kind: ObjectKind, serial: u64) {
        self.events.push(TraceEvent::Delete { kind, serial });
    }

    fn shader_has_error_directive(&self, shader: &TraceShader) -> bool {
        self.shader_sources
            .get(&shader.serial())
            .is_some_and(|source| source.contains("#error"))
    }
}

impl Default for TraceBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GlBackend for TraceBackend {
    type Texture = TraceTexture;
    type Buffer = TraceBuffer;
    type Framebuffer = TraceFramebuffer;
    type Renderbuffer = TraceRenderbuffer;
    type Shader = TraceShader;
    type Program = TraceProgram;
    type Query = TraceQuery;
    type Sampler = TraceSampler;
    type TransformFeedback = TraceTransformFeedback;
    type VertexArray = TraceVertexArray;
    type UniformLocation = TraceUniform;

    fn create_texture(&mut self) -> TraceTexture {
        TraceTexture(self.mint(ObjectKind::Texture))
    }

    fn delete_texture(&mut self, texture: TraceTexture) {
        self.retire(ObjectKind::Texture, texture.serial());
    }

    fn bind_texture(&mut self, _target: TextureTarget, _texture: Option<&TraceTexture>) {}

    fn active_texture(&mut self, _unit: u32) {}

    fn tex_parameter_i(&mut self, _target: TextureTarget, _pname: u32, _value: i32) {}

    fn tex_image_2d(
        &mut self,
        _target: TexImageTarget,
        _level: i32,
        _internal_format: i32,
        _width: i32,
        _height: i32,
        _format: u32,
        _ty: u32,
        _pixels: Option<&[u8]>,
    ) {
    }

    fn generate_mipmap(&mut self, _target: TextureTarget) {}

    fn create_buffer(&mut self) -> TraceBuffer {
        TraceBuffer(self.mint(ObjectKind::Buffer))
    }

    fn delete_buffer(&mut self, buffer: TraceBuffer) {
        self.retire(ObjectKind::Buffer, buffer.serial());
    }

    fn bind_buffer(&mut self, _target: BufferTarget, _buffer: Option<&TraceBuffer>) {}

    fn bind_buffer_base(
        &mut self,
        _target: IndexedBufferTarget,
        _index: u32,
        _buffer: Option<&TraceBuffer>,
    ) {
    }

    fn bind_buffer_range(
        &mut self,
        _target: IndexedBufferTarget,
        _index: u32,
        _buffer: Option<&TraceBuffer>,
        _offset: isize,
        _size: isize,
    ) {
    }

    fn buffer_data(&mut self, _target: BufferTarget, _data: &[u8], _usage: BufferUsage) {}

    fn buffer_sub_data(&mut self, _target: BufferTarget, _offset: i32, _data: &[u8]) {}

    fn create_framebuffer(&mut self) -> TraceFramebuffer {
        TraceFramebuffer(self.mint(ObjectKind::Framebuffer))
    }

    fn delete_framebuffer(&mut self, framebuffer: TraceFramebuffer) {
        self.retire(ObjectKind::Framebuffer, framebuffer.serial());
    }

    fn bind_framebuffer(
        &mut self,
        _target: FramebufferTarget,
        _framebuffer: Option<&TraceFramebuffer>,
    ) {
    }

    fn framebuffer_texture_2d(
        &mut self,
        _target: FramebufferTarget,
        _attachment: Attachment,
        _tex_target: TexImageTarget,
        _texture: Option<&TraceTexture>,
        _level: i32,
    ) {
    }

    fn framebuffer_texture_layer(
        &mut self,
        _target: FramebufferTarget,
        _attachment: Attachment,
        _texture: Option<&TraceTexture>,
        _level: i32,
        _layer: i32,
    ) {
    }

    fn framebuffer_renderbuffer(
        &mut self,
        _target: FramebufferTarget,
        _attachment: Attachment,
        _renderbuffer: Option<&TraceRenderbuffer>,
    ) {
    }

    fn check_framebuffer_status(&mut self, _target: FramebufferTarget) -> FramebufferStatus {
        self.framebuffer_status
    }

    fn create_renderbuffer(&mut self) -> TraceRenderbuffer {
        TraceRenderbuffer(self.mint(ObjectKind::Renderbuffer))
    }

    fn delete_renderbuffer(&mut self, renderbuffer: TraceRenderbuffer) {
        self.retire(ObjectKind::Renderbuffer, renderbuffer.serial());
    }

    fn bind_renderbuffer(&mut self, _renderbuffer: Option<&TraceRenderbuffer>) {}

    fn renderbuffer_storage(&mut self, _internal_format: u32, _width: i32, _height: i32) {}

    fn create_shader(&mut self, _kind: ShaderKind) -> TraceShader {
        TraceShader(self.mint(ObjectKind::Shader))
    }

    fn delete_shader(&mut self, shader: TraceShader) {
        self.shader_sources.remove(&shader.serial());
        self.retire(ObjectKind::Shader, shader.serial());
    }

    fn shader_source(&mut self, shader: &TraceShader, source: &str) {
        self.shader_sources.insert(shader.serial(), source.to_owned());
    }

    fn compile_shader(&mut self, _shader: &TraceShader) {}

    fn shader_compile_status(&mut self, shader: &TraceShader) -> bool {
        !self.shader_has_error_directive(shader)
    }

    fn shader_info_log(&mut self, shader: &TraceShader) -> String {
        if self.shader_has_error_directive(shader) {
            "unexpected #error directive".to_owned()
        } else {
            String::new()
        }
    }

    fn create_program(&mut self) -> TraceProgram {
        TraceProgram(self.mint(ObjectKind::Program))
    }

    fn delete_program(&mut self, program: TraceProgram) {
        self.retire(ObjectKind::Program, program.serial());
    }

    fn attach_shader(&mut self, _program: &TraceProgram, _shader: &TraceShader) {}

    fn detach_shader(&mut self, _program: &TraceProgram, _shader: &TraceShader) {}

    fn link_program(&mut self, _program: &TraceProgram) {}

    fn link_status(&mut self, _program: &TraceProgram) -> bool {
        true
    }

    fn program_info_log(&mut self, _program: &TraceProgram) -> String {
        String::new()
    }

    fn validate_program(&mut self, _program: &TraceProgram) {}

    fn use_program(&mut self, program: Option<&TraceProgram>) {
        self.events.push(TraceEvent::UseProgram {
            serial: program.map(|program| program.serial()),
        });
    }

    fn uniform_location(&mut self, program: &TraceProgram, name: &str) -> Option<TraceUniform> {
        let found = !self.inactive_uniforms.iter().any(|inactive| inactive == name);
        self.events.push(TraceEvent::UniformLookup {
            program: program.serial(),
            name: name.to_owned(),
            found,
        });
        if found {
            self.next_serial += 1;
            Some(TraceUniform(self.next_serial))
        } else {
            None
        }
    }

    fn attrib_location(&mut self, _program: &TraceProgram, _name: &str) -> Option<u32> {
        Some(0)
    }

    fn bind_attrib_location(&mut self, _program: &TraceProgram, _index: u32, _name: &str) {}

    fn uniform_1i(&mut self, _location: &TraceUniform, _x: i32) {}

    fn uniform_1f(&mut self, _location: &TraceUniform, _x: f32) {}

    fn uniform_2f(&mut self, _location: &TraceUniform, _x: f32, _y: f32) {}

    fn uniform_3f(&mut self, _location: &TraceUniform, _x: f32, _y: f32, _z: f32) {}

    fn uniform_4f(&mut self, _location: &TraceUniform, _x: f32, _y: f32, _z: f32, _w: f32) {}

    fn uniform_1fv(&mut self, _location: &TraceUniform, _values: &[f32]) {}

    fn uniform_matrix_4fv(&mut self, _location: &TraceUniform, _transpose: bool, _values: &[f32]) {}

    fn vertex_attrib_pointer(
        &mut self,
        _index: u32,
        _size: i32,
        _ty: VertexAttribType,
        _normalized: bool,
        _stride: i32,
        _offset: i32,
    ) {
    }

    fn enable_vertex_attrib_array(&mut self, _index: u32) {}

    fn disable_vertex_attrib_array(&mut self, _index: u32) {}

    fn create_query(&mut self) -> TraceQuery {
        TraceQuery(self.mint(ObjectKind::Query))
    }

    fn delete_query(&mut self, query: TraceQuery) {
        self.retire(ObjectKind::Query, query.serial());
    }

    fn begin_query(&mut self, _target: QueryTarget, _query: &TraceQuery) {}

    fn end_query(&mut self, _target: QueryTarget) {}

    fn create_sampler(&mut self) -> TraceSampler {
        TraceSampler(self.mint(ObjectKind::Sampler))
    }

    fn delete_sampler(&mut self, sampler: TraceSampler) {
        self.retire(ObjectKind::Sampler, sampler.serial());
    }

    fn bind_sampler(&mut self, _unit: u32, _sampler: Option<&TraceSampler>) {}

    fn sampler_parameter_i(&mut self, _sampler: &TraceSampler, _pname: u32, _value: i32) {}

    fn create_transform_feedback(&mut self) -> TraceTransformFeedback {
        TraceTransformFeedback(self.mint(ObjectKind::TransformFeedback))
    }

    fn delete_transform_feedback(&mut self, feedback: TraceTransformFeedback) {
        self.retire(ObjectKind::TransformFeedback, feedback.serial());
    }

    fn bind_transform_feedback(&mut self, _feedback: Option<&TraceTransformFeedback>) {}

    fn begin_transform_feedback(&mut self, _primitive: TransformFeedbackPrimitive) {}

    fn end_transform_feedback(&mut self) {}

    fn create_vertex_array(&mut self) -> TraceVertexArray {
        TraceVertexArray(self.mint(ObjectKind::VertexArray))
    }

    fn delete_vertex_array(&mut self, vertex_array: TraceVertexArray) {
        self.retire(ObjectKind::VertexArray, vertex_array.serial());
    }

    fn bind_vertex_array(&mut self, _vertex_array: Option<&TraceVertexArray>) {}

    fn enable(&mut self, _cap: Capability) {}

    fn disable(&mut self, _cap: Capability) {}

    fn blend_func(&mut self, _src: BlendFactor, _dst: BlendFactor) {}

    fn depth_func(&mut self, _func: CompareFunc) {}

    fn cull_face(&mut self, _face: CullFace) {}

    fn front_face(&mut self, _winding: FrontFace) {}

    fn viewport(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) {}

    fn scissor(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) {}

    fn clear_color(&mut self, _r: f32, _g: f32, _b: f32, _a: f32) {}

    fn clear_depth(&mut self, _depth: f32) {}

    fn clear_stencil(&mut self, _stencil: i32) {}

    fn clear(&mut self, mask: ClearMask) {
        self.events.push(TraceEvent::Clear { mask });
    }

    fn pixel_store_unpack_alignment(&mut self, _alignment: i32) {}

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) {
        self.events.push(TraceEvent::DrawArrays { mode, first, count });
    }

    fn draw_elements(&mut self, mode: DrawMode, count: i32, ty: IndexType, _offset: i32) {
        self.events.push(TraceEvent::DrawElements { mode, count, ty });
    }

    fn draw_arrays_instanced(&mut self, mode: DrawMode, first: i32, count: i32, _instances: i32) {
        self.events.push(TraceEvent::DrawArrays { mode, first, count });
    }

    fn draw_elements_instanced(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        _offset: i32,
        _instances: i32,
    ) {
        self.events.push(TraceEvent::DrawElements { mode, count, ty });
    }

    fn flush(&mut self) {}

    fn finish(&mut self) {}

    fn take_error(&mut self) -> Option<ErrorCode> {
        self.injected_errors.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_counts_follow_the_event_record() {
        let mut backend = TraceBackend::new();
        let first = backend.create_texture();
        let _second = backend.create_texture();
        backend.delete_texture(first);

        assert_eq!(backend.live(ObjectKind::Texture), 1);
        assert_eq!(backend.live(ObjectKind::Buffer), 0);
    }

    #[test]
    fn serials_are_unique_across_categories() {
        let mut backend = TraceBackend::new();
        let texture = backend.create_texture();
        let buffer = backend.create_buffer();
        let program = backend.create_program();

        assert_ne!(texture.serial(), buffer.serial());
        assert_ne!(buffer.serial(), program.serial());
    }

    #[test]
    fn injected_errors_drain_in_order() {
        let mut backend = TraceBackend::new();
        backend.inject_error(ErrorCode::InvalidEnum);
        backend.inject_error(ErrorCode::OutOfMemory);

        assert_eq!(backend.take_error(), Some(ErrorCode::InvalidEnum));
        assert_eq!(backend.take_error(), Some(ErrorCode::OutOfMemory));
        assert_eq!(backend.take_error(), None);
    }

    #[test]
    fn error_directive_fails_compilation() {
        let mut backend = TraceBackend::new();
        let shader = backend.create_shader(ShaderKind::Fragment);
        backend.shader_source(&shader, "void main() {\n#error broken\n}");
        backend.compile_shader(&shader);

        assert!(!backend.shader_compile_status(&shader));
        assert!(backend.shader_info_log(&shader).contains("#error"));

        backend.shader_source(&shader, "void main() {}");
        assert!(backend.shader_compile_status(&shader));
    }

    #[test]
    fn inactive_uniforms_resolve_to_none_and_are_recorded() {
        let mut backend = TraceBackend::new();
        backend.mark_inactive_uniform("u_unused");
        let program = backend.create_program();

        assert!(backend.uniform_location(&program, "u_unused").is_none());
        assert!(backend.uniform_location(&program, "u_tint").is_some());
        assert!(backend.events().contains(&TraceEvent::UniformLookup {
            program: program.serial(),
            name: "u_unused".to_owned(),
            found: false,
        }));
    }

    #[test]
    fn take_events_drains_the_record() {
        let mut backend = TraceBackend::new();
        backend.clear(ClearMask::COLOR);
        let events = backend.take_events();
        assert_eq!(events, vec![TraceEvent::Clear { mask: ClearMask::COLOR }]);
        assert!(backend.events().is_empty());
    }
}
