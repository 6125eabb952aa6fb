//! In-memory stand-in for a native binding.

use crate::backend::GlBackend;
use crate::types::{
    Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, ErrorCode, FramebufferStatus, FramebufferTarget, FrontFace,
    IndexedBufferTarget, IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};

/// Opaque native object stand-in; identity is the serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeObject(pub u64);

/// Mints serial-numbered objects and drops everything else on the floor.
/// Knobs cover the paths the surface branches on: a plantable error flag
/// and uniform names that resolve as not active.
pub struct FakeBackend {
    next_serial: u64,
    pub created: u64,
    pub deleted: u64,
    pub error: Option<ErrorCode>,
    pub missing_uniforms: Vec<String>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            next_serial: 0,
            created: 0,
            deleted: 0,
            error: None,
            missing_uniforms: Vec::new(),
        }
    }

    fn alloc(&mut self) -> FakeObject {
        self.next_serial += 1;
        self.created += 1;
        FakeObject(self.next_serial)
    }

    fn release(&mut self) {
        self.deleted += 1;
    }
}

impl GlBackend for FakeBackend {
    type Texture = FakeObject;
    type Buffer = FakeObject;
    type Framebuffer = FakeObject;
    type Renderbuffer = FakeObject;
    type Shader = FakeObject;
    type Program = FakeObject;
    type Query = FakeObject;
    type Sampler = FakeObject;
    type TransformFeedback = FakeObject;
    type VertexArray = FakeObject;
    type UniformLocation = FakeObject;

    fn create_texture(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_texture(&mut self, _texture: FakeObject) {
        self.release();
    }

    fn bind_texture(&mut self, _target: TextureTarget, _texture: Option<&FakeObject>) {}

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

    fn create_buffer(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_buffer(&mut self, _buffer: FakeObject) {
        self.release();
    }

    fn bind_buffer(&mut self, _target: BufferTarget, _buffer: Option<&FakeObject>) {}

    fn bind_buffer_base(
        &mut self,
        _target: IndexedBufferTarget,
        _index: u32,
        _buffer: Option<&FakeObject>,
    ) {
    }

    fn bind_buffer_range(
        &mut self,
        _target: IndexedBufferTarget,
        _index: u32,
        _buffer: Option<&FakeObject>,
        _offset: isize,
        _size: isize,
    ) {
    }

    fn buffer_data(&mut self, _target: BufferTarget, _data: &[u8], _usage: BufferUsage) {}

    fn buffer_sub_data(&mut self, _target: BufferTarget, _offset: i32, _data: &[u8]) {}

    fn create_framebuffer(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_framebuffer(&mut self, _framebuffer: FakeObject) {
        self.release();
    }

    fn bind_framebuffer(&mut self, _target: FramebufferTarget, _framebuffer: Option<&FakeObject>) {}

    fn framebuffer_texture_2d(
        &mut self,
        _target: FramebufferTarget,
        _attachment: Attachment,
        _tex_target: TexImageTarget,
        _texture: Option<&FakeObject>,
        _level: i32,
    ) {
    }

    fn framebuffer_texture_layer(
        &mut self,
        _target: FramebufferTarget,
        _attachment: Attachment,
        _texture: Option<&FakeObject>,
        _level: i32,
        _layer: i32,
    ) {
    }

    fn framebuffer_renderbuffer(
        &mut self,
        _target: FramebufferTarget,
        _attachment: Attachment,
        _renderbuffer: Option<&FakeObject>,
    ) {
    }

    fn check_framebuffer_status(&mut self, _target: FramebufferTarget) -> FramebufferStatus {
        FramebufferStatus::Complete
    }

    fn create_renderbuffer(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_renderbuffer(&mut self, _renderbuffer: FakeObject) {
        self.release();
    }

    fn bind_renderbuffer(&mut self, _renderbuffer: Option<&FakeObject>) {}

    fn renderbuffer_storage(&mut self, _internal_format: u32, _width: i32, _height: i32) {}

    fn create_shader(&mut self, _kind: ShaderKind) -> FakeObject {
        self.alloc()
    }

    fn delete_shader(&mut self, _shader: FakeObject) {
        self.release();
    }

    fn shader_source(&mut self, _shader: &FakeObject, _source: &str) {}

    fn compile_shader(&mut self, _shader: &FakeObject) {}

    fn shader_compile_status(&mut self, _shader: &FakeObject) -> bool {
        true
    }

    fn shader_info_log(&mut self, _shader: &FakeObject) -> String {
        String::new()
    }

    fn create_program(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_program(&mut self, _program: FakeObject) {
        self.release();
    }

    fn attach_shader(&mut self, _program: &FakeObject, _shader: &FakeObject) {}

    fn detach_shader(&mut self, _program: &FakeObject, _shader: &FakeObject) {}

    fn link_program(&mut self, _program: &FakeObject) {}

    fn link_status(&mut self, _program: &FakeObject) -> bool {
        true
    }

    fn program_info_log(&mut self, _program: &FakeObject) -> String {
        String::new()
    }

    fn validate_program(&mut self, _program: &FakeObject) {}

    fn use_program(&mut self, _program: Option<&FakeObject>) {}

    fn uniform_location(&mut self, _program: &FakeObject, name: &str) -> Option<FakeObject> {
        if self.missing_uniforms.iter().any(|missing| missing == name) {
            return None;
        }
        // Locations are native values, not objects; they do not count
        // against the created/deleted balance.
        self.next_serial += 1;
        Some(FakeObject(self.next_serial))
    }

    fn attrib_location(&mut self, _program: &FakeObject, _name: &str) -> Option<u32> {
        Some(0)
    }

    fn bind_attrib_location(&mut self, _program: &FakeObject, _index: u32, _name: &str) {}

    fn uniform_1i(&mut self, _location: &FakeObject, _x: i32) {}

    fn uniform_1f(&mut self, _location: &FakeObject, _x: f32) {}

    fn uniform_2f(&mut self, _location: &FakeObject, _x: f32, _y: f32) {}

    fn uniform_3f(&mut self, _location: &FakeObject, _x: f32, _y: f32, _z: f32) {}

    fn uniform_4f(&mut self, _location: &FakeObject, _x: f32, _y: f32, _z: f32, _w: f32) {}

    fn uniform_1fv(&mut self, _location: &FakeObject, _values: &[f32]) {}

    fn uniform_matrix_4fv(&mut self, _location: &FakeObject, _transpose: bool, _values: &[f32]) {}

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

    fn create_query(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_query(&mut self, _query: FakeObject) {
        self.release();
    }

    fn begin_query(&mut self, _target: QueryTarget, _query: &FakeObject) {}

    fn end_query(&mut self, _target: QueryTarget) {}

    fn create_sampler(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_sampler(&mut self, _sampler: FakeObject) {
        self.release();
    }

    fn bind_sampler(&mut self, _unit: u32, _sampler: Option<&FakeObject>) {}

    fn sampler_parameter_i(&mut self, _sampler: &FakeObject, _pname: u32, _value: i32) {}

    fn create_transform_feedback(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_transform_feedback(&mut self, _feedback: FakeObject) {
        self.release();
    }

    fn bind_transform_feedback(&mut self, _feedback: Option<&FakeObject>) {}

    fn begin_transform_feedback(&mut self, _primitive: TransformFeedbackPrimitive) {}

    fn end_transform_feedback(&mut self) {}

    fn create_vertex_array(&mut self) -> FakeObject {
        self.alloc()
    }

    fn delete_vertex_array(&mut self, _vertex_array: FakeObject) {
        self.release();
    }

    fn bind_vertex_array(&mut self, _vertex_array: Option<&FakeObject>) {}

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

    fn clear(&mut self, _mask: ClearMask) {}

    fn pixel_store_unpack_alignment(&mut self, _alignment: i32) {}

    fn draw_arrays(&mut self, _mode: DrawMode, _first: i32, _count: i32) {}

    fn draw_elements(&mut self, _mode: DrawMode, _count: i32, _ty: IndexType, _offset: i32) {}

    fn draw_arrays_instanced(&mut self, _mode: DrawMode, _first: i32, _count: i32, _instances: i32) {
    }

    fn draw_elements_instanced(
        &mut self,
        _mode: DrawMode,
        _count: i32,
        _ty: IndexType,
        _offset: i32,
        _instances: i32,
    ) {
    }

    fn flush(&mut self) {}

    fn finish(&mut self) {}

    fn take_error(&mut self) -> Option<ErrorCode> {
        self.error.take()
    }
}
