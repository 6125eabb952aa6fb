use crate::types::{
    Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, ErrorCode, FramebufferStatus, FramebufferTarget, FrontFace,
    IndexedBufferTarget, IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};

/// The native graphics binding the call surface drives.
///
/// Modeled on the browser object model: object creation is infallible and
/// returns an owned opaque value, deletion consumes it, and runtime failures
/// only surface through a sticky error flag that [`GlBackend::take_error`]
/// reads and clears. Bind points take `Option<&T>`, where `None` is the
/// API's "handle 0" (unbind, or the default framebuffer).
///
/// Implementations are single-threaded; every method takes `&mut self`.
pub trait GlBackend {
    type Texture;
    type Buffer;
    type Framebuffer;
    type Renderbuffer;
    type Shader;
    type Program;
    type Query;
    type Sampler;
    type TransformFeedback;
    type VertexArray;
    type UniformLocation;

    fn create_texture(&mut self) -> Self::Texture;
    fn delete_texture(&mut self, texture: Self::Texture);
    fn bind_texture(&mut self, target: TextureTarget, texture: Option<&Self::Texture>);
    fn active_texture(&mut self, unit: u32);
    fn tex_parameter_i(&mut self, target: TextureTarget, pname: u32, value: i32);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &mut self,
        target: TexImageTarget,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    );
    fn generate_mipmap(&mut self, target: TextureTarget);

    fn create_buffer(&mut self) -> Self::Buffer;
    fn delete_buffer(&mut self, buffer: Self::Buffer);
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<&Self::Buffer>);
    fn bind_buffer_base(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: Option<&Self::Buffer>,
    );
    fn bind_buffer_range(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: Option<&Self::Buffer>,
        offset: isize,
        size: isize,
    );
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    fn buffer_sub_data(&mut self, target: BufferTarget, offset: i32, data: &[u8]);

    fn create_framebuffer(&mut self) -> Self::Framebuffer;
    fn delete_framebuffer(&mut self, framebuffer: Self::Framebuffer);
    fn bind_framebuffer(&mut self, target: FramebufferTarget, framebuffer: Option<&Self::Framebuffer>);
    fn framebuffer_texture_2d(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        tex_target: TexImageTarget,
        texture: Option<&Self::Texture>,
        level: i32,
    );
    fn framebuffer_texture_layer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: Option<&Self::Texture>,
        level: i32,
        layer: i32,
    );
    fn framebuffer_renderbuffer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        renderbuffer: Option<&Self::Renderbuffer>,
    );
    fn check_framebuffer_status(&mut self, target: FramebufferTarget) -> FramebufferStatus;

    fn create_renderbuffer(&mut self) -> Self::Renderbuffer;
    fn delete_renderbuffer(&mut self, renderbuffer: Self::Renderbuffer);
    fn bind_renderbuffer(&mut self, renderbuffer: Option<&Self::Renderbuffer>);
    fn renderbuffer_storage(&mut self, internal_format: u32, width: i32, height: i32);

    fn create_shader(&mut self, kind: ShaderKind) -> Self::Shader;
    fn delete_shader(&mut self, shader: Self::Shader);
    fn shader_source(&mut self, shader: &Self::Shader, source: &str);
    fn compile_shader(&mut self, shader: &Self::Shader);
    fn shader_compile_status(&mut self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&mut self, shader: &Self::Shader) -> String;

    fn create_program(&mut self) -> Self::Program;
    fn delete_program(&mut self, program: Self::Program);
    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);
    fn detach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&mut self, program: &Self::Program);
    fn link_status(&mut self, program: &Self::Program) -> bool;
    fn program_info_log(&mut self, program: &Self::Program) -> String;
    fn validate_program(&mut self, program: &Self::Program);
    fn use_program(&mut self, program: Option<&Self::Program>);

    /// Resolves a uniform by name in a linked program. `None` means the
    /// program has no active uniform of that name.
    fn uniform_location(
        &mut self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn attrib_location(&mut self, program: &Self::Program, name: &str) -> Option<u32>;
    fn bind_attrib_location(&mut self, program: &Self::Program, index: u32, name: &str);

    fn uniform_1i(&mut self, location: &Self::UniformLocation, x: i32);
    fn uniform_1f(&mut self, location: &Self::UniformLocation, x: f32);
    fn uniform_2f(&mut self, location: &Self::UniformLocation, x: f32, y: f32);
    fn uniform_3f(&mut self, location: &Self::UniformLocation, x: f32, y: f32, z: f32);
    fn uniform_4f(&mut self, location: &Self::UniformLocation, x: f32, y: f32, z: f32, w: f32);
    fn uniform_1fv(&mut self, location: &Self::UniformLocation, values: &[f32]);
    fn uniform_matrix_4fv(
        &mut self,
        location: &Self::UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: VertexAttribType,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&mut self, index: u32);
    fn disable_vertex_attrib_array(&mut self, index: u32);

    fn create_query(&mut self) -> Self::Query;
    fn delete_query(&mut self, query: Self::Query);
    fn begin_query(&mut self, target: QueryTarget, query: &Self::Query);
    fn end_query(&mut self, target: QueryTarget);

    fn create_sampler(&mut self) -> Self::Sampler;
    fn delete_sampler(&mut self, sampler: Self::Sampler);
    fn bind_sampler(&mut self, unit: u32, sampler: Option<&Self::Sampler>);
    fn sampler_parameter_i(&mut self, sampler: &Self::Sampler, pname: u32, value: i32);

    fn create_transform_feedback(&mut self) -> Self::TransformFeedback;
    fn delete_transform_feedback(&mut self, feedback: Self::TransformFeedback);
    fn bind_transform_feedback(&mut self, feedback: Option<&Self::TransformFeedback>);
    fn begin_transform_feedback(&mut self, primitive: TransformFeedbackPrimitive);
    fn end_transform_feedback(&mut self);

    fn create_vertex_array(&mut self) -> Self::VertexArray;
    fn delete_vertex_array(&mut self, vertex_array: Self::VertexArray);
    fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArray>);

    fn enable(&mut self, cap: Capability);
    fn disable(&mut self, cap: Capability);
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);
    fn depth_func(&mut self, func: CompareFunc);
    fn cull_face(&mut self, face: CullFace);
    fn front_face(&mut self, winding: FrontFace);
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);
    fn clear_depth(&mut self, depth: f32);
    fn clear_stencil(&mut self, stencil: i32);
    fn clear(&mut self, mask: ClearMask);
    fn pixel_store_unpack_alignment(&mut self, alignment: i32);

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32);
    fn draw_elements(&mut self, mode: DrawMode, count: i32, ty: IndexType, offset: i32);
    fn draw_arrays_instanced(&mut self, mode: DrawMode, first: i32, count: i32, instances: i32);
    fn draw_elements_instanced(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
        instances: i32,
    );
    fn flush(&mut self);
    fn finish(&mut self);

    /// Reads and clears the native error flag.
    fn take_error(&mut self) -> Option<ErrorCode>;
}
