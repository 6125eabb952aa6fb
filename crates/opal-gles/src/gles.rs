use crate::error::GlesError;
use crate::types::{
    Api, Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, FramebufferStatus, FramebufferTarget, FrontFace, IndexedBufferTarget,
    IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};

/// The integer-handle GL ES call surface.
///
/// Object parameters are the `u32` handles minted by `gen_*`/`create_*`;
/// handle `0` stands for "no object" wherever a bind accepts it and is never
/// minted. Every operation returns a `Result` in place of the native
/// poll-after-the-fact error flag: a handle that does not resolve is an
/// `UnknownHandle` error, an operation missing from the context's profile is
/// `Unsupported`, and the plain context reports nothing else.
///
/// Implemented by [`Context`](crate::Context) directly, by
/// [`Checked`](crate::Checked) with driver-error polling after every call,
/// and by [`Profiler`](crate::Profiler) with call counting, so callers hold
/// whichever wrapping they were constructed with behind one interface.
///
/// The surface is a representative subset of GL ES 2.0/3.0, not the whole
/// entry-point catalogue.
pub trait Gles {
    fn api(&self) -> Api;

    // -- Textures ---------------------------------------------------------

    fn gen_textures(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    /// Deletes in order, failing fast on the first handle that does not
    /// resolve; earlier handles in the batch are already released.
    fn delete_textures(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    /// `false` for 0 and for released handles; never an error.
    fn is_texture(&self, handle: u32) -> bool;
    fn bind_texture(&mut self, target: TextureTarget, handle: u32) -> Result<(), GlesError>;
    /// `unit` is the zero-based texture unit index.
    fn active_texture(&mut self, unit: u32) -> Result<(), GlesError>;
    fn tex_parameter_i(
        &mut self,
        target: TextureTarget,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError>;
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
    ) -> Result<(), GlesError>;
    /// Always `Unsupported`; the platform exposes no compressed formats.
    #[allow(clippy::too_many_arguments)]
    fn compressed_tex_image_2d(
        &mut self,
        target: TexImageTarget,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        data: &[u8],
    ) -> Result<(), GlesError>;
    /// Always `Unsupported`; the platform exposes no compressed formats.
    #[allow(clippy::too_many_arguments)]
    fn compressed_tex_sub_image_2d(
        &mut self,
        target: TexImageTarget,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: u32,
        data: &[u8],
    ) -> Result<(), GlesError>;
    fn generate_mipmap(&mut self, target: TextureTarget) -> Result<(), GlesError>;

    // -- Buffers ----------------------------------------------------------

    fn gen_buffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_buffers(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_buffer(&self, handle: u32) -> bool;
    fn bind_buffer(&mut self, target: BufferTarget, handle: u32) -> Result<(), GlesError>;
    fn bind_buffer_base(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
    ) -> Result<(), GlesError>;
    fn bind_buffer_range(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
        offset: isize,
        size: isize,
    ) -> Result<(), GlesError>;
    /// Uploads to whatever buffer is bound to `target` on the native side.
    fn buffer_data(
        &mut self,
        target: BufferTarget,
        data: &[u8],
        usage: BufferUsage,
    ) -> Result<(), GlesError>;
    fn buffer_sub_data(
        &mut self,
        target: BufferTarget,
        offset: i32,
        data: &[u8],
    ) -> Result<(), GlesError>;
    /// Always `Unsupported`; the platform has no buffer mapping.
    fn flush_mapped_buffer_range(
        &mut self,
        target: BufferTarget,
        offset: i32,
        length: i32,
    ) -> Result<(), GlesError>;

    // -- Framebuffers -----------------------------------------------------

    fn gen_framebuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_framebuffers(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_framebuffer(&self, handle: u32) -> bool;
    /// Handle 0 binds the default framebuffer.
    fn bind_framebuffer(&mut self, target: FramebufferTarget, handle: u32)
        -> Result<(), GlesError>;
    fn framebuffer_texture_2d(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        tex_target: TexImageTarget,
        texture: u32,
        level: i32,
    ) -> Result<(), GlesError>;
    fn framebuffer_texture_layer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) -> Result<(), GlesError>;
    fn framebuffer_renderbuffer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        renderbuffer: u32,
    ) -> Result<(), GlesError>;
    fn check_framebuffer_status(
        &mut self,
        target: FramebufferTarget,
    ) -> Result<FramebufferStatus, GlesError>;

    // -- Renderbuffers ----------------------------------------------------

    fn gen_renderbuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_renderbuffers(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_renderbuffer(&self, handle: u32) -> bool;
    fn bind_renderbuffer(&mut self, handle: u32) -> Result<(), GlesError>;
    fn renderbuffer_storage(
        &mut self,
        internal_format: u32,
        width: i32,
        height: i32,
    ) -> Result<(), GlesError>;

    // -- Shaders ----------------------------------------------------------

    fn create_shader(&mut self, kind: ShaderKind) -> Result<u32, GlesError>;
    fn delete_shader(&mut self, handle: u32) -> Result<(), GlesError>;
    fn is_shader(&self, handle: u32) -> bool;
    fn shader_source(&mut self, handle: u32, source: &str) -> Result<(), GlesError>;
    fn compile_shader(&mut self, handle: u32) -> Result<(), GlesError>;
    fn shader_compile_status(&mut self, handle: u32) -> Result<bool, GlesError>;
    fn shader_info_log(&mut self, handle: u32) -> Result<String, GlesError>;

    // -- Programs and uniforms --------------------------------------------

    fn create_program(&mut self) -> Result<u32, GlesError>;
    /// Also drops the program's uniform-location table; locations minted for
    /// it stop resolving.
    fn delete_program(&mut self, handle: u32) -> Result<(), GlesError>;
    fn is_program(&self, handle: u32) -> bool;
    fn attach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError>;
    fn detach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError>;
    fn link_program(&mut self, program: u32) -> Result<(), GlesError>;
    fn link_status(&mut self, program: u32) -> Result<bool, GlesError>;
    fn program_info_log(&mut self, program: u32) -> Result<String, GlesError>;
    fn validate_program(&mut self, program: u32) -> Result<(), GlesError>;
    /// Handle 0 clears the current program.
    fn use_program(&mut self, program: u32) -> Result<(), GlesError>;
    /// Handle of the program in use; 0 when none. May be stale if that
    /// program was deleted without switching away first.
    fn current_program(&self) -> u32;

    /// `Ok(None)` mirrors the native "no such active uniform" result (the C
    /// API's `-1`), which is not an error. Each successful call mints a
    /// fresh location id in the program's table, even for a repeated name.
    fn uniform_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError>;
    fn uniform_1i(&mut self, location: u32, x: i32) -> Result<(), GlesError>;
    fn uniform_1f(&mut self, location: u32, x: f32) -> Result<(), GlesError>;
    fn uniform_2f(&mut self, location: u32, x: f32, y: f32) -> Result<(), GlesError>;
    fn uniform_3f(&mut self, location: u32, x: f32, y: f32, z: f32) -> Result<(), GlesError>;
    fn uniform_4f(&mut self, location: u32, x: f32, y: f32, z: f32, w: f32)
        -> Result<(), GlesError>;
    fn uniform_1fv(&mut self, location: u32, values: &[f32]) -> Result<(), GlesError>;
    fn uniform_matrix_4fv(
        &mut self,
        location: u32,
        transpose: bool,
        values: &[f32],
    ) -> Result<(), GlesError>;

    /// Attribute locations are plain native integers; no handle table is
    /// involved.
    fn attrib_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError>;
    fn bind_attrib_location(
        &mut self,
        program: u32,
        index: u32,
        name: &str,
    ) -> Result<(), GlesError>;
    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: VertexAttribType,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) -> Result<(), GlesError>;
    fn enable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError>;
    fn disable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError>;

    // -- Queries (ES 3.0) -------------------------------------------------

    fn gen_queries(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_queries(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_query(&self, handle: u32) -> bool;
    fn begin_query(&mut self, target: QueryTarget, handle: u32) -> Result<(), GlesError>;
    fn end_query(&mut self, target: QueryTarget) -> Result<(), GlesError>;

    // -- Samplers (ES 3.0) ------------------------------------------------

    fn gen_samplers(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_samplers(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_sampler(&self, handle: u32) -> bool;
    /// Handle 0 unbinds the unit's sampler.
    fn bind_sampler(&mut self, unit: u32, handle: u32) -> Result<(), GlesError>;
    fn sampler_parameter_i(&mut self, handle: u32, pname: u32, value: i32)
        -> Result<(), GlesError>;

    // -- Transform feedback (ES 3.0) --------------------------------------

    fn gen_transform_feedbacks(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_transform_feedbacks(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_transform_feedback(&self, handle: u32) -> bool;
    fn bind_transform_feedback(&mut self, handle: u32) -> Result<(), GlesError>;
    fn begin_transform_feedback(
        &mut self,
        primitive: TransformFeedbackPrimitive,
    ) -> Result<(), GlesError>;
    fn end_transform_feedback(&mut self) -> Result<(), GlesError>;

    // -- Vertex arrays (ES 3.0) -------------------------------------------

    fn gen_vertex_arrays(&mut self, count: u32) -> Result<Vec<u32>, GlesError>;
    fn delete_vertex_arrays(&mut self, handles: &[u32]) -> Result<(), GlesError>;
    fn is_vertex_array(&self, handle: u32) -> bool;
    fn bind_vertex_array(&mut self, handle: u32) -> Result<(), GlesError>;

    // -- Pipeline state and draws -----------------------------------------

    fn enable(&mut self, cap: Capability) -> Result<(), GlesError>;
    fn disable(&mut self, cap: Capability) -> Result<(), GlesError>;
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<(), GlesError>;
    fn depth_func(&mut self, func: CompareFunc) -> Result<(), GlesError>;
    fn cull_face(&mut self, face: CullFace) -> Result<(), GlesError>;
    fn front_face(&mut self, winding: FrontFace) -> Result<(), GlesError>;
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError>;
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError>;
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) -> Result<(), GlesError>;
    fn clear_depth(&mut self, depth: f32) -> Result<(), GlesError>;
    fn clear_stencil(&mut self, stencil: i32) -> Result<(), GlesError>;
    fn clear(&mut self, mask: ClearMask) -> Result<(), GlesError>;
    fn pixel_store_unpack_alignment(&mut self, alignment: i32) -> Result<(), GlesError>;
    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) -> Result<(), GlesError>;
    fn draw_elements(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
    ) -> Result<(), GlesError>;
    fn draw_arrays_instanced(
        &mut self,
        mode: DrawMode,
        first: i32,
        count: i32,
        instances: i32,
    ) -> Result<(), GlesError>;
    fn draw_elements_instanced(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
        instances: i32,
    ) -> Result<(), GlesError>;
    fn flush(&mut self) -> Result<(), GlesError>;
    fn finish(&mut self) -> Result<(), GlesError>;
}
