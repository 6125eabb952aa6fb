use tracing::warn;

use crate::backend::GlBackend;
use crate::context::Context;
use crate::error::GlesError;
use crate::gles::Gles;
use crate::types::{
    Api, Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, FramebufferStatus, FramebufferTarget, FrontFace, IndexedBufferTarget,
    IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};

/// Polls the native error flag after every mutating call and promotes a set
/// flag to [`GlesError::Driver`].
///
/// The plain [`Context`] never reads the flag, so native-side validation
/// failures (bad enum combinations, draw-time state mismatches) pass
/// silently there. Wrapping costs one flag poll per call. Read-only
/// accessors (`is_*`, [`Gles::api`], [`Gles::current_program`]) delegate
/// without polling.
pub struct Checked<B: GlBackend> {
    inner: Context<B>,
}

impl<B: GlBackend> Checked<B> {
    pub fn new(inner: Context<B>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &Context<B> {
        &self.inner
    }

    /// Calls issued through this reference skip the error poll.
    pub fn inner_mut(&mut self) -> &mut Context<B> {
        &mut self.inner
    }

    pub fn into_inner(self) -> Context<B> {
        self.inner
    }

    pub fn backend(&self) -> &B {
        self.inner.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.inner.backend_mut()
    }

    fn checked<T>(
        &mut self,
        call: &'static str,
        op: impl FnOnce(&mut Context<B>) -> Result<T, GlesError>,
    ) -> Result<T, GlesError> {
        let value = op(&mut self.inner)?;
        match self.inner.backend_mut().take_error() {
            None => Ok(value),
            Some(code) => {
                warn!(call, %code, "driver flagged an error");
                Err(GlesError::Driver { call, code })
            }
        }
    }
}

impl<B: GlBackend> Gles for Checked<B> {
    fn api(&self) -> Api {
        self.inner.api()
    }

    // -- Textures ---------------------------------------------------------

    fn gen_textures(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_textures", |gl| gl.gen_textures(count))
    }

    fn delete_textures(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_textures", |gl| gl.delete_textures(handles))
    }

    fn is_texture(&self, handle: u32) -> bool {
        self.inner.is_texture(handle)
    }

    fn bind_texture(&mut self, target: TextureTarget, handle: u32) -> Result<(), GlesError> {
        self.checked("bind_texture", |gl| gl.bind_texture(target, handle))
    }

    fn active_texture(&mut self, unit: u32) -> Result<(), GlesError> {
        self.checked("active_texture", |gl| gl.active_texture(unit))
    }

    fn tex_parameter_i(
        &mut self,
        target: TextureTarget,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError> {
        self.checked("tex_parameter_i", |gl| gl.tex_parameter_i(target, pname, value))
    }

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
    ) -> Result<(), GlesError> {
        self.checked("tex_image_2d", |gl| {
            gl.tex_image_2d(target, level, internal_format, width, height, format, ty, pixels)
        })
    }

    fn compressed_tex_image_2d(
        &mut self,
        target: TexImageTarget,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        data: &[u8],
    ) -> Result<(), GlesError> {
        self.checked("compressed_tex_image_2d", |gl| {
            gl.compressed_tex_image_2d(target, level, internal_format, width, height, data)
        })
    }

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
    ) -> Result<(), GlesError> {
        self.checked("compressed_tex_sub_image_2d", |gl| {
            gl.compressed_tex_sub_image_2d(
                target, level, x_offset, y_offset, width, height, format, data,
            )
        })
    }

    fn generate_mipmap(&mut self, target: TextureTarget) -> Result<(), GlesError> {
        self.checked("generate_mipmap", |gl| gl.generate_mipmap(target))
    }

    // -- Buffers ----------------------------------------------------------

    fn gen_buffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_buffers", |gl| gl.gen_buffers(count))
    }

    fn delete_buffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_buffers", |gl| gl.delete_buffers(handles))
    }

    fn is_buffer(&self, handle: u32) -> bool {
        self.inner.is_buffer(handle)
    }

    fn bind_buffer(&mut self, target: BufferTarget, handle: u32) -> Result<(), GlesError> {
        self.checked("bind_buffer", |gl| gl.bind_buffer(target, handle))
    }

    fn bind_buffer_base(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
    ) -> Result<(), GlesError> {
        self.checked("bind_buffer_base", |gl| gl.bind_buffer_base(target, index, handle))
    }

    fn bind_buffer_range(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
        offset: isize,
        size: isize,
    ) -> Result<(), GlesError> {
        self.checked("bind_buffer_range", |gl| {
            gl.bind_buffer_range(target, index, handle, offset, size)
        })
    }

    fn buffer_data(
        &mut self,
        target: BufferTarget,
        data: &[u8],
        usage: BufferUsage,
    ) -> Result<(), GlesError> {
        self.checked("buffer_data", |gl| gl.buffer_data(target, data, usage))
    }

    fn buffer_sub_data(
        &mut self,
        target: BufferTarget,
        offset: i32,
        data: &[u8],
    ) -> Result<(), GlesError> {
        self.checked("buffer_sub_data", |gl| gl.buffer_sub_data(target, offset, data))
    }

    fn flush_mapped_buffer_range(
        &mut self,
        target: BufferTarget,
        offset: i32,
        length: i32,
    ) -> Result<(), GlesError> {
        self.checked("flush_mapped_buffer_range", |gl| {
            gl.flush_mapped_buffer_range(target, offset, length)
        })
    }

    // -- Framebuffers -----------------------------------------------------

    fn gen_framebuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_framebuffers", |gl| gl.gen_framebuffers(count))
    }

    fn delete_framebuffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_framebuffers", |gl| gl.delete_framebuffers(handles))
    }

    fn is_framebuffer(&self, handle: u32) -> bool {
        self.inner.is_framebuffer(handle)
    }

    fn bind_framebuffer(
        &mut self,
        target: FramebufferTarget,
        handle: u32,
    ) -> Result<(), GlesError> {
        self.checked("bind_framebuffer", |gl| gl.bind_framebuffer(target, handle))
    }

    fn framebuffer_texture_2d(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        tex_target: TexImageTarget,
        texture: u32,
        level: i32,
    ) -> Result<(), GlesError> {
        self.checked("framebuffer_texture_2d", |gl| {
            gl.framebuffer_texture_2d(target, attachment, tex_target, texture, level)
        })
    }

    fn framebuffer_texture_layer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) -> Result<(), GlesError> {
        self.checked("framebuffer_texture_layer", |gl| {
            gl.framebuffer_texture_layer(target, attachment, texture, level, layer)
        })
    }

    fn framebuffer_renderbuffer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        renderbuffer: u32,
    ) -> Result<(), GlesError> {
        self.checked("framebuffer_renderbuffer", |gl| {
            gl.framebuffer_renderbuffer(target, attachment, renderbuffer)
        })
    }

    fn check_framebuffer_status(
        &mut self,
        target: FramebufferTarget,
    ) -> Result<FramebufferStatus, GlesError> {
        self.checked("check_framebuffer_status", |gl| gl.check_framebuffer_status(target))
    }

    // -- Renderbuffers ----------------------------------------------------

    fn gen_renderbuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_renderbuffers", |gl| gl.gen_renderbuffers(count))
    }

    fn delete_renderbuffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_renderbuffers", |gl| gl.delete_renderbuffers(handles))
    }

    fn is_renderbuffer(&self, handle: u32) -> bool {
        self.inner.is_renderbuffer(handle)
    }

    fn bind_renderbuffer(&mut self, handle: u32) -> Result<(), GlesError> {
        self.checked("bind_renderbuffer", |gl| gl.bind_renderbuffer(handle))
    }

    fn renderbuffer_storage(
        &mut self,
        internal_format: u32,
        width: i32,
        height: i32,
    ) -> Result<(), GlesError> {
        self.checked("renderbuffer_storage", |gl| {
            gl.renderbuffer_storage(internal_format, width, height)
        })
    }

    // -- Shaders ----------------------------------------------------------

    fn create_shader(&mut self, kind: ShaderKind) -> Result<u32, GlesError> {
        self.checked("create_shader", |gl| gl.create_shader(kind))
    }

    fn delete_shader(&mut self, handle: u32) -> Result<(), GlesError> {
        self.checked("delete_shader", |gl| gl.delete_shader(handle))
    }

    fn is_shader(&self, handle: u32) -> bool {
        self.inner.is_shader(handle)
    }

    fn shader_source(&mut self, handle: u32, source: &str) -> Result<(), GlesError> {
        self.checked("shader_source", |gl| gl.shader_source(handle, source))
    }

    fn compile_shader(&mut self, handle: u32) -> Result<(), GlesError> {
        self.checked("compile_shader", |gl| gl.compile_shader(handle))
    }

    fn shader_compile_status(&mut self, handle: u32) -> Result<bool, GlesError> {
        self.checked("shader_compile_status", |gl| gl.shader_compile_status(handle))
    }

    fn shader_info_log(&mut self, handle: u32) -> Result<String, GlesError> {
        self.checked("shader_info_log", |gl| gl.shader_info_log(handle))
    }

    // -- Programs and uniforms --------------------------------------------

    fn create_program(&mut self) -> Result<u32, GlesError> {
        self.checked("create_program", |gl| gl.create_program())
    }

    fn delete_program(&mut self, handle: u32) -> Result<(), GlesError> {
        self.checked("delete_program", |gl| gl.delete_program(handle))
    }

    fn is_program(&self, handle: u32) -> bool {
        self.inner.is_program(handle)
    }

    fn attach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError> {
        self.checked("attach_shader", |gl| gl.attach_shader(program, shader))
    }

    fn detach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError> {
        self.checked("detach_shader", |gl| gl.detach_shader(program, shader))
    }

    fn link_program(&mut self, program: u32) -> Result<(), GlesError> {
        self.checked("link_program", |gl| gl.link_program(program))
    }

    fn link_status(&mut self, program: u32) -> Result<bool, GlesError> {
        self.checked("link_status", |gl| gl.link_status(program))
    }

    fn program_info_log(&mut self, program: u32) -> Result<String, GlesError> {
        self.checked("program_info_log", |gl| gl.program_info_log(program))
    }

    fn validate_program(&mut self, program: u32) -> Result<(), GlesError> {
        self.checked("validate_program", |gl| gl.validate_program(program))
    }

    fn use_program(&mut self, program: u32) -> Result<(), GlesError> {
        self.checked("use_program", |gl| gl.use_program(program))
    }

    fn current_program(&self) -> u32 {
        self.inner.current_program()
    }

    fn uniform_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError> {
        self.checked("uniform_location", |gl| gl.uniform_location(program, name))
    }

    fn uniform_1i(&mut self, location: u32, x: i32) -> Result<(), GlesError> {
        self.checked("uniform_1i", |gl| gl.uniform_1i(location, x))
    }

    fn uniform_1f(&mut self, location: u32, x: f32) -> Result<(), GlesError> {
        self.checked("uniform_1f", |gl| gl.uniform_1f(location, x))
    }

    fn uniform_2f(&mut self, location: u32, x: f32, y: f32) -> Result<(), GlesError> {
        self.checked("uniform_2f", |gl| gl.uniform_2f(location, x, y))
    }

    fn uniform_3f(&mut self, location: u32, x: f32, y: f32, z: f32) -> Result<(), GlesError> {
        self.checked("uniform_3f", |gl| gl.uniform_3f(location, x, y, z))
    }

    fn uniform_4f(
        &mut self,
        location: u32,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    ) -> Result<(), GlesError> {
        self.checked("uniform_4f", |gl| gl.uniform_4f(location, x, y, z, w))
    }

    fn uniform_1fv(&mut self, location: u32, values: &[f32]) -> Result<(), GlesError> {
        self.checked("uniform_1fv", |gl| gl.uniform_1fv(location, values))
    }

    fn uniform_matrix_4fv(
        &mut self,
        location: u32,
        transpose: bool,
        values: &[f32],
    ) -> Result<(), GlesError> {
        self.checked("uniform_matrix_4fv", |gl| {
            gl.uniform_matrix_4fv(location, transpose, values)
        })
    }

    fn attrib_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError> {
        self.checked("attrib_location", |gl| gl.attrib_location(program, name))
    }

    fn bind_attrib_location(
        &mut self,
        program: u32,
        index: u32,
        name: &str,
    ) -> Result<(), GlesError> {
        self.checked("bind_attrib_location", |gl| {
            gl.bind_attrib_location(program, index, name)
        })
    }

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: VertexAttribType,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) -> Result<(), GlesError> {
        self.checked("vertex_attrib_pointer", |gl| {
            gl.vertex_attrib_pointer(index, size, ty, normalized, stride, offset)
        })
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError> {
        self.checked("enable_vertex_attrib_array", |gl| gl.enable_vertex_attrib_array(index))
    }

    fn disable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError> {
        self.checked("disable_vertex_attrib_array", |gl| {
            gl.disable_vertex_attrib_array(index)
        })
    }

    // -- Queries (ES 3.0) -------------------------------------------------

    fn gen_queries(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_queries", |gl| gl.gen_queries(count))
    }

    fn delete_queries(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_queries", |gl| gl.delete_queries(handles))
    }

    fn is_query(&self, handle: u32) -> bool {
        self.inner.is_query(handle)
    }

    fn begin_query(&mut self, target: QueryTarget, handle: u32) -> Result<(), GlesError> {
        self.checked("begin_query", |gl| gl.begin_query(target, handle))
    }

    fn end_query(&mut self, target: QueryTarget) -> Result<(), GlesError> {
        self.checked("end_query", |gl| gl.end_query(target))
    }

    // -- Samplers (ES 3.0) ------------------------------------------------

    fn gen_samplers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_samplers", |gl| gl.gen_samplers(count))
    }

    fn delete_samplers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_samplers", |gl| gl.delete_samplers(handles))
    }

    fn is_sampler(&self, handle: u32) -> bool {
        self.inner.is_sampler(handle)
    }

    fn bind_sampler(&mut self, unit: u32, handle: u32) -> Result<(), GlesError> {
        self.checked("bind_sampler", |gl| gl.bind_sampler(unit, handle))
    }

    fn sampler_parameter_i(
        &mut self,
        handle: u32,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError> {
        self.checked("sampler_parameter_i", |gl| {
            gl.sampler_parameter_i(handle, pname, value)
        })
    }

    // -- Transform feedback (ES 3.0) --------------------------------------

    fn gen_transform_feedbacks(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_transform_feedbacks", |gl| gl.gen_transform_feedbacks(count))
    }

    fn delete_transform_feedbacks(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_transform_feedbacks", |gl| {
            gl.delete_transform_feedbacks(handles)
        })
    }

    fn is_transform_feedback(&self, handle: u32) -> bool {
        self.inner.is_transform_feedback(handle)
    }

    fn bind_transform_feedback(&mut self, handle: u32) -> Result<(), GlesError> {
        self.checked("bind_transform_feedback", |gl| gl.bind_transform_feedback(handle))
    }

    fn begin_transform_feedback(
        &mut self,
        primitive: TransformFeedbackPrimitive,
    ) -> Result<(), GlesError> {
        self.checked("begin_transform_feedback", |gl| {
            gl.begin_transform_feedback(primitive)
        })
    }

    fn end_transform_feedback(&mut self) -> Result<(), GlesError> {
        self.checked("end_transform_feedback", |gl| gl.end_transform_feedback())
    }

    // -- Vertex arrays (ES 3.0) -------------------------------------------

    fn gen_vertex_arrays(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.checked("gen_vertex_arrays", |gl| gl.gen_vertex_arrays(count))
    }

    fn delete_vertex_arrays(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.checked("delete_vertex_arrays", |gl| gl.delete_vertex_arrays(handles))
    }

    fn is_vertex_array(&self, handle: u32) -> bool {
        self.inner.is_vertex_array(handle)
    }

    fn bind_vertex_array(&mut self, handle: u32) -> Result<(), GlesError> {
        self.checked("bind_vertex_array", |gl| gl.bind_vertex_array(handle))
    }

    // -- Pipeline state and draws -----------------------------------------

    fn enable(&mut self, cap: Capability) -> Result<(), GlesError> {
        self.checked("enable", |gl| gl.enable(cap))
    }

    fn disable(&mut self, cap: Capability) -> Result<(), GlesError> {
        self.checked("disable", |gl| gl.disable(cap))
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<(), GlesError> {
        self.checked("blend_func", |gl| gl.blend_func(src, dst))
    }

    fn depth_func(&mut self, func: CompareFunc) -> Result<(), GlesError> {
        self.checked("depth_func", |gl| gl.depth_func(func))
    }

    fn cull_face(&mut self, face: CullFace) -> Result<(), GlesError> {
        self.checked("cull_face", |gl| gl.cull_face(face))
    }

    fn front_face(&mut self, winding: FrontFace) -> Result<(), GlesError> {
        self.checked("front_face", |gl| gl.front_face(winding))
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError> {
        self.checked("viewport", |gl| gl.viewport(x, y, width, height))
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError> {
        self.checked("scissor", |gl| gl.scissor(x, y, width, height))
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) -> Result<(), GlesError> {
        self.checked("clear_color", |gl| gl.clear_color(r, g, b, a))
    }

    fn clear_depth(&mut self, depth: f32) -> Result<(), GlesError> {
        self.checked("clear_depth", |gl| gl.clear_depth(depth))
    }

    fn clear_stencil(&mut self, stencil: i32) -> Result<(), GlesError> {
        self.checked("clear_stencil", |gl| gl.clear_stencil(stencil))
    }

    fn clear(&mut self, mask: ClearMask) -> Result<(), GlesError> {
        self.checked("clear", |gl| gl.clear(mask))
    }

    fn pixel_store_unpack_alignment(&mut self, alignment: i32) -> Result<(), GlesError> {
        self.checked("pixel_store_unpack_alignment", |gl| {
            gl.pixel_store_unpack_alignment(alignment)
        })
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) -> Result<(), GlesError> {
        self.checked("draw_arrays", |gl| gl.draw_arrays(mode, first, count))
    }

    fn draw_elements(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
    ) -> Result<(), GlesError> {
        self.checked("draw_elements", |gl| gl.draw_elements(mode, count, ty, offset))
    }

    fn draw_arrays_instanced(
        &mut self,
        mode: DrawMode,
        first: i32,
        count: i32,
        instances: i32,
    ) -> Result<(), GlesError> {
        self.checked("draw_arrays_instanced", |gl| {
            gl.draw_arrays_instanced(mode, first, count, instances)
        })
    }

    fn draw_elements_instanced(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
        instances: i32,
    ) -> Result<(), GlesError> {
        self.checked("draw_elements_instanced", |gl| {
            gl.draw_elements_instanced(mode, count, ty, offset, instances)
        })
    }

    fn flush(&mut self) -> Result<(), GlesError> {
        self.checked("flush", |gl| gl.flush())
    }

    fn finish(&mut self) -> Result<(), GlesError> {
        self.checked("finish", |gl| gl.finish())
    }
}
