use crate::error::GlesError;
use crate::gles::Gles;
use crate::types::{
    Api, Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, FramebufferStatus, FramebufferTarget, FrontFace, IndexedBufferTarget,
    IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};

/// Running tally over an integer-valued sample stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleStats {
    pub count: u64,
    pub total: u64,
    pub min: u64,
    pub max: u64,
}

impl SampleStats {
    pub fn record(&mut self, value: u64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.total += value;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }
}

/// Per-frame profiling counters, suitable for an on-screen HUD or telemetry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlStats {
    /// Every call issued through the profiled surface.
    pub calls: u64,
    pub draw_calls: u64,
    pub shader_switches: u64,
    pub texture_binds: u64,
    /// Vertices submitted per draw call.
    pub vertex_count: SampleStats,
}

/// Tallies calls on their way through to the wrapped surface.
///
/// Counters live on the wrapper, never in process state, so two profiled
/// contexts keep separate tallies. A call is tallied when issued; one that
/// returns an error still counts. Read-only accessors (`is_*`, [`Gles::api`],
/// [`Gles::current_program`]) pass through untallied.
pub struct Profiler<G> {
    inner: G,
    stats: GlStats,
}

impl<G: Gles> Profiler<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            stats: GlStats::default(),
        }
    }

    pub fn stats(&self) -> &GlStats {
        &self.stats
    }

    /// Zeroes every counter; typically called once per frame.
    pub fn reset_stats(&mut self) {
        self.stats = GlStats::default();
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Calls issued through this reference bypass the tally.
    pub fn inner_mut(&mut self) -> &mut G {
        &mut self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }

    fn record_draw(&mut self, vertices: i32) {
        self.stats.draw_calls += 1;
        self.stats.vertex_count.record(vertices.max(0) as u64);
    }
}

impl<G: Gles> Gles for Profiler<G> {
    fn api(&self) -> Api {
        self.inner.api()
    }

    // -- Textures ---------------------------------------------------------

    fn gen_textures(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_textures(count)
    }

    fn delete_textures(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_textures(handles)
    }

    fn is_texture(&self, handle: u32) -> bool {
        self.inner.is_texture(handle)
    }

    fn bind_texture(&mut self, target: TextureTarget, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.stats.texture_binds += 1;
        self.inner.bind_texture(target, handle)
    }

    fn active_texture(&mut self, unit: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.active_texture(unit)
    }

    fn tex_parameter_i(
        &mut self,
        target: TextureTarget,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.tex_parameter_i(target, pname, value)
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
        self.stats.calls += 1;
        self.inner
            .tex_image_2d(target, level, internal_format, width, height, format, ty, pixels)
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
        self.stats.calls += 1;
        self.inner
            .compressed_tex_image_2d(target, level, internal_format, width, height, data)
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
        self.stats.calls += 1;
        self.inner.compressed_tex_sub_image_2d(
            target, level, x_offset, y_offset, width, height, format, data,
        )
    }

    fn generate_mipmap(&mut self, target: TextureTarget) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.generate_mipmap(target)
    }

    // -- Buffers ----------------------------------------------------------

    fn gen_buffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_buffers(count)
    }

    fn delete_buffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_buffers(handles)
    }

    fn is_buffer(&self, handle: u32) -> bool {
        self.inner.is_buffer(handle)
    }

    fn bind_buffer(&mut self, target: BufferTarget, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_buffer(target, handle)
    }

    fn bind_buffer_base(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_buffer_base(target, index, handle)
    }

    fn bind_buffer_range(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
        offset: isize,
        size: isize,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_buffer_range(target, index, handle, offset, size)
    }

    fn buffer_data(
        &mut self,
        target: BufferTarget,
        data: &[u8],
        usage: BufferUsage,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.buffer_data(target, data, usage)
    }

    fn buffer_sub_data(
        &mut self,
        target: BufferTarget,
        offset: i32,
        data: &[u8],
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.buffer_sub_data(target, offset, data)
    }

    fn flush_mapped_buffer_range(
        &mut self,
        target: BufferTarget,
        offset: i32,
        length: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.flush_mapped_buffer_range(target, offset, length)
    }

    // -- Framebuffers -----------------------------------------------------

    fn gen_framebuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_framebuffers(count)
    }

    fn delete_framebuffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_framebuffers(handles)
    }

    fn is_framebuffer(&self, handle: u32) -> bool {
        self.inner.is_framebuffer(handle)
    }

    fn bind_framebuffer(
        &mut self,
        target: FramebufferTarget,
        handle: u32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_framebuffer(target, handle)
    }

    fn framebuffer_texture_2d(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        tex_target: TexImageTarget,
        texture: u32,
        level: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner
            .framebuffer_texture_2d(target, attachment, tex_target, texture, level)
    }

    fn framebuffer_texture_layer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner
            .framebuffer_texture_layer(target, attachment, texture, level, layer)
    }

    fn framebuffer_renderbuffer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        renderbuffer: u32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner
            .framebuffer_renderbuffer(target, attachment, renderbuffer)
    }

    fn check_framebuffer_status(
        &mut self,
        target: FramebufferTarget,
    ) -> Result<FramebufferStatus, GlesError> {
        self.stats.calls += 1;
        self.inner.check_framebuffer_status(target)
    }

    // -- Renderbuffers ----------------------------------------------------

    fn gen_renderbuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_renderbuffers(count)
    }

    fn delete_renderbuffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_renderbuffers(handles)
    }

    fn is_renderbuffer(&self, handle: u32) -> bool {
        self.inner.is_renderbuffer(handle)
    }

    fn bind_renderbuffer(&mut self, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_renderbuffer(handle)
    }

    fn renderbuffer_storage(
        &mut self,
        internal_format: u32,
        width: i32,
        height: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.renderbuffer_storage(internal_format, width, height)
    }

    // -- Shaders ----------------------------------------------------------

    fn create_shader(&mut self, kind: ShaderKind) -> Result<u32, GlesError> {
        self.stats.calls += 1;
        self.inner.create_shader(kind)
    }

    fn delete_shader(&mut self, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_shader(handle)
    }

    fn is_shader(&self, handle: u32) -> bool {
        self.inner.is_shader(handle)
    }

    fn shader_source(&mut self, handle: u32, source: &str) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.shader_source(handle, source)
    }

    fn compile_shader(&mut self, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.compile_shader(handle)
    }

    fn shader_compile_status(&mut self, handle: u32) -> Result<bool, GlesError> {
        self.stats.calls += 1;
        self.inner.shader_compile_status(handle)
    }

    fn shader_info_log(&mut self, handle: u32) -> Result<String, GlesError> {
        self.stats.calls += 1;
        self.inner.shader_info_log(handle)
    }

    // -- Programs and uniforms --------------------------------------------

    fn create_program(&mut self) -> Result<u32, GlesError> {
        self.stats.calls += 1;
        self.inner.create_program()
    }

    fn delete_program(&mut self, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_program(handle)
    }

    fn is_program(&self, handle: u32) -> bool {
        self.inner.is_program(handle)
    }

    fn attach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.attach_shader(program, shader)
    }

    fn detach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.detach_shader(program, shader)
    }

    fn link_program(&mut self, program: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.link_program(program)
    }

    fn link_status(&mut self, program: u32) -> Result<bool, GlesError> {
        self.stats.calls += 1;
        self.inner.link_status(program)
    }

    fn program_info_log(&mut self, program: u32) -> Result<String, GlesError> {
        self.stats.calls += 1;
        self.inner.program_info_log(program)
    }

    fn validate_program(&mut self, program: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.validate_program(program)
    }

    fn use_program(&mut self, program: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.stats.shader_switches += 1;
        self.inner.use_program(program)
    }

    fn current_program(&self) -> u32 {
        self.inner.current_program()
    }

    fn uniform_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_location(program, name)
    }

    fn uniform_1i(&mut self, location: u32, x: i32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_1i(location, x)
    }

    fn uniform_1f(&mut self, location: u32, x: f32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_1f(location, x)
    }

    fn uniform_2f(&mut self, location: u32, x: f32, y: f32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_2f(location, x, y)
    }

    fn uniform_3f(&mut self, location: u32, x: f32, y: f32, z: f32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_3f(location, x, y, z)
    }

    fn uniform_4f(
        &mut self,
        location: u32,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_4f(location, x, y, z, w)
    }

    fn uniform_1fv(&mut self, location: u32, values: &[f32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_1fv(location, values)
    }

    fn uniform_matrix_4fv(
        &mut self,
        location: u32,
        transpose: bool,
        values: &[f32],
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.uniform_matrix_4fv(location, transpose, values)
    }

    fn attrib_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.attrib_location(program, name)
    }

    fn bind_attrib_location(
        &mut self,
        program: u32,
        index: u32,
        name: &str,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_attrib_location(program, index, name)
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
        self.stats.calls += 1;
        self.inner
            .vertex_attrib_pointer(index, size, ty, normalized, stride, offset)
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.enable_vertex_attrib_array(index)
    }

    fn disable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.disable_vertex_attrib_array(index)
    }

    // -- Queries (ES 3.0) -------------------------------------------------

    fn gen_queries(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_queries(count)
    }

    fn delete_queries(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_queries(handles)
    }

    fn is_query(&self, handle: u32) -> bool {
        self.inner.is_query(handle)
    }

    fn begin_query(&mut self, target: QueryTarget, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.begin_query(target, handle)
    }

    fn end_query(&mut self, target: QueryTarget) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.end_query(target)
    }

    // -- Samplers (ES 3.0) ------------------------------------------------

    fn gen_samplers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_samplers(count)
    }

    fn delete_samplers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_samplers(handles)
    }

    fn is_sampler(&self, handle: u32) -> bool {
        self.inner.is_sampler(handle)
    }

    fn bind_sampler(&mut self, unit: u32, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_sampler(unit, handle)
    }

    fn sampler_parameter_i(
        &mut self,
        handle: u32,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.sampler_parameter_i(handle, pname, value)
    }

    // -- Transform feedback (ES 3.0) --------------------------------------

    fn gen_transform_feedbacks(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_transform_feedbacks(count)
    }

    fn delete_transform_feedbacks(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_transform_feedbacks(handles)
    }

    fn is_transform_feedback(&self, handle: u32) -> bool {
        self.inner.is_transform_feedback(handle)
    }

    fn bind_transform_feedback(&mut self, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_transform_feedback(handle)
    }

    fn begin_transform_feedback(
        &mut self,
        primitive: TransformFeedbackPrimitive,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.begin_transform_feedback(primitive)
    }

    fn end_transform_feedback(&mut self) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.end_transform_feedback()
    }

    // -- Vertex arrays (ES 3.0) -------------------------------------------

    fn gen_vertex_arrays(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.stats.calls += 1;
        self.inner.gen_vertex_arrays(count)
    }

    fn delete_vertex_arrays(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.delete_vertex_arrays(handles)
    }

    fn is_vertex_array(&self, handle: u32) -> bool {
        self.inner.is_vertex_array(handle)
    }

    fn bind_vertex_array(&mut self, handle: u32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.bind_vertex_array(handle)
    }

    // -- Pipeline state and draws -----------------------------------------

    fn enable(&mut self, cap: Capability) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.enable(cap)
    }

    fn disable(&mut self, cap: Capability) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.disable(cap)
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.blend_func(src, dst)
    }

    fn depth_func(&mut self, func: CompareFunc) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.depth_func(func)
    }

    fn cull_face(&mut self, face: CullFace) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.cull_face(face)
    }

    fn front_face(&mut self, winding: FrontFace) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.front_face(winding)
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.viewport(x, y, width, height)
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.scissor(x, y, width, height)
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.clear_color(r, g, b, a)
    }

    fn clear_depth(&mut self, depth: f32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.clear_depth(depth)
    }

    fn clear_stencil(&mut self, stencil: i32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.clear_stencil(stencil)
    }

    fn clear(&mut self, mask: ClearMask) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.clear(mask)
    }

    fn pixel_store_unpack_alignment(&mut self, alignment: i32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.pixel_store_unpack_alignment(alignment)
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.record_draw(count);
        self.inner.draw_arrays(mode, first, count)
    }

    fn draw_elements(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.record_draw(count);
        self.inner.draw_elements(mode, count, ty, offset)
    }

    fn draw_arrays_instanced(
        &mut self,
        mode: DrawMode,
        first: i32,
        count: i32,
        instances: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.record_draw(count);
        self.inner.draw_arrays_instanced(mode, first, count, instances)
    }

    fn draw_elements_instanced(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
        instances: i32,
    ) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.record_draw(count);
        self.inner
            .draw_elements_instanced(mode, count, ty, offset, instances)
    }

    fn flush(&mut self) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.flush()
    }

    fn finish(&mut self) -> Result<(), GlesError> {
        self.stats.calls += 1;
        self.inner.finish()
    }
}
