use opal_handle::ObjectKind;
use tracing::{debug, trace};

use crate::backend::GlBackend;
use crate::error::GlesError;
use crate::gles::Gles;
use crate::registry::{optional_object, ObjectRegistry};
use crate::types::{
    Api, Attachment, BlendFactor, BufferTarget, BufferUsage, Capability, ClearMask, CompareFunc,
    CullFace, DrawMode, FramebufferStatus, FramebufferTarget, FrontFace, IndexedBufferTarget,
    IndexType, QueryTarget, ShaderKind, TexImageTarget, TextureTarget,
    TransformFeedbackPrimitive, VertexAttribType,
};

/// A live graphics session: the native binding plus the handle bookkeeping
/// that adapts it to the integer-handle surface.
///
/// A context is an ordinary owned value, never process state; independent
/// contexts own independent handle counters and object tables. All methods
/// take `&mut self`; a context is driven from one thread.
pub struct Context<B: GlBackend> {
    api: Api,
    backend: B,
    objects: ObjectRegistry<B>,
}

impl<B: GlBackend> Context<B> {
    pub fn new(backend: B, api: Api) -> Self {
        debug!(?api, "created gles context");
        Self {
            api,
            backend,
            objects: ObjectRegistry::new(),
        }
    }

    pub fn es2(backend: B) -> Self {
        Self::new(backend, Api::Es2)
    }

    pub fn es3(backend: B) -> Self {
        Self::new(backend, Api::Es3)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Number of live entries in one category's handle table. Uniform
    /// locations are summed across all live programs.
    pub fn live_objects(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::Texture => self.objects.textures.len(),
            ObjectKind::Buffer => self.objects.buffers.len(),
            ObjectKind::Framebuffer => self.objects.framebuffers.len(),
            ObjectKind::Renderbuffer => self.objects.renderbuffers.len(),
            ObjectKind::Shader => self.objects.shaders.len(),
            ObjectKind::Program => self.objects.programs.len(),
            ObjectKind::Query => self.objects.queries.len(),
            ObjectKind::Sampler => self.objects.samplers.len(),
            ObjectKind::TransformFeedback => self.objects.transform_feedbacks.len(),
            ObjectKind::VertexArray => self.objects.vertex_arrays.len(),
            ObjectKind::UniformLocation => self.objects.uniform_count(),
        }
    }

    fn require_es3(&self, op: &'static str) -> Result<(), GlesError> {
        match self.api {
            Api::Es3 => Ok(()),
            Api::Es2 => Err(GlesError::Unsupported(op)),
        }
    }

    fn gate(&self, needs_es3: bool, op: &'static str) -> Result<(), GlesError> {
        if needs_es3 {
            self.require_es3(op)
        } else {
            Ok(())
        }
    }
}

impl<B: GlBackend> Gles for Context<B> {
    fn api(&self) -> Api {
        self.api
    }

    // -- Textures ---------------------------------------------------------

    fn gen_textures(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let texture = self.backend.create_texture();
            handles.push(self.objects.textures.insert(texture));
        }
        debug!(?handles, "gen textures");
        Ok(handles)
    }

    fn delete_textures(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        debug!(?handles, "delete textures");
        for &handle in handles {
            let texture = self.objects.textures.remove(handle)?;
            self.backend.delete_texture(texture);
        }
        Ok(())
    }

    fn is_texture(&self, handle: u32) -> bool {
        self.objects.textures.contains(handle)
    }

    fn bind_texture(&mut self, target: TextureTarget, handle: u32) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.texture_target")?;
        let texture = optional_object(&self.objects.textures, handle)?;
        self.backend.bind_texture(target, texture);
        Ok(())
    }

    fn active_texture(&mut self, unit: u32) -> Result<(), GlesError> {
        self.backend.active_texture(unit);
        Ok(())
    }

    fn tex_parameter_i(
        &mut self,
        target: TextureTarget,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.texture_target")?;
        self.backend.tex_parameter_i(target, pname, value);
        Ok(())
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
        self.backend
            .tex_image_2d(target, level, internal_format, width, height, format, ty, pixels);
        Ok(())
    }

    fn compressed_tex_image_2d(
        &mut self,
        _target: TexImageTarget,
        _level: i32,
        _internal_format: u32,
        _width: i32,
        _height: i32,
        _data: &[u8],
    ) -> Result<(), GlesError> {
        Err(GlesError::Unsupported("tex.compressed_image_2d"))
    }

    fn compressed_tex_sub_image_2d(
        &mut self,
        _target: TexImageTarget,
        _level: i32,
        _x_offset: i32,
        _y_offset: i32,
        _width: i32,
        _height: i32,
        _format: u32,
        _data: &[u8],
    ) -> Result<(), GlesError> {
        Err(GlesError::Unsupported("tex.compressed_sub_image_2d"))
    }

    fn generate_mipmap(&mut self, target: TextureTarget) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.texture_target")?;
        self.backend.generate_mipmap(target);
        Ok(())
    }

    // -- Buffers ----------------------------------------------------------

    fn gen_buffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let buffer = self.backend.create_buffer();
            handles.push(self.objects.buffers.insert(buffer));
        }
        debug!(?handles, "gen buffers");
        Ok(handles)
    }

    fn delete_buffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        debug!(?handles, "delete buffers");
        for &handle in handles {
            let buffer = self.objects.buffers.remove(handle)?;
            self.backend.delete_buffer(buffer);
        }
        Ok(())
    }

    fn is_buffer(&self, handle: u32) -> bool {
        self.objects.buffers.contains(handle)
    }

    fn bind_buffer(&mut self, target: BufferTarget, handle: u32) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.buffer_target")?;
        let buffer = optional_object(&self.objects.buffers, handle)?;
        self.backend.bind_buffer(target, buffer);
        Ok(())
    }

    fn bind_buffer_base(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.bind_buffer_base")?;
        let buffer = optional_object(&self.objects.buffers, handle)?;
        self.backend.bind_buffer_base(target, index, buffer);
        Ok(())
    }

    fn bind_buffer_range(
        &mut self,
        target: IndexedBufferTarget,
        index: u32,
        handle: u32,
        offset: isize,
        size: isize,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.bind_buffer_range")?;
        let buffer = optional_object(&self.objects.buffers, handle)?;
        self.backend.bind_buffer_range(target, index, buffer, offset, size);
        Ok(())
    }

    fn buffer_data(
        &mut self,
        target: BufferTarget,
        data: &[u8],
        usage: BufferUsage,
    ) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.buffer_target")?;
        self.gate(usage.requires_es3(), "es3.buffer_usage")?;
        self.backend.buffer_data(target, data, usage);
        Ok(())
    }

    fn buffer_sub_data(
        &mut self,
        target: BufferTarget,
        offset: i32,
        data: &[u8],
    ) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.buffer_target")?;
        self.backend.buffer_sub_data(target, offset, data);
        Ok(())
    }

    fn flush_mapped_buffer_range(
        &mut self,
        _target: BufferTarget,
        _offset: i32,
        _length: i32,
    ) -> Result<(), GlesError> {
        Err(GlesError::Unsupported("buffer.flush_mapped_range"))
    }

    // -- Framebuffers -----------------------------------------------------

    fn gen_framebuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let framebuffer = self.backend.create_framebuffer();
            handles.push(self.objects.framebuffers.insert(framebuffer));
        }
        debug!(?handles, "gen framebuffers");
        Ok(handles)
    }

    fn delete_framebuffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        debug!(?handles, "delete framebuffers");
        for &handle in handles {
            let framebuffer = self.objects.framebuffers.remove(handle)?;
            self.backend.delete_framebuffer(framebuffer);
        }
        Ok(())
    }

    fn is_framebuffer(&self, handle: u32) -> bool {
        self.objects.framebuffers.contains(handle)
    }

    fn bind_framebuffer(
        &mut self,
        target: FramebufferTarget,
        handle: u32,
    ) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.framebuffer_target")?;
        let framebuffer = optional_object(&self.objects.framebuffers, handle)?;
        self.backend.bind_framebuffer(target, framebuffer);
        Ok(())
    }

    fn framebuffer_texture_2d(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        tex_target: TexImageTarget,
        texture: u32,
        level: i32,
    ) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.framebuffer_target")?;
        self.gate(attachment.requires_es3(), "es3.attachment")?;
        let texture = optional_object(&self.objects.textures, texture)?;
        self.backend
            .framebuffer_texture_2d(target, attachment, tex_target, texture, level);
        Ok(())
    }

    fn framebuffer_texture_layer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.framebuffer_texture_layer")?;
        let texture = optional_object(&self.objects.textures, texture)?;
        self.backend
            .framebuffer_texture_layer(target, attachment, texture, level, layer);
        Ok(())
    }

    fn framebuffer_renderbuffer(
        &mut self,
        target: FramebufferTarget,
        attachment: Attachment,
        renderbuffer: u32,
    ) -> Result<(), GlesError> {
        self.gate(target.requires_es3(), "es3.framebuffer_target")?;
        self.gate(attachment.requires_es3(), "es3.attachment")?;
        let renderbuffer = optional_object(&self.objects.renderbuffers, renderbuffer)?;
        self.backend
            .framebuffer_renderbuffer(target, attachment, renderbuffer);
        Ok(())
    }

    fn check_framebuffer_status(
        &mut self,
        target: FramebufferTarget,
    ) -> Result<FramebufferStatus, GlesError> {
        self.gate(target.requires_es3(), "es3.framebuffer_target")?;
        Ok(self.backend.check_framebuffer_status(target))
    }

    // -- Renderbuffers ----------------------------------------------------

    fn gen_renderbuffers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let renderbuffer = self.backend.create_renderbuffer();
            handles.push(self.objects.renderbuffers.insert(renderbuffer));
        }
        debug!(?handles, "gen renderbuffers");
        Ok(handles)
    }

    fn delete_renderbuffers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        debug!(?handles, "delete renderbuffers");
        for &handle in handles {
            let renderbuffer = self.objects.renderbuffers.remove(handle)?;
            self.backend.delete_renderbuffer(renderbuffer);
        }
        Ok(())
    }

    fn is_renderbuffer(&self, handle: u32) -> bool {
        self.objects.renderbuffers.contains(handle)
    }

    fn bind_renderbuffer(&mut self, handle: u32) -> Result<(), GlesError> {
        let renderbuffer = optional_object(&self.objects.renderbuffers, handle)?;
        self.backend.bind_renderbuffer(renderbuffer);
        Ok(())
    }

    fn renderbuffer_storage(
        &mut self,
        internal_format: u32,
        width: i32,
        height: i32,
    ) -> Result<(), GlesError> {
        self.backend.renderbuffer_storage(internal_format, width, height);
        Ok(())
    }

    // -- Shaders ----------------------------------------------------------

    fn create_shader(&mut self, kind: ShaderKind) -> Result<u32, GlesError> {
        let shader = self.backend.create_shader(kind);
        let handle = self.objects.shaders.insert(shader);
        debug!(handle, ?kind, "create shader");
        Ok(handle)
    }

    fn delete_shader(&mut self, handle: u32) -> Result<(), GlesError> {
        debug!(handle, "delete shader");
        let shader = self.objects.shaders.remove(handle)?;
        self.backend.delete_shader(shader);
        Ok(())
    }

    fn is_shader(&self, handle: u32) -> bool {
        self.objects.shaders.contains(handle)
    }

    fn shader_source(&mut self, handle: u32, source: &str) -> Result<(), GlesError> {
        let shader = self.objects.shaders.get(handle)?;
        self.backend.shader_source(shader, source);
        Ok(())
    }

    fn compile_shader(&mut self, handle: u32) -> Result<(), GlesError> {
        let shader = self.objects.shaders.get(handle)?;
        self.backend.compile_shader(shader);
        Ok(())
    }

    fn shader_compile_status(&mut self, handle: u32) -> Result<bool, GlesError> {
        let shader = self.objects.shaders.get(handle)?;
        Ok(self.backend.shader_compile_status(shader))
    }

    fn shader_info_log(&mut self, handle: u32) -> Result<String, GlesError> {
        let shader = self.objects.shaders.get(handle)?;
        Ok(self.backend.shader_info_log(shader))
    }

    // -- Programs and uniforms --------------------------------------------

    fn create_program(&mut self) -> Result<u32, GlesError> {
        let program = self.backend.create_program();
        let handle = self.objects.insert_program(program);
        debug!(handle, "create program");
        Ok(handle)
    }

    fn delete_program(&mut self, handle: u32) -> Result<(), GlesError> {
        debug!(handle, "delete program");
        let program = self.objects.remove_program(handle)?;
        self.backend.delete_program(program);
        Ok(())
    }

    fn is_program(&self, handle: u32) -> bool {
        self.objects.programs.contains(handle)
    }

    fn attach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError> {
        let program = self.objects.programs.get(program)?;
        let shader = self.objects.shaders.get(shader)?;
        self.backend.attach_shader(program, shader);
        Ok(())
    }

    fn detach_shader(&mut self, program: u32, shader: u32) -> Result<(), GlesError> {
        let program = self.objects.programs.get(program)?;
        let shader = self.objects.shaders.get(shader)?;
        self.backend.detach_shader(program, shader);
        Ok(())
    }

    fn link_program(&mut self, program: u32) -> Result<(), GlesError> {
        let program = self.objects.programs.get(program)?;
        self.backend.link_program(program);
        Ok(())
    }

    fn link_status(&mut self, program: u32) -> Result<bool, GlesError> {
        let program = self.objects.programs.get(program)?;
        Ok(self.backend.link_status(program))
    }

    fn program_info_log(&mut self, program: u32) -> Result<String, GlesError> {
        let program = self.objects.programs.get(program)?;
        Ok(self.backend.program_info_log(program))
    }

    fn validate_program(&mut self, program: u32) -> Result<(), GlesError> {
        let program = self.objects.programs.get(program)?;
        self.backend.validate_program(program);
        Ok(())
    }

    fn use_program(&mut self, program: u32) -> Result<(), GlesError> {
        let object = optional_object(&self.objects.programs, program)?;
        self.backend.use_program(object);
        self.objects.current_program = program;
        trace!(program, "use program");
        Ok(())
    }

    fn current_program(&self) -> u32 {
        self.objects.current_program
    }

    fn uniform_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError> {
        let object = self.objects.programs.get(program)?;
        let Some(native) = self.backend.uniform_location(object, name) else {
            return Ok(None);
        };
        let table = self.objects.uniform_table_mut(program)?;
        let location = table.insert(native);
        trace!(program, name, location, "uniform location");
        Ok(Some(location))
    }

    fn uniform_1i(&mut self, location: u32, x: i32) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_1i(location, x);
        Ok(())
    }

    fn uniform_1f(&mut self, location: u32, x: f32) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_1f(location, x);
        Ok(())
    }

    fn uniform_2f(&mut self, location: u32, x: f32, y: f32) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_2f(location, x, y);
        Ok(())
    }

    fn uniform_3f(&mut self, location: u32, x: f32, y: f32, z: f32) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_3f(location, x, y, z);
        Ok(())
    }

    fn uniform_4f(
        &mut self,
        location: u32,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    ) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_4f(location, x, y, z, w);
        Ok(())
    }

    fn uniform_1fv(&mut self, location: u32, values: &[f32]) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_1fv(location, values);
        Ok(())
    }

    fn uniform_matrix_4fv(
        &mut self,
        location: u32,
        transpose: bool,
        values: &[f32],
    ) -> Result<(), GlesError> {
        let location = self.objects.current_uniform(location)?;
        self.backend.uniform_matrix_4fv(location, transpose, values);
        Ok(())
    }

    fn attrib_location(&mut self, program: u32, name: &str) -> Result<Option<u32>, GlesError> {
        let program = self.objects.programs.get(program)?;
        Ok(self.backend.attrib_location(program, name))
    }

    fn bind_attrib_location(
        &mut self,
        program: u32,
        index: u32,
        name: &str,
    ) -> Result<(), GlesError> {
        let program = self.objects.programs.get(program)?;
        self.backend.bind_attrib_location(program, index, name);
        Ok(())
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
        self.backend
            .vertex_attrib_pointer(index, size, ty, normalized, stride, offset);
        Ok(())
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError> {
        self.backend.enable_vertex_attrib_array(index);
        Ok(())
    }

    fn disable_vertex_attrib_array(&mut self, index: u32) -> Result<(), GlesError> {
        self.backend.disable_vertex_attrib_array(index);
        Ok(())
    }

    // -- Queries (ES 3.0) -------------------------------------------------

    fn gen_queries(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.require_es3("es3.gen_queries")?;
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let query = self.backend.create_query();
            handles.push(self.objects.queries.insert(query));
        }
        debug!(?handles, "gen queries");
        Ok(handles)
    }

    fn delete_queries(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.require_es3("es3.delete_queries")?;
        debug!(?handles, "delete queries");
        for &handle in handles {
            let query = self.objects.queries.remove(handle)?;
            self.backend.delete_query(query);
        }
        Ok(())
    }

    fn is_query(&self, handle: u32) -> bool {
        self.objects.queries.contains(handle)
    }

    fn begin_query(&mut self, target: QueryTarget, handle: u32) -> Result<(), GlesError> {
        self.require_es3("es3.begin_query")?;
        let query = self.objects.queries.get(handle)?;
        self.backend.begin_query(target, query);
        Ok(())
    }

    fn end_query(&mut self, target: QueryTarget) -> Result<(), GlesError> {
        self.require_es3("es3.end_query")?;
        self.backend.end_query(target);
        Ok(())
    }

    // -- Samplers (ES 3.0) ------------------------------------------------

    fn gen_samplers(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.require_es3("es3.gen_samplers")?;
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let sampler = self.backend.create_sampler();
            handles.push(self.objects.samplers.insert(sampler));
        }
        debug!(?handles, "gen samplers");
        Ok(handles)
    }

    fn delete_samplers(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.require_es3("es3.delete_samplers")?;
        debug!(?handles, "delete samplers");
        for &handle in handles {
            let sampler = self.objects.samplers.remove(handle)?;
            self.backend.delete_sampler(sampler);
        }
        Ok(())
    }

    fn is_sampler(&self, handle: u32) -> bool {
        self.objects.samplers.contains(handle)
    }

    fn bind_sampler(&mut self, unit: u32, handle: u32) -> Result<(), GlesError> {
        self.require_es3("es3.bind_sampler")?;
        let sampler = optional_object(&self.objects.samplers, handle)?;
        self.backend.bind_sampler(unit, sampler);
        Ok(())
    }

    fn sampler_parameter_i(
        &mut self,
        handle: u32,
        pname: u32,
        value: i32,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.sampler_parameter")?;
        let sampler = self.objects.samplers.get(handle)?;
        self.backend.sampler_parameter_i(sampler, pname, value);
        Ok(())
    }

    // -- Transform feedback (ES 3.0) --------------------------------------

    fn gen_transform_feedbacks(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.require_es3("es3.gen_transform_feedbacks")?;
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let feedback = self.backend.create_transform_feedback();
            handles.push(self.objects.transform_feedbacks.insert(feedback));
        }
        debug!(?handles, "gen transform feedbacks");
        Ok(handles)
    }

    fn delete_transform_feedbacks(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.require_es3("es3.delete_transform_feedbacks")?;
        debug!(?handles, "delete transform feedbacks");
        for &handle in handles {
            let feedback = self.objects.transform_feedbacks.remove(handle)?;
            self.backend.delete_transform_feedback(feedback);
        }
        Ok(())
    }

    fn is_transform_feedback(&self, handle: u32) -> bool {
        self.objects.transform_feedbacks.contains(handle)
    }

    fn bind_transform_feedback(&mut self, handle: u32) -> Result<(), GlesError> {
        self.require_es3("es3.bind_transform_feedback")?;
        let feedback = optional_object(&self.objects.transform_feedbacks, handle)?;
        self.backend.bind_transform_feedback(feedback);
        Ok(())
    }

    fn begin_transform_feedback(
        &mut self,
        primitive: TransformFeedbackPrimitive,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.begin_transform_feedback")?;
        self.backend.begin_transform_feedback(primitive);
        Ok(())
    }

    fn end_transform_feedback(&mut self) -> Result<(), GlesError> {
        self.require_es3("es3.end_transform_feedback")?;
        self.backend.end_transform_feedback();
        Ok(())
    }

    // -- Vertex arrays (ES 3.0) -------------------------------------------

    fn gen_vertex_arrays(&mut self, count: u32) -> Result<Vec<u32>, GlesError> {
        self.require_es3("es3.gen_vertex_arrays")?;
        let mut handles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let vertex_array = self.backend.create_vertex_array();
            handles.push(self.objects.vertex_arrays.insert(vertex_array));
        }
        debug!(?handles, "gen vertex arrays");
        Ok(handles)
    }

    fn delete_vertex_arrays(&mut self, handles: &[u32]) -> Result<(), GlesError> {
        self.require_es3("es3.delete_vertex_arrays")?;
        debug!(?handles, "delete vertex arrays");
        for &handle in handles {
            let vertex_array = self.objects.vertex_arrays.remove(handle)?;
            self.backend.delete_vertex_array(vertex_array);
        }
        Ok(())
    }

    fn is_vertex_array(&self, handle: u32) -> bool {
        self.objects.vertex_arrays.contains(handle)
    }

    fn bind_vertex_array(&mut self, handle: u32) -> Result<(), GlesError> {
        self.require_es3("es3.bind_vertex_array")?;
        let vertex_array = optional_object(&self.objects.vertex_arrays, handle)?;
        self.backend.bind_vertex_array(vertex_array);
        Ok(())
    }

    // -- Pipeline state and draws -----------------------------------------

    fn enable(&mut self, cap: Capability) -> Result<(), GlesError> {
        self.gate(cap.requires_es3(), "es3.capability")?;
        self.backend.enable(cap);
        Ok(())
    }

    fn disable(&mut self, cap: Capability) -> Result<(), GlesError> {
        self.gate(cap.requires_es3(), "es3.capability")?;
        self.backend.disable(cap);
        Ok(())
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<(), GlesError> {
        self.backend.blend_func(src, dst);
        Ok(())
    }

    fn depth_func(&mut self, func: CompareFunc) -> Result<(), GlesError> {
        self.backend.depth_func(func);
        Ok(())
    }

    fn cull_face(&mut self, face: CullFace) -> Result<(), GlesError> {
        self.backend.cull_face(face);
        Ok(())
    }

    fn front_face(&mut self, winding: FrontFace) -> Result<(), GlesError> {
        self.backend.front_face(winding);
        Ok(())
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError> {
        self.backend.viewport(x, y, width, height);
        Ok(())
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlesError> {
        self.backend.scissor(x, y, width, height);
        Ok(())
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) -> Result<(), GlesError> {
        self.backend.clear_color(r, g, b, a);
        Ok(())
    }

    fn clear_depth(&mut self, depth: f32) -> Result<(), GlesError> {
        self.backend.clear_depth(depth);
        Ok(())
    }

    fn clear_stencil(&mut self, stencil: i32) -> Result<(), GlesError> {
        self.backend.clear_stencil(stencil);
        Ok(())
    }

    fn clear(&mut self, mask: ClearMask) -> Result<(), GlesError> {
        self.backend.clear(mask);
        Ok(())
    }

    fn pixel_store_unpack_alignment(&mut self, alignment: i32) -> Result<(), GlesError> {
        self.backend.pixel_store_unpack_alignment(alignment);
        Ok(())
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) -> Result<(), GlesError> {
        self.backend.draw_arrays(mode, first, count);
        Ok(())
    }

    fn draw_elements(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
    ) -> Result<(), GlesError> {
        self.gate(ty.requires_es3(), "es3.index_type")?;
        self.backend.draw_elements(mode, count, ty, offset);
        Ok(())
    }

    fn draw_arrays_instanced(
        &mut self,
        mode: DrawMode,
        first: i32,
        count: i32,
        instances: i32,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.draw_arrays_instanced")?;
        self.backend.draw_arrays_instanced(mode, first, count, instances);
        Ok(())
    }

    fn draw_elements_instanced(
        &mut self,
        mode: DrawMode,
        count: i32,
        ty: IndexType,
        offset: i32,
        instances: i32,
    ) -> Result<(), GlesError> {
        self.require_es3("es3.draw_elements_instanced")?;
        self.backend
            .draw_elements_instanced(mode, count, ty, offset, instances);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), GlesError> {
        self.backend.flush();
        Ok(())
    }

    fn finish(&mut self) -> Result<(), GlesError> {
        self.backend.finish();
        Ok(())
    }
}
