use hashbrown::HashMap;
use opal_handle::{HandleTable, ObjectKind, UnknownHandle};

use crate::backend::GlBackend;
use crate::error::GlesError;

/// Per-context object bookkeeping: one handle table per category, the
/// per-program uniform-location tables, and the ambient current program.
///
/// Binding state for textures, buffers and friends lives on the native side;
/// the registry only tracks `current_program` because uniform location ids
/// are scoped to the program that minted them and must be resolved against
/// whichever program is in use.
pub(crate) struct ObjectRegistry<B: GlBackend> {
    pub(crate) textures: HandleTable<B::Texture>,
    pub(crate) buffers: HandleTable<B::Buffer>,
    pub(crate) framebuffers: HandleTable<B::Framebuffer>,
    pub(crate) renderbuffers: HandleTable<B::Renderbuffer>,
    pub(crate) shaders: HandleTable<B::Shader>,
    pub(crate) programs: HandleTable<B::Program>,
    pub(crate) queries: HandleTable<B::Query>,
    pub(crate) samplers: HandleTable<B::Sampler>,
    pub(crate) transform_feedbacks: HandleTable<B::TransformFeedback>,
    pub(crate) vertex_arrays: HandleTable<B::VertexArray>,
    /// Uniform-location tables keyed by owning program handle. An entry is
    /// created with its program and removed with it; location ids inside are
    /// minted per program, starting at 1 like every other table.
    pub(crate) uniforms: HashMap<u32, HandleTable<B::UniformLocation>>,
    /// Handle of the program in use; 0 when none. Deleting that program
    /// does not clear this, so the next uniform operation surfaces the
    /// use-after-delete instead of hiding it.
    pub(crate) current_program: u32,
}

impl<B: GlBackend> ObjectRegistry<B> {
    pub(crate) fn new() -> Self {
        Self {
            textures: HandleTable::new(ObjectKind::Texture),
            buffers: HandleTable::new(ObjectKind::Buffer),
            framebuffers: HandleTable::new(ObjectKind::Framebuffer),
            renderbuffers: HandleTable::new(ObjectKind::Renderbuffer),
            shaders: HandleTable::new(ObjectKind::Shader),
            programs: HandleTable::new(ObjectKind::Program),
            queries: HandleTable::new(ObjectKind::Query),
            samplers: HandleTable::new(ObjectKind::Sampler),
            transform_feedbacks: HandleTable::new(ObjectKind::TransformFeedback),
            vertex_arrays: HandleTable::new(ObjectKind::VertexArray),
            uniforms: HashMap::new(),
            current_program: 0,
        }
    }

    /// Mints a program handle together with its empty uniform table.
    pub(crate) fn insert_program(&mut self, program: B::Program) -> u32 {
        let handle = self.programs.insert(program);
        self.uniforms
            .insert(handle, HandleTable::new(ObjectKind::UniformLocation));
        handle
    }

    /// Removes a program and cascades to its uniform table.
    pub(crate) fn remove_program(&mut self, handle: u32) -> Result<B::Program, UnknownHandle> {
        let program = self.programs.remove(handle)?;
        self.uniforms.remove(&handle);
        Ok(program)
    }

    pub(crate) fn uniform_table_mut(
        &mut self,
        program: u32,
    ) -> Result<&mut HandleTable<B::UniformLocation>, UnknownHandle> {
        self.uniforms.get_mut(&program).ok_or(UnknownHandle {
            kind: ObjectKind::Program,
            handle: program,
        })
    }

    /// Resolves a location id against the program currently in use.
    pub(crate) fn current_uniform(
        &self,
        location: u32,
    ) -> Result<&B::UniformLocation, GlesError> {
        if self.current_program == 0 {
            return Err(GlesError::NoCurrentProgram);
        }
        let table = self.uniforms.get(&self.current_program).ok_or(UnknownHandle {
            kind: ObjectKind::Program,
            handle: self.current_program,
        })?;
        Ok(table.get(location)?)
    }

    /// Live uniform locations across all programs.
    pub(crate) fn uniform_count(&self) -> usize {
        self.uniforms.values().map(HandleTable::len).sum()
    }
}

/// Resolves `handle` against `table`, treating 0 as "no object".
pub(crate) fn optional_object<T>(
    table: &HandleTable<T>,
    handle: u32,
) -> Result<Option<&T>, UnknownHandle> {
    if handle == 0 {
        Ok(None)
    } else {
        table.get(handle).map(Some)
    }
}
