//! Typed GL ES parameters.
//!
//! Every enum carries the raw GL constant value it stands for. `to_raw` is
//! what native bindings consume; `from_raw` is provided where raw values flow
//! back *into* the crate (driver error codes, framebuffer status).

use bitflags::bitflags;
use std::fmt;

/// API profile a context was created for. ES 3.0 is a superset; operations
/// introduced by it fail with `unsupported` on an ES 2.0 context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Es2,
    Es3,
}

/// Native error flag values reported by `take_error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    InvalidEnum = 0x0500,
    InvalidValue = 0x0501,
    InvalidOperation = 0x0502,
    OutOfMemory = 0x0505,
    InvalidFramebufferOperation = 0x0506,
}

impl ErrorCode {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0x0500 => Self::InvalidEnum,
            0x0501 => Self::InvalidValue,
            0x0502 => Self::InvalidOperation,
            0x0505 => Self::OutOfMemory,
            0x0506 => Self::InvalidFramebufferOperation,
            _ => return None,
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidEnum => "GL_INVALID_ENUM",
            Self::InvalidValue => "GL_INVALID_VALUE",
            Self::InvalidOperation => "GL_INVALID_OPERATION",
            Self::OutOfMemory => "GL_OUT_OF_MEMORY",
            Self::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Buffer selection for `clear`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const DEPTH = 0x0000_0100;
        const STENCIL = 0x0000_0400;
        const COLOR = 0x0000_4000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TextureTarget {
    Texture2d = 0x0DE1,
    Texture3d = 0x806F,
    CubeMap = 0x8513,
    Texture2dArray = 0x8C1A,
}

impl TextureTarget {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn requires_es3(self) -> bool {
        matches!(self, Self::Texture3d | Self::Texture2dArray)
    }
}

/// 2D image selector for `tex_image_2d` and friends. Cube map textures are
/// addressed per face here, never through the bindable `CubeMap` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TexImageTarget {
    Texture2d = 0x0DE1,
    CubeMapPositiveX = 0x8515,
    CubeMapNegativeX = 0x8516,
    CubeMapPositiveY = 0x8517,
    CubeMapNegativeY = 0x8518,
    CubeMapPositiveZ = 0x8519,
    CubeMapNegativeZ = 0x851A,
}

impl TexImageTarget {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BufferTarget {
    Array = 0x8892,
    ElementArray = 0x8893,
    PixelPack = 0x88EB,
    PixelUnpack = 0x88EC,
    CopyRead = 0x8F36,
    CopyWrite = 0x8F37,
    Uniform = 0x8A11,
    TransformFeedback = 0x8C8E,
}

impl BufferTarget {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn requires_es3(self) -> bool {
        !matches!(self, Self::Array | Self::ElementArray)
    }
}

/// Targets accepted by the indexed bind points (`bind_buffer_base`/`_range`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum IndexedBufferTarget {
    Uniform = 0x8A11,
    TransformFeedback = 0x8C8E,
}

impl IndexedBufferTarget {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BufferUsage {
    StreamDraw = 0x88E0,
    StreamRead = 0x88E1,
    StreamCopy = 0x88E2,
    StaticDraw = 0x88E4,
    StaticRead = 0x88E5,
    StaticCopy = 0x88E6,
    DynamicDraw = 0x88E8,
    DynamicRead = 0x88E9,
    DynamicCopy = 0x88EA,
}

impl BufferUsage {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    /// The `*Read`/`*Copy` usages only exist on ES 3.0.
    pub fn requires_es3(self) -> bool {
        !matches!(self, Self::StreamDraw | Self::StaticDraw | Self::DynamicDraw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ShaderKind {
    Fragment = 0x8B30,
    Vertex = 0x8B31,
}

impl ShaderKind {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FramebufferTarget {
    /// Both read and draw on ES 2.0; the combined bind point on ES 3.0.
    Framebuffer = 0x8D40,
    Read = 0x8CA8,
    Draw = 0x8CA9,
}

impl FramebufferTarget {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn requires_es3(self) -> bool {
        matches!(self, Self::Read | Self::Draw)
    }
}

/// Framebuffer attachment point. Color attachments beyond index 0 only exist
/// on ES 3.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    Color(u32),
    Depth,
    Stencil,
    DepthStencil,
}

impl Attachment {
    pub fn to_raw(self) -> u32 {
        match self {
            Self::Color(index) => 0x8CE0 + index,
            Self::Depth => 0x8D00,
            Self::Stencil => 0x8D20,
            Self::DepthStencil => 0x821A,
        }
    }

    pub fn requires_es3(self) -> bool {
        matches!(self, Self::Color(index) if index > 0) || matches!(self, Self::DepthStencil)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FramebufferStatus {
    Complete = 0x8CD5,
    IncompleteAttachment = 0x8CD6,
    IncompleteMissingAttachment = 0x8CD7,
    IncompleteDimensions = 0x8CD9,
    Unsupported = 0x8CDD,
}

impl FramebufferStatus {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0x8CD5 => Self::Complete,
            0x8CD6 => Self::IncompleteAttachment,
            0x8CD7 => Self::IncompleteMissingAttachment,
            0x8CD9 => Self::IncompleteDimensions,
            0x8CDD => Self::Unsupported,
            _ => return None,
        })
    }

    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DrawMode {
    Points = 0x0000,
    Lines = 0x0001,
    LineLoop = 0x0002,
    LineStrip = 0x0003,
    Triangles = 0x0004,
    TriangleStrip = 0x0005,
    TriangleFan = 0x0006,
}

impl DrawMode {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

/// Element index width for `draw_elements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum IndexType {
    U8 = 0x1401,
    U16 = 0x1403,
    /// 32-bit indices are an ES 3.0 capability.
    U32 = 0x1405,
}

impl IndexType {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn requires_es3(self) -> bool {
        matches!(self, Self::U32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VertexAttribType {
    I8 = 0x1400,
    U8 = 0x1401,
    I16 = 0x1402,
    U16 = 0x1403,
    I32 = 0x1404,
    U32 = 0x1405,
    F32 = 0x1406,
    F16 = 0x140B,
    Fixed = 0x140C,
}

impl VertexAttribType {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Capability {
    CullFace = 0x0B44,
    DepthTest = 0x0B71,
    StencilTest = 0x0B90,
    Dither = 0x0BD0,
    Blend = 0x0BE2,
    ScissorTest = 0x0C11,
    PolygonOffsetFill = 0x8037,
    SampleAlphaToCoverage = 0x809E,
    SampleCoverage = 0x80A0,
    RasterizerDiscard = 0x8C89,
    PrimitiveRestartFixedIndex = 0x8D69,
}

impl Capability {
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    pub fn requires_es3(self) -> bool {
        matches!(self, Self::RasterizerDiscard | Self::PrimitiveRestartFixedIndex)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    SrcColor = 0x0300,
    OneMinusSrcColor = 0x0301,
    SrcAlpha = 0x0302,
    OneMinusSrcAlpha = 0x0303,
    DstAlpha = 0x0304,
    OneMinusDstAlpha = 0x0305,
    DstColor = 0x0306,
    OneMinusDstColor = 0x0307,
    SrcAlphaSaturate = 0x0308,
    ConstantColor = 0x8001,
    OneMinusConstantColor = 0x8002,
    ConstantAlpha = 0x8003,
    OneMinusConstantAlpha = 0x8004,
}

impl BlendFactor {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CompareFunc {
    Never = 0x0200,
    Less = 0x0201,
    Equal = 0x0202,
    Lequal = 0x0203,
    Greater = 0x0204,
    Notequal = 0x0205,
    Gequal = 0x0206,
    Always = 0x0207,
}

impl CompareFunc {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CullFace {
    Front = 0x0404,
    Back = 0x0405,
    FrontAndBack = 0x0408,
}

impl CullFace {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FrontFace {
    Cw = 0x0900,
    Ccw = 0x0901,
}

impl FrontFace {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

/// Query targets. All of them are ES 3.0 surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QueryTarget {
    TransformFeedbackPrimitivesWritten = 0x8C88,
    AnySamplesPassed = 0x8C2F,
    AnySamplesPassedConservative = 0x8D6A,
}

impl QueryTarget {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

/// Output primitive mode for `begin_transform_feedback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TransformFeedbackPrimitive {
    Points = 0x0000,
    Lines = 0x0001,
    Triangles = 0x0004,
}

impl TransformFeedbackPrimitive {
    pub fn to_raw(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_round_trips_through_raw() {
        for code in [
            ErrorCode::InvalidEnum,
            ErrorCode::InvalidValue,
            ErrorCode::InvalidOperation,
            ErrorCode::OutOfMemory,
            ErrorCode::InvalidFramebufferOperation,
        ] {
            assert_eq!(ErrorCode::from_raw(code.to_raw()), Some(code));
        }
        // 0x0503/0x0504 are the desktop-only stack over/underflow codes.
        assert_eq!(ErrorCode::from_raw(0x0503), None);
        assert_eq!(ErrorCode::from_raw(0), None);
    }

    #[test]
    fn color_attachments_index_off_attachment0() {
        assert_eq!(Attachment::Color(0).to_raw(), 0x8CE0);
        assert_eq!(Attachment::Color(3).to_raw(), 0x8CE3);
        assert!(!Attachment::Color(0).requires_es3());
        assert!(Attachment::Color(1).requires_es3());
    }

    #[test]
    fn es3_gating_matches_profile_history() {
        assert!(!TextureTarget::Texture2d.requires_es3());
        assert!(TextureTarget::Texture3d.requires_es3());
        assert!(!BufferTarget::Array.requires_es3());
        assert!(BufferTarget::Uniform.requires_es3());
        assert!(!BufferUsage::StaticDraw.requires_es3());
        assert!(BufferUsage::StaticRead.requires_es3());
        assert!(!FramebufferTarget::Framebuffer.requires_es3());
        assert!(FramebufferTarget::Read.requires_es3());
        assert!(!IndexType::U16.requires_es3());
        assert!(IndexType::U32.requires_es3());
    }

    #[test]
    fn clear_mask_bits_match_gl_values() {
        assert_eq!(ClearMask::COLOR.bits(), 0x4000);
        assert_eq!(ClearMask::DEPTH.bits(), 0x0100);
        assert_eq!(ClearMask::STENCIL.bits(), 0x0400);
        let all = ClearMask::COLOR | ClearMask::DEPTH | ClearMask::STENCIL;
        assert_eq!(all.bits(), 0x4500);
    }
}
