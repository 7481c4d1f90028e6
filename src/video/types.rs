use gl::types::*;

use super::buffer::{BufferHint, IndexFormat};
use super::layout::VertexFormat;
use super::renderer::Primitive;
use super::source::ShaderStage;

impl From<BufferHint> for GLenum {
    fn from(hint: BufferHint) -> Self {
        match hint {
            BufferHint::Immutable => gl::STATIC_DRAW,
            BufferHint::Stream => gl::STREAM_DRAW,
            BufferHint::Dynamic => gl::DYNAMIC_DRAW,
        }
    }
}

impl From<IndexFormat> for GLenum {
    fn from(format: IndexFormat) -> Self {
        match format {
            IndexFormat::U16 => gl::UNSIGNED_SHORT,
            IndexFormat::U32 => gl::UNSIGNED_INT,
        }
    }
}

impl From<VertexFormat> for GLenum {
    fn from(format: VertexFormat) -> Self {
        match format {
            VertexFormat::Byte => gl::BYTE,
            VertexFormat::UByte => gl::UNSIGNED_BYTE,
            VertexFormat::Short => gl::SHORT,
            VertexFormat::UShort => gl::UNSIGNED_SHORT,
            VertexFormat::Int => gl::INT,
            VertexFormat::UInt => gl::UNSIGNED_INT,
            VertexFormat::Float => gl::FLOAT,
        }
    }
}

impl From<Primitive> for GLenum {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Points => gl::POINTS,
            Primitive::Lines => gl::LINES,
            Primitive::LineStrip => gl::LINE_STRIP,
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

impl From<ShaderStage> for GLenum {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enums() {
        assert_eq!(GLenum::from(BufferHint::Immutable), gl::STATIC_DRAW);
        assert_eq!(GLenum::from(IndexFormat::U32), gl::UNSIGNED_INT);
        assert_eq!(GLenum::from(VertexFormat::Float), gl::FLOAT);
        assert_eq!(GLenum::from(Primitive::Triangles), gl::TRIANGLES);
        assert_eq!(GLenum::from(ShaderStage::Fragment), gl::FRAGMENT_SHADER);
    }
}
