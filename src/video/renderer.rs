//! Issues the actual draw calls.

use gl::types::*;

use crate::math::prelude::{Color, Vector2};

use super::capabilities::Version;
use super::errors::{Error, Result};
use super::index_buffer::IndexBuffer;
use super::shader::Shader;
use super::vertex_array::VertexArray;

/// Defines how the input vertex data is used to assemble primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Separate points.
    Points,
    /// Separate lines.
    Lines,
    /// Line strips.
    LineStrip,
    /// Separate triangles.
    Triangles,
    /// Triangle strips.
    TriangleStrip,
}

impl Primitive {
    /// Returns the number of primitives assembled from `indices` vertices.
    pub fn assemble(self, indices: u32) -> u32 {
        match self {
            Primitive::Points => indices,
            Primitive::Lines => indices / 2,
            Primitive::LineStrip => indices.saturating_sub(1),
            Primitive::Triangles => indices / 3,
            Primitive::TriangleStrip => indices.saturating_sub(2),
        }
    }
}

/// Stateless front of the draw calls. Creating one checks that the current
/// context is recent enough.
#[derive(Debug)]
pub struct Renderer {
    version: Version,
}

impl Renderer {
    /// Queries and validates the version of the current context.
    pub fn new() -> Result<Self> {
        let version = unsafe { Version::query()? };
        version.check_requirements()?;

        info!("Renderer ready on {}.", version);
        Ok(Renderer { version })
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Clears the color buffer.
    pub fn clear(&self, color: Color<f32>) -> Result<()> {
        unsafe {
            gl_call!(gl::ClearColor(color.r, color.g, color.b, color.a))?;
            gl_call!(gl::Clear(gl::COLOR_BUFFER_BIT))
        }
    }

    /// Sets the viewport to cover `dimensions` pixels from the lower-left corner.
    pub fn set_viewport(&self, dimensions: Vector2<u32>) -> Result<()> {
        unsafe {
            gl_call!(gl::Viewport(
                0,
                0,
                dimensions.x as GLsizei,
                dimensions.y as GLsizei
            ))
        }
    }

    /// Draws every index of `ib` as triangles. Returns the number of triangles.
    #[inline]
    pub fn draw(&self, va: &VertexArray, ib: &IndexBuffer, shader: &Shader) -> Result<u32> {
        self.draw_with(Primitive::Triangles, va, ib, shader)
    }

    /// Draws every index of `ib` assembled as `primitive`.
    pub fn draw_with(
        &self,
        primitive: Primitive,
        va: &VertexArray,
        ib: &IndexBuffer,
        shader: &Shader,
    ) -> Result<u32> {
        shader.bind()?;
        va.bind()?;
        ib.bind()?;

        unsafe {
            gl_call!(gl::DrawElements(
                primitive.into(),
                ib.count() as GLsizei,
                ib.format().into(),
                ::std::ptr::null(),
            ))?;
        }

        Ok(primitive.assemble(ib.count()))
    }

    /// Draws `count` vertices starting at `first` without an index buffer.
    pub fn draw_arrays(
        &self,
        va: &VertexArray,
        shader: &Shader,
        first: u32,
        count: u32,
    ) -> Result<u32> {
        let (first, count) = vertex_range(first, count)?;

        shader.bind()?;
        va.bind()?;

        unsafe {
            gl_call!(gl::DrawArrays(gl::TRIANGLES, first, count))?;
        }

        Ok(Primitive::Triangles.assemble(count as u32))
    }
}

/// Converts a vertex range into the signed values GL takes. The whole range
/// must be addressable by a `GLint`.
fn vertex_range(first: u32, count: u32) -> Result<(GLint, GLsizei)> {
    let max = GLint::max_value() as u32;
    match first.checked_add(count) {
        Some(end) if end <= max => Ok((first as GLint, count as GLsizei)),
        _ => Err(Error::OutOfBounds),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assemble() {
        assert_eq!(Primitive::Triangles.assemble(6), 2);
        assert_eq!(Primitive::Triangles.assemble(3), 1);
        assert_eq!(Primitive::TriangleStrip.assemble(4), 2);
        assert_eq!(Primitive::TriangleStrip.assemble(1), 0);
        assert_eq!(Primitive::Lines.assemble(4), 2);
        assert_eq!(Primitive::LineStrip.assemble(0), 0);
        assert_eq!(Primitive::Points.assemble(7), 7);
    }

    #[test]
    fn range() {
        assert_eq!(vertex_range(0, 3).unwrap(), (0, 3));
        assert_eq!(vertex_range(6, 6).unwrap(), (6, 6));

        let max = GLint::max_value() as u32;
        assert_eq!(vertex_range(0, max).unwrap(), (0, GLint::max_value()));

        for &(first, count) in &[(0, max + 1), (max + 1, 0), (max, 1), (1, u32::max_value())] {
            match vertex_range(first, count) {
                Err(Error::OutOfBounds) => {}
                v => panic!("unexpected {:?} for ({}, {})", v, first, count),
            }
        }
    }
}
