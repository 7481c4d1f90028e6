use gl::types::*;

use super::errors::Result;
use super::layout::VertexBufferLayout;
use super::vertex_buffer::VertexBuffer;

/// A vertex array object, which binds a vertex buffer to the attribute layout a
/// shader expects.
#[derive(Debug)]
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    /// Generates a vertex array object and binds it.
    pub fn new() -> Result<Self> {
        let mut id = 0;
        unsafe {
            gl_call!(gl::GenVertexArrays(1, &mut id))?;
            let va = VertexArray { id };
            va.bind()?;
            Ok(va)
        }
    }

    /// Associates `vb` with this vertex array. Element `i` of `layout` is fed
    /// to attribute location `i`.
    pub fn add_buffer(&self, vb: &VertexBuffer, layout: &VertexBufferLayout) -> Result<()> {
        self.bind()?;
        vb.bind()?;

        let stride = layout.stride() as GLsizei;
        for (i, (offset, element)) in layout.iter().enumerate() {
            let location = i as GLuint;
            let normalized = if element.normalized {
                gl::TRUE
            } else {
                gl::FALSE
            };

            unsafe {
                gl_call!(gl::EnableVertexAttribArray(location))?;
                gl_call!(gl::VertexAttribPointer(
                    location,
                    GLint::from(element.count),
                    element.format.into(),
                    normalized,
                    stride,
                    offset as usize as *const ::std::os::raw::c_void,
                ))?;
            }
        }

        Ok(())
    }

    #[inline]
    pub fn bind(&self) -> Result<()> {
        unsafe { gl_call!(gl::BindVertexArray(self.id)) }
    }

    #[inline]
    pub fn unbind(&self) -> Result<()> {
        unsafe { gl_call!(gl::BindVertexArray(0)) }
    }

    /// The GL name of this vertex array.
    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            let _ = gl_call!(gl::DeleteVertexArrays(1, &self.id));
        }
    }
}
