use gl::types::*;

use super::buffer::{self, BufferHint, IndexFormat};
use super::errors::Result;

/// A driver-allocated memory region holding the vertex indices that define
/// draw order.
#[derive(Debug)]
pub struct IndexBuffer {
    id: GLuint,
    count: u32,
    format: IndexFormat,
}

impl IndexBuffer {
    /// Creates an index buffer of 32-bit indices. The buffer is left bound to
    /// `GL_ELEMENT_ARRAY_BUFFER`.
    pub fn new(indices: &[u32]) -> Result<Self> {
        Self::with_format(buffer::as_bytes(indices), indices.len(), IndexFormat::U32)
    }

    /// Creates an index buffer of 16-bit indices.
    pub fn new_u16(indices: &[u16]) -> Result<Self> {
        Self::with_format(buffer::as_bytes(indices), indices.len(), IndexFormat::U16)
    }

    fn with_format(bytes: &[u8], count: usize, format: IndexFormat) -> Result<Self> {
        let id = unsafe { buffer::create(gl::ELEMENT_ARRAY_BUFFER, BufferHint::Immutable, bytes)? };
        debug!("Created index buffer {} with {} {:?} indices.", id, count, format);

        Ok(IndexBuffer {
            id,
            count: count as u32,
            format,
        })
    }

    #[inline]
    pub fn bind(&self) -> Result<()> {
        unsafe { gl_call!(gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id)) }
    }

    #[inline]
    pub fn unbind(&self) -> Result<()> {
        unsafe { gl_call!(gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0)) }
    }

    /// The GL name of this buffer.
    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// The number of indices.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn format(&self) -> IndexFormat {
        self.format
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            let _ = gl_call!(gl::DeleteBuffers(1, &self.id));
        }
    }
}
