use gl::types::*;

use super::buffer::{self, BufferHint};
use super::errors::Result;

/// A driver-allocated memory region holding raw per-vertex data.
#[derive(Debug)]
pub struct VertexBuffer {
    id: GLuint,
    len: usize,
    hint: BufferHint,
}

impl VertexBuffer {
    /// Creates a vertex buffer and uploads `bytes` into it. The buffer is left
    /// bound to `GL_ARRAY_BUFFER`.
    pub fn new(bytes: &[u8], hint: BufferHint) -> Result<Self> {
        let id = unsafe { buffer::create(gl::ARRAY_BUFFER, hint, bytes)? };
        debug!("Created vertex buffer {} with {} bytes.", id, bytes.len());

        Ok(VertexBuffer {
            id,
            len: bytes.len(),
            hint,
        })
    }

    /// Creates a vertex buffer from a slice of plain vertices.
    #[inline]
    pub fn from_slice<T: Copy>(vertices: &[T], hint: BufferHint) -> Result<Self> {
        Self::new(buffer::as_bytes(vertices), hint)
    }

    #[inline]
    pub fn bind(&self) -> Result<()> {
        unsafe { gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, self.id)) }
    }

    #[inline]
    pub fn unbind(&self) -> Result<()> {
        unsafe { gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, 0)) }
    }

    /// Overwrites part of the buffer, starting at `offset` bytes.
    pub fn update(&self, offset: usize, bytes: &[u8]) -> Result<()> {
        unsafe { buffer::update(gl::ARRAY_BUFFER, self.id, self.hint, self.len, offset, bytes) }
    }

    /// The GL name of this buffer.
    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn hint(&self) -> BufferHint {
        self.hint
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            let _ = gl_call!(gl::DeleteBuffers(1, &self.id));
        }
    }
}
