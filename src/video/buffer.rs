use gl::types::*;

use super::debug;
use super::errors::{Error, Result};

/// Hint abouts the intended update strategy of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BufferHint {
    /// The resource is initialized with data and cannot be changed later, this
    /// is the most common and most efficient usage.
    Immutable,
    /// The resource is initialized without data, but will be be updated by the
    /// CPU in each frame.
    Stream,
    /// The resource is initialized without data and will be written by the CPU
    /// before use, updates will be infrequent.
    Dynamic,
}

/// Vertex indices can be either 16- or 32-bit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    /// Size in bytes of a single index.
    #[inline]
    pub fn stride(self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }
}

/// Reinterprets a slice of plain values as raw bytes.
pub fn as_bytes<T: Copy>(values: &[T]) -> &[u8] {
    let len = values.len() * ::std::mem::size_of::<T>();
    unsafe { ::std::slice::from_raw_parts(values.as_ptr() as *const u8, len) }
}

/// Generates a buffer, binds it to `target` and uploads `data`.
pub(crate) unsafe fn create(target: GLenum, hint: BufferHint, data: &[u8]) -> Result<GLuint> {
    let mut id = 0;
    gl_call!(gl::GenBuffers(1, &mut id))?;

    debug::build_or_release(
        id,
        |id| {
            gl_call!(gl::BindBuffer(target, id))?;

            let value = if data.is_empty() {
                ::std::ptr::null()
            } else {
                data.as_ptr() as *const ::std::os::raw::c_void
            };

            gl_call!(gl::BufferData(
                target,
                data.len() as GLsizeiptr,
                value,
                hint.into()
            ))?;

            Ok(id)
        },
        |id| gl::DeleteBuffers(1, &id),
    )
}

/// Overwrites a range of a buffer that has been created with a mutable hint.
pub(crate) unsafe fn update(
    target: GLenum,
    id: GLuint,
    hint: BufferHint,
    len: usize,
    offset: usize,
    data: &[u8],
) -> Result<()> {
    if hint == BufferHint::Immutable {
        return Err(Error::UpdateImmutableBuffer);
    }

    if offset + data.len() > len {
        return Err(Error::OutOfBounds);
    }

    if data.is_empty() {
        return Ok(());
    }

    gl_call!(gl::BindBuffer(target, id))?;
    gl_call!(gl::BufferSubData(
        target,
        offset as GLintptr,
        data.len() as GLsizeiptr,
        data.as_ptr() as *const ::std::os::raw::c_void,
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bytes() {
        let positions = [-0.5f32, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, 0.5];
        assert_eq!(as_bytes(&positions).len(), 32);

        let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];
        let bytes = as_bytes(&indices);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[4..8], &1u32.to_ne_bytes());

        let empty: [u16; 0] = [];
        assert!(as_bytes(&empty).is_empty());
    }

    #[test]
    fn index_stride() {
        assert_eq!(IndexFormat::U16.stride(), 2);
        assert_eq!(IndexFormat::U32.stride(), 4);
    }

    #[test]
    fn update_rejects_before_touching_gl() {
        unsafe {
            let rsp = update(gl::ARRAY_BUFFER, 1, BufferHint::Immutable, 16, 0, &[0; 4]);
            match rsp {
                Err(Error::UpdateImmutableBuffer) => {}
                _ => panic!("expected UpdateImmutableBuffer"),
            }

            let rsp = update(gl::ARRAY_BUFFER, 1, BufferHint::Dynamic, 16, 14, &[0; 4]);
            match rsp {
                Err(Error::OutOfBounds) => {}
                _ => panic!("expected OutOfBounds"),
            }
        }
    }
}
