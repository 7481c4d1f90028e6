//! The thin layer over OpenGL that puts vertices on screen.
//!
//! Every type in here owns exactly one GL object. The object is generated when the
//! wrapper is created and deleted when the wrapper is dropped, so the lifetime of a
//! GPU resource is the lifetime of its Rust value.
//!
//! All of these types assume that a GL context is current on the calling thread and
//! its function pointers have been loaded, which is what `Window::new` does.
//!
//! # Error checking
//!
//! Driver calls are wrapped with `gl_call!`, which drains stale errors before the
//! call, then logs and returns whatever `glGetError` reports afterwards:
//!
//! ```rust,ignore
//! unsafe { gl_call!(gl::BindBuffer(gl::ARRAY_BUFFER, id))? };
//! ```

#[macro_use]
pub mod macros;

pub mod capabilities;
pub mod debug;
pub mod errors;
pub mod index_buffer;
pub mod layout;
pub mod renderer;
pub mod shader;
pub mod source;
pub mod uniform;
pub mod vertex_array;
pub mod vertex_buffer;

mod buffer;
mod types;

pub use self::buffer::{as_bytes, BufferHint, IndexFormat};

/// Maximum number of attributes in a vertex layout.
pub const MAX_VERTEX_ATTRIBUTES: usize = 16;

pub mod prelude {
    pub use super::capabilities::Version;
    pub use super::debug::GLError;
    pub use super::errors::Error as VideoError;
    pub use super::index_buffer::IndexBuffer;
    pub use super::layout::{VertexBufferElement, VertexBufferLayout, VertexComponent, VertexFormat};
    pub use super::renderer::{Primitive, Renderer};
    pub use super::shader::Shader;
    pub use super::source::{ShaderProgramSource, ShaderStage};
    pub use super::uniform::UniformVariable;
    pub use super::vertex_array::VertexArray;
    pub use super::vertex_buffer::VertexBuffer;
    pub use super::{BufferHint, IndexFormat};
}
