//! # What is This?
//!
//! A walk through the smallest set of OpenGL calls that puts a colored quad on
//! screen: window and context creation, vertex and index buffer upload, vertex
//! layout description, shader compilation and a per-frame draw loop that
//! animates a uniform color.
//!
//! Every driver resource is wrapped by a type that owns exactly one GL name. The
//! name is created in the constructor and released on drop.
//!
//! ```rust,ignore
//! use glquad::prelude::*;
//!
//! let mut window = Window::new(WindowParams::default())?;
//! let shader = Shader::from_file("res/shaders/basic.shader")?;
//! ```

#[macro_use]
pub extern crate failure;
#[macro_use]
pub extern crate log;

pub extern crate cgmath;
pub extern crate gl;
pub extern crate glutin;
pub extern crate serde_json;

#[macro_use]
pub mod errors;
#[macro_use]
pub mod video;

pub mod application;
pub mod math;
pub mod window;

pub mod prelude {
    pub use crate::application::prelude::*;
    pub use crate::math::prelude::*;
    pub use crate::video::prelude::*;
    pub use crate::window::prelude::*;
}
