//! This module contains the math utils that mainly comes from `cgmath`, plus the
//! small color helpers used by the render loop.

pub mod color;
pub mod pulse;

pub mod prelude {
    pub use cgmath::{Matrix4, Vector2, Vector3, Vector4};

    pub use super::color::Color;
    pub use super::pulse::{ColorPulse, PulseParams};
}
