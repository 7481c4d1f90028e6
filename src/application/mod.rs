//! A minimal application model around the render loop.
//!
//! ## Application
//!
//! `Application` defines a small set of callbacks that `Engine` fires in a
//! pre-determined order every frame: first the window events of this frame go
//! through `on_event`, then `on_update` draws, then the buffers are swapped.
//!
//! ## Engine
//!
//! `Engine` owns the window and the renderer and runs the main loop until the
//! window is closed, escape is pressed or `Engine::shutdown` is called.

pub mod settings;

mod engine;

pub mod prelude {
    pub use super::engine::Engine;
    pub use super::settings::Settings;
    pub use super::Application;
}

pub use self::engine::Engine;
pub use self::settings::Settings;

use crate::errors::*;
use crate::window::events::Event;

/// `Application` is a user-friendly facade to building application, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_event` is called once for every window event received this frame,
    /// before `on_update`.
    fn on_event(&mut self, _: &mut Engine, _: Event) -> Result<()> {
        Ok(())
    }

    /// `Application::on_update` is called every frame. Its the main workhorse
    /// function for frame updates.
    fn on_update(&mut self, _: &mut Engine) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called once after the last frame.
    fn on_exit(&mut self, _: &mut Engine) -> Result<()> {
        Ok(())
    }
}
