//! Represents an OpenGL context and the window or environment around it.

pub mod events;

pub mod prelude {
    pub use super::events::{Event, Key};
    pub use super::{Window, WindowParams};
}

mod backends;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::Vector2;

use self::backends::Visitor;
use self::events::Event;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
    /// The (major, minor) version of the core profile to request.
    pub gl_version: (u8, u8),
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Hello World".to_owned(),
            size: Vector2::new(640, 480),
            multisample: 0,
            vsync: true,
            gl_version: (3, 3),
        }
    }
}

/// A native window with a current OpenGL context.
pub struct Window {
    visitor: Box<dyn Visitor>,
    events: Vec<Event>,
}

impl Window {
    /// Creates a new `Window` and initialize OpenGL context.
    pub fn new(params: WindowParams) -> Result<Self> {
        info!(
            "Creating window {:?} ({}x{}, GL {}.{} core).",
            params.title, params.size.x, params.size.y, params.gl_version.0, params.gl_version.1
        );

        let visitor = backends::new(params)?;
        Ok(Window {
            visitor,
            events: Vec::new(),
        })
    }

    /// Creates a new `Window` with headless context.
    pub fn headless() -> Self {
        Window::scripted(Vector2::new(0, 0), Vec::new())
    }

    /// Creates a headless `Window` whose `poll_events` returns the batches of
    /// `script` in order, one batch per call.
    pub fn scripted(dimensions: Vector2<u32>, script: Vec<Vec<Event>>) -> Self {
        Window {
            visitor: backends::new_headless(dimensions, script),
            events: Vec::new(),
        }
    }

    /// Polls events from window, and returns the events received since last call.
    pub fn poll_events(&mut self) -> &[Event] {
        self.events.clear();
        self.visitor.poll_events(&mut self.events);
        &self.events
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed. However drivers can choose to override your vsync settings, which means that
    /// you can't know in advance whether swap_buffers will block or not.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }

    /// Shows the window if it was hidden.
    #[inline]
    pub fn show(&self) {
        self.visitor.show();
    }

    /// Hides the window if it was visible.
    #[inline]
    pub fn hide(&self) {
        self.visitor.hide();
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns true if this context is the current one in this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Returns the size in *points* of the client area of the window.
    ///
    /// The client area is the content of the window, excluding the title bar and borders.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels. This is typically one for a normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Returns the size in *pixels* of the framebuffer behind the client area.
    pub fn framebuffer_dimensions(&self) -> Vector2<u32> {
        let dpr = self.device_pixel_ratio();
        let dimensions = self.dimensions();
        Vector2::new(
            (dimensions.x as f32 * dpr).round() as u32,
            (dimensions.y as f32 * dpr).round() as u32,
        )
    }

    /// Returns true if there is no native window and GL context behind this one.
    #[inline]
    pub fn is_headless(&self) -> bool {
        self.visitor.is_headless()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn headless() {
        let mut window = Window::headless();
        assert!(window.is_headless());
        assert!(window.is_current());
        assert!(window.poll_events().is_empty());
        assert_eq!(window.dimensions(), Vector2::new(0, 0));
        assert_eq!(window.device_pixel_ratio(), 1.0);
        window.make_current().unwrap();
        window.swap_buffers().unwrap();
    }

    #[test]
    fn scripted() {
        let script = vec![
            vec![Event::GainFocus],
            vec![],
            vec![Event::Resized(320, 200), Event::Closed],
        ];

        let mut window = Window::scripted(Vector2::new(640, 480), script);
        assert_eq!(window.poll_events(), &[Event::GainFocus]);
        assert!(window.poll_events().is_empty());
        assert_eq!(window.dimensions(), Vector2::new(640, 480));

        assert_eq!(
            window.poll_events(),
            &[Event::Resized(320, 200), Event::Closed]
        );
        assert_eq!(window.dimensions(), Vector2::new(320, 200));
        assert_eq!(window.framebuffer_dimensions(), Vector2::new(320, 200));
        assert!(window.poll_events().is_empty());
    }

    #[test]
    fn default_params() {
        let params = WindowParams::default();
        assert_eq!(params.size, Vector2::new(640, 480));
        assert_eq!(params.gl_version, (3, 3));
        assert_eq!(params.multisample, 0);
        assert!(params.vsync);
    }
}
