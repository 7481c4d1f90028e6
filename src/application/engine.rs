use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video::renderer::Renderer;
use crate::window::events::{Event, Key};
use crate::window::Window;

use super::settings::Settings;
use super::Application;

/// `Engine` is the root object of the application. It owns the window together with
/// its GL context and the renderer, and drives the frame loop.
pub struct Engine {
    window: Window,
    renderer: Option<Renderer>,
    shutdown: bool,
    frames: u64,
}

impl Engine {
    /// Setup engine with specified settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        if settings.headless {
            return Ok(Engine::headless());
        }

        let window = Window::new(settings.window.clone())?;
        let renderer = Renderer::new()?;
        renderer.set_viewport(window.framebuffer_dimensions())?;

        Ok(Engine {
            window,
            renderer: Some(renderer),
            shutdown: false,
            frames: 0,
        })
    }

    /// Setup engine without a native window or GL context. Nothing could be drawn
    /// with it, but the frame loop runs as usual.
    pub fn headless() -> Self {
        Engine::with_window(Window::headless())
    }

    /// Setup a headless engine that replays `script` as window events, one batch
    /// per frame.
    pub fn scripted(script: Vec<Vec<Event>>) -> Self {
        Engine::with_window(Window::scripted(Vector2::new(0, 0), script))
    }

    fn with_window(window: Window) -> Self {
        Engine {
            window,
            renderer: None,
            shutdown: false,
            frames: 0,
        }
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the renderer, or an error if this engine is headless.
    pub fn renderer(&self) -> Result<&Renderer> {
        self.renderer
            .as_ref()
            .ok_or_else(|| err_format!("Headless engine has no renderer."))
    }

    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }

    /// Returns the number of frames completed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run the main loop of `Engine`, this will block the working thread until
    /// the window is closed, escape is pressed or `shutdown` is called.
    pub fn run<T: Application>(&mut self, application: &mut T) -> Result<()> {
        info!("Engine starts running.");
        self.shutdown = false;

        while !self.shutdown {
            self.advance(application)?;
        }

        application.on_exit(self)?;
        info!("Engine stopped after {} frames.", self.frames);
        Ok(())
    }

    fn advance<T: Application>(&mut self, application: &mut T) -> Result<()> {
        let events = self.window.poll_events().to_vec();

        for v in events {
            match v {
                Event::Closed | Event::KeyPressed(Key::Escape) => {
                    // Ends the loop without drawing this frame.
                    self.shutdown = true;
                    return Ok(());
                }
                Event::Resized(..) => {
                    if let Some(ref renderer) = self.renderer {
                        renderer.set_viewport(self.window.framebuffer_dimensions())?;
                    }
                }
                _ => {}
            }

            application.on_event(self, v)?;
        }

        application.on_update(self)?;
        self.window.swap_buffers()?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Countdown {
        remains: u32,
        updates: u32,
        exited: bool,
    }

    impl Application for Countdown {
        fn on_update(&mut self, engine: &mut Engine) -> Result<()> {
            self.updates += 1;
            self.remains -= 1;
            if self.remains == 0 {
                engine.shutdown();
            }
            Ok(())
        }

        fn on_exit(&mut self, _: &mut Engine) -> Result<()> {
            self.exited = true;
            Ok(())
        }
    }

    #[test]
    fn shutdown_ends_loop() {
        let mut engine = Engine::headless();
        let mut app = Countdown {
            remains: 3,
            updates: 0,
            exited: false,
        };

        engine.run(&mut app).unwrap();
        assert_eq!(app.updates, 3);
        assert_eq!(engine.frames(), 3);
        assert!(engine.is_shutdown());
        assert!(app.exited);
    }

    struct Failing;

    impl Application for Failing {
        fn on_update(&mut self, _: &mut Engine) -> Result<()> {
            Err(err_format!("boom"))
        }
    }

    #[test]
    fn update_error_propagates() {
        let mut engine = Engine::headless();
        assert!(engine.run(&mut Failing).is_err());
        assert_eq!(engine.frames(), 0);
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
        updates: u32,
    }

    impl Application for Recorder {
        fn on_event(&mut self, _: &mut Engine, event: Event) -> Result<()> {
            self.events.push(event);
            Ok(())
        }

        fn on_update(&mut self, _: &mut Engine) -> Result<()> {
            self.updates += 1;
            Ok(())
        }
    }

    #[test]
    fn escape_ends_loop() {
        let mut engine = Engine::scripted(vec![
            vec![Event::GainFocus],
            vec![],
            vec![Event::KeyPressed(Key::Space), Event::KeyPressed(Key::Escape)],
            vec![Event::LostFocus],
        ]);

        let mut app = Recorder::default();
        engine.run(&mut app).unwrap();

        // The frame carrying escape is not drawn.
        assert_eq!(engine.frames(), 2);
        assert_eq!(app.updates, 2);
        assert_eq!(
            app.events,
            vec![Event::GainFocus, Event::KeyPressed(Key::Space)]
        );
    }

    #[test]
    fn close_ends_loop() {
        let mut engine = Engine::scripted(vec![vec![Event::Resized(800, 600)], vec![Event::Closed]]);
        let mut app = Recorder::default();
        engine.run(&mut app).unwrap();

        assert_eq!(engine.frames(), 1);
        assert_eq!(app.events, vec![Event::Resized(800, 600)]);
        assert_eq!(engine.window().dimensions(), Vector2::new(800, 600));
    }

    #[test]
    fn headless_has_no_renderer() {
        let engine = Engine::new(&Settings {
            headless: true,
            ..Settings::default()
        })
        .unwrap();

        assert!(engine.window().is_headless());
        assert!(engine.renderer().is_err());
    }
}
