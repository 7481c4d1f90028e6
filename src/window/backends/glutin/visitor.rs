use glutin::GlContext;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn from(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title)
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let (major, minor) = params.gl_version;
        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (major, minor)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)
            .map_err(|err| err_format!("Failed to create GL window: {}", err))?;

        unsafe {
            window
                .make_current()
                .map_err(|err| err_format!("Failed to make GL context current: {}", err))?;
            gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        }

        Ok(GlutinVisitor {
            window,
            events_loop,
        })
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn show(&self) {
        self.window.show();
    }

    #[inline]
    fn hide(&self) {
        self.window.hide();
    }

    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.window
            .get_inner_size()
            .map(|size| Vector2::new(size.width as u32, size.height as u32))
            .unwrap_or_else(|| Vector2::new(0, 0))
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.window.get_hidpi_factor() as f32
    }

    #[inline]
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let window = &self.window;
        self.events_loop.poll_events(|v| {
            if let glutin::Event::WindowEvent {
                event: glutin::WindowEvent::Resized(size),
                ..
            } = v
            {
                let dpr = window.get_hidpi_factor();
                window.resize(size.to_physical(dpr));
            }

            if let Some(e) = types::from_event(v) {
                events.push(e);
            }
        });
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window.make_current()?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }
}
