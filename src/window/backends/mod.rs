mod glutin;
mod headless;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    fn show(&self);
    fn hide(&self);
    fn dimensions(&self) -> Vector2<u32>;
    fn device_pixel_ratio(&self) -> f32;
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn is_current(&self) -> bool;
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;

    fn is_headless(&self) -> bool {
        false
    }
}

pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::GlutinVisitor::from(params)?;
    Ok(Box::new(visitor))
}

pub fn new_headless(dimensions: Vector2<u32>, script: Vec<Vec<Event>>) -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new(dimensions, script))
}
