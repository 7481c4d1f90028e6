use std::collections::VecDeque;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::events::Event;
use super::Visitor;

/// A window without native surface or GL context. It replays a script of
/// events, one batch per poll, and reports nothing once the script runs out.
pub struct HeadlessVisitor {
    dimensions: Vector2<u32>,
    script: VecDeque<Vec<Event>>,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>, script: Vec<Vec<Event>>) -> Self {
        HeadlessVisitor {
            dimensions,
            script: script.into(),
        }
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn show(&self) {}

    #[inline]
    fn hide(&self) {}

    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        if let Some(batch) = self.script.pop_front() {
            for v in batch {
                if let Event::Resized(width, height) = v {
                    self.dimensions = Vector2::new(width, height);
                }

                events.push(v);
            }
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        true
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn is_headless(&self) -> bool {
        true
    }
}
