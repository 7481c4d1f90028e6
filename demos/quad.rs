//! Draws an indexed quad through the wrapper types and pulses its red channel.
//!
//! Pass a settings file as the first argument to override the defaults:
//!
//! ```sh
//! cargo run --example quad -- settings.json
//! ```

extern crate env_logger;
extern crate glquad;

use glquad::errors::*;
use glquad::prelude::*;

struct Quad {
    va: VertexArray,
    // Kept alive for as long as the vertex array refers to it.
    _vb: VertexBuffer,
    ib: IndexBuffer,
    shader: Shader,
    clear_color: Color<f32>,
    color: Color<f32>,
    uniform: String,
    pulse: ColorPulse,
}

impl Quad {
    fn new(settings: &Settings) -> Result<Self> {
        let positions: [f32; 8] = [
            -0.5, -0.5, //
            0.5, -0.5, //
            0.5, 0.5, //
            -0.5, 0.5, //
        ];
        let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];

        let va = VertexArray::new()?;
        let vb = VertexBuffer::from_slice(&positions, BufferHint::Immutable)?;

        let mut layout = VertexBufferLayout::new();
        layout.push::<f32>(2)?;
        va.add_buffer(&vb, &layout)?;

        let ib = IndexBuffer::new(&indices)?;

        let shader = Shader::from_file(&settings.shader)?;
        shader.set_uniform(&settings.uniform, settings.color)?;

        va.unbind()?;
        vb.unbind()?;
        ib.unbind()?;
        shader.unbind()?;

        Ok(Quad {
            va,
            _vb: vb,
            ib,
            shader,
            clear_color: settings.clear_color,
            color: settings.color,
            uniform: settings.uniform.clone(),
            pulse: ColorPulse::new(settings.pulse),
        })
    }
}

impl Application for Quad {
    fn on_update(&mut self, engine: &mut Engine) -> Result<()> {
        let renderer = engine.renderer()?;
        renderer.clear(self.clear_color)?;

        let color = self.color.with_red(self.pulse.value());
        self.shader.set_uniform(&self.uniform, color)?;
        renderer.draw(&self.va, &self.ib, &self.shader)?;

        self.pulse.advance();
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut engine = Engine::new(&settings)?;
    if engine.window().is_headless() {
        return Err(glquad::failure::err_msg("The quad needs a window to draw into."));
    }

    let mut quad = Quad::new(&settings)?;
    engine.run(&mut quad)
}
