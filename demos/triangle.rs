//! Draws a single triangle with raw OpenGL calls and no wrappers.

extern crate env_logger;
extern crate gl;
extern crate glquad;

use std::ffi::CString;
use std::mem;
use std::ptr;

use gl::types::*;
use glquad::prelude::*;

const VS: &str = r#"
#version 330 core

layout(location = 0) in vec4 position;

void main()
{
    gl_Position = position;
}
"#;

const FS: &str = r#"
#version 330 core

layout(location = 0) out vec4 color;

void main()
{
    color = vec4(1.0, 0.0, 0.0, 1.0);
}
"#;

unsafe fn compile(kind: GLenum, src: &str) -> glquad::errors::Result<GLuint> {
    let src = CString::new(src)?;
    let id = gl::CreateShader(kind);
    gl::ShaderSource(id, 1, &src.as_ptr(), ptr::null());
    gl::CompileShader(id);

    let mut status = GLint::from(gl::FALSE);
    gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
    if status != GLint::from(gl::TRUE) {
        let mut len = 0;
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);

        let mut buf = vec![0u8; len.max(1) as usize];
        gl::GetShaderInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        gl::DeleteShader(id);

        let kind = if kind == gl::VERTEX_SHADER {
            "vertex"
        } else {
            "fragment"
        };

        return Err(glquad::failure::err_msg(format!(
            "Failed to compile {} shader!\n{}",
            kind,
            String::from_utf8_lossy(&buf)
        )));
    }

    Ok(id)
}

unsafe fn create_program(vs: &str, fs: &str) -> glquad::errors::Result<GLuint> {
    let vs = compile(gl::VERTEX_SHADER, vs)?;
    let fs = match compile(gl::FRAGMENT_SHADER, fs) {
        Ok(fs) => fs,
        Err(err) => {
            gl::DeleteShader(vs);
            return Err(err);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::ValidateProgram(program);

    gl::DeleteShader(vs);
    gl::DeleteShader(fs);
    Ok(program)
}

fn main() -> glquad::errors::Result<()> {
    env_logger::init();

    let mut window = Window::new(WindowParams::default())?;

    let positions: [f32; 6] = [-0.5, -0.5, 0.0, 0.5, 0.5, -0.5];

    let (vao, buffer, program) = unsafe {
        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        let mut buffer = 0;
        gl::GenBuffers(1, &mut buffer);
        gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            mem::size_of_val(&positions) as GLsizeiptr,
            positions.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(
            0,
            2,
            gl::FLOAT,
            gl::FALSE,
            (mem::size_of::<f32>() * 2) as GLsizei,
            ptr::null(),
        );

        let program = create_program(VS, FS)?;
        gl::UseProgram(program);
        (vao, buffer, program)
    };

    'main: loop {
        let mut resized = false;
        for v in window.poll_events() {
            match *v {
                Event::Closed | Event::KeyPressed(Key::Escape) => break 'main,
                Event::Resized(..) => resized = true,
                _ => {}
            }
        }

        if resized {
            let size = window.framebuffer_dimensions();
            unsafe { gl::Viewport(0, 0, size.x as GLsizei, size.y as GLsizei) };
        }

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
        }

        window.swap_buffers()?;
    }

    unsafe {
        gl::DeleteProgram(program);
        gl::DeleteBuffers(1, &buffer);
        gl::DeleteVertexArrays(1, &vao);
    }

    Ok(())
}
