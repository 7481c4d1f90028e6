//! Compiled and linked shader programs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::path::Path;

use gl::types::*;

use super::debug;
use super::errors::{Error, Result};
use super::source::{ShaderProgramSource, ShaderStage};
use super::uniform::UniformVariable;

/// A linked pair of vertex and fragment stages.
#[derive(Debug)]
pub struct Shader {
    id: GLuint,
    uniforms: RefCell<HashMap<String, GLint>>,
}

impl Shader {
    /// Compiles and links both stages of `source`.
    pub fn new(source: &ShaderProgramSource) -> Result<Self> {
        source.validate()?;

        unsafe {
            let vs = Self::compile(ShaderStage::Vertex, &source.vertex)?;
            let fs = match Self::compile(ShaderStage::Fragment, &source.fragment) {
                Ok(fs) => fs,
                Err(err) => {
                    gl::DeleteShader(vs);
                    return Err(err);
                }
            };

            let program = Self::link(vs, fs);

            // The stage objects are no longer needed once linking is done.
            gl::DeleteShader(vs);
            gl::DeleteShader(fs);

            let id = program?;
            debug!("Created shader program {}.", id);

            Ok(Shader {
                id,
                uniforms: RefCell::new(HashMap::new()),
            })
        }
    }

    /// Loads a combined shader file and builds a program from it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading shader from {}.", path.display());

        let source = ShaderProgramSource::load(path)?;
        Self::new(&source)
    }

    /// Compiles a single stage. On failure the info log is logged, the shader
    /// object is deleted and no name is returned.
    pub unsafe fn compile(stage: ShaderStage, src: &str) -> Result<GLuint> {
        let c_str = CString::new(src.as_bytes()).map_err(|_| Error::ShaderCompileFailure {
            stage,
            log: "source contains an interior nul byte".to_owned(),
        })?;

        let shader = gl_call!(gl::CreateShader(stage.into()))?;
        debug::build_or_release(
            shader,
            |shader| {
                gl_call!(gl::ShaderSource(shader, 1, &c_str.as_ptr(), ::std::ptr::null()))?;
                gl_call!(gl::CompileShader(shader))?;

                let mut status = GLint::from(gl::FALSE);
                gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

                if status != GLint::from(gl::TRUE) {
                    let mut len = 0;
                    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);

                    let mut buf = vec![0u8; len.max(1) as usize];
                    gl::GetShaderInfoLog(
                        shader,
                        len,
                        ::std::ptr::null_mut(),
                        buf.as_mut_ptr() as *mut GLchar,
                    );

                    let log = info_log(buf);
                    error!("Failed to compile {} shader!\n{}", stage, log);
                    return Err(Error::ShaderCompileFailure { stage, log });
                }

                Ok(shader)
            },
            |shader| gl::DeleteShader(shader),
        )
    }

    unsafe fn link(vs: GLuint, fs: GLuint) -> Result<GLuint> {
        let program = gl_call!(gl::CreateProgram())?;
        debug::build_or_release(
            program,
            |program| {
                gl_call!(gl::AttachShader(program, vs))?;
                gl_call!(gl::AttachShader(program, fs))?;
                gl_call!(gl::LinkProgram(program))?;

                let mut status = GLint::from(gl::FALSE);
                gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

                if status != GLint::from(gl::TRUE) {
                    let mut len: GLint = 0;
                    gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);

                    let mut buf = vec![0u8; len.max(1) as usize];
                    gl::GetProgramInfoLog(
                        program,
                        len,
                        ::std::ptr::null_mut(),
                        buf.as_mut_ptr() as *mut GLchar,
                    );

                    let log = info_log(buf);
                    error!("Failed to link shader program!\n{}", log);
                    return Err(Error::ProgramLinkFailure(log));
                }

                gl_call!(gl::ValidateProgram(program))?;
                gl::DetachShader(program, vs);
                gl::DetachShader(program, fs);
                Ok(program)
            },
            |program| gl::DeleteProgram(program),
        )
    }

    #[inline]
    pub fn bind(&self) -> Result<()> {
        unsafe { gl_call!(gl::UseProgram(self.id)) }
    }

    #[inline]
    pub fn unbind(&self) -> Result<()> {
        unsafe { gl_call!(gl::UseProgram(0)) }
    }

    /// The GL name of this program.
    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Returns the location of uniform `name`, or -1 if the program does not
    /// use it. Lookups are cached per name.
    pub fn uniform_location(&self, name: &str) -> Result<GLint> {
        if let Some(&location) = self.uniforms.borrow().get(name) {
            return Ok(location);
        }

        let c_name = CString::new(name.as_bytes())
            .map_err(|_| Error::InvalidIdentifier(name.to_owned()))?;
        let location = unsafe { gl_call!(gl::GetUniformLocation(self.id, c_name.as_ptr()))? };
        if location == -1 {
            warn!("Uniform {:?} doesn't exist in shader program {}.", name, self.id);
        }

        self.uniforms.borrow_mut().insert(name.to_owned(), location);
        Ok(location)
    }

    /// Binds this program and uploads `variable` into uniform `name`.
    pub fn set_uniform<T>(&self, name: &str, variable: T) -> Result<()>
    where
        T: Into<UniformVariable>,
    {
        let location = self.uniform_location(name)?;
        self.bind()?;
        unsafe { variable.into().bind(location) }
    }

    #[inline]
    pub fn set_uniform_4f(&self, name: &str, v0: f32, v1: f32, v2: f32, v3: f32) -> Result<()> {
        self.set_uniform(name, [v0, v1, v2, v3])
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            let _ = gl_call!(gl::DeleteProgram(self.id));
        }
    }
}

/// Converts a nul terminated info log into a string.
fn info_log(mut buf: Vec<u8>) -> String {
    if let Some(end) = buf.iter().position(|&v| v == 0) {
        buf.truncate(end);
    }

    String::from_utf8_lossy(&buf).trim_end().to_owned()
}
