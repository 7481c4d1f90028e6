//! Polling of driver-reported errors.

use std::fmt;

use gl::types::*;

use super::errors::{Error, Result};

/// Upper bound of errors drained at once. Some drivers keep reporting the same
/// error while no context is current.
const MAX_PENDING_ERRORS: usize = 32;

/// The error codes returned by `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GLError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    Unknown(GLenum),
}

impl GLError {
    /// Maps a raw error code. Returns `None` for `GL_NO_ERROR`.
    pub fn from_code(code: GLenum) -> Option<GLError> {
        match code {
            gl::NO_ERROR => None,
            gl::INVALID_ENUM => Some(GLError::InvalidEnum),
            gl::INVALID_VALUE => Some(GLError::InvalidValue),
            gl::INVALID_OPERATION => Some(GLError::InvalidOperation),
            gl::INVALID_FRAMEBUFFER_OPERATION => Some(GLError::InvalidFramebufferOperation),
            gl::OUT_OF_MEMORY => Some(GLError::OutOfMemory),
            v => Some(GLError::Unknown(v)),
        }
    }

    /// Returns the raw error code.
    pub fn code(self) -> GLenum {
        match self {
            GLError::InvalidEnum => gl::INVALID_ENUM,
            GLError::InvalidValue => gl::INVALID_VALUE,
            GLError::InvalidOperation => gl::INVALID_OPERATION,
            GLError::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            GLError::OutOfMemory => gl::OUT_OF_MEMORY,
            GLError::Unknown(v) => v,
        }
    }
}

impl fmt::Display for GLError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GLError::InvalidEnum => {
                write!(f, "An unacceptable value is specified for an enumerated argument.")
            }
            GLError::InvalidValue => write!(f, "A numeric argument is out of range."),
            GLError::InvalidOperation => {
                write!(f, "The specified operation is not allowed in the current state.")
            }
            GLError::InvalidFramebufferOperation => write!(
                f,
                "The command is trying to render to or read from the framebuffer while the \
                 currently bound framebuffer is not framebuffer complete."
            ),
            GLError::OutOfMemory => {
                write!(f, "There is not enough memory left to execute the command.")
            }
            GLError::Unknown(v) => write!(f, "Oops, Unknown OpenGL error {:#06x}.", v),
        }
    }
}

/// Drains every pending error flag.
pub unsafe fn clear_errors() {
    for _ in 0..MAX_PENDING_ERRORS {
        if gl::GetError() == gl::NO_ERROR {
            break;
        }
    }
}

/// Checks the next pending error flag.
pub unsafe fn check() -> Result<()> {
    match GLError::from_code(gl::GetError()) {
        None => Ok(()),
        Some(err) => Err(Error::GL(err)),
    }
}

/// Logs every pending error flag as raised by `call`, and returns the first one.
pub unsafe fn log_errors(call: &str, file: &str, line: u32) -> Result<()> {
    let mut first = None;
    for _ in 0..MAX_PENDING_ERRORS {
        match GLError::from_code(gl::GetError()) {
            None => break,
            Some(err) => {
                error!(
                    "[GL] ({:#06x}) {} `{}` {}:{}",
                    err.code(),
                    err,
                    call,
                    file,
                    line
                );

                if first.is_none() {
                    first = Some(err);
                }
            }
        }
    }

    match first {
        None => Ok(()),
        Some(err) => Err(Error::GL(err)),
    }
}

/// Finishes building the freshly created GL object `id`. If `build` fails,
/// `release` is called on `id` before the error is returned, so no early exit
/// leaves the object behind.
pub(crate) fn build_or_release<T, B, R>(id: GLuint, build: B, release: R) -> Result<T>
where
    B: FnOnce(GLuint) -> Result<T>,
    R: FnOnce(GLuint),
{
    let rsp = build(id);
    if rsp.is_err() {
        release(id);
    }

    rsp
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn release_on_failure() {
        let released = Cell::new(None);
        let rsp: Result<()> = build_or_release(
            5,
            |_| Err(Error::GL(GLError::InvalidValue)),
            |id| released.set(Some(id)),
        );

        match rsp {
            Err(Error::GL(GLError::InvalidValue)) => {}
            v => panic!("unexpected {:?}", v),
        }
        assert_eq!(released.get(), Some(5));
    }

    #[test]
    fn keep_on_success() {
        let released = Cell::new(None);
        let rsp = build_or_release(7, |id| Ok(id * 2), |id| released.set(Some(id)));

        assert_eq!(rsp.unwrap(), 14);
        assert_eq!(released.get(), None);
    }

    #[test]
    fn codes() {
        assert_eq!(GLError::from_code(gl::NO_ERROR), None);
        assert_eq!(GLError::from_code(0x0500), Some(GLError::InvalidEnum));
        assert_eq!(GLError::from_code(0x0501), Some(GLError::InvalidValue));
        assert_eq!(GLError::from_code(0x0502), Some(GLError::InvalidOperation));
        assert_eq!(GLError::from_code(0x0505), Some(GLError::OutOfMemory));
        assert_eq!(
            GLError::from_code(0x0506),
            Some(GLError::InvalidFramebufferOperation)
        );
        assert_eq!(GLError::from_code(0x1234), Some(GLError::Unknown(0x1234)));
    }

    #[test]
    fn code_round_trips() {
        for &code in &[0x0500, 0x0501, 0x0502, 0x0505, 0x0506, 0x9999] {
            assert_eq!(GLError::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn display() {
        let desc = format!("{}", GLError::Unknown(0x1234));
        assert_eq!(desc, "Oops, Unknown OpenGL error 0x1234.");
        assert!(format!("{}", GLError::InvalidValue).contains("out of range"));
    }
}
