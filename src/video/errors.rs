use std::io;

use super::debug::GLError;
use super::source::ShaderStage;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "[GL] {}", _0)]
    GL(GLError),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Can not parse OpenGL version from str \'{}\'.", _0)]
    VersionParseFailure(String),
    #[fail(display = "Failed to compile {} shader, errors: \n{}", stage, log)]
    ShaderCompileFailure { stage: ShaderStage, log: String },
    #[fail(display = "Failed to link shader program, errors: \n{}", _0)]
    ProgramLinkFailure(String),
    #[fail(display = "The {} shader section is missing or empty.", _0)]
    ShaderSectionMissing(ShaderStage),
    #[fail(display = "Vertex attribute must have 1 to 4 components, got {}.", _0)]
    AttributeSizeInvalid(u8),
    #[fail(display = "Too many vertex attributes (>= {}).", _0)]
    TooManyAttributes(usize),
    #[fail(display = "Invalid identifier {:?}.", _0)]
    InvalidIdentifier(String),
    #[fail(display = "Trying to update immutable buffer.")]
    UpdateImmutableBuffer,
    #[fail(display = "Out of bounds.")]
    OutOfBounds,
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
