use std::cmp;
use std::ffi;
use std::fmt;
use std::str::FromStr;

use super::errors::{Error, Result};

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Version::GL(major, minor) => write!(f, "OpenGL {}.{}", major, minor),
            Version::ES(major, minor) => write!(f, "OpenGL ES {}.{}", major, minor),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parses the string returned by `glGetString(GL_VERSION)`.
    fn from_str(desc: &str) -> Result<Self> {
        let fail = || Error::VersionParseFailure(desc.to_owned());

        let (es, tail) = if desc.starts_with("OpenGL ES-") {
            // e.g. "OpenGL ES-CM 1.1", the profile name precedes the version.
            let tail = desc[10..].splitn(2, ' ').nth(1).ok_or_else(fail)?;
            (true, tail)
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let number = tail.split(' ').next().ok_or_else(fail)?;
        let mut iter = number.split('.');

        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(fail)?;

        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(fail)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn query() -> Result<Version> {
        let desc = query_string(gl::VERSION)?;
        info!("{}", desc);
        desc.parse()
    }

    /// Checks that vertex array objects, which every draw goes through, are
    /// available in core.
    pub fn check_requirements(self) -> Result<()> {
        if self < Version::GL(3, 0) || self < Version::ES(3, 0) {
            return Err(Error::Requirement(format!(
                "vertex array objects ({} < OpenGL 3.0 / OpenGL ES 3.0)",
                self
            )));
        }

        Ok(())
    }
}

/// Reads a driver string like `GL_VERSION` or `GL_RENDERER`.
pub unsafe fn query_string(name: gl::types::GLenum) -> Result<String> {
    let desc = gl_call!(gl::GetString(name))?;
    if desc.is_null() {
        return Err(Error::Requirement(format!("string query {:#06x}", name)));
    }

    Ok(ffi::CStr::from_ptr(desc as *const _)
        .to_string_lossy()
        .into_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let v: Version = "4.6.0 NVIDIA 390.77".parse().unwrap();
        assert_eq!(v, Version::GL(4, 6));

        let v: Version = "3.3 (Core Profile) Mesa 18.0.5".parse().unwrap();
        assert_eq!(v, Version::GL(3, 3));

        let v: Version = "OpenGL ES 3.0 Mesa 18.0".parse().unwrap();
        assert_eq!(v, Version::ES(3, 0));

        let v: Version = "OpenGL ES-CM 1.1".parse().unwrap();
        assert_eq!(v, Version::ES(1, 1));

        assert!("".parse::<Version>().is_err());
        assert!("four.six".parse::<Version>().is_err());
        assert!("4".parse::<Version>().is_err());
    }

    #[test]
    fn ordering() {
        assert!(Version::GL(3, 3) > Version::GL(3, 0));
        assert!(Version::GL(4, 0) > Version::GL(3, 3));
        assert!(Version::ES(2, 0) < Version::ES(3, 0));
        assert_eq!(Version::GL(3, 0).partial_cmp(&Version::ES(3, 0)), None);
        assert!(!(Version::GL(3, 0) >= Version::ES(3, 0)));
    }

    #[test]
    fn requirements() {
        assert!(Version::GL(3, 3).check_requirements().is_ok());
        assert!(Version::ES(3, 0).check_requirements().is_ok());
        assert!(Version::GL(2, 1).check_requirements().is_err());
        assert!(Version::ES(2, 0).check_requirements().is_err());
    }
}
