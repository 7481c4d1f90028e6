use gl::types::*;

use crate::math::prelude::{Color, Matrix4, Vector2, Vector3, Vector4};

use super::errors::Result;

/// Uniform variable for shader program object. Each matrix based `UniformVariable`
/// is assumed to be supplied in column major order with a optional transpose.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformVariable {
    I32(i32),
    F32(f32),
    Vector2f([f32; 2]),
    Vector3f([f32; 3]),
    Vector4f([f32; 4]),
    Matrix4f([[f32; 4]; 4], bool),
}

impl UniformVariable {
    /// Uploads this value into `location` of the program currently in use.
    pub(crate) unsafe fn bind(&self, location: GLint) -> Result<()> {
        match *self {
            UniformVariable::I32(v) => gl_call!(gl::Uniform1i(location, v)),
            UniformVariable::F32(v) => gl_call!(gl::Uniform1f(location, v)),
            UniformVariable::Vector2f(v) => gl_call!(gl::Uniform2f(location, v[0], v[1])),
            UniformVariable::Vector3f(v) => gl_call!(gl::Uniform3f(location, v[0], v[1], v[2])),
            UniformVariable::Vector4f(v) => {
                gl_call!(gl::Uniform4f(location, v[0], v[1], v[2], v[3]))
            }
            UniformVariable::Matrix4f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl_call!(gl::UniformMatrix4fv(location, 1, transpose, v[0].as_ptr()))
            }
        }
    }
}

impl From<i32> for UniformVariable {
    fn from(v: i32) -> Self {
        UniformVariable::I32(v)
    }
}

impl From<f32> for UniformVariable {
    fn from(v: f32) -> Self {
        UniformVariable::F32(v)
    }
}

impl From<[f32; 2]> for UniformVariable {
    fn from(v: [f32; 2]) -> Self {
        UniformVariable::Vector2f(v)
    }
}

impl From<Vector2<f32>> for UniformVariable {
    fn from(v: Vector2<f32>) -> Self {
        UniformVariable::Vector2f(*v.as_ref())
    }
}

impl From<[f32; 3]> for UniformVariable {
    fn from(v: [f32; 3]) -> Self {
        UniformVariable::Vector3f(v)
    }
}

impl From<Vector3<f32>> for UniformVariable {
    fn from(v: Vector3<f32>) -> Self {
        UniformVariable::Vector3f(*v.as_ref())
    }
}

impl From<[f32; 4]> for UniformVariable {
    fn from(v: [f32; 4]) -> Self {
        UniformVariable::Vector4f(v)
    }
}

impl From<Vector4<f32>> for UniformVariable {
    fn from(v: Vector4<f32>) -> Self {
        UniformVariable::Vector4f(*v.as_ref())
    }
}

impl From<Color<f32>> for UniformVariable {
    fn from(v: Color<f32>) -> Self {
        UniformVariable::Vector4f(v.rgba())
    }
}

impl From<[[f32; 4]; 4]> for UniformVariable {
    fn from(v: [[f32; 4]; 4]) -> Self {
        UniformVariable::Matrix4f(v, false)
    }
}

impl From<Matrix4<f32>> for UniformVariable {
    fn from(v: Matrix4<f32>) -> Self {
        UniformVariable::Matrix4f(*v.as_ref(), false)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn conversions() {
        assert_eq!(UniformVariable::from(1), UniformVariable::I32(1));
        assert_eq!(UniformVariable::from(0.5f32), UniformVariable::F32(0.5));

        let color = Color::new(0.2f32, 0.3, 0.8, 1.0);
        assert_eq!(
            UniformVariable::from(color),
            UniformVariable::Vector4f([0.2, 0.3, 0.8, 1.0])
        );

        let v: UniformVariable = Vector3::new(1.0f32, 2.0, 3.0).into();
        assert_eq!(v, UniformVariable::Vector3f([1.0, 2.0, 3.0]));

        match UniformVariable::from(Matrix4::<f32>::identity()) {
            UniformVariable::Matrix4f(m, false) => {
                assert_eq!(m[0][0], 1.0);
                assert_eq!(m[0][1], 0.0);
                assert_eq!(m[3][3], 1.0);
            }
            v => panic!("unexpected {:?}", v),
        }
    }
}
