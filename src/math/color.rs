use cgmath::BaseFloat;
use serde::{Deserialize, Serialize};

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl<S: BaseFloat> From<[S; 4]> for Color<S> {
    fn from(v: [S; 4]) -> Self {
        Color::new(v[0], v[1], v[2], v[3])
    }
}

impl<S: BaseFloat> Into<[S; 4]> for Color<S> {
    fn into(self) -> [S; 4] {
        self.rgba()
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }

    /// Clip to [0.0, 1.0] range.
    pub fn clip(&self) -> Self {
        let mut color = *self;
        color.r = self.r.max(S::zero()).min(S::one());
        color.g = self.g.max(S::zero()).min(S::one());
        color.b = self.b.max(S::zero()).min(S::one());
        color.a = self.a.max(S::zero()).min(S::one());
        color
    }

    /// Returns a copy with the red channel replaced.
    #[inline]
    pub fn with_red(&self, r: S) -> Self {
        Color { r, ..*self }
    }

    pub fn rgba(&self) -> [S; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn black() -> Self {
        Color::new(S::zero(), S::zero(), S::zero(), S::one())
    }
}
