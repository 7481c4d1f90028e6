//! Description of how a single vertex looks like inside a vertex buffer.

use super::errors::{Error, Result};
use super::MAX_VERTEX_ATTRIBUTES;

/// The data type in the vertex component.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VertexFormat {
    Byte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    Float,
}

impl VertexFormat {
    /// Size in bytes of a single component.
    pub fn size(self) -> u32 {
        match self {
            VertexFormat::Byte | VertexFormat::UByte => 1,
            VertexFormat::Short | VertexFormat::UShort => 2,
            VertexFormat::Int | VertexFormat::UInt | VertexFormat::Float => 4,
        }
    }
}

/// Plain types that could be used as vertex components.
pub trait VertexComponent: Copy {
    const FORMAT: VertexFormat;
    /// Whether fixed-point values are normalized into [0, 1] or [-1, 1].
    const NORMALIZED: bool;
}

macro_rules! impl_vertex_component {
    ($ty:ty, $format:ident, $normalized:expr) => {
        impl VertexComponent for $ty {
            const FORMAT: VertexFormat = VertexFormat::$format;
            const NORMALIZED: bool = $normalized;
        }
    };
}

impl_vertex_component!(f32, Float, false);
impl_vertex_component!(i32, Int, false);
impl_vertex_component!(u32, UInt, false);
impl_vertex_component!(i16, Short, false);
impl_vertex_component!(u16, UShort, false);
impl_vertex_component!(i8, Byte, false);
impl_vertex_component!(u8, UByte, true);

/// The details of a vertex attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VertexBufferElement {
    /// The data type of each component of this element.
    pub format: VertexFormat,
    /// The number of components per generic vertex element.
    pub count: u8,
    /// Whether fixed-point data values should be normalized.
    pub normalized: bool,
}

impl VertexBufferElement {
    /// Size in bytes of this element.
    #[inline]
    pub fn size(&self) -> u32 {
        u32::from(self.count) * self.format.size()
    }
}

/// `VertexBufferLayout` is an ordered collection of tightly packed vertex
/// elements. Element `i` is fed to the shader attribute at location `i`.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VertexBufferLayout {
    stride: u32,
    elements: Vec<VertexBufferElement>,
}

impl VertexBufferLayout {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends `count` components of type `T`.
    ///
    /// ```rust,ignore
    /// let mut layout = VertexBufferLayout::new();
    /// layout.push::<f32>(2)?;
    /// ```
    #[inline]
    pub fn push<T: VertexComponent>(&mut self, count: u8) -> Result<&mut Self> {
        self.push_element(T::FORMAT, count, T::NORMALIZED)
    }

    /// Appends an element with explicit format.
    pub fn push_element(
        &mut self,
        format: VertexFormat,
        count: u8,
        normalized: bool,
    ) -> Result<&mut Self> {
        if count == 0 || count > 4 {
            return Err(Error::AttributeSizeInvalid(count));
        }

        if self.elements.len() >= MAX_VERTEX_ATTRIBUTES {
            return Err(Error::TooManyAttributes(MAX_VERTEX_ATTRIBUTES));
        }

        let element = VertexBufferElement {
            format,
            count,
            normalized,
        };

        self.stride += element.size();
        self.elements.push(element);
        Ok(self)
    }

    /// Stride of single vertex structure.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    pub fn elements(&self) -> &[VertexBufferElement] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates elements together with their byte offset.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &VertexBufferElement)> {
        self.elements.iter().scan(0, |offset, element| {
            let current = *offset;
            *offset += element.size();
            Some((current, element))
        })
    }

    /// Byte offsets of every element, in push order.
    pub fn offsets(&self) -> Vec<u32> {
        self.iter().map(|(offset, _)| offset).collect()
    }

    /// Relative byte offset of the element at `index`.
    pub fn offset(&self, index: usize) -> Option<u32> {
        self.iter().nth(index).map(|(offset, _)| offset)
    }
}
