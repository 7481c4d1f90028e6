extern crate glquad;

use glquad::video::prelude::*;
use glquad::video::{as_bytes, MAX_VERTEX_ATTRIBUTES};

#[test]
fn quad_positions() {
    let positions: [f32; 8] = [-0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, 0.5];

    let mut layout = VertexBufferLayout::new();
    layout.push::<f32>(2).unwrap();

    assert_eq!(layout.stride(), 8);
    assert_eq!(layout.offsets(), vec![0]);
    assert_eq!(as_bytes(&positions).len(), 4 * layout.stride() as usize);
}

#[test]
fn position_and_color() {
    let mut layout = VertexBufferLayout::new();
    layout
        .push::<f32>(3)
        .unwrap()
        .push::<u8>(4)
        .unwrap()
        .push::<f32>(2)
        .unwrap();

    assert_eq!(layout.stride(), 12 + 4 + 8);
    assert_eq!(layout.offsets(), vec![0, 12, 16]);

    let color = layout.elements()[1];
    assert_eq!(color.format, VertexFormat::UByte);
    assert_eq!(color.count, 4);
    assert!(color.normalized);
}

#[test]
fn limits() {
    let mut layout = VertexBufferLayout::new();
    for _ in 0..MAX_VERTEX_ATTRIBUTES {
        layout.push::<f32>(1).unwrap();
    }

    assert!(layout.push::<f32>(1).is_err());
    assert_eq!(layout.len(), MAX_VERTEX_ATTRIBUTES);
    assert_eq!(layout.stride(), 4 * MAX_VERTEX_ATTRIBUTES as u32);
}

#[test]
fn index_formats() {
    assert_eq!(IndexFormat::U16.stride(), 2);
    assert_eq!(IndexFormat::U32.stride(), 4);
    assert_eq!(Primitive::Triangles.assemble(6), 2);
}
