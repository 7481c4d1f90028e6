use super::super::super::events::{Event, Key};

pub fn from_event(source: glutin::Event) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event),
        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested | glutin::WindowEvent::Destroyed => {
            Some(Event::Closed)
        }

        glutin::WindowEvent::Focused(v) => {
            if v {
                Some(Event::GainFocus)
            } else {
                Some(Event::LostFocus)
            }
        }

        glutin::WindowEvent::Resized(glutin::dpi::LogicalSize { width, height }) => {
            Some(Event::Resized(width as u32, height as u32))
        }

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key).map(Event::KeyPressed),

        _ => None,
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    match key {
        glutin::VirtualKeyCode::Escape => Some(Key::Escape),
        glutin::VirtualKeyCode::Return => Some(Key::Return),
        glutin::VirtualKeyCode::Space => Some(Key::Space),
        glutin::VirtualKeyCode::Left => Some(Key::Left),
        glutin::VirtualKeyCode::Right => Some(Key::Right),
        glutin::VirtualKeyCode::Up => Some(Key::Up),
        glutin::VirtualKeyCode::Down => Some(Key::Down),
        _ => None,
    }
}
