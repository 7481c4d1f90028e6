/// The subset of keys the render loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Return,
    Space,
    Left,
    Right,
    Up,
    Down,
}

/// The enumerations of all events that come from the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The size of window has changed.
    Resized(u32, u32),
    /// A key has been pressed.
    KeyPressed(Key),
}
