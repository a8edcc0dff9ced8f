//! Input adapter types
//!
//! Host event handlers translate DOM (or any windowing) events into
//! [`InputEvent`]s and queue them; the simulation applies them once per tick.

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer position in surface coordinates
    PointerMove { y: f32 },
}

/// Map a pointer's client Y into surface coordinates, accounting for CSS scaling
/// of the canvas element.
pub fn pointer_to_surface_y(
    client_y: f32,
    rect_top: f32,
    rect_height: f32,
    surface_height: f32,
) -> f32 {
    if rect_height <= 0.0 {
        return client_y - rect_top;
    }
    let scale_y = surface_height / rect_height;
    (client_y - rect_top) * scale_y
}
