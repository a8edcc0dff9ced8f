//! Keyboard and pointer input

use game_core::{pointer_to_surface_y, InputEvent, Key};
use web_sys::HtmlCanvasElement;

/// Translate a key-down name. Unrecognized keys are ignored.
pub fn handle_key_down(key: &str) -> Option<InputEvent> {
    Key::parse(key).map(InputEvent::KeyDown)
}

/// Translate a key-up name. Unrecognized keys are ignored.
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    Key::parse(key).map(InputEvent::KeyUp)
}

/// Map a page-space pointer y onto the canvas's logical height
pub fn handle_pointer_move(canvas: &HtmlCanvasElement, client_y: f64) -> InputEvent {
    let rect = canvas.get_bounding_client_rect();
    let y = pointer_to_surface_y(
        client_y as f32,
        rect.top() as f32,
        rect.height() as f32,
        canvas.height() as f32,
    );
    InputEvent::PointerMove { y }
}
