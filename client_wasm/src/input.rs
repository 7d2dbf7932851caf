//! Keyboard input handling

use game_core::{InputEvent, Intent};

/// Map a `KeyboardEvent.key` value to a paddle control
///
/// W/S drive the left paddle, the arrow keys drive the right one.
pub fn key_intent(key: &str) -> Option<Intent> {
    match key {
        "w" | "W" => Some(Intent::LeftUp),
        "s" | "S" => Some(Intent::LeftDown),
        "ArrowUp" => Some(Intent::RightUp),
        "ArrowDown" => Some(Intent::RightDown),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<InputEvent> {
    if key == "Enter" {
        return Some(InputEvent::Confirm);
    }
    key_intent(key).map(InputEvent::Pressed)
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    key_intent(key).map(InputEvent::Released)
}

/// Canvas size for a browser window: 80% of its width, 60% of its height
pub fn canvas_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    ((inner_width * 0.8) as u32, (inner_height * 0.6) as u32)
}
