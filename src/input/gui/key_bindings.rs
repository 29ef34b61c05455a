use crate::controllers::explorer::events::Key;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Trackpads report pixel deltas; this many pixels count as one wheel notch.
const PIXELS_PER_WHEEL_STEP: f64 = 50.0;

#[must_use]
pub fn key_for(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Escape | KeyCode::KeyQ => Key::Quit,
        KeyCode::KeyR => Key::Reset,
        KeyCode::KeyC => Key::PaletteCycle,
        KeyCode::KeyH => Key::Help,
        KeyCode::Equal | KeyCode::NumpadAdd => Key::ZoomIn,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::ZoomOut,
        KeyCode::ArrowUp => Key::PanUp,
        KeyCode::ArrowDown => Key::PanDown,
        KeyCode::ArrowLeft => Key::PanLeft,
        KeyCode::ArrowRight => Key::PanRight,
        _ => return None,
    };

    Some(key)
}

/// Vertical scroll amount in wheel notches. Positive means away from the user.
#[must_use]
pub fn wheel_steps(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_WHEEL_STEP,
    }
}
