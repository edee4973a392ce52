//! Key-code labels and modifier classification.

use bevy::prelude::*;

/// Display name for a key. Letters and digits drop their `Key`/`Digit`
/// prefix; a few keys get a shorter or clearer name.
pub fn keycode_label(key: KeyCode) -> String {
    let named = match key {
        KeyCode::Escape => "Esc",
        KeyCode::ControlLeft => "Left Ctrl",
        KeyCode::ControlRight => "Right Ctrl",
        KeyCode::ShiftLeft => "Left Shift",
        KeyCode::ShiftRight => "Right Shift",
        KeyCode::AltLeft => "Left Alt",
        KeyCode::AltRight => "Right Alt",
        KeyCode::ArrowUp => "Up",
        KeyCode::ArrowDown => "Down",
        KeyCode::ArrowLeft => "Left",
        KeyCode::ArrowRight => "Right",
        KeyCode::PageUp => "PgUp",
        KeyCode::PageDown => "PgDn",
        _ => {
            let debug = format!("{key:?}");
            return debug
                .strip_prefix("Key")
                .or_else(|| debug.strip_prefix("Digit"))
                .unwrap_or(&debug)
                .to_string();
        }
    };
    named.to_string()
}

pub(crate) fn is_ctrl(key: KeyCode) -> bool {
    matches!(key, KeyCode::ControlLeft | KeyCode::ControlRight)
}

pub(crate) fn is_shift(key: KeyCode) -> bool {
    matches!(key, KeyCode::ShiftLeft | KeyCode::ShiftRight)
}

/// Keys that only modify other keys and are skipped when capturing a rebind.
/// Ctrl is deliberately absent: Left Ctrl is a default action key.
pub(crate) fn is_capture_ignored(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::ShiftLeft
            | KeyCode::ShiftRight
            | KeyCode::AltLeft
            | KeyCode::AltRight
            | KeyCode::SuperLeft
            | KeyCode::SuperRight
    )
}
