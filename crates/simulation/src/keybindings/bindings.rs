//! Physical key bindings: the `InputBindings` resource and the rebind system.

use bevy::prelude::*;

use super::actions::{CommandSlot, InputAction};
use super::key_helpers::{is_capture_ignored, is_ctrl, is_shift, keycode_label};
use crate::replay::ReplayPlayer;

// =============================================================================
// Key binding definition
// =============================================================================

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// Create a simple binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Create a binding that requires Ctrl.
    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    /// True on the frame the key goes down with the right modifiers held.
    ///
    /// A modifier used as the key itself (e.g. Left Ctrl) is not also
    /// required to match its own modifier flag.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.just_pressed(self.key) && self.modifiers_match(keys)
    }

    fn modifiers_match(self, keys: &ButtonInput<KeyCode>) -> bool {
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        let ctrl_ok = is_ctrl(self.key) || ctrl_held == self.ctrl;
        let shift_ok = is_shift(self.key) || shift_held == self.shift;
        ctrl_ok && shift_ok
    }

    /// Human-readable label (e.g. "Ctrl+S", "Left Ctrl", "Space").
    pub fn display_label(self) -> String {
        let mut label = String::new();
        if self.ctrl && !is_ctrl(self.key) {
            label.push_str("Ctrl+");
        }
        if self.shift && !is_shift(self.key) {
            label.push_str("Shift+");
        }
        label.push_str(&keycode_label(self.key));
        label
    }
}

// =============================================================================
// InputBindings resource
// =============================================================================

/// Which physical key triggers each logical action.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputBindings {
    pub button_w: KeyBinding,
    pub button_a: KeyBinding,
    pub button_s: KeyBinding,
    pub button_d: KeyBinding,
    pub undo: KeyBinding,
    pub redo: KeyBinding,
    pub swap_bindings: KeyBinding,
    pub replay: KeyBinding,
    pub reversed_play: KeyBinding,
    pub stop_replay: KeyBinding,
    /// The two command slots exchanged by the swap key.
    pub swap_pair: (CommandSlot, CommandSlot),
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            button_w: KeyBinding::simple(KeyCode::KeyW),
            button_a: KeyBinding::simple(KeyCode::KeyA),
            button_s: KeyBinding::simple(KeyCode::KeyS),
            button_d: KeyBinding::simple(KeyCode::KeyD),
            undo: KeyBinding::simple(KeyCode::KeyU),
            redo: KeyBinding::simple(KeyCode::KeyR),
            swap_bindings: KeyBinding::simple(KeyCode::Space),
            replay: KeyBinding::simple(KeyCode::Enter),
            reversed_play: KeyBinding::simple(KeyCode::ControlLeft),
            stop_replay: KeyBinding::simple(KeyCode::Escape),
            swap_pair: (CommandSlot::A, CommandSlot::D),
        }
    }
}

impl InputBindings {
    /// Get the binding for a specific action.
    pub fn get(&self, action: InputAction) -> KeyBinding {
        match action {
            InputAction::ButtonW => self.button_w,
            InputAction::ButtonA => self.button_a,
            InputAction::ButtonS => self.button_s,
            InputAction::ButtonD => self.button_d,
            InputAction::Undo => self.undo,
            InputAction::Redo => self.redo,
            InputAction::SwapBindings => self.swap_bindings,
            InputAction::Replay => self.replay,
            InputAction::ReversedPlay => self.reversed_play,
            InputAction::StopReplay => self.stop_replay,
        }
    }

    /// Set the binding for a specific action.
    pub fn set(&mut self, action: InputAction, binding: KeyBinding) {
        match action {
            InputAction::ButtonW => self.button_w = binding,
            InputAction::ButtonA => self.button_a = binding,
            InputAction::ButtonS => self.button_s = binding,
            InputAction::ButtonD => self.button_d = binding,
            InputAction::Undo => self.undo = binding,
            InputAction::Redo => self.redo = binding,
            InputAction::SwapBindings => self.swap_bindings = binding,
            InputAction::Replay => self.replay = binding,
            InputAction::ReversedPlay => self.reversed_play = binding,
            InputAction::StopReplay => self.stop_replay = binding,
        }
    }

    pub fn just_pressed(&self, action: InputAction, keys: &ButtonInput<KeyCode>) -> bool {
        self.get(action).just_pressed(keys)
    }

    /// Pairs of actions sharing the same binding.
    pub fn find_conflicts(&self) -> Vec<(InputAction, InputAction)> {
        let mut conflicts = Vec::new();
        let all = InputAction::ALL;
        for (i, &a) in all.iter().enumerate() {
            for &b in &all[i + 1..] {
                if self.get(a) == self.get(b) {
                    conflicts.push((a, b));
                }
            }
        }
        conflicts
    }
}

// =============================================================================
// Rebind capture
// =============================================================================

/// Tracks which action (if any) is currently awaiting a new key assignment.
#[derive(Resource, Default)]
pub struct RebindState {
    pub awaiting: Option<InputAction>,
}

/// System: when a rebind is in progress, capture the next key press and
/// assign it. Pending rebinds wait while a replay is running.
pub fn capture_rebind_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    player: Res<ReplayPlayer>,
    mut bindings: ResMut<InputBindings>,
    mut rebind: ResMut<RebindState>,
) {
    let Some(keys) = keys else {
        return;
    };
    let Some(action) = rebind.awaiting else {
        return;
    };
    if player.is_replaying() {
        return;
    }

    // Ctrl is bindable on its own, but a Ctrl+key chord binds the key.
    let candidates: Vec<KeyCode> = keys
        .get_just_pressed()
        .copied()
        .filter(|&k| !is_capture_ignored(k))
        .collect();
    let Some(key) = candidates
        .iter()
        .copied()
        .find(|&k| !is_ctrl(k))
        .or_else(|| candidates.first().copied())
    else {
        return;
    };
    let ctrl = !is_ctrl(key)
        && (keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight));
    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    let binding = KeyBinding { key, ctrl, shift };

    info!("Bound {} to {}", action.label(), binding.display_label());
    bindings.set(action, binding);
    rebind.awaiting = None;
}
