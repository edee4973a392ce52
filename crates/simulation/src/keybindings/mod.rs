//! Key bindings at two levels.
//!
//! `InputBindings` maps physical keys to logical actions and can be rebound
//! at runtime. `CommandBindings` maps the four command slots (W, A, S, D) to
//! the command each one currently executes; swapping exchanges two slots.

mod actions;
mod bindings;
mod command_table;
pub(crate) mod key_helpers;
mod systems;

pub use actions::{CommandSlot, InputAction};
pub use bindings::{capture_rebind_input, InputBindings, KeyBinding, RebindState};
pub use command_table::{bind_new_movers, process_swap, CommandBindings, SwapBindingsRequested};
pub use key_helpers::keycode_label;
pub use systems::keyboard_commands;
