//! Per-frame ordering via `SystemSet` phases in the `Update` schedule.
//!
//! ```text
//! Input  →  Commands  →  Replay
//! ```
//!
//! * **Input** – Keyboard polling and rebind capture. Produces request events.
//! * **Commands** – Dispatch, undo, redo and swap requests are applied to the
//!   history and the mover, in that order.
//! * **Replay** – Stop, start, then advance the active replay. Anything the
//!   Commands phase read this frame was already dropped if a replay was
//!   running at the time.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Commands` → `Replay`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationUpdateSet {
    /// Per-frame input processing (keybindings, rebind capture).
    Input,
    /// Applying command, undo, redo and swap requests.
    Commands,
    /// Starting, stopping and ticking the replay.
    Replay,
}
