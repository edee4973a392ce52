//! Undo/redo history for move commands.
//!
//! A `CommandHistory` resource keeps two stacks: the applied log (most recent
//! last) and the redo log (most recently undone last). Dispatching a new
//! command clears the redo log. Requests arrive as events so the keyboard
//! handler, the HUD and tests all go through the same systems.

pub mod log;
pub mod ops;
pub mod systems;

#[cfg(test)]
mod tests;

pub use log::CommandHistory;
pub use ops::{dispatch_command, redo_next, undo_last};
pub use systems::{
    process_dispatch, process_redo, process_undo, sync_history_limit, ExecuteCommand,
    RedoRequested, UndoRequested,
};
