//! Timed replay of the applied log.
//!
//! `Replay` puts the mover back at the start anchor and re-executes the log
//! oldest first; `ReversedPlay` puts it at the position after the latest
//! dispatch and undoes the log newest first. Either one runs on a snapshot of
//! the log, one step per pause, and never modifies the history itself.
//!
//! While a replay is active every live request (move, undo, redo, swap,
//! another replay) is dropped. A stop request aborts the run and returns the
//! mover to where it was when the replay began.

pub mod anchors;
pub mod player;
pub mod systems;

pub use anchors::ReplayAnchors;
pub use player::{ReplayAdvance, ReplayDirection, ReplayPlayer, ReplayStep};
pub use systems::{
    advance_replay, start_replay, stop_replay, ReplayRequested, ReplayStepped,
    StopReplayRequested,
};
