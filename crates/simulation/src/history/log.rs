//! The two-stack command log.

use bevy::prelude::*;

use crate::command::MoveCommand;
use crate::config::MAX_HISTORY;

/// Applied and undone commands.
///
/// Both stacks grow at the end. The applied log is capped at `max_len`; when
/// a push overflows it the oldest command is evicted and handed back to the
/// caller, which folds it into the replay start anchor.
#[derive(Resource, Debug, Clone)]
pub struct CommandHistory {
    applied: Vec<MoveCommand>,
    redo: Vec<MoveCommand>,
    max_len: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::with_max_len(MAX_HISTORY)
    }
}

impl CommandHistory {
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            applied: Vec::new(),
            redo: Vec::new(),
            max_len: max_len.max(1),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Change the cap, returning any commands evicted oldest-first.
    pub fn set_max_len(&mut self, max_len: usize) -> Vec<MoveCommand> {
        self.max_len = max_len.max(1);
        let overflow = self.applied.len().saturating_sub(self.max_len);
        self.applied.drain(..overflow).collect()
    }

    /// Record a newly dispatched command, clearing the redo log.
    pub fn push(&mut self, command: MoveCommand) -> Option<MoveCommand> {
        self.redo.clear();
        self.push_undo_no_clear(command)
    }

    /// Push onto the applied log after a redo, leaving the redo log intact.
    pub fn push_undo_no_clear(&mut self, command: MoveCommand) -> Option<MoveCommand> {
        self.applied.push(command);
        if self.applied.len() > self.max_len {
            Some(self.applied.remove(0))
        } else {
            None
        }
    }

    pub fn pop_undo(&mut self) -> Option<MoveCommand> {
        self.applied.pop()
    }

    pub fn push_redo(&mut self, command: MoveCommand) {
        self.redo.push(command);
    }

    pub fn pop_redo(&mut self) -> Option<MoveCommand> {
        self.redo.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Applied log, oldest first.
    pub fn applied(&self) -> &[MoveCommand] {
        &self.applied
    }

    /// Redo log, least recently undone first.
    pub fn redo_log(&self) -> &[MoveCommand] {
        &self.redo
    }

    /// Snapshot of the applied log in chronological order.
    pub fn chronological(&self) -> Vec<MoveCommand> {
        self.applied.clone()
    }

    /// Snapshot of the applied log, most recent first.
    pub fn most_recent_first(&self) -> Vec<MoveCommand> {
        self.applied.iter().rev().copied().collect()
    }
}
