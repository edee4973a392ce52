//! Replay player: a timer-driven state machine over a snapshot of the
//! applied log.
//!
//! A run goes: start (the caller resets the mover), wait one pause, step,
//! wait one pause, step, ..., wait one pause, finish. The player never
//! touches transforms itself; [`ReplayPlayer::advance`] hands back the steps
//! that came due and the system applies them.

use std::time::Duration;

use bevy::prelude::*;

use crate::command::MoveCommand;
use crate::config::REPLAY_SPEED_RANGE;
use crate::error::CommandError;
use crate::history::CommandHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplayDirection {
    /// Re-execute the applied log oldest first.
    Forward,
    /// Undo the applied log newest first.
    Reversed,
}

impl ReplayDirection {
    pub fn label(self) -> &'static str {
        match self {
            ReplayDirection::Forward => "replay",
            ReplayDirection::Reversed => "reversed play",
        }
    }
}

/// One command the replay wants applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStep {
    pub command: MoveCommand,
    pub direction: ReplayDirection,
}

/// What a call to [`ReplayPlayer::advance`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayAdvance {
    pub steps: Vec<ReplayStep>,
    /// The final pause elapsed and replay mode is over.
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct ActiveReplay {
    direction: ReplayDirection,
    steps: Vec<MoveCommand>,
    cursor: usize,
    timer: Timer,
    resume_position: Vec3,
}

/// Resource that owns the current replay, if any. Its presence is the replay
/// mode flag.
#[derive(Resource, Debug, Default)]
pub struct ReplayPlayer {
    active: Option<ActiveReplay>,
}

impl ReplayPlayer {
    /// Whether a replay is running. Live input is gated on this.
    pub fn is_replaying(&self) -> bool {
        self.active.is_some()
    }

    pub fn direction(&self) -> Option<ReplayDirection> {
        self.active.as_ref().map(|run| run.direction)
    }

    /// `(steps applied, total steps)` of the active run.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.active.as_ref().map(|run| (run.cursor, run.steps.len()))
    }

    /// Begin a run over a snapshot of `history`. `speed` divides the pause.
    ///
    /// `resume_position` is where the mover goes back to if the run is
    /// stopped early.
    pub fn start(
        &mut self,
        direction: ReplayDirection,
        history: &CommandHistory,
        pause: Duration,
        speed: f32,
        resume_position: Vec3,
    ) -> Result<(), CommandError> {
        if self.is_replaying() {
            return Err(CommandError::ReplayAlreadyActive(direction));
        }
        let (min_speed, max_speed) = REPLAY_SPEED_RANGE;
        let speed = if speed.is_finite() && speed > 0.0 {
            speed.clamp(min_speed, max_speed)
        } else {
            1.0
        };
        let interval = Duration::try_from_secs_f32(pause.as_secs_f32() / speed).unwrap_or(pause);
        let steps = match direction {
            ReplayDirection::Forward => history.chronological(),
            ReplayDirection::Reversed => history.most_recent_first(),
        };
        self.active = Some(ActiveReplay {
            direction,
            steps,
            cursor: 0,
            timer: Timer::new(interval, TimerMode::Repeating),
            resume_position,
        });
        Ok(())
    }

    /// Advance the run by `delta` of frame time.
    pub fn advance(&mut self, delta: Duration) -> ReplayAdvance {
        let Some(run) = self.active.as_mut() else {
            return ReplayAdvance::default();
        };
        run.timer.tick(delta);

        let mut advance = ReplayAdvance::default();
        for _ in 0..run.timer.times_finished_this_tick() {
            match run.steps.get(run.cursor) {
                Some(&command) => {
                    advance.steps.push(ReplayStep {
                        command,
                        direction: run.direction,
                    });
                    run.cursor += 1;
                }
                None => {
                    advance.finished = true;
                    break;
                }
            }
        }
        if advance.finished {
            self.active = None;
        }
        advance
    }

    /// Abort the active run. Returns the position to restore the mover to.
    pub fn stop(&mut self) -> Option<Vec3> {
        self.active.take().map(|run| run.resume_position)
    }
}
