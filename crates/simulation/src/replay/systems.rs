//! Replay request events and the systems that start, stop and advance runs.

use bevy::prelude::*;

use super::anchors::ReplayAnchors;
use super::player::{ReplayDirection, ReplayPlayer, ReplayStep};
use crate::command::MoverQuery;
use crate::history::CommandHistory;
use crate::params::DemoParams;

/// Request to start a replay in the given direction.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayRequested(pub ReplayDirection);

/// Request to abort the active replay.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopReplayRequested;

/// Sent after each replay step has been applied to the mover.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStepped(pub ReplayStep);

/// Starts a replay: snapshots the log and moves the mover to the anchor.
///
/// Only the forward replay runs at `DemoParams::replay_speed`.
pub fn start_replay(
    mut events: EventReader<ReplayRequested>,
    mut player: ResMut<ReplayPlayer>,
    history: Res<CommandHistory>,
    anchors: Res<ReplayAnchors>,
    params: Res<DemoParams>,
    mut movers: MoverQuery,
) {
    for &ReplayRequested(direction) in events.read() {
        let mut mover = anchors.mover.and_then(|e| movers.get_mut(e).ok());
        let current = mover.as_ref().map(|t| t.translation).unwrap_or_default();
        let speed = match direction {
            ReplayDirection::Forward => params.replay_speed,
            ReplayDirection::Reversed => 1.0,
        };

        if let Err(err) = player.start(direction, &history, params.replay_pause(), speed, current)
        {
            debug!("{err}");
            continue;
        }

        let anchor = match direction {
            ReplayDirection::Forward => anchors.start,
            ReplayDirection::Reversed => anchors.reversed_start,
        };
        if let Some(transform) = mover.as_mut() {
            transform.translation = anchor;
        }
        info!(
            "Starting {} of {} commands",
            direction.label(),
            history.applied().len()
        );
    }
}

/// Aborts the active replay and puts the mover back where it was.
pub fn stop_replay(
    mut events: EventReader<StopReplayRequested>,
    mut player: ResMut<ReplayPlayer>,
    anchors: Res<ReplayAnchors>,
    mut movers: MoverQuery,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let direction = player.direction();
    let Some(resume) = player.stop() else {
        debug!("Stop requested with no replay running");
        return;
    };
    if let Some(mut transform) = anchors.mover.and_then(|e| movers.get_mut(e).ok()) {
        transform.translation = resume;
    }
    if let Some(direction) = direction {
        info!("Cancelled {}", direction.label());
    }
}

/// Ticks the active replay and applies the steps that came due.
///
/// Runs before [`start_replay`], so a run never ticks on the frame it
/// starts.
pub fn advance_replay(
    time: Res<Time>,
    params: Res<DemoParams>,
    mut player: ResMut<ReplayPlayer>,
    mut movers: MoverQuery,
    mut stepped: EventWriter<ReplayStepped>,
) {
    if !player.is_replaying() {
        return;
    }
    let direction = player.direction();
    let advance = player.advance(time.delta());

    for step in advance.steps {
        let result = match step.direction {
            ReplayDirection::Forward => step.command.execute(&mut movers, params.move_step),
            ReplayDirection::Reversed => step.command.undo(&mut movers, params.move_step),
        };
        if let Err(err) = result {
            warn!("{err}");
        }
        stepped.send(ReplayStepped(step));
    }

    if advance.finished {
        if let Some(direction) = direction {
            info!("Finished {}", direction.label());
        }
    }
}
