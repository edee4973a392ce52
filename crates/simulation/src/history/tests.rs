//! Unit tests for the command log.

use bevy::prelude::Entity;

use super::log::CommandHistory;
use crate::command::MoveCommand;
use crate::config::MAX_HISTORY;

fn mover() -> Entity {
    Entity::from_raw(1)
}

#[test]
fn test_push_and_undo() {
    let mut history = CommandHistory::default();
    assert!(history.push(MoveCommand::MoveForward(mover())).is_none());
    assert_eq!(history.applied().len(), 1);
    assert!(history.redo_log().is_empty());

    let undone = history.pop_undo();
    assert_eq!(undone, Some(MoveCommand::MoveForward(mover())));
    assert!(!history.can_undo());
}

#[test]
fn test_push_clears_redo_log() {
    let mut history = CommandHistory::default();
    history.push(MoveCommand::MoveForward(mover()));
    let command = history.pop_undo().unwrap();
    history.push_redo(command);
    assert!(history.can_redo());

    history.push(MoveCommand::TurnLeft(mover()));
    assert!(!history.can_redo());
}

#[test]
fn test_redo_push_keeps_redo_log() {
    let mut history = CommandHistory::default();
    history.push(MoveCommand::MoveForward(mover()));
    history.push(MoveCommand::MoveBack(mover()));
    for _ in 0..2 {
        let command = history.pop_undo().unwrap();
        history.push_redo(command);
    }

    let command = history.pop_redo().unwrap();
    assert_eq!(command, MoveCommand::MoveForward(mover()));
    history.push_undo_no_clear(command);
    assert_eq!(history.redo_log(), &[MoveCommand::MoveBack(mover())]);
}

#[test]
fn test_undo_redo_order_is_lifo() {
    let mut history = CommandHistory::default();
    let a = MoveCommand::MoveForward(mover());
    let b = MoveCommand::TurnRight(mover());
    history.push(a);
    history.push(b);

    assert_eq!(history.pop_undo(), Some(b));
    history.push_redo(b);
    assert_eq!(history.pop_undo(), Some(a));
    history.push_redo(a);

    // Redo hands back the most recently undone command first.
    assert_eq!(history.pop_redo(), Some(a));
    assert_eq!(history.pop_redo(), Some(b));
    assert_eq!(history.pop_redo(), None);
}

#[test]
fn test_max_history_limit() {
    let mut history = CommandHistory::default();
    let mut evicted = 0;
    for _ in 0..MAX_HISTORY + 10 {
        if history.push(MoveCommand::MoveForward(mover())).is_some() {
            evicted += 1;
        }
    }
    assert_eq!(history.applied().len(), MAX_HISTORY);
    assert_eq!(evicted, 10);
}

#[test]
fn test_eviction_drops_oldest() {
    let mut history = CommandHistory::with_max_len(2);
    history.push(MoveCommand::MoveForward(mover()));
    history.push(MoveCommand::TurnLeft(mover()));
    let evicted = history.push(MoveCommand::MoveBack(mover()));
    assert_eq!(evicted, Some(MoveCommand::MoveForward(mover())));
    assert_eq!(
        history.applied(),
        &[MoveCommand::TurnLeft(mover()), MoveCommand::MoveBack(mover())]
    );
}

#[test]
fn test_shrinking_cap_evicts_oldest_first() {
    let mut history = CommandHistory::default();
    history.push(MoveCommand::MoveForward(mover()));
    history.push(MoveCommand::TurnLeft(mover()));
    history.push(MoveCommand::MoveBack(mover()));

    let evicted = history.set_max_len(1);
    assert_eq!(
        evicted,
        vec![MoveCommand::MoveForward(mover()), MoveCommand::TurnLeft(mover())]
    );
    assert_eq!(history.applied(), &[MoveCommand::MoveBack(mover())]);
    assert_eq!(history.max_len(), 1);
}

#[test]
fn test_zero_cap_is_clamped() {
    let history = CommandHistory::with_max_len(0);
    assert_eq!(history.max_len(), 1);
}

#[test]
fn test_snapshots() {
    let mut history = CommandHistory::default();
    let commands = [
        MoveCommand::MoveForward(mover()),
        MoveCommand::MoveForward(mover()),
        MoveCommand::TurnLeft(mover()),
    ];
    for command in commands {
        history.push(command);
    }
    assert_eq!(history.chronological(), commands.to_vec());
    assert_eq!(
        history.most_recent_first(),
        commands.iter().rev().copied().collect::<Vec<_>>()
    );
}

#[test]
fn test_do_nothing_is_recorded() {
    let mut history = CommandHistory::default();
    history.push(MoveCommand::DoNothing);
    assert!(history.can_undo());
}
