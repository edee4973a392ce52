//! # TestScene: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with one spawned mover so
//! tests can send requests, tick frames, and inspect the resulting state
//! without a window or renderer.

mod assertions;
mod queries;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::movable::MoveObject;
use crate::params::DemoParams;
use crate::replay::ReplayStepped;
use crate::simulation_sets::SimulationUpdateSet;
use crate::SimulationPlugin;

/// Frame time fed to the virtual clock on every update.
pub const FRAME: Duration = Duration::from_millis(100);

/// Where the mover is spawned.
pub const START: Vec3 = Vec3::new(0.0, 0.5, 0.0);

/// Every `ReplayStepped` event seen so far, in order.
#[derive(Resource, Default, Debug)]
pub struct StepLog(pub Vec<ReplayStepped>);

fn record_steps(mut events: EventReader<ReplayStepped>, mut log: ResMut<StepLog>) {
    log.0.extend(events.read().copied());
}

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestScene {
    app: App,
    mover: Entity,
}

impl TestScene {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A scene with default params and a mover at [`START`].
    pub fn new() -> Self {
        Self::with_params(DemoParams::default())
    }

    pub fn with_params(params: DemoParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        // No InputPlugin: tests press and clear keys by hand.
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(SimulationPlugin);
        app.insert_resource(params);

        app.init_resource::<StepLog>();
        app.add_systems(Update, record_steps.after(SimulationUpdateSet::Replay));

        let mover = app
            .world_mut()
            .spawn((MoveObject, Transform::from_translation(START)))
            .id();

        // First update binds the mover; the clock starts with a zero delta.
        app.update();
        Self { app, mover }
    }

    /// Like [`TestScene::new`] but with no mover spawned.
    pub fn empty() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.add_plugins(SimulationPlugin);
        app.init_resource::<StepLog>();
        app.add_systems(Update, record_steps.after(SimulationUpdateSet::Replay));
        app.update();
        Self {
            app,
            mover: Entity::PLACEHOLDER,
        }
    }

    // -----------------------------------------------------------------------
    // Frame control
    // -----------------------------------------------------------------------

    /// Run `n` frames.
    pub fn update(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}
