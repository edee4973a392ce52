//! Integration tests using the `TestScene` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and a single
//! mover, then drive it through the same request events the keyboard and the
//! HUD send.
