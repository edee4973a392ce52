//! Compile-time defaults. Runtime values live in [`crate::params::DemoParams`].

/// Distance covered by a single motion step, in world units.
pub const MOVE_STEP_DISTANCE: f32 = 1.0;

/// Pause before the first replay step and after each one.
pub const REPLAY_PAUSE_SECS: f32 = 0.5;

/// Longest replay pause a params file may ask for.
pub const MAX_REPLAY_PAUSE_SECS: f32 = 60.0;

/// Speed multiplier applied to the forward replay's timer.
pub const REPLAY_SPEED: f32 = 2.0;

/// Accepted range for the forward replay speed multiplier.
pub const REPLAY_SPEED_RANGE: (f32, f32) = (0.1, 100.0);

/// Maximum number of commands kept in the applied log.
pub const MAX_HISTORY: usize = 256;

/// Environment variable naming an optional JSON params file.
pub const PARAMS_ENV_VAR: &str = "REBIND_KEYS_PARAMS";
