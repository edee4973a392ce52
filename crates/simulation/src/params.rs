//! Data-driven demo parameters.
//!
//! Collects the movement and replay tunables (step distance,
//! replay pause, replay speed-up) plus the history cap into a single
//! [`DemoParams`] resource. Systems read `Res<DemoParams>` instead of the
//! module-level constants in [`crate::config`].
//!
//! The app may override the defaults from a JSON file; see
//! [`DemoParams::from_json_str`].

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    MAX_HISTORY, MAX_REPLAY_PAUSE_SECS, MOVE_STEP_DISTANCE, REPLAY_PAUSE_SECS, REPLAY_SPEED,
    REPLAY_SPEED_RANGE,
};

/// Runtime-tunable parameters for movement, history and replay.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoParams {
    /// Distance covered by one motion step, in world units.
    pub move_step: f32,
    /// Pause before the first replay step and after each step, in seconds.
    pub replay_pause_secs: f32,
    /// Timer multiplier for the forward replay. Reversed play always runs at 1x.
    pub replay_speed: f32,
    /// Maximum length of the applied log before the oldest entry is evicted.
    pub max_history: usize,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP_DISTANCE,
            replay_pause_secs: REPLAY_PAUSE_SECS,
            replay_speed: REPLAY_SPEED,
            max_history: MAX_HISTORY,
        }
    }
}

impl DemoParams {
    /// Parse params from JSON. Missing fields fall back to their defaults and
    /// out-of-range values are replaced by [`DemoParams::sanitized`].
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let params: DemoParams = serde_json::from_str(json)?;
        Ok(params.sanitized())
    }

    /// Replace non-positive or non-finite values with the defaults and clamp
    /// the replay timing into a range `Duration` can represent.
    pub fn sanitized(self) -> Self {
        let default = Self::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        let (min_speed, max_speed) = REPLAY_SPEED_RANGE;
        Self {
            move_step: positive(self.move_step, default.move_step),
            replay_pause_secs: positive(self.replay_pause_secs, default.replay_pause_secs)
                .min(MAX_REPLAY_PAUSE_SECS),
            replay_speed: positive(self.replay_speed, default.replay_speed)
                .clamp(min_speed, max_speed),
            max_history: if self.max_history == 0 {
                default.max_history
            } else {
                self.max_history
            },
        }
    }

    /// The pause as a `Duration`. Values that were never sanitized and do not
    /// fit fall back to the default pause.
    pub fn replay_pause(&self) -> Duration {
        Duration::try_from_secs_f32(self.replay_pause_secs)
            .ok()
            .filter(|pause| !pause.is_zero())
            .filter(|pause| pause.as_secs_f32() <= MAX_REPLAY_PAUSE_SECS)
            .unwrap_or(Duration::from_secs_f32(REPLAY_PAUSE_SECS))
    }
}
