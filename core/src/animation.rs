use serde::{Deserialize, Serialize};

use crate::types::{AnimState, Fighter};

/// Sheet metadata for one animation state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimSpec {
    pub frames: u32,
    /// Ticks between frame advances; higher is slower.
    pub frame_delay: u32,
    /// Frame dimensions in px before scaling.
    pub width: f64,
    pub height: f64,
    /// Vertical draw offset. Render-only, never part of the hit box.
    #[serde(default)]
    pub offset_y: f64,
}

/// Per-state sheet table for one fighter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub idle: AnimSpec,
    pub attack: AnimSpec,
    pub jump: AnimSpec,
}

impl SpriteSheet {
    pub fn spec(&self, state: AnimState) -> &AnimSpec {
        match state {
            AnimState::Idle => &self.idle,
            AnimState::Attack => &self.attack,
            AnimState::Jump => &self.jump,
        }
    }
}

/// Stock sheets for both roles, measured off the shipped sprite assets.
pub fn default_sheets() -> [SpriteSheet; 2] {
    [
        SpriteSheet {
            idle: AnimSpec { frames: 8, frame_delay: 8, width: 59.0, height: 101.0, offset_y: 0.0 },
            attack: AnimSpec { frames: 6, frame_delay: 4, width: 139.0, height: 111.0, offset_y: 0.0 },
            jump: AnimSpec { frames: 5, frame_delay: 6, width: 105.0, height: 79.0, offset_y: 0.0 },
        },
        SpriteSheet {
            idle: AnimSpec { frames: 4, frame_delay: 8, width: 47.0, height: 67.0, offset_y: 0.0 },
            attack: AnimSpec { frames: 14, frame_delay: 4, width: 126.0, height: 129.0, offset_y: 25.0 },
            jump: AnimSpec { frames: 14, frame_delay: 6, width: 107.0, height: 67.0, offset_y: 0.0 },
        },
    ]
}

/// Advance the frame counter by one tick, wrapping at the current state's
/// frame count.
pub fn advance_animation(f: &mut Fighter) {
    let spec = *f.sheet.spec(f.state);
    f.frame_wait += 1;
    if f.frame_wait >= spec.frame_delay {
        f.frame = (f.frame + 1) % spec.frames.max(1);
        f.frame_wait = 0;
    }
}
