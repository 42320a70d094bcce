use serde::{Deserialize, Serialize};

use crate::animation::SpriteSheet;
use crate::constants::{P1_ATTACK_TICKS, P2_ATTACK_TICKS};

// ── Primitives ──────────────────────────────────────────────

pub type Tick = u32;

/// Facing direction along x: Right = 1, Left = -1.
pub mod facing {
    pub const RIGHT: i32 = 1;
    pub const LEFT: i32 = -1;
}

// ── Roles ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    P1,
    P2,
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::P1 => Role::P2,
            Role::P2 => Role::P1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Role::P1 => 0,
            Role::P2 => 1,
        }
    }

    /// Ticks an attack window stays open. P2 swings slower.
    pub fn attack_window(self) -> i32 {
        match self {
            Role::P1 => P1_ATTACK_TICKS,
            Role::P2 => P2_ATTACK_TICKS,
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            Role::P1 => Tint::Cyan,
            Role::P2 => Tint::Magenta,
        }
    }
}

/// Projectile and blast color, keyed to the owning role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Cyan,
    Magenta,
}

// ── Animation ───────────────────────────────────────────────

/// Animation state doubles as the logic state: grounded walking stays
/// labelled Idle, so Attack and Jump are the only special poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimState {
    Idle,
    Attack,
    Jump,
}

// ── Fighter ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub role: Role,
    /// Feet position: x is the horizontal center, y the ground contact line.
    pub x: f64,
    pub y: f64,
    pub velocity_y: f64,
    pub facing: i32,
    pub health: i32,
    pub state: AnimState,
    pub frame: u32,
    pub frame_wait: u32,
    pub is_jumping: bool,
    pub is_attacking: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Ticks left on the open attack window; 0 while not attacking.
    pub attack_ticks: i32,
    /// Ticks left on the hit flash; the fighter reads as hit while > 0.
    pub hit_flash: i32,
    /// Set once the open attack window has landed its melee hit.
    pub melee_landed: bool,
    pub sheet: SpriteSheet,
}

impl Fighter {
    pub fn is_hit(&self) -> bool {
        self.hit_flash > 0
    }
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Role,
    /// Center position.
    pub x: f64,
    pub y: f64,
    pub facing: i32,
    pub active: bool,
}

impl Projectile {
    /// Projectiles only ever threaten the owner's opponent.
    pub fn target(&self) -> Role {
        self.owner.opponent()
    }

    pub fn tint(&self) -> Tint {
        self.owner.tint()
    }
}

// ── Impact effect ───────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blast {
    pub x: f64,
    pub y: f64,
    pub frame: u32,
    pub tint: Tint,
    pub active: bool,
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    /// Sheet metadata per role, indexed like the fighter array.
    pub sheets: [SpriteSheet; 2],
}

// ── Snapshot ────────────────────────────────────────────────

/// Everything the renderer needs to draw one fighter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterPose {
    pub role: Role,
    pub x: f64,
    pub y: f64,
    pub facing: i32,
    pub state: AnimState,
    pub frame: u32,
    pub is_hit: bool,
    pub health: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f64,
    pub y: f64,
    pub facing: i32,
    pub tint: Tint,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastView {
    pub x: f64,
    pub y: f64,
    pub frame: u32,
    pub tint: Tint,
}

/// Read-only view of one tick, handed across the render boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub arena_width: f64,
    pub arena_height: f64,
    pub ground_y: f64,
    pub fighters: [FighterPose; 2],
    pub projectiles: Vec<ProjectileView>,
    pub blasts: Vec<BlastView>,
    pub over: bool,
    pub winner: Option<Role>,
}
