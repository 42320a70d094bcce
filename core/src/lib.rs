pub mod animation;
pub mod constants;
pub mod duel;
pub mod effects;
pub mod fighter;
pub mod geometry;
pub mod init;
pub mod input;
pub mod projectiles;
pub mod types;

pub use animation::{default_sheets, AnimSpec, SpriteSheet};
pub use constants::*;
pub use duel::Duel;
pub use effects::advance_blast;
pub use fighter::{hitbox, jump, start_attack, take_damage, tick_fighter, MeleeHit};
pub use geometry::{aabb_overlap, Rect};
pub use init::{default_config, ground_level, new_fighter, spawn_fighters};
pub use input::{command_for, Action, Command, InputEvent, Key};
pub use projectiles::{advance_projectile, spawn_projectile};
pub use types::*;
