use crate::animation::{default_sheets, SpriteSheet};
use crate::constants::{
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, GROUND_DIVISOR, MAX_HEALTH, P1_SPAWN_FRACTION,
    P2_SPAWN_FRACTION,
};
use crate::types::{facing, AnimState, Fighter, MatchConfig, Role};

/// Default match config: a 1280x720 arena with the stock sheets.
pub fn default_config() -> MatchConfig {
    MatchConfig {
        arena_width: DEFAULT_ARENA_WIDTH,
        arena_height: DEFAULT_ARENA_HEIGHT,
        sheets: default_sheets(),
    }
}

/// Ground line for an arena height.
pub fn ground_level(arena_height: f64) -> f64 {
    arena_height / GROUND_DIVISOR
}

/// A fresh fighter standing at (x, ground_y) on full health, facing the
/// arena center.
pub fn new_fighter(role: Role, sheet: SpriteSheet, x: f64, ground_y: f64) -> Fighter {
    Fighter {
        role,
        x,
        y: ground_y,
        velocity_y: 0.0,
        facing: match role {
            Role::P1 => facing::RIGHT,
            Role::P2 => facing::LEFT,
        },
        health: MAX_HEALTH,
        state: AnimState::Idle,
        frame: 0,
        frame_wait: 0,
        is_jumping: false,
        is_attacking: false,
        move_left: false,
        move_right: false,
        attack_ticks: 0,
        hit_flash: 0,
        melee_landed: false,
        sheet,
    }
}

/// Both fighters at their spawn fractions of the arena width.
pub fn spawn_fighters(sheets: &[SpriteSheet; 2], arena_width: f64, arena_height: f64) -> [Fighter; 2] {
    let ground = ground_level(arena_height);
    [
        new_fighter(Role::P1, sheets[0], arena_width * P1_SPAWN_FRACTION, ground),
        new_fighter(Role::P2, sheets[1], arena_width * P2_SPAWN_FRACTION, ground),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_dimensions() {
        let config = default_config();
        assert_eq!(config.arena_width, 1280.0);
        assert_eq!(config.arena_height, 720.0);
        assert_eq!(ground_level(config.arena_height), 576.0);
    }

    #[test]
    fn fighters_spawn_grounded_facing_each_other() {
        let config = default_config();
        let [p1, p2] = spawn_fighters(&config.sheets, config.arena_width, config.arena_height);

        assert_eq!(p1.x, 384.0);
        assert_eq!(p2.x, 896.0);
        assert_eq!(p1.y, 576.0);
        assert_eq!(p2.y, 576.0);
        assert_eq!(p1.facing, facing::RIGHT);
        assert_eq!(p2.facing, facing::LEFT);
        assert_eq!(p1.health, MAX_HEALTH);
        assert_eq!(p2.health, MAX_HEALTH);
        assert!(!p1.is_jumping);
        assert_eq!(p1.state, AnimState::Idle);
    }
}
