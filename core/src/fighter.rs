use crate::animation::advance_animation;
use crate::constants::{
    GRAVITY, HIT_FLASH_TICKS, JUMP_VELOCITY, KNOCKBACK, MELEE_DAMAGE, MOVE_SPEED, SCREEN_PADDING,
    SPRITE_SCALE,
};
use crate::geometry::{aabb_overlap, Rect};
use crate::projectiles::spawn_projectile;
use crate::types::{facing, AnimState, Fighter, Projectile};

/// A landed melee hit, reported to the controller so it can apply the
/// damage and knockback to the defender.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeleeHit {
    pub damage: i32,
    /// Signed knockback displacement along x.
    pub push: f64,
}

/// Current hit box: the active animation frame scaled, anchored at the
/// feet and centered on x.
pub fn hitbox(f: &Fighter) -> Rect {
    let spec = f.sheet.spec(f.state);
    let width = spec.width * SPRITE_SCALE;
    let height = spec.height * SPRITE_SCALE;
    Rect { x: f.x - width / 2.0, y: f.y - height, width, height }
}

/// Begin a jump. No-op while airborne.
pub fn jump(f: &mut Fighter) {
    if f.is_jumping {
        return;
    }
    f.velocity_y = JUMP_VELOCITY;
    f.is_jumping = true;
    f.state = AnimState::Jump;
}

/// Open an attack window and launch its bolt. No-op while a window is
/// already open.
pub fn start_attack(f: &mut Fighter) -> Option<Projectile> {
    if f.is_attacking {
        return None;
    }
    f.state = AnimState::Attack;
    f.frame = 0;
    f.is_attacking = true;
    f.melee_landed = false;
    f.attack_ticks = f.role.attack_window();
    Some(spawn_projectile(f))
}

/// Subtract damage, floored at zero, and start the hit flash.
pub fn take_damage(f: &mut Fighter, amount: i32) {
    f.health = (f.health - amount).max(0);
    f.hit_flash = HIT_FLASH_TICKS;
}

/// Clamp x into the walkable band between the padded arena edges.
pub fn clamp_x(x: f64, arena_width: f64) -> f64 {
    x.max(SCREEN_PADDING).min(arena_width - SCREEN_PADDING)
}

/// Advance one fighter by one tick. The opponent is a read-only view; a
/// landed melee hit comes back for the controller to apply.
pub fn tick_fighter(
    f: &mut Fighter,
    opponent: &Fighter,
    arena_width: f64,
    ground_y: f64,
) -> Option<MeleeHit> {
    tick_timers(f);
    apply_jump_physics(f, ground_y);
    apply_movement(f, arena_width);
    let hit = if f.is_attacking { check_melee(f, opponent) } else { None };
    advance_animation(f);
    hit
}

/// Count down the attack window and the hit flash.
fn tick_timers(f: &mut Fighter) {
    if f.attack_ticks > 0 {
        f.attack_ticks -= 1;
        if f.attack_ticks == 0 {
            f.is_attacking = false;
            if !f.is_jumping {
                f.state = AnimState::Idle;
            }
        }
    }
    if f.hit_flash > 0 {
        f.hit_flash -= 1;
    }
}

/// Gravity integration while airborne. Landing snaps to the ground line.
fn apply_jump_physics(f: &mut Fighter, ground_y: f64) {
    if !f.is_jumping {
        return;
    }
    f.velocity_y += GRAVITY;
    f.y += f.velocity_y;
    if f.y >= ground_y {
        f.y = ground_y;
        f.velocity_y = 0.0;
        f.is_jumping = false;
        if !f.move_left && !f.move_right {
            f.state = AnimState::Idle;
        }
    }
}

/// Horizontal movement from the held intent flags. Idle doubles as the
/// walk pose, so grounded movement pins the state to Idle.
fn apply_movement(f: &mut Fighter, arena_width: f64) {
    if f.move_left {
        f.x = clamp_x(f.x - MOVE_SPEED, arena_width);
        f.facing = facing::LEFT;
        if !f.is_jumping {
            f.state = AnimState::Idle;
        }
    }
    if f.move_right {
        f.x = clamp_x(f.x + MOVE_SPEED, arena_width);
        f.facing = facing::RIGHT;
        if !f.is_jumping {
            f.state = AnimState::Idle;
        }
    }
}

/// Melee test for an open window. At most one landed hit per window.
fn check_melee(f: &mut Fighter, opponent: &Fighter) -> Option<MeleeHit> {
    if f.melee_landed {
        return None;
    }
    if !aabb_overlap(&hitbox(f), &hitbox(opponent)) {
        return None;
    }
    f.melee_landed = true;
    Some(MeleeHit { damage: MELEE_DAMAGE, push: KNOCKBACK * f.facing as f64 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::default_sheets;
    use crate::constants::{MAX_HEALTH, P1_ATTACK_TICKS};
    use crate::init::new_fighter;
    use crate::types::Role;

    const ARENA_W: f64 = 1280.0;
    const GROUND: f64 = 576.0;

    fn grounded(role: Role, x: f64) -> Fighter {
        let sheets = default_sheets();
        new_fighter(role, sheets[role.index()], x, GROUND)
    }

    #[test]
    fn jump_arc_returns_exactly_to_ground() {
        let mut f = grounded(Role::P1, 300.0);
        let far = grounded(Role::P2, 1100.0);

        jump(&mut f);
        assert!(f.is_jumping);
        assert_eq!(f.state, AnimState::Jump);

        let mut landed_after = None;
        for t in 1..=120 {
            tick_fighter(&mut f, &far, ARENA_W, GROUND);
            if !f.is_jumping {
                landed_after = Some(t);
                break;
            }
            assert!(f.y < GROUND);
        }

        assert!(landed_after.is_some());
        assert_eq!(f.y, GROUND);
        assert_eq!(f.velocity_y, 0.0);
        assert_eq!(f.state, AnimState::Idle);
    }

    #[test]
    fn jump_while_airborne_is_a_noop() {
        let mut f = grounded(Role::P1, 300.0);
        let far = grounded(Role::P2, 1100.0);

        jump(&mut f);
        tick_fighter(&mut f, &far, ARENA_W, GROUND);
        let rising = f.velocity_y;

        jump(&mut f);
        assert_eq!(f.velocity_y, rising);
    }

    #[test]
    fn movement_clamps_at_padded_edges() {
        let far = grounded(Role::P2, 1100.0);

        let mut f = grounded(Role::P1, 55.0);
        f.move_left = true;
        tick_fighter(&mut f, &far, ARENA_W, GROUND);
        assert_eq!(f.x, SCREEN_PADDING);
        assert_eq!(f.facing, facing::LEFT);

        let mut f = grounded(Role::P1, ARENA_W - 55.0);
        f.move_right = true;
        tick_fighter(&mut f, &far, ARENA_W, GROUND);
        assert_eq!(f.x, ARENA_W - SCREEN_PADDING);
        assert_eq!(f.facing, facing::RIGHT);
    }

    #[test]
    fn melee_lands_once_per_window() {
        let mut a = grounded(Role::P1, 300.0);
        let b = grounded(Role::P2, 390.0);

        assert!(start_attack(&mut a).is_some());
        let hit = tick_fighter(&mut a, &b, ARENA_W, GROUND);
        let hit = hit.unwrap();
        assert_eq!(hit.damage, MELEE_DAMAGE);
        assert_eq!(hit.push, KNOCKBACK);

        // Window stays open, but the hit is spent.
        for _ in 0..10 {
            assert!(a.is_attacking);
            assert!(tick_fighter(&mut a, &b, ARENA_W, GROUND).is_none());
        }
    }

    #[test]
    fn attack_window_expires_back_to_idle() {
        let mut a = grounded(Role::P1, 300.0);
        let far = grounded(Role::P2, 1100.0);

        assert!(start_attack(&mut a).is_some());
        assert_eq!(a.state, AnimState::Attack);
        assert_eq!(a.attack_ticks, P1_ATTACK_TICKS);

        for _ in 0..P1_ATTACK_TICKS {
            tick_fighter(&mut a, &far, ARENA_W, GROUND);
        }
        assert!(!a.is_attacking);
        assert_eq!(a.state, AnimState::Idle);
        assert_eq!(a.attack_ticks, 0);
    }

    #[test]
    fn second_attack_during_open_window_is_rejected() {
        let mut a = grounded(Role::P1, 300.0);
        assert!(start_attack(&mut a).is_some());
        assert!(start_attack(&mut a).is_none());
    }

    #[test]
    fn damage_floors_at_zero_and_flags_hit() {
        let mut f = grounded(Role::P2, 390.0);
        f.health = 5;
        take_damage(&mut f, 10);
        assert_eq!(f.health, 0);
        assert!(f.is_hit());
        assert_eq!(f.hit_flash, HIT_FLASH_TICKS);
    }

    #[test]
    fn hit_flash_expires() {
        let mut f = grounded(Role::P2, 390.0);
        let far = grounded(Role::P1, 100.0);

        take_damage(&mut f, 10);
        for _ in 0..HIT_FLASH_TICKS {
            assert!(f.is_hit());
            tick_fighter(&mut f, &far, ARENA_W, GROUND);
        }
        assert!(!f.is_hit());
    }

    #[test]
    fn hitbox_tracks_animation_state() {
        let mut f = grounded(Role::P1, 300.0);

        let idle = hitbox(&f);
        assert_eq!(idle.width, 59.0 * SPRITE_SCALE);
        assert_eq!(idle.height, 101.0 * SPRITE_SCALE);
        assert_eq!(idle.y, GROUND - 101.0 * SPRITE_SCALE);
        assert_eq!(idle.x, 300.0 - 59.0 * SPRITE_SCALE / 2.0);

        assert!(start_attack(&mut f).is_some());
        let attack = hitbox(&f);
        assert_eq!(attack.width, 139.0 * SPRITE_SCALE);
        assert_eq!(attack.height, 111.0 * SPRITE_SCALE);
    }

    #[test]
    fn fresh_fighter_is_full_health() {
        let f = grounded(Role::P1, 300.0);
        assert_eq!(f.health, MAX_HEALTH);
        assert!(!f.is_hit());
    }
}
