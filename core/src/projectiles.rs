use crate::constants::{BOLT_FORWARD, BOLT_HEIGHT, BOLT_RISE, BOLT_SPEED, BOLT_WIDTH};
use crate::fighter::hitbox;
use crate::geometry::{aabb_overlap, Rect};
use crate::types::{Blast, Fighter, Projectile};

/// Spawn a bolt just ahead of the attacker's chest, flying along its
/// facing.
pub fn spawn_projectile(f: &Fighter) -> Projectile {
    Projectile {
        owner: f.role,
        x: f.x + f.facing as f64 * BOLT_FORWARD,
        y: f.y - BOLT_RISE,
        facing: f.facing,
        active: true,
    }
}

/// Collision box for one bolt, centered on its position.
pub fn bolt_box(p: &Projectile) -> Rect {
    Rect::centered(p.x, p.y, BOLT_WIDTH, BOLT_HEIGHT)
}

/// Advance one bolt by one tick: leave the arena or connect with the
/// target, whichever comes first. A connect reports the blast to spawn;
/// the controller applies the damage.
pub fn advance_projectile(p: &mut Projectile, target: &Fighter, arena_width: f64) -> Option<Blast> {
    p.x += p.facing as f64 * BOLT_SPEED;

    if p.x < 0.0 || p.x > arena_width {
        p.active = false;
        return None;
    }

    if target.health > 0 && aabb_overlap(&bolt_box(p), &hitbox(target)) {
        p.active = false;
        return Some(Blast { x: p.x, y: p.y, frame: 0, tint: p.tint(), active: true });
    }

    None
}
