// All values are per-tick at 60 Hz unless noted.

pub const TICK_RATE: u32 = 60;

// Physics
pub const GRAVITY: f64 = 0.8;
pub const JUMP_VELOCITY: f64 = -20.0;
pub const MOVE_SPEED: f64 = 8.0;

// Arena
pub const DEFAULT_ARENA_WIDTH: f64 = 1280.0;
pub const DEFAULT_ARENA_HEIGHT: f64 = 720.0;
/// Ground line sits at arena_height / GROUND_DIVISOR.
pub const GROUND_DIVISOR: f64 = 1.25;
/// Fighters cannot walk closer than this to either arena edge.
pub const SCREEN_PADDING: f64 = 50.0;
pub const P1_SPAWN_FRACTION: f64 = 0.3;
pub const P2_SPAWN_FRACTION: f64 = 0.7;

// Fighters
pub const MAX_HEALTH: i32 = 100;
/// Draw scale applied to raw sheet frame dimensions, hit boxes included.
pub const SPRITE_SCALE: f64 = 1.5;

// Combat
pub const MELEE_DAMAGE: i32 = 10;
pub const KNOCKBACK: f64 = 20.0;
/// 200 ms hit flash.
pub const HIT_FLASH_TICKS: i32 = 12;
/// Attack windows: 500 ms for P1, 700 ms for P2.
pub const P1_ATTACK_TICKS: i32 = 30;
pub const P2_ATTACK_TICKS: i32 = 42;

// Projectiles
pub const BOLT_SPEED: f64 = 15.0;
pub const BOLT_WIDTH: f64 = 25.0;
pub const BOLT_HEIGHT: f64 = 15.0;
/// Spawn offset from the attacker: forward along facing, raised off the feet.
pub const BOLT_FORWARD: f64 = 30.0;
pub const BOLT_RISE: f64 = 50.0;
pub const PROJECTILE_DAMAGE: i32 = 10;

// Impact effects
pub const BLAST_FRAMES: u32 = 5;
