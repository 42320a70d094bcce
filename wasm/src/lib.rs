use brawlz_core::{
    default_config, AnimState, Duel, InputEvent, Key, Role, Snapshot, Tint, MAX_HEALTH,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in browser console instead of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Sprite key for an animation state, matching the asset naming.
fn state_name(state: AnimState) -> &'static str {
    match state {
        AnimState::Idle => "idle",
        AnimState::Attack => "attack",
        AnimState::Jump => "jump",
    }
}

/// CSS-friendly color name for a tint.
fn tint_name(tint: Tint) -> &'static str {
    match tint {
        Tint::Cyan => "cyan",
        Tint::Magenta => "magenta",
    }
}

fn winner_code(winner: Option<Role>) -> i32 {
    match winner {
        None => -1,
        Some(Role::P1) => 0,
        Some(Role::P2) => 1,
    }
}

/// JSON-serializable fighter pose for JS rendering
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsFighter {
    role: i32,
    x: f64,
    y: f64,
    facing: i32,
    state: String,
    frame: u32,
    is_hit: bool,
    health: i32,
    max_health: i32,
}

/// JSON-serializable projectile for JS rendering
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsProjectile {
    x: f64,
    y: f64,
    facing: i32,
    tint: String,
}

/// JSON-serializable impact effect for JS rendering
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsBlast {
    x: f64,
    y: f64,
    frame: u32,
    tint: String,
}

/// JSON-serializable frame snapshot for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsSnapshot {
    tick: u32,
    arena_width: f64,
    arena_height: f64,
    ground_y: f64,
    fighters: Vec<JsFighter>,
    projectiles: Vec<JsProjectile>,
    blasts: Vec<JsBlast>,
    over: bool,
    winner: i32,
}

fn snapshot_to_js(s: &Snapshot) -> JsSnapshot {
    JsSnapshot {
        tick: s.tick,
        arena_width: s.arena_width,
        arena_height: s.arena_height,
        ground_y: s.ground_y,
        fighters: s
            .fighters
            .iter()
            .map(|f| JsFighter {
                role: f.role.index() as i32,
                x: f.x,
                y: f.y,
                facing: f.facing,
                state: state_name(f.state).to_string(),
                frame: f.frame,
                is_hit: f.is_hit,
                health: f.health,
                max_health: MAX_HEALTH,
            })
            .collect(),
        projectiles: s
            .projectiles
            .iter()
            .map(|p| JsProjectile {
                x: p.x,
                y: p.y,
                facing: p.facing,
                tint: tint_name(p.tint).to_string(),
            })
            .collect(),
        blasts: s
            .blasts
            .iter()
            .map(|b| JsBlast {
                x: b.x,
                y: b.y,
                frame: b.frame,
                tint: tint_name(b.tint).to_string(),
            })
            .collect(),
        over: s.over,
        winner: winner_code(s.winner),
    }
}

#[wasm_bindgen]
pub struct WasmDuel {
    inner: Duel,
}

#[wasm_bindgen]
impl WasmDuel {
    /// Create a duel sized to the canvas, with the stock sprite sheets.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> WasmDuel {
        let mut config = default_config();
        config.arena_width = width;
        config.arena_height = height;
        WasmDuel { inner: Duel::new(config) }
    }

    /// Create with sheet metadata JSON, per role:
    /// [{ idle: {frames,frame_delay,width,height}, attack: {...}, jump: {...} }, {...}]
    /// Malformed JSON falls back to the stock sheets.
    pub fn with_sheets(width: f64, height: f64, sheets_json: &str) -> WasmDuel {
        let mut config = default_config();
        config.arena_width = width;
        config.arena_height = height;
        if let Ok(sheets) = serde_json::from_str(sheets_json) {
            config.sheets = sheets;
        }
        WasmDuel { inner: Duel::new(config) }
    }

    /// Feed a keydown, straight from KeyboardEvent.code. Unbound codes
    /// are dropped.
    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.inner.handle_input(InputEvent::Down(key));
        }
    }

    /// Feed a keyup, straight from KeyboardEvent.code.
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.inner.handle_input(InputEvent::Up(key));
        }
    }

    /// Step the simulation by one frame. Logs the winner once when the
    /// duel ends.
    pub fn tick(&mut self) {
        let was_over = self.inner.over();
        self.inner.tick();
        if !was_over && self.inner.over() {
            let name = match self.inner.winner {
                Some(Role::P1) => "Player 1",
                Some(Role::P2) => "Player 2",
                None => "Nobody",
            };
            web_sys::console::log_1(&format!("{} wins", name).into());
        }
    }

    /// Canvas resize: re-anchor everything to the new dimensions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.inner.resize(width, height);
    }

    /// Restart the duel from the spawn state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Export the frame snapshot as a JS object for rendering.
    pub fn snapshot(&self) -> JsValue {
        let js = snapshot_to_js(&self.inner.snapshot());
        serde_wasm_bindgen::to_value(&js).unwrap()
    }

    // Quick accessors
    pub fn tick_count(&self) -> u32 { self.inner.tick_count }
    pub fn over(&self) -> bool { self.inner.over() }
    pub fn winner(&self) -> i32 { winner_code(self.inner.winner) }
    pub fn health(&self, fighter: usize) -> i32 {
        self.inner.fighters.get(fighter).map(|f| f.health).unwrap_or(0)
    }
}
