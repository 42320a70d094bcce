#![allow(clippy::needless_range_loop)] // Index loops required to borrow one fighter while reading the other

use serde::{Deserialize, Serialize};

use crate::constants::PROJECTILE_DAMAGE;
use crate::effects::advance_blast;
use crate::fighter::{self, clamp_x, take_damage, tick_fighter};
use crate::init::{ground_level, spawn_fighters};
use crate::input::{command_for, Action, Command, InputEvent, Key};
use crate::projectiles::advance_projectile;
use crate::types::{
    AnimState, Blast, BlastView, Fighter, FighterPose, MatchConfig, Projectile, ProjectileView,
    Role, Snapshot, Tick,
};

/// The owning match controller: both fighters, the live entity lists, and
/// the terminal state. All mutation flows through it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Duel {
    pub config: MatchConfig,
    /// Live arena dimensions; they drift from the config on resize.
    pub arena_width: f64,
    pub arena_height: f64,
    pub fighters: [Fighter; 2],
    pub projectiles: Vec<Projectile>,
    pub blasts: Vec<Blast>,
    pub tick_count: Tick,
    pub winner: Option<Role>,
}

impl Duel {
    pub fn new(config: MatchConfig) -> Duel {
        let fighters = spawn_fighters(&config.sheets, config.arena_width, config.arena_height);
        Duel {
            arena_width: config.arena_width,
            arena_height: config.arena_height,
            fighters,
            projectiles: Vec::new(),
            blasts: Vec::new(),
            tick_count: 0,
            winner: None,
            config,
        }
    }

    pub fn over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn ground_y(&self) -> f64 {
        ground_level(self.arena_height)
    }

    /// Advance the whole simulation by one frame.
    ///
    /// Sub-step order:
    ///  1. Advance bolts, applying hits and collecting their blasts
    ///  2. Advance blasts, then append this tick's spawns unadvanced
    ///  3. Advance fighters in role order, applying melee as it lands
    ///  4. Terminal check
    ///
    /// A finished duel freezes; only reset resumes it.
    pub fn tick(&mut self) {
        if self.over() {
            return;
        }

        // 1. Bolts
        let mut spawned = Vec::new();
        for p in self.projectiles.iter_mut() {
            let target = p.target().index();
            if let Some(blast) = advance_projectile(p, &self.fighters[target], self.arena_width) {
                take_damage(&mut self.fighters[target], PROJECTILE_DAMAGE);
                spawned.push(blast);
            }
        }
        self.projectiles.retain(|p| p.active);

        // 2. Blasts
        for b in self.blasts.iter_mut() {
            advance_blast(b);
        }
        self.blasts.retain(|b| b.active);
        self.blasts.append(&mut spawned);

        // 3. Fighters. P1 resolves first, so P2 moves from any knockback
        //    applied earlier in the same tick.
        let ground = self.ground_y();
        for i in 0..2 {
            let opponent = self.fighters[1 - i];
            let hit = tick_fighter(&mut self.fighters[i], &opponent, self.arena_width, ground);
            if let Some(hit) = hit {
                let defender = &mut self.fighters[1 - i];
                take_damage(defender, hit.damage);
                defender.x = clamp_x(defender.x + hit.push, self.arena_width);
            }
        }

        // 4. Terminal check. The first fighter found at zero loses.
        if let Some(downed) = self.fighters.iter().find(|f| f.health == 0) {
            self.winner = Some(downed.role.opponent());
        }

        self.tick_count += 1;
    }

    /// Route one key transition. After the terminal state only reset is
    /// honored.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Down(key) => self.key_down(key),
            InputEvent::Up(key) => self.key_up(key),
        }
    }

    fn key_down(&mut self, key: Key) {
        let command = command_for(key);
        if command == Command::Reset {
            self.reset();
            return;
        }
        if self.over() {
            return;
        }
        if let Command::Fighter(role, action) = command {
            let i = role.index();
            match action {
                Action::MoveLeft => self.fighters[i].move_left = true,
                Action::MoveRight => self.fighters[i].move_right = true,
                Action::Jump => fighter::jump(&mut self.fighters[i]),
                Action::Attack => {
                    if let Some(bolt) = fighter::start_attack(&mut self.fighters[i]) {
                        self.projectiles.push(bolt);
                    }
                }
            }
        }
    }

    fn key_up(&mut self, key: Key) {
        if self.over() {
            return;
        }
        if let Command::Fighter(role, action) = command_for(key) {
            let f = &mut self.fighters[role.index()];
            match action {
                Action::MoveLeft => {
                    f.move_left = false;
                    if !f.move_right && !f.is_jumping {
                        f.state = AnimState::Idle;
                    }
                }
                Action::MoveRight => {
                    f.move_right = false;
                    if !f.move_left && !f.is_jumping {
                        f.state = AnimState::Idle;
                    }
                }
                Action::Attack => {
                    if !f.is_jumping {
                        f.state = AnimState::Idle;
                    }
                }
                Action::Jump => {}
            }
        }
    }

    /// Restore the spawn state under the current arena dimensions and
    /// resume ticking.
    pub fn reset(&mut self) {
        self.fighters = spawn_fighters(&self.config.sheets, self.arena_width, self.arena_height);
        self.projectiles.clear();
        self.blasts.clear();
        self.tick_count = 0;
        self.winner = None;
    }

    /// Viewport change: new dimensions, new ground line, fighters
    /// re-anchored inside the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.arena_width = width;
        self.arena_height = height;
        let ground = self.ground_y();
        for f in self.fighters.iter_mut() {
            if f.is_jumping {
                f.y = f.y.min(ground);
            } else {
                f.y = ground;
            }
            f.x = clamp_x(f.x, width);
        }
    }

    /// Read-only render view of the current tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick_count,
            arena_width: self.arena_width,
            arena_height: self.arena_height,
            ground_y: self.ground_y(),
            fighters: [pose(&self.fighters[0]), pose(&self.fighters[1])],
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView { x: p.x, y: p.y, facing: p.facing, tint: p.tint() })
                .collect(),
            blasts: self
                .blasts
                .iter()
                .map(|b| BlastView { x: b.x, y: b.y, frame: b.frame, tint: b.tint })
                .collect(),
            over: self.over(),
            winner: self.winner,
        }
    }
}

fn pose(f: &Fighter) -> FighterPose {
    FighterPose {
        role: f.role,
        x: f.x,
        y: f.y,
        facing: f.facing,
        state: f.state,
        frame: f.frame,
        is_hit: f.is_hit(),
        health: f.health,
    }
}
