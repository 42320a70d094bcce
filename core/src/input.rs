use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Keys the game binds. Variant names match KeyboardEvent.code values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    KeyA,
    KeyD,
    KeyW,
    KeyF,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Slash,
    KeyR,
}

impl Key {
    /// Parse a KeyboardEvent.code string. Unbound codes map to None.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "KeyA" => Some(Key::KeyA),
            "KeyD" => Some(Key::KeyD),
            "KeyW" => Some(Key::KeyW),
            "KeyF" => Some(Key::KeyF),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "Slash" => Some(Key::Slash),
            "KeyR" => Some(Key::KeyR),
            _ => None,
        }
    }
}

/// One key transition, delivered between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Down(Key),
    Up(Key),
}

/// What a bound key asks of its fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
}

/// Resolved meaning of a key under the fixed binding table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fighter(Role, Action),
    Reset,
}

/// Fixed bindings: P1 on A/D/W/F, P2 on the arrows plus Slash, R resets.
pub fn command_for(key: Key) -> Command {
    match key {
        Key::KeyA => Command::Fighter(Role::P1, Action::MoveLeft),
        Key::KeyD => Command::Fighter(Role::P1, Action::MoveRight),
        Key::KeyW => Command::Fighter(Role::P1, Action::Jump),
        Key::KeyF => Command::Fighter(Role::P1, Action::Attack),
        Key::ArrowLeft => Command::Fighter(Role::P2, Action::MoveLeft),
        Key::ArrowRight => Command::Fighter(Role::P2, Action::MoveRight),
        Key::ArrowUp => Command::Fighter(Role::P2, Action::Jump),
        Key::Slash => Command::Fighter(Role::P2, Action::Attack),
        Key::KeyR => Command::Reset,
    }
}
