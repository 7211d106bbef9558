//! Logical input actions and their keyboard bindings

use macroquad::prelude::KeyCode;

/// Every logical key the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Flight (held)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,

    // Menus (edge-triggered)
    Pause,
    Confirm,
    Restart,
    Quit,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Fire,
        Action::Pause,
        Action::Confirm,
        Action::Restart,
        Action::Quit,
    ];

    /// Bit position inside an `ActionSet`
    pub(crate) fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left],
            Action::MoveRight => &[KeyCode::Right],
            Action::MoveUp => &[KeyCode::Up],
            Action::MoveDown => &[KeyCode::Down],
            Action::Fire => &[KeyCode::Space],
            Action::Pause => &[KeyCode::P, KeyCode::Escape],
            Action::Confirm => &[KeyCode::Enter, KeyCode::KpEnter],
            Action::Restart => &[KeyCode::R],
            Action::Quit => &[KeyCode::Q],
        }
    }
}
