//! Input state management
//!
//! Polls macroquad's keyboard and window-close state into a per-tick
//! snapshot of held and just-pressed actions.

use macroquad::prelude::*;
use super::Action;

/// Compact set of actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u16);

impl ActionSet {
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }
}

/// Everything the game needs to know about input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Actions whose key is currently down
    pub held: ActionSet,
    /// Actions whose key went down this tick
    pub pressed: ActionSet,
    /// The window close button was clicked
    pub quit_requested: bool,
}

impl FrameInput {
    pub fn held(&self, action: Action) -> bool {
        self.held.contains(action)
    }

    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    /// Builder: mark an action as held
    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    /// Builder: mark an action as pressed this tick (a press is also held)
    pub fn with_pressed(mut self, action: Action) -> Self {
        self.pressed.insert(action);
        self.held.insert(action);
        self
    }

    /// Builder: window close
    pub fn with_quit_request(mut self) -> Self {
        self.quit_requested = true;
        self
    }

    /// Directional flags as (left, right, up, down)
    pub fn directions(&self) -> Directions {
        Directions {
            left: self.held(Action::MoveLeft),
            right: self.held(Action::MoveRight),
            up: self.held(Action::MoveUp),
            down: self.held(Action::MoveDown),
        }
    }
}

/// The four movement flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Directions {
    /// Raw, unnormalized input vector (x = right - left, y = down - up)
    pub fn axis(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        vec2(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Keyboard poller
pub struct InputState;

impl InputState {
    /// Take over the window close button so quitting goes through the game loop.
    /// Must be called from inside the macroquad context.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    /// Call once per frame
    pub fn poll(&self) -> FrameInput {
        let mut input = FrameInput::default();
        for action in Action::ALL {
            let keys = action.keys();
            if keys.iter().any(|&k| is_key_down(k)) {
                input = input.with_held(action);
            }
            if keys.iter().any(|&k| is_key_pressed(k)) {
                input = input.with_pressed(action);
            }
        }
        if is_quit_requested() {
            input = input.with_quit_request();
        }
        input
    }
}
