//! Game States
//!
//! Playing, Paused and GameOver as a closed enum. Each state turns the
//! tick's input into an optional transition, then gets an update that may
//! request one too. The runtime applies them with events taking precedence.
//!
//! ```text
//!            P / Esc                 health 0
//!   Paused <─────────── Playing ─────────────> GameOver
//!      │    ──────────>    ^                      │
//!      │   P / Esc / R     └──────── R ───────────┤
//!      Q                                        Enter
//!      v                                          v
//!    Quit <───────────── window close ─────────  Quit
//! ```

use macroquad::prelude::Color;

use super::session::Session;
use super::theme;
use crate::input::{Action, FrameInput};

/// State identity, used to request transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Playing,
    Paused,
    GameOver,
}

/// Result of handling one tick of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Stay,
    Quit,
    To(StateKind),
}

/// Result of updating one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Stay,
    To(StateKind),
}

/// Game-over screen, with its score text fixed when the state is entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverScreen {
    pub final_score: u32,
    pub score_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver(GameOverScreen),
}

/// One line of overlay text, positioned relative to the screen centre
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub font_size: u16,
    pub color: Color,
    pub offset_y: f32,
}

/// Text drawn over the dimmed playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub lines: Vec<OverlayLine>,
}

impl Overlay {
    fn new(title: &str, title_color: Color, body: &[&str]) -> Self {
        let mut lines = vec![OverlayLine {
            text: title.to_string(),
            font_size: theme::FONT_SIZE_TITLE,
            color: title_color,
            offset_y: -50.0,
        }];
        for (i, text) in body.iter().enumerate() {
            lines.push(OverlayLine {
                text: text.to_string(),
                font_size: theme::FONT_SIZE_CONTENT,
                color: theme::OVERLAY_TEXT,
                offset_y: 20.0 + 50.0 * i as f32,
            });
        }
        Self { lines }
    }
}

impl GameState {
    /// Construct a fresh state. GameOver reads the score from the session now.
    pub fn enter(kind: StateKind, session: &Session) -> Self {
        match kind {
            StateKind::Playing => GameState::Playing,
            StateKind::Paused => GameState::Paused,
            StateKind::GameOver => {
                let final_score = session.player.score;
                GameState::GameOver(GameOverScreen {
                    final_score,
                    score_text: format!("Final Score: {}", final_score),
                })
            }
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            GameState::Playing => StateKind::Playing,
            GameState::Paused => StateKind::Paused,
            GameState::GameOver(_) => StateKind::GameOver,
        }
    }

    pub fn handle_events(&mut self, input: &FrameInput, session: &mut Session, now: f64) -> EventOutcome {
        if input.quit_requested {
            return EventOutcome::Quit;
        }
        match self {
            GameState::Playing => {
                if input.pressed(Action::Pause) {
                    return EventOutcome::To(StateKind::Paused);
                }
                session.input = *input;
                EventOutcome::Stay
            }
            GameState::Paused => {
                if input.pressed(Action::Pause) || input.pressed(Action::Restart) {
                    EventOutcome::To(StateKind::Playing)
                } else if input.pressed(Action::Quit) {
                    EventOutcome::Quit
                } else {
                    EventOutcome::Stay
                }
            }
            GameState::GameOver(_) => {
                if input.pressed(Action::Restart) {
                    session.reset(now);
                    EventOutcome::To(StateKind::Playing)
                } else if input.pressed(Action::Confirm) {
                    EventOutcome::Quit
                } else {
                    EventOutcome::Stay
                }
            }
        }
    }

    pub fn update(&mut self, session: &mut Session, dt: f32, now: f64) -> UpdateOutcome {
        match self {
            GameState::Playing => {
                session.step(dt, now);
                if session.player.is_dead() {
                    log::info!("Shot Down (score {})", session.player.score);
                    UpdateOutcome::To(StateKind::GameOver)
                } else {
                    UpdateOutcome::Stay
                }
            }
            GameState::Paused | GameState::GameOver(_) => UpdateOutcome::Stay,
        }
    }

    /// Text to draw over the playfield, if any
    pub fn overlay(&self) -> Option<Overlay> {
        match self {
            GameState::Playing => None,
            GameState::Paused => Some(Overlay::new(
                "PAUSED",
                theme::PAUSED_TITLE,
                &["Press 'R' or 'P' to Resume", "Press 'Q' to Quit"],
            )),
            GameState::GameOver(screen) => Some(Overlay::new(
                "Shot Down",
                theme::GAME_OVER_TITLE,
                &[screen.score_text.as_str(), "Press 'R' to Restart or ENTER to Quit"],
            )),
        }
    }
}
