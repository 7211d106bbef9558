//! Game Runtime
//!
//! Owns the session and the current state, and drives one tick at a time:
//! input → events → update, then (after the caller draws) the transition.
//! Transitions are held back until the frame is drawn so the old state
//! renders its last frame first.

use super::session::Session;
use super::state::{EventOutcome, GameState, StateKind, UpdateOutcome};
use crate::input::FrameInput;

/// Transition decided during a tick, applied by `finish_tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTransition {
    None,
    Quit,
    To(StateKind),
}

pub struct GameRuntime {
    pub session: Session,
    pub state: GameState,
    running: bool,
}

impl GameRuntime {
    /// Start in Playing
    pub fn new(session: Session) -> Self {
        Self {
            session,
            state: GameState::Playing,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle events, then update the current state.
    ///
    /// The update always runs. When both ask for a transition, the one from
    /// events wins.
    pub fn simulate(&mut self, input: &FrameInput, dt: f32, now: f64) -> PendingTransition {
        let event = self.state.handle_events(input, &mut self.session, now);
        let update = self.state.update(&mut self.session, dt, now);
        match (event, update) {
            (EventOutcome::Quit, _) => PendingTransition::Quit,
            (EventOutcome::To(kind), _) => PendingTransition::To(kind),
            (EventOutcome::Stay, UpdateOutcome::To(kind)) => PendingTransition::To(kind),
            (EventOutcome::Stay, UpdateOutcome::Stay) => PendingTransition::None,
        }
    }

    /// Apply the tick's transition after drawing
    pub fn finish_tick(&mut self, pending: PendingTransition) {
        match pending {
            PendingTransition::None => {}
            PendingTransition::Quit => {
                log::info!("Quitting");
                self.running = false;
            }
            PendingTransition::To(kind) => {
                log::info!("State {:?} -> {:?}", self.state.kind(), kind);
                self.state = GameState::enter(kind, &self.session);
            }
        }
    }
}

/// Holds each frame to a target duration.
///
/// Sleeps for the bulk of the remaining budget, then spin-waits the last
/// couple of milliseconds for precision.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Target frame time in seconds (None = unlocked)
    target: Option<f64>,
    frame_start: f64,
}

impl FrameClock {
    /// Spin-wait window at the end of each frame
    const SPIN_MARGIN: f64 = 0.002;

    pub fn new(target: Option<f64>) -> Self {
        Self { target, frame_start: 0.0 }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self, now: f64) {
        self.frame_start = now;
    }

    /// Seconds left in this frame's budget (0 when over or unlocked)
    pub fn remaining(&self, now: f64) -> f64 {
        match self.target {
            Some(target) => (target - (now - self.frame_start)).max(0.0),
            None => 0.0,
        }
    }

    /// Block until the frame budget is used up. `clock` returns seconds.
    pub fn wait(&self, clock: impl Fn() -> f64) {
        let Some(target) = self.target else { return };
        if self.remaining(clock()) <= 0.0 {
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            while clock() - self.frame_start + Self::SPIN_MARGIN < target {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while clock() - self.frame_start < target {
                std::hint::spin_loop();
            }
        }
        // WASM: no thread::sleep available
        #[cfg(target_arch = "wasm32")]
        {
            while clock() - self.frame_start < target {
                std::hint::spin_loop();
            }
        }
    }
}
