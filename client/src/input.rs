//! Keyboard and mouse input handling

use std::time::{Duration, Instant};

use game_core::{Direction, PaddleCommand, Side};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};

use crate::error::ClientError;

/// Stream of discrete host input events
pub trait EventSource {
    /// Every event that arrived since the last poll, without blocking
    fn poll(&mut self) -> Result<Vec<Event>, ClientError>;
}

/// What the game loop should do with one host event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(PaddleCommand),
    Quit,
}

/// Paddle command bound to a key, if any
///
/// `W`/`S` drive the left paddle, the arrow keys drive the right one.
pub fn map_key(code: KeyCode) -> Option<PaddleCommand> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(PaddleCommand::new(Side::Left, Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(PaddleCommand::new(Side::Left, Direction::Down))
        }
        KeyCode::Up => Some(PaddleCommand::new(Side::Right, Direction::Up)),
        KeyCode::Down => Some(PaddleCommand::new(Side::Right, Direction::Down)),
        _ => None,
    }
}

/// Close request: the terminal has no window close button, so Esc, `q` and
/// Ctrl-C stand in for it
fn is_close_request(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Translate a host event; anything unrecognized is a no-op
pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if is_close_request(key) {
                Some(InputAction::Quit)
            } else {
                map_key(key.code).map(InputAction::Move)
            }
        }
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(InputAction::Quit)
        }
        _ => None,
    }
}

/// Letter keys in their lowercase form, so a press and a release still match
/// when Shift changes while the key is held
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Synthesizes key-down repeats for held movement keys
///
/// Only usable when the terminal reports key releases; otherwise the
/// terminal's own auto-repeat is relied on.
#[derive(Debug)]
pub struct KeyRepeater {
    delay: Duration,
    interval: Duration,
    held: Vec<(KeyCode, Instant)>, // (key, next repeat due)
}

impl KeyRepeater {
    pub fn new(delay: Duration, interval: Duration) -> Self {
        Self {
            delay,
            interval,
            held: Vec::new(),
        }
    }

    /// Track a freshly pressed key; non-movement keys are ignored
    pub fn press(&mut self, code: KeyCode, now: Instant) {
        let code = normalize(code);
        if map_key(code).is_none() || self.is_held(code) {
            return;
        }
        self.held.push((code, now + self.delay));
    }

    pub fn release(&mut self, code: KeyCode) {
        let code = normalize(code);
        self.held.retain(|(held, _)| *held != code);
    }

    /// Forget every held key, e.g. when releases can no longer be seen
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        let code = normalize(code);
        self.held.iter().any(|(held, _)| *held == code)
    }

    /// Keys whose repeat is due at `now`, each rescheduled one interval later
    pub fn due(&mut self, now: Instant) -> Vec<KeyCode> {
        let mut fired = Vec::new();
        for (code, next) in &mut self.held {
            if *next <= now {
                fired.push(*code);
                *next = now + self.interval;
            }
        }
        fired
    }
}
