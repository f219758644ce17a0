//! Terminal session: full-screen setup and teardown, and the input stream

use std::io::stdout;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::supports_keyboard_enhancement;
use ratatui::DefaultTerminal;

use crate::error::ClientError;
use crate::input::{EventSource, KeyRepeater};

/// Restores the terminal when dropped, including on early error returns
pub struct TerminalSession {
    enhanced_keys: bool,
}

impl TerminalSession {
    /// Enter raw mode on the alternate screen with mouse capture and focus
    /// reports, asking for key release reports where the terminal supports
    /// them
    pub fn start() -> Result<(Self, DefaultTerminal), ClientError> {
        let terminal = ratatui::try_init()?;
        execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
        let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        tracing::info!(enhanced_keys, "terminal session started");
        Ok((Self { enhanced_keys }, terminal))
    }

    pub fn enhanced_keys(&self) -> bool {
        self.enhanced_keys
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout(), DisableFocusChange, DisableMouseCapture);
        ratatui::restore();
        tracing::info!("terminal session restored");
    }
}

/// Terminal input stream
///
/// With a repeater, the terminal's own repeats are dropped and held movement
/// keys repeat at the configured delay and interval instead.
pub struct TerminalEvents {
    repeater: Option<KeyRepeater>,
}

impl TerminalEvents {
    pub fn new(repeater: Option<KeyRepeater>) -> Self {
        Self { repeater }
    }

    fn accept(&mut self, event: Event, pending: &mut Vec<Event>) {
        let Some(repeater) = self.repeater.as_mut() else {
            pending.push(event);
            return;
        };
        match &event {
            // Releases that happen while unfocused are never reported
            Event::FocusLost => repeater.release_all(),
            Event::Key(key) => match key.kind {
                KeyEventKind::Press => repeater.press(key.code, Instant::now()),
                KeyEventKind::Release => {
                    repeater.release(key.code);
                    return;
                }
                KeyEventKind::Repeat => return,
            },
            _ => {}
        }
        pending.push(event);
    }
}

impl EventSource for TerminalEvents {
    fn poll(&mut self) -> Result<Vec<Event>, ClientError> {
        let mut pending = Vec::new();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.accept(event, &mut pending);
        }
        if let Some(repeater) = self.repeater.as_mut() {
            pending.extend(repeater.due(Instant::now()).into_iter().map(|code| {
                Event::Key(KeyEvent::new_with_kind(
                    code,
                    KeyModifiers::NONE,
                    KeyEventKind::Repeat,
                ))
            }));
        }
        Ok(pending)
    }
}
