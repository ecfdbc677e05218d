//! Key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Handle a key press.
    ///
    /// - `r`: re-trigger the fetch
    /// - `q`, `Esc`, `Ctrl+C`: quit
    ///
    /// Releases and repeats from enhanced keyboards are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                tracing::debug!("refresh requested");
                // The task is detached; its result arrives through the state channel
                drop(self.refresh());
            }
            _ => {}
        }
    }
}
