//! Status Indicator Component
//!
//! Renders the loading spinner and the error message.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ERROR, COLOR_SPINNER};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        /// Message to display (e.g., "Fetching credit report...")
        message: String,
        /// Current frame index (wraps)
        frame: usize,
    },
    /// Error indicator with the message shown to the user
    Error {
        message: String,
    },
}

impl StatusIndicatorType {
    /// Create a new spinner indicator
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    /// Create a new error indicator
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Advance the spinner frame
pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render a status indicator as lines, without padding.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            vec![Line::from(vec![
                Span::styled(
                    format!("{} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_SPINNER),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_SPINNER)
                        .add_modifier(Modifier::BOLD),
                ),
            ])]
        }
        StatusIndicatorType::Error { message } => {
            vec![Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(COLOR_ERROR),
            ))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_spinner_frames_cycle() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(4), '◐');
        assert_eq!(next_spinner_frame(3), 0);
        assert_eq!(next_spinner_frame(1), 2);
    }

    #[test]
    fn test_render_spinner() {
        let lines = render_status_indicator(&StatusIndicatorType::spinner("Loading", 1));
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "◓ Loading");
    }

    #[test]
    fn test_render_error_prefixes_message() {
        let lines = render_status_indicator(&StatusIndicatorType::error("Network error"));
        assert_eq!(line_text(&lines[0]), "Error: Network error");
        assert_eq!(lines[0].spans[0].style.fg, Some(COLOR_ERROR));
    }
}
