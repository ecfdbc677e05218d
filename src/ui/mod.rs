//! UI rendering for the credit score screen.
//!
//! One screen with a title bar, a body that follows the fetch state, and a
//! footer of key hints:
//!
//! - `Loading`: spinner
//! - `Success`: donut gauge and a detail line
//! - `Error`: `Error: <message>`

pub mod components;
mod theme;

pub use theme::{
    band_color, COLOR_BAND_EXCELLENT, COLOR_BAND_FAIR, COLOR_BAND_GOOD, COLOR_BAND_NEUTRAL,
    COLOR_BAND_POOR, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_RING, COLOR_SPINNER,
};

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::fetch::FetchState;
use crate::models::CreditReportResponse;
use components::{render_status_indicator, DonutGauge, StatusIndicatorType};

pub const TITLE: &str = "Credit Score";
pub const LOADING_MESSAGE: &str = "Fetching credit report...";
pub const KEY_HINTS: &str = "r refresh  q quit";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for `app` as of `now`.
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);

    match &app.state {
        FetchState::Loading => {
            let indicator = StatusIndicatorType::spinner(LOADING_MESSAGE, app.spinner_frame);
            render_centered_lines(frame, body, render_status_indicator(&indicator));
        }
        FetchState::Success(report) => {
            render_report(frame, body, report, app.displayed_sweep(now));
        }
        FetchState::Error(message) => {
            let indicator = StatusIndicatorType::error(message.clone());
            render_centered_lines(frame, body, render_status_indicator(&indicator));
        }
    }

    render_footer(frame, footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", TITLE),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        KEY_HINTS,
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

/// Render `lines` wrapped to `area` and roughly vertically centered.
///
/// The paragraph runs to the bottom of `area`, so word wrapping that needs
/// more rows than estimated still shows the whole text.
fn render_centered_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let width = usize::from(area.width.max(1));
    let estimated: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    let estimated = u16::try_from(estimated).unwrap_or(u16::MAX);

    let top = area.y + area.height.saturating_sub(estimated) / 2;
    let target = Rect {
        y: top,
        height: area.bottom() - top,
        ..area
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, target);
}

fn render_report(frame: &mut Frame, area: Rect, report: &CreditReportResponse, sweep: f64) {
    let info = &report.credit_report_info;
    let [gauge_area, detail_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let gauge = DonutGauge::new(info.score, info.max_score_value).sweep(sweep);
    frame.render_widget(gauge, gauge_area);

    let detail = Paragraph::new(detail_line(report)).alignment(Alignment::Center);
    frame.render_widget(detail, detail_area);
}

/// One-line summary shown under the gauge.
pub fn detail_line(report: &CreditReportResponse) -> Line<'static> {
    let info = &report.credit_report_info;
    let days = match info.days_until_next_report {
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    };
    Line::from(vec![
        Span::styled(
            info.equifax_score_band_description.clone(),
            Style::default().fg(COLOR_HEADER),
        ),
        Span::styled(format!("  next report in {}", days), Style::default().fg(COLOR_DIM)),
    ])
}
