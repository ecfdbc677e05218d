//! Donut gauge widget.
//!
//! A full outer ring with an inner arc that starts at 12 o'clock and runs
//! clockwise by the sweep angle, plus the score text in the middle. Drawn on a
//! braille canvas so the ring stays round at terminal resolution.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Paragraph, Widget,
    },
};

use crate::gauge::{render_score, ScoreBand};
use crate::ui::theme::{band_color, COLOR_HEADER, COLOR_RING};

/// Angular resolution of the arc, in degrees.
const ARC_STEP_DEGREES: f64 = 1.0;

/// Radii the score arc is stroked at; several give it some weight.
const ARC_RADII: [f64; 3] = [0.80, 0.83, 0.86];

/// Canvas half-extent; slightly larger than the ring so it is not clipped.
const CANVAS_BOUND: f64 = 1.1;

/// Text above the score.
const SCORE_LABEL: &str = "Your credit score is";

/// Smallest height (rows) at which the ring is drawn at all.
const MIN_RING_HEIGHT: u16 = 7;

/// Points along an arc of `radius` starting at 12 o'clock, clockwise.
///
/// The sweep is clamped to one full turn; a non-positive sweep yields no points.
pub fn arc_points(sweep: f64, radius: f64) -> Vec<(f64, f64)> {
    let sweep = sweep.clamp(0.0, 360.0);
    if sweep <= 0.0 {
        return Vec::new();
    }

    let steps = (sweep / ARC_STEP_DEGREES).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let theta = (sweep * i as f64 / steps as f64).to_radians();
            (radius * theta.sin(), radius * theta.cos())
        })
        .collect()
}

/// Widget drawing a score as a donut gauge.
#[derive(Debug, Clone)]
pub struct DonutGauge {
    value: i32,
    max_value: i32,
    sweep: f64,
    band: ScoreBand,
}

impl DonutGauge {
    /// Gauge for `value` out of `max_value` with the full (un-animated) sweep.
    pub fn new(value: i32, max_value: i32) -> Self {
        let reading = render_score(value, max_value);
        Self {
            value,
            max_value,
            sweep: reading.clamped_sweep(),
            band: reading.band,
        }
    }

    /// Override the drawn sweep (used while animating).
    pub fn sweep(mut self, sweep: f64) -> Self {
        self.sweep = sweep;
        self
    }

    fn text_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(SCORE_LABEL, Style::default().fg(COLOR_HEADER))),
            Line::from(Span::styled(
                self.value.to_string(),
                Style::default()
                    .fg(band_color(self.band))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("out of {}", self.max_value),
                Style::default().fg(COLOR_HEADER),
            )),
        ]
    }

    /// Largest area with a 2:1 cell aspect (round on screen), centered in `area`.
    fn ring_area(area: Rect) -> Rect {
        let height = area.height.min(area.width / 2);
        let width = height * 2;
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for DonutGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.text_lines();
        let text_height = lines.len() as u16;

        let ring = Self::ring_area(area);
        if ring.height >= MIN_RING_HEIGHT {
            let arc_color = band_color(self.band);
            let arcs: Vec<Vec<(f64, f64)>> = ARC_RADII
                .iter()
                .map(|radius| arc_points(self.sweep, *radius))
                .collect();

            Canvas::default()
                .marker(Marker::Braille)
                .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
                .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
                .paint(|ctx| {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: 1.0,
                        color: COLOR_RING,
                    });
                    for arc in &arcs {
                        ctx.draw(&Points {
                            coords: arc.as_slice(),
                            color: arc_color,
                        });
                    }
                })
                .render(ring, buf);
        }

        // Text sits in the middle of the ring (or of `area` when too small)
        let host = if ring.height >= MIN_RING_HEIGHT { ring } else { area };
        let text_width = (host.width * 3 / 5).max(host.width.min(20));
        let text_area = Rect {
            x: host.x + (host.width - text_width) / 2,
            y: host.y + host.height.saturating_sub(text_height) / 2,
            width: text_width,
            height: text_height.min(host.height),
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(text_area, buf);
    }
}
