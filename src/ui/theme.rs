//! Color theme constants for the credit score UI.

use ratatui::style::Color;

use crate::gauge::ScoreBand;

/// Outer ring of the gauge
pub const COLOR_RING: Color = Color::Rgb(0x75, 0x75, 0x75);

/// Title and label text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading spinner
pub const COLOR_SPINNER: Color = Color::Yellow;

/// Error text
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Score Band Colors
// ============================================================================

pub const COLOR_BAND_NEUTRAL: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const COLOR_BAND_POOR: Color = Color::Rgb(0xE5, 0x73, 0x73); // red
pub const COLOR_BAND_FAIR: Color = Color::Rgb(0xFF, 0xB7, 0x4D); // orange
pub const COLOR_BAND_GOOD: Color = Color::Rgb(0xFF, 0xF1, 0x76); // yellow
pub const COLOR_BAND_EXCELLENT: Color = Color::Rgb(0x81, 0xC7, 0x84); // green

/// Color the arc and score of a band are drawn in.
pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Neutral => COLOR_BAND_NEUTRAL,
        ScoreBand::Poor => COLOR_BAND_POOR,
        ScoreBand::Fair => COLOR_BAND_FAIR,
        ScoreBand::Good => COLOR_BAND_GOOD,
        ScoreBand::Excellent => COLOR_BAND_EXCELLENT,
    }
}
