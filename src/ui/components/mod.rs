//! Reusable UI components.

pub mod donut;
pub mod status_indicator;

pub use donut::{arc_points, DonutGauge};
pub use status_indicator::{
    get_spinner_char, next_spinner_frame, render_status_indicator, StatusIndicatorType,
};
