//! Application state for the credit score screen.
//!
//! `App` keeps a snapshot of the latest [`FetchState`] plus everything the
//! renderer needs that is not part of the fetch itself: spinner frame, arc
//! animation and the redraw flag. The event loop in `main.rs` feeds it state
//! changes, key events and ticks.

mod handlers;

use std::time::Instant;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::fetch::{FetchState, FetchStateMachine};
use crate::gauge::{render_score, GaugeReading, SweepAnimation};
use crate::ui::components::next_spinner_frame;

/// Ticks between spinner frames (16 ms ticks, so roughly 100 ms).
pub const SPINNER_TICK_INTERVAL: u64 = 6;

/// Main application state.
pub struct App {
    fetch: FetchStateMachine,
    /// Latest state received from the fetch state machine
    pub state: FetchState,
    /// Arc grow-in for the current report, if any
    pub animation: Option<SweepAnimation>,
    /// Current spinner frame while loading
    pub spinner_frame: usize,
    /// Ticks since start
    pub tick_count: u64,
    pub should_quit: bool,
    /// Set whenever something visible changed since the last draw
    pub needs_redraw: bool,
}

impl App {
    pub fn new(fetch: FetchStateMachine) -> Self {
        let state = fetch.state();
        Self {
            fetch,
            state,
            animation: None,
            spinner_frame: 0,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Receiver for fetch state changes, for the event loop to select on.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.fetch.subscribe()
    }

    /// Start (or restart) the fetch.
    pub fn refresh(&mut self) -> JoinHandle<()> {
        let handle = self.fetch.trigger();
        self.apply_state(self.fetch.state());
        handle
    }

    /// Take a new fetch state into the view.
    ///
    /// A new `Success` restarts the arc animation at `now`.
    pub fn apply_state_at(&mut self, state: FetchState, now: Instant) {
        if state == self.state {
            return;
        }

        self.animation = state.report().map(|report| {
            let info = &report.credit_report_info;
            let target = render_score(info.score, info.max_score_value).clamped_sweep();
            SweepAnimation::new(target, now)
        });
        self.state = state;
        self.mark_dirty();
    }

    pub fn apply_state(&mut self, state: FetchState) {
        self.apply_state_at(state, Instant::now());
    }

    /// Gauge reading of the current report, if any.
    pub fn reading(&self) -> Option<GaugeReading> {
        self.state.report().map(|report| {
            let info = &report.credit_report_info;
            render_score(info.score, info.max_score_value)
        })
    }

    /// Sweep to draw at `now`, following the animation.
    pub fn displayed_sweep(&self, now: Instant) -> f64 {
        match (&self.animation, self.reading()) {
            (Some(animation), _) => animation.sweep_at(now),
            (None, Some(reading)) => reading.clamped_sweep(),
            (None, None) => 0.0,
        }
    }

    /// Whether frames must keep being drawn without new input.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.is_loading()
            || self
                .animation
                .as_ref()
                .is_some_and(|animation| !animation.is_finished(now))
    }

    /// Advance the tick counter and the spinner.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.is_loading() && self.tick_count % SPINNER_TICK_INTERVAL == 0 {
            self.spinner_frame = next_spinner_frame(self.spinner_frame);
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
