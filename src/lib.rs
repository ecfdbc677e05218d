//! creditscore - fetch a credit report and show the score as a donut gauge.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gauge;
pub mod logging;
pub mod models;
pub mod repository;
pub mod terminal;
pub mod traits;
pub mod ui;
