use creditscore::app::App;
use creditscore::cli::{parse_args, run_cli_command, version::USAGE};
use creditscore::client::CreditReportClient;
use creditscore::config::AppConfig;
use creditscore::fetch::FetchStateMachine;
use creditscore::logging::init_logging;
use creditscore::repository::CreditReportRepository;
use creditscore::terminal::{setup_panic_hook, TerminalManager};
use creditscore::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Frame interval for ticks and animation.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags are handled before any terminal setup
    let overrides = match parse_args(std::env::args()) {
        Ok(command) => run_cli_command(command),
        Err(err) => {
            eprintln!("Error: {}\n\n{}", err, USAGE);
            std::process::exit(1);
        }
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = AppConfig::from_env().apply_overrides(&overrides);

    // Logging is best effort; the TUI still runs without a log file
    if let Err(err) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", err);
    }
    tracing::info!(url = %config.endpoint_url(), "starting creditscore");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = CreditReportClient::from_config(&config)?;
        let repository = Arc::new(CreditReportRepository::new(client));
        let mut app = App::new(FetchStateMachine::new(repository));

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();

        if let Err(err) = &result {
            tracing::error!(error = %err, "exiting with error");
        }
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut state_rx = app.subscribe();

    // Fetch once on start
    drop(app.refresh());

    loop {
        let now = Instant::now();
        if app.needs_redraw || app.is_animating(now) {
            terminal.draw(|f| ui::render(f, app, now))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            changed = state_rx.changed() => {
                if changed.is_ok() {
                    let state = state_rx.borrow_and_update().clone();
                    app.apply_state(state);
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    // Input closed
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
