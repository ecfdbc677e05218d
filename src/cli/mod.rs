//! CLI module for creditscore.
//!
//! The dispatcher runs early in `main()`, before the TUI is initialised:
//!
//! ```ignore
//! use creditscore::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! // --version and --help print and exit inside this call
//! let overrides = run_cli_command(command);
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliError, CliOverrides};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the overrides for `RunTui`. `Version` and `Help` print and exit.
pub fn run_cli_command(command: CliCommand) -> CliOverrides {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(overrides) => overrides,
    }
}
