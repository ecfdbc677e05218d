//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: creditscore [OPTIONS]

Fetch a credit report and show the score as a donut gauge.

Options:
  --url <BASE_URL>   Report server base URL (env: CREDITSCORE_BASE_URL)
  --timeout <SECS>   Request timeout in seconds (env: CREDITSCORE_TIMEOUT_SECS)
  -V, --version      Print version and exit
  -h, --help         Print this help and exit

Keys: r refresh, q quit";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("creditscore {}", VERSION)
}

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}
