//! Command-line argument parsing.

use thiserror::Error;

/// Settings the command line can override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--url <BASE_URL>`
    pub base_url: Option<String>,
    /// `--timeout <SECS>`
    pub timeout_secs: Option<u64>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Error type for argument parsing.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value for --timeout: {0}")]
    InvalidTimeout(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parse command-line arguments (including the program name).
///
/// `--version` and `--help` win as soon as they are seen.
///
/// # Examples
///
/// ```
/// use creditscore::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["creditscore".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                overrides.base_url = Some(value);
            }
            "--timeout" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| CliError::InvalidTimeout(value.clone()))?;
                overrides.timeout_secs = Some(secs);
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::RunTui(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::vec::IntoIter<String> {
        std::iter::once("creditscore")
            .chain(list.iter().copied())
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse_args(args(&[])),
            Ok(CliCommand::RunTui(CliOverrides::default()))
        );
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse_args(args(&["--version"])), Ok(CliCommand::Version));
        assert_eq!(parse_args(args(&["-V"])), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse_args(args(&["--help"])), Ok(CliCommand::Help));
        assert_eq!(parse_args(args(&["-h"])), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_overrides() {
        let command = parse_args(args(&["--url", "http://localhost:8080", "--timeout", "5"]));
        assert_eq!(
            command,
            Ok(CliCommand::RunTui(CliOverrides {
                base_url: Some("http://localhost:8080".to_string()),
                timeout_secs: Some(5),
            }))
        );
    }

    #[test]
    fn test_version_wins_over_later_errors() {
        assert_eq!(
            parse_args(args(&["--version", "--bogus"])),
            Ok(CliCommand::Version)
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse_args(args(&["--url"])),
            Err(CliError::MissingValue("--url".to_string()))
        );
    }

    #[test]
    fn test_invalid_timeout() {
        assert_eq!(
            parse_args(args(&["--timeout", "fast"])),
            Err(CliError::InvalidTimeout("fast".to_string()))
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert_eq!(
            parse_args(args(&["--timeout", "0"])),
            Err(CliError::InvalidTimeout("0".to_string()))
        );
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(args(&["--sync"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --sync");
    }
}
