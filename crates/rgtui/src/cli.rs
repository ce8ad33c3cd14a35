#![forbid(unsafe_code)]

//! Command-line argument parsing for rosgraph-tui.
//!
//! Parses args by hand. Environment variables with the `RGTUI_` prefix
//! supply defaults; explicit flags override them.

use std::env;
use std::path::PathBuf;
use std::process;

use crate::logging::LogFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
rosgraph-tui: browse a ROS computation graph in the terminal

USAGE:
    rosgraph-tui [OPTIONS]

OPTIONS:
    --snapshot=PATH      Read the graph from a JSON snapshot file
    --demo               Use the built-in talker/listener demo graph
    --no-mouse           Disable mouse event capture
    --log-file=PATH      Write logs to PATH (no logging when unset)
    --log-format=FMT     Log format: 'pretty' (default), 'compact' or 'json'
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    a-z 0-9 _ /          Type into the filter of the middle column
    Backspace            Delete the last filter character
    Esc                  Clear filter, zoom out, or quit
    Left / Right         Move between columns; at an edge, follow its entry
    Up / Down            Move the selection
    PgUp / PgDn          Move the selection one page
    Home / End           First / last entry
    Enter / Space        Follow the selected entry
    Mouse click          Follow the clicked entry
    Ctrl+R               Re-read the graph snapshot
    Ctrl+C               Quit

ENVIRONMENT VARIABLES:
    RGTUI_SNAPSHOT       Override --snapshot
    RGTUI_LOG_FILE       Override --log-file
    RGTUI_LOG_FORMAT     Override --log-format
    RGTUI_LOG            Log filter directives (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// JSON snapshot file to read the graph from.
    pub snapshot: Option<PathBuf>,
    /// Use the built-in demo graph instead of a file.
    pub demo: bool,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Log destination. Logging is off when unset.
    pub log_file: Option<PathBuf>,
    pub log_format: LogFormat,
    /// `EnvFilter` directives.
    pub log_filter: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            snapshot: None,
            demo: false,
            mouse: true,
            log_file: None,
            log_format: LogFormat::default(),
            log_filter: "info".into(),
        }
    }
}

/// Outcome of parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// Prints and exits for `--help`, `--version`, and invalid arguments.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("rosgraph-tui {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `var` as the environment lookup.
    ///
    /// # Errors
    ///
    /// Returns a diagnostic for unknown flags and invalid values.
    pub fn parse_from<I, S, F>(args: I, var: F) -> Result<Parsed, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment defaults first
        if let Some(val) = var("RGTUI_SNAPSHOT")
            && !val.is_empty()
        {
            opts.snapshot = Some(PathBuf::from(val));
        }
        if let Some(val) = var("RGTUI_LOG_FILE")
            && !val.is_empty()
        {
            opts.log_file = Some(PathBuf::from(val));
        }
        if let Some(val) = var("RGTUI_LOG_FORMAT")
            && let Ok(format) = val.parse()
        {
            opts.log_format = format;
        }
        if let Some(val) = var("RGTUI_LOG")
            && !val.is_empty()
        {
            opts.log_filter = val;
        }

        // Command-line args override env vars
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--demo" => opts.demo = true,
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(val) = other.strip_prefix("--snapshot=") {
                        opts.snapshot = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--log-format=") {
                        opts.log_format = val
                            .parse()
                            .map_err(|_| format!("Invalid --log-format value: {val}"))?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Parsed::Run(opts))
    }
}
