#![forbid(unsafe_code)]

//! rosgraph-tui binary entry point.

use rgtui::app::{App, source_from_opts};
use rgtui::cli::Opts;
use rgtui::logging::{LogConfig, init_logging};
use rgtui::terminal_session::{SessionOptions, TerminalSession};

fn main() {
    let opts = Opts::parse();

    let log_config = LogConfig {
        format: opts.log_format,
        filter: opts.log_filter.clone(),
        log_file: opts.log_file.clone(),
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    // Snapshot problems are reported before the terminal is taken over.
    let app = source_from_opts(&opts)
        .map_err(Into::into)
        .and_then(App::new);
    let mut app = match app {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    let result = TerminalSession::new(SessionOptions::fullscreen(opts.mouse))
        .map_err(Into::into)
        .and_then(|session| app.run(&session));
    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(e.exit_code());
    }
}
