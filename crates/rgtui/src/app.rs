#![forbid(unsafe_code)]

//! The rosgraph-tui application.
//!
//! [`App`] owns the snapshot source, the navigation [`Session`] with its
//! three [`ColumnWidget`] ports, and the screen layout. [`App::handle`]
//! applies one [`Input`]; [`App::run`] is the blocking terminal loop around
//! it.

use std::io::{self, Write};

use rgtui_graph::{DemoSource, FileSource, GraphError, GraphResult, SnapshotSource, StaticGraph};
use rgtui_nav::{Cmd, Column, NavigationController, Session};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cli::Opts;
use crate::input::{Input, map_event};
use crate::render::draw_frame;
use crate::terminal_session::TerminalSession;
use crate::widget::{ColumnLayout, ColumnWidget};

/// Failures that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl AppError {
    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

/// Pick the snapshot source named by the options.
///
/// `--demo` wins over `--snapshot`.
///
/// # Errors
///
/// [`GraphError::SnapshotUnavailable`] when neither is given.
pub fn source_from_opts(opts: &Opts) -> GraphResult<Box<dyn SnapshotSource>> {
    if opts.demo {
        return Ok(Box::new(DemoSource));
    }
    match &opts.snapshot {
        Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
        None => Err(GraphError::SnapshotUnavailable {
            source_name: "command line".into(),
            reason: "no snapshot source given; pass --snapshot=PATH or --demo".into(),
        }),
    }
}

/// Application state.
pub struct App {
    source: Box<dyn SnapshotSource>,
    session: Session<StaticGraph, ColumnWidget>,
    layout: ColumnLayout,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source.name())
            .field("session", &self.session)
            .field("layout", &self.layout)
            .finish()
    }
}

impl App {
    /// Acquire the first snapshot and start a session on it.
    ///
    /// # Errors
    ///
    /// Acquisition failures and [`GraphError::EmptySnapshot`].
    pub fn new(source: Box<dyn SnapshotSource>) -> Result<Self, AppError> {
        let graph = source.acquire()?;
        info!(
            source = %source.name(),
            nodes = graph.node_count(),
            topics = graph.topic_count(),
            "starting navigation session"
        );
        let controller = NavigationController::new(graph)?;
        let session = Session::new(controller, Default::default());
        Ok(Self {
            source,
            session,
            layout: ColumnLayout::default(),
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session<StaticGraph, ColumnWidget> {
        &self.session
    }

    #[must_use]
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = ColumnLayout::new(width, height);
    }

    /// Apply one input.
    pub fn handle(&mut self, input: Input) -> Cmd {
        match input {
            Input::Nav(event) => self.session.dispatch(event),
            Input::Arrow(direction) => self.session.arrow(direction),
            Input::Activate => self.session.activate(),
            Input::Move(motion) => {
                let focus = self.session.focus();
                let page = self.layout.list_height();
                self.session
                    .ports_mut()
                    .get_mut(focus)
                    .apply_motion(motion, page);
                self.session.refresh_footers();
                Cmd::None
            }
            Input::Click { x, y } => self.click(x, y),
            Input::Refresh => {
                self.refresh();
                Cmd::None
            }
            Input::Quit => Cmd::Quit,
            Input::Resize { width, height } => {
                self.resize(width, height);
                Cmd::None
            }
        }
    }

    /// Focus the clicked column; a click on an entry also follows it.
    fn click(&mut self, x: u16, y: u16) -> Cmd {
        let Some(column) = self.layout.column_at(x, y) else {
            return Cmd::None;
        };
        self.session.focus_column(column);
        let Some(row) = self.layout.list_row_at(y) else {
            return Cmd::None;
        };
        let widget = self.session.ports_mut().get_mut(column);
        let index = widget.offset() + row;
        if !widget.select(index) {
            return Cmd::None;
        }
        debug!(?column, index, "entry clicked");
        self.session.activate()
    }

    /// Re-acquire the snapshot. Failures keep the current session.
    pub fn refresh(&mut self) {
        let result = self
            .source
            .acquire()
            .and_then(|graph| self.session.refresh(graph));
        match result {
            Ok(()) => info!(source = %self.source.name(), "graph snapshot refreshed"),
            Err(err) => warn!(%err, "refresh failed, keeping current snapshot"),
        }
    }

    /// Scroll every column to its selection and draw.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let height = self.layout.list_height();
        for column in Column::ALL {
            self.session
                .ports_mut()
                .get_mut(column)
                .ensure_visible(height);
        }
        draw_frame(out, &self.layout, self.session.ports())
    }

    /// Draw, read, and handle events until a quit command.
    ///
    /// # Errors
    ///
    /// Terminal I/O failures.
    pub fn run(&mut self, terminal: &TerminalSession) -> Result<(), AppError> {
        let (width, height) = terminal.size()?;
        self.resize(width, height);
        let mut stdout = io::stdout();
        loop {
            self.draw(&mut stdout)?;
            let Some(input) = map_event(terminal.read_event()?) else {
                continue;
            };
            if self.handle(input).is_quit() {
                info!("session ended");
                return Ok(());
            }
        }
    }
}
