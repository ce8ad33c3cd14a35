#![forbid(unsafe_code)]

//! The central dispatch loop body.
//!
//! A [`Session`] owns the controller, the three column ports, and which
//! column has view focus. Each call processes one event completely: FSM
//! transition, list recomputation, projection, and pushing the result to the
//! ports. Nothing is queued; callers feed events one at a time.
//!
//! # Example
//!
//! ```ignore
//! let mut session = Session::new(controller, ports);
//! loop {
//!     let cmd = match next_input() {
//!         Input::Nav(event) => session.dispatch(event),
//!         Input::Activate => session.activate(),
//!         Input::Arrow(direction) => session.arrow(direction),
//!     };
//!     if cmd.is_quit() {
//!         break;
//!     }
//! }
//! ```

use rgtui_graph::{GraphResult, GraphSnapshot};
use tracing::{debug, info};

use crate::controller::NavigationController;
use crate::event::{Cmd, NavEvent};
use crate::mode::{Column, Direction};
use crate::model::NavigationModel;
use crate::port::{ColumnPorts, ListPort};
use crate::style::{Projection, project};

/// Controller plus ports plus focus.
#[derive(Debug)]
pub struct Session<G: GraphSnapshot, P: ListPort> {
    controller: NavigationController<G>,
    ports: ColumnPorts<P>,
    focus: Column,
}

impl<G: GraphSnapshot, P: ListPort> Session<G, P> {
    /// Start a session: render the seeded model and focus Main.
    pub fn new(controller: NavigationController<G>, ports: ColumnPorts<P>) -> Self {
        let mut session = Self {
            controller,
            ports,
            focus: Column::Main,
        };
        session.render();
        session.focus_column(Column::Main);
        session
    }

    #[must_use]
    pub fn model(&self) -> &NavigationModel {
        self.controller.model()
    }

    #[must_use]
    pub fn controller(&self) -> &NavigationController<G> {
        &self.controller
    }

    #[must_use]
    pub fn focus(&self) -> Column {
        self.focus
    }

    #[must_use]
    pub fn ports(&self) -> &ColumnPorts<P> {
        &self.ports
    }

    /// Mutable port access for cursor movement. Call
    /// [`refresh_footers`](Self::refresh_footers) afterwards.
    pub fn ports_mut(&mut self) -> &mut ColumnPorts<P> {
        &mut self.ports
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        project(self.controller.model(), self.controller.graph())
    }

    /// Process one navigation event.
    pub fn dispatch(&mut self, event: NavEvent) -> Cmd {
        let ports = &self.ports;
        let cmd = self
            .controller
            .handle(event, |column| ports.selection(column));
        match cmd {
            Cmd::Quit => return Cmd::Quit,
            Cmd::Focus(column) => {
                self.render();
                self.focus_column(column);
            }
            Cmd::None => self.render(),
        }
        Cmd::None
    }

    /// Select the focused column's highlighted entry (enter / click).
    pub fn activate(&mut self) -> Cmd {
        match self.ports.selection(self.focus) {
            Some(entity) => self.dispatch(NavEvent::select(entity, self.focus)),
            None => Cmd::None,
        }
    }

    /// Horizontal arrow: move focus, or fire an edge arrow from the
    /// outermost column in that direction.
    pub fn arrow(&mut self, direction: Direction) -> Cmd {
        match self.focus.neighbor(direction) {
            Some(column) => {
                self.focus_column(column);
                Cmd::None
            }
            None => self.dispatch(NavEvent::EdgeArrow(direction)),
        }
    }

    /// Focus `column` directly (mouse click).
    pub fn focus_column(&mut self, column: Column) {
        if self.focus != column {
            self.ports.get_mut(self.focus).clear_focus();
            debug!(from = ?self.focus, to = ?column, "focus moved");
        }
        self.focus = column;
        self.ports.get_mut(column).set_focus();
        self.refresh_footers();
    }

    /// Reinitialize from a freshly acquired snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`rgtui_graph::GraphError::EmptySnapshot`]; the session
    /// keeps its current snapshot in that case.
    pub fn refresh(&mut self, graph: G) -> GraphResult<()> {
        self.controller.replace_graph(graph)?;
        info!("session reinitialized from refreshed snapshot");
        self.render();
        self.focus_column(Column::Main);
        Ok(())
    }

    /// Push the current projection to all ports.
    pub fn render(&mut self) {
        let projection = self.projection();
        for column in Column::ALL {
            let view = projection.column(column);
            let port = self.ports.get_mut(column);
            port.set_title(view.title);
            port.reset_list(view.entries.clone());
        }
        self.refresh_footers();
    }

    /// Main footer shows the filter; a focused side column shows the info
    /// string of its highlighted entry.
    pub fn refresh_footers(&mut self) {
        let filter = self.controller.model().filter().to_string();
        self.ports.main.set_footer(&filter);
        for column in [Column::Input, Column::Output] {
            let footer = if self.focus == column {
                self.ports
                    .selection(column)
                    .map(|entity| entity.info())
                    .unwrap_or_default()
            } else {
                String::new()
            };
            self.ports.get_mut(column).set_footer(&footer);
        }
    }
}
