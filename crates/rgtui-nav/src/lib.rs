#![forbid(unsafe_code)]

//! Navigation core for rosgraph-tui.
//!
//! This crate turns input events into a consistent view of the graph: what
//! the three columns (Input, Main, Output) show, how entries are styled, and
//! when the session should end. It performs no terminal I/O.
//!
//! # Key Components
//!
//! - [`NavigationModel`] - mode, filter, the three entity lists, and the choice
//! - [`NavigationController`] - the pivot/escape/filter state machine
//! - [`style::project`] - derives titled, styled column contents from the model
//! - [`ListPort`] - display sink for one column
//! - [`Session`] - single dispatch loop body tying the above together
//!
//! # Flow
//!
//! An event enters [`Session::dispatch`], the controller mutates the model
//! (asking the snapshot for entity sets), the session projects the model and
//! pushes the result to its three ports. One event is fully processed before
//! the next is accepted.

pub mod controller;
pub mod event;
pub mod mode;
pub mod model;
pub mod port;
pub mod session;
pub mod style;

pub use controller::NavigationController;
pub use event::{Cmd, NavEvent};
pub use mode::{Column, Direction, Mode, is_filter_char};
pub use model::NavigationModel;
pub use port::{ColumnPorts, ListPort};
pub use session::Session;
pub use style::{ColumnProjection, Projection, StyleCategory, project};
