#![forbid(unsafe_code)]

//! Navigation events and the commands they produce.
//!
//! Input handlers return a [`NavEvent`] value instead of invoking callbacks;
//! the dispatch loop feeds it to the controller and acts on the returned
//! [`Cmd`].

use rgtui_graph::EntityRef;

use crate::mode::{Column, Direction};

/// An input event understood by the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// An entry was activated (click/enter) in a column.
    Select {
        /// The activated entity.
        entity: EntityRef,
        /// Column the entity was activated in.
        column: Column,
    },
    /// A filter character was typed.
    FilterChar(char),
    /// Drop the last filter character.
    Backspace,
    /// Context-sensitive zoom-out.
    Escape,
    /// Arrow pressed while the matching edge column is focused.
    EdgeArrow(Direction),
}

impl NavEvent {
    /// Shorthand for [`NavEvent::Select`].
    #[must_use]
    pub fn select(entity: EntityRef, column: Column) -> Self {
        Self::Select { entity, column }
    }

    /// Stable name for tracing.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Select { .. } => "Select",
            Self::FilterChar(_) => "FilterChar",
            Self::Backspace => "Backspace",
            Self::Escape => "Escape",
            Self::EdgeArrow(_) => "EdgeArrow",
        }
    }
}

/// What the dispatch loop must do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// Nothing beyond re-rendering.
    #[default]
    None,
    /// Move view focus to a column.
    Focus(Column),
    /// End the session.
    Quit,
}

impl Cmd {
    #[must_use]
    pub const fn is_quit(self) -> bool {
        matches!(self, Self::Quit)
    }
}
