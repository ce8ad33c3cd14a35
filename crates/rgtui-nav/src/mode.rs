#![forbid(unsafe_code)]

//! Modes, columns, and directions.
//!
//! All three are plain immutable enumerations. Column titles are a pure
//! function of the mode.

use rgtui_graph::EntityKind;

/// Which entity kind(s) the Main column enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Nodes and topics together; Input and Output stay empty.
    #[default]
    Combined,
    /// Nodes only; Input shows subscriptions, Output publications.
    Nodes,
    /// Topics only; Input shows publishers, Output subscribers.
    Topics,
}

impl Mode {
    /// The mode a drill-down on an entity of `kind` lands in.
    #[must_use]
    pub const fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Node => Self::Nodes,
            EntityKind::Topic => Self::Topics,
        }
    }

    /// Kind listed in the Main column, `None` for [`Mode::Combined`].
    #[must_use]
    pub const fn main_kind(self) -> Option<EntityKind> {
        match self {
            Self::Combined => None,
            Self::Nodes => Some(EntityKind::Node),
            Self::Topics => Some(EntityKind::Topic),
        }
    }

    /// Column header text for this mode.
    #[must_use]
    pub const fn title(self, column: Column) -> &'static str {
        match (self, column) {
            (Self::Combined, Column::Input) => "Input:",
            (Self::Combined, Column::Main) => "Nodes and Topics:",
            (Self::Combined, Column::Output) => "Output:",
            (Self::Nodes, Column::Input) => "Subscriptions:",
            (Self::Nodes, Column::Main) => "Nodes:",
            (Self::Nodes, Column::Output) => "Publications:",
            (Self::Topics, Column::Input) => "Publishers:",
            (Self::Topics, Column::Main) => "Topics:",
            (Self::Topics, Column::Output) => "Subscribers:",
        }
    }
}

/// One of the three visible columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Input,
    Main,
    Output,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Input, Self::Main, Self::Output];

    /// Position from the left, starting at 0.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Input => 0,
            Self::Main => 1,
            Self::Output => 2,
        }
    }

    /// Neighbouring column in `direction`, `None` at the edge.
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Option<Self> {
        match (self, direction) {
            (Self::Input, Direction::Left) | (Self::Output, Direction::Right) => None,
            (Self::Main, Direction::Left) => Some(Self::Input),
            (Self::Main, Direction::Right) => Some(Self::Output),
            (Self::Input, Direction::Right) | (Self::Output, Direction::Left) => Some(Self::Main),
        }
    }
}

/// Horizontal arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The side column an edge arrow in this direction reads from.
    #[must_use]
    pub const fn edge_column(self) -> Column {
        match self {
            Self::Left => Column::Input,
            Self::Right => Column::Output,
        }
    }
}

/// True for characters allowed in the filter string: `[A-Za-z0-9_/]`.
#[must_use]
pub const fn is_filter_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '/'
}
