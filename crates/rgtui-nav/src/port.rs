#![forbid(unsafe_code)]

//! Display sinks for the three columns.

use rgtui_graph::EntityRef;

use crate::mode::Column;
use crate::style::StyleCategory;

/// Abstract display sink for one column.
///
/// The dispatch loop pushes projected lists into ports and reads back the
/// entry the user currently has highlighted. Ports own cursor movement
/// within their list; they never mutate navigation state.
pub trait ListPort {
    fn set_title(&mut self, title: &str);

    fn set_footer(&mut self, footer: &str);

    /// Replace the list contents.
    fn reset_list(&mut self, entries: Vec<(StyleCategory, EntityRef)>);

    /// Currently highlighted entry, if the list is non-empty.
    fn selection(&self) -> Option<EntityRef>;

    /// This column gains view focus.
    fn set_focus(&mut self);

    /// This column loses view focus.
    fn clear_focus(&mut self) {}
}

/// The Input, Main, and Output ports, in that order.
#[derive(Debug, Clone, Default)]
pub struct ColumnPorts<P> {
    pub input: P,
    pub main: P,
    pub output: P,
}

impl<P> ColumnPorts<P> {
    pub fn new(input: P, main: P, output: P) -> Self {
        Self {
            input,
            main,
            output,
        }
    }

    pub fn get(&self, column: Column) -> &P {
        match column {
            Column::Input => &self.input,
            Column::Main => &self.main,
            Column::Output => &self.output,
        }
    }

    pub fn get_mut(&mut self, column: Column) -> &mut P {
        match column {
            Column::Input => &mut self.input,
            Column::Main => &mut self.main,
            Column::Output => &mut self.output,
        }
    }
}

impl<P: ListPort> ColumnPorts<P> {
    /// Selection of the port for `column`.
    pub fn selection(&self, column: Column) -> Option<EntityRef> {
        self.get(column).selection()
    }
}
