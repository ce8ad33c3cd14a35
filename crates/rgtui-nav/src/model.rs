#![forbid(unsafe_code)]

//! What is currently shown.
//!
//! [`NavigationModel`] is plain data. It performs no I/O; the controller
//! fetches every entity list from the snapshot and hands it over through the
//! setters.

use rgtui_graph::EntityRef;

use crate::mode::{Mode, is_filter_char};

/// Navigation state: mode, filter, the three column lists, and the choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationModel {
    mode: Mode,
    filter: String,
    main_list: Vec<EntityRef>,
    input_list: Vec<EntityRef>,
    output_list: Vec<EntityRef>,
    /// Highlight only; never consulted for selection logic.
    choice: Option<EntityRef>,
    /// Main list holds a single entity centered by a selection.
    drill_down: bool,
}

impl NavigationModel {
    /// A `Combined` model showing `listing` in the Main column.
    #[must_use]
    pub fn seeded(listing: Vec<EntityRef>) -> Self {
        Self {
            main_list: listing,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn main_list(&self) -> &[EntityRef] {
        &self.main_list
    }

    #[must_use]
    pub fn input_list(&self) -> &[EntityRef] {
        &self.input_list
    }

    #[must_use]
    pub fn output_list(&self) -> &[EntityRef] {
        &self.output_list
    }

    #[must_use]
    pub fn choice(&self) -> Option<&EntityRef> {
        self.choice.as_ref()
    }

    /// True while the Main column shows exactly the entity last selected.
    #[must_use]
    pub const fn is_drill_down(&self) -> bool {
        self.drill_down
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_main_list(&mut self, entities: Vec<EntityRef>) {
        self.main_list = entities;
    }

    pub fn set_input_list(&mut self, entities: Vec<EntityRef>) {
        self.input_list = entities;
    }

    pub fn set_output_list(&mut self, entities: Vec<EntityRef>) {
        self.output_list = entities;
    }

    /// Replace the filter, dropping characters outside `[A-Za-z0-9_/]`.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.chars().filter(|&c| is_filter_char(c)).collect();
    }

    /// Append one character. Returns `false` (and changes nothing) for
    /// characters outside the filter alphabet.
    pub fn push_filter_char(&mut self, c: char) -> bool {
        if is_filter_char(c) {
            self.filter.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last filter character, if any.
    pub fn pop_filter_char(&mut self) -> Option<char> {
        self.filter.pop()
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    pub fn set_choice(&mut self, choice: Option<EntityRef>) {
        self.choice = choice;
    }

    pub fn set_drill_down(&mut self, drill_down: bool) {
        self.drill_down = drill_down;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_model_is_combined_and_unfiltered() {
        let model = NavigationModel::seeded(vec![EntityRef::node("/a")]);
        assert_eq!(model.mode(), Mode::Combined);
        assert_eq!(model.filter(), "");
        assert_eq!(model.main_list().len(), 1);
        assert!(model.input_list().is_empty());
        assert!(model.output_list().is_empty());
        assert!(model.choice().is_none());
        assert!(!model.is_drill_down());
    }

    #[test]
    fn set_filter_sanitizes() {
        let mut model = NavigationModel::default();
        model.set_filter("/ros out-1_x");
        assert_eq!(model.filter(), "/rosout1_x");
    }

    #[test]
    fn push_and_pop_filter() {
        let mut model = NavigationModel::default();
        assert!(model.push_filter_char('/'));
        assert!(model.push_filter_char('t'));
        assert!(!model.push_filter_char('.'));
        assert_eq!(model.filter(), "/t");
        assert_eq!(model.pop_filter_char(), Some('t'));
        assert_eq!(model.pop_filter_char(), Some('/'));
        assert_eq!(model.pop_filter_char(), None);
    }

    #[test]
    fn setters_replace_lists() {
        let mut model = NavigationModel::default();
        model.set_main_list(vec![EntityRef::topic("/t", "x")]);
        model.set_input_list(vec![EntityRef::node("/p")]);
        model.set_output_list(vec![EntityRef::node("/s")]);
        model.set_choice(Some(EntityRef::topic("/t", "x")));
        model.set_mode(Mode::Topics);
        assert_eq!(model.main_list()[0].name(), "/t");
        assert_eq!(model.input_list()[0].name(), "/p");
        assert_eq!(model.output_list()[0].name(), "/s");
        assert_eq!(model.choice().map(EntityRef::name), Some("/t"));
        assert_eq!(model.mode(), Mode::Topics);
    }
}
