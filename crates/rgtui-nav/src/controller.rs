#![forbid(unsafe_code)]

//! The navigation state machine.
//!
//! States are the three [`Mode`]s; the initial state is [`Mode::Combined`].
//! Session termination is not a state: escaping from the full, unfiltered
//! combined listing returns [`Cmd::Quit`] and leaves the model untouched.
//!
//! # Transitions
//!
//! | Event                        | Effect |
//! |------------------------------|--------|
//! | `Select` in Main, `Combined` | drill down on the entity, mode follows its kind |
//! | `Select` in Main, otherwise  | re-center on a same-kind entity |
//! | `Select` in Input/Output     | pivot to the neighbour, toggling `Nodes ⇄ Topics` |
//! | `FilterChar` / `Backspace`   | edit filter, re-list Main for the current mode |
//! | `Escape`                     | clear filter, then zoom out one level, then quit |
//! | `EdgeArrow`                  | `Select` the edge column's current entry |
//!
//! Every select clears the filter and focuses Main.
//!
//! # Contract violations
//!
//! A same-kind pivot while `Combined`, or a side-column select of an entity
//! whose kind does not oppose the mode, is a caller bug and panics.

use rgtui_graph::{EntityKind, EntityRef, GraphError, GraphResult, GraphSnapshot};
use tracing::{debug, debug_span, info};

use crate::event::{Cmd, NavEvent};
use crate::mode::{Column, Mode};
use crate::model::NavigationModel;

/// Drives a [`NavigationModel`] from [`NavEvent`]s against one snapshot.
#[derive(Debug)]
pub struct NavigationController<G: GraphSnapshot> {
    graph: G,
    model: NavigationModel,
}

impl<G: GraphSnapshot> NavigationController<G> {
    /// Seed a controller with the full combined listing.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptySnapshot`] when the snapshot has no nodes and no
    /// topics; a session cannot start on an empty graph.
    pub fn new(graph: G) -> GraphResult<Self> {
        if graph.is_empty() {
            return Err(GraphError::EmptySnapshot);
        }
        let model = NavigationModel::seeded(combined_listing(&graph, ""));
        info!(entries = model.main_list().len(), "navigation session seeded");
        Ok(Self { graph, model })
    }

    #[must_use]
    pub fn model(&self) -> &NavigationModel {
        &self.model
    }

    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Swap in a freshly acquired snapshot and reinitialize the model.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptySnapshot`] if the new snapshot is empty; the
    /// current snapshot and model are kept in that case.
    pub fn replace_graph(&mut self, graph: G) -> GraphResult<()> {
        if graph.is_empty() {
            return Err(GraphError::EmptySnapshot);
        }
        self.graph = graph;
        self.reset();
        Ok(())
    }

    /// Back to the freshly seeded state.
    pub fn reset(&mut self) {
        self.model = NavigationModel::seeded(combined_listing(&self.graph, ""));
    }

    /// Apply an event that does not need a column selection.
    ///
    /// `EdgeArrow` always sees an empty side column here; use
    /// [`handle`](Self::handle) when ports are available.
    pub fn apply(&mut self, event: NavEvent) -> Cmd {
        self.handle(event, |_| None)
    }

    /// Apply one event. `selection_of` reports the current entry of a column
    /// and is consulted only for `EdgeArrow`.
    pub fn handle<F>(&mut self, event: NavEvent, selection_of: F) -> Cmd
    where
        F: FnOnce(Column) -> Option<EntityRef>,
    {
        let span = debug_span!("nav_event", event = event.type_name());
        let _guard = span.enter();
        let cmd = match event {
            NavEvent::Select { entity, column } => self.select(entity, column),
            NavEvent::FilterChar(c) => {
                if !self.model.push_filter_char(c) {
                    debug!(?c, "ignored character outside filter alphabet");
                    return Cmd::None;
                }
                self.relist_main();
                Cmd::Focus(Column::Main)
            }
            NavEvent::Backspace => {
                self.model.pop_filter_char();
                self.relist_main();
                Cmd::Focus(Column::Main)
            }
            NavEvent::Escape => self.escape(),
            NavEvent::EdgeArrow(direction) => {
                let column = direction.edge_column();
                match selection_of(column) {
                    Some(entity) => self.select(entity, column),
                    None => Cmd::None,
                }
            }
        };
        debug!(
            mode = ?self.model.mode(),
            filter = self.model.filter(),
            main = self.model.main_list().len(),
            input = self.model.input_list().len(),
            output = self.model.output_list().len(),
            ?cmd,
            "transition applied"
        );
        cmd
    }

    fn select(&mut self, entity: EntityRef, column: Column) -> Cmd {
        match column {
            Column::Main if self.model.mode() == Mode::Combined => self.center_on(entity),
            Column::Main => self.pivot_same_kind(entity),
            Column::Input | Column::Output => self.pivot_to_neighbor(entity, column),
        }
        self.model.clear_filter();
        Cmd::Focus(Column::Main)
    }

    /// Re-center within the current mode on another entity of its kind.
    fn pivot_same_kind(&mut self, entity: EntityRef) {
        let mode = self.model.mode();
        assert!(
            mode != Mode::Combined,
            "same-kind pivot on {entity} invoked while in combined mode"
        );
        assert!(
            mode.main_kind() == Some(entity.kind()),
            "main-column select of {:?} {entity} while in {mode:?} mode",
            entity.kind()
        );
        self.center_on(entity);
    }

    /// Pivot onto an Input/Output neighbour, which toggles the mode.
    fn pivot_to_neighbor(&mut self, entity: EntityRef, column: Column) {
        let mode = self.model.mode();
        let expected = mode
            .main_kind()
            .map(EntityKind::opposite)
            .unwrap_or_else(|| panic!("{column:?} select of {entity} while in combined mode"));
        assert!(
            entity.kind() == expected,
            "{column:?} select of {:?} {entity} while in {mode:?} mode",
            entity.kind()
        );
        self.center_on(entity);
    }

    /// Drill down: the entity alone in Main, its neighbours in Input/Output.
    fn center_on(&mut self, entity: EntityRef) {
        let name = entity.name().to_string();
        let (inputs, outputs) = match entity.kind() {
            EntityKind::Node => (
                self.graph.topic_refs(self.graph.subscriptions_of(&name)),
                self.graph.topic_refs(self.graph.publications_of(&name)),
            ),
            EntityKind::Topic => (
                self.graph.node_refs(self.graph.publishers_of(&name)),
                self.graph.node_refs(self.graph.subscribers_of(&name)),
            ),
        };
        self.model.set_mode(Mode::for_kind(entity.kind()));
        self.model.set_input_list(inputs);
        self.model.set_output_list(outputs);
        self.model.set_main_list(vec![entity.clone()]);
        self.model.set_choice(Some(entity));
        self.model.set_drill_down(true);
        debug!(entity = %name, mode = ?self.model.mode(), "centered on entity");
    }

    /// Re-list Main for the current mode and filter. Input/Output untouched.
    fn relist_main(&mut self) {
        let listing = self.listing(self.model.filter());
        self.model.set_main_list(listing);
        self.model.set_drill_down(false);
    }

    fn listing(&self, filter: &str) -> Vec<EntityRef> {
        match self.model.mode() {
            Mode::Combined => combined_listing(&self.graph, filter),
            Mode::Nodes => self.graph.nodes(filter),
            Mode::Topics => self.graph.topics(filter),
        }
    }

    fn escape(&mut self) -> Cmd {
        let filter_was_active = !self.model.filter().is_empty();
        let drilled = self.model.is_drill_down();
        self.model.clear_filter();

        let mode = self.model.mode();
        if mode != Mode::Combined && (drilled || filter_was_active) {
            debug!(?mode, drilled, filter_was_active, "escape: full listing of current mode");
            self.relist_main();
        } else if mode != Mode::Combined || filter_was_active {
            debug!(?mode, "escape: back to combined listing");
            self.model.set_mode(Mode::Combined);
            self.relist_main();
            self.model.set_input_list(Vec::new());
            self.model.set_output_list(Vec::new());
        } else {
            info!("escape on full combined listing, ending session");
            return Cmd::Quit;
        }
        Cmd::Focus(Column::Main)
    }
}

/// All nodes followed by all topics, each group sorted.
fn combined_listing<G: GraphSnapshot>(graph: &G, filter: &str) -> Vec<EntityRef> {
    let mut listing = graph.nodes(filter);
    listing.extend(graph.topics(filter));
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rgtui_graph::{GraphBuilder, StaticGraph};

    fn graph() -> StaticGraph {
        GraphBuilder::new()
            .topic("/chatter", "std_msgs/String")
            .topic("/rosout", "rosgraph_msgs/Log")
            .publishes("/talker", "/chatter")
            .subscribes("/listener", "/chatter")
            .publishes("/talker", "/rosout")
            .subscribes("/ghost", "/phantom")
            .build()
    }

    fn names(list: &[EntityRef]) -> Vec<&str> {
        list.iter().map(EntityRef::name).collect()
    }

    fn node(name: &str) -> EntityRef {
        EntityRef::node(name)
    }

    fn topic(name: &str) -> EntityRef {
        EntityRef::topic(name, "")
    }

    #[test]
    fn new_rejects_empty_snapshot() {
        let err = NavigationController::new(StaticGraph::default()).unwrap_err();
        assert!(matches!(err, GraphError::EmptySnapshot));
    }

    #[test]
    fn seeded_with_nodes_then_topics() {
        let c = NavigationController::new(graph()).unwrap();
        assert_eq!(
            names(c.model().main_list()),
            vec!["/ghost", "/listener", "/talker", "/chatter", "/phantom", "/rosout"]
        );
        assert_eq!(c.model().mode(), Mode::Combined);
    }

    #[test]
    fn select_node_in_combined() {
        let mut c = NavigationController::new(graph()).unwrap();
        let cmd = c.apply(NavEvent::select(node("/talker"), Column::Main));
        assert_eq!(cmd, Cmd::Focus(Column::Main));
        let m = c.model();
        assert_eq!(m.mode(), Mode::Nodes);
        assert_eq!(names(m.main_list()), vec!["/talker"]);
        assert!(m.input_list().is_empty());
        assert_eq!(names(m.output_list()), vec!["/chatter", "/rosout"]);
        assert!(m.output_list().iter().all(EntityRef::is_topic));
        assert_eq!(m.output_list()[0].message_type(), Some("std_msgs/String"));
        assert_eq!(m.choice().map(EntityRef::name), Some("/talker"));
    }

    #[test]
    fn select_topic_in_combined() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(topic("/chatter"), Column::Main));
        let m = c.model();
        assert_eq!(m.mode(), Mode::Topics);
        assert_eq!(names(m.input_list()), vec!["/talker"]);
        assert_eq!(names(m.output_list()), vec!["/listener"]);
        assert!(m.input_list().iter().all(EntityRef::is_node));
    }

    #[test]
    fn same_kind_pivot_keeps_mode() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.apply(NavEvent::FilterChar('l'));
        assert_eq!(names(c.model().main_list()), vec!["/listener", "/talker"]);
        c.apply(NavEvent::select(node("/listener"), Column::Main));
        let m = c.model();
        assert_eq!(m.mode(), Mode::Nodes);
        assert_eq!(m.filter(), "");
        assert_eq!(names(m.input_list()), vec!["/chatter"]);
        assert!(m.output_list().is_empty());
    }

    #[test]
    fn neighbor_pivot_toggles_mode() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.apply(NavEvent::select(topic("/rosout"), Column::Output));
        assert_eq!(c.model().mode(), Mode::Topics);
        assert_eq!(names(c.model().input_list()), vec!["/talker"]);
        c.apply(NavEvent::select(node("/talker"), Column::Input));
        assert_eq!(c.model().mode(), Mode::Nodes);
        assert_eq!(c.model().choice().map(EntityRef::name), Some("/talker"));
    }

    #[test]
    fn filter_relists_main_only() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(topic("/chatter"), Column::Main));
        for ch in "/r".chars() {
            c.apply(NavEvent::FilterChar(ch));
        }
        let m = c.model();
        assert_eq!(m.mode(), Mode::Topics);
        assert_eq!(m.filter(), "/r");
        assert_eq!(names(m.main_list()), vec!["/rosout"]);
        assert_eq!(names(m.input_list()), vec!["/talker"]);
        assert_eq!(names(m.output_list()), vec!["/listener"]);
    }

    #[test]
    fn filter_in_combined_lists_both_kinds() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::FilterChar('t'));
        assert_eq!(
            names(c.model().main_list()),
            vec!["/ghost", "/listener", "/talker", "/chatter", "/phantom", "/rosout"]
        );
        c.apply(NavEvent::FilterChar('a'));
        assert_eq!(names(c.model().main_list()), vec!["/talker"]);
    }

    #[test]
    fn invalid_filter_char_is_ignored() {
        let mut c = NavigationController::new(graph()).unwrap();
        assert_eq!(c.apply(NavEvent::FilterChar('-')), Cmd::None);
        assert_eq!(c.model().filter(), "");
        assert_eq!(c.model().main_list().len(), 6);
    }

    #[test]
    fn backspace_on_empty_filter_relists() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.apply(NavEvent::Backspace);
        let m = c.model();
        assert_eq!(m.filter(), "");
        assert_eq!(names(m.main_list()), vec!["/ghost", "/listener", "/talker"]);
        assert!(!m.is_drill_down());
    }

    #[test]
    fn backspace_widens_filter() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::FilterChar('/'));
        c.apply(NavEvent::FilterChar('g'));
        assert_eq!(names(c.model().main_list()), vec!["/ghost"]);
        c.apply(NavEvent::Backspace);
        assert_eq!(c.model().filter(), "/");
        assert_eq!(c.model().main_list().len(), 6);
    }

    #[test]
    fn escape_clears_filter_then_zooms_out() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.apply(NavEvent::FilterChar('x'));
        assert!(c.model().main_list().is_empty());

        assert_eq!(c.apply(NavEvent::Escape), Cmd::Focus(Column::Main));
        assert_eq!(c.model().filter(), "");
        assert_eq!(c.model().mode(), Mode::Nodes);
        assert_eq!(c.model().main_list().len(), 3);
        // Side columns survive the filter reset.
        assert_eq!(names(c.model().output_list()), vec!["/chatter", "/rosout"]);

        c.apply(NavEvent::Escape);
        assert_eq!(c.model().mode(), Mode::Combined);
        assert!(c.model().input_list().is_empty());
        assert!(c.model().output_list().is_empty());

        assert_eq!(c.apply(NavEvent::Escape), Cmd::Quit);
    }

    #[test]
    fn escape_with_filter_in_combined_restores_full_listing() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::FilterChar('z'));
        assert!(c.model().main_list().is_empty());
        assert_eq!(c.apply(NavEvent::Escape), Cmd::Focus(Column::Main));
        assert_eq!(c.model().main_list().len(), 6);
        assert_eq!(c.apply(NavEvent::Escape), Cmd::Quit);
    }

    #[test]
    fn quit_leaves_model_untouched() {
        let mut c = NavigationController::new(graph()).unwrap();
        let before = c.model().clone();
        assert_eq!(c.apply(NavEvent::Escape), Cmd::Quit);
        assert_eq!(c.model(), &before);
    }

    #[test]
    fn edge_arrow_selects_side_entry() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(topic("/chatter"), Column::Main));
        let cmd = c.handle(NavEvent::EdgeArrow(crate::mode::Direction::Left), |column| {
            assert_eq!(column, Column::Input);
            Some(node("/talker"))
        });
        assert_eq!(cmd, Cmd::Focus(Column::Main));
        assert_eq!(c.model().mode(), Mode::Nodes);
        assert_eq!(names(c.model().main_list()), vec!["/talker"]);
    }

    #[test]
    fn edge_arrow_without_selection_is_noop() {
        let mut c = NavigationController::new(graph()).unwrap();
        let before = c.model().clone();
        let cmd = c.apply(NavEvent::EdgeArrow(crate::mode::Direction::Right));
        assert_eq!(cmd, Cmd::None);
        assert_eq!(c.model(), &before);
    }

    #[test]
    fn replace_graph_reseeds() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.replace_graph(GraphBuilder::new().node("/solo").build()).unwrap();
        assert_eq!(c.model().mode(), Mode::Combined);
        assert_eq!(names(c.model().main_list()), vec!["/solo"]);
        assert!(c.replace_graph(StaticGraph::default()).is_err());
        assert_eq!(names(c.model().main_list()), vec!["/solo"]);
    }

    #[test]
    #[should_panic(expected = "combined mode")]
    fn side_select_in_combined_panics() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Input));
    }

    #[test]
    #[should_panic(expected = "Output select")]
    fn side_select_of_same_kind_panics() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.apply(NavEvent::select(node("/listener"), Column::Output));
    }

    #[test]
    #[should_panic(expected = "main-column select")]
    fn main_select_of_wrong_kind_panics() {
        let mut c = NavigationController::new(graph()).unwrap();
        c.apply(NavEvent::select(node("/talker"), Column::Main));
        c.apply(NavEvent::select(topic("/chatter"), Column::Main));
    }
}
