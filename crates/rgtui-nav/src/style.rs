#![forbid(unsafe_code)]

//! Styling projection.
//!
//! Derives what each column shows from the model: a title, and every entity
//! paired with a [`StyleCategory`]. The category is the only styling
//! information rendering receives; paint attributes are the renderer's
//! business.
//!
//! Category precedence per entry:
//! 1. `Chosen*` when the name equals the model's choice,
//! 2. `Unconnected` for a topic in Input with no publishers or in Output
//!    with no subscribers,
//! 3. otherwise `Node` / `Topic` by kind.

use rgtui_graph::{EntityKind, EntityRef, GraphSnapshot};

use crate::mode::Column;
use crate::model::NavigationModel;

/// Display category of one list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Node,
    Topic,
    /// The node the model's choice names.
    ChosenNode,
    /// The topic the model's choice names.
    ChosenTopic,
    /// A dangling topic: nothing feeds it (Input) or drains it (Output).
    Unconnected,
}

impl StyleCategory {
    #[must_use]
    pub const fn is_chosen(self) -> bool {
        matches!(self, Self::ChosenNode | Self::ChosenTopic)
    }
}

/// Category for `entity` placed in `column`.
pub fn categorize<G: GraphSnapshot + ?Sized>(
    entity: &EntityRef,
    column: Column,
    choice: Option<&EntityRef>,
    graph: &G,
) -> StyleCategory {
    if choice.is_some_and(|c| c.name() == entity.name()) {
        return match entity.kind() {
            EntityKind::Node => StyleCategory::ChosenNode,
            EntityKind::Topic => StyleCategory::ChosenTopic,
        };
    }
    match entity.kind() {
        EntityKind::Node => StyleCategory::Node,
        EntityKind::Topic => {
            let dangling = match column {
                Column::Input => graph.publishers_of(entity.name()).is_empty(),
                Column::Output => graph.subscribers_of(entity.name()).is_empty(),
                Column::Main => false,
            };
            if dangling {
                StyleCategory::Unconnected
            } else {
                StyleCategory::Topic
            }
        }
    }
}

/// Title and styled entries of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection {
    pub title: &'static str,
    pub entries: Vec<(StyleCategory, EntityRef)>,
}

impl ColumnProjection {
    /// Entity names in display order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, e)| e.name()).collect()
    }
}

/// Everything the three columns show for one model state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub input: ColumnProjection,
    pub main: ColumnProjection,
    pub output: ColumnProjection,
    /// Main column footer: the active filter.
    pub filter: String,
}

impl Projection {
    #[must_use]
    pub fn column(&self, column: Column) -> &ColumnProjection {
        match column {
            Column::Input => &self.input,
            Column::Main => &self.main,
            Column::Output => &self.output,
        }
    }
}

/// Project the model into titled, styled columns.
pub fn project<G: GraphSnapshot + ?Sized>(model: &NavigationModel, graph: &G) -> Projection {
    let mode = model.mode();
    let column = |column: Column, list: &[EntityRef]| ColumnProjection {
        title: mode.title(column),
        entries: list
            .iter()
            .map(|entity| {
                (
                    categorize(entity, column, model.choice(), graph),
                    entity.clone(),
                )
            })
            .collect(),
    };
    Projection {
        input: column(Column::Input, model.input_list()),
        main: column(Column::Main, model.main_list()),
        output: column(Column::Output, model.output_list()),
        filter: model.filter().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::NavigationController;
    use crate::event::NavEvent;
    use rgtui_graph::{GraphBuilder, StaticGraph};

    fn graph() -> StaticGraph {
        GraphBuilder::new()
            .topic("/chatter", "std_msgs/String")
            .publishes("/talker", "/chatter")
            .subscribes("/listener", "/chatter")
            .publishes("/talker", "/sink_only")
            .subscribes("/talker", "/no_source")
            .build()
    }

    #[test]
    fn chosen_wins_over_kind() {
        let g = graph();
        let choice = EntityRef::node("/talker");
        let cat = categorize(&EntityRef::node("/talker"), Column::Main, Some(&choice), &g);
        assert_eq!(cat, StyleCategory::ChosenNode);
        assert!(cat.is_chosen());
        let cat = categorize(&EntityRef::node("/listener"), Column::Main, Some(&choice), &g);
        assert_eq!(cat, StyleCategory::Node);
    }

    #[test]
    fn dangling_topics_are_unconnected() {
        let g = graph();
        let no_source = EntityRef::topic("/no_source", "");
        let sink_only = EntityRef::topic("/sink_only", "");
        assert_eq!(
            categorize(&no_source, Column::Input, None, &g),
            StyleCategory::Unconnected
        );
        assert_eq!(
            categorize(&sink_only, Column::Output, None, &g),
            StyleCategory::Unconnected
        );
        // Connected on the side that matters.
        let chatter = EntityRef::topic("/chatter", "");
        assert_eq!(categorize(&chatter, Column::Input, None, &g), StyleCategory::Topic);
        assert_eq!(categorize(&chatter, Column::Output, None, &g), StyleCategory::Topic);
        assert_eq!(categorize(&no_source, Column::Main, None, &g), StyleCategory::Topic);
    }

    #[test]
    fn chosen_topic_is_never_unconnected() {
        let g = graph();
        let t = EntityRef::topic("/no_source", "");
        assert_eq!(
            categorize(&t, Column::Input, Some(&t), &g),
            StyleCategory::ChosenTopic
        );
    }

    #[test]
    fn projection_of_drill_down() {
        let g = graph();
        let mut c = NavigationController::new(&g).unwrap();
        c.apply(NavEvent::select(EntityRef::node("/talker"), Column::Main));
        let p = project(c.model(), c.graph());
        assert_eq!(p.input.title, "Subscriptions:");
        assert_eq!(p.main.title, "Nodes:");
        assert_eq!(p.output.title, "Publications:");
        assert_eq!(p.main.entries, vec![(StyleCategory::ChosenNode, EntityRef::node("/talker"))]);
        assert_eq!(p.input.names(), vec!["/no_source"]);
        assert_eq!(p.input.entries[0].0, StyleCategory::Unconnected);
        assert_eq!(p.output.names(), vec!["/chatter", "/sink_only"]);
        assert_eq!(p.output.entries[0].0, StyleCategory::Topic);
        assert_eq!(p.output.entries[1].0, StyleCategory::Unconnected);
        assert_eq!(p.column(Column::Main).title, "Nodes:");
        assert_eq!(p.filter, "");
    }
}
