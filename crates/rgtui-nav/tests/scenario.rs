//! End-to-end navigation over the talker/listener graph.
//!
//! Walks the full drill-down, pivot, and zoom-out sequence, checking mode
//! and every column after each step.

use pretty_assertions::assert_eq;
use rgtui_graph::{EntityRef, GraphBuilder, StaticGraph};
use rgtui_nav::{Cmd, Column, Mode, NavEvent, NavigationController, NavigationModel};

fn talker_listener() -> StaticGraph {
    GraphBuilder::new()
        .node("/talker")
        .node("/listener")
        .topic("/chatter", "std_msgs/String")
        .publishes("/talker", "/chatter")
        .subscribes("/listener", "/chatter")
        .build()
}

fn names(list: &[EntityRef]) -> Vec<&str> {
    list.iter().map(EntityRef::name).collect()
}

fn assert_columns(model: &NavigationModel, input: &[&str], main: &[&str], output: &[&str]) {
    assert_eq!(names(model.input_list()), input, "input column");
    assert_eq!(names(model.main_list()), main, "main column");
    assert_eq!(names(model.output_list()), output, "output column");
}

#[test]
fn drill_pivot_and_zoom_out() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut nav = NavigationController::new(talker_listener()).expect("non-empty graph");

    // 1. Full combined listing.
    assert_eq!(nav.model().mode(), Mode::Combined);
    assert_columns(nav.model(), &[], &["/listener", "/talker", "/chatter"], &[]);

    // 2. Drill into the talker.
    let cmd = nav.apply(NavEvent::select(EntityRef::node("/talker"), Column::Main));
    assert_eq!(cmd, Cmd::Focus(Column::Main));
    assert_eq!(nav.model().mode(), Mode::Nodes);
    assert_columns(nav.model(), &[], &["/talker"], &["/chatter"]);

    // 3. Pivot onto the published topic.
    let chatter = nav.model().output_list()[0].clone();
    assert_eq!(chatter.message_type(), Some("std_msgs/String"));
    nav.apply(NavEvent::select(chatter, Column::Output));
    assert_eq!(nav.model().mode(), Mode::Topics);
    assert_eq!(nav.model().filter(), "");
    assert_columns(nav.model(), &["/talker"], &["/chatter"], &["/listener"]);

    // 4. Zoom out to every topic; mode stays.
    assert_eq!(nav.apply(NavEvent::Escape), Cmd::Focus(Column::Main));
    assert_eq!(nav.model().mode(), Mode::Topics);
    assert_eq!(names(nav.model().main_list()), vec!["/chatter"]);

    // 5. Back to the combined listing with empty side columns.
    assert_eq!(nav.apply(NavEvent::Escape), Cmd::Focus(Column::Main));
    assert_eq!(nav.model().mode(), Mode::Combined);
    assert_columns(nav.model(), &[], &["/listener", "/talker", "/chatter"], &[]);

    // 6. Nothing left to zoom out of.
    assert_eq!(nav.apply(NavEvent::Escape), Cmd::Quit);
    assert_eq!(nav.model().mode(), Mode::Combined);
}

#[test]
fn filter_then_escape_clears_before_zooming() {
    let mut nav = NavigationController::new(talker_listener()).expect("non-empty graph");

    for c in "/ta".chars() {
        nav.apply(NavEvent::FilterChar(c));
    }
    assert_eq!(names(nav.model().main_list()), vec!["/talker"]);

    // Filter active in Combined: clears, no quit.
    assert_eq!(nav.apply(NavEvent::Escape), Cmd::Focus(Column::Main));
    assert_eq!(nav.model().filter(), "");
    assert_eq!(nav.model().main_list().len(), 3);
    assert_eq!(nav.apply(NavEvent::Escape), Cmd::Quit);
}

#[test]
fn pivot_back_and_forth_toggles_mode() {
    let mut nav = NavigationController::new(talker_listener()).expect("non-empty graph");
    nav.apply(NavEvent::select(EntityRef::topic("/chatter", "std_msgs/String"), Column::Main));
    assert_eq!(nav.model().mode(), Mode::Topics);

    nav.apply(NavEvent::select(EntityRef::node("/listener"), Column::Output));
    assert_eq!(nav.model().mode(), Mode::Nodes);
    assert_columns(nav.model(), &["/chatter"], &["/listener"], &[]);

    nav.apply(NavEvent::select(EntityRef::topic("/chatter", "std_msgs/String"), Column::Input));
    assert_eq!(nav.model().mode(), Mode::Topics);
    assert_columns(nav.model(), &["/talker"], &["/chatter"], &["/listener"]);
    assert_eq!(nav.model().choice().map(EntityRef::name), Some("/chatter"));
}
