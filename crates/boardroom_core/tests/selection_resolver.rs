use boardroom_core::{ClickSignal, NodeKind, SelectedNode, SelectionResolver};
use serde_json::json;
use uuid::Uuid;

fn row_signal(id: Uuid, timestamp: Option<f64>) -> ClickSignal {
    ClickSignal::for_node(NodeKind::Row, id, 1, timestamp)
}

#[test]
fn exact_tie_resolves_to_first_supplied_signal() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let mut resolver = SelectionResolver::new();

    let selection = resolver.resolve_click(&[
        row_signal(a, Some(5.0)),
        row_signal(b, Some(5.0)),
        row_signal(c, Some(1.0)),
    ]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, a)));
}

#[test]
fn largest_timestamp_wins_regardless_of_position() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut resolver = SelectionResolver::new();

    let selection = resolver.resolve_click(&[
        row_signal(a, Some(100.0)),
        ClickSignal::for_node(NodeKind::Column, b, 2, Some(250.0)),
    ]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Column, b)));
}

#[test]
fn second_click_on_same_node_deselects() {
    let a = Uuid::new_v4();
    let mut resolver = SelectionResolver::new();

    assert_eq!(
        resolver.resolve_click(&[row_signal(a, Some(10.0))]),
        Some(SelectedNode::new(NodeKind::Row, a))
    );
    assert_eq!(resolver.resolve_click(&[row_signal(a, Some(20.0))]), None);
    assert_eq!(
        resolver.resolve_click(&[row_signal(a, Some(30.0))]),
        Some(SelectedNode::new(NodeKind::Row, a))
    );
}

#[test]
fn clicking_another_node_moves_selection() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut resolver = SelectionResolver::new();

    resolver.resolve_click(&[row_signal(a, Some(10.0))]);
    let selection = resolver.resolve_click(&[row_signal(a, Some(10.0)), row_signal(b, Some(11.0))]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, b)));
}

#[test]
fn empty_batch_keeps_any_selection() {
    let a = Uuid::new_v4();
    let mut resolver = SelectionResolver::new();
    assert_eq!(resolver.resolve_click(&[]), None);

    resolver.resolve_click(&[row_signal(a, Some(1.0))]);
    assert_eq!(
        resolver.resolve_click(&[]),
        Some(SelectedNode::new(NodeKind::Row, a))
    );
}

#[test]
fn undecodable_signals_are_skipped_not_fatal() {
    let a = Uuid::new_v4();
    let mut resolver = SelectionResolver::new();

    let selection = resolver.resolve_click(&[
        ClickSignal::raw("not-json", Some(json!(900))),
        ClickSignal::raw(r#"{"type": "playground-row", "id": "bad"}"#, Some(json!(800))),
        row_signal(a, Some(3.0)),
    ]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, a)));
}

#[test]
fn fully_undecodable_batch_leaves_selection_unchanged() {
    let a = Uuid::new_v4();
    let mut resolver = SelectionResolver::new();
    resolver.resolve_click(&[row_signal(a, Some(1.0))]);

    let selection = resolver.resolve_click(&[
        ClickSignal::raw("{", Some(json!(5))),
        ClickSignal::raw(r#"{"type": "playground-widget", "id": "x"}"#, None),
    ]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, a)));
}

#[test]
fn missing_and_non_numeric_timestamps_order_as_zero() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let mut resolver = SelectionResolver::new();

    let raw_b = ClickSignal::for_node(NodeKind::Row, b, 1, None).identity;
    let selection = resolver.resolve_click(&[
        row_signal(a, None),
        ClickSignal::raw(raw_b, Some(json!("later"))),
        row_signal(c, Some(0.5)),
    ]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, c)));

    let mut resolver = SelectionResolver::new();
    let selection = resolver.resolve_click(&[row_signal(a, None), row_signal(b, None)]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, a)));
}

#[test]
fn numeric_string_timestamps_are_parsed() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut resolver = SelectionResolver::new();
    let raw_b = ClickSignal::for_node(NodeKind::Row, b, 1, None).identity;

    let selection = resolver.resolve_click(&[
        row_signal(a, Some(1_700_000_000_000.0)),
        ClickSignal::raw(raw_b, Some(json!("1700000000001"))),
    ]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, b)));
}

#[test]
fn clear_resets_selection() {
    let mut resolver = SelectionResolver::new();
    resolver.resolve_click(&[row_signal(Uuid::new_v4(), Some(1.0))]);
    resolver.clear();
    assert_eq!(resolver.selection(), None);
}

#[test]
fn negative_zero_timestamp_ties_with_missing_timestamp() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut resolver = SelectionResolver::new();

    let negative_zero = ClickSignal::raw(
        ClickSignal::for_node(NodeKind::Row, a, 1, None).identity,
        Some(json!("-0")),
    );
    let selection = resolver.resolve_click(&[negative_zero, row_signal(b, None)]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, a)));

    let mut resolver = SelectionResolver::new();
    let selection = resolver.resolve_click(&[row_signal(b, Some(-0.0)), row_signal(a, Some(0.0))]);
    assert_eq!(selection, Some(SelectedNode::new(NodeKind::Row, b)));
}
