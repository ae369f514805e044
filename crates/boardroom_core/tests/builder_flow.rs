use boardroom_core::{
    BoardroomConfig, BoardroomContext, BoardroomEvent, ClickSignal, ColumnInsertOutcome,
    DispatchOutcome, EventDispatcher, LayoutNode, LayoutTree, NodeKind, ReportItem, ReportWidget,
    SelectedNode, ViewMode, WidgetKind,
};

fn row_click(id: uuid::Uuid, timestamp: f64) -> BoardroomEvent {
    BoardroomEvent::ClickBatch(vec![ClickSignal::for_node(
        NodeKind::Row,
        id,
        1,
        Some(timestamp),
    )])
}

#[test]
fn select_insert_deselect_scenario() {
    let dispatcher = EventDispatcher::with_default_handlers();
    let mut context = BoardroomContext::default();
    assert!(context.root_nodes().is_empty());
    assert_eq!(context.selection(), None);

    let DispatchOutcome::RowInserted { row_id: r1 } = dispatcher
        .dispatch(&mut context, &BoardroomEvent::AddRow)
        .unwrap()
    else {
        panic!("add row should insert a row");
    };
    assert_eq!(context.root_nodes().len(), 1);
    assert_eq!(context.root_nodes()[0].depth, 1);

    let outcome = dispatcher.dispatch(&mut context, &row_click(r1, 10.0)).unwrap();
    let selected = Some(SelectedNode::new(NodeKind::Row, r1));
    assert_eq!(outcome, DispatchOutcome::SelectionResolved(selected));

    let outcome = dispatcher
        .dispatch(&mut context, &BoardroomEvent::AddColumn)
        .unwrap();
    let DispatchOutcome::Column(ColumnInsertOutcome::Inserted { row_id, column_id: c1 }) = outcome
    else {
        panic!("expected column insertion, got {outcome:?}");
    };
    assert_eq!(row_id, r1);
    let row = &context.root_nodes()[0];
    assert_eq!(row.children.len(), 1);
    assert_eq!(row.children[0].id, c1);
    assert_eq!(row.children[0].depth, 2);

    let outcome = dispatcher.dispatch(&mut context, &row_click(r1, 20.0)).unwrap();
    assert_eq!(outcome, DispatchOutcome::SelectionResolved(None));

    let before = context.layout().clone();
    let outcome = dispatcher
        .dispatch(&mut context, &BoardroomEvent::AddColumn)
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Column(ColumnInsertOutcome::NoSelection));
    assert_eq!(context.layout(), &before);
    assert_eq!(context.root_nodes().len(), 1);
    assert_eq!(context.root_nodes()[0].children[0].id, c1);
}

#[test]
fn add_row_ignores_selection() {
    let dispatcher = EventDispatcher::with_default_handlers();
    let mut context = BoardroomContext::default();
    let r1 = context.append_row();
    dispatcher.dispatch(&mut context, &row_click(r1, 5.0)).unwrap();

    dispatcher
        .dispatch(&mut context, &BoardroomEvent::AddRow)
        .unwrap();
    assert_eq!(context.root_nodes().len(), 2);
    assert!(context.root_nodes()[0].children.is_empty());
    assert_eq!(context.root_nodes()[1].depth, 1);
}

#[test]
fn replacing_layout_keeps_selection_only_while_its_node_exists() {
    let kept_row = LayoutNode::row();
    let kept_id = kept_row.id;
    let mut context = BoardroomContext::default()
        .with_layout(LayoutTree::from_nodes(vec![kept_row.clone()]).unwrap());
    context.resolve_click(&[ClickSignal::for_node(NodeKind::Row, kept_id, 1, Some(1.0))]);

    let context = context
        .with_layout(LayoutTree::from_nodes(vec![LayoutNode::row(), kept_row]).unwrap());
    assert_eq!(
        context.selection(),
        Some(SelectedNode::new(NodeKind::Row, kept_id))
    );
    assert_eq!(context.layout().node_count(), 2);

    let context = context.with_layout(LayoutTree::from_nodes(vec![LayoutNode::row()]).unwrap());
    assert_eq!(context.selection(), None);
    assert!(context.render_description()[0]
        .computed_style
        .get("backgroundColor")
        .is_none());
}

#[test]
fn render_description_highlights_current_selection() {
    let mut context = BoardroomContext::default();
    let r1 = context.append_row();
    context.resolve_click(&[ClickSignal::for_node(NodeKind::Row, r1, 1, Some(1.0))]);

    let descriptors = context.render_description();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].computed_style["backgroundColor"], "#e0f7fa");
}

#[test]
fn mode_switches_start_from_config() {
    let dispatcher = EventDispatcher::with_default_handlers();
    let config = BoardroomConfig::from_json_str(r#"{"initial_mode": "present"}"#).unwrap();
    let mut context = BoardroomContext::new(&config);
    assert_eq!(context.mode(), ViewMode::Present);

    let outcome = dispatcher
        .dispatch(&mut context, &BoardroomEvent::SwitchMode)
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::ModeSwitched(ViewMode::Edit));
    assert_eq!(context.mode().builder_button_label(), "Switch Mode: edit");
}

#[test]
fn report_view_follows_its_own_mode() {
    let dispatcher = EventDispatcher::with_default_handlers();
    let mut config = BoardroomConfig::default();
    config.report = vec![
        ReportWidget::new(WidgetKind::Heading, "My Report"),
        ReportWidget::new(WidgetKind::Graph, "tips-bar"),
    ];
    let mut context = BoardroomContext::new(&config);

    let view = context.render_report();
    assert_eq!(view.mode, ViewMode::Present);
    assert!(matches!(view.items[1], ReportItem::Widget { .. }));

    let outcome = dispatcher
        .dispatch(&mut context, &BoardroomEvent::SwitchReportMode)
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::ReportModeSwitched(ViewMode::Edit));
    assert_eq!(context.mode(), ViewMode::Edit);

    let view = context.render_report();
    assert_eq!(
        view.items[0],
        ReportItem::Heading {
            text: "Edit Mode".to_string()
        }
    );
    assert!(view.items[1..]
        .iter()
        .all(|item| matches!(item, ReportItem::EditFrame { draggable: true, .. })));
}
