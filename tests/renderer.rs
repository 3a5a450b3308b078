//! Tests for rendering whole workflows and wiring edges to connection points.
mod common;
use common::*;
use flowsight::prelude::*;

#[test]
fn test_renders_every_node_in_order() {
    let rendered = WorkflowRenderer::new(create_branching_workflow())
        .render()
        .expect("Failed to render");

    let ids: Vec<_> = rendered.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["start", "analyze", "gate", "fix", "fan", "notify", "done"]
    );

    let gate = rendered.node("gate").unwrap();
    assert_eq!(gate.spec.shape_variant, ShapeVariant::Decision);
    assert_eq!(gate.spec.colors, colors_for_status(&NodeStatus::Failed));
    assert_eq!(gate.spec.kind_icon, IconId::Branch);
}

#[test]
fn test_edges_resolve_to_handles() {
    let rendered = WorkflowRenderer::builder(create_branching_workflow())
        .strict_edges(true)
        .build()
        .render()
        .expect("Failed to render");

    assert_eq!(rendered.dropped_edges, 0);
    assert_eq!(rendered.edges.len(), 6);

    // Default handles pick the first matching point.
    assert_eq!(
        rendered.edges[0],
        ResolvedEdge {
            source: "start".to_string(),
            source_handle: "bottom",
            target: "analyze".to_string(),
            target_handle: "top",
        }
    );
    assert_eq!(rendered.edges[2].source_handle, "left");
    assert_eq!(rendered.edges[4].source_handle, "main");
    assert_eq!(rendered.edges[5].source_handle, "branch2");
}

#[test]
fn test_edge_into_start_node_is_rejected_in_strict_mode() {
    let mut workflow = create_branching_workflow();
    workflow.edges.push(WorkflowEdge::new("analyze", "start"));

    let result = WorkflowRenderer::builder(workflow)
        .strict_edges(true)
        .build()
        .render();

    match result {
        Err(RenderError::NoConnectionPoint { node_id, flow }) => {
            assert_eq!(node_id, "start");
            assert_eq!(flow, Flow::Inbound);
        }
        other => panic!("Expected NoConnectionPoint error, got {:?}", other),
    }
}

#[test]
fn test_edge_out_of_end_node_is_rejected() {
    let mut workflow = create_branching_workflow();
    workflow.edges.push(WorkflowEdge::new("done", "notify"));

    let err = WorkflowRenderer::builder(workflow)
        .strict_edges(true)
        .build()
        .render()
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::NoConnectionPoint {
            node_id: "done".to_string(),
            flow: Flow::Outbound,
        }
    );
}

#[test]
fn test_unknown_handle_is_reported() {
    let mut workflow = create_branching_workflow();
    workflow
        .edges
        .push(WorkflowEdge::new("fan", "notify").with_source_handle("branch3"));

    let err = WorkflowRenderer::builder(workflow)
        .strict_edges(true)
        .build()
        .render()
        .unwrap_err();
    assert!(err.to_string().contains("branch3"));
    assert!(err.to_string().contains("fan"));
}

#[test]
fn test_inbound_handle_cannot_be_used_as_source() {
    let mut workflow = create_branching_workflow();
    workflow
        .edges
        .push(WorkflowEdge::new("analyze", "fix").with_source_handle("top"));

    let err = WorkflowRenderer::builder(workflow)
        .strict_edges(true)
        .build()
        .render()
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::UnknownHandle { ref handle, flow: Flow::Outbound, .. } if handle == "top"
    ));
}

#[test]
fn test_lenient_mode_drops_bad_edges() {
    let mut workflow = create_branching_workflow();
    workflow.edges.push(WorkflowEdge::new("analyze", "ghost"));
    workflow.edges.push(WorkflowEdge::new("done", "notify"));

    let rendered = WorkflowRenderer::new(workflow)
        .render()
        .expect("Lenient render should not fail on bad edges");
    assert_eq!(rendered.edges.len(), 6);
    assert_eq!(rendered.dropped_edges, 2);
}

#[test]
fn test_missing_node_fails_in_strict_mode() {
    let mut workflow = create_branching_workflow();
    workflow.edges.push(WorkflowEdge::new("analyze", "ghost"));

    let err = WorkflowRenderer::builder(workflow)
        .strict_edges(true)
        .build()
        .render()
        .unwrap_err();
    match err {
        RenderError::NodeNotFound {
            missing_node_id,
            source_node_id,
            ..
        } => {
            assert_eq!(missing_node_id, "ghost");
            assert_eq!(source_node_id, "analyze");
        }
        other => panic!("Expected NodeNotFound error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_node_ids_always_fail() {
    let mut workflow = create_branching_workflow();
    workflow.nodes.push(node("gate", "action", "pending"));

    let err = WorkflowRenderer::new(workflow).render().unwrap_err();
    assert_eq!(err, RenderError::DuplicateNode("gate".to_string()));
}

#[test]
fn test_kind_alias_changes_shape_and_handles() {
    let workflow = WorkflowDefinition {
        nodes: vec![node("t", "trigger", "completed"), node("a", "task", "running")],
        edges: vec![WorkflowEdge::new("t", "a")],
    };

    let rendered = WorkflowRenderer::builder(workflow)
        .with_kind_alias("trigger", "start")
        .strict_edges(true)
        .build()
        .render()
        .expect("Failed to render");

    let trigger = rendered.node("t").unwrap();
    assert_eq!(trigger.kind, NodeKind::Start);
    assert_eq!(trigger.spec.shape_variant, ShapeVariant::Circular);
    assert_eq!(trigger.spec.kind_icon, IconId::Flag);

    let task = rendered.node("a").unwrap();
    assert_eq!(task.kind, NodeKind::Other("task".to_string()));
    assert_eq!(task.spec.shape_variant, ShapeVariant::Standard);
}

#[test]
fn test_status_counts() {
    let rendered = WorkflowRenderer::new(create_branching_workflow())
        .render()
        .unwrap();

    assert_eq!(
        rendered.status_counts(),
        vec![
            (NodeStatus::Completed, 2),
            (NodeStatus::Failed, 1),
            (NodeStatus::Pending, 2),
            (NodeStatus::Running, 1),
            (NodeStatus::Skipped, 1),
        ]
    );
}

#[test]
fn test_summary_formatter() {
    let rendered = WorkflowRenderer::new(create_branching_workflow())
        .render()
        .unwrap();
    let summary = SummaryFormatter::format_workflow(&rendered);

    assert!(summary.contains("[parallel] Step fan (running, play+pulse) in:top out:main,branch1,branch2"));
    assert!(summary.contains("[circular] Step start (completed, check) in:- out:bottom"));
    assert!(summary.contains("gate:right -> fan:top"));
    assert!(summary.contains("Statuses: completed=2, failed=1, pending=2, running=1, skipped=1"));
    assert!(!summary.contains("Dropped edges"));
}
