//! Common test utilities for building workflow definitions and template lists.
use flowsight::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, kind: &str, status: &str) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        descriptor: NodeDescriptor::new(
            format!("Step {}", id),
            NodeKind::from(kind),
            NodeStatus::from(status),
        ),
    }
}

/// Creates a small branching workflow.
///
/// `start -> analyze -> gate -(left)-> fix`, `gate -(right)-> fan`,
/// `fan -(main)-> done`, `fan -(branch2)-> notify`
#[allow(dead_code)]
pub fn create_branching_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            node("start", "start", "completed"),
            node("analyze", "analysis", "completed"),
            node("gate", "condition", "failed"),
            node("fix", "action", "skipped"),
            node("fan", "parallel", "running"),
            node("notify", "action", "pending"),
            node("done", "end", "pending"),
        ],
        edges: vec![
            WorkflowEdge::new("start", "analyze"),
            WorkflowEdge::new("analyze", "gate"),
            WorkflowEdge::new("gate", "fix").with_source_handle("left"),
            WorkflowEdge::new("gate", "fan").with_source_handle("right"),
            WorkflowEdge::new("fan", "done").with_source_handle("main"),
            WorkflowEdge::new("fan", "notify").with_source_handle("branch2"),
        ],
    }
}

#[allow(dead_code)]
pub const WORKFLOW_JSON: &str = r#"{
    "nodes": [
        {"id": "1", "type": "workflowNode", "data": {"label": "Kickoff", "kind": "start", "status": "completed"}},
        {"id": "2", "data": {"label": "Review evidence", "type": "analysis", "status": "running", "optional": true}},
        {"id": "3", "data": {"label": "Controls met?", "kind": "decision", "condition": "coverage >= 80%"}},
        {"id": "4", "data": {"label": "Mystery", "kind": "webhook", "status": "exploded"}},
        {"id": "5", "data": {"label": "Finish", "kind": "end", "status": null}}
    ],
    "edges": [
        {"id": "e1", "source": "1", "target": "2"},
        {"id": "e2", "source": "2", "sourceHandle": null, "target": "3", "targetHandle": "top"},
        {"id": "e3", "source": "3", "sourceHandle": "bottom", "target": "5"},
        {"id": "e4", "source": "3", "sourceHandle": "left", "target": "4"}
    ]
}"#;

#[allow(dead_code)]
pub const TEMPLATES_JSON: &str = r#"[
    {"object_id": "t1", "title": "HIPAA Starter", "description": "Privacy and security rule controls", "category": "HIPAA", "is_active": true, "created_at": "2024-01-02 10:00:00", "updated_at": "2024-01-02 10:00:00"},
    {"object_id": "t2", "title": "SOX Readiness", "description": "Financial reporting controls", "category": "SOX", "is_active": true, "created_at": "2024-01-03 10:00:00", "updated_at": "2024-01-03 10:00:00"},
    {"object_id": "t3", "title": "Card Data", "description": "Cardholder data environment", "category": "PCI-DSS", "is_active": true, "created_at": "", "updated_at": ""},
    {"object_id": "t4", "title": "Security Baseline", "description": "General hardening checklist", "category": "General", "is_active": true, "created_at": "", "updated_at": ""},
    {"object_id": "t5", "title": "Retired HIPAA Pack", "description": "Old privacy controls", "category": "HIPAA", "is_active": false, "created_at": "", "updated_at": ""},
    {"object_id": "t6", "title": "Blank Project", "category": ""}
]"#;
