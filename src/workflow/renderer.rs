use super::definition::{WorkflowDefinition, WorkflowEdge};
use crate::error::RenderError;
use crate::node::{NodeKind, NodeStatus};
use crate::visual::handles::points_with_flow;
use crate::visual::{ConnectionPoint, Flow, RenderSpec};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::Serialize;

/// A node ready to draw: display fields plus its render spec.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub spec: RenderSpec,
}

/// An edge attached to concrete connection points on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEdge {
    pub source: String,
    pub source_handle: &'static str,
    pub target: String,
    pub target_handle: &'static str,
}

/// The output of a render pass over a whole workflow.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedWorkflow {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<ResolvedEdge>,
    /// Edges left out in lenient mode because they could not be attached.
    pub dropped_edges: usize,
}

impl RenderedWorkflow {
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of nodes per reported status, ordered by status name.
    pub fn status_counts(&self) -> Vec<(NodeStatus, usize)> {
        self.nodes
            .iter()
            .map(|n| n.status.clone())
            .counts()
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()))
            .collect()
    }
}

/// Turns a `WorkflowDefinition` into drawable node views and wired edges.
pub struct WorkflowRenderer {
    definition: WorkflowDefinition,
    kind_aliases: AHashMap<String, NodeKind>,
    strict_edges: bool,
}

pub struct WorkflowRendererBuilder {
    definition: WorkflowDefinition,
    kind_aliases: AHashMap<String, NodeKind>,
    strict_edges: bool,
}

impl WorkflowRendererBuilder {
    pub fn new(definition: WorkflowDefinition) -> Self {
        Self {
            definition,
            kind_aliases: AHashMap::new(),
            strict_edges: false,
        }
    }

    /// Renders nodes of kind `user_kind` as if they were `canonical_kind`.
    /// Aliases to a kind the classifier does not know are ignored.
    pub fn with_kind_alias(mut self, user_kind: &str, canonical_kind: &str) -> Self {
        let kind = NodeKind::from(canonical_kind);
        if kind.is_unrecognized() {
            log::warn!(
                "Ignoring alias '{}' -> '{}': not a known node kind",
                user_kind,
                canonical_kind
            );
        } else {
            self.kind_aliases.insert(user_kind.to_string(), kind);
        }
        self
    }

    /// In strict mode an edge that cannot be attached fails the render instead of
    /// being dropped with a warning.
    pub fn strict_edges(mut self, strict: bool) -> Self {
        self.strict_edges = strict;
        self
    }

    pub fn build(self) -> WorkflowRenderer {
        WorkflowRenderer {
            definition: self.definition,
            kind_aliases: self.kind_aliases,
            strict_edges: self.strict_edges,
        }
    }
}

impl WorkflowRenderer {
    pub fn builder(definition: WorkflowDefinition) -> WorkflowRendererBuilder {
        WorkflowRendererBuilder::new(definition)
    }

    pub fn new(definition: WorkflowDefinition) -> Self {
        Self::builder(definition).build()
    }

    pub fn render(&self) -> Result<RenderedWorkflow, RenderError> {
        let nodes = self.render_nodes()?;
        let index: AHashMap<&str, &NodeView> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

        let mut edges = Vec::with_capacity(self.definition.edges.len());
        let mut dropped_edges = 0;
        for edge in &self.definition.edges {
            match Self::resolve_edge(&index, edge) {
                Ok(resolved) => edges.push(resolved),
                Err(e) if self.strict_edges => return Err(e),
                Err(e) => {
                    log::warn!(
                        "Dropping edge '{}' -> '{}': {}",
                        edge.source,
                        edge.target,
                        e
                    );
                    dropped_edges += 1;
                }
            }
        }

        log::info!(
            "Rendered {} nodes and {} edges ({} dropped)",
            nodes.len(),
            edges.len(),
            dropped_edges
        );
        Ok(RenderedWorkflow {
            nodes,
            edges,
            dropped_edges,
        })
    }

    fn render_nodes(&self) -> Result<Vec<NodeView>, RenderError> {
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut views = Vec::with_capacity(self.definition.nodes.len());

        for node in &self.definition.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(RenderError::DuplicateNode(node.id.clone()));
            }

            let mut descriptor = node.descriptor.clone();
            descriptor.kind = self.resolve_kind(descriptor.kind);
            if descriptor.kind.is_unrecognized() {
                log::debug!(
                    "Node '{}' has unrecognized kind '{}', using the generic rendering",
                    node.id,
                    descriptor.kind
                );
            }

            let spec = RenderSpec::of(&descriptor);
            let condition = descriptor.visible_condition().map(str::to_string);
            views.push(NodeView {
                id: node.id.clone(),
                label: descriptor.label,
                kind: descriptor.kind,
                status: descriptor.status,
                optional: descriptor.optional,
                condition,
                spec,
            });
        }
        Ok(views)
    }

    fn resolve_kind(&self, kind: NodeKind) -> NodeKind {
        if let NodeKind::Other(raw) = &kind {
            if let Some(alias) = self.kind_aliases.get(raw) {
                return alias.clone();
            }
        }
        kind
    }

    fn resolve_edge(
        index: &AHashMap<&str, &NodeView>,
        edge: &WorkflowEdge,
    ) -> Result<ResolvedEdge, RenderError> {
        let lookup = |id: &str| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| RenderError::NodeNotFound {
                    missing_node_id: id.to_string(),
                    source_node_id: edge.source.clone(),
                    target_node_id: edge.target.clone(),
                })
        };
        let source = lookup(&edge.source)?;
        let target = lookup(&edge.target)?;

        Ok(ResolvedEdge {
            source: source.id.clone(),
            source_handle: Self::resolve_handle(
                source,
                edge.source_handle.as_deref(),
                Flow::Outbound,
            )?,
            target: target.id.clone(),
            target_handle: Self::resolve_handle(
                target,
                edge.target_handle.as_deref(),
                Flow::Inbound,
            )?,
        })
    }

    fn resolve_handle(
        node: &NodeView,
        requested: Option<&str>,
        flow: Flow,
    ) -> Result<&'static str, RenderError> {
        let mut candidates =
            points_with_flow(node.spec.connection_points, flow).map(ConnectionPoint::handle_id);

        match requested {
            Some(handle) => candidates
                .find(|id| *id == handle)
                .ok_or_else(|| RenderError::UnknownHandle {
                    node_id: node.id.clone(),
                    handle: handle.to_string(),
                    flow,
                }),
            None => candidates.next().ok_or_else(|| RenderError::NoConnectionPoint {
                node_id: node.id.clone(),
                flow,
            }),
        }
    }
}
