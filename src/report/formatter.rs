use crate::gallery::ProjectTemplate;
use crate::visual::handles::points_with_flow;
use crate::visual::{ConnectionPoint, Flow};
use crate::workflow::{NodeView, RenderedWorkflow};

/// Formats render results into human-readable text.
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// One line per node, then one per edge, then the status tally.
    pub fn format_workflow(rendered: &RenderedWorkflow) -> String {
        let mut lines: Vec<String> = rendered.nodes.iter().map(Self::format_node).collect();

        if !rendered.edges.is_empty() {
            lines.push(String::new());
            for edge in &rendered.edges {
                lines.push(format!(
                    "{}:{} -> {}:{}",
                    edge.source, edge.source_handle, edge.target, edge.target_handle
                ));
            }
        }

        lines.push(String::new());
        let tally = rendered
            .status_counts()
            .iter()
            .map(|(status, count)| format!("{}={}", status, count))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Statuses: {}", tally));
        if rendered.dropped_edges > 0 {
            lines.push(format!("Dropped edges: {}", rendered.dropped_edges));
        }
        lines.join("\n")
    }

    /// e.g. `[parallel] Fan out (running, play+pulse) in:top out:main,branch1,branch2`
    pub fn format_node(node: &NodeView) -> String {
        let spec = &node.spec;
        let mut line = format!(
            "[{}] {} ({}, {}{})",
            spec.shape_variant,
            node.label,
            node.status,
            spec.status_icon,
            if spec.status_animation.is_some() {
                "+pulse"
            } else {
                ""
            }
        );
        if node.optional {
            line.push_str(" optional");
        }
        line.push_str(&format!(
            " in:{} out:{}",
            Self::format_points(spec.connection_points, Flow::Inbound),
            Self::format_points(spec.connection_points, Flow::Outbound)
        ));
        if let Some(condition) = &node.condition {
            line.push_str(&format!(" if {}", condition));
        }
        line
    }

    fn format_points(points: &'static [ConnectionPoint], flow: Flow) -> String {
        let ids: Vec<&str> = points_with_flow(points, flow)
            .map(ConnectionPoint::handle_id)
            .collect();
        if ids.is_empty() {
            "-".to_string()
        } else {
            ids.join(",")
        }
    }

    pub fn format_template(template: &ProjectTemplate) -> String {
        let category = if template.category.is_empty() {
            "Uncategorized"
        } else {
            template.category.as_str()
        };
        if template.description.is_empty() {
            format!("{} [{}]", template.title, category)
        } else {
            format!(
                "{} [{}] - {}",
                template.title, category, template.description
            )
        }
    }
}
