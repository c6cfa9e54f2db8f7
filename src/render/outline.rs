use serde::Serialize;

use crate::outline::OutlineNode;

/// One visible TOC entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub title: String,
    pub href: String,
    /// On the path from a root to the active heading.
    pub active: bool,
    /// Expanded children; only active nodes show theirs.
    pub children: Vec<RenderNode>,
}

/// A node is active when it or any descendant is the active heading.
pub fn is_active(node: &OutlineNode, active_id: Option<&str>) -> bool {
    let Some(active_id) = active_id else {
        return false;
    };
    node.id() == active_id
        || node
            .children
            .iter()
            .any(|child| is_active(child, Some(active_id)))
}

/// Render model of an outline forest for the given active heading.
///
/// Only the root-to-active path is expanded. Without an active heading the
/// result is the collapsed list of roots.
pub fn render_outline(nodes: &[OutlineNode], active_id: Option<&str>) -> Vec<RenderNode> {
    nodes
        .iter()
        .map(|node| {
            let active = is_active(node, active_id);
            RenderNode {
                id: node.id().to_string(),
                title: node.title().to_string(),
                href: node.entry.href(),
                active,
                children: if active {
                    render_outline(&node.children, active_id)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}
