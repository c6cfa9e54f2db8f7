//! Flat heading list to nested outline.

use serde::Serialize;

use super::HeadingEntry;
use crate::debug;

/// One entry of the outline with its nested subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    #[serde(flatten)]
    pub entry: HeadingEntry,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(entry: HeadingEntry, children: Vec<OutlineNode>) -> Self {
        Self { entry, children }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.entry.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.entry.title
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Whether this node or any descendant has the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.id() == id || self.children.iter().any(|child| child.contains(id))
    }
}

/// Build the outline forest from headings in document order.
///
/// Roots are the depth-1 entries. Every other entry hangs under the nearest
/// preceding entry whose depth is exactly one less. Entries without such a
/// parent are dropped, together with anything nested below them.
///
/// Runs in one forward pass: `latest[d]` is the most recent entry seen at
/// depth `d`, which is exactly the nearest preceding candidate parent for
/// the next entry at depth `d + 1`. Shallower entries in between do not
/// reset it.
pub fn build_outline(entries: &[HeadingEntry]) -> Vec<OutlineNode> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
    let mut roots = Vec::new();
    let mut latest: [Option<usize>; 256] = [None; 256];

    for (index, entry) in entries.iter().enumerate() {
        match entry.depth {
            0 => {}
            1 => roots.push(index),
            depth => {
                if let Some(parent) = latest[usize::from(depth - 1)] {
                    children[parent].push(index);
                }
            }
        }
        latest[usize::from(entry.depth)] = Some(index);
    }

    let forest: Vec<_> = roots
        .into_iter()
        .map(|index| assemble(entries, &children, index))
        .collect();

    let kept = count(&forest);
    if kept < entries.len() {
        debug!("outline"; "dropped {} heading(s) without a parent", entries.len() - kept);
    }

    forest
}

fn assemble(entries: &[HeadingEntry], children: &[Vec<usize>], index: usize) -> OutlineNode {
    OutlineNode::new(
        entries[index].clone(),
        children[index]
            .iter()
            .map(|&child| assemble(entries, children, child))
            .collect(),
    )
}

/// Total number of nodes reachable in a forest.
pub fn count(forest: &[OutlineNode]) -> usize {
    forest.iter().map(OutlineNode::node_count).sum()
}

/// Pre-order traversal of a forest (document order).
pub fn walk(forest: &[OutlineNode]) -> impl Iterator<Item = &OutlineNode> {
    let mut stack: Vec<&OutlineNode> = forest.iter().rev().collect();
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        stack.extend(node.children.iter().rev());
        Some(node)
    })
}
