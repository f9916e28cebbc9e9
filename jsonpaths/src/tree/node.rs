use indexmap::IndexMap;

use crate::extraction::SEPARATOR;

/// One segment of a path tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    /// Segment label, including any `[*]` suffix
    pub(super) key:             String,
    /// Path from the root down to this node
    pub(super) full_path:       String,
    /// Whether this is the last child of its parent in insertion order
    pub(super) is_last_sibling: bool,
    /// Children keyed by segment label, in first-inserted order
    pub(super) children:        IndexMap<String, Self>,
}

impl PathNode {
    pub(super) fn new(key: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            key:             key.into(),
            full_path:       full_path.into(),
            is_last_sibling: false,
            children:        IndexMap::new(),
        }
    }

    /// Segment label of this node
    #[must_use]
    pub fn key(&self) -> &str { &self.key }

    /// Full path of this node, `$` for the root
    #[must_use]
    pub fn full_path(&self) -> &str { &self.full_path }

    /// Whether this node is the last among its siblings
    #[must_use]
    pub const fn is_last_sibling(&self) -> bool { self.is_last_sibling }

    /// Whether this node has no children
    #[must_use]
    pub fn is_leaf(&self) -> bool { self.children.is_empty() }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = &Self> { self.children.values() }

    /// Look up a direct child by its segment label
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> { self.children.get(segment) }

    /// Walk down from this node, creating any missing child along the way
    pub(super) fn insert_segments<'a>(&mut self, segments: impl IntoIterator<Item = &'a str>) {
        let mut node = self;
        for segment in segments {
            let child_path = format!("{}{SEPARATOR}{segment}", node.full_path);
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(|| Self::new(segment, child_path));
        }
    }

    /// Flag the last child at every level below this node
    pub(super) fn mark_last_siblings(&mut self) {
        let last = self.children.len().saturating_sub(1);
        for (index, child) in self.children.values_mut().enumerate() {
            child.is_last_sibling = index == last;
            child.mark_last_siblings();
        }
    }

    /// Depth-first, children in insertion order
    pub(super) fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Self>) {
        for child in self.children.values() {
            if child.is_leaf() {
                leaves.push(child);
            } else {
                child.collect_leaves(leaves);
            }
        }
    }

    /// Pre-order, children in insertion order, excluding `self`
    pub(super) fn collect_descendants<'a>(&'a self, nodes: &mut Vec<&'a Self>) {
        for child in self.children.values() {
            nodes.push(child);
            child.collect_descendants(nodes);
        }
    }
}
