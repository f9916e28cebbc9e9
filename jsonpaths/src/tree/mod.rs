//! Path tree
//!
//! Turns a set of extracted paths back into the tree of segments they describe,
//! for leaf filtering and for rendering.
//!
//! ```text
//! ├── a
//! │   └── b
//! └── c
//! ```

mod node;
mod render;

use std::fmt::{self, Display};

use tracing::{debug, warn};

pub use self::node::PathNode;
use crate::extraction::{ROOT, SEPARATOR};

/// Prefix stripped from every well-formed path before splitting
const ROOT_PREFIX: &str = "$.";

/// Read-only tree built from a set of paths
///
/// Sibling order is the order in which each segment was first seen while
/// inserting the paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    root: PathNode,
}

impl PathTree {
    /// Build the tree from paths in iteration order
    ///
    /// Never fails. `$` on its own adds nothing. A string that does not start
    /// with `$.` is inserted whole, as a single segment under the root.
    #[must_use]
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = PathNode::new(ROOT, ROOT);
        root.is_last_sibling = true;

        let mut inserted = 0_usize;
        for path in paths {
            root.insert_segments(segments(path.as_ref()));
            inserted += 1;
        }
        root.mark_last_siblings();

        debug!(paths = inserted, "built path tree");
        Self { root }
    }

    /// The root node, labelled `$`
    #[must_use]
    pub const fn root(&self) -> &PathNode { &self.root }

    /// Every node without children, depth-first
    ///
    /// An empty tree has no leaves; the root itself is never reported.
    #[must_use]
    pub fn leaves(&self) -> Vec<&PathNode> {
        let mut leaves = Vec::new();
        self.root.collect_leaves(&mut leaves);
        leaves
    }

    /// Full paths of all leaves, depth-first
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<&str> {
        self.leaves().into_iter().map(PathNode::full_path).collect()
    }

    /// Full paths of every node below the root, pre-order
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut nodes = Vec::new();
        self.root.collect_descendants(&mut nodes);
        nodes.into_iter().map(PathNode::full_path).collect()
    }

    /// Render as an indented tree, one newline-terminated line per node
    ///
    /// The root has no line of its own; an empty tree renders as an empty
    /// string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        render::render_children(&self.root, "", &mut out);
        out
    }
}

impl Display for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.render()) }
}

fn segments(path: &str) -> Vec<&str> {
    if path == ROOT {
        return Vec::new();
    }
    if let Some(rest) = path.strip_prefix(ROOT_PREFIX) {
        return rest.split(SEPARATOR).collect();
    }
    warn!(path, "path does not start with '$.', inserting it as a single segment");
    vec![path]
}
