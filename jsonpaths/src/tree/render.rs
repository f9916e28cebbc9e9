use super::PathNode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const GAP: &str = "    ";

/// Render the descendants of `node`, one line per node
///
/// `indent` carries one column per ancestor level: a rule while that level
/// still has siblings to come, blank space once it was the last.
pub(super) fn render_children(node: &PathNode, indent: &str, out: &mut String) {
    for child in node.children() {
        let (branch, continuation) = if child.is_last_sibling() {
            (LAST_BRANCH, GAP)
        } else {
            (BRANCH, CONTINUATION)
        };

        out.push_str(indent);
        out.push_str(branch);
        out.push_str(child.key());
        out.push('\n');

        if !child.is_leaf() {
            render_children(child, &format!("{indent}{continuation}"), out);
        }
    }
}
