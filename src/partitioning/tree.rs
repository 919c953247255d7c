use std::fmt::Write;

use super::partition::{PartitionHistory, Split};

/// Nested view of a partition history, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// `node-<history index>`
    pub id: String,
    /// The character for a leaf, the joined character list otherwise
    pub name: String,
    /// Frequency of the leaf character, or the partition total
    pub value: u32,
    /// Only set on leaves
    pub code: Option<String>,
    pub split: Option<Split>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.code.is_some()
    }

    /// Number of nodes in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Turn the flat history into a tree rooted at index 0. None for an empty history.
pub fn materialize_tree(history: &PartitionHistory) -> Option<TreeNode> {
    if history.is_empty() {
        return None;
    }
    Some(build_node(history, 0))
}

fn build_node(history: &PartitionHistory, idx: usize) -> TreeNode {
    let state = &history[idx];

    if state.is_leaf() {
        return TreeNode {
            id: format!("node-{}", idx),
            name: state.chars[0].to_string(),
            value: state.freqs[0],
            code: Some(state.prefix.clone()),
            split: None,
            children: vec![],
        };
    }

    // Children are always pushed after their parent. Anything else is dangling and skipped.
    let children = [state.children.0, state.children.1]
        .into_iter()
        .flatten()
        .filter(|&child| child > idx && child < history.len())
        .map(|child| build_node(history, child))
        .collect();

    TreeNode {
        id: format!("node-{}", idx),
        name: state
            .chars
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(", "),
        value: state.total_freq,
        code: None,
        split: state.split,
        children,
    }
}

/// Printable form of a character, with whitespace made visible.
pub fn show_char(c: char) -> String {
    match c {
        ' ' => "' '".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        _ => c.to_string(),
    }
}

/// Render the tree as indented text, one node per line. Left branches are labelled 0, right 1.
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    render_node(root, "", None, &mut out);
    out
}

fn render_node(node: &TreeNode, indent: &str, bit: Option<char>, out: &mut String) {
    let label = match bit {
        Some(b) => format!("{}[{}] ", indent, b),
        None => String::new(),
    };
    match (&node.code, node.split) {
        (Some(code), _) => {
            let c = node.name.chars().next().map(show_char).unwrap_or_default();
            let _ = writeln!(out, "{}{} ({}) => {}", label, c, node.value, code);
        }
        (None, Some(split)) => {
            let _ = writeln!(
                out,
                "{}{{{}}} ({}) split {}|{}",
                label,
                node.name.split(", ").map(|s| s.chars().next().map(show_char).unwrap_or_default()).collect::<Vec<_>>().join(" "),
                node.value,
                split.left_sum,
                split.right_sum
            );
        }
        (None, None) => {
            let _ = writeln!(out, "{}{{{}}} ({})", label, node.name, node.value);
        }
    }
    let child_indent = format!("{}  ", indent);
    for (child, b) in node.children.iter().zip(['0', '1']) {
        render_node(child, &child_indent, Some(b), out);
    }
}
