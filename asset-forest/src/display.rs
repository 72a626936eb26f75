//! Text rendering of subtrees for logs and debugging.

use std::fmt::Write;

use crate::node::NodeRef;

impl NodeRef<'_> {
    /// Render this subtree as an indented outline.
    ///
    /// Each line reads `+-Name (#id) [visible children] Category: stacks`,
    /// with `-` standing in for zero children or a missing stack count.
    pub fn print_tree(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(*self, String::new(), true)];
        while let Some((node, indent, last)) = stack.pop() {
            let children = match node.children_count() {
                0 => "-".to_string(),
                n => n.to_string(),
            };
            let count = node
                .item_count()
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            let _ = writeln!(out, "{indent}+-{node} [{children}] {}: {count}", node.category());

            let indent = format!("{indent}{}", if last { "   " } else { "|  " });
            let all: Vec<_> = node.all_children().collect();
            let len = all.len();
            stack.extend(
                all.into_iter()
                    .enumerate()
                    .rev()
                    .map(|(position, child)| (child, indent.clone(), position + 1 == len)),
            );
        }
        out
    }
}
