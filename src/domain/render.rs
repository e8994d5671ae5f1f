/*
Renders the tree through the read-only handle interface only.
Each node is labelled with its code path and symbol; waypoints show a middle dot.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{MorseTree, NodeHandle};
use crate::domain::code::Signal;

pub const ROOT_LABEL: &str = "(root)";
pub const WAYPOINT_LABEL: char = '·';

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for MorseTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(
            tree: &MorseTree,
            handle: NodeHandle,
            path: &mut String,
            parent_tree: &mut Tree<String>,
        ) {
            for signal in [Signal::Dot, Signal::Dash] {
                if let Some(child) = tree.child(handle, signal) {
                    path.push(signal.as_char());
                    let label = tree.value_of(child).unwrap_or(WAYPOINT_LABEL);
                    let mut child_tree = Tree::new(format!("{} {}", path, label));
                    build_tree(tree, child, path, &mut child_tree);
                    parent_tree.push(child_tree);
                    path.pop();
                }
            }
        }

        let mut root = Tree::new(ROOT_LABEL.to_string());
        build_tree(self, self.root(), &mut String::new(), &mut root);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_dot_before_dash() {
        let mut tree = MorseTree::new();
        tree.insert(&"-".parse().unwrap(), 'T');
        tree.insert(&"..".parse().unwrap(), 'I');

        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], ROOT_LABEL);
        assert!(lines[1].ends_with(". ·"));
        assert!(lines[2].ends_with(".. I"));
        assert!(lines[3].ends_with("- T"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = MorseTree::new();
        assert_eq!(tree.to_tree_string().to_string().trim_end(), ROOT_LABEL);
    }
}
