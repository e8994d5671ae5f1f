use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::code::{MorseCode, Signal};

/// Tree node in the arena-based dot/dash hierarchy.
#[derive(Debug, Default)]
struct MorseNode {
    /// Symbol registered for the path ending here, None for waypoints
    value: Option<char>,
    /// Index of the child reached by a dot
    dot: Option<Index>,
    /// Index of the child reached by a dash
    dash: Option<Index>,
}

impl MorseNode {
    fn child(&self, signal: Signal) -> Option<Index> {
        match signal {
            Signal::Dot => self.dot,
            Signal::Dash => self.dash,
        }
    }

    fn child_slot(&mut self, signal: Signal) -> &mut Option<Index> {
        match signal {
            Signal::Dot => &mut self.dot,
            Signal::Dash => &mut self.dash,
        }
    }
}

/// Opaque read-only reference to a node, handed out to renderers.
///
/// Handles never grant mutable access and are only meaningful for the tree
/// that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(Index);

/// Arena-based binary tree keyed by Morse code paths.
///
/// The root is created empty with the tree; interior nodes are created on the
/// first insertion that passes through them and are never removed.
#[derive(Debug)]
pub struct MorseTree {
    /// Arena storage for all tree nodes
    arena: Arena<MorseNode>,
    /// Index of the root node, present for the lifetime of the tree
    root: Index,
}

impl Default for MorseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MorseTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(MorseNode::default());
        Self { arena, root }
    }

    /// Walks `code` from the root, creating missing nodes, and stores `symbol`
    /// at the end of the path. Re-inserting a code overwrites only that node.
    #[instrument(level = "trace", skip(self, code), fields(code = %code))]
    pub fn insert(&mut self, code: &MorseCode, symbol: char) {
        let mut current = self.root;
        for &signal in code.signals() {
            current = self.child_or_insert(current, signal);
        }
        if let Some(node) = self.arena.get_mut(current) {
            node.value = Some(symbol);
        }
    }

    fn child_or_insert(&mut self, parent: Index, signal: Signal) -> Index {
        if let Some(child) = self.arena.get(parent).and_then(|n| n.child(signal)) {
            return child;
        }
        let child = self.arena.insert(MorseNode::default());
        if let Some(node) = self.arena.get_mut(parent) {
            *node.child_slot(signal) = Some(child);
        }
        child
    }

    /// Follows `code` without creating nodes.
    #[instrument(level = "trace", skip(self, code), fields(code = %code))]
    pub fn find(&self, code: &MorseCode) -> Option<NodeHandle> {
        code.signals()
            .iter()
            .try_fold(self.root(), |handle, &signal| self.child(handle, signal))
    }

    /// Symbol stored at the end of `code`, if any.
    pub fn lookup(&self, code: &MorseCode) -> Option<char> {
        self.find(code).and_then(|handle| self.value_of(handle))
    }

    /// Depth-first search for `symbol`, dot branch before dash branch.
    /// The first match in that order wins.
    #[instrument(level = "trace", skip(self))]
    pub fn find_symbol(&self, symbol: char) -> Option<MorseCode> {
        let mut path = Vec::new();
        if self.search(self.root, symbol, &mut path) {
            MorseCode::new(path).ok()
        } else {
            None
        }
    }

    fn search(&self, node_idx: Index, target: char, path: &mut Vec<Signal>) -> bool {
        let Some(node) = self.arena.get(node_idx) else {
            return false;
        };
        if node.value == Some(target) {
            return true;
        }
        for (signal, child) in [(Signal::Dot, node.dot), (Signal::Dash, node.dash)] {
            if let Some(child) = child {
                path.push(signal);
                if self.search(child, target, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    // ---- read-only traversal ----

    pub fn root(&self) -> NodeHandle {
        NodeHandle(self.root)
    }

    pub fn child(&self, handle: NodeHandle, signal: Signal) -> Option<NodeHandle> {
        self.arena
            .get(handle.0)
            .and_then(|node| node.child(signal))
            .map(NodeHandle)
    }

    pub fn dot_child(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.child(handle, Signal::Dot)
    }

    pub fn dash_child(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.child(handle, Signal::Dash)
    }

    pub fn has_value(&self, handle: NodeHandle) -> bool {
        self.value_of(handle).is_some()
    }

    pub fn value_of(&self, handle: NodeHandle) -> Option<char> {
        self.arena.get(handle.0).and_then(|node| node.value)
    }

    /// Path from the root to `handle`, None for the root or a foreign handle.
    pub fn code_of(&self, handle: NodeHandle) -> Option<MorseCode> {
        self.iter()
            .find(|entry| entry.handle == handle)
            .and_then(|entry| MorseCode::new(entry.path).ok())
    }

    // ---- whole-tree queries ----

    /// True while nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.arena
            .get(self.root)
            .map(|root| root.value.is_none() && root.dot.is_none() && root.dash.is_none())
            .unwrap_or(true)
    }

    /// Number of nodes including the root and waypoints.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of nodes carrying a symbol.
    pub fn symbol_count(&self) -> usize {
        self.arena.iter().filter(|(_, node)| node.value.is_some()).count()
    }

    /// Number of levels; a tree holding only the root has height 1.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.calculate_height(self.root)
    }

    fn calculate_height(&self, node_idx: Index) -> usize {
        if let Some(node) = self.arena.get(node_idx) {
            1 + [node.dot, node.dash]
                .into_iter()
                .flatten()
                .map(|child| self.calculate_height(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// All registered (code, symbol) pairs, dot branch before dash branch.
    #[instrument(level = "debug", skip(self))]
    pub fn entries(&self) -> Vec<(MorseCode, char)> {
        self.iter()
            .filter_map(|entry| {
                let value = entry.value?;
                MorseCode::new(entry.path).ok().map(|code| (code, value))
            })
            .collect()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }
}

/// Node visited by [`TreeIterator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub handle: NodeHandle,
    pub path: Vec<Signal>,
    pub value: Option<char>,
}

/// Pre-order traversal, dot subtree before dash subtree.
pub struct TreeIterator<'a> {
    tree: &'a MorseTree,
    stack: Vec<(NodeHandle, Vec<Signal>)>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a MorseTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root(), Vec::new())],
        }
    }
}

impl Iterator for TreeIterator<'_> {
    type Item = TreeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let (handle, path) = self.stack.pop()?;
        // Push dash first so the dot branch is visited first
        for signal in [Signal::Dash, Signal::Dot] {
            if let Some(child) = self.tree.child(handle, signal) {
                let mut child_path = path.clone();
                child_path.push(signal);
                self.stack.push((child, child_path));
            }
        }
        Some(TreeEntry {
            handle,
            value: self.tree.value_of(handle),
            path,
        })
    }
}
