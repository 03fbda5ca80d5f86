//! Traversal strategies over a [`TreeArena`].
//!
//! Every call creates a fresh iterator with its own revisit set, so a
//! traversal can be restarted any number of times; each returned iterator
//! is single-pass. Nodes reachable twice (shared children, cycles) are
//! yielded once.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::arena::{NodeId, TreeArena};
use crate::errors::{TreeError, TreeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAlgo {
    #[default]
    BreadthFirst,
    DepthFirst,
    DepthFirstRecursive,
}

impl<V> TreeArena<V> {
    /// Walks `id` and everything below it in the order given by `algo`.
    /// The start node is always the first item.
    pub fn descendants(&self, id: NodeId, algo: SearchAlgo) -> Descendants<'_, V> {
        match algo {
            SearchAlgo::BreadthFirst => Descendants::BreadthFirst(BreadthFirst::new(self, id)),
            SearchAlgo::DepthFirst => Descendants::DepthFirst(DepthFirst::new(self, id, false)),
            SearchAlgo::DepthFirstRecursive => {
                Descendants::DepthFirstRecursive(DepthFirstRecursive::new(self, id))
            }
        }
    }

    pub fn descendants_list(&self, id: NodeId, algo: SearchAlgo) -> Vec<NodeId> {
        self.descendants(id, algo).collect()
    }

    /// Depth-first walk that reports a node reached a second time as
    /// [`TreeError::CycleDetected`] instead of skipping it.
    pub fn depth_first_checked(&self, id: NodeId) -> CycleChecked<'_, V> {
        CycleChecked::new(self, id)
    }

    /// Returns true if the structure reachable from `id` is not a tree.
    #[instrument(level = "debug", skip(self))]
    pub fn has_cycle(&self, id: NodeId) -> TreeResult<bool> {
        for step in self.depth_first_checked(id) {
            match step {
                Ok(_) => {}
                Err(e) if e.is_cycle() => {
                    debug!("{}", e);
                    return Ok(true);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(false)
    }
}

/// Iterator returned by [`TreeArena::descendants`].
pub enum Descendants<'a, V> {
    BreadthFirst(BreadthFirst<'a, V>),
    DepthFirst(DepthFirst<'a, V>),
    DepthFirstRecursive(DepthFirstRecursive<'a, V>),
}

impl<'a, V> Iterator for Descendants<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Descendants::BreadthFirst(it) => it.next(),
            Descendants::DepthFirst(it) => it.next(),
            Descendants::DepthFirstRecursive(it) => it.next(),
        }
    }
}

/// Level-order walk: the current level is drained while the next one is
/// collected, then the two swap.
pub struct BreadthFirst<'a, V> {
    arena: &'a TreeArena<V>,
    current: std::vec::IntoIter<NodeId>,
    next_level: Vec<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, V> BreadthFirst<'a, V> {
    pub fn new(arena: &'a TreeArena<V>, start: NodeId) -> Self {
        let current = if arena.contains(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Self {
            arena,
            current: current.into_iter(),
            next_level: Vec::new(),
            visited: HashSet::new(),
        }
    }
}

impl<'a, V> Iterator for BreadthFirst<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.current.next() {
                Some(id) => {
                    if !self.visited.insert(id) {
                        // already visited
                        continue;
                    }
                    self.next_level.extend_from_slice(self.arena.children(id));
                    return Some(id);
                }
                None => {
                    if self.next_level.is_empty() {
                        return None;
                    }
                    self.current = std::mem::take(&mut self.next_level).into_iter();
                }
            }
        }
    }
}

/// Pre-order walk on an explicit stack.
///
/// Children are pushed in reverse so they pop in insertion order, and are
/// marked when pushed so no node enters the stack twice. The children of a
/// yielded node are expanded on the following call.
pub struct DepthFirst<'a, V> {
    arena: &'a TreeArena<V>,
    stack: Vec<NodeId>,
    visited: HashSet<NodeId>,
    expand: Option<NodeId>,
    fail_on_cycle: bool,
}

impl<'a, V> DepthFirst<'a, V> {
    fn new(arena: &'a TreeArena<V>, start: NodeId, fail_on_cycle: bool) -> Self {
        let mut stack = Vec::new();
        let mut visited = HashSet::new();
        if arena.contains(start) {
            stack.push(start);
            visited.insert(start);
        }
        Self {
            arena,
            stack,
            visited,
            expand: None,
            fail_on_cycle,
        }
    }

    fn push_children(&mut self, node: NodeId) -> TreeResult<()> {
        for &child in self.arena.children(node).iter().rev() {
            if !self.visited.insert(child) {
                if self.fail_on_cycle {
                    return Err(TreeError::CycleDetected(child));
                }
                continue;
            }
            self.stack.push(child);
        }
        Ok(())
    }

    fn try_next(&mut self) -> TreeResult<Option<NodeId>> {
        if let Some(previous) = self.expand.take() {
            self.push_children(previous)?;
        }
        let node = self.stack.pop();
        self.expand = node;
        Ok(node)
    }
}

impl<'a, V> Iterator for DepthFirst<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        // never fails unless constructed with fail_on_cycle
        self.try_next().ok().flatten()
    }
}

/// Pre-order walk in the shape of the recursive algorithm: one frame per
/// level holding the position in that node's children. A child is marked
/// when it is entered.
pub struct DepthFirstRecursive<'a, V> {
    arena: &'a TreeArena<V>,
    start: Option<NodeId>,
    frames: Vec<(NodeId, usize)>,
    visited: HashSet<NodeId>,
}

impl<'a, V> DepthFirstRecursive<'a, V> {
    pub fn new(arena: &'a TreeArena<V>, start: NodeId) -> Self {
        Self {
            arena,
            start: Some(start).filter(|&s| arena.contains(s)),
            frames: Vec::new(),
            visited: HashSet::new(),
        }
    }
}

impl<'a, V> Iterator for DepthFirstRecursive<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.visited.insert(start);
            self.frames.push((start, 0));
            return Some(start);
        }

        while let Some(frame) = self.frames.last_mut() {
            let (node, cursor) = *frame;
            match self.arena.children(node).get(cursor) {
                Some(&child) => {
                    frame.1 += 1;
                    if !self.visited.insert(child) {
                        continue;
                    }
                    self.frames.push((child, 0));
                    return Some(child);
                }
                None => {
                    self.frames.pop();
                }
            }
        }
        None
    }
}

/// Iterator returned by [`TreeArena::depth_first_checked`].
///
/// Yields nodes in depth-first order; the first error ends the walk.
pub struct CycleChecked<'a, V> {
    inner: DepthFirst<'a, V>,
    pending: Option<TreeError>,
    done: bool,
}

impl<'a, V> CycleChecked<'a, V> {
    fn new(arena: &'a TreeArena<V>, start: NodeId) -> Self {
        let pending = (!arena.contains(start)).then_some(TreeError::NodeNotFound(start));
        Self {
            inner: DepthFirst::new(arena, start, true),
            pending,
            done: false,
        }
    }
}

impl<'a, V> Iterator for CycleChecked<'a, V> {
    type Item = TreeResult<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.pending.take() {
            self.done = true;
            return Some(Err(err));
        }
        match self.inner.try_next() {
            Ok(Some(node)) => Some(Ok(node)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_start_yields_nothing() {
        let mut tree = TreeArena::new();
        let root = tree.new_node(0);
        let child = tree.add_value(root, 1).unwrap();
        tree.remove_subtree(child).unwrap();

        for algo in [
            SearchAlgo::BreadthFirst,
            SearchAlgo::DepthFirst,
            SearchAlgo::DepthFirstRecursive,
        ] {
            assert!(tree.descendants_list(child, algo).is_empty());
        }
        assert!(matches!(
            tree.has_cycle(child),
            Err(TreeError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_checked_walk_yields_node_before_reporting_its_cycle() {
        let mut tree = TreeArena::new();
        let n1 = tree.new_node(1);
        let n2 = tree.add_value(n1, 2).unwrap();
        tree.set_parent(n1, Some(n2)).unwrap();

        let steps: Vec<_> = tree.depth_first_checked(n1).collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(*steps[0].as_ref().unwrap(), n1);
        assert_eq!(*steps[1].as_ref().unwrap(), n2);
        assert!(matches!(steps[2], Err(TreeError::CycleDetected(id)) if id == n1));
    }
}
