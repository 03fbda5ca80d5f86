use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::traversal::SearchAlgo;

/// Handle of a node stored in a [`TreeArena`].
///
/// Handles are generational: once a node is removed its handle never
/// resolves again, even if the slot is reused.
pub type NodeId = Index;

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode<V> {
    /// Payload, fixed at construction
    value: V,
    /// Index of parent node in the arena, None for root nodes
    parent: Option<NodeId>,
    /// Indices of child nodes in the arena, in insertion order
    children: Vec<NodeId>,
}

impl<V> TreeNode<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based forest of nodes carrying payloads of type `V`.
///
/// Every node owns its `children` list and keeps a lookup-only `parent`
/// back edge. All mutation goes through [`TreeArena::set_parent`], which
/// keeps the two in agreement: `child.parent == p` iff `p.children`
/// contains `child`.
///
/// Re-parenting a node below one of its own descendants creates a cycle
/// instead of failing. Use
/// [`TreeArena::has_cycle`] to check a structure, every traversal is safe
/// to run on a cyclic one.
#[derive(Debug)]
pub struct TreeArena<V> {
    arena: Arena<TreeNode<V>>,
}

impl<V> Default for TreeArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TreeArena<V> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates a detached node (no parent, no children) holding `value`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn new_node(&mut self, value: V) -> NodeId {
        self.arena.insert(TreeNode::new(value))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode<V>> {
        self.arena.get(id)
    }

    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.parent)
    }

    /// Children of `id` in insertion order; empty for unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.parent(id).is_none()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    /// Root of the tree `id` belongs to, `id` itself if it has no parent.
    ///
    /// On a cyclic parent chain this returns the last node before the chain
    /// closes on itself.
    #[instrument(level = "trace", skip(self))]
    pub fn root(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Number of parent hops from `id` up to its root. Roots have depth 0.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// All nodes without a parent, in arena order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.arena
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Strict ancestors of `id`, nearest first, ending with the root.
    ///
    /// Stops silently when the parent chain loops back onto a node it
    /// already yielded.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, V> {
        Ancestors::new(self, id)
    }

    pub fn ancestors_list(&self, id: NodeId) -> Vec<NodeId> {
        self.ancestors(id).collect()
    }

    fn node(&self, id: NodeId) -> TreeResult<&TreeNode<V>> {
        self.arena.get(id).ok_or(TreeError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> TreeResult<&mut TreeNode<V>> {
        self.arena.get_mut(id).ok_or(TreeError::NodeNotFound(id))
    }

    /// Moves `child` below `parent`, or detaches it when `parent` is None.
    ///
    /// The child leaves its old parent's children first and is appended to
    /// the new parent's children unless it is already listed there.
    /// Assigning the current parent again is a no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> TreeResult<()> {
        let old_parent = self.node(child)?.parent;
        if let Some(parent_idx) = parent {
            self.node(parent_idx)?;
        }
        if old_parent == parent {
            return Ok(());
        }

        if let Some(old_idx) = old_parent {
            if let Some(old) = self.arena.get_mut(old_idx) {
                old.children.retain(|&c| c != child);
            }
        }

        if let Some(parent_idx) = parent {
            let new_parent = self.node_mut(parent_idx)?;
            if !new_parent.children.contains(&child) {
                new_parent.children.push(child);
            }
        }

        self.node_mut(child)?.parent = parent;
        debug!("re-parented {:?}: {:?} -> {:?}", child, old_parent, parent);
        Ok(())
    }

    /// Attaches `child` below `parent` and returns `child`.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> TreeResult<NodeId> {
        self.set_parent(child, Some(parent))?;
        Ok(child)
    }

    /// Attaches every node in `children` below `parent`, in order.
    ///
    /// All handles are checked before anything is linked, so a stale handle
    /// leaves the arena untouched.
    #[instrument(level = "trace", skip(self, children))]
    pub fn add_all<I>(&mut self, parent: NodeId, children: I) -> TreeResult<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.node(parent)?;
        let children: Vec<NodeId> = children.into_iter().collect();
        if let Some(&missing) = children.iter().find(|&&c| !self.contains(c)) {
            return Err(TreeError::NodeNotFound(missing));
        }
        for &child in &children {
            self.set_parent(child, Some(parent))?;
        }
        Ok(children)
    }

    /// Creates a node holding `value` and attaches it below `parent`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn add_value(&mut self, parent: NodeId, value: V) -> TreeResult<NodeId> {
        self.node(parent)?;
        let child = self.new_node(value);
        self.add(parent, child)
    }

    pub fn add_values<I>(&mut self, parent: NodeId, values: I) -> TreeResult<Vec<NodeId>>
    where
        I: IntoIterator<Item = V>,
    {
        self.node(parent)?;
        values
            .into_iter()
            .map(|value| self.add_value(parent, value))
            .collect()
    }

    pub fn detach(&mut self, id: NodeId) -> TreeResult<()> {
        self.set_parent(id, None)
    }

    /// Detaches `id` and frees it together with everything reachable below
    /// it. Returns the payloads in depth-first order.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_subtree(&mut self, id: NodeId) -> TreeResult<Vec<V>> {
        self.detach(id)?;
        let doomed = self.descendants_list(id, SearchAlgo::DepthFirst);
        debug!("removing {} nodes below {:?}", doomed.len(), id);
        Ok(doomed
            .into_iter()
            .filter_map(|idx| self.arena.remove(idx))
            .map(|node| node.value)
            .collect())
    }

    /// All live nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<V>)> {
        self.arena.iter()
    }
}

/// Iterator over the strict ancestors of a node, see [`TreeArena::ancestors`].
pub struct Ancestors<'a, V> {
    arena: &'a TreeArena<V>,
    next: Option<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, V> Ancestors<'a, V> {
    fn new(arena: &'a TreeArena<V>, id: NodeId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(id);
        let next = arena.parent(id).filter(|&p| p != id);
        Self {
            arena,
            next,
            visited,
        }
    }
}

impl<'a, V> Iterator for Ancestors<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.visited.insert(current);
        let parent = self.arena.parent(current);
        self.next = parent.filter(|p| !self.visited.contains(p));
        Some(current)
    }
}
