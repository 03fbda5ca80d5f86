//! Trees built on demand.
//!
//! A payload implementing [`LazyTreeNode`] knows how to produce its own
//! children. [`TreeArena::fill_tree`] expands such a tree from a root,
//! bounded by [`FillLimits`].

use tracing::{debug, instrument, trace};

use crate::arena::{NodeId, TreeArena};
use crate::errors::{TreeError, TreeResult};

/// Default cap on the number of nodes created by one fill.
pub const DEFAULT_MAX_ENTRY: usize = 2000;

pub trait LazyTreeNode: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether this node still has children to produce.
    ///
    /// The default asks [`LazyTreeNode::fill_child_nodes`]; a failure counts
    /// as fillable so that it surfaces from the fill itself.
    fn has_child_nodes_to_fill(&self) -> bool {
        self.fill_child_nodes()
            .map_or(true, |children| !children.is_empty())
    }

    /// Produces the payloads of this node's children, in display order.
    fn fill_child_nodes(&self) -> Result<Vec<Self>, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillLimits {
    /// Nodes at this arena depth or deeper are not expanded
    pub max_depth: usize,
    /// Expansion stops once this many nodes exist, counting the root.
    /// Checked after each expansion, so the last batch may overshoot.
    pub max_entry: usize,
}

impl Default for FillLimits {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            max_entry: DEFAULT_MAX_ENTRY,
        }
    }
}

impl FillLimits {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_entry(mut self, max_entry: usize) -> Self {
        self.max_entry = max_entry;
        self
    }
}

impl<V: LazyTreeNode> TreeArena<V> {
    /// Expands `root` in place and returns it.
    ///
    /// Uses an explicit stack, so the most recently produced batch is
    /// expanded first. A failing expansion aborts the fill with
    /// [`TreeError::Fill`]; nodes attached before the failure stay attached.
    #[instrument(level = "debug", skip(self))]
    pub fn fill_tree(&mut self, root: NodeId, limits: FillLimits) -> TreeResult<NodeId> {
        let root_value = self.value(root).ok_or(TreeError::NodeNotFound(root))?;
        if !root_value.has_child_nodes_to_fill() {
            return Ok(root);
        }

        let mut stack = vec![root];
        let mut n_entry = 1;

        while let Some(node) = stack.pop() {
            let Some(value) = self.value(node) else {
                continue;
            };
            if !value.has_child_nodes_to_fill() || self.depth(node) >= limits.max_depth {
                continue;
            }

            let children = value.fill_child_nodes().map_err(|e| TreeError::Fill {
                node,
                source: Box::new(e),
            })?;
            trace!("filled {} children below {:?}", children.len(), node);

            let added = self.add_values(node, children)?;
            n_entry += added.len();
            stack.extend(added);

            if n_entry >= limits.max_entry {
                debug!("fill stopped at {} entries", n_entry);
                break;
            }
        }

        Ok(root)
    }
}
