use std::collections::HashSet;
use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::arena::{NodeId, TreeArena};

/// Conversion of a subtree into a `termtree::Tree`, for callers that want
/// termtree's layout instead of [`TreeArena::tree`].
pub trait TreeNodeConvert {
    fn to_tree_string(&self, id: NodeId) -> Tree<String>;
}

impl<V: fmt::Display> TreeNodeConvert for TreeArena<V> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, id: NodeId) -> Tree<String> {
        let Some(value) = self.value(id) else {
            return Tree::new("Empty tree".to_string());
        };

        // one open subtree per level: (tree, node, next child position)
        let mut frames = vec![(Tree::new(value.to_string()), id, 0usize)];
        let mut visited = HashSet::from([id]);

        while let Some((_, node, cursor)) = frames.last_mut() {
            if let Some(&child_idx) = self.children(*node).get(*cursor) {
                *cursor += 1;
                // shared or cyclic links are printed once
                if visited.insert(child_idx) {
                    if let Some(child) = self.value(child_idx) {
                        frames.push((Tree::new(child.to_string()), child_idx, 0));
                    }
                }
                continue;
            }
            if frames.len() == 1 {
                break;
            }
            if let Some((done, _, _)) = frames.pop() {
                if let Some((parent_tree, _, _)) = frames.last_mut() {
                    parent_tree.push(done);
                }
            }
        }

        frames
            .pop()
            .map(|(tree, _, _)| tree)
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}
