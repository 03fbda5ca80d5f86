//! Generic in-memory trees.
//!
//! Nodes live in a [`TreeArena`] and are addressed by [`NodeId`]. The arena
//! keeps parent and child links consistent, walks a tree breadth-first or
//! depth-first, detects cycles, renders indented diagrams and can grow a
//! tree on demand from payloads implementing [`LazyTreeNode`].
//!
//! ```
//! use rstree::{RenderOptions, SearchAlgo, TreeArena, TreeStyle};
//!
//! let mut tree = TreeArena::new();
//! let root = tree.new_node(0);
//! tree.add_value(root, 1).unwrap();
//! let n2 = tree.add_value(root, 2).unwrap();
//! tree.add_value(n2, 3).unwrap();
//!
//! let order: Vec<i32> = tree
//!     .descendants(root, SearchAlgo::DepthFirst)
//!     .filter_map(|id| tree.value(id).copied())
//!     .collect();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//!
//! let text = tree.tree(root, &RenderOptions::plain(TreeStyle::Ascii)).unwrap();
//! assert_eq!(text, "0\n+--- 1\n\\--- 2\n     \\--- 3\n");
//! ```

pub mod arena;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod file_node;
pub mod lazy;
pub mod render;
pub mod traversal;
pub mod tree_traits;
pub mod util;

pub use arena::{Ancestors, NodeId, TreeArena, TreeNode};
pub use errors::{TreeError, TreeResult};
pub use file_node::FileNode;
pub use lazy::{FillLimits, LazyTreeNode, DEFAULT_MAX_ENTRY};
pub use render::{RenderOptions, TreeStyle};
pub use traversal::{Descendants, SearchAlgo};
pub use tree_traits::TreeNodeConvert;
