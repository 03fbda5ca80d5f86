//! Indented text diagrams of a tree.
//!
//! ```text
//! 0
//! ├─── 1
//! ├─── 2
//! │    ├─── 3
//! │    └─── 4
//! └─── 5
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use colored::{Color, Colorize};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::arena::{NodeId, TreeArena};
use crate::errors::{TreeError, TreeResult};
use crate::traversal::SearchAlgo;

/// Glyph set used for the connectors. Unicode box drawing may not survive
/// every terminal encoding, ASCII always does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    Ascii,
    #[default]
    Unicode,
}

impl TreeStyle {
    pub fn plus(&self) -> &'static str {
        match self {
            TreeStyle::Ascii => "+",
            TreeStyle::Unicode => "├",
        }
    }

    pub fn vert(&self) -> &'static str {
        match self {
            TreeStyle::Ascii => "|",
            TreeStyle::Unicode => "│",
        }
    }

    pub fn end(&self) -> &'static str {
        match self {
            TreeStyle::Ascii => "\\",
            TreeStyle::Unicode => "└",
        }
    }

    pub fn hyphen(&self) -> &'static str {
        match self {
            TreeStyle::Ascii => "-",
            TreeStyle::Unicode => "─",
        }
    }
}

impl fmt::Display for TreeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStyle::Ascii => write!(f, "ascii"),
            TreeStyle::Unicode => write!(f, "unicode"),
        }
    }
}

impl FromStr for TreeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(TreeStyle::Ascii),
            "unicode" => Ok(TreeStyle::Unicode),
            other => Err(format!("unknown tree style: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: TreeStyle,
    /// Color applied to connector glyphs, None renders plain text
    pub color: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::Unicode,
            color: Some(Color::BrightYellow),
        }
    }
}

impl RenderOptions {
    pub fn plain(style: TreeStyle) -> Self {
        Self { style, color: None }
    }

    fn paint(&self, s: &str) -> String {
        match self.color {
            Some(color) => s.color(color).to_string(),
            None => s.to_string(),
        }
    }
}

impl<V: fmt::Display> TreeArena<V> {
    /// Renders `id` and its descendants, one node per line, each line
    /// terminated by a newline.
    pub fn tree(&self, id: NodeId, options: &RenderOptions) -> TreeResult<String> {
        let mut visited = HashSet::new();
        self.tree_marked(id, options, &mut visited)
    }

    /// Like [`TreeArena::tree`], recording every emitted node in `visited`.
    ///
    /// Nodes already in `visited` are left out, so a set shared between
    /// calls prints each node only once.
    #[instrument(level = "debug", skip(self, visited))]
    pub fn tree_marked(
        &self,
        id: NodeId,
        options: &RenderOptions,
        visited: &mut HashSet<NodeId>,
    ) -> TreeResult<String> {
        let root_value = self.value(id).ok_or(TreeError::NodeNotFound(id))?;
        let style = options.style;
        let hyphen = options.paint(&style.hyphen().repeat(3));

        visited.insert(id);
        let mut out = format!("{}\n", root_value);

        for node in self.descendants(id, SearchAlgo::DepthFirst).skip(1) {
            if !visited.insert(node) {
                continue;
            }
            let Some(value) = self.value(node) else {
                continue;
            };

            // ancestors up to and including the rendered root, nearest first
            let mut chain = Vec::new();
            for ancestor in self.ancestors(node) {
                chain.push(ancestor);
                if ancestor == id {
                    break;
                }
            }

            let head = match chain.first() {
                Some(&parent) if self.is_children_marked(parent, visited) => style.end(),
                _ => style.plus(),
            };

            let pre_head = chain
                .iter()
                .skip(1)
                .rev()
                .map(|&ancestor| {
                    if self.is_children_marked(ancestor, visited) {
                        "     ".to_string()
                    } else {
                        format!("{}    ", options.paint(style.vert()))
                    }
                })
                .join("");

            out.push_str(&format!(
                "{}{}{} {}\n",
                pre_head,
                options.paint(head),
                hyphen,
                value
            ));
        }
        Ok(out)
    }

    fn is_children_marked(&self, id: NodeId, visited: &HashSet<NodeId>) -> bool {
        self.children(id).iter().all(|c| visited.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node() {
        let mut tree = TreeArena::new();
        let n1 = tree.new_node(1);
        let rendered = tree.tree(n1, &RenderOptions::plain(TreeStyle::Unicode)).unwrap();
        assert_eq!(rendered, "1\n");
    }

    #[test]
    fn test_simple_tree() {
        let mut tree = TreeArena::new();
        let n1 = tree.new_node(1);
        tree.add_value(n1, 2).unwrap();
        let rendered = tree.tree(n1, &RenderOptions::plain(TreeStyle::Unicode)).unwrap();
        assert_eq!(rendered, "1\n└─── 2\n");
    }

    #[test]
    fn test_ascii_style() {
        let mut tree = TreeArena::new();
        let a = tree.new_node("a");
        let b = tree.add_value(a, "b").unwrap();
        tree.add_value(b, "c").unwrap();
        tree.add_value(a, "d").unwrap();
        let rendered = tree.tree(a, &RenderOptions::plain(TreeStyle::Ascii)).unwrap();
        assert_eq!(rendered, "a\n+--- b\n|    \\--- c\n\\--- d\n");
    }
}
