#![allow(dead_code)]

use rstree::{NodeId, SearchAlgo, TreeArena};

/// Builds the integer tree (root 0, values 1 to 19) rendered in `resources/trees/large_int_tree.txt`.
///
/// Returns the arena and the node ids indexed by value.
pub fn large_int_tree() -> (TreeArena<i32>, Vec<NodeId>) {
    let mut tree = TreeArena::new();
    let mut ids = vec![tree.new_node(0)];
    // (value, parent value)
    let links = [
        (1, 0),
        (2, 0),
        (3, 2),
        (4, 2),
        (5, 4),
        (6, 4),
        (7, 2),
        (8, 7),
        (9, 0),
        (10, 9),
        (11, 9),
        (12, 0),
        (13, 12),
        (14, 12),
        (15, 14),
        (16, 15),
        (17, 0),
        (18, 17),
        (19, 0),
    ];
    for (value, parent) in links {
        let id = tree.add_value(ids[parent as usize], value).unwrap();
        ids.push(id);
    }
    (tree, ids)
}

//     0
//    / \
//   1   2
//     / | \
//    3  4  7
//      / \
//     5   6
pub fn documented_tree() -> (TreeArena<i32>, NodeId) {
    let mut tree = TreeArena::new();
    let root = tree.new_node(0);
    tree.add_value(root, 1).unwrap();
    let n2 = tree.add_value(root, 2).unwrap();
    tree.add_value(n2, 3).unwrap();
    let n4 = tree.add_value(n2, 4).unwrap();
    tree.add_values(n4, [5, 6]).unwrap();
    tree.add_value(n2, 7).unwrap();
    (tree, root)
}

pub fn values(tree: &TreeArena<i32>, ids: &[NodeId]) -> Vec<i32> {
    ids.iter().filter_map(|&id| tree.value(id).copied()).collect()
}

pub fn walk(tree: &TreeArena<i32>, root: NodeId, algo: SearchAlgo) -> Vec<i32> {
    values(tree, &tree.descendants_list(root, algo))
}
