mod common;

use rstest::rstest;
use rstree::{util::testing, SearchAlgo, TreeArena, TreeError};

use common::{documented_tree, large_int_tree, values, walk};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(SearchAlgo::DepthFirst, vec![0, 1, 2, 3, 4, 5, 6, 7])]
#[case(SearchAlgo::DepthFirstRecursive, vec![0, 1, 2, 3, 4, 5, 6, 7])]
#[case(SearchAlgo::BreadthFirst, vec![0, 1, 2, 3, 4, 7, 5, 6])]
fn given_documented_tree_when_walking_then_expected_order(
    #[case] algo: SearchAlgo,
    #[case] expected: Vec<i32>,
) {
    let (tree, root) = documented_tree();
    assert_eq!(walk(&tree, root, algo), expected);
}

#[test]
fn given_wide_then_deep_tree_when_breadth_first_then_levels_in_order() {
    let mut tree = TreeArena::new();
    let root = tree.new_node(0);
    let ids = tree.add_values(root, [1, 2, 3]).unwrap();
    let n4 = tree.add_value(ids[1], 4).unwrap();
    tree.add_value(n4, 5).unwrap();

    assert_eq!(
        walk(&tree, root, SearchAlgo::BreadthFirst),
        vec![0, 1, 2, 3, 4, 5]
    );
}

#[rstest]
#[case(SearchAlgo::DepthFirst)]
#[case(SearchAlgo::DepthFirstRecursive)]
fn given_deep_then_wide_tree_when_depth_first_then_preorder(#[case] algo: SearchAlgo) {
    let mut tree = TreeArena::new();
    let root = tree.new_node(0);
    let n1 = tree.add_value(root, 1).unwrap();
    let n2 = tree.add_value(n1, 2).unwrap();
    tree.add_values(n2, [3, 4]).unwrap();
    tree.add_value(root, 5).unwrap();

    assert_eq!(walk(&tree, root, algo), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn given_large_tree_when_comparing_depth_first_variants_then_same_order() {
    let (tree, ids) = large_int_tree();
    let iterative = walk(&tree, ids[0], SearchAlgo::DepthFirst);
    let recursive = walk(&tree, ids[0], SearchAlgo::DepthFirstRecursive);
    assert_eq!(iterative, recursive);
    assert_eq!(iterative, (0..20).collect::<Vec<_>>());
}

#[rstest]
#[case(SearchAlgo::BreadthFirst)]
#[case(SearchAlgo::DepthFirst)]
#[case(SearchAlgo::DepthFirstRecursive)]
fn given_tree_when_walking_twice_then_identical_results(#[case] algo: SearchAlgo) {
    let (tree, ids) = large_int_tree();
    let first = walk(&tree, ids[0], algo);
    let second = walk(&tree, ids[0], algo);
    assert_eq!(first.len(), 20);
    assert_eq!(first, second);
}

#[test]
fn given_subtree_start_when_walking_then_only_subtree_visited() {
    let (tree, ids) = large_int_tree();
    assert_eq!(
        walk(&tree, ids[12], SearchAlgo::DepthFirst),
        vec![12, 13, 14, 15, 16]
    );
    assert_eq!(walk(&tree, ids[19], SearchAlgo::BreadthFirst), vec![19]);
}

#[test]
fn given_tree_when_linking_back_then_cycle_reported_until_unlinked() {
    let mut tree = TreeArena::new();
    let n1 = tree.new_node(1);
    let n2 = tree.add_value(n1, 2).unwrap();

    assert!(!tree.has_cycle(n1).unwrap());

    tree.set_parent(n1, Some(n2)).unwrap();
    assert!(tree.has_cycle(n1).unwrap());
    assert!(tree.has_cycle(n2).unwrap());

    tree.set_parent(n1, None).unwrap();
    assert!(!tree.has_cycle(n1).unwrap());
}

#[rstest]
#[case(SearchAlgo::BreadthFirst)]
#[case(SearchAlgo::DepthFirst)]
#[case(SearchAlgo::DepthFirstRecursive)]
fn given_cycle_when_walking_then_each_node_once(#[case] algo: SearchAlgo) {
    let mut tree = TreeArena::new();
    let a = tree.new_node(1);
    let b = tree.add_value(a, 2).unwrap();
    let c = tree.add_value(b, 3).unwrap();
    tree.set_parent(a, Some(c)).unwrap();

    assert_eq!(walk(&tree, a, algo), vec![1, 2, 3]);
}

#[test]
fn given_self_loop_when_checking_then_cycle_at_self() {
    let mut tree = TreeArena::new();
    let a = tree.new_node(1);
    tree.set_parent(a, Some(a)).unwrap();

    let steps: Vec<_> = tree.depth_first_checked(a).collect();
    assert_eq!(steps.len(), 2);
    assert!(matches!(steps[0], Ok(id) if id == a));
    assert!(matches!(steps[1], Err(TreeError::CycleDetected(id)) if id == a));
}

#[test]
fn given_acyclic_tree_when_checked_walk_then_same_as_depth_first() {
    let (tree, root) = documented_tree();
    let checked: Vec<_> = tree
        .depth_first_checked(root)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values(&tree, &checked), walk(&tree, root, SearchAlgo::DepthFirst));
}
