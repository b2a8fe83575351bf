use red_black_tree::{Color, RbTree};

fn valid(tree: &RbTree<i32>, step: &str) {
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after {step}: {err}");
    }
}

fn keys(tree: &RbTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

fn height_bound(n: usize) -> usize {
    (2.0 * ((n + 1) as f64).log2()).floor() as usize
}

#[test]
fn ascending_triple_rotates_left_at_root() {
    let mut tree = RbTree::new();
    for k in [10, 20, 30] {
        tree.insert(k);
        valid(&tree, &format!("insert({k})"));
    }

    let root = tree.root().expect("non-empty");
    assert_eq!(*root.key(), 20);
    assert_eq!(root.color(), Color::Black);

    let left = root.left().expect("left child");
    let right = root.right().expect("right child");
    assert_eq!((*left.key(), left.color()), (10, Color::Red));
    assert_eq!((*right.key(), right.color()), (30, Color::Red));
}

#[test]
fn two_child_delete_splices_successor() {
    let mut tree = RbTree::new();
    for k in [10, 20, 30, 15, 5] {
        tree.insert(k);
    }
    valid(&tree, "setup");

    let node = tree.search(&20).expect("20 present");
    assert!(node.left().is_some() && node.right().is_some());

    assert!(tree.delete(&20));
    valid(&tree, "delete(20)");
    assert_eq!(keys(&tree), vec![5, 10, 15, 30]);
    assert!(!tree.contains(&20));
}

#[test]
fn deleting_sole_node_empties_tree() {
    let mut tree = RbTree::new();
    tree.insert(42);
    assert!(tree.delete(&42));

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    for k in [-1, 0, 42, 1000] {
        assert!(tree.search(&k).is_none());
    }
    assert_eq!(tree.traverse().count(), 0);
    valid(&tree, "delete(42)");
}

#[test]
fn ascending_fifty_stays_within_height_bound() {
    let mut tree = RbTree::new();
    for k in 1..=50 {
        tree.insert(k);
        valid(&tree, &format!("insert({k})"));
        assert!(tree.height() <= height_bound(tree.len()));
    }
    // An unbalanced tree would have height 50.
    assert!(tree.height() <= height_bound(50));
    assert!(tree.height() < 50);
}

#[test]
fn deleting_absent_key_leaves_tree_untouched() {
    let mut tree: RbTree<i32> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
    let before: Vec<(i32, Color, usize)> = tree.traverse().map(|e| (*e.key, e.color, e.depth)).collect();

    assert!(!tree.delete(&5));
    assert!(!tree.delete(&100));

    let after: Vec<(i32, Color, usize)> = tree.traverse().map(|e| (*e.key, e.color, e.depth)).collect();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 9);
    valid(&tree, "absent deletes");
}

#[test]
fn duplicate_insert_is_a_no_op() {
    let mut tree = RbTree::new();
    assert!(tree.insert(7));
    let before: Vec<(i32, Color, usize)> = tree.traverse().map(|e| (*e.key, e.color, e.depth)).collect();
    assert!(!tree.insert(7));
    let after: Vec<(i32, Color, usize)> = tree.traverse().map(|e| (*e.key, e.color, e.depth)).collect();
    assert_eq!(before, after);

    assert!(tree.delete(&7));
    assert!(!tree.contains(&7));
}

#[test]
fn insert_delete_various_numbers_matrix() {
    let mut tree = RbTree::new();
    for k in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        tree.insert(k);
        valid(&tree, &format!("insert({k})"));
    }
    assert_eq!(tree.len(), 13);

    for (k, expected_len) in [(100, 12), (33, 11), (33, 11), (10, 10), (60, 9), (22, 8)] {
        tree.delete(&k);
        valid(&tree, &format!("delete({k})"));
        assert_eq!(tree.len(), expected_len);
    }
    assert_eq!(keys(&tree), vec![11, 12, 25, 50, 51, 55, 59, 88]);
}

#[test]
fn numbers_from_0_to_100_matrix() {
    let mut tree = RbTree::new();
    for i in 0..=100 {
        tree.insert(i);
        valid(&tree, &format!("insert({i})"));
        assert_eq!(tree.len(), (i + 1) as usize);
    }
    for i in 0..=100 {
        tree.delete(&i);
        valid(&tree, &format!("delete({i})"));
        assert_eq!(tree.len(), (100 - i) as usize);
    }
    assert!(tree.is_empty());
}

#[test]
fn numbers_from_100_to_11_matrix() {
    let mut tree = RbTree::new();
    for i in (11..=100).rev() {
        tree.insert(i);
        valid(&tree, &format!("insert({i})"));
    }
    for i in (11..=100).rev() {
        tree.delete(&i);
        valid(&tree, &format!("delete({i})"));
    }
    assert!(tree.is_empty());
}

#[test]
fn numbers_both_directions_from_50_matrix() {
    let mut tree = RbTree::new();
    for i in 1..=100 {
        tree.insert(50 + i);
        tree.insert(50 - i);
        valid(&tree, &format!("insert(50 ± {i})"));
        assert_eq!(tree.len(), (i * 2) as usize);
    }
    for i in 1..=100 {
        tree.delete(&(50 - i));
        tree.delete(&(50 + i));
        valid(&tree, &format!("delete(50 ± {i})"));
    }
    assert!(tree.is_empty());
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut tree = RbTree::new();
    for i in 0..200 {
        tree.insert(i);
        assert!(tree.contains(&i));
    }
    for i in (0..200).step_by(2) {
        assert!(tree.delete(&i));
        valid(&tree, &format!("delete({i})"));
    }
    assert_eq!(tree.len(), 100);
    for i in 0..200 {
        assert_eq!(tree.contains(&i), i % 2 == 1, "membership of {i}");
    }
}

#[test]
fn traversal_is_restartable_and_sorted() {
    let tree: RbTree<i32> = [5, 3, 9, 1, 4, 7, 11].into_iter().collect();
    let first: Vec<i32> = tree.traverse().map(|e| *e.key).collect();
    let second: Vec<i32> = tree.traverse().map(|e| *e.key).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 3, 4, 5, 7, 9, 11]);

    let root_entries: Vec<_> = tree.traverse().filter(|e| e.depth == 0).collect();
    assert_eq!(root_entries.len(), 1);
    assert_eq!(root_entries[0].color, Color::Black);

    // Every reported depth matches the node handle.
    for e in tree.traverse() {
        assert_eq!(tree.search(e.key).unwrap().depth(), e.depth);
    }
}

#[test]
fn string_keys_and_clear() {
    let mut tree = RbTree::new();
    for s in ["pear", "apple", "fig", "kiwi", "banana"] {
        tree.insert(s.to_string());
    }
    assert_eq!(tree.min().map(String::as_str), Some("apple"));
    assert_eq!(tree.max().map(String::as_str), Some("pear"));
    assert!(tree.delete(&"fig".to_string()));
    assert_eq!(
        tree.iter().cloned().collect::<Vec<_>>(),
        vec!["apple", "banana", "kiwi", "pear"]
    );
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.insert("again".to_string()));
    tree.assert_valid().unwrap();
}

#[test]
fn traversal_serializes_to_json() {
    let tree: RbTree<i32> = [10, 20, 30].into_iter().collect();
    let entries: Vec<_> = tree.traverse().collect();
    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"key": 10, "color": "RED", "depth": 1},
            {"key": 20, "color": "BLACK", "depth": 0},
            {"key": 30, "color": "RED", "depth": 1},
        ])
    );
}
