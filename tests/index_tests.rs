//! Index Tests
//!
//! Tests for the BST-backed ordered index: insert, search, remove,
//! in-order traversal, and the deletion edge cases.

use catalogo::OrderedIndex;

// =============================================================================
// Insert / Search Tests
// =============================================================================

#[test]
fn test_insert_and_search() {
    let mut index = OrderedIndex::new();
    assert!(index.insert(101, "Mouse", 49.90));

    let record = index.search(101).expect("record should be present");
    assert_eq!(record.code, 101);
    assert_eq!(record.name, "Mouse");
    assert_eq!(record.price, 49.90);
}

#[test]
fn test_search_absent_code() {
    let mut index = OrderedIndex::new();
    index.insert(1, "Caneta", 3.50);
    assert!(index.search(2).is_none());
    assert!(index.search(-1).is_none());
}

#[test]
fn test_search_empty_index() {
    let index = OrderedIndex::new();
    assert!(index.search(42).is_none());
    assert!(index.is_empty());
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut index = OrderedIndex::new();
    assert!(index.insert(101, "Mouse", 49.90));
    assert!(!index.insert(101, "Teclado", 199.90));

    // The previously stored record is untouched
    let record = index.search(101).expect("record should be present");
    assert_eq!(record.name, "Mouse");
    assert_eq!(record.price, 49.90);
    assert_eq!(index.len(), 1);
}

#[test]
fn test_len_tracks_mutations() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 8] {
        index.insert(code, "Produto", 1.0);
    }
    assert_eq!(index.len(), 3);

    index.remove(3);
    assert_eq!(index.len(), 2);

    // Failed operations leave the count alone
    index.remove(3);
    index.insert(5, "Outro", 2.0);
    assert_eq!(index.len(), 2);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_present_then_absent() {
    let mut index = OrderedIndex::new();
    index.insert(101, "Mouse", 49.90);

    assert!(index.remove(101));
    assert!(index.search(101).is_none());
    assert!(!index.remove(101));
}

#[test]
fn test_remove_absent_leaves_tree_unchanged() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 8] {
        index.insert(code, "Produto", 1.0);
    }

    let before: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert!(!index.remove(42));
    let after: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(before, after);
}

#[test]
fn test_remove_leaf() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 8] {
        index.insert(code, "Produto", 1.0);
    }

    assert!(index.remove(3));
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![5, 8]);
}

#[test]
fn test_remove_node_with_only_left_child() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 2] {
        index.insert(code, "Produto", 1.0);
    }

    assert!(index.remove(3));
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![2, 5]);
    assert!(index.search(2).is_some());
}

#[test]
fn test_remove_node_with_only_right_child() {
    let mut index = OrderedIndex::new();
    for code in [5, 8, 9] {
        index.insert(code, "Produto", 1.0);
    }

    assert!(index.remove(8));
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![5, 9]);
}

#[test]
fn test_remove_node_with_two_children_takes_successor() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 8, 7, 9] {
        index.insert(code, "Produto", code as f64);
    }

    // 8 has children 7 and 9; its successor 9 replaces it
    assert!(index.remove(8));
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![3, 5, 7, 9]);

    // The successor kept its own payload
    let nine = index.search(9).expect("9 should remain");
    assert_eq!(nine.price, 9.0);
}

#[test]
fn test_remove_root_with_two_children() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 8, 1, 4, 7, 9] {
        index.insert(code, "Produto", 1.0);
    }

    assert!(index.remove(5));
    assert!(index.search(5).is_none());
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![1, 3, 4, 7, 8, 9]);
}

#[test]
fn test_remove_where_successor_has_right_child() {
    let mut index = OrderedIndex::new();
    // Successor of 5 is 6, which itself has a right child 7
    for code in [5, 3, 9, 6, 7] {
        index.insert(code, "Produto", 1.0);
    }

    assert!(index.remove(5));
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![3, 6, 7, 9]);
}

#[test]
fn test_drain_entire_tree() {
    let mut index = OrderedIndex::new();
    let codes = [5, 3, 8, 1, 4, 7, 9];
    for code in codes {
        index.insert(code, "Produto", 1.0);
    }

    for code in codes {
        assert!(index.remove(code), "failed to remove {code}");
    }
    assert!(index.is_empty());
    assert!(index.inorder().is_empty());
}

// =============================================================================
// In-order Traversal Tests
// =============================================================================

#[test]
fn test_inorder_yields_ascending_codes() {
    let mut index = OrderedIndex::new();
    for code in [5, 3, 8, 1, 4, 7, 9] {
        index.insert(code, "Produto", 1.0);
    }

    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn test_inorder_strictly_ascending_after_mixed_mutations() {
    let mut index = OrderedIndex::new();
    for code in [50, 25, 75, 10, 30, 60, 90, 5, 15, 27, 35] {
        index.insert(code, "Produto", 1.0);
    }
    index.remove(25); // two children
    index.remove(90); // leaf
    index.remove(50); // root, two children
    index.insert(26, "Produto", 1.0);

    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    for pair in codes.windows(2) {
        assert!(pair[0] < pair[1], "codes not strictly ascending: {codes:?}");
    }
}

#[test]
fn test_degenerate_insertion_order_still_correct() {
    // Ascending inserts produce a right spine; correctness holds even
    // though the height is O(n)
    let mut index = OrderedIndex::new();
    for code in 1..=64 {
        assert!(index.insert(code, "Produto", code as f64));
    }

    for code in 1..=64 {
        let record = index.search(code).expect("present");
        assert_eq!(record.price, code as f64);
    }
    let codes: Vec<i64> = index.inorder().iter().map(|r| r.code).collect();
    assert_eq!(codes, (1..=64).collect::<Vec<i64>>());
}
