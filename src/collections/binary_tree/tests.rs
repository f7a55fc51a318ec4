#![cfg(test)]

use super::*;
use crate::util::alloc::{CountedDrop, KeyedDrop};

const DEGENERATE_LEN: u32 = 15_000;

/// Checks the ordering invariant at every node by walking the tree with the valid range for each
/// subtree.
fn assert_search_order<T: Ord + std::fmt::Debug>(tree: &SearchTree<T>) {
    let mut count = 0;
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
    stack.extend(tree.root.as_deref().map(|node| (node, None, None)));

    while let Some((node, lower, upper)) = stack.pop() {
        count += 1;
        if let Some(lower) = lower {
            assert!(lower < &node.value, "{:?} should be greater than {lower:?}", node.value);
        }
        if let Some(upper) = upper {
            assert!(&node.value < upper, "{:?} should be less than {upper:?}", node.value);
        }
        stack.extend(node.left.as_deref().map(|left| (left, lower, Some(&node.value))));
        stack.extend(node.right.as_deref().map(|right| (right, Some(&node.value), upper)));
    }

    assert_eq!(count, tree.len(), "The number of nodes should match the tree's length.");
}

#[test]
fn test_traverse_in_order() {
    let mut tree = SearchTree::new();
    for i in [5, 3, 8, 1, 4] {
        tree.insert(i).expect("no duplicates in input");
        assert_search_order(&tree);
    }

    let mut visited = Vec::new();
    assert_eq!(tree.traverse_in_order(|e| visited.push(*e)), Ok(()));
    assert_eq!(visited, [1, 3, 4, 5, 8], "Traversal should visit elements in ascending order.");
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), visited);
    assert_eq!(tree.iter().len(), 5);
}

#[test]
fn test_duplicate_insert() {
    let mut tree: SearchTree<_> = [5, 3, 8].into_iter().collect();

    assert_eq!(tree.insert(3), Err(DuplicateElement));
    assert_eq!(tree.insert(8), Err(DuplicateElement));
    assert_eq!(tree.len(), 3, "A rejected insert shouldn't change the length.");
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 8]);
    assert_search_order(&tree);
}

#[test]
fn test_duplicate_insert_drops_rejected_value() {
    let counter = CountedDrop::new(0);
    let mut tree = SearchTree::new();
    tree.insert(KeyedDrop::new(1, &counter)).expect("tree is empty");

    assert_eq!(tree.insert(KeyedDrop::new(1, &counter)), Err(DuplicateElement));
    assert_eq!(counter.count(), 1, "Only the rejected value should have been dropped.");
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_retrieve() {
    let tree: SearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();

    for i in [20, 30, 40, 50, 60, 70, 80] {
        assert_eq!(tree.retrieve(&i), Ok(&i));
        assert!(tree.contains(&i));
    }

    for missing in [10, 35, 65, 90] {
        assert_eq!(
            tree.retrieve(&missing),
            Err(RetrieveError::ElementNotFound(ElementNotFound)),
            "Searching for {missing} should run out of nodes."
        );
        assert!(!tree.contains(&missing));
    }
}

#[test]
fn test_retrieve_returns_stored_element() {
    let tree: SearchTree<String> = ["b", "a", "c"].into_iter().map(String::from).collect();

    let stored = tree.retrieve("a").expect("a was inserted");
    let first = tree.first().expect("tree isn't empty");
    assert!(
        std::ptr::eq(stored, first),
        "Retrieve should hand out a reference into the tree, not a copy."
    );
}

#[test]
fn test_empty_tree() {
    let tree = SearchTree::<u32>::new();
    let mut visited = 0;

    assert!(tree.retrieve(&1).is_err_and(|e| e.is_empty_collection()));
    assert_eq!(tree.traverse_in_order(|_| visited += 1), Err(EmptyCollection));
    assert_eq!(visited, 0, "Visit shouldn't be called on an empty tree.");
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_first_last_height() {
    let tree: SearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&8));
    assert_eq!(tree.height(), 3);

    let chain: SearchTree<_> = (0..10).collect();
    assert_eq!(chain.height(), 10, "Sorted input should produce a single chain of nodes.");
}

#[test]
fn test_clone() {
    let mut tree: SearchTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    let copy = tree.clone();

    assert_eq!(copy, tree, "A clone should hold the same elements.");
    assert_eq!(copy.height(), tree.height(), "Pre-order reinsertion should keep the shape.");
    assert_search_order(&copy);

    tree.insert(6).expect("6 isn't in the tree");
    assert_ne!(copy, tree, "Mutating the original shouldn't affect a clone.");
    assert!(!copy.contains(&6));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut tree = SearchTree::new();
    for key in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
        tree.insert(KeyedDrop::new(key, &counter)).expect("no duplicates in input");
    }

    drop(tree);
    assert_eq!(counter.count(), 9, "Every node should be released exactly once.");

    let counter = CountedDrop::new(0);
    let mut tree: SearchTree<_> = (0..20).map(|key| KeyedDrop::new(key, &counter)).collect();
    tree.clear();
    assert_eq!(counter.count(), 20, "Clearing should release every node.");
    assert!(tree.is_empty());
    assert!(tree.retrieve(&KeyedDrop::new(3, &counter)).is_err_and(|e| e.is_empty_collection()));
}

#[test]
fn test_into_iter() {
    let tree: SearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    let mut iter = tree.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), [4, 5, 8]);

    let counter = CountedDrop::new(0);
    let tree: SearchTree<_> = [5, 3, 8, 1, 4]
        .into_iter()
        .map(|key| KeyedDrop::new(key, &counter))
        .collect();
    let mut iter = tree.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.count(), 5, "Dropping a partly used iterator should drop the rest.");
}

#[test]
fn test_degenerate_tree() {
    let mut tree = SearchTree::new();
    for i in 0..DEGENERATE_LEN {
        tree.insert(i).expect("no duplicates in input");
    }
    assert_eq!(tree.height(), DEGENERATE_LEN as usize);

    let mut expected = 0;
    tree.traverse_in_order(|e| {
        assert_eq!(*e, expected);
        expected += 1;
    })
    .expect("tree isn't empty");
    assert_eq!(expected, DEGENERATE_LEN);

    let copy = tree.clone();
    assert_eq!(copy.len(), tree.len());
    drop(copy);

    let remaining: u32 = tree.into_iter().take(10).sum();
    assert_eq!(remaining, 45);
}

#[test]
fn test_display() {
    let tree: SearchTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
    assert_eq!(
        format!("{tree:?}"),
        "SearchTree { elements: [1, 2, 3], len: 3, height: 2 }"
    );
}

#[test]
fn test_retrieve_error_message() {
    let tree = SearchTree::<u32>::new();
    let error = tree.retrieve(&1).expect_err("tree is empty");
    assert_eq!(error.to_string(), EmptyCollection.to_string());

    let tree: SearchTree<_> = [1].into_iter().collect();
    let error = tree.retrieve(&2).expect_err("2 isn't in the tree");
    assert_eq!(error.to_string(), "Element does not exist in the collection!");
}
