//! Property-based tests for the heap and priority queue.
//!
//! These tests generate random sequences of operations and check that the heap order holds after
//! each one, comparing the results against a plain sorted vector.

#![cfg(feature = "priority")]

use adt_collections::collections::EmptyCollection;
use adt_collections::collections::heap::MinHeap;
use adt_collections::collections::priority::PriorityQueue;
use proptest::prelude::*;

/// Checks that every element in the heap's storage is no smaller than its parent.
fn check_heap_order(heap: &MinHeap<i32>) -> Result<(), TestCaseError> {
    let slice = heap.as_slice();
    for child in 1..slice.len() {
        let parent = (child - 1) / 2;
        prop_assert!(
            slice[parent] <= slice[child],
            "Element {} at {} is smaller than its parent {} at {}",
            slice[child],
            child,
            slice[parent],
            parent
        );
    }
    Ok(())
}

fn ops_strategy() -> impl Strategy<Value = Vec<(bool, i32)>> {
    prop::collection::vec((any::<bool>(), -100i32..100), 0..200)
}

proptest! {
    #[test]
    fn test_heap_order_invariant(ops in ops_strategy()) {
        let mut heap = MinHeap::new();
        let mut inserted: Vec<i32> = Vec::new();

        for (should_remove, value) in ops {
            if should_remove {
                let expected = inserted.iter().min().copied();
                match heap.remove_min() {
                    Ok(removed) => {
                        prop_assert_eq!(Some(removed), expected);
                        let pos = inserted.iter().position(|&e| e == removed);
                        prop_assert!(pos.is_some());
                        inserted.swap_remove(pos.unwrap_or_default());
                    },
                    Err(e) => {
                        prop_assert_eq!(e, EmptyCollection);
                        prop_assert!(inserted.is_empty());
                    },
                }
            } else {
                heap.insert(value);
                inserted.push(value);
            }

            check_heap_order(&heap)?;
            prop_assert_eq!(heap.len(), inserted.len());
            prop_assert_eq!(heap.peek_min().ok(), inserted.iter().min());
        }
    }

    #[test]
    fn test_heap_removal_order(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let mut heap: MinHeap<_> = values.iter().copied().collect();
        let mut sorted = values.clone();
        sorted.sort();

        let mut removed = Vec::with_capacity(values.len());
        while let Ok(value) = heap.remove_min() {
            removed.push(value);
        }
        prop_assert_eq!(removed, sorted);
        prop_assert!(heap.is_empty());
    }

    #[test]
    fn test_from_vec_heapifies(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let heap = MinHeap::from_vec(values.clone());
        check_heap_order(&heap)?;
        prop_assert_eq!(heap.len(), values.len());

        let mut sorted = values;
        sorted.sort();
        prop_assert_eq!(heap.into_sorted_vec(), sorted);
    }

    #[test]
    fn test_priority_queue_order(values in prop::collection::vec(-100i32..100, 0..200)) {
        let mut queue = PriorityQueue::new();
        for value in &values {
            queue.enqueue(*value);
        }
        prop_assert_eq!(queue.peek().ok(), values.iter().min());

        let mut sorted = values;
        sorted.sort();
        let mut dequeued = Vec::new();
        while let Ok(value) = queue.dequeue() {
            dequeued.push(value);
        }
        prop_assert_eq!(dequeued, sorted);
        prop_assert_eq!(queue.dequeue(), Err(EmptyCollection));
    }
}
