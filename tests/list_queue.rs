// List and Queue behavior suite.
//
// The companions share the library's conventions: items are opaque, the
// containers never interpret or free what items designate, and visitor
// callbacks stop at the first Break.

use core::ops::ControlFlow;
use fixed_table::{List, Queue};

// Test: append keeps order; a fresh list is empty.
#[test]
fn list_append_preserves_order() {
    let mut l: List<i32> = List::new();
    assert!(l.is_empty());
    for n in [3, 1, 4, 1, 5] {
        l.append(n);
    }
    assert_eq!(l.len(), 5);
    assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![3, 1, 4, 1, 5]);
    assert_eq!(l.get(2), Some(&4));
    assert_eq!(l.get(5), None);
}

// Test: insert_before shifts later items and targets the first occurrence
// of a repeated anchor; an absent anchor hands the item back unchanged.
#[test]
fn list_insert_before_semantics() {
    let mut l: List<&str> = List::new();
    l.append("b");
    l.append("c");
    l.append("b");

    l.insert_before("a", &"b").unwrap();
    assert_eq!(
        l.iter().copied().collect::<Vec<_>>(),
        vec!["a", "b", "c", "b"]
    );

    match l.insert_before("z", &"missing") {
        Err(returned) => assert_eq!(returned, "z"),
        Ok(()) => panic!("anchor should be absent"),
    }
    assert_eq!(l.len(), 4);
}

// Test: remove drops the first occurrence only and ignores absent items.
#[test]
fn list_remove_semantics() {
    let mut l: List<i32> = List::new();
    for n in [1, 2, 1, 3] {
        l.append(n);
    }
    assert_eq!(l.remove(&1), Some(1));
    assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(l.remove(&9), None);
    assert_eq!(l.len(), 3);
}

// Test: for_each early exit mirrors the table's walk contract.
#[test]
fn list_for_each_early_exit() {
    let mut l: List<i32> = List::new();
    for n in 0..10 {
        l.append(n);
    }

    let mut visited = 0;
    let out = l.for_each(|&n| {
        visited += 1;
        if n >= 4 {
            ControlFlow::Break(n)
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(out, Some(4));
    assert_eq!(visited, 5);
}

// Test: FIFO order with interleaved push/pop and duplicate items.
#[test]
fn queue_fifo_with_interleaving() {
    let mut q: Queue<u32> = Queue::new();
    assert!(q.is_empty());
    assert_eq!(q.pop(), None);

    q.push(1);
    q.push(2);
    assert_eq!(q.pop(), Some(1));
    q.push(2);
    q.push(3);

    // Duplicate 2s come out one at a time, in position order.
    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), Some(3));
    assert_eq!(q.pop(), None);
    assert!(q.is_empty());
}

// Test: the queue hands back the very references it was given.
#[test]
fn queue_items_are_opaque() {
    let payload = String::from("payload");
    let mut q: Queue<&String> = Queue::new();
    q.push(&payload);
    let out = q.pop().expect("one item");
    assert!(std::ptr::eq(out, &payload));
}
