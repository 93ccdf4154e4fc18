//! Tests for the fixed-capacity priority queue.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pqueue_core::{PriorityQueue, QueueError};

fn drain_priorities<T>(queue: &mut PriorityQueue<T>) -> Vec<i32> {
    let mut out = Vec::new();
    while let Ok(entry) = queue.extract_entry() {
        out.push(entry.priority);
    }
    out
}

fn heap_holds(queue: &PriorityQueue<u32>) -> bool {
    let entries = queue.entries();
    (0..entries.len()).all(|i| {
        [2 * i + 1, 2 * i + 2]
            .iter()
            .filter(|&&child| child < entries.len())
            .all(|&child| entries[i].priority <= entries[child].priority)
    })
}

#[test]
fn test_extracts_in_priority_order() {
    let mut queue = PriorityQueue::new(5).unwrap();
    queue.insert('A', 30).unwrap();
    queue.insert('B', 10).unwrap();
    queue.insert('C', 20).unwrap();
    queue.insert('D', 5).unwrap();
    queue.insert('E', 15).unwrap();

    let order: Vec<char> = (0..5).map(|_| queue.extract().unwrap()).collect();
    assert_eq!(order, vec!['D', 'B', 'E', 'C', 'A']);
    assert!(queue.is_empty());
}

#[test]
fn test_insert_into_full_queue_is_rejected() {
    let mut queue = PriorityQueue::new(2).unwrap();
    queue.insert("first", 1).unwrap();
    queue.insert("second", 2).unwrap();
    assert!(queue.is_full());

    let err = queue.insert("third", 0).unwrap_err();
    assert_eq!(err.capacity(), 2);
    assert_eq!(err.priority(), 0);
    assert_eq!(err.into_payload(), "third");

    assert!(queue.is_full());
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek_priority(), Some(1));
}

#[test]
fn test_rejected_payload_is_not_destroyed() {
    let released = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&released);
    let mut queue = PriorityQueue::with_destructor(1, move |name: String| {
        sink.lock().unwrap().push(name);
    })
    .unwrap();

    queue.insert("kept".to_string(), 1).unwrap();
    let rejected = queue.insert("rejected".to_string(), 0).unwrap_err().into_payload();
    assert_eq!(rejected, "rejected");

    queue.destroy();
    assert_eq!(*released.lock().unwrap(), vec!["kept".to_string()]);
}

#[test]
fn test_extract_from_empty_queue() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::new(3).unwrap();
    assert_eq!(queue.extract(), Err(QueueError::Empty));
    assert_eq!(queue.len(), 0);

    queue.insert(1, 1).unwrap();
    queue.extract().unwrap();
    assert_eq!(queue.extract(), Err(QueueError::Empty));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_zero_capacity_is_an_allocation_error() {
    let err = PriorityQueue::<()>::new(0).unwrap_err();
    assert!(matches!(err, QueueError::Allocation { capacity: 0, .. }));
}

#[test]
fn test_unreservable_capacity_is_an_allocation_error() {
    let err = PriorityQueue::<u64>::new(usize::MAX).unwrap_err();
    match err {
        QueueError::Allocation { capacity, reason } => {
            assert_eq!(capacity, usize::MAX);
            assert!(!reason.is_empty());
        }
        other => panic!("expected Allocation, got {:?}", other),
    }
}

#[test]
fn test_sift_down_with_single_left_child() {
    let mut queue = PriorityQueue::new(3).unwrap();
    queue.insert("five", 5).unwrap();
    queue.insert("three", 3).unwrap();
    queue.insert("four", 4).unwrap();

    // After removing the root, the new root has only a left child.
    assert_eq!(queue.extract().unwrap(), "three");
    assert!(queue.is_heap());
    assert_eq!(queue.extract().unwrap(), "four");
    assert_eq!(queue.extract().unwrap(), "five");
}

#[test]
fn test_two_element_queue_after_extract() {
    let mut queue = PriorityQueue::new(2).unwrap();
    queue.insert('x', 5).unwrap();
    queue.insert('y', 3).unwrap();
    assert_eq!(queue.extract().unwrap(), 'y');
    assert_eq!(queue.peek().map(|e| (e.payload, e.priority)), Some(('x', 5)));
}

#[test]
fn test_random_inserts_extract_sorted() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue = PriorityQueue::new(500).unwrap();
    let mut expected = Vec::new();

    for i in 0..500u32 {
        let priority = rng.gen_range(-1000..1000);
        expected.push(priority);
        queue.insert(i, priority).unwrap();
    }
    expected.sort_unstable();

    assert_eq!(drain_priorities(&mut queue), expected);
}

#[test]
fn test_heap_invariant_holds_across_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut queue = PriorityQueue::new(64).unwrap();

    for step in 0..2000u32 {
        if rng.gen_bool(0.6) && !queue.is_full() {
            queue.insert(step, rng.gen_range(0..32)).unwrap();
        } else if !queue.is_empty() {
            let min = queue.peek_priority().unwrap();
            let entry = queue.extract_entry().unwrap();
            assert_eq!(entry.priority, min);
        }
        assert!(heap_holds(&queue), "heap property broken at step {}", step);
    }
}

#[test]
fn test_duplicate_priorities() {
    let mut queue = PriorityQueue::new(6).unwrap();
    for (payload, priority) in [(1, 2), (2, 1), (3, 2), (4, 1), (5, 2), (6, 1)] {
        queue.insert(payload, priority).unwrap();
    }
    assert_eq!(drain_priorities(&mut queue), vec![1, 1, 1, 2, 2, 2]);
}

#[test]
fn test_negative_and_extreme_priorities() {
    let mut queue = PriorityQueue::new(4).unwrap();
    queue.insert("max", i32::MAX).unwrap();
    queue.insert("zero", 0).unwrap();
    queue.insert("min", i32::MIN).unwrap();
    queue.insert("neg", -1).unwrap();

    let order: Vec<&str> = (0..4).map(|_| queue.extract().unwrap()).collect();
    assert_eq!(order, vec!["min", "neg", "zero", "max"]);
}

#[test]
fn test_extracted_payload_is_the_inserted_value() {
    let boxed = Box::new(String::from("payload"));
    let address = &*boxed as *const String;

    let mut queue = PriorityQueue::new(1).unwrap();
    queue.insert(boxed, 1).unwrap();
    let back = queue.extract().unwrap();

    assert_eq!(&*back as *const String, address);
    assert_eq!(*back, "payload");
}

#[test]
fn test_destroy_releases_each_resident_payload_once() {
    let released = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&released);
    let mut queue = PriorityQueue::with_destructor(5, move |id: u32| {
        sink.lock().unwrap().push(id);
    })
    .unwrap();

    for id in 1..=5 {
        queue.insert(id, id as i32).unwrap();
    }
    let extracted = queue.extract().unwrap();
    assert_eq!(extracted, 1);

    assert_eq!(queue.destroy(), 4);

    let mut released = released.lock().unwrap().clone();
    released.sort_unstable();
    assert_eq!(released, vec![2, 3, 4, 5]);
}

#[test]
fn test_destroy_empty_queue_calls_nothing() {
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let queue = PriorityQueue::with_destructor(3, move |_: u8| {
        *counter.lock().unwrap() += 1;
    })
    .unwrap();

    assert_eq!(queue.destroy(), 0);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_queue_without_destructor_drops_residents() {
    let tracker = Arc::new(());
    let mut queue = PriorityQueue::new(3).unwrap();
    queue.insert(Arc::clone(&tracker), 1).unwrap();
    queue.insert(Arc::clone(&tracker), 2).unwrap();
    assert_eq!(Arc::strong_count(&tracker), 3);

    drop(queue);
    assert_eq!(Arc::strong_count(&tracker), 1);
}

#[test]
fn test_refill_after_drain() {
    let mut queue = PriorityQueue::new(3).unwrap();
    for round in 0..3 {
        for p in [9, 7, 8] {
            queue.insert(round, p).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(drain_priorities(&mut queue), vec![7, 8, 9]);
    }
}

#[test]
fn test_log_min_on_empty_and_non_empty() {
    let mut queue = PriorityQueue::new(2).unwrap();
    queue.log_min();
    queue.insert('q', 3).unwrap();
    queue.log_min();
    assert_eq!(queue.len(), 1);
}
