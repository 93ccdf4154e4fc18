//! Fuzz target: arbitrary insert/extract sequences.
//!
//! Checks the heap property after every step and that extraction order
//! matches a sorted reference model.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pqueue_core::PriorityQueue;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(i32),
    Extract,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity);
    let mut queue = match PriorityQueue::new(capacity) {
        Ok(queue) => queue,
        Err(_) => {
            assert_eq!(capacity, 0);
            return;
        }
    };
    let mut model: Vec<i32> = Vec::new();

    for (seq, op) in input.ops.into_iter().enumerate() {
        match op {
            Op::Insert(priority) => match queue.insert(seq, priority) {
                Ok(()) => model.push(priority),
                Err(rejected) => {
                    assert_eq!(model.len(), capacity);
                    assert_eq!(rejected.into_payload(), seq);
                }
            },
            Op::Extract => match queue.extract_entry() {
                Ok(entry) => {
                    model.sort_unstable();
                    assert_eq!(entry.priority, model.remove(0));
                }
                Err(_) => assert!(model.is_empty()),
            },
        }
        assert_eq!(queue.len(), model.len());
        assert!(queue.is_heap());
    }
});
