//! Array-backed binary min-heap maintenance.
//!
//! Entries live contiguously from index 0. The parent of `i` is `(i - 1) / 2`
//! and its children are `2i + 1` and `2i + 2`.

use super::entry::Entry;

#[inline]
fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Move the entry at `index` toward the root while its parent is strictly
/// greater. Equal priorities are left in place.
pub(crate) fn sift_up<T>(entries: &mut [Entry<T>], mut index: usize) {
    while let Some(parent) = parent(index) {
        if entries[parent].priority <= entries[index].priority {
            break;
        }
        entries.swap(parent, index);
        index = parent;
    }
}

/// Move the entry at `index` toward the leaves while it is strictly greater
/// than its smaller child.
pub(crate) fn sift_down<T>(entries: &mut [Entry<T>], mut index: usize) {
    let len = entries.len();
    loop {
        let left = 2 * index + 1;
        if left >= len {
            return;
        }

        // The right child only takes part when it is occupied.
        let right = left + 1;
        let smaller = if right < len && entries[right].priority < entries[left].priority {
            right
        } else {
            left
        };

        if entries[index].priority <= entries[smaller].priority {
            return;
        }
        entries.swap(index, smaller);
        index = smaller;
    }
}

/// Check the min-heap property over every occupied parent/child pair.
pub(crate) fn is_heap<T>(entries: &[Entry<T>]) -> bool {
    (1..entries.len()).all(|i| entries[(i - 1) / 2].priority <= entries[i].priority)
}
