//! Fixed-capacity priority queue.

use std::fmt;

use super::entry::{Entry, Priority};
use super::error::{FullError, QueueError};
use super::heap;

/// Callback that takes ownership of payloads still resident at teardown.
pub type Destructor<T> = Box<dyn FnMut(T) + Send>;

/// Configuration for a priority queue.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Maximum number of resident entries. Must be positive.
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { capacity: 10 }
    }
}

/// Binary min-heap of payloads with a fixed capacity.
///
/// The entry with the lowest priority is extracted first. Equal priorities
/// come out in no particular order.
///
/// Storage for `capacity` entries is reserved up front and never grows.
/// Inserting into a full queue hands the payload back; extracting from an
/// empty queue returns [`QueueError::Empty`].
///
/// Payloads still resident when the queue is destroyed (or dropped) are
/// passed to the destructor, if one was supplied, exactly once each.
/// Without a destructor they are dropped normally.
///
/// The queue does no locking of its own. Share it between threads only
/// behind external synchronization, e.g. [`QueueRegistry`](super::QueueRegistry).
pub struct PriorityQueue<T> {
    entries: Vec<Entry<T>>,
    capacity: usize,
    destructor: Option<Destructor<T>>,
}

impl<T> PriorityQueue<T> {
    /// Create a queue with no destructor.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::build(capacity, None)
    }

    /// Create a queue whose resident payloads are released through
    /// `destructor` at teardown.
    pub fn with_destructor<F>(capacity: usize, destructor: F) -> Result<Self, QueueError>
    where
        F: FnMut(T) + Send + 'static,
    {
        Self::build(capacity, Some(Box::new(destructor)))
    }

    pub fn from_config(config: &QueueConfig) -> Result<Self, QueueError> {
        Self::new(config.capacity)
    }

    pub(crate) fn build(
        capacity: usize,
        destructor: Option<Destructor<T>>,
    ) -> Result<Self, QueueError> {
        if capacity == 0 {
            tracing::warn!("priority queue rejected: capacity must be positive");
            return Err(QueueError::Allocation {
                capacity,
                reason: "capacity must be positive".to_string(),
            });
        }

        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity).map_err(|e| {
            tracing::warn!(capacity, error = %e, "priority queue storage reservation failed");
            QueueError::Allocation { capacity, reason: e.to_string() }
        })?;

        tracing::debug!(capacity, has_destructor = destructor.is_some(), "priority queue created");
        Ok(Self { entries, capacity, destructor })
    }

    /// Insert a payload, taking ownership of it.
    ///
    /// A full queue rejects the payload and returns it inside the error.
    pub fn insert(&mut self, payload: T, priority: Priority) -> Result<(), FullError<T>> {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, priority, "insert rejected: queue is full");
            return Err(FullError::new(payload, priority, self.capacity));
        }

        // Within the reserved capacity: never reallocates.
        self.entries.push(Entry::new(payload, priority));
        let last = self.entries.len() - 1;
        heap::sift_up(&mut self.entries, last);
        Ok(())
    }

    /// Remove the minimum-priority payload and give it to the caller.
    pub fn extract(&mut self) -> Result<T, QueueError> {
        self.extract_entry().map(Entry::into_payload)
    }

    /// Remove the minimum-priority entry, keeping its priority.
    pub fn extract_entry(&mut self) -> Result<Entry<T>, QueueError> {
        if self.entries.is_empty() {
            tracing::debug!("extract rejected: queue is empty");
            return Err(QueueError::Empty);
        }

        // Last entry fills the root, then sinks.
        let root = self.entries.swap_remove(0);
        heap::sift_down(&mut self.entries, 0);
        Ok(root)
    }

    /// Minimum entry without removing it.
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    pub fn peek_priority(&self) -> Option<Priority> {
        self.peek().map(|e| e.priority)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Resident entries in heap order (index 0 is the minimum).
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Whether the min-heap property currently holds.
    pub fn is_heap(&self) -> bool {
        heap::is_heap(&self.entries)
    }

    /// Tear the queue down, passing resident payloads to the destructor.
    ///
    /// Returns how many payloads were resident.
    pub fn destroy(mut self) -> usize {
        let released = self.release_resident();
        tracing::debug!(capacity = self.capacity, released, "priority queue destroyed");
        released
    }

    fn release_resident(&mut self) -> usize {
        let resident = self.entries.len();
        if let Some(destructor) = self.destructor.as_mut() {
            for entry in self.entries.drain(..) {
                destructor(entry.payload);
            }
        } else {
            self.entries.clear();
        }
        resident
    }
}

impl<T: fmt::Debug> PriorityQueue<T> {
    /// Emit the current minimum as a debug event.
    pub fn log_min(&self) {
        match self.peek() {
            Some(entry) => tracing::debug!(
                priority = entry.priority,
                payload = ?entry.payload,
                len = self.entries.len(),
                "queue minimum"
            ),
            None => tracing::debug!("queue minimum: queue is empty"),
        }
    }
}

impl<T> Drop for PriorityQueue<T> {
    fn drop(&mut self) {
        self.release_resident();
    }
}

impl<T> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("min_priority", &self.peek_priority())
            .field("has_destructor", &self.destructor.is_some())
            .finish()
    }
}
