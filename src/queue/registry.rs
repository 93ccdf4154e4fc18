//! Handle-based queue registry.
//!
//! Queues are owned by the registry and addressed through opaque
//! [`QueueHandle`] ids, so operations on a destroyed or unknown queue are
//! reported as [`QueueError::InvalidHandle`] instead of touching freed state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::entry::Priority;
use super::error::{InsertError, QueueError};
use super::priority::{Destructor, PriorityQueue};

/// Opaque handle to a registered queue. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueHandle(u64);

impl QueueHandle {
    pub fn from_id(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Thread-safe table of queues.
///
/// Each call locks the table for its duration and no caller code runs while
/// the lock is held. Destructors run after the lock is released, so a
/// destructor may call back into the registry.
pub struct QueueRegistry<T> {
    queues: Mutex<HashMap<QueueHandle, PriorityQueue<T>>>,
    next_id: AtomicU64,
}

impl<T> QueueRegistry<T> {
    pub fn new() -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a queue and return its handle.
    pub fn create(
        &self,
        capacity: usize,
        destructor: Option<Destructor<T>>,
    ) -> Result<QueueHandle, QueueError> {
        let queue = PriorityQueue::build(capacity, destructor)?;
        let handle = QueueHandle(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.queues.lock().insert(handle, queue);
        Ok(handle)
    }

    /// Destroy a queue, returning how many payloads were still resident.
    pub fn destroy(&self, handle: QueueHandle) -> Result<usize, QueueError> {
        let queue = self.queues.lock().remove(&handle);
        match queue {
            Some(queue) => Ok(queue.destroy()),
            None => {
                tracing::warn!(handle = handle.0, "destroy rejected: invalid queue handle");
                Err(QueueError::InvalidHandle(handle.0))
            }
        }
    }

    pub fn insert(
        &self,
        handle: QueueHandle,
        payload: T,
        priority: Priority,
    ) -> Result<(), InsertError<T>> {
        let mut queues = self.queues.lock();
        match queues.get_mut(&handle) {
            Some(queue) => queue.insert(payload, priority).map_err(InsertError::Full),
            None => {
                tracing::warn!(handle = handle.0, "insert rejected: invalid queue handle");
                Err(InsertError::InvalidHandle { handle, payload })
            }
        }
    }

    pub fn extract(&self, handle: QueueHandle) -> Result<T, QueueError> {
        self.with_queue(handle, PriorityQueue::extract)?
    }

    /// Priority of the minimum entry, `None` when the queue is empty.
    pub fn peek_priority(&self, handle: QueueHandle) -> Result<Option<Priority>, QueueError> {
        self.with_queue(handle, |queue| queue.peek_priority())
    }

    /// Copy of the minimum payload and its priority, `None` when the queue is empty.
    pub fn peek(&self, handle: QueueHandle) -> Result<Option<(T, Priority)>, QueueError>
    where
        T: Copy,
    {
        self.with_queue(handle, |queue| {
            queue.peek().map(|entry| (entry.payload, entry.priority))
        })
    }

    pub fn len(&self, handle: QueueHandle) -> Result<usize, QueueError> {
        self.with_queue(handle, |queue| queue.len())
    }

    /// True when the queue is empty or the handle is invalid.
    pub fn is_empty(&self, handle: QueueHandle) -> bool {
        self.queues.lock().get(&handle).map_or(true, PriorityQueue::is_empty)
    }

    /// True when the queue is at capacity. False for an invalid handle.
    pub fn is_full(&self, handle: QueueHandle) -> bool {
        self.queues.lock().get(&handle).map_or(false, PriorityQueue::is_full)
    }

    pub fn contains(&self, handle: QueueHandle) -> bool {
        self.queues.lock().contains_key(&handle)
    }

    /// Number of live queues.
    pub fn count(&self) -> usize {
        self.queues.lock().len()
    }

    // `f` runs under the lock: it must not drop a queue or its payloads.
    fn with_queue<R, F>(&self, handle: QueueHandle, f: F) -> Result<R, QueueError>
    where
        F: FnOnce(&mut PriorityQueue<T>) -> R,
    {
        let mut queues = self.queues.lock();
        match queues.get_mut(&handle) {
            Some(queue) => Ok(f(queue)),
            None => {
                tracing::warn!(handle = handle.0, "operation rejected: invalid queue handle");
                Err(QueueError::InvalidHandle(handle.0))
            }
        }
    }
}

impl<T> Default for QueueRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
