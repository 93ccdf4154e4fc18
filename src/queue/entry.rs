//! Queue entries.

/// Priority key. Lower values are extracted first.
pub type Priority = i32;

/// A payload stored in the queue together with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub payload: T,
    pub priority: Priority,
}

impl<T> Entry<T> {
    pub fn new(payload: T, priority: Priority) -> Self {
        Self { payload, priority }
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}
