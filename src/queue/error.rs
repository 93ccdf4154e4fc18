//! Queue error types.
//!
//! All errors are fail-closed: a rejected operation leaves the queue
//! unchanged, and a rejected payload is handed back to the caller.

use std::fmt;

use thiserror::Error;

use super::entry::Priority;
use super::registry::QueueHandle;

/// Errors reported by queue and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Could not reserve storage for {capacity} entries: {reason}")]
    Allocation { capacity: usize, reason: String },

    #[error("Queue full: {capacity}/{capacity} entries")]
    Full { capacity: usize },

    #[error("Queue is empty")]
    Empty,

    #[error("Invalid queue handle: {0}")]
    InvalidHandle(u64),
}

impl QueueError {
    /// Returns true for back-pressure conditions the caller is expected to
    /// handle (drain, retry, grow), as opposed to misuse or resource failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Full { .. } | Self::Empty)
    }
}

/// Insertion rejected because the queue is at capacity.
///
/// Ownership of the payload stays with the caller: it is carried back inside
/// the error and can be recovered with [`FullError::into_payload`].
#[derive(Error)]
#[error("queue is full ({capacity} entries), rejected priority {priority}")]
pub struct FullError<T> {
    payload: T,
    priority: Priority,
    capacity: usize,
}

impl<T> FullError<T> {
    pub(crate) fn new(payload: T, priority: Priority, capacity: usize) -> Self {
        Self { payload, priority, capacity }
    }

    /// Priority the rejected payload was offered with.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Capacity of the queue that rejected the payload.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Take the rejected payload back.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T> fmt::Debug for FullError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullError")
            .field("priority", &self.priority)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// Converting drops the rejected payload.
impl<T> From<FullError<T>> for QueueError {
    fn from(err: FullError<T>) -> Self {
        Self::Full { capacity: err.capacity }
    }
}

/// Insertion through a [`QueueRegistry`](super::QueueRegistry) rejected.
///
/// Both variants give the payload back.
#[derive(Error)]
pub enum InsertError<T> {
    #[error("{0}")]
    Full(FullError<T>),

    #[error("invalid queue handle: {}", .handle.id())]
    InvalidHandle { handle: QueueHandle, payload: T },
}

impl<T> InsertError<T> {
    pub fn into_payload(self) -> T {
        match self {
            Self::Full(err) => err.into_payload(),
            Self::InvalidHandle { payload, .. } => payload,
        }
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(err) => f.debug_tuple("Full").field(err).finish(),
            Self::InvalidHandle { handle, .. } => f
                .debug_struct("InvalidHandle")
                .field("handle", handle)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> From<InsertError<T>> for QueueError {
    fn from(err: InsertError<T>) -> Self {
        match err {
            InsertError::Full(full) => full.into(),
            InsertError::InvalidHandle { handle, .. } => Self::InvalidHandle(handle.id()),
        }
    }
}
