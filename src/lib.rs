//! pqueue-core
//!
//! A fixed-capacity binary min-heap priority queue for caller-owned payloads.
//!
//! # Ownership
//!
//! - `insert` moves the payload into the queue. A full queue refuses it and
//!   hands it back inside [`queue::FullError`].
//! - `extract` moves the minimum-priority payload back out to the caller.
//! - Payloads still resident at teardown go to the queue's destructor, once
//!   each, or are dropped when no destructor was given.
//!
//! # Concurrency
//!
//! A [`queue::PriorityQueue`] does no locking. Callers sharing one across
//! threads must synchronize externally; [`queue::QueueRegistry`] does so with
//! a mutex and is what the C ABI in [`ffi`] is built on.

pub mod config;
pub mod ffi;
pub mod queue;
pub mod telemetry;

pub use queue::{Entry, FullError, Priority, PriorityQueue, QueueConfig, QueueError};
