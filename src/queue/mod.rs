//! Fixed-capacity priority queue.
//!
//! A binary min-heap over a contiguous buffer, plus a handle registry for
//! callers that address queues by id (including the C ABI).

mod entry;
mod error;
mod heap;
mod priority;
mod registry;

pub use entry::{Entry, Priority};
pub use error::{FullError, InsertError, QueueError};
pub use priority::{Destructor, PriorityQueue, QueueConfig};
pub use registry::{QueueHandle, QueueRegistry};
