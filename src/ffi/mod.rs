//! C ABI for the priority queue.
//!
//! Queues are addressed by `u64` handles and store opaque `void*` payloads.
//! Every fallible function returns a [`PqErrorCode`] and records a message
//! readable through [`pq_get_last_error`] on the calling thread.
//!
//! ```c
//! uint64_t q;
//! pq_create(10, free, &q);
//! pq_insert(q, strdup("job"), 3);
//! void *job;
//! if (pq_extract(q, &job) == 0) free(job);
//! pq_destroy(q);
//! ```

mod error;
mod queue;

pub use error::{pq_clear_last_error, pq_get_last_error, PqErrorCode};
pub use queue::{
    pq_create, pq_destroy, pq_extract, pq_insert, pq_is_empty, pq_is_full, pq_len, pq_peek,
    PqDestructor,
};
