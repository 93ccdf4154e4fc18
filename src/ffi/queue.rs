//! Queue lifecycle and operations for FFI.

use std::ffi::{c_int, c_void};
use std::sync::OnceLock;

use super::error::{set_last_error, PqErrorCode};
use crate::queue::{Destructor, QueueHandle, QueueRegistry};

/// Callback that frees a payload still resident when its queue is destroyed.
pub type PqDestructor = Option<unsafe extern "C" fn(*mut c_void)>;

/// Caller-owned pointer stored by the queue.
#[derive(Clone, Copy)]
struct RawPayload(*mut c_void);

// SAFETY: payloads are never dereferenced on the Rust side; they are only
// stored and handed back to the C caller or its destructor.
unsafe impl Send for RawPayload {}

fn registry() -> &'static QueueRegistry<RawPayload> {
    static REGISTRY: OnceLock<QueueRegistry<RawPayload>> = OnceLock::new();
    REGISTRY.get_or_init(QueueRegistry::new)
}

/// Create a queue holding at most `capacity` payloads.
///
/// `destructor` may be NULL, in which case payloads left in the queue at
/// destruction remain the caller's to free.
#[no_mangle]
pub unsafe extern "C" fn pq_create(
    capacity: c_int,
    destructor: PqDestructor,
    out_handle: *mut u64,
) -> PqErrorCode {
    if out_handle.is_null() {
        set_last_error("null pointer argument");
        return PqErrorCode::NullPointer;
    }
    if capacity <= 0 {
        set_last_error(format!("capacity must be positive, got {}", capacity));
        return PqErrorCode::InvalidCapacity;
    }

    let destructor = destructor.map(|del| -> Destructor<RawPayload> {
        Box::new(move |payload: RawPayload| unsafe { del(payload.0) })
    });

    match registry().create(capacity as usize, destructor) {
        Ok(handle) => {
            *out_handle = handle.id();
            PqErrorCode::Ok
        }
        Err(e) => e.into(),
    }
}

/// Destroy a queue, passing resident payloads to its destructor.
///
/// Destroying an unknown or already destroyed handle reports
/// `InvalidHandle` and frees nothing.
#[no_mangle]
pub extern "C" fn pq_destroy(handle: u64) -> PqErrorCode {
    match registry().destroy(QueueHandle::from_id(handle)) {
        Ok(_) => PqErrorCode::Ok,
        Err(e) => e.into(),
    }
}

/// Insert a payload. On `QueueFull` the payload stays with the caller.
#[no_mangle]
pub extern "C" fn pq_insert(handle: u64, payload: *mut c_void, priority: c_int) -> PqErrorCode {
    match registry().insert(QueueHandle::from_id(handle), RawPayload(payload), priority) {
        Ok(()) => PqErrorCode::Ok,
        Err(e) => crate::queue::QueueError::from(e).into(),
    }
}

/// Remove the minimum-priority payload. `*out_payload` is NULL on failure.
#[no_mangle]
pub unsafe extern "C" fn pq_extract(handle: u64, out_payload: *mut *mut c_void) -> PqErrorCode {
    if out_payload.is_null() {
        set_last_error("null pointer argument");
        return PqErrorCode::NullPointer;
    }
    *out_payload = std::ptr::null_mut();

    match registry().extract(QueueHandle::from_id(handle)) {
        Ok(payload) => {
            *out_payload = payload.0;
            PqErrorCode::Ok
        }
        Err(e) => e.into(),
    }
}

/// Read the minimum entry without removing it.
#[no_mangle]
pub unsafe extern "C" fn pq_peek(
    handle: u64,
    out_payload: *mut *mut c_void,
    out_priority: *mut c_int,
) -> PqErrorCode {
    if out_payload.is_null() || out_priority.is_null() {
        set_last_error("null pointer argument");
        return PqErrorCode::NullPointer;
    }

    match registry().peek(QueueHandle::from_id(handle)) {
        Ok(Some((payload, priority))) => {
            *out_payload = payload.0;
            *out_priority = priority;
            PqErrorCode::Ok
        }
        Ok(None) => crate::queue::QueueError::Empty.into(),
        Err(e) => e.into(),
    }
}

/// Number of resident payloads.
#[no_mangle]
pub unsafe extern "C" fn pq_len(handle: u64, out_len: *mut usize) -> PqErrorCode {
    if out_len.is_null() {
        set_last_error("null pointer argument");
        return PqErrorCode::NullPointer;
    }

    match registry().len(QueueHandle::from_id(handle)) {
        Ok(len) => {
            *out_len = len;
            PqErrorCode::Ok
        }
        Err(e) => e.into(),
    }
}

/// True if the queue is empty or the handle is invalid.
#[no_mangle]
pub extern "C" fn pq_is_empty(handle: u64) -> bool {
    registry().is_empty(QueueHandle::from_id(handle))
}

/// True if the queue is at capacity. False for an invalid handle.
#[no_mangle]
pub extern "C" fn pq_is_full(handle: u64) -> bool {
    registry().is_full(QueueHandle::from_id(handle))
}
