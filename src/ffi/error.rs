//! Error codes and last-error reporting for the C ABI.

use std::cell::RefCell;
use std::ffi::{c_char, CString};

use crate::queue::QueueError;

/// Result code returned by every fallible C function.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PqErrorCode {
    Ok = 0,
    NullPointer = -1,
    InvalidCapacity = -2,
    AllocationFailed = -3,
    QueueFull = -4,
    QueueEmpty = -5,
    InvalidHandle = -6,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Record the message returned by `pq_get_last_error` on this thread.
pub(crate) fn set_last_error(msg: impl Into<String>) {
    let msg = msg.into().replace('\0', " ");
    let msg = CString::new(msg).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(msg));
}

/// Last error message on the calling thread, or NULL if none.
///
/// The pointer stays valid until the next failing call or
/// `pq_clear_last_error` on the same thread.
#[no_mangle]
pub extern "C" fn pq_get_last_error() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |msg| msg.as_ptr())
    })
}

#[no_mangle]
pub extern "C" fn pq_clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

impl From<QueueError> for PqErrorCode {
    fn from(err: QueueError) -> Self {
        set_last_error(err.to_string());
        match err {
            QueueError::Allocation { .. } => Self::AllocationFailed,
            QueueError::Full { .. } => Self::QueueFull,
            QueueError::Empty => Self::QueueEmpty,
            QueueError::InvalidHandle(_) => Self::InvalidHandle,
        }
    }
}
