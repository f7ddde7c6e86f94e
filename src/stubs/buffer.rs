//! Direct byte buffer stubs.
//!
//! The buffer handle is the address of a small [`DirectBuffer`] record. The
//! record never copies or owns the memory it describes.

use std::ffi::c_void;
use std::os::raw::c_int;
use std::ptr;

use super::arena;
use crate::sys::jni;

/// Capacity reported for a null buffer handle.
pub const NULL_CAPACITY: jni::jlong = -1;

/// The record behind a mock direct buffer handle.
#[repr(C)]
#[derive(Debug)]
pub struct DirectBuffer {
    pub ptr: *mut u8,
    pub len: c_int,
}

/// `NewDirectByteBuffer`: records `address` and `capacity`. Capacity is
/// narrowed to a C `int`; anything wider is truncated.
///
/// # Safety
///
/// `env` must be null or a handle produced by [`crate::MockEnv`]. Any other
/// handle is read one word past its table pointer.
pub unsafe extern "system" fn new_direct_byte_buffer(
    env: *mut jni::JNIEnv,
    address: *mut c_void,
    capacity: jni::jlong,
) -> jni::jobject {
    if capacity > c_int::MAX as jni::jlong || capacity < c_int::MIN as jni::jlong {
        log::warn!("NewDirectByteBuffer: capacity {capacity} does not fit a 32-bit int");
    }
    log::trace!("NewDirectByteBuffer({address:p}, {capacity})");

    let record = DirectBuffer {
        ptr: address as *mut u8,
        len: capacity as c_int,
    };
    let handle = match arena(env) {
        Some(arena) => arena.adopt_buffer(record),
        None => Box::into_raw(Box::new(record)),
    };
    handle as jni::jobject
}

/// # Safety
///
/// `buf` must be null or a handle returned by [`new_direct_byte_buffer`].
pub unsafe extern "system" fn get_direct_buffer_address(_env: *mut jni::JNIEnv, buf: jni::jobject) -> *mut c_void {
    let address = match (buf as *const DirectBuffer).as_ref() {
        Some(record) => record.ptr as *mut c_void,
        None => {
            log::warn!("GetDirectBufferAddress called with a null buffer");
            ptr::null_mut()
        }
    };
    log::trace!("GetDirectBufferAddress({buf:p}) -> {address:p}");
    address
}

/// # Safety
///
/// `buf` must be null or a handle returned by [`new_direct_byte_buffer`].
pub unsafe extern "system" fn get_direct_buffer_capacity(_env: *mut jni::JNIEnv, buf: jni::jobject) -> jni::jlong {
    let capacity = match (buf as *const DirectBuffer).as_ref() {
        Some(record) => jni::jlong::from(record.len),
        None => {
            log::warn!("GetDirectBufferCapacity called with a null buffer");
            NULL_CAPACITY
        }
    };
    log::trace!("GetDirectBufferCapacity({buf:p}) -> {capacity}");
    capacity
}
