//! String stubs.
//!
//! A mock `jstring` is the address of a NUL-terminated buffer of UTF-16
//! units. The length is never stored; it is recomputed by scanning for the
//! terminator.

use std::ptr;

use super::arena;
use crate::sys::jni;

/// Returned by [`strlen16`] for a null pointer.
pub const NULL_STRING_LENGTH: jni::jsize = -1;

/// Counts the units before the first zero unit.
///
/// # Safety
///
/// `s` must be null or point to a zero-terminated run of `jchar`s.
pub unsafe fn strlen16(s: *const jni::jchar) -> jni::jsize {
    if s.is_null() {
        return NULL_STRING_LENGTH;
    }
    let mut count = 0usize;
    while *s.add(count) != 0 {
        count += 1;
    }
    count as jni::jsize
}

/// `NewString`, copying profile.
///
/// The length is recomputed with [`strlen16`]; `len` is only logged. The
/// `length + 1` units including the terminator are copied into a fresh
/// buffer that belongs to the environment's arena until
/// `ReleaseStringCritical` frees it.
///
/// # Safety
///
/// `env` must be null or a handle produced by [`crate::MockEnv`]. Any other
/// handle is read one word past its table pointer. `unicode` must be null or
/// zero-terminated.
pub unsafe extern "system" fn new_string(
    env: *mut jni::JNIEnv,
    unicode: *const jni::jchar,
    len: jni::jsize,
) -> jni::jstring {
    if unicode.is_null() {
        log::warn!("NewString called with a null buffer");
        return ptr::null_mut();
    }

    let length = strlen16(unicode) as usize;
    log::trace!("NewString({length} units, len={len})");
    let units: Box<[jni::jchar]> = std::slice::from_raw_parts(unicode, length + 1).into();

    let handle = match arena(env) {
        Some(arena) => arena.adopt_string(units),
        None => Box::into_raw(units) as *mut jni::jchar,
    };
    handle as jni::jstring
}

/// `NewString`, null profile: allocates nothing.
pub unsafe extern "system" fn new_string_null(
    _env: *mut jni::JNIEnv,
    _unicode: *const jni::jchar,
    len: jni::jsize,
) -> jni::jstring {
    log::trace!("NewString({len} units) -> null");
    ptr::null_mut()
}

pub unsafe extern "system" fn get_string_length(_env: *mut jni::JNIEnv, str: jni::jstring) -> jni::jsize {
    if str.is_null() {
        log::warn!("GetStringLength called with a null string");
    }
    let length = strlen16(str as *const jni::jchar);
    log::trace!("GetStringLength({str:p}) -> {length}");
    length
}

/// `GetStringCritical`: the handle already is the character data. No copy is
/// made and `isCopy` is left untouched.
pub unsafe extern "system" fn get_string_critical(
    _env: *mut jni::JNIEnv,
    string: jni::jstring,
    _is_copy: *mut jni::jboolean,
) -> *const jni::jchar {
    log::trace!("GetStringCritical({string:p})");
    string as *const jni::jchar
}

/// `ReleaseStringCritical`: frees the string's buffer.
///
/// # Safety
///
/// `env` must be null or a handle produced by [`crate::MockEnv`]. With a
/// null `env`, `string` must come from [`new_string`] called with a null
/// `env` and not yet be released.
pub unsafe extern "system" fn release_string_critical(
    env: *mut jni::JNIEnv,
    string: jni::jstring,
    _cstring: *const jni::jchar,
) {
    let units = string as *mut jni::jchar;
    if units.is_null() {
        log::warn!("ReleaseStringCritical called with a null string");
        return;
    }
    log::trace!("ReleaseStringCritical({units:p})");

    match arena(env) {
        Some(arena) => {
            if !arena.release_string(units) {
                log::warn!("ReleaseStringCritical({units:p}): not a string owned by this environment");
            }
        }
        None => {
            let len = strlen16(units) as usize + 1;
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(units, len)));
        }
    }
}
