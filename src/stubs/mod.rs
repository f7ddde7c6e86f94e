//! Built-in stub implementations for JNI slots.
//!
//! Each stub has the exact `extern "system"` signature of the slot it fills,
//! so it can be stored in the table and reached by native code. None of them
//! touch VM state (there is none); they return fixed sentinels, copy memory,
//! or do nothing.
//!
//! | Module | Slots |
//! |--------|-------|
//! | [`class`] | `FindClass`, `NewGlobalRef`, `Delete*Ref`, `NewObject*`, `GetMethodID`, `ThrowNew` |
//! | [`string`] | `NewString`, `GetStringLength`, `GetStringCritical`, `ReleaseStringCritical` |
//! | [`buffer`] | `NewDirectByteBuffer`, `GetDirectBufferAddress`, `GetDirectBufferCapacity` |

use std::borrow::Cow;
use std::ffi::{c_void, CStr};
use std::os::raw::c_char;

use crate::arena::Arena;
use crate::config::{MockConfig, StringProfile};
use crate::handle::EnvCell;
use crate::sys::jni;

pub mod buffer;
pub mod class;
pub mod string;

/// Fills every slot that has a built-in stub. Slots without one stay as they
/// are.
pub fn install_defaults(table: &mut jni::JNINativeInterface_, config: &MockConfig) {
    table.FindClass = Some(class::find_class);
    table.NewGlobalRef = Some(class::new_global_ref);
    table.DeleteLocalRef = Some(class::delete_local_ref);
    table.DeleteGlobalRef = Some(class::delete_global_ref);
    table.NewObject = class::new_object as *const () as *mut c_void;
    table.NewObjectV = Some(class::new_object_v);
    table.NewObjectA = Some(class::new_object_a);
    table.GetMethodID = Some(class::get_method_id);
    table.ThrowNew = Some(class::throw_new);

    match config.string_profile {
        StringProfile::Copy => table.NewString = Some(string::new_string),
        StringProfile::Null => table.NewString = Some(string::new_string_null),
    }
    table.GetStringLength = Some(string::get_string_length);
    table.GetStringCritical = Some(string::get_string_critical);
    table.ReleaseStringCritical = Some(string::release_string_critical);

    table.NewDirectByteBuffer = Some(buffer::new_direct_byte_buffer);
    table.GetDirectBufferAddress = Some(buffer::get_direct_buffer_address);
    table.GetDirectBufferCapacity = Some(buffer::get_direct_buffer_capacity);
}

/// The arena behind an environment handle built by this crate, if any.
///
/// # Safety
///
/// `env` must be null or a handle produced by [`crate::MockEnv`], and the
/// environment must outlive the returned reference. The second word behind
/// `env` is read, so a foreign one-word handle is out of bounds.
pub(crate) unsafe fn arena<'a>(env: *mut jni::JNIEnv) -> Option<&'a Arena> {
    let cell = env as *const EnvCell;
    if cell.is_null() {
        return None;
    }
    (*cell).arena.as_ref()
}

/// Renders a C string for logging without trusting it to be UTF-8.
pub(crate) unsafe fn c_str_lossy<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        Cow::Borrowed("<null>")
    } else {
        CStr::from_ptr(ptr).to_string_lossy()
    }
}
