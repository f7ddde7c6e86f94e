//! Class, reference, method and exception stubs.
//!
//! All of these ignore their inputs. Identity is meaningless: every class is
//! the same [`Sentinel::Class`], every global reference the same
//! [`Sentinel::GlobalRef`].

use std::os::raw::c_char;
use std::ptr;

use super::c_str_lossy;
use crate::sentinel::Sentinel;
use crate::sys::jni;

/// `FindClass`: any name, including null, resolves to the class sentinel.
pub unsafe extern "system" fn find_class(_env: *mut jni::JNIEnv, name: *const c_char) -> jni::jclass {
    log::trace!("FindClass({})", c_str_lossy(name));
    Sentinel::Class.as_object()
}

pub unsafe extern "system" fn new_global_ref(_env: *mut jni::JNIEnv, lobj: jni::jobject) -> jni::jobject {
    log::trace!("NewGlobalRef({lobj:p})");
    Sentinel::GlobalRef.as_object()
}

pub unsafe extern "system" fn delete_local_ref(_env: *mut jni::JNIEnv, obj: jni::jobject) {
    log::trace!("DeleteLocalRef({obj:p})");
}

pub unsafe extern "system" fn delete_global_ref(_env: *mut jni::JNIEnv, gref: jni::jobject) {
    log::trace!("DeleteGlobalRef({gref:p})");
}

/// Fills the variadic `NewObject` slot. It reads none of the trailing
/// arguments, which is what makes a fixed-arity definition callable there.
pub unsafe extern "C" fn new_object(
    _env: *mut jni::JNIEnv,
    clazz: jni::jclass,
    method_id: jni::jmethodID,
) -> jni::jobject {
    log::trace!("NewObject({clazz:p}, {method_id:p})");
    ptr::null_mut()
}

pub unsafe extern "system" fn new_object_v(
    _env: *mut jni::JNIEnv,
    clazz: jni::jclass,
    method_id: jni::jmethodID,
    _args: jni::va_list,
) -> jni::jobject {
    log::trace!("NewObjectV({clazz:p}, {method_id:p})");
    ptr::null_mut()
}

pub unsafe extern "system" fn new_object_a(
    _env: *mut jni::JNIEnv,
    clazz: jni::jclass,
    method_id: jni::jmethodID,
    _args: *const jni::jvalue,
) -> jni::jobject {
    log::trace!("NewObjectA({clazz:p}, {method_id:p})");
    ptr::null_mut()
}

pub unsafe extern "system" fn get_method_id(
    _env: *mut jni::JNIEnv,
    _clazz: jni::jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jni::jmethodID {
    log::trace!("GetMethodID({}, {})", c_str_lossy(name), c_str_lossy(sig));
    Sentinel::Method.as_method_id()
}

/// `ThrowNew`: reports success and records nothing. A later
/// `ExceptionCheck` (if the caller installed one) will not see it.
pub unsafe extern "system" fn throw_new(
    _env: *mut jni::JNIEnv,
    _clazz: jni::jclass,
    msg: *const c_char,
) -> jni::jint {
    log::trace!("ThrowNew({})", c_str_lossy(msg));
    jni::JNI_OK
}
