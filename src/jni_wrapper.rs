//! Caller-side wrappers around raw JNI handles.
//!
//! These reach the table the way application code would: load the slot,
//! call it with the handle. An empty slot is reported as
//! [`Error::UnpopulatedSlot`] instead of being jumped through.
//!
//! # Example
//!
//! ```rust,ignore
//! use mockjni::{EnvBuilder, JniEnv};
//!
//! let mock = EnvBuilder::new().build();
//! let env = unsafe { JniEnv::from_raw(mock.as_raw()) };
//!
//! let string_class = env.find_class("java/lang/String")?;
//! let greeting = env.new_string_from_str("Hello from Rust!")?;
//! assert_eq!(env.get_string(greeting)?, "Hello from Rust!");
//! env.release_string_critical(greeting, std::ptr::null())?;
//! ```

use std::ffi::{c_void, CString};
use std::ptr;

use crate::error::{Error, Result};
use crate::sys::jni;

/// Loads a slot from the table behind `$handle`, returning early with
/// `UnpopulatedSlot` if it is empty.
macro_rules! slot {
    ($handle:expr, $name:ident) => {
        unsafe { (**$handle).$name }.ok_or(Error::UnpopulatedSlot(stringify!($name)))?
    };
}

fn non_null<T>(ptr: *mut T, slot: &'static str) -> Result<*mut T> {
    if ptr.is_null() {
        Err(Error::NullHandle(slot))
    } else {
        Ok(ptr)
    }
}

fn status(code: jni::jint) -> Result<()> {
    if code == jni::JNI_OK {
        Ok(())
    } else {
        Err(Error::Jni(code))
    }
}

/// Wrapper around a JNI environment pointer.
///
/// A `JniEnv` is tied to the thread it was obtained on and cannot be sent
/// across threads.
pub struct JniEnv {
    env: *mut jni::JNIEnv,
}

impl JniEnv {
    /// Creates a JniEnv wrapper from a raw pointer.
    ///
    /// # Safety
    ///
    /// The caller must ensure the pointer is valid, points at a table pointer,
    /// and outlives the wrapper.
    pub unsafe fn from_raw(env: *mut jni::JNIEnv) -> Self {
        JniEnv { env }
    }

    /// Returns the raw JNI environment pointer.
    pub fn raw(&self) -> *mut jni::JNIEnv {
        self.env
    }

    /// Returns the JNI version. The mock has no built-in for this.
    pub fn get_version(&self) -> Result<jni::jint> {
        let f = slot!(self.env, GetVersion);
        Ok(unsafe { f(self.env) })
    }

    // =========================================================================
    // Class Operations
    // =========================================================================

    /// Finds a class by its fully qualified name, e.g. `java/lang/String`.
    pub fn find_class(&self, name: &str) -> Result<jni::jclass> {
        let c_name = CString::new(name)?;
        let f = slot!(self.env, FindClass);
        non_null(unsafe { f(self.env, c_name.as_ptr()) }, "FindClass")
    }

    // =========================================================================
    // Exception Handling
    // =========================================================================

    pub fn throw(&self, obj: jni::jthrowable) -> Result<()> {
        let f = slot!(self.env, Throw);
        status(unsafe { f(self.env, obj) })
    }

    /// Throws a new exception of the specified class with the given message.
    pub fn throw_new(&self, cls: jni::jclass, msg: &str) -> Result<()> {
        let c_msg = CString::new(msg)?;
        let f = slot!(self.env, ThrowNew);
        status(unsafe { f(self.env, cls, c_msg.as_ptr()) })
    }

    // =========================================================================
    // String Operations
    // =========================================================================

    /// Creates a string from UTF-16 units.
    ///
    /// The units are passed with a trailing zero, so a `NewString` that
    /// scans for the terminator stops inside the buffer.
    pub fn new_string(&self, units: &[jni::jchar]) -> Result<jni::jstring> {
        let mut terminated = Vec::with_capacity(units.len() + 1);
        terminated.extend_from_slice(units);
        terminated.push(0);

        let f = slot!(self.env, NewString);
        let jstr = unsafe { f(self.env, terminated.as_ptr(), units.len() as jni::jsize) };
        non_null(jstr, "NewString")
    }

    /// Creates a string from a Rust string.
    pub fn new_string_from_str(&self, s: &str) -> Result<jni::jstring> {
        let units: Vec<jni::jchar> = s.encode_utf16().collect();
        self.new_string(&units)
    }

    pub fn get_string_length(&self, s: jni::jstring) -> Result<jni::jsize> {
        let f = slot!(self.env, GetStringLength);
        Ok(unsafe { f(self.env, s) })
    }

    /// Returns the string's characters without copying. Pair with
    /// [`JniEnv::release_string_critical`].
    pub fn get_string_critical(&self, s: jni::jstring) -> Result<*const jni::jchar> {
        let f = slot!(self.env, GetStringCritical);
        Ok(unsafe { f(self.env, s, ptr::null_mut()) })
    }

    pub fn release_string_critical(&self, s: jni::jstring, chars: *const jni::jchar) -> Result<()> {
        let f = slot!(self.env, ReleaseStringCritical);
        unsafe { f(self.env, s, chars) };
        Ok(())
    }

    /// Reads a string back as a Rust `String` through `GetStringLength` and
    /// `GetStringCritical`. The string is not released.
    pub fn get_string(&self, s: jni::jstring) -> Result<String> {
        let len = self.get_string_length(s)?;
        let chars = self.get_string_critical(s)?;
        if chars.is_null() || len < 0 {
            return Err(Error::NullHandle("GetStringCritical"));
        }
        let units = unsafe { std::slice::from_raw_parts(chars, len as usize) };
        String::from_utf16(units).map_err(|_| Error::InvalidUtf16)
    }

    // =========================================================================
    // Method and Object Operations
    // =========================================================================

    /// Gets a method ID for an instance method.
    pub fn get_method_id(&self, cls: jni::jclass, name: &str, sig: &str) -> Result<jni::jmethodID> {
        let c_name = CString::new(name)?;
        let c_sig = CString::new(sig)?;
        let f = slot!(self.env, GetMethodID);
        non_null(unsafe { f(self.env, cls, c_name.as_ptr(), c_sig.as_ptr()) }, "GetMethodID")
    }

    /// Creates a new object through `NewObjectA`. The result may be null.
    pub fn new_object(&self, cls: jni::jclass, method_id: jni::jmethodID, args: &[jni::jvalue]) -> Result<jni::jobject> {
        let f = slot!(self.env, NewObjectA);
        Ok(unsafe { f(self.env, cls, method_id, args.as_ptr()) })
    }

    // =========================================================================
    // Reference Management
    // =========================================================================

    pub fn new_global_ref(&self, obj: jni::jobject) -> Result<jni::jobject> {
        let f = slot!(self.env, NewGlobalRef);
        non_null(unsafe { f(self.env, obj) }, "NewGlobalRef")
    }

    pub fn delete_global_ref(&self, obj: jni::jobject) -> Result<()> {
        let f = slot!(self.env, DeleteGlobalRef);
        unsafe { f(self.env, obj) };
        Ok(())
    }

    pub fn delete_local_ref(&self, obj: jni::jobject) -> Result<()> {
        let f = slot!(self.env, DeleteLocalRef);
        unsafe { f(self.env, obj) };
        Ok(())
    }

    // =========================================================================
    // Array Operations
    // =========================================================================

    pub fn get_array_length(&self, array: jni::jarray) -> Result<jni::jsize> {
        let f = slot!(self.env, GetArrayLength);
        Ok(unsafe { f(self.env, array) })
    }

    pub fn set_short_array_region(&self, array: jni::jshortArray, start: jni::jsize, buf: &[jni::jshort]) -> Result<()> {
        let f = slot!(self.env, SetShortArrayRegion);
        unsafe { f(self.env, array, start, buf.len() as jni::jsize, buf.as_ptr()) };
        Ok(())
    }

    pub fn set_float_array_region(&self, array: jni::jfloatArray, start: jni::jsize, buf: &[jni::jfloat]) -> Result<()> {
        let f = slot!(self.env, SetFloatArrayRegion);
        unsafe { f(self.env, array, start, buf.len() as jni::jsize, buf.as_ptr()) };
        Ok(())
    }

    // =========================================================================
    // Direct Buffers
    // =========================================================================

    /// Wraps `capacity` bytes at `address` in a buffer object. The memory is
    /// not copied and must outlive every use of the returned handle.
    pub fn new_direct_byte_buffer(&self, address: *mut c_void, capacity: jni::jlong) -> Result<jni::jobject> {
        let f = slot!(self.env, NewDirectByteBuffer);
        non_null(unsafe { f(self.env, address, capacity) }, "NewDirectByteBuffer")
    }

    pub fn get_direct_buffer_address(&self, buf: jni::jobject) -> Result<*mut c_void> {
        let f = slot!(self.env, GetDirectBufferAddress);
        Ok(unsafe { f(self.env, buf) })
    }

    pub fn get_direct_buffer_capacity(&self, buf: jni::jobject) -> Result<jni::jlong> {
        let f = slot!(self.env, GetDirectBufferCapacity);
        Ok(unsafe { f(self.env, buf) })
    }
}

/// Wrapper around a `JavaVM` pointer.
pub struct JavaVm {
    vm: *mut jni::JavaVM,
}

impl JavaVm {
    /// # Safety
    ///
    /// The pointer must be valid and outlive the wrapper.
    pub unsafe fn from_raw(vm: *mut jni::JavaVM) -> Self {
        JavaVm { vm }
    }

    pub fn raw(&self) -> *mut jni::JavaVM {
        self.vm
    }

    /// Asks the VM for the current thread's environment.
    pub fn get_env(&self, version: jni::jint) -> Result<JniEnv> {
        let f = slot!(self.vm, GetEnv);
        let mut env_ptr: *mut c_void = ptr::null_mut();
        status(unsafe { f(self.vm, &mut env_ptr, version) })?;
        let env = non_null(env_ptr, "GetEnv")?;
        Ok(unsafe { JniEnv::from_raw(env as *mut jni::JNIEnv) })
    }
}

// =========================================================================
// RAII Guards
// =========================================================================

/// A guard that deletes a local reference when dropped.
///
/// ```rust,ignore
/// let class = LocalRef::new(&env, env.find_class("java/lang/String")?);
/// // class is deleted when it goes out of scope
/// ```
pub struct LocalRef<'a> {
    env: &'a JniEnv,
    obj: jni::jobject,
}

impl<'a> LocalRef<'a> {
    pub fn new(env: &'a JniEnv, obj: jni::jobject) -> Self {
        LocalRef { env, obj }
    }

    pub fn get(&self) -> jni::jobject {
        self.obj
    }

    /// Releases the reference without deleting it.
    pub fn into_inner(self) -> jni::jobject {
        let obj = self.obj;
        std::mem::forget(self);
        obj
    }
}

impl Drop for LocalRef<'_> {
    fn drop(&mut self) {
        if self.obj.is_null() {
            return;
        }
        if let Err(err) = self.env.delete_local_ref(self.obj) {
            log::warn!("dropping local reference {:p}: {err}", self.obj);
        }
    }
}

/// A guard that owns a global reference and deletes it when dropped.
pub struct GlobalRef<'a> {
    env: &'a JniEnv,
    obj: jni::jobject,
}

impl<'a> GlobalRef<'a> {
    /// Creates a global reference from `local_obj`.
    pub fn new(env: &'a JniEnv, local_obj: jni::jobject) -> Result<Self> {
        let obj = env.new_global_ref(local_obj)?;
        Ok(GlobalRef { env, obj })
    }

    pub fn get(&self) -> jni::jobject {
        self.obj
    }
}

impl Drop for GlobalRef<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.env.delete_global_ref(self.obj) {
            log::warn!("dropping global reference {:p}: {err}", self.obj);
        }
    }
}
