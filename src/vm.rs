//! The fake `JavaVM`.
//!
//! Its table holds one piece of state, the environment handle in
//! `reserved0`, and one callback, `GetEnv`, that hands it back. There is a
//! single environment for every thread and every requested version.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::sys::jni;

/// `GetEnv`: writes the stored environment into `*penv`.
pub unsafe extern "system" fn get_env(vm: *mut jni::JavaVM, penv: *mut *mut c_void, version: jni::jint) -> jni::jint {
    if penv.is_null() {
        log::warn!("GetEnv called with a null out-pointer");
        return jni::JNI_ERR;
    }
    let env = (**vm).reserved0;
    log::trace!("GetEnv(version={version:#x}) -> {env:p}");
    *penv = env;
    jni::JNI_OK
}

/// A fake virtual machine bound to one environment.
///
/// The lifetime ties it to the [`crate::MockEnv`] it answers with. The cell
/// and table are held as raw pointers for the same reason as in
/// [`crate::MockEnv`].
pub struct MockVm<'env> {
    cell: NonNull<*const jni::JNIInvokeInterface_>,
    table: NonNull<jni::JNIInvokeInterface_>,
    _env: PhantomData<&'env ()>,
}

impl<'env> MockVm<'env> {
    /// Builds a VM around an environment handle that did not come from a
    /// borrowed [`crate::MockEnv`], for instance one received over the C
    /// boundary.
    ///
    /// # Safety
    ///
    /// `env` must stay valid for `'env`. It is never dereferenced here, only
    /// returned by `GetEnv`.
    pub unsafe fn from_raw_env(env: *mut jni::JNIEnv) -> Self {
        let mut table = jni::JNIInvokeInterface_::empty();
        table.reserved0 = env as *mut c_void;
        table.GetEnv = Some(get_env);

        let table = NonNull::from(Box::leak(Box::new(table)));
        let cell = NonNull::from(Box::leak(Box::new(table.as_ptr() as *const jni::JNIInvokeInterface_)));
        log::debug!("mock vm created for environment {env:p}");
        MockVm {
            cell,
            table,
            _env: PhantomData,
        }
    }

    /// The `JavaVM*` native code should be given.
    pub fn as_raw(&self) -> *mut jni::JavaVM {
        self.cell.as_ptr()
    }

    /// The environment `GetEnv` answers with.
    pub fn env(&self) -> *mut jni::JNIEnv {
        self.table().reserved0 as *mut jni::JNIEnv
    }

    pub fn table(&self) -> &jni::JNIInvokeInterface_ {
        // Safety: allocated in `from_raw_env`, freed only in `drop`.
        unsafe { self.table.as_ref() }
    }

    /// Gives up ownership and returns a handle valid until process exit.
    pub fn leak(self) -> *mut jni::JavaVM {
        let raw = self.as_raw();
        std::mem::forget(self);
        raw
    }
}

impl Drop for MockVm<'_> {
    fn drop(&mut self) {
        // Safety: both pointers came from `Box::leak` in `from_raw_env` and
        // are freed exactly once, here.
        unsafe {
            drop(Box::from_raw(self.cell.as_ptr()));
            drop(Box::from_raw(self.table.as_ptr()));
        }
    }
}

impl std::fmt::Debug for MockVm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockVm")
            .field("raw", &self.as_raw())
            .field("env", &self.env())
            .finish()
    }
}
