//! The owning environment handle.
//!
//! Native code expects `JNIEnv*`: a pointer to a word holding the table
//! address. [`MockEnv`] keeps that word in a boxed [`EnvCell`] and owns the
//! table and the stub arena next to it, so the double indirection only
//! exists behind [`MockEnv::as_raw`].

use std::ptr::NonNull;

use crate::arena::Arena;
use crate::sys::jni;
use crate::vm::MockVm;

/// What a `*mut JNIEnv` produced by this crate points at.
///
/// The first word is the table pointer, as the calling convention requires.
/// The second is private to the stubs.
#[repr(C)]
pub(crate) struct EnvCell {
    pub(crate) table: *const jni::JNINativeInterface_,
    pub(crate) arena: *const Arena,
}

/// A fake JNI environment.
///
/// Every string and direct buffer created through the built-in stubs is
/// freed when this is dropped. Use [`MockEnv::leak`] to hand the environment
/// to code that outlives it.
///
/// The cell, table and arena are separate heap allocations held as raw
/// pointers, so moving the `MockEnv` never invalidates the pointers the cell
/// stores.
pub struct MockEnv {
    cell: NonNull<EnvCell>,
    table: NonNull<jni::JNINativeInterface_>,
    arena: NonNull<Arena>,
}

impl MockEnv {
    pub(crate) fn from_table(table: jni::JNINativeInterface_) -> Self {
        let table = NonNull::from(Box::leak(Box::new(table)));
        let arena = NonNull::from(Box::leak(Box::new(Arena::new())));
        let cell = NonNull::from(Box::leak(Box::new(EnvCell {
            table: table.as_ptr(),
            arena: arena.as_ptr(),
        })));
        MockEnv { cell, table, arena }
    }

    /// The `JNIEnv*` native code should be given.
    ///
    /// Valid for as long as `self` is alive.
    pub fn as_raw(&self) -> *mut jni::JNIEnv {
        self.cell.as_ptr() as *mut jni::JNIEnv
    }

    pub fn table(&self) -> &jni::JNINativeInterface_ {
        // Safety: allocated in `from_table`, freed only in `drop`.
        unsafe { self.table.as_ref() }
    }

    fn arena(&self) -> &Arena {
        // Safety: allocated in `from_table`, freed only in `drop`.
        unsafe { self.arena.as_ref() }
    }

    /// JNI names of the slots holding a callback, in table order.
    pub fn populated_slots(&self) -> Vec<&'static str> {
        self.table().populated_slots()
    }

    /// Stub-created strings not yet released.
    pub fn live_strings(&self) -> usize {
        self.arena().live_strings()
    }

    /// Stub-created direct buffers. They have no release call, so this only
    /// grows.
    pub fn live_buffers(&self) -> usize {
        self.arena().live_buffers()
    }

    /// A virtual machine whose `GetEnv` answers with this environment.
    pub fn vm(&self) -> MockVm<'_> {
        // Safety: the handle comes from `self` and the borrow keeps it alive.
        unsafe { MockVm::from_raw_env(self.as_raw()) }
    }

    /// Gives up ownership and returns a handle valid until process exit.
    pub fn leak(self) -> *mut jni::JNIEnv {
        let raw = self.as_raw();
        std::mem::forget(self);
        log::debug!("leaked mock environment {raw:p}");
        raw
    }
}

impl Drop for MockEnv {
    fn drop(&mut self) {
        // Safety: each pointer came from `Box::leak` in `from_table` and is
        // freed exactly once, here.
        unsafe {
            drop(Box::from_raw(self.cell.as_ptr()));
            drop(Box::from_raw(self.table.as_ptr()));
            drop(Box::from_raw(self.arena.as_ptr()));
        }
    }
}

impl std::fmt::Debug for MockEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockEnv")
            .field("raw", &self.as_raw())
            .field("populated", &self.populated_slots().len())
            .field("live_strings", &self.live_strings())
            .field("live_buffers", &self.live_buffers())
            .finish()
    }
}
