//! Ownership of everything the stubs allocate.
//!
//! Stub-created strings and direct-buffer records are handed to native code
//! as bare addresses. The arena keeps the owning `Box` keyed by that address
//! so the environment can free whatever is still outstanding when it drops,
//! and so a release of an address the arena never issued is caught instead
//! of freeing foreign memory.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::stubs::buffer::DirectBuffer;
use crate::sys::jni;

#[derive(Default)]
pub struct Arena {
    strings: Mutex<HashMap<usize, Box<[jni::jchar]>>>,
    buffers: Mutex<HashMap<usize, Box<DirectBuffer>>>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a NUL-terminated string buffer and returns the
    /// address native code will see.
    pub fn adopt_string(&self, mut units: Box<[jni::jchar]>) -> *mut jni::jchar {
        let ptr = units.as_mut_ptr();
        self.strings.lock().insert(ptr as usize, units);
        ptr
    }

    /// Frees a string previously returned by [`Arena::adopt_string`].
    ///
    /// Returns `false` if the address is not owned by this arena.
    pub fn release_string(&self, ptr: *const jni::jchar) -> bool {
        self.strings.lock().remove(&(ptr as usize)).is_some()
    }

    pub fn adopt_buffer(&self, buffer: DirectBuffer) -> *mut DirectBuffer {
        let mut boxed = Box::new(buffer);
        let ptr: *mut DirectBuffer = &mut *boxed;
        self.buffers.lock().insert(ptr as usize, boxed);
        ptr
    }

    pub fn live_strings(&self) -> usize {
        self.strings.lock().len()
    }

    pub fn live_buffers(&self) -> usize {
        self.buffers.lock().len()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        let strings = self.strings.get_mut().len();
        let buffers = self.buffers.get_mut().len();
        if strings + buffers > 0 {
            log::debug!("freeing {strings} outstanding strings and {buffers} direct buffers");
        }
    }
}
