//! Fabricated object identifiers.
//!
//! The mock has no objects, so every class, global reference and method ID
//! it hands out is one of a few fixed non-null values. Inside the crate they
//! are a tagged [`Sentinel`]; only [`Sentinel::as_object`] and
//! [`Sentinel::as_method_id`] turn them into the raw pointers JNI expects.

use crate::sys::jni;

/// A placeholder identity returned in place of a real VM object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// Returned by `FindClass` for every name.
    Class,
    /// Returned by `NewGlobalRef` for every object.
    GlobalRef,
    /// Returned by `GetMethodID` for every class/name/signature.
    Method,
}

impl Sentinel {
    /// The integer the sentinel is reinterpreted from at the boundary.
    pub const fn raw_value(self) -> usize {
        match self {
            Sentinel::Class => 5,
            Sentinel::GlobalRef => 7,
            Sentinel::Method => 5,
        }
    }

    pub fn as_object(self) -> jni::jobject {
        self.raw_value() as jni::jobject
    }

    pub fn as_method_id(self) -> jni::jmethodID {
        self.raw_value() as jni::jmethodID
    }

    /// True if `obj` is the raw form of this sentinel.
    ///
    /// `Class` and `Method` share a value, so this is a value comparison,
    /// not an identity check.
    pub fn matches(self, obj: jni::jobject) -> bool {
        obj as usize == self.raw_value()
    }
}
