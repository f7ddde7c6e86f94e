//! Errors returned by the Rust-side API.
//!
//! Stubs themselves never fail: they sit behind a C ABI and answer with
//! sentinels. These errors come from the builder, the configuration layer and
//! the caller-side wrappers.

use std::ffi::NulError;

use crate::sys::jni;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The table slot the caller tried to reach holds no callback.
    #[error("JNI slot `{0}` is not populated")]
    UnpopulatedSlot(&'static str),

    /// A stub or override reported a non-zero JNI status.
    #[error("JNI error: {0}")]
    Jni(jni::jint),

    #[error("invalid string argument (NUL byte): {0}")]
    Nul(#[from] NulError),

    /// A stub returned null where a handle was required.
    #[error("null handle returned from `{0}`")]
    NullHandle(&'static str),

    #[error("string is not valid UTF-16")]
    InvalidUtf16,

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
