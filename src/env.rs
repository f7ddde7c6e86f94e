//! High-level wrappers for code that consumes a JNI environment.
//!
//! The mock side of the crate builds tables; this side calls through them
//! the way the code under test does. Tests and benches use it to reach the
//! stubs through the real function pointers rather than by name.
//!
//! # JNI Environment
//!
//! The [`JniEnv`] struct wraps a `JNIEnv*` and provides methods for:
//!
//! - **Classes**: `FindClass`
//! - **Objects**: `NewObjectA`, `GetMethodID`
//! - **Strings**: `NewString`, `GetStringLength`, critical access
//! - **Arrays**: `GetArrayLength`, short and float region writes
//! - **Exceptions**: `Throw`, `ThrowNew`
//! - **Direct buffers**: construction, address and capacity
//!
//! Every method returns [`crate::Result`]; an empty slot is
//! [`crate::Error::UnpopulatedSlot`].
//!
//! [`JavaVm`] wraps a `JavaVM*` and exposes `GetEnv`.
//!
//! # Reference Guards
//!
//! - [`LocalRef`]: deletes a local reference when dropped
//! - [`GlobalRef`]: creates a global reference and deletes it when dropped
//!
//! ```rust,ignore
//! use mockjni::prelude::*;
//!
//! fn do_something(jni: &JniEnv) -> mockjni::Result<()> {
//!     let class = LocalRef::new(jni, jni.find_class("java/lang/String")?);
//!     let method = jni.get_method_id(class.get(), "length", "()I")?;
//!     Ok(())
//! }
//! ```

pub use crate::jni_wrapper::{GlobalRef, JavaVm, JniEnv, LocalRef};
