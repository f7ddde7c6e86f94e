//! Common imports for building mock environments.
//!
//! This prelude is intentionally small. It covers what most harnesses use
//! while avoiding over-broad re-exports.

pub use crate::builder::EnvBuilder;
pub use crate::config::{MockConfig, StringProfile};
pub use crate::env::{GlobalRef, JavaVm, JniEnv, LocalRef};
pub use crate::handle::MockEnv;
pub use crate::sentinel::Sentinel;
pub use crate::sys::jni;
pub use crate::vm::MockVm;
pub use crate::{jni_call, jvm_call};
