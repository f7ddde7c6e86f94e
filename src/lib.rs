//! # mockjni
//!
//! A fake JNI embedding surface for testing native code without a JVM.
//!
//! Native code that calls JNI only ever sees two handles: a `JNIEnv*` and a
//! `JavaVM*`, each a pointer to a pointer to a table of function pointers.
//! This crate fabricates both, with the exact JDK table layout, and fills the
//! slots that typical glue code reaches with small inert stubs:
//!
//! - `FindClass` / `GetMethodID` return fixed non-null sentinels
//! - reference creation returns a sentinel, deletion does nothing
//! - `ThrowNew` reports success and records nothing
//! - `NewString` copies UTF-16 into a NUL-terminated buffer (or returns null,
//!   see [`StringProfile`])
//! - direct byte buffers wrap a caller pointer and capacity
//!
//! Any slot can be overridden with your own `extern "system"` callback.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mockjni::prelude::*;
//!
//! let env = EnvBuilder::new().build();
//! let vm = env.vm();
//!
//! // hand the raw handles to the code under test
//! unsafe { my_native_init(vm.as_raw(), env.as_raw()) };
//!
//! // or drive the table from Rust
//! let jni = unsafe { JniEnv::from_raw(env.as_raw()) };
//! let cls = jni.find_class("com/example/Widget")?;
//! assert!(Sentinel::Class.matches(cls));
//! ```
//!
//! From C, link the `cdylib` and call `createEnv(...)` / `createVM(env)`
//! (see [`ffi`]).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Code Under Test                       │
//! │        (*env)->FindClass(env, "..."), GetEnv, ...       │
//! ├─────────────────────────────────────────────────────────┤
//! │           Owning Handles (handle, vm modules)           │
//! │   MockEnv - table + handle cell + allocation arena      │
//! │   MockVm  - invoke table, reserved0 = environment       │
//! ├─────────────────────────────────────────────────────────┤
//! │        EnvBuilder (defaults, overrides, raw edits)      │
//! ├─────────────────────────────────────────────────────────┤
//! │           Built-in Stubs (stubs module)                 │
//! │   class / string / buffer                               │
//! ├─────────────────────────────────────────────────────────┤
//! │              Raw FFI Bindings (sys module)              │
//! │   sys::jni - JNI types, JNIEnv table (236 slots),       │
//! │              JavaVM table (8 slots)                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sys::jni`] | Raw JNI types and function tables |
//! | [`builder`] | [`EnvBuilder`] and the overridable slot signatures |
//! | [`stubs`] | Built-in slot implementations |
//! | [`env`] | Caller-side wrappers: [`env::JniEnv`], [`env::JavaVm`], reference guards |
//! | [`ffi`] | `createEnv` / `createVM` for C harnesses |
//!
//! ## Lifetimes
//!
//! A [`MockEnv`] frees every string and direct-buffer record its stubs
//! allocated when it is dropped. A [`MockVm`] borrows the environment it
//! answers with. Call `leak()` on either to get a handle that lives until
//! process exit, which is what the C entry points do.
//!
//! ## Logging
//!
//! Stubs log every call at `trace` level through the [`log`] facade. No
//! logger is installed by this crate.

pub mod sys;

pub mod arena;
pub mod builder;
pub mod config;
pub mod env;
pub mod error;
pub mod ffi;
pub mod handle;
pub mod prelude;
pub mod sentinel;
pub mod stubs;
pub mod vm;

// Implementation module (use `env` for the public API)
#[doc(hidden)]
pub mod jni_wrapper;

pub use crate::builder::EnvBuilder;
pub use crate::config::{MockConfig, StringProfile};
pub use crate::error::{Error, Result};
pub use crate::handle::MockEnv;
pub use crate::sentinel::Sentinel;
pub use crate::sys::jni;
pub use crate::vm::MockVm;
