//! Builder for [`MockEnv`].
//!
//! A table starts out with every slot empty. [`EnvBuilder::build`] fills the
//! slots that have a built-in stub, then lays the caller's overrides on top.
//! Anything neither covers stays empty.
//!
//! ```rust,ignore
//! use mockjni::{EnvBuilder, StringProfile};
//!
//! unsafe extern "system" fn no_class(_: *mut jni::JNIEnv, _: *const c_char) -> jni::jclass {
//!     std::ptr::null_mut()
//! }
//!
//! let env = EnvBuilder::new()
//!     .string_profile(StringProfile::Null)
//!     .find_class(no_class)
//!     .build();
//! native_code_under_test(env.as_raw());
//! ```

use std::ffi::c_void;
use std::os::raw::c_char;

use crate::config::{MockConfig, StringProfile};
use crate::handle::MockEnv;
use crate::stubs;
use crate::sys::jni;

type SlotEdit = Box<dyn FnOnce(&mut jni::JNINativeInterface_)>;

/// Builder for a fake JNI environment.
pub struct EnvBuilder {
    config: MockConfig,
    overrides: jni::JNINativeInterface_,
    edits: Vec<SlotEdit>,
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvBuilder {
    pub fn new() -> Self {
        EnvBuilder {
            config: MockConfig::default(),
            overrides: jni::JNINativeInterface_::empty(),
            edits: Vec::new(),
        }
    }

    pub fn config(mut self, config: MockConfig) -> Self {
        self.config = config;
        self
    }

    /// Selects the built-in `NewString` behavior. Has no effect on a
    /// `NewString` override.
    pub fn string_profile(mut self, profile: StringProfile) -> Self {
        self.config.string_profile = profile;
        self
    }

    /// Edits the raw table after defaults and overrides are in place.
    ///
    /// For slots without a dedicated setter:
    ///
    /// ```rust,ignore
    /// let env = EnvBuilder::new()
    ///     .slot(|table| table.GetVersion = Some(version_stub))
    ///     .build();
    /// ```
    pub fn slot(mut self, edit: impl FnOnce(&mut jni::JNINativeInterface_) + 'static) -> Self {
        self.edits.push(Box::new(edit));
        self
    }

    /// Copies every overridable slot that is populated in `overrides`.
    pub(crate) fn overrides_from(mut self, overrides: &jni::JNINativeInterface_) -> Self {
        apply_overrides(&mut self.overrides, overrides);
        self
    }

    pub fn build(self) -> MockEnv {
        let mut table = jni::JNINativeInterface_::empty();
        stubs::install_defaults(&mut table, &self.config);
        apply_overrides(&mut table, &self.overrides);
        for edit in self.edits {
            edit(&mut table);
        }

        let env = MockEnv::from_table(table);
        log::debug!(
            "mock environment {:p}: {} of {} slots populated",
            env.as_raw(),
            env.populated_slots().len(),
            jni::JNINativeInterface_::SLOT_NAMES.len()
        );
        env
    }
}

macro_rules! overrides {
    ($(
        $(#[$doc:meta])*
        $method:ident => $slot:ident: $alias:ident = fn($($arg:ty),*) $(-> $ret:ty)?;
    )*) => {
        $(
            #[doc = concat!("Signature of the `", stringify!($slot), "` slot.")]
            pub type $alias = unsafe extern "system" fn(*mut jni::JNIEnv $(, $arg)*) $(-> $ret)?;
        )*

        /// Slots with a dedicated setter on [`EnvBuilder`], in the order the
        /// C entry point takes them.
        pub const OVERRIDABLE_SLOTS: &[&str] = &[$(stringify!($slot)),*];

        impl EnvBuilder {
            $(
                $(#[$doc])*
                pub fn $method(mut self, f: $alias) -> Self {
                    self.overrides.$slot = Some(f);
                    self
                }
            )*
        }

        fn apply_overrides(table: &mut jni::JNINativeInterface_, overrides: &jni::JNINativeInterface_) {
            $(
                if overrides.$slot.is_some() {
                    table.$slot = overrides.$slot;
                }
            )*
        }
    };
}

overrides! {
    find_class => FindClass: FindClassFn = fn(*const c_char) -> jni::jclass;
    new_global_ref => NewGlobalRef: NewGlobalRefFn = fn(jni::jobject) -> jni::jobject;
    delete_local_ref => DeleteLocalRef: DeleteLocalRefFn = fn(jni::jobject);
    delete_global_ref => DeleteGlobalRef: DeleteGlobalRefFn = fn(jni::jobject);
    new_object_v => NewObjectV: NewObjectVFn = fn(jni::jclass, jni::jmethodID, jni::va_list) -> jni::jobject;
    /// No built-in stub exists; the slot is empty unless set here.
    call_object_method_v => CallObjectMethodV: CallObjectMethodVFn =
        fn(jni::jobject, jni::jmethodID, jni::va_list) -> jni::jobject;
    get_method_id => GetMethodID: GetMethodIdFn =
        fn(jni::jclass, *const c_char, *const c_char) -> jni::jmethodID;
    /// No built-in stub exists; the slot is empty unless set here.
    throw => Throw: ThrowFn = fn(jni::jthrowable) -> jni::jint;
    throw_new => ThrowNew: ThrowNewFn = fn(jni::jclass, *const c_char) -> jni::jint;
    /// Takes precedence over the configured [`StringProfile`].
    new_string => NewString: NewStringFn = fn(*const jni::jchar, jni::jsize) -> jni::jstring;
    get_string_length => GetStringLength: GetStringLengthFn = fn(jni::jstring) -> jni::jsize;
    get_string_critical => GetStringCritical: GetStringCriticalFn =
        fn(jni::jstring, *mut jni::jboolean) -> *const jni::jchar;
    release_string_critical => ReleaseStringCritical: ReleaseStringCriticalFn =
        fn(jni::jstring, *const jni::jchar);
    /// No built-in stub exists; the slot is empty unless set here.
    set_short_array_region => SetShortArrayRegion: SetShortArrayRegionFn =
        fn(jni::jshortArray, jni::jsize, jni::jsize, *const jni::jshort);
    /// No built-in stub exists; the slot is empty unless set here.
    set_float_array_region => SetFloatArrayRegion: SetFloatArrayRegionFn =
        fn(jni::jfloatArray, jni::jsize, jni::jsize, *const jni::jfloat);
    /// No built-in stub exists; the slot is empty unless set here.
    get_array_length => GetArrayLength: GetArrayLengthFn = fn(jni::jarray) -> jni::jsize;
    new_direct_byte_buffer => NewDirectByteBuffer: NewDirectByteBufferFn =
        fn(*mut c_void, jni::jlong) -> jni::jobject;
    get_direct_buffer_address => GetDirectBufferAddress: GetDirectBufferAddressFn =
        fn(jni::jobject) -> *mut c_void;
    get_direct_buffer_capacity => GetDirectBufferCapacity: GetDirectBufferCapacityFn =
        fn(jni::jobject) -> jni::jlong;
}
