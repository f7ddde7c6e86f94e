//! C entry points.
//!
//! Harnesses written in C or C++ link against the `cdylib` and call
//! `createEnv` with one callback per overridable slot (null keeps the
//! built-in stub, or leaves the slot empty where there is none), then
//! `createVM` with the result. Both handles live until process exit.
#![allow(non_snake_case)]

use crate::builder::{
    CallObjectMethodVFn, DeleteGlobalRefFn, DeleteLocalRefFn, EnvBuilder, FindClassFn, GetArrayLengthFn,
    GetDirectBufferAddressFn, GetDirectBufferCapacityFn, GetMethodIdFn, GetStringCriticalFn, GetStringLengthFn,
    NewDirectByteBufferFn, NewGlobalRefFn, NewObjectVFn, NewStringFn, ReleaseStringCriticalFn,
    SetFloatArrayRegionFn, SetShortArrayRegionFn, ThrowFn, ThrowNewFn,
};
use crate::config::MockConfig;
use crate::sys::jni;
use crate::vm::MockVm;

/// Builds an environment and leaks it.
///
/// The configuration comes from the process environment; an invalid
/// `MOCKJNI_STRING_PROFILE` is reported and the default used.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn createEnv(
    FindClass: Option<FindClassFn>,
    NewGlobalRef: Option<NewGlobalRefFn>,
    DeleteLocalRef: Option<DeleteLocalRefFn>,
    DeleteGlobalRef: Option<DeleteGlobalRefFn>,
    NewObjectV: Option<NewObjectVFn>,
    CallObjectMethodV: Option<CallObjectMethodVFn>,
    GetMethodID: Option<GetMethodIdFn>,
    Throw: Option<ThrowFn>,
    ThrowNew: Option<ThrowNewFn>,
    NewString: Option<NewStringFn>,
    GetStringLength: Option<GetStringLengthFn>,
    GetStringCritical: Option<GetStringCriticalFn>,
    ReleaseStringCritical: Option<ReleaseStringCriticalFn>,
    SetShortArrayRegion: Option<SetShortArrayRegionFn>,
    SetFloatArrayRegion: Option<SetFloatArrayRegionFn>,
    GetArrayLength: Option<GetArrayLengthFn>,
    NewDirectByteBuffer: Option<NewDirectByteBufferFn>,
    GetDirectBufferAddress: Option<GetDirectBufferAddressFn>,
    GetDirectBufferCapacity: Option<GetDirectBufferCapacityFn>,
) -> *mut jni::JNIEnv {
    let config = MockConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{err}; using the default configuration");
        MockConfig::default()
    });

    let overrides = jni::JNINativeInterface_ {
        FindClass,
        NewGlobalRef,
        DeleteLocalRef,
        DeleteGlobalRef,
        NewObjectV,
        CallObjectMethodV,
        GetMethodID,
        Throw,
        ThrowNew,
        NewString,
        GetStringLength,
        GetStringCritical,
        ReleaseStringCritical,
        SetShortArrayRegion,
        SetFloatArrayRegion,
        GetArrayLength,
        NewDirectByteBuffer,
        GetDirectBufferAddress,
        GetDirectBufferCapacity,
        ..jni::JNINativeInterface_::empty()
    };

    EnvBuilder::new().config(config).overrides_from(&overrides).build().leak()
}

/// Builds a virtual machine around `env` and leaks it.
#[no_mangle]
pub unsafe extern "C" fn createVM(env: *mut jni::JNIEnv) -> *mut jni::JavaVM {
    MockVm::from_raw_env(env).leak()
}
