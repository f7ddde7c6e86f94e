use std::os::raw::c_char;
use std::ptr;

use mockjni::env::{JavaVm, JniEnv};
use mockjni::ffi::{createEnv, createVM};
use mockjni::jni;
use mockjni::{Error, Sentinel};

unsafe extern "system" fn null_class(_env: *mut jni::JNIEnv, _name: *const c_char) -> jni::jclass {
    ptr::null_mut()
}

unsafe extern "system" fn length_seven(_env: *mut jni::JNIEnv, _array: jni::jarray) -> jni::jsize {
    7
}

unsafe fn create_default() -> *mut jni::JNIEnv {
    createEnv(
        None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
        None,
    )
}

#[test]
fn create_env_without_overrides_uses_defaults() {
    let raw = unsafe { create_default() };
    assert!(!raw.is_null());

    let jni = unsafe { JniEnv::from_raw(raw) };
    assert!(Sentinel::Class.matches(jni.find_class("java/lang/String").unwrap()));
    assert!(matches!(jni.get_array_length(ptr::null_mut()), Err(Error::UnpopulatedSlot("GetArrayLength"))));
}

#[test]
fn create_env_applies_overrides() {
    let raw = unsafe {
        createEnv(
            Some(null_class),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            Some(length_seven),
            None,
            None,
            None,
        )
    };
    let jni = unsafe { JniEnv::from_raw(raw) };

    assert!(matches!(jni.find_class("a/B"), Err(Error::NullHandle("FindClass"))));
    assert_eq!(jni.get_array_length(ptr::null_mut()).unwrap(), 7);
    assert!(Sentinel::GlobalRef.matches(jni.new_global_ref(ptr::null_mut()).unwrap()));
}

#[test]
fn create_vm_hands_back_the_environment() {
    let env = unsafe { create_default() };
    let vm = unsafe { createVM(env) };
    let java_vm = unsafe { JavaVm::from_raw(vm) };

    for _ in 0..3 {
        assert_eq!(java_vm.get_env(jni::JNI_VERSION_1_8).unwrap().raw(), env);
    }
}
