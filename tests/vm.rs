use std::ffi::c_void;
use std::ptr;

use mockjni::env::JavaVm;
use mockjni::jni;
use mockjni::vm;
use mockjni::{EnvBuilder, Error, MockVm, Sentinel};

#[test]
fn get_env_returns_the_stored_environment() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();
    let java_vm = unsafe { JavaVm::from_raw(mock_vm.as_raw()) };

    for version in [jni::JNI_VERSION_1_6, jni::JNI_VERSION_1_8, jni::JNI_VERSION_21, 0, -1] {
        let got = java_vm.get_env(version).unwrap();
        assert_eq!(got.raw(), env.as_raw());
    }
    assert_eq!(mock_vm.env(), env.as_raw());
}

#[test]
fn env_from_vm_reaches_the_stubs() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();
    let java_vm = unsafe { JavaVm::from_raw(mock_vm.as_raw()) };

    let jni = java_vm.get_env(jni::JNI_VERSION_1_8).unwrap();
    assert!(Sentinel::Class.matches(jni.find_class("java/lang/Thread").unwrap()));
}

#[test]
fn vm_table_holds_only_get_env() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();

    assert_eq!(mock_vm.table().populated_slots(), vec!["reserved0", "GetEnv"]);
    assert_eq!(mock_vm.table().reserved0, env.as_raw() as *mut c_void);
    unsafe {
        assert!(ptr::eq(*mock_vm.as_raw(), mock_vm.table()));
    }
}

#[test]
fn unpopulated_vm_slots_are_reported() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();
    let raw = mock_vm.as_raw();

    assert!(unsafe { (**raw).AttachCurrentThread }.is_none());
    assert!(unsafe { (**raw).DestroyJavaVM }.is_none());
}

#[test]
fn get_env_rejects_null_out_pointer() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();
    let status = unsafe { vm::get_env(mock_vm.as_raw(), ptr::null_mut(), jni::JNI_VERSION_1_8) };
    assert_eq!(status, jni::JNI_ERR);
}

#[test]
fn get_env_can_hand_back_null() {
    let mock_vm = unsafe { MockVm::from_raw_env(ptr::null_mut()) };
    let java_vm = unsafe { JavaVm::from_raw(mock_vm.as_raw()) };

    assert!(matches!(java_vm.get_env(jni::JNI_VERSION_1_8), Err(Error::NullHandle("GetEnv"))));
}

#[test]
fn jvm_call_reaches_get_env() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();
    let mut out: *mut c_void = ptr::null_mut();

    let status = unsafe { mockjni::jvm_call!(mock_vm.as_raw(), GetEnv, &mut out, jni::JNI_VERSION_1_6) };
    assert_eq!(status, jni::JNI_OK);
    assert_eq!(out, env.as_raw() as *mut c_void);
}

#[test]
fn several_vms_share_one_environment() {
    let env = EnvBuilder::new().build();
    let first = env.vm();
    let second = env.vm();

    assert_ne!(first.as_raw(), second.as_raw());
    assert_eq!(first.env(), second.env());
}

#[test]
fn vm_handle_survives_moving_the_vm() {
    let env = EnvBuilder::new().build();
    let mock_vm = env.vm();
    let before = mock_vm.as_raw();
    let vms: Vec<MockVm<'_>> = vec![mock_vm];
    let mock_vm = vms.into_iter().next().unwrap();

    assert_eq!(mock_vm.as_raw(), before);
    let mut out: *mut c_void = ptr::null_mut();
    let status = unsafe { mockjni::jvm_call!(before, GetEnv, &mut out, jni::JNI_VERSION_1_8) };
    assert_eq!(status, jni::JNI_OK);
    assert_eq!(out, env.as_raw() as *mut c_void);
}
