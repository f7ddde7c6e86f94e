use std::mem::{offset_of, size_of};
use std::os::raw::c_char;
use std::ptr;

use mockjni::builder::OVERRIDABLE_SLOTS;
use mockjni::env::JniEnv;
use mockjni::jni::{self, JNIInvokeInterface_, JNINativeInterface_};
use mockjni::{EnvBuilder, Error, Sentinel, StringProfile};

const WORD: usize = size_of::<usize>();

#[test]
fn table_has_jdk_layout() {
    assert_eq!(JNINativeInterface_::SLOT_NAMES.len(), 236);
    assert_eq!(size_of::<JNINativeInterface_>(), 236 * WORD);
    assert_eq!(JNIInvokeInterface_::SLOT_NAMES.len(), 8);
    assert_eq!(size_of::<JNIInvokeInterface_>(), 8 * WORD);
}

#[test]
fn slots_sit_at_their_jni_index() {
    assert_eq!(offset_of!(JNINativeInterface_, GetVersion), 4 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, FindClass), 6 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, NewGlobalRef), 21 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, NewObject), 28 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, GetMethodID), 33 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, NewString), 163 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, GetStringCritical), 224 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, NewDirectByteBuffer), 229 * WORD);
    assert_eq!(offset_of!(JNINativeInterface_, GetDirectBufferCapacity), 231 * WORD);
    assert_eq!(offset_of!(JNIInvokeInterface_, GetEnv), 6 * WORD);
}

#[test]
fn slot_index_matches_offsets() {
    assert_eq!(JNINativeInterface_::slot_index("FindClass"), Some(6));
    assert_eq!(JNINativeInterface_::slot_index("NewDirectByteBuffer"), Some(229));
    assert_eq!(JNIInvokeInterface_::slot_index("GetEnv"), Some(6));
    assert_eq!(JNINativeInterface_::slot_index("NoSuchSlot"), None);
}

#[test]
fn every_overridable_slot_is_a_table_slot() {
    assert_eq!(OVERRIDABLE_SLOTS.len(), 19);
    for name in OVERRIDABLE_SLOTS {
        assert!(JNINativeInterface_::slot_index(name).is_some(), "{name}");
    }
}

#[test]
fn empty_table_has_no_populated_slots() {
    assert!(JNINativeInterface_::empty().populated_slots().is_empty());
    assert!(JNIInvokeInterface_::default().populated_slots().is_empty());
}

#[test]
fn defaults_populate_exactly_the_built_in_slots() {
    let env = EnvBuilder::new().build();
    let mut populated = env.populated_slots();
    populated.sort_unstable();

    let mut expected = vec![
        "FindClass",
        "NewGlobalRef",
        "DeleteGlobalRef",
        "DeleteLocalRef",
        "NewObject",
        "NewObjectV",
        "NewObjectA",
        "GetMethodID",
        "ThrowNew",
        "NewString",
        "GetStringLength",
        "GetStringCritical",
        "ReleaseStringCritical",
        "NewDirectByteBuffer",
        "GetDirectBufferAddress",
        "GetDirectBufferCapacity",
    ];
    expected.sort_unstable();

    assert_eq!(populated, expected);
}

#[test]
fn raw_handle_points_at_the_table() {
    let env = EnvBuilder::new().build();
    let raw = env.as_raw();
    assert!(!raw.is_null());
    unsafe {
        assert!(ptr::eq(*raw, env.table()));
    }
}

unsafe extern "system" fn null_class(_env: *mut jni::JNIEnv, _name: *const c_char) -> jni::jclass {
    ptr::null_mut()
}

unsafe extern "system" fn array_of_three(_env: *mut jni::JNIEnv, _array: jni::jarray) -> jni::jsize {
    3
}

unsafe extern "system" fn version_21(_env: *mut jni::JNIEnv) -> jni::jint {
    jni::JNI_VERSION_21
}

unsafe extern "system" fn throw_fails(_env: *mut jni::JNIEnv, _obj: jni::jthrowable) -> jni::jint {
    jni::JNI_ERR
}

#[test]
fn override_replaces_default() {
    let env = EnvBuilder::new().find_class(null_class).build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    match jni.find_class("java/lang/Object") {
        Err(Error::NullHandle("FindClass")) => {}
        other => panic!("expected NullHandle, got {other:?}"),
    }
}

#[test]
fn override_fills_slot_without_default() {
    let env = EnvBuilder::new().get_array_length(array_of_three).build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    assert!(env.populated_slots().contains(&"GetArrayLength"));
    assert_eq!(jni.get_array_length(ptr::null_mut()).unwrap(), 3);
}

#[test]
fn override_status_is_reported() {
    let env = EnvBuilder::new().throw(throw_fails).build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    assert!(matches!(jni.throw(ptr::null_mut()), Err(Error::Jni(jni::JNI_ERR))));
}

#[test]
fn unpopulated_slots_are_reported() {
    let env = EnvBuilder::new().build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    assert!(matches!(jni.get_version(), Err(Error::UnpopulatedSlot("GetVersion"))));
    assert!(matches!(jni.throw(ptr::null_mut()), Err(Error::UnpopulatedSlot("Throw"))));
    assert!(matches!(
        jni.get_array_length(ptr::null_mut()),
        Err(Error::UnpopulatedSlot("GetArrayLength"))
    ));
    assert!(matches!(
        jni.set_short_array_region(ptr::null_mut(), 0, &[1, 2]),
        Err(Error::UnpopulatedSlot("SetShortArrayRegion"))
    ));
    assert!(matches!(
        jni.set_float_array_region(ptr::null_mut(), 0, &[1.0]),
        Err(Error::UnpopulatedSlot("SetFloatArrayRegion"))
    ));
}

#[test]
fn slot_edit_reaches_any_slot() {
    let env = EnvBuilder::new()
        .slot(|table| table.GetVersion = Some(version_21))
        .build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    assert_eq!(jni.get_version().unwrap(), jni::JNI_VERSION_21);
}

#[test]
fn slot_edit_can_clear_a_default() {
    let env = EnvBuilder::new().slot(|table| table.FindClass = None).build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    assert!(!env.populated_slots().contains(&"FindClass"));
    assert!(matches!(jni.find_class("a/B"), Err(Error::UnpopulatedSlot("FindClass"))));
}

#[test]
fn jni_call_reaches_the_stub() {
    let env = EnvBuilder::new().build();
    let cls = unsafe { mockjni::jni_call!(env.as_raw(), FindClass, b"java/lang/String\0".as_ptr().cast()) };
    assert!(Sentinel::Class.matches(cls));
}

#[test]
fn handle_survives_moving_the_env() {
    fn build() -> mockjni::MockEnv {
        EnvBuilder::new().build()
    }

    let env = build();
    let before = env.as_raw();
    let mut envs = vec![env];
    envs.push(build());
    let env = Box::new(envs.swap_remove(0));

    assert_eq!(env.as_raw(), before);
    unsafe {
        assert!(ptr::eq(*before, env.table()));
        let cls = mockjni::jni_call!(before, FindClass, b"java/lang/String\0".as_ptr().cast());
        assert!(Sentinel::Class.matches(cls));
    }

    let jni = unsafe { JniEnv::from_raw(before) };
    let s = jni.new_string_from_str("moved").unwrap();
    assert_eq!(jni.get_string(s).unwrap(), "moved");
    assert_eq!(env.live_strings(), 1);
}

#[test]
fn leaked_handle_survives_moves_before_leak() {
    let env = EnvBuilder::new().build();
    let before = env.as_raw();
    let moved = Some(env);
    let raw = moved.map(mockjni::MockEnv::leak).unwrap();

    assert_eq!(raw, before);
    let jni = unsafe { JniEnv::from_raw(raw) };
    assert!(Sentinel::Class.matches(jni.find_class("java/lang/Object").unwrap()));
}

#[test]
#[should_panic(expected = "JNI slot GetVersion is not populated")]
fn jni_call_panics_on_empty_slot() {
    let env = EnvBuilder::new().build();
    unsafe {
        mockjni::jni_call!(env.as_raw(), GetVersion);
    }
}

#[test]
fn string_profile_is_selectable() {
    let copy = EnvBuilder::new().build();
    let null = EnvBuilder::new().string_profile(StringProfile::Null).build();

    assert_ne!(
        copy.table().NewString.map(|f| f as usize),
        null.table().NewString.map(|f| f as usize)
    );
}

#[test]
fn config_parses_profiles() {
    assert_eq!("copy".parse::<StringProfile>().unwrap(), StringProfile::Copy);
    assert_eq!(" NULL ".parse::<StringProfile>().unwrap(), StringProfile::Null);
    match "maybe".parse::<StringProfile>() {
        Err(Error::Config { key, value }) => {
            assert_eq!(key, mockjni::config::STRING_PROFILE_VAR);
            assert_eq!(value, "maybe");
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}
