// mockjni/src/sys/jni.rs
//
// Raw JNI types and the two function tables a mock has to fabricate.
//
// Layout follows the JDK 27 jni.h header. Every callable slot is an
// `Option<fn>` so an empty table is all-null instead of uninitialized;
// `Option<extern fn>` has the same size and ABI as a nullable C function
// pointer. Variadic and reserved slots stay raw `*mut c_void`.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;

// =============================================================================
// Primitive Types
// =============================================================================

pub type jint = i32;
pub type jlong = i64;
pub type jbyte = i8;
pub type jboolean = u8;
pub type jchar = u16;
pub type jshort = i16;
pub type jfloat = f32;
pub type jdouble = f64;
pub type jsize = jint;

// =============================================================================
// Reference Types (opaque pointers)
// =============================================================================

pub type jobject = *mut c_void;
pub type jclass = jobject;
pub type jstring = jobject;
pub type jarray = jobject;
pub type jthrowable = jobject;
pub type jweak = jobject;

pub type jobjectArray = jarray;
pub type jbooleanArray = jarray;
pub type jbyteArray = jarray;
pub type jcharArray = jarray;
pub type jshortArray = jarray;
pub type jintArray = jarray;
pub type jlongArray = jarray;
pub type jfloatArray = jarray;
pub type jdoubleArray = jarray;

pub type jmethodID = *mut c_void;
pub type jfieldID = *mut c_void;

#[repr(C)]
#[derive(Copy, Clone)]
pub union jvalue {
    pub z: jboolean,
    pub b: jbyte,
    pub c: jchar,
    pub s: jshort,
    pub i: jint,
    pub j: jlong,
    pub f: jfloat,
    pub d: jdouble,
    pub l: jobject,
}

// =============================================================================
// Constants
// =============================================================================

pub const JNI_OK: jint = 0;
pub const JNI_ERR: jint = -1;
pub const JNI_EDETACHED: jint = -2;
pub const JNI_EVERSION: jint = -3;

pub const JNI_TRUE: jboolean = 1;
pub const JNI_FALSE: jboolean = 0;

pub const JNI_VERSION_1_6: jint = 0x00010006;
pub const JNI_VERSION_1_8: jint = 0x00010008;
pub const JNI_VERSION_21: jint = 0x00150000;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum jobjectRefType {
    JNIInvalidRefType = 0,
    JNILocalRefType = 1,
    JNIGlobalRefType = 2,
    JNIWeakGlobalRefType = 3,
}

#[repr(C)]
pub struct JNINativeMethod {
    pub name: *const c_char,
    pub signature: *const c_char,
    pub fnPtr: *mut c_void,
}

/// `va_list` is platform-specific; the mock never walks one, so it is carried
/// as an opaque pointer.
pub type va_list = *mut c_void;

// =============================================================================
// Slot machinery
// =============================================================================

/// A single entry of a JNI function table.
///
/// Implemented for nullable function pointers and for the raw `*mut c_void`
/// used by reserved and variadic slots.
pub trait Slot {
    fn empty() -> Self;
    fn is_populated(&self) -> bool;
}

impl<F> Slot for Option<F> {
    fn empty() -> Self {
        None
    }

    fn is_populated(&self) -> bool {
        self.is_some()
    }
}

impl Slot for *mut c_void {
    fn empty() -> Self {
        ptr::null_mut()
    }

    fn is_populated(&self) -> bool {
        !self.is_null()
    }
}

macro_rules! slot_ty {
    ($recv:ident: $recv_ty:ty; reserved) => { *mut c_void };
    ($recv:ident: $recv_ty:ty; variadic) => { *mut c_void };
    ($recv:ident: $recv_ty:ty; fn($($arg:ident: $arg_ty:ty),* $(,)?) $(-> $ret:ty)?) => {
        Option<unsafe extern "system" fn($recv: *mut $recv_ty $(, $arg: $arg_ty)*) $(-> $ret)?>
    };
}

/// Declares a `#[repr(C)]` function table. Field order is the ABI: slot `n`
/// sits at offset `n * size_of::<usize>()`.
macro_rules! function_table {
    (
        $(#[$meta:meta])*
        pub struct $table:ident($recv:ident: $recv_ty:ty) {
            $( $slot:ident: [$($spec:tt)*] ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy)]
        pub struct $table {
            $( pub $slot: slot_ty!($recv: $recv_ty; $($spec)*), )*
        }

        impl $table {
            /// Slot names in table order; the index is the slot number.
            pub const SLOT_NAMES: &'static [&'static str] = &[$(stringify!($slot)),*];

            /// A table with every slot null.
            pub fn empty() -> Self {
                $table { $( $slot: Slot::empty(), )* }
            }

            /// Names of the slots that currently hold a callback.
            pub fn populated_slots(&self) -> Vec<&'static str> {
                let mut populated = Vec::new();
                $(
                    if Slot::is_populated(&self.$slot) {
                        populated.push(stringify!($slot));
                    }
                )*
                populated
            }

            /// Position of `name` in the table, if it is a slot of this table.
            pub fn slot_index(name: &str) -> Option<usize> {
                Self::SLOT_NAMES.iter().position(|slot| *slot == name)
            }
        }

        impl Default for $table {
            fn default() -> Self {
                Self::empty()
            }
        }
    };
}

// =============================================================================
// JNINativeInterface_ - the JNIEnv function table (236 slots)
// =============================================================================

function_table! {
    /// The JNI environment function table. `JNIEnv` points at a pointer to it.
    pub struct JNINativeInterface_(env: JNIEnv) {
        reserved0: [reserved],
        reserved1: [reserved],
        reserved2: [reserved],
        reserved3: [reserved],

        GetVersion: [fn() -> jint],
        DefineClass: [fn(name: *const c_char, loader: jobject, buf: *const jbyte, len: jsize) -> jclass],
        FindClass: [fn(name: *const c_char) -> jclass],
        FromReflectedMethod: [fn(method: jobject) -> jmethodID],
        FromReflectedField: [fn(field: jobject) -> jfieldID],
        ToReflectedMethod: [fn(cls: jclass, methodID: jmethodID, isStatic: jboolean) -> jobject],
        GetSuperclass: [fn(sub: jclass) -> jclass],
        IsAssignableFrom: [fn(sub: jclass, sup: jclass) -> jboolean],
        ToReflectedField: [fn(cls: jclass, fieldID: jfieldID, isStatic: jboolean) -> jobject],

        Throw: [fn(obj: jthrowable) -> jint],
        ThrowNew: [fn(clazz: jclass, msg: *const c_char) -> jint],
        ExceptionOccurred: [fn() -> jthrowable],
        ExceptionDescribe: [fn()],
        ExceptionClear: [fn()],
        FatalError: [fn(msg: *const c_char)],

        PushLocalFrame: [fn(capacity: jint) -> jint],
        PopLocalFrame: [fn(result: jobject) -> jobject],

        NewGlobalRef: [fn(lobj: jobject) -> jobject],
        DeleteGlobalRef: [fn(gref: jobject)],
        DeleteLocalRef: [fn(obj: jobject)],
        IsSameObject: [fn(obj1: jobject, obj2: jobject) -> jboolean],
        NewLocalRef: [fn(ref_: jobject) -> jobject],
        EnsureLocalCapacity: [fn(capacity: jint) -> jint],

        AllocObject: [fn(clazz: jclass) -> jobject],
        NewObject: [variadic],
        NewObjectV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jobject],
        NewObjectA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jobject],

        GetObjectClass: [fn(obj: jobject) -> jclass],
        IsInstanceOf: [fn(obj: jobject, clazz: jclass) -> jboolean],

        GetMethodID: [fn(clazz: jclass, name: *const c_char, sig: *const c_char) -> jmethodID],

        CallObjectMethod: [variadic],
        CallObjectMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jobject],
        CallObjectMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jobject],
        CallBooleanMethod: [variadic],
        CallBooleanMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jboolean],
        CallBooleanMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jboolean],
        CallByteMethod: [variadic],
        CallByteMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jbyte],
        CallByteMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jbyte],
        CallCharMethod: [variadic],
        CallCharMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jchar],
        CallCharMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jchar],
        CallShortMethod: [variadic],
        CallShortMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jshort],
        CallShortMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jshort],
        CallIntMethod: [variadic],
        CallIntMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jint],
        CallIntMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jint],
        CallLongMethod: [variadic],
        CallLongMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jlong],
        CallLongMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jlong],
        CallFloatMethod: [variadic],
        CallFloatMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jfloat],
        CallFloatMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jfloat],
        CallDoubleMethod: [variadic],
        CallDoubleMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list) -> jdouble],
        CallDoubleMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue) -> jdouble],
        CallVoidMethod: [variadic],
        CallVoidMethodV: [fn(obj: jobject, methodID: jmethodID, args: va_list)],
        CallVoidMethodA: [fn(obj: jobject, methodID: jmethodID, args: *const jvalue)],

        CallNonvirtualObjectMethod: [variadic],
        CallNonvirtualObjectMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jobject],
        CallNonvirtualObjectMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jobject],
        CallNonvirtualBooleanMethod: [variadic],
        CallNonvirtualBooleanMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jboolean],
        CallNonvirtualBooleanMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jboolean],
        CallNonvirtualByteMethod: [variadic],
        CallNonvirtualByteMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jbyte],
        CallNonvirtualByteMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jbyte],
        CallNonvirtualCharMethod: [variadic],
        CallNonvirtualCharMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jchar],
        CallNonvirtualCharMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jchar],
        CallNonvirtualShortMethod: [variadic],
        CallNonvirtualShortMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jshort],
        CallNonvirtualShortMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jshort],
        CallNonvirtualIntMethod: [variadic],
        CallNonvirtualIntMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jint],
        CallNonvirtualIntMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jint],
        CallNonvirtualLongMethod: [variadic],
        CallNonvirtualLongMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jlong],
        CallNonvirtualLongMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jlong],
        CallNonvirtualFloatMethod: [variadic],
        CallNonvirtualFloatMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jfloat],
        CallNonvirtualFloatMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jfloat],
        CallNonvirtualDoubleMethod: [variadic],
        CallNonvirtualDoubleMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list) -> jdouble],
        CallNonvirtualDoubleMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jdouble],
        CallNonvirtualVoidMethod: [variadic],
        CallNonvirtualVoidMethodV: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: va_list)],
        CallNonvirtualVoidMethodA: [fn(obj: jobject, clazz: jclass, methodID: jmethodID, args: *const jvalue)],

        GetFieldID: [fn(clazz: jclass, name: *const c_char, sig: *const c_char) -> jfieldID],
        GetObjectField: [fn(obj: jobject, fieldID: jfieldID) -> jobject],
        GetBooleanField: [fn(obj: jobject, fieldID: jfieldID) -> jboolean],
        GetByteField: [fn(obj: jobject, fieldID: jfieldID) -> jbyte],
        GetCharField: [fn(obj: jobject, fieldID: jfieldID) -> jchar],
        GetShortField: [fn(obj: jobject, fieldID: jfieldID) -> jshort],
        GetIntField: [fn(obj: jobject, fieldID: jfieldID) -> jint],
        GetLongField: [fn(obj: jobject, fieldID: jfieldID) -> jlong],
        GetFloatField: [fn(obj: jobject, fieldID: jfieldID) -> jfloat],
        GetDoubleField: [fn(obj: jobject, fieldID: jfieldID) -> jdouble],
        SetObjectField: [fn(obj: jobject, fieldID: jfieldID, val: jobject)],
        SetBooleanField: [fn(obj: jobject, fieldID: jfieldID, val: jboolean)],
        SetByteField: [fn(obj: jobject, fieldID: jfieldID, val: jbyte)],
        SetCharField: [fn(obj: jobject, fieldID: jfieldID, val: jchar)],
        SetShortField: [fn(obj: jobject, fieldID: jfieldID, val: jshort)],
        SetIntField: [fn(obj: jobject, fieldID: jfieldID, val: jint)],
        SetLongField: [fn(obj: jobject, fieldID: jfieldID, val: jlong)],
        SetFloatField: [fn(obj: jobject, fieldID: jfieldID, val: jfloat)],
        SetDoubleField: [fn(obj: jobject, fieldID: jfieldID, val: jdouble)],

        GetStaticMethodID: [fn(clazz: jclass, name: *const c_char, sig: *const c_char) -> jmethodID],

        CallStaticObjectMethod: [variadic],
        CallStaticObjectMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jobject],
        CallStaticObjectMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jobject],
        CallStaticBooleanMethod: [variadic],
        CallStaticBooleanMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jboolean],
        CallStaticBooleanMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jboolean],
        CallStaticByteMethod: [variadic],
        CallStaticByteMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jbyte],
        CallStaticByteMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jbyte],
        CallStaticCharMethod: [variadic],
        CallStaticCharMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jchar],
        CallStaticCharMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jchar],
        CallStaticShortMethod: [variadic],
        CallStaticShortMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jshort],
        CallStaticShortMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jshort],
        CallStaticIntMethod: [variadic],
        CallStaticIntMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jint],
        CallStaticIntMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jint],
        CallStaticLongMethod: [variadic],
        CallStaticLongMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jlong],
        CallStaticLongMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jlong],
        CallStaticFloatMethod: [variadic],
        CallStaticFloatMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jfloat],
        CallStaticFloatMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jfloat],
        CallStaticDoubleMethod: [variadic],
        CallStaticDoubleMethodV: [fn(clazz: jclass, methodID: jmethodID, args: va_list) -> jdouble],
        CallStaticDoubleMethodA: [fn(clazz: jclass, methodID: jmethodID, args: *const jvalue) -> jdouble],
        CallStaticVoidMethod: [variadic],
        CallStaticVoidMethodV: [fn(cls: jclass, methodID: jmethodID, args: va_list)],
        CallStaticVoidMethodA: [fn(cls: jclass, methodID: jmethodID, args: *const jvalue)],

        GetStaticFieldID: [fn(clazz: jclass, name: *const c_char, sig: *const c_char) -> jfieldID],
        GetStaticObjectField: [fn(clazz: jclass, fieldID: jfieldID) -> jobject],
        GetStaticBooleanField: [fn(clazz: jclass, fieldID: jfieldID) -> jboolean],
        GetStaticByteField: [fn(clazz: jclass, fieldID: jfieldID) -> jbyte],
        GetStaticCharField: [fn(clazz: jclass, fieldID: jfieldID) -> jchar],
        GetStaticShortField: [fn(clazz: jclass, fieldID: jfieldID) -> jshort],
        GetStaticIntField: [fn(clazz: jclass, fieldID: jfieldID) -> jint],
        GetStaticLongField: [fn(clazz: jclass, fieldID: jfieldID) -> jlong],
        GetStaticFloatField: [fn(clazz: jclass, fieldID: jfieldID) -> jfloat],
        GetStaticDoubleField: [fn(clazz: jclass, fieldID: jfieldID) -> jdouble],
        SetStaticObjectField: [fn(clazz: jclass, fieldID: jfieldID, value: jobject)],
        SetStaticBooleanField: [fn(clazz: jclass, fieldID: jfieldID, value: jboolean)],
        SetStaticByteField: [fn(clazz: jclass, fieldID: jfieldID, value: jbyte)],
        SetStaticCharField: [fn(clazz: jclass, fieldID: jfieldID, value: jchar)],
        SetStaticShortField: [fn(clazz: jclass, fieldID: jfieldID, value: jshort)],
        SetStaticIntField: [fn(clazz: jclass, fieldID: jfieldID, value: jint)],
        SetStaticLongField: [fn(clazz: jclass, fieldID: jfieldID, value: jlong)],
        SetStaticFloatField: [fn(clazz: jclass, fieldID: jfieldID, value: jfloat)],
        SetStaticDoubleField: [fn(clazz: jclass, fieldID: jfieldID, value: jdouble)],

        NewString: [fn(unicode: *const jchar, len: jsize) -> jstring],
        GetStringLength: [fn(str: jstring) -> jsize],
        GetStringChars: [fn(str: jstring, isCopy: *mut jboolean) -> *const jchar],
        ReleaseStringChars: [fn(str: jstring, chars: *const jchar)],
        NewStringUTF: [fn(utf: *const c_char) -> jstring],
        GetStringUTFLength: [fn(str: jstring) -> jsize],
        GetStringUTFChars: [fn(str: jstring, isCopy: *mut jboolean) -> *const c_char],
        ReleaseStringUTFChars: [fn(str: jstring, chars: *const c_char)],

        GetArrayLength: [fn(array: jarray) -> jsize],
        NewObjectArray: [fn(len: jsize, clazz: jclass, init: jobject) -> jobjectArray],
        GetObjectArrayElement: [fn(array: jobjectArray, index: jsize) -> jobject],
        SetObjectArrayElement: [fn(array: jobjectArray, index: jsize, val: jobject)],

        NewBooleanArray: [fn(len: jsize) -> jbooleanArray],
        NewByteArray: [fn(len: jsize) -> jbyteArray],
        NewCharArray: [fn(len: jsize) -> jcharArray],
        NewShortArray: [fn(len: jsize) -> jshortArray],
        NewIntArray: [fn(len: jsize) -> jintArray],
        NewLongArray: [fn(len: jsize) -> jlongArray],
        NewFloatArray: [fn(len: jsize) -> jfloatArray],
        NewDoubleArray: [fn(len: jsize) -> jdoubleArray],

        GetBooleanArrayElements: [fn(array: jbooleanArray, isCopy: *mut jboolean) -> *mut jboolean],
        GetByteArrayElements: [fn(array: jbyteArray, isCopy: *mut jboolean) -> *mut jbyte],
        GetCharArrayElements: [fn(array: jcharArray, isCopy: *mut jboolean) -> *mut jchar],
        GetShortArrayElements: [fn(array: jshortArray, isCopy: *mut jboolean) -> *mut jshort],
        GetIntArrayElements: [fn(array: jintArray, isCopy: *mut jboolean) -> *mut jint],
        GetLongArrayElements: [fn(array: jlongArray, isCopy: *mut jboolean) -> *mut jlong],
        GetFloatArrayElements: [fn(array: jfloatArray, isCopy: *mut jboolean) -> *mut jfloat],
        GetDoubleArrayElements: [fn(array: jdoubleArray, isCopy: *mut jboolean) -> *mut jdouble],

        ReleaseBooleanArrayElements: [fn(array: jbooleanArray, elems: *mut jboolean, mode: jint)],
        ReleaseByteArrayElements: [fn(array: jbyteArray, elems: *mut jbyte, mode: jint)],
        ReleaseCharArrayElements: [fn(array: jcharArray, elems: *mut jchar, mode: jint)],
        ReleaseShortArrayElements: [fn(array: jshortArray, elems: *mut jshort, mode: jint)],
        ReleaseIntArrayElements: [fn(array: jintArray, elems: *mut jint, mode: jint)],
        ReleaseLongArrayElements: [fn(array: jlongArray, elems: *mut jlong, mode: jint)],
        ReleaseFloatArrayElements: [fn(array: jfloatArray, elems: *mut jfloat, mode: jint)],
        ReleaseDoubleArrayElements: [fn(array: jdoubleArray, elems: *mut jdouble, mode: jint)],

        GetBooleanArrayRegion: [fn(array: jbooleanArray, start: jsize, len: jsize, buf: *mut jboolean)],
        GetByteArrayRegion: [fn(array: jbyteArray, start: jsize, len: jsize, buf: *mut jbyte)],
        GetCharArrayRegion: [fn(array: jcharArray, start: jsize, len: jsize, buf: *mut jchar)],
        GetShortArrayRegion: [fn(array: jshortArray, start: jsize, len: jsize, buf: *mut jshort)],
        GetIntArrayRegion: [fn(array: jintArray, start: jsize, len: jsize, buf: *mut jint)],
        GetLongArrayRegion: [fn(array: jlongArray, start: jsize, len: jsize, buf: *mut jlong)],
        GetFloatArrayRegion: [fn(array: jfloatArray, start: jsize, len: jsize, buf: *mut jfloat)],
        GetDoubleArrayRegion: [fn(array: jdoubleArray, start: jsize, len: jsize, buf: *mut jdouble)],

        SetBooleanArrayRegion: [fn(array: jbooleanArray, start: jsize, len: jsize, buf: *const jboolean)],
        SetByteArrayRegion: [fn(array: jbyteArray, start: jsize, len: jsize, buf: *const jbyte)],
        SetCharArrayRegion: [fn(array: jcharArray, start: jsize, len: jsize, buf: *const jchar)],
        SetShortArrayRegion: [fn(array: jshortArray, start: jsize, len: jsize, buf: *const jshort)],
        SetIntArrayRegion: [fn(array: jintArray, start: jsize, len: jsize, buf: *const jint)],
        SetLongArrayRegion: [fn(array: jlongArray, start: jsize, len: jsize, buf: *const jlong)],
        SetFloatArrayRegion: [fn(array: jfloatArray, start: jsize, len: jsize, buf: *const jfloat)],
        SetDoubleArrayRegion: [fn(array: jdoubleArray, start: jsize, len: jsize, buf: *const jdouble)],

        RegisterNatives: [fn(clazz: jclass, methods: *const JNINativeMethod, nMethods: jint) -> jint],
        UnregisterNatives: [fn(clazz: jclass) -> jint],

        MonitorEnter: [fn(obj: jobject) -> jint],
        MonitorExit: [fn(obj: jobject) -> jint],

        GetJavaVM: [fn(vm: *mut *mut JavaVM) -> jint],

        GetStringRegion: [fn(str: jstring, start: jsize, len: jsize, buf: *mut jchar)],
        GetStringUTFRegion: [fn(str: jstring, start: jsize, len: jsize, buf: *mut c_char)],

        GetPrimitiveArrayCritical: [fn(array: jarray, isCopy: *mut jboolean) -> *mut c_void],
        ReleasePrimitiveArrayCritical: [fn(array: jarray, carray: *mut c_void, mode: jint)],

        GetStringCritical: [fn(string: jstring, isCopy: *mut jboolean) -> *const jchar],
        ReleaseStringCritical: [fn(string: jstring, cstring: *const jchar)],

        NewWeakGlobalRef: [fn(obj: jobject) -> jweak],
        DeleteWeakGlobalRef: [fn(ref_: jweak)],

        ExceptionCheck: [fn() -> jboolean],

        NewDirectByteBuffer: [fn(address: *mut c_void, capacity: jlong) -> jobject],
        GetDirectBufferAddress: [fn(buf: jobject) -> *mut c_void],
        GetDirectBufferCapacity: [fn(buf: jobject) -> jlong],

        GetObjectRefType: [fn(obj: jobject) -> jobjectRefType],
        GetModule: [fn(clazz: jclass) -> jobject],
        IsVirtualThread: [fn(obj: jobject) -> jboolean],
        GetStringUTFLengthAsLong: [fn(str: jstring) -> jlong],
    }
}

/// JNIEnv is directly the vtable pointer (C ABI definition).
pub type JNIEnv = *const JNINativeInterface_;

// =============================================================================
// JNIInvokeInterface_ - the JavaVM function table
// =============================================================================

function_table! {
    /// The invocation interface. `reserved0` is free for the implementation;
    /// the mock keeps its environment handle there.
    pub struct JNIInvokeInterface_(vm: JavaVM) {
        reserved0: [reserved],
        reserved1: [reserved],
        reserved2: [reserved],

        DestroyJavaVM: [fn() -> jint],
        AttachCurrentThread: [fn(penv: *mut *mut c_void, args: *mut c_void) -> jint],
        DetachCurrentThread: [fn() -> jint],
        GetEnv: [fn(penv: *mut *mut c_void, version: jint) -> jint],
        AttachCurrentThreadAsDaemon: [fn(penv: *mut *mut c_void, args: *mut c_void) -> jint],
    }
}

/// JavaVM is directly the vtable pointer (C ABI definition).
pub type JavaVM = *const JNIInvokeInterface_;

// =============================================================================
// Helper macros
// =============================================================================

/// Calls a JNI function through the vtable.
///
/// `env` is a `*mut JNIEnv`. Panics naming the slot when it is empty: reaching
/// an unpopulated slot is a bug in the table under test, not a recoverable
/// condition.
///
/// Usage: `jni_call!(env, FindClass, b"java/lang/String\0".as_ptr().cast())`
#[macro_export]
macro_rules! jni_call {
    ($env:expr, $func:ident $(, $args:expr)*) => {{
        let env_ptr = $env;
        match (**env_ptr).$func {
            Some(f) => f(env_ptr $(, $args)*),
            None => panic!(concat!("JNI slot ", stringify!($func), " is not populated")),
        }
    }};
}

/// Calls a JavaVM function through the vtable. Same contract as [`jni_call!`].
#[macro_export]
macro_rules! jvm_call {
    ($vm:expr, $func:ident $(, $args:expr)*) => {{
        let vm_ptr = $vm;
        match (**vm_ptr).$func {
            Some(f) => f(vm_ptr $(, $args)*),
            None => panic!(concat!("JavaVM slot ", stringify!($func), " is not populated")),
        }
    }};
}
