use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mockjni::env::JniEnv;
use mockjni::EnvBuilder;

fn sample_units(len: usize) -> Vec<u16> {
    "The quick brown fox jumps over the lazy dog. "
        .encode_utf16()
        .cycle()
        .take(len)
        .collect()
}

fn bench_env_build(c: &mut Criterion) {
    c.bench_function("env_build", |b| {
        b.iter(|| black_box(EnvBuilder::new().build()))
    });
}

fn bench_string_round_trip(c: &mut Criterion) {
    let env = EnvBuilder::new().build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };
    let units = sample_units(256);

    c.bench_function("new_string_release_256", |b| {
        b.iter(|| {
            let s = jni.new_string(black_box(&units)).unwrap();
            let len = jni.get_string_length(s).unwrap();
            jni.release_string_critical(s, std::ptr::null()).unwrap();
            black_box(len)
        })
    });
}

fn bench_find_class(c: &mut Criterion) {
    let env = EnvBuilder::new().build();
    let jni = unsafe { JniEnv::from_raw(env.as_raw()) };

    c.bench_function("find_class", |b| {
        b.iter(|| black_box(jni.find_class(black_box("java/lang/String")).unwrap()))
    });
}

criterion_group!(benches, bench_env_build, bench_string_round_trip, bench_find_class);
criterion_main!(benches);
