use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use myth_defines::{DefineList, ShaderVariantCache, VarType};

fn build_defines(seed: i32) -> DefineList {
    let mut defines = DefineList::new(64).unwrap();
    for id in (0..64).step_by(3) {
        defines.set_int(id, seed + id as i32).unwrap();
    }
    defines.set_float(63, 0.5).unwrap();
    defines
}

fn bench_equality(c: &mut Criterion) {
    let a = build_defines(1);
    let b = a.deep_clone();
    let mut c_mismatch = a.deep_clone();
    c_mismatch.set_int(1, 1).unwrap();

    c.bench_function("define_list_eq_full_compare", |bench| {
        bench.iter(|| black_box(&a) == black_box(&b));
    });
    c.bench_function("define_list_eq_fingerprint_reject", |bench| {
        bench.iter(|| black_box(&a) == black_box(&c_mismatch));
    });
}

fn bench_source(c: &mut Criterion) {
    let defines = build_defines(7);
    let names: Vec<String> = (0..64).map(|i| format!("DEFINE_{i}")).collect();
    let mut types = vec![VarType::Int; 64];
    types[63] = VarType::Float;

    c.bench_function("define_list_generate_source", |bench| {
        let mut out = String::with_capacity(2048);
        bench.iter(|| {
            out.clear();
            defines
                .generate_source(&mut out, black_box(&names), Some(&types))
                .unwrap();
        });
    });
}

fn bench_cache_hit(c: &mut Criterion) {
    let names: Vec<String> = (0..64).map(|i| format!("DEFINE_{i}")).collect();
    let mut cache: ShaderVariantCache<usize> = ShaderVariantCache::new();
    let keys: Vec<DefineList> = (0..32).map(build_defines).collect();
    for key in &keys {
        cache
            .get_or_try_insert_with(key, &names, None, |src| {
                Ok::<_, myth_defines::DefineError>(src.len())
            })
            .unwrap();
    }

    c.bench_function("variant_cache_hit", |bench| {
        bench.iter(|| {
            for key in &keys {
                black_box(cache.get(black_box(key)));
            }
        });
    });
}

criterion_group!(benches, bench_equality, bench_source, bench_cache_hit);
criterion_main!(benches);
