use cryptal_ec::montgomery::{x448, x25519};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_x25519(c: &mut Criterion) {
    let scalar = [0x5au8; 32];
    let mut u = [0u8; 32];
    u[0] = 9;

    c.bench_function("x25519", |b| {
        b.iter(|| x25519(black_box(&scalar), black_box(&u)))
    });
}

pub fn bench_x448(c: &mut Criterion) {
    let scalar = [0x5au8; 56];
    let mut u = [0u8; 56];
    u[0] = 5;

    c.bench_function("x448", |b| b.iter(|| x448(black_box(&scalar), black_box(&u))));
}

criterion_group!(benches, bench_x25519, bench_x448);
criterion_main!(benches);
