// -*- mode: rust; -*-
//
// This file is part of elligator2-dalek.
// See LICENSE for licensing information.

//! Benchmark key derivation and both directions of the Elligator2 map.

use criterion::{criterion_group, criterion_main, Criterion};

use rand::{thread_rng, Rng};

use elligator2_dalek::{
    public_key_from_representative, representative_from_private_key, scalar_base_mult,
    ClampedSecret, Error, PublicKey,
};

/// Find a private key whose public key has a representative.
fn representable_private_key() -> [u8; 32] {
    let mut rng = thread_rng();
    loop {
        let private = rng.gen::<[u8; 32]>();
        match representative_from_private_key(&private, 0) {
            Ok(_) => return private,
            Err(Error::NotRepresentable) => continue,
            Err(e) => panic!("{}", e),
        }
    }
}

fn bench_scalar_base_mult(c: &mut Criterion) {
    let private = thread_rng().gen::<[u8; 32]>();

    c.bench_function("scalar_base_mult", move |b| {
        b.iter(|| scalar_base_mult(&private))
    });
}

fn bench_representative_from_private_key(c: &mut Criterion) {
    let private = representable_private_key();

    c.bench_function("representative_from_private_key", move |b| {
        b.iter(|| representative_from_private_key(&private, 0x80))
    });
}

fn bench_public_key_from_representative(c: &mut Criterion) {
    let representative = thread_rng().gen::<[u8; 32]>();

    c.bench_function("public_key_from_representative", move |b| {
        b.iter(|| public_key_from_representative(&representative))
    });
}

fn bench_diffie_hellman(c: &mut Criterion) {
    let bob_public = PublicKey::from(&ClampedSecret::from(thread_rng().gen::<[u8; 32]>()));

    c.bench_function("diffie_hellman", move |b| {
        b.iter_with_setup(
            || ClampedSecret::from(thread_rng().gen::<[u8; 32]>()),
            |alice_secret| alice_secret.diffie_hellman(&bob_public),
        )
    });
}

criterion_group! {
    name = elligator2_benches;
    config = Criterion::default();
    targets =
        bench_scalar_base_mult,
        bench_representative_from_private_key,
        bench_public_key_from_representative,
        bench_diffie_hellman,
}
criterion_main! {
    elligator2_benches,
}
