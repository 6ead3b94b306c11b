//! RFC 7748 test vectors for the X25519 function and the typed key API.

use elligator2_dalek::{scalar_base_mult, x25519, ClampedSecret, PublicKey, X25519_BASEPOINT_BYTES};
use hex_literal::hex;

const ALICE_PRIVATE: [u8; 32] =
    hex!("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
const ALICE_PUBLIC: [u8; 32] =
    hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a");
const BOB_PRIVATE: [u8; 32] =
    hex!("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");
const BOB_PUBLIC: [u8; 32] =
    hex!("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f");
const SHARED: [u8; 32] =
    hex!("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");

/// RFC 7748 section 6.1.
#[test]
fn rfc7748_diffie_hellman() {
    let alice = scalar_base_mult(&ALICE_PRIVATE).unwrap();
    let bob = scalar_base_mult(&BOB_PRIVATE).unwrap();

    assert_eq!(alice.public.to_bytes(), ALICE_PUBLIC);
    assert_eq!(bob.public.to_bytes(), BOB_PUBLIC);

    let alice_shared = alice.secret.diffie_hellman(&bob.public);
    let bob_shared = bob.secret.diffie_hellman(&alice.public);

    assert_eq!(alice_shared.to_bytes(), SHARED);
    assert_eq!(bob_shared.to_bytes(), SHARED);
    assert!(alice_shared.was_contributory());
}

/// RFC 7748 section 5.2, first vector.
#[test]
fn rfc7748_ladder_vector_set_1() {
    let input_scalar = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let input_point = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");

    assert_eq!(x25519(input_scalar, input_point), expected);
}

/// RFC 7748 section 5.2, second vector.  The input point has bit 255
/// set, which must be ignored.
#[test]
fn rfc7748_ladder_vector_set_2() {
    let input_scalar = hex!("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
    let input_point = hex!("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");
    let expected = hex!("95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957");

    assert_eq!(x25519(input_scalar, input_point), expected);

    let secret = ClampedSecret::from(input_scalar);
    let shared = secret.diffie_hellman(&PublicKey::from(input_point));
    assert_eq!(shared.to_bytes(), expected);
}

fn do_iterations(n: usize) -> [u8; 32] {
    let mut k = X25519_BASEPOINT_BYTES;
    let mut u = X25519_BASEPOINT_BYTES;
    for _ in 0..n {
        let output = x25519(k, u);
        u = k;
        k = output;
    }
    k
}

#[test]
fn rfc7748_ladder_1_iteration() {
    assert_eq!(
        do_iterations(1),
        hex!("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
    );
}

#[test]
fn rfc7748_ladder_1000_iterations() {
    assert_eq!(
        do_iterations(1_000),
        hex!("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
    );
}

#[test]
#[ignore] // Very slow in debug builds
fn rfc7748_ladder_1000000_iterations() {
    assert_eq!(
        do_iterations(1_000_000),
        hex!("7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f2a5424")
    );
}

#[test]
fn zero_private_key_is_clamped() {
    let private_key = [0u8; 32];
    let keypair = scalar_base_mult(&private_key).unwrap();

    assert_eq!(
        keypair.secret.to_bytes(),
        hex!("0000000000000000000000000000000000000000000000000000000000000040")
    );
    assert_eq!(
        keypair.public.to_bytes(),
        hex!("2fe57da347cd62431528daac5fbb290730fff684afc4cfc2ed90995f58cb3b74")
    );
    assert_eq!(private_key, [0u8; 32]);
}

#[test]
fn scalar_base_mult_is_deterministic() {
    let first = scalar_base_mult(&BOB_PRIVATE).unwrap();
    let second = scalar_base_mult(&BOB_PRIVATE).unwrap();
    assert_eq!(first.public, second.public);
    assert_eq!(first.secret.as_bytes(), second.secret.as_bytes());
}
