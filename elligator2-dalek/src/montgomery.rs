// -*- mode: rust; -*-
//
// This file is part of elligator2-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Scalar multiplication on the Montgomery form of Curve25519.
//!
//! We use variables \\( u, v \\) for the Montgomery curve
//! \\( v\^2 = u\^3 + A u\^2 + u \\), \\( A = 486662 \\).
//!
//! Montgomery arithmetic works not on the curve itself, but on the
//! \\(u\\)-line, which discards sign information and unifies the curve
//! and its quadratic twist.  See [_Montgomery curves and their
//! arithmetic_][costello-smith] by Costello and Smith for more details.
//!
//! The `MontgomeryPoint` struct contains the affine \\(u\\)-coordinate
//! \\(u\_0(P)\\) of a point \\(P\\) on either the curve or the twist.
//! Here the map \\(u\_0 : \mathcal M \rightarrow \mathbb F\_p \\) is
//! defined by \\(u\_0((u,v)) = u\\); \\(u\_0(\mathcal O) = 0\\).  See
//! section 5.4 of Costello-Smith for more details.
//!
//! # Scalar Multiplication
//!
//! Scalar multiplication is provided by [`MontgomeryPoint::mul_clamped`]
//! and [`MontgomeryPoint::mul_base_clamped`], which implement the
//! Montgomery ladder over a clamped scalar.
//!
//! # Recovering \\(v\\)
//!
//! The Elligator2 inverse map needs to know which of the two points
//! \\((u, \pm v)\\) a public key is.  The ladder keeps both \\([k]P\\)
//! and \\([k+1]P\\), which together with \\(P = (u\_P, v\_P)\\) determine
//! \\(v([k]P)\\) (Okeya and Sakurai; Algorithm 5 of Costello-Smith).
//!
//! [costello-smith]: https://eprint.iacr.org/2017/212.pdf

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.  Yeah, you heard me, rustc, I'm gonna have my
// affine and projective cakes and eat both of them too.
#![allow(non_snake_case)]

use core::hash::{Hash, Hasher};

use crate::constants::{APLUS2_OVER_FOUR, MONTGOMERY_A, X25519_BASEPOINT, X25519_BASEPOINT_V};
use crate::field::FieldElement;
use crate::scalar::{bits_be, clamp_integer};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Holds the \\(u\\)-coordinate of a point on the Montgomery form of
/// Curve25519 or its twist.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MontgomeryPoint(pub [u8; 32]);

/// Equality of `MontgomeryPoint`s is defined mod p.
impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        let self_fe = FieldElement::from_bytes(&self.0);
        let other_fe = FieldElement::from_bytes(&other.0);

        self_fe.ct_eq(&other_fe)
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

// Equal MontgomeryPoints must hash to the same value. So we have to get them into a canonical
// encoding first
impl Hash for MontgomeryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Do a round trip through a `FieldElement`. `as_bytes` is guaranteed to give a canonical
        // 32-byte encoding
        let canonical_bytes = FieldElement::from_bytes(&self.0).as_bytes();
        canonical_bytes.hash(state);
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MontgomeryPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl MontgomeryPoint {
    /// Multiply this point by `clamp_integer(bytes)`. For a description of clamping, see
    /// [`clamp_integer`].
    pub fn mul_clamped(self, bytes: [u8; 32]) -> Self {
        let mut clamped = clamp_integer(bytes);
        let product = self.mul_bits_be(bits_be(&clamped));
        #[cfg(feature = "zeroize")]
        clamped.zeroize();
        product
    }

    /// Multiply the basepoint by `clamp_integer(bytes)`. For a description of clamping, see
    /// [`clamp_integer`].
    pub fn mul_base_clamped(bytes: [u8; 32]) -> Self {
        X25519_BASEPOINT.mul_clamped(bytes)
    }

    /// Multiply the basepoint by `clamp_integer(bytes)`, also returning
    /// the \\(v\\)-coordinate of the product.
    ///
    /// The sign of \\(v\\) is relative to the basepoint
    /// \\((9, v\_B)\\) with \\(v\_B\\) = `X25519_BASEPOINT_V`.
    pub(crate) fn mul_base_clamped_with_v(bytes: [u8; 32]) -> (MontgomeryPoint, FieldElement) {
        let mut clamped = clamp_integer(bytes);
        let affine_u = FieldElement::from_bytes(&X25519_BASEPOINT.0);
        let (x0, x1) = ladder(&affine_u, bits_be(&clamped));
        #[cfg(feature = "zeroize")]
        clamped.zeroize();

        let v = recover_v(&affine_u, &X25519_BASEPOINT_V, &x0, &x1);

        (x0.as_affine(), v)
    }

    /// Given `self` \\( = u\_0(P) \\), and a big-endian bit representation of an integer
    /// \\(n\\), return \\( u\_0(\[n\]P) \\). This is constant time in the length of `bits`.
    ///
    /// **NOTE:** You probably do not want to use this function. Almost every protocol built on
    /// Curve25519 uses _clamped multiplication_, explained
    /// [here](https://neilmadden.blog/2020/05/28/whats-the-curve25519-clamping-all-about/).
    /// When in doubt, use [`Self::mul_clamped`].
    pub fn mul_bits_be(&self, bits: impl Iterator<Item = bool>) -> MontgomeryPoint {
        let affine_u = FieldElement::from_bytes(&self.0);
        let (x0, _) = ladder(&affine_u, bits);

        x0.as_affine()
    }

    /// View this `MontgomeryPoint` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert this `MontgomeryPoint` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Determine in constant time whether this is \\(u = 0\\), the
    /// encoding of the identity (and of the point of order 2).
    pub(crate) fn is_identity(&self) -> Choice {
        FieldElement::from_bytes(&self.0).is_zero()
    }
}

/// A `ProjectivePoint` holds a point on the projective line
/// \\( \mathbb P(\mathbb F\_p) \\), which we identify with the Kummer
/// line of the Montgomery curve.
#[derive(Copy, Clone, Debug)]
struct ProjectivePoint {
    pub U: FieldElement,
    pub W: FieldElement,
}

impl ProjectivePoint {
    /// The point at infinity, \\((1 : 0)\\).
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            U: FieldElement::ONE,
            W: FieldElement::ZERO,
        }
    }

    /// Dehomogenize this point to affine coordinates.
    ///
    /// # Return
    ///
    /// * \\( u = U / W \\) if \\( W \neq 0 \\);
    /// * \\( 0 \\) if \\( W \eq 0 \\);
    fn as_affine(&self) -> MontgomeryPoint {
        let u = &self.U * &self.W.invert();
        MontgomeryPoint(u.as_bytes())
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(
        a: &ProjectivePoint,
        b: &ProjectivePoint,
        choice: Choice,
    ) -> ProjectivePoint {
        ProjectivePoint {
            U: FieldElement::conditional_select(&a.U, &b.U, choice),
            W: FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }

    fn conditional_swap(a: &mut ProjectivePoint, b: &mut ProjectivePoint, choice: Choice) {
        FieldElement::conditional_swap(&mut a.U, &mut b.U, choice);
        FieldElement::conditional_swap(&mut a.W, &mut b.W, choice);
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.U.zeroize();
        self.W.zeroize();
    }
}

/// Perform the double-and-add step of the Montgomery ladder.
///
/// Given projective points
/// \\( (U\_P : W\_P) = u(P) \\),
/// \\( (U\_Q : W\_Q) = u(Q) \\),
/// and the affine difference
/// \\(      u\_{P-Q} = u(P-Q) \\), set
/// $$
///     (U\_P : W\_P) \gets u(\[2\]P)
/// $$
/// and
/// $$
///     (U\_Q : W\_Q) \gets u(P + Q).
/// $$
#[rustfmt::skip] // keep alignment of explanatory comments
fn differential_add_and_double(
    P: &mut ProjectivePoint,
    Q: &mut ProjectivePoint,
    affine_PmQ: &FieldElement,
) {
    let t0 = &P.U + &P.W;
    let t1 = &P.U - &P.W;
    let t2 = &Q.U + &Q.W;
    let t3 = &Q.U - &Q.W;

    let t4 = t0.square();   // (U_P + W_P)^2 = U_P^2 + 2 U_P W_P + W_P^2
    let t5 = t1.square();   // (U_P - W_P)^2 = U_P^2 - 2 U_P W_P + W_P^2

    let t6 = &t4 - &t5;     // 4 U_P W_P

    let t7 = &t0 * &t3;     // (U_P + W_P) (U_Q - W_Q) = U_P U_Q + W_P U_Q - U_P W_Q - W_P W_Q
    let t8 = &t1 * &t2;     // (U_P - W_P) (U_Q + W_Q) = U_P U_Q - W_P U_Q + U_P W_Q - W_P W_Q

    let t9  = &t7 + &t8;    // 2 (U_P U_Q - W_P W_Q)
    let t10 = &t7 - &t8;    // 2 (W_P U_Q - U_P W_Q)

    let t11 =  t9.square(); // 4 (U_P U_Q - W_P W_Q)^2
    let t12 = t10.square(); // 4 (W_P U_Q - U_P W_Q)^2

    let t13 = &APLUS2_OVER_FOUR * &t6; // (A + 2) U_P U_Q

    let t14 = &t4 * &t5;    // ((U_P + W_P)(U_P - W_P))^2 = (U_P^2 - W_P^2)^2
    let t15 = &t13 + &t5;   // (U_P - W_P)^2 + (A + 2) U_P W_P

    let t16 = &t6 * &t15;   // 4 (U_P W_P) ((U_P - W_P)^2 + (A + 2) U_P W_P)

    let t17 = affine_PmQ * &t12; // U_D * 4 (W_P U_Q - U_P W_Q)^2
    let t18 = t11;               // W_D * 4 (U_P U_Q - W_P W_Q)^2

    P.U = t14;  // U_{P'} = (U_P + W_P)^2 (U_P - W_P)^2
    P.W = t16;  // W_{P'} = (4 U_P W_P) ((U_P - W_P)^2 + ((A + 2)/4) 4 U_P W_P)
    Q.U = t18;  // U_{Q'} = W_D * 4 (U_P U_Q - W_P W_Q)^2
    Q.W = t17;  // W_{Q'} = U_D * 4 (W_P U_Q - U_P W_Q)^2
}

/// Run the Montgomery ladder on the affine \\(u\\)-coordinate
/// `affine_u` \\( = u(P) \\), returning \\( (u(\[n\]P), u(\[n+1\]P)) \\)
/// in projective form, where \\(n\\) is the big-endian integer `bits`.
///
/// Each step does the same field operations and one conditional swap,
/// whatever the bit.
fn ladder(
    affine_u: &FieldElement,
    bits: impl Iterator<Item = bool>,
) -> (ProjectivePoint, ProjectivePoint) {
    let mut x0 = ProjectivePoint::identity();
    let mut x1 = ProjectivePoint {
        U: *affine_u,
        W: FieldElement::ONE,
    };

    // Go through the bits from most to least significant, using a sliding window of 2
    let mut prev_bit = false;
    for cur_bit in bits {
        let choice: u8 = (prev_bit ^ cur_bit) as u8;

        debug_assert!(choice == 0 || choice == 1);

        ProjectivePoint::conditional_swap(&mut x0, &mut x1, choice.into());
        differential_add_and_double(&mut x0, &mut x1, affine_u);

        prev_bit = cur_bit;
    }
    // The final value of prev_bit above is scalar.bits()[0], i.e., the LSB of scalar
    ProjectivePoint::conditional_swap(&mut x0, &mut x1, Choice::from(prev_bit as u8));
    // Don't leave the bit in the stack
    #[cfg(feature = "zeroize")]
    prev_bit.zeroize();

    (x0, x1)
}

/// Recover the affine \\(v\\)-coordinate of \\(Q = [n]P\\).
///
/// Inputs are the affine \\(P = (u\_P, v\_P)\\), with \\(v\_P \neq 0\\),
/// and the projective \\(u(Q)\\) and \\(u(Q + P)\\) produced by the
/// ladder.  Returns zero if either of them is the point at infinity.
#[rustfmt::skip] // keep alignment of explanatory comments
fn recover_v(
    u_P: &FieldElement,
    v_P: &FieldElement,
    Q: &ProjectivePoint,
    QpP: &ProjectivePoint,
) -> FieldElement {
    let two_A = &MONTGOMERY_A + &MONTGOMERY_A;

    let t0 = u_P * &Q.W;                  // u_P W_Q
    let t1 = &Q.U + &t0;                  // U_Q + u_P W_Q
    let t2 = &(&Q.U - &t0).square() * &QpP.U; // (U_Q - u_P W_Q)^2 U_{Q+P}
    let t3 = &two_A * &Q.W;               // 2A W_Q
    let t4 = &t1 + &t3;                   // U_Q + u_P W_Q + 2A W_Q
    let t5 = &(u_P * &Q.U) + &Q.W;        // u_P U_Q + W_Q
    let t6 = &(&(&t4 * &t5) - &(&t3 * &Q.W)) * &QpP.W;

    let V = &t6 - &t2;                    // V_Q, scaled by 2 v_P W_Q W_{Q+P}

    let t7 = &(&(v_P + v_P) * &Q.W) * &QpP.W; // 2 v_P W_Q W_{Q+P}
    let W = &t7 * &Q.W;                   // common denominator of V_Q

    &V * &W.invert()
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    /// Zero private key, clamped to 2^254.
    const ZERO_KEY_PUBLIC: [u8; 32] =
        hex!("2fe57da347cd62431528daac5fbb290730fff684afc4cfc2ed90995f58cb3b74");

    fn on_curve(u: &FieldElement, v: &FieldElement) -> bool {
        let u2 = u.square();
        let rhs = &(&(&u2 * u) + &(&MONTGOMERY_A * &u2)) + u;
        v.square() == rhs
    }

    #[test]
    fn eq_defined_mod_p() {
        let mut u18_bytes = [0u8; 32];
        u18_bytes[0] = 18;
        let u18 = MontgomeryPoint(u18_bytes);
        let u18_unred = MontgomeryPoint([255; 32]);

        assert_eq!(u18, u18_unred);
    }

    #[test]
    fn hash_defined_mod_p() {
        use std::collections::hash_map::DefaultHasher;

        fn hash(p: &MontgomeryPoint) -> u64 {
            let mut hasher = DefaultHasher::new();
            p.hash(&mut hasher);
            hasher.finish()
        }

        let mut u18_bytes = [0u8; 32];
        u18_bytes[0] = 18;
        assert_eq!(hash(&MontgomeryPoint(u18_bytes)), hash(&MontgomeryPoint([255; 32])));
    }

    #[test]
    fn mul_base_clamped_zero_key() {
        let public = MontgomeryPoint::mul_base_clamped([0u8; 32]);
        assert_eq!(public.to_bytes(), ZERO_KEY_PUBLIC);
    }

    #[test]
    fn mul_base_clamped_ignores_clamped_bits() {
        let mut key = [0u8; 32];
        key[0] = 0x07;
        key[31] = 0x80;
        assert_eq!(
            MontgomeryPoint::mul_base_clamped(key),
            MontgomeryPoint::mul_base_clamped([0u8; 32]),
        );
    }

    #[test]
    fn mul_bits_be_small_multiples() {
        let basepoint = X25519_BASEPOINT;
        let b2 = basepoint.mul_bits_be([true, false].into_iter());
        let b3 = basepoint.mul_bits_be([true, true].into_iter());
        let b6 = b3.mul_bits_be([true, false].into_iter());
        let b6_direct = basepoint.mul_bits_be([true, true, false].into_iter());
        assert_eq!(b6, b6_direct);
        assert_eq!(b2.mul_bits_be([true, true].into_iter()), b6);
        // Leading zero bits change nothing.
        assert_eq!(basepoint.mul_bits_be([false, false, true, true].into_iter()), b3);
    }

    #[test]
    fn mul_bits_be_zero_is_identity() {
        let zero = X25519_BASEPOINT.mul_bits_be([false, false].into_iter());
        assert!(bool::from(zero.is_identity()));
        let empty = X25519_BASEPOINT.mul_bits_be(core::iter::empty());
        assert!(bool::from(empty.is_identity()));
    }

    #[test]
    fn recovered_v_is_on_curve() {
        for seed in 0u8..8 {
            let key = [seed.wrapping_mul(37).wrapping_add(1); 32];
            let (point, v) = MontgomeryPoint::mul_base_clamped_with_v(key);
            assert_eq!(point, MontgomeryPoint::mul_base_clamped(key));
            let u = FieldElement::from_bytes(&point.0);
            assert!(on_curve(&u, &v), "seed {}", seed);
        }
    }

    /// With n = 1 the recovered v must be the basepoint's own v.
    #[test]
    fn recover_v_of_basepoint() {
        let affine_u = FieldElement::from_bytes(&X25519_BASEPOINT.0);
        let (x0, x1) = ladder(&affine_u, [true].into_iter());
        let v = recover_v(&affine_u, &X25519_BASEPOINT_V, &x0, &x1);
        assert_eq!(v, X25519_BASEPOINT_V);
        assert_eq!(x0.as_affine(), X25519_BASEPOINT);
    }

    /// [2]B computed with the tangent-line formula; checks the sign of v
    /// as well as u.
    #[test]
    fn recover_v_of_double_basepoint() {
        let u = FieldElement::from_bytes(&X25519_BASEPOINT.0);
        let v = X25519_BASEPOINT_V;
        let one = FieldElement::ONE;
        let two = &one + &one;
        let three = &two + &one;

        // lambda = (3u^2 + 2Au + 1) / 2v
        let num = &(&(&three * &u.square()) + &(&(&two * &MONTGOMERY_A) * &u)) + &one;
        let lambda = &num * &(&two * &v).invert();
        // u2 = lambda^2 - A - 2u ; v2 = lambda (u - u2) - v
        let u2 = &(&lambda.square() - &MONTGOMERY_A) - &(&two * &u);
        let v2 = &(&lambda * &(&u - &u2)) - &v;

        let (x0, x1) = ladder(&u, [true, false].into_iter());
        assert_eq!(x0.as_affine().0, u2.as_bytes());
        assert_eq!(recover_v(&u, &v, &x0, &x1), v2);
    }
}
