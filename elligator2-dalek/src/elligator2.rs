// -*- mode: rust; -*-
//
// This file is part of elligator2-dalek.
// See LICENSE for licensing information.

//! Functions mapping curve points to representative values and back
//! again.
//!
//! This is the Elligator2 variant deployed by obfs4 and its relatives
//! (agl's `extra25519`): the direct map takes the low 255 bits of a
//! representative, and the inverse map always produces a representative
//! in \\([0, (p-1)/2]\\), leaving the top bit for the caller's tweak.
//! Bit 254 of its output is therefore always clear, and only the points
//! the caller hands in (base point multiples, in this crate) are ever
//! encoded; neither the output nor its image is uniformly distributed.
//!
//! ## Direct map
//!
//! For a field element \\(r\\):
//!
//! $$
//! d = \frac{-A}{1 + 2r\^2}, \qquad
//! \varepsilon = d\^3 + A d\^2 + d, \qquad
//! u = \begin{cases} d & \varepsilon \text{ square} \\\\ -d - A & \text{otherwise} \end{cases}
//! $$
//!
//! The denominator never vanishes since \\(-1/2\\) is not a square
//! modulo \\(p\\).
//!
//! ## Inverse map
//!
//! A point \\((u, v)\\) has a representative exactly when
//! \\(-2u(u+A)\\) is a nonzero square.  The representative is
//! \\(\sqrt{-u / (2(u+A))}\\) when \\(v \le (p-1)/2\\) and
//! \\(\sqrt{-(u+A) / (2u)}\\) otherwise, taking whichever root is at
//! most \\((p-1)/2\\).
//!
//! ## Security
//!
//! All operations here are constant-time: no secret-dependent branches
//! and no secret-dependent memory accesses.

use crate::constants::{MONTGOMERY_A, MONTGOMERY_A_NEG, SMALL_ORDER_U};
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

/// bitmask for a single byte when clearing the high order bit of a representative
pub(crate) const MASK_UNSET_BYTE: u8 = 0x7f;
/// bitmask for a single byte when setting the high order bit of a representative
pub(crate) const MASK_SET_BYTE: u8 = 0x80;

/// Map a field element to the \\(u\\)-coordinate of a curve point.
pub(crate) fn map_to_curve(r: &FieldElement) -> FieldElement {
    let one = FieldElement::ONE;

    let d_1 = &one + &r.square2(); /* 1 + 2r^2 */
    let d = &MONTGOMERY_A_NEG * &d_1.invert(); /* d = -A/(1+2r^2) */

    let inner = &(&d.square() + &(&d * &MONTGOMERY_A)) + &one;
    let eps = &d * &inner; /* eps = d^3 + Ad^2 + d */

    let eps_is_sq = eps.is_square();

    /* A_temp = 0, or A if nonsquare */
    let a_temp = FieldElement::conditional_select(&MONTGOMERY_A, &FieldElement::ZERO, eps_is_sq);
    let mut u = &d + &a_temp; /* d, or d+A if nonsquare */
    u.conditional_negate(!eps_is_sq); /* d, or -d-A if nonsquare */

    u
}

/// Determine in constant time whether `u` is the \\(u\\)-coordinate of
/// a point of order dividing 8.
pub(crate) fn is_small_order(u: &FieldElement) -> Choice {
    let bytes = u.as_bytes();
    SMALL_ORDER_U
        .iter()
        .fold(Choice::from(0), |acc, small| acc | bytes.ct_eq(small))
}

/// Decode a representative, ignoring its top bit, into the
/// \\(u\\)-coordinate of a curve point.
///
/// The result is `None` when that point has small order, which covers
/// the representatives \\(0\\) and \\(p\\) among others.
pub(crate) fn representative_to_point(representative: &[u8; 32]) -> CtOption<MontgomeryPoint> {
    let mut masked = *representative;
    masked[31] &= MASK_UNSET_BYTE;
    let r = FieldElement::from_bytes(&masked);

    let u = map_to_curve(&r);

    CtOption::new(MontgomeryPoint(u.as_bytes()), !is_small_order(&u))
}

/// Determines whether a point is encodable as a representative, and
/// computes \\(1 / \sqrt{-2u(u+A)}\\) along the way.  Approximately
/// 50% of points are not encodable.
#[inline]
fn encodability(u: &FieldElement, u_plus_a: &FieldElement) -> (Choice, FieldElement) {
    let two = &FieldElement::ONE + &FieldElement::ONE;
    let t = -&(&(u * u_plus_a) * &two); /* -2u(u+A) */

    t.invsqrt()
}

/// Map the curve point \\((u, v)\\) to a representative.
///
/// `v_is_high` selects between the two points sharing `u`: it is set
/// when \\(v > (p-1)/2\\).  The top bit of `tweak` is copied into bit
/// 255 of the output, which the direct map ignores.
///
/// # Returns
///
/// Either `None`, if the point couldn't be mapped, or `Some(bytes)`
/// such that `representative_to_point(&bytes)` is the point's \\(u\\).
pub(crate) fn point_to_representative(
    u: &FieldElement,
    v_is_high: Choice,
    tweak: u8,
) -> CtOption<[u8; 32]> {
    let u_plus_a = u + &MONTGOMERY_A;
    let (is_encodable, inv_sqrt) = encodability(u, &u_plus_a);

    // u / sqrt(-2u(u+A))     squares to -u / (2(u+A));
    // (u+A) / sqrt(-2u(u+A)) squares to -(u+A) / (2u).
    let numerator = FieldElement::conditional_select(u, &u_plus_a, v_is_high);
    let mut r = &numerator * &inv_sqrt;

    // If r > (p - 1) / 2, r := -r
    let r_is_high = r.is_high();
    r.conditional_negate(r_is_high);

    // pad with the bit from the tweak
    let mut representative = r.as_bytes();
    representative[31] |= tweak & MASK_SET_BYTE;

    CtOption::new(representative, is_encodable)
}

// ========================================================================
// Tests
// ========================================================================
